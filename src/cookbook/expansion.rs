// ABOUTME: Recipe expansion engine flattening nested recipes into ingredient totals
// ABOUTME: Detects cyclic composition, then folds memoized sub-recipe totals in post-order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Expansion
//!
//! Summarizing a recipe happens in two passes over the catalogue:
//!
//! 1. **Resolve**: an iterative three-colour depth-first walk from the root
//!    recipe collects every reachable entity into a snapshot, failing on
//!    dangling references, cycles, or nesting deeper than an optional limit.
//!    Recipes are recorded in post-order, so every recipe appears after all
//!    the recipes it requires.
//! 2. **Fold**: each recipe's standalone totals are computed once, in that
//!    post-order, from its ingredients and the already computed totals of its
//!    sub-recipes scaled by the required quantity. Shared sub-recipes
//!    (diamonds) cost one computation no matter how many paths reach them.
//!
//! Because both passes read only the snapshot, a summary never mixes entries
//! inserted while it was running.

use cookbook_core::errors::CookbookError;
use cookbook_core::models::{Entity, Recipe, RecipeSummary};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

use super::store::EntityStore;

/// Bounds applied while expanding a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionLimits {
    /// Maximum number of nested recipes on any path from the root, root
    /// included; `None` allows any depth
    pub max_depth: Option<usize>,
}

impl ExpansionLimits {
    /// No nesting bound; cycles are still rejected
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_depth: None }
    }

    /// Reject recipes nested deeper than `max_depth`
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

/// Summarize a recipe with the default limits
///
/// # Errors
///
/// See [`summarize_with_limits`].
pub fn summarize(store: &EntityStore, recipe_key: &str) -> Result<RecipeSummary, CookbookError> {
    summarize_with_limits(store, recipe_key, ExpansionLimits::default())
}

/// Flatten a recipe into its total cook time and per-ingredient quantities
///
/// # Errors
///
/// - [`CookbookError::UnknownEntry`] if `recipe_key` is not in the catalogue
/// - [`CookbookError::NotARecipe`] if it names an ingredient
/// - [`CookbookError::MissingReference`] if any reachable requirement is absent
/// - [`CookbookError::CyclicComposition`] if a recipe transitively requires itself
/// - [`CookbookError::ExpansionTooDeep`] if nesting exceeds `limits.max_depth`
/// - [`CookbookError::QuantityOverflow`] if totals exceed `u64`
pub fn summarize_with_limits(
    store: &EntityStore,
    recipe_key: &str,
    limits: ExpansionLimits,
) -> Result<RecipeSummary, CookbookError> {
    let root = store
        .get(recipe_key)
        .ok_or_else(|| CookbookError::UnknownEntry {
            name: recipe_key.to_owned(),
        })?;
    let Some(recipe) = root.as_recipe() else {
        return Err(CookbookError::NotARecipe {
            name: recipe_key.to_owned(),
        });
    };

    let resolved = resolve(store, recipe_key, &root, limits)?;
    let totals = fold(&resolved, recipe_key)?;

    debug!(
        recipe = %recipe_key,
        resolved_entries = resolved.snapshot.len(),
        resolved_recipes = resolved.post_order.len(),
        distinct_ingredients = totals.counts.len(),
        cook_time = totals.cook_time,
        "Recipe expanded"
    );

    Ok(RecipeSummary::from_counts(
        recipe.name.clone(),
        totals.cook_time,
        totals.counts,
    ))
}

/// Every entity reachable from a root recipe, keyed by raw name
type Snapshot = HashMap<String, Arc<Entity>>;

struct Resolved {
    snapshot: Snapshot,
    /// Raw keys of reachable recipes, each after every recipe it requires
    post_order: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    OnPath,
    Finished,
}

struct Frame {
    key: String,
    entity: Arc<Entity>,
    next: usize,
}

fn resolve(
    store: &EntityStore,
    root_key: &str,
    root: &Arc<Entity>,
    limits: ExpansionLimits,
) -> Result<Resolved, CookbookError> {
    let mut snapshot = Snapshot::new();
    let mut post_order = Vec::new();
    let mut colours: HashMap<String, Colour> = HashMap::new();
    let mut path = vec![Frame {
        key: root_key.to_owned(),
        entity: Arc::clone(root),
        next: 0,
    }];

    snapshot.insert(root_key.to_owned(), Arc::clone(root));
    colours.insert(root_key.to_owned(), Colour::OnPath);

    while let Some(frame) = path.last_mut() {
        let Some(item) = frame.entity.required_items().get(frame.next) else {
            colours.insert(frame.key.clone(), Colour::Finished);
            post_order.push(frame.key.clone());
            path.pop();
            continue;
        };
        frame.next += 1;

        let child = store
            .get(&item.name)
            .ok_or_else(|| CookbookError::MissingReference {
                recipe: frame.key.clone(),
                item: item.name.clone(),
            })?;
        let child_key = item.name.clone();

        snapshot
            .entry(child_key.clone())
            .or_insert_with(|| Arc::clone(&child));

        if child.as_recipe().is_none() {
            continue;
        }

        match colours.get(&child_key).copied() {
            Some(Colour::Finished) => {}
            Some(Colour::OnPath) => return Err(cycle_error(&path, child_key)),
            None => {
                if let Some(max_depth) = limits.max_depth {
                    if path.len() >= max_depth {
                        return Err(CookbookError::ExpansionTooDeep { max_depth });
                    }
                }
                colours.insert(child_key.clone(), Colour::OnPath);
                path.push(Frame {
                    key: child_key,
                    entity: child,
                    next: 0,
                });
            }
        }
    }

    Ok(Resolved {
        snapshot,
        post_order,
    })
}

fn cycle_error(path: &[Frame], repeated: String) -> CookbookError {
    let start = path
        .iter()
        .position(|frame| frame.key == repeated)
        .unwrap_or(0);
    let mut cycle: Vec<String> = path[start..].iter().map(|frame| frame.key.clone()).collect();
    cycle.push(repeated);
    CookbookError::CyclicComposition { path: cycle }
}

/// Standalone totals for one unit of a recipe
#[derive(Debug, Default)]
struct Totals {
    counts: BTreeMap<String, u64>,
    cook_time: u64,
}

impl Totals {
    fn add_ingredient(&mut self, name: &str, cook_time: u64, quantity: u64) -> Option<()> {
        let count = self.counts.entry(name.to_owned()).or_insert(0);
        *count = count.checked_add(quantity)?;
        self.cook_time = cook_time
            .checked_mul(quantity)
            .and_then(|added| self.cook_time.checked_add(added))?;
        Some(())
    }

    fn add_scaled(&mut self, other: &Self, quantity: u64) -> Option<()> {
        for (name, count) in &other.counts {
            let scaled = count.checked_mul(quantity)?;
            let entry = self.counts.entry(name.clone()).or_insert(0);
            *entry = entry.checked_add(scaled)?;
        }
        self.cook_time = other
            .cook_time
            .checked_mul(quantity)
            .and_then(|added| self.cook_time.checked_add(added))?;
        Some(())
    }
}

/// Compute every resolved recipe's totals in post-order and return the root's
fn fold(resolved: &Resolved, root_key: &str) -> Result<Totals, CookbookError> {
    let mut memo: HashMap<&str, Totals> = HashMap::with_capacity(resolved.post_order.len());

    for key in &resolved.post_order {
        let Some(recipe) = resolved.snapshot.get(key).and_then(|entity| entity.as_recipe())
        else {
            continue;
        };
        let totals = recipe_totals(resolved, &memo, key, recipe, root_key)?;
        memo.insert(key.as_str(), totals);
    }

    memo.remove(root_key).ok_or_else(|| CookbookError::UnknownEntry {
        name: root_key.to_owned(),
    })
}

fn recipe_totals(
    resolved: &Resolved,
    memo: &HashMap<&str, Totals>,
    key: &str,
    recipe: &Recipe,
    root_key: &str,
) -> Result<Totals, CookbookError> {
    let overflow = || CookbookError::QuantityOverflow {
        recipe: root_key.to_owned(),
    };
    let mut totals = Totals::default();

    for item in &recipe.required_items {
        let missing = || CookbookError::MissingReference {
            recipe: key.to_owned(),
            item: item.name.clone(),
        };
        match resolved
            .snapshot
            .get(&item.name)
            .map(Arc::as_ref)
            .ok_or_else(missing)?
        {
            Entity::Ingredient(ingredient) => totals
                .add_ingredient(&ingredient.name, ingredient.cook_time, item.quantity)
                .ok_or_else(overflow)?,
            Entity::Recipe(_) => {
                let child = memo.get(item.name.as_str()).ok_or_else(missing)?;
                totals.add_scaled(child, item.quantity).ok_or_else(overflow)?;
            }
        }
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookbook::validation::create_entry;
    use serde_json::json;
    use std::time::{Duration, Instant};

    fn add_ingredient(store: &EntityStore, name: &str, cook_time: u64) {
        create_entry(
            store,
            &json!({ "type": "ingredient", "name": name, "cookTime": cook_time }),
        )
        .unwrap();
    }

    fn add_recipe(store: &EntityStore, name: &str, items: &[(&str, u64)]) {
        let required_items: Vec<_> = items
            .iter()
            .map(|(name, quantity)| json!({ "name": name, "quantity": quantity }))
            .collect();
        create_entry(
            store,
            &json!({ "type": "recipe", "name": name, "requiredItems": required_items }),
        )
        .unwrap();
    }

    fn pancake_store() -> EntityStore {
        let store = EntityStore::new();
        add_ingredient(&store, "Egg", 5);
        add_ingredient(&store, "Flour", 2);
        add_recipe(&store, "Batter", &[("Egg", 2), ("Flour", 1)]);
        add_recipe(&store, "Pancake", &[("Batter", 3)]);
        store
    }

    #[test]
    fn test_pancake_expansion() {
        let summary = summarize(&pancake_store(), "Pancake").unwrap();

        assert_eq!(summary.name, "Pancake");
        assert_eq!(summary.cook_time, 36);
        assert_eq!(
            serde_json::to_value(&summary.ingredients).unwrap(),
            json!([{ "name": "Egg", "quantity": 6 }, { "name": "Flour", "quantity": 3 }])
        );
    }

    #[test]
    fn test_expansion_is_linear_in_parent_quantity() {
        let store = pancake_store();
        add_recipe(&store, "Stack", &[("Pancake", 4)]);

        let pancake = summarize(&store, "Pancake").unwrap();
        let stack = summarize(&store, "Stack").unwrap();

        assert_eq!(stack.cook_time, 4 * pancake.cook_time);
        for ingredient in &pancake.ingredients {
            assert_eq!(
                stack.quantity_of(&ingredient.name),
                Some(4 * ingredient.quantity)
            );
        }
    }

    #[test]
    fn test_shared_sub_recipe_is_counted_on_every_path() {
        let store = EntityStore::new();
        add_ingredient(&store, "Salt", 1);
        add_recipe(&store, "Brine", &[("Salt", 2)]);
        add_recipe(&store, "Pickles", &[("Brine", 1)]);
        add_recipe(&store, "Olives", &[("Brine", 3)]);
        add_recipe(&store, "Platter", &[("Pickles", 1), ("Olives", 1), ("Salt", 1)]);

        let summary = summarize(&store, "Platter").unwrap();
        assert_eq!(summary.quantity_of("Salt"), Some(2 + 6 + 1));
        assert_eq!(summary.cook_time, 9);
    }

    #[test]
    fn test_ingredients_sorted_by_display_name() {
        let store = EntityStore::new();
        add_ingredient(&store, "zucchini", 1);
        add_ingredient(&store, "apple", 1);
        add_recipe(&store, "Salad", &[("zucchini", 1), ("apple", 2)]);

        let summary = summarize(&store, "Salad").unwrap();
        let names: Vec<_> = summary.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Zucchini"]);
    }

    #[test]
    fn test_summary_reports_display_name_of_raw_key() {
        let store = EntityStore::new();
        add_ingredient(&store, "tomato_sauce", 3);
        add_recipe(&store, "spaghetti-2", &[("tomato_sauce", 2)]);

        assert!(summarize(&store, "Spaghetti").is_err());
        let summary = summarize(&store, "spaghetti-2").unwrap();
        assert_eq!(summary.name, "Spaghetti");
        assert_eq!(summary.quantity_of("Tomato Sauce"), Some(2));
    }

    #[test]
    fn test_recipe_without_requirements_is_empty() {
        let store = EntityStore::new();
        add_recipe(&store, "Air", &[]);

        let summary = summarize(&store, "Air").unwrap();
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn test_missing_reference_rejects() {
        let store = EntityStore::new();
        add_recipe(&store, "Soup", &[("Stock", 1)]);

        assert_eq!(
            summarize(&store, "Soup").unwrap_err(),
            CookbookError::MissingReference {
                recipe: "Soup".into(),
                item: "Stock".into()
            }
        );
    }

    #[test]
    fn test_nested_missing_reference_rejects() {
        let store = pancake_store();
        add_recipe(&store, "Breakfast", &[("Pancake", 1), ("Syrup", 1)]);
        assert!(matches!(
            summarize(&store, "Breakfast"),
            Err(CookbookError::MissingReference { .. })
        ));
    }

    #[test]
    fn test_ingredient_or_unknown_root_rejects() {
        let store = pancake_store();
        assert_eq!(
            summarize(&store, "Egg").unwrap_err(),
            CookbookError::NotARecipe { name: "Egg".into() }
        );
        assert_eq!(
            summarize(&store, "Waffle").unwrap_err(),
            CookbookError::UnknownEntry {
                name: "Waffle".into()
            }
        );
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let store = EntityStore::new();
        add_recipe(&store, "Ouroboros", &[("Ouroboros", 1)]);

        assert_eq!(
            summarize(&store, "Ouroboros").unwrap_err(),
            CookbookError::CyclicComposition {
                path: vec!["Ouroboros".into(), "Ouroboros".into()]
            }
        );
    }

    #[test]
    fn test_indirect_cycle_reports_path() {
        let store = EntityStore::new();
        add_ingredient(&store, "Water", 0);
        add_recipe(&store, "Dough", &[("Water", 1), ("Starter", 1)]);
        add_recipe(&store, "Starter", &[("Dough", 1)]);
        add_recipe(&store, "Bread", &[("Dough", 2)]);

        assert_eq!(
            summarize(&store, "Bread").unwrap_err(),
            CookbookError::CyclicComposition {
                path: vec!["Dough".into(), "Starter".into(), "Dough".into()]
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let store = EntityStore::new();
        add_ingredient(&store, "Seed", 1);
        add_recipe(&store, "Level0", &[("Seed", 1)]);
        for level in 1..5 {
            let child = format!("Level{}", level - 1);
            add_recipe(&store, &format!("Level{level}"), &[(child.as_str(), 1)]);
        }

        let tight = ExpansionLimits::with_max_depth(4);
        assert_eq!(
            summarize_with_limits(&store, "Level4", tight).unwrap_err(),
            CookbookError::ExpansionTooDeep { max_depth: 4 }
        );

        let loose = ExpansionLimits::with_max_depth(5);
        let summary = summarize_with_limits(&store, "Level4", loose).unwrap();
        assert_eq!(summary.quantity_of("Seed"), Some(1));
    }

    #[test]
    fn test_deep_chain_expands_without_a_limit() {
        let store = EntityStore::new();
        add_ingredient(&store, "Seed", 1);
        add_recipe(&store, "Level0", &[("Seed", 1)]);
        for level in 1..100 {
            let child = format!("Level{}", level - 1);
            add_recipe(&store, &format!("Level{level}"), &[(child.as_str(), 1)]);
        }

        assert_eq!(ExpansionLimits::default(), ExpansionLimits::unlimited());
        let summary = summarize(&store, "Level99").unwrap();
        assert_eq!(summary.quantity_of("Seed"), Some(1));
        assert_eq!(summary.cook_time, 1);
    }

    #[test]
    fn test_diamond_layers_expand_in_linear_time() {
        // Every layer doubles the number of root-to-leaf paths: 2^40 in total.
        const LAYERS: usize = 40;
        let store = EntityStore::new();
        add_ingredient(&store, "Salt", 1);
        add_recipe(&store, "Left0", &[("Salt", 1)]);
        add_recipe(&store, "Right0", &[("Salt", 1)]);
        for layer in 1..LAYERS {
            let left = format!("Left{}", layer - 1);
            let right = format!("Right{}", layer - 1);
            let items = [(left.as_str(), 1), (right.as_str(), 1)];
            add_recipe(&store, &format!("Left{layer}"), &items);
            add_recipe(&store, &format!("Right{layer}"), &items);
        }

        let started = Instant::now();
        let summary = summarize(&store, &format!("Left{}", LAYERS - 1)).unwrap();

        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(summary.quantity_of("Salt"), Some(1 << (LAYERS - 1)));
        assert_eq!(summary.cook_time, 1 << (LAYERS - 1));
    }

    #[test]
    fn test_quantity_overflow_is_reported() {
        let store = EntityStore::new();
        add_ingredient(&store, "Grain", 1);
        add_recipe(&store, "Sack", &[("Grain", u64::MAX)]);
        add_recipe(&store, "Silo", &[("Sack", 2)]);

        assert_eq!(
            summarize(&store, "Silo").unwrap_err(),
            CookbookError::QuantityOverflow {
                recipe: "Silo".into()
            }
        );
    }
}
