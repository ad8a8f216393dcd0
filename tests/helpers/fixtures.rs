// ABOUTME: Catalogue fixtures shared by the HTTP integration tests
// ABOUTME: Builds routers over fresh resources and posts entries through the API

use std::sync::Arc;

use axum::Router;
use cookbook_server::config::ServerConfig;
use cookbook_server::resources::ServerResources;
use cookbook_server::server::build_router;
use serde_json::{json, Value};

use super::axum_test::AxumTestRequest;

/// Fresh resources with default configuration and an empty catalogue
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(Arc::new(ServerConfig::default())))
}

/// Full application router, middleware included
pub fn app(resources: &Arc<ServerResources>) -> Router {
    build_router(Arc::clone(resources))
}

/// POST an entry and return the response status
pub async fn post_entry(resources: &Arc<ServerResources>, entry: &Value) -> u16 {
    AxumTestRequest::post("/entry")
        .json(entry)
        .send(app(resources))
        .await
        .status()
}

/// Ingredient entry body
pub fn ingredient(name: &str, cook_time: u64) -> Value {
    json!({ "type": "ingredient", "name": name, "cookTime": cook_time })
}

/// Recipe entry body from `(name, quantity)` pairs
#[allow(dead_code)]
pub fn recipe(name: &str, items: &[(&str, u64)]) -> Value {
    let required: Vec<Value> = items
        .iter()
        .map(|(item, quantity)| json!({ "name": item, "quantity": quantity }))
        .collect();
    json!({ "type": "recipe", "name": name, "requiredItems": required })
}

/// Seed the pancake catalogue: Egg(5), Flour(2), Batter, Pancake
#[allow(dead_code)]
pub async fn seed_pancakes(resources: &Arc<ServerResources>) {
    for entry in [
        ingredient("Egg", 5),
        ingredient("Flour", 2),
        recipe("Batter", &[("Egg", 2), ("Flour", 1)]),
        recipe("Pancake", &[("Batter", 3)]),
    ] {
        assert_eq!(post_entry(resources, &entry).await, 200, "seeding {entry}");
    }
}
