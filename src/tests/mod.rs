use super::*;
use serde_json::Value;

// Shared test helpers
fn opts() -> Options {
    Options::default()
}

fn patch_opts() -> Options {
    Options {
        engine: Engine::TextPatch,
        ..Default::default()
    }
}

fn features_of(n: usize) -> Value {
    let items: Vec<Value> = (0..n).map(|i| serde_json::json!({"id": i})).collect();
    serde_json::json!({"type": "FeatureCollection", "features": items})
}

mod errors;
mod file_operations;
mod text_patch;
