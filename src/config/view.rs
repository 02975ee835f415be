//! View composition: values plus an environment snapshot

use serde_json::{Map, Value as JsonValue};

use super::env::EnvSource;

/// Key under which the environment snapshot is placed
pub const ENV_KEY: &str = "env";

/// Build the view from a values mapping and an environment source.
///
/// The `env` key always holds the environment snapshot, replacing any `env`
/// the values file defined.
pub fn build_view(mut values: Map<String, JsonValue>, env: &dyn EnvSource) -> JsonValue {
    let snapshot: Map<String, JsonValue> = env
        .vars()
        .into_iter()
        .map(|(k, v)| (k, JsonValue::String(v)))
        .collect();
    values.insert(ENV_KEY.to_string(), JsonValue::Object(snapshot));
    JsonValue::Object(values)
}
