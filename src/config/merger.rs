//! Deep merge for layered YAML configuration.
//!
//! `.stackname/config.local.yml` is merged over `.stackname/config.yml`:
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely
//! - `null` in the overlay deletes the key
//! - Scalars in the overlay replace the base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order (first is base, last has highest priority).
///
/// Empty documents (`null`) are skipped rather than wiping earlier layers.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}
