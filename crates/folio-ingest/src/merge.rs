//! Profile merging
//!
//! Deep merge over JSON values: objects recurse key by key, and any other
//! value from the new side replaces the base unless it is blank (`null`,
//! `""`, `[]` or `{}`). Sequences therefore replace wholesale or not at all.

use serde_json::{Map, Value};

use crate::profile::Profile;

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Layer `new` over `base`.
pub fn merge_values(base: &Value, new: &Value) -> Value {
    match (base, new) {
        (Value::Object(base_map), Value::Object(new_map)) => {
            let mut merged: Map<String, Value> = base_map.clone();
            for (key, new_value) in new_map {
                let value = match base_map.get(key) {
                    Some(base_value) => merge_values(base_value, new_value),
                    None => new_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        (_, new) if is_blank(new) => base.clone(),
        (_, new) => new.clone(),
    }
}

/// Layer a profile-shaped JSON value over `base` and recompute analytics.
///
/// Current positions that are not part of the merged career are dropped, so
/// a replaced career never keeps the base's current positions.
pub fn merge_value_into(base: &Profile, new: &Value) -> Result<Profile, serde_json::Error> {
    let merged = merge_values(&serde_json::to_value(base)?, new);
    let mut profile: Profile = serde_json::from_value(merged)?;
    profile
        .positions_current
        .retain(|position| profile.career.contains(position));
    profile.refresh_analytics();
    Ok(profile)
}

/// Layer `new` over `base`; non-empty fields of `new` win.
pub fn merge_profiles(base: &Profile, new: &Profile) -> Result<Profile, serde_json::Error> {
    merge_value_into(base, &serde_json::to_value(new)?)
}
