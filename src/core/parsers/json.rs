use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Reverse index over a nested locale file: translated text -> dotted key path.
#[derive(Debug, Default)]
pub struct LocaleIndex {
    by_value: HashMap<String, String>,
    key_count: usize,
}

impl LocaleIndex {
    /// Dotted path holding `text`, if any. When several paths hold the same
    /// text, the last one in document order is returned.
    pub fn find(&self, text: &str) -> Option<&str> {
        self.by_value.get(text).map(String::as_str)
    }

    /// Number of string leaves in the file, duplicates included.
    pub fn key_count(&self) -> usize {
        self.key_count
    }
}

pub fn parse_locale_file(path: &Path) -> Result<LocaleIndex> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(map) = json else {
        bail!("Root of JSON file must be an object: {}", path.display());
    };

    Ok(index_map(&map))
}

/// Read the values of a flat `key -> string` file, in file order.
pub fn read_flat_values(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let map: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    Ok(map
        .into_iter()
        .filter_map(|(_, value)| match value {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn index_map(map: &Map<String, Value>) -> LocaleIndex {
    let mut index = LocaleIndex::default();
    for (key, value) in map {
        flatten_json(value, key.clone(), &mut index);
    }
    index
}

fn flatten_json(value: &Value, prefix: String, index: &mut LocaleIndex) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, format!("{}.{}", prefix, key), index);
            }
        }
        Value::Array(items) => {
            for (i, val) in items.iter().enumerate() {
                flatten_json(val, format!("{}.{}", prefix, i), index);
            }
        }
        Value::String(s) => {
            index.by_value.insert(s.clone(), prefix);
            index.key_count += 1;
        }
        // Numbers, booleans and nulls are not translations.
        _ => {}
    }
}
