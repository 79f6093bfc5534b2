use std::collections::HashSet;

use crate::json_writer::{JsonWriter, KeyAction};

/// Two distinct strings that normalized to the same key.
///
/// Only `value` survives in the output; `replaced` is silently lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub replaced: String,
    pub value: String,
}

/// Lowercase and turn every ASCII space into `_`. Nothing else is touched.
pub fn derive_key(text: &str) -> String {
    text.to_lowercase().replace(' ', "_")
}

/// Sort by code point. `String`'s byte order is the same thing for UTF-8.
pub fn sort_strings(strings: HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = strings.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Insert every string under its derived key, in the given order.
///
/// Later strings win on collision; each overwrite is returned so callers can
/// report it.
pub fn insert_all(strings: &[String], writer: &mut JsonWriter) -> Vec<KeyCollision> {
    let mut collisions = Vec::new();

    for text in strings {
        let key = derive_key(text);
        if let KeyAction::Replaced { previous } = writer.insert(key.clone(), text) {
            collisions.push(KeyCollision {
                key,
                replaced: previous,
                value: text.clone(),
            });
        }
    }

    collisions
}
