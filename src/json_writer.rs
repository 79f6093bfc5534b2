use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Action taken on a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    /// The key already held a value, which was overwritten.
    Replaced { previous: String },
}

/// Writer for a flat key-to-string JSON file.
///
/// The file is always rebuilt from scratch: whatever is on disk is
/// overwritten by `save`. Keys keep their first insertion position.
pub struct JsonWriter {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl JsonWriter {
    pub fn create(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
            data: Map::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set `key` to `value`. Dots in the key are kept literally.
    pub fn insert(&mut self, key: String, value: &str) -> KeyAction {
        match self.data.insert(key, Value::String(value.to_string())) {
            Some(Value::String(previous)) => KeyAction::Replaced { previous },
            Some(other) => KeyAction::Replaced {
                previous: other.to_string(),
            },
            None => KeyAction::Added,
        }
    }

    /// Render with 2-space indentation, unescaped Unicode, and a trailing newline.
    pub fn render(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.file_path, self.render()?)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}
