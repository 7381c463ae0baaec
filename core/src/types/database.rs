//! Dictionaries served by `/database/*`.

use serde::{Deserialize, Serialize};

/// A code/name pair, e.g. `{"code": "ru", "name": "Россия"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryEntry {
    pub code: String,
    pub name: String,
}

pub type Country = DictionaryEntry;
pub type Category = DictionaryEntry;
pub type Language = DictionaryEntry;
