// src/entity/row.rs

use std::collections::BTreeMap;

/// One listing-table row: header text → cell text.
///
/// Missing keys read as empty strings; the builders treat an empty cell the
/// same as an unparseable one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    fields: BTreeMap<String, String>,
}

/// Key holding the row's detail-page link.
pub const URL: &str = "URL";
/// Key holding the listing tab the row came from.
pub const CATEGORY: &str = "category";

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    /// First non-empty value among `keys`.
    pub fn get_any(&self, keys: &[&str]) -> &str {
        keys.iter().map(|k| self.get(k)).find(|v| !v.is_empty()).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_empty() {
        let row: Row = [("Feat Name", "Alert"), ("Name", "")].into_iter().collect();
        assert_eq!(row.get("Feat Name"), "Alert");
        assert_eq!(row.get("URL"), "");
        assert_eq!(row.get_any(&["Name", "Feat Name"]), "Alert");
        assert!(row.contains("Name"));
    }
}
