//! Airline identifier to display-name directory.

use std::collections::HashMap;

use serde::Deserialize;

/// One record of the airline-directory endpoint.
#[derive(Debug, Deserialize)]
pub struct AirlineEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Read-only mapping from airline identifier to display name,
/// fetched once per invocation.
#[derive(Debug, Default)]
pub struct AirlineDirectory {
    names: HashMap<String, String>,
}

impl AirlineDirectory {
    /// Build a directory from the raw endpoint entries. Entries without a
    /// name are skipped; lookups for them fall back like unknown ids.
    pub fn from_entries(entries: Vec<AirlineEntry>) -> Self {
        let names = entries
            .into_iter()
            .filter_map(|entry| entry.name.map(|name| (entry.id, name)))
            .collect();
        Self { names }
    }

    /// Look up the display name for an airline identifier.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_known_id() {
        let entries: Vec<AirlineEntry> =
            serde_json::from_str(r#"[{"id": "FR", "name": "Ryanair"}, {"id": "U2", "name": "easyJet"}]"#)
                .unwrap();
        let directory = AirlineDirectory::from_entries(entries);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.name("FR"), Some("Ryanair"));
    }

    #[test]
    fn lookup_misses_unknown_id() {
        let directory = AirlineDirectory::default();
        assert!(directory.is_empty());
        assert_eq!(directory.name("ZZ"), None);
    }

    #[test]
    fn nameless_entries_are_skipped() {
        let entries: Vec<AirlineEntry> =
            serde_json::from_str(r#"[{"id": "FR"}, {"id": "U2", "name": "easyJet"}]"#).unwrap();
        let directory = AirlineDirectory::from_entries(entries);
        assert_eq!(directory.name("FR"), None);
        assert_eq!(directory.name("U2"), Some("easyJet"));
    }
}
