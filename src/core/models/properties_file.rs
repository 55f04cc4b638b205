use std::path::PathBuf;

/// A single key-value entry in a properties file.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub key: String,
    pub value: String,
    pub line_number: usize,
}

/// Represents any line in a properties file.
///
/// Keeping comments and blank lines around (rather than just a map)
/// preserves line numbers for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// A key-value entry.
    Entry(PropertyEntry),
    /// A comment line (`# ...` or `! ...`).
    Comment(String),
    /// An empty or whitespace-only line.
    Blank,
}

/// A parsed properties file (e.g. `.env` at the project root).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertiesFile {
    pub lines: Vec<Line>,
    pub source_path: Option<PathBuf>,
}

impl PropertiesFile {
    /// An empty mapping, used when the source file does not exist.
    pub fn empty() -> Self {
        PropertiesFile {
            lines: Vec::new(),
            source_path: None,
        }
    }

    /// Returns the value for the given key, if present.
    ///
    /// Duplicate keys follow properties-file semantics: the last
    /// occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .filter(|e| e.key == key)
            .last()
            .map(|e| e.value.as_str())
    }

    /// Returns all distinct keys, in first-seen order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for entry in self.entries() {
            if !keys.contains(&entry.key.as_str()) {
                keys.push(entry.key.as_str());
            }
        }
        keys
    }

    /// Iterates over only the key-value entries, skipping comments and blanks.
    pub fn entries(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry(entry) => Some(entry),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str, line_number: usize) -> Line {
        Line::Entry(PropertyEntry {
            key: key.to_string(),
            value: value.to_string(),
            line_number,
        })
    }

    #[test]
    fn get_returns_value() {
        let file = PropertiesFile {
            lines: vec![entry("A", "1", 1), entry("B", "2", 2)],
            source_path: None,
        };

        assert_eq!(file.get("A"), Some("1"));
        assert_eq!(file.get("B"), Some("2"));
        assert_eq!(file.get("C"), None);
    }

    #[test]
    fn duplicate_key_last_occurrence_wins() {
        let file = PropertiesFile {
            lines: vec![entry("KEY", "first", 1), entry("KEY", "second", 2)],
            source_path: None,
        };

        assert_eq!(file.get("KEY"), Some("second"));
    }

    #[test]
    fn keys_are_distinct_in_first_seen_order() {
        let file = PropertiesFile {
            lines: vec![
                entry("B", "1", 1),
                entry("A", "2", 2),
                entry("B", "3", 3),
            ],
            source_path: None,
        };

        assert_eq!(file.keys(), vec!["B", "A"]);
    }

    #[test]
    fn empty_mapping_has_no_keys() {
        let file = PropertiesFile::empty();

        assert!(file.keys().is_empty());
        assert_eq!(file.get("ANYTHING"), None);
    }
}
