//! Indexed field maps: the `key:value:key:value` entity encoding.

use std::collections::HashMap;
use std::str::FromStr;

use crate::{Error, Result};

/// One entity's fields, keyed by their numeric index.
///
/// The servers identify fields by position-independent integer indexes, so an
/// entity like a user profile arrives as `1:RobTop:2:16:13:149`. Unknown
/// indexes are kept (callers ignore what they do not need), duplicate indexes
/// keep the last occurrence, which is what the game client does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedMap {
    fields: HashMap<u8, String>,
}

impl IndexedMap {
    /// Parse alternating index/value pairs separated by `delimiter`.
    ///
    /// Empty input yields an empty map. An odd number of fields or a
    /// non-numeric index is rejected; both are symptoms of a truncated or
    /// foreign payload.
    pub fn parse(raw: &str, delimiter: char) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let mut fields = HashMap::new();
        let mut parts = raw.split(delimiter);

        while let Some(key) = parts.next() {
            let value = parts.next().ok_or_else(|| Error::TrailingKey {
                key: key.to_string(),
            })?;
            let index: u8 = key.parse().map_err(|_| Error::InvalidIndex {
                index: key.to_string(),
            })?;
            fields.insert(index, value.to_string());
        }

        Ok(Self { fields })
    }

    /// Get a field value, if present.
    #[must_use]
    pub fn get(&self, index: u8) -> Option<&str> {
        self.fields.get(&index).map(String::as_str)
    }

    /// Get a required field value.
    pub fn require(&self, index: u8) -> Result<&str> {
        self.get(index).ok_or(Error::MissingField { index })
    }

    /// Get a required field parsed into `T`.
    pub fn require_parsed<T: FromStr>(&self, index: u8) -> Result<T> {
        let value = self.require(index)?;
        value
            .parse()
            .map_err(|_| Error::invalid_field(index, value))
    }

    /// Get an optional field parsed into `T`, using `T::default()` when the
    /// field is absent or empty. Present but unparseable values are still an
    /// error.
    pub fn parsed_or_default<T: FromStr + Default>(&self, index: u8) -> Result<T> {
        match self.get(index) {
            None | Some("") => Ok(T::default()),
            Some(value) => value
                .parse()
                .map_err(|_| Error::invalid_field(index, value)),
        }
    }

    /// Get an optional field as an owned string, empty when absent.
    #[must_use]
    pub fn get_or_default(&self, index: u8) -> String {
        self.get(index).unwrap_or_default().to_string()
    }

    /// Number of fields in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a list payload into entity segments, skipping empty ones.
///
/// The servers separate entities with `|` in most list responses and drop a
/// trailing separator inconsistently, so empty segments are not an error.
#[must_use]
pub fn split_entities(raw: &str, separator: char) -> Vec<&str> {
    raw.split(separator).filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_basic_map() {
        let map = IndexedMap::parse("1:RobTop:2:16:13:149", ':').unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.require(1).unwrap(), "RobTop");
        assert_eq!(map.require_parsed::<u64>(2).unwrap(), 16);
        assert_eq!(map.require_parsed::<u32>(13).unwrap(), 149);
    }

    #[test]
    fn test_parse_empty_input() {
        let map = IndexedMap::parse("", ':').unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_empty_values() {
        let map = IndexedMap::parse("1::2:x", ':').unwrap();
        assert_eq!(map.require(1).unwrap(), "");
        assert_eq!(map.require(2).unwrap(), "x");
    }

    #[test]
    fn test_parse_rejects_odd_field_count() {
        let err = IndexedMap::parse("1:a:2", ':').unwrap_err();
        assert_eq!(
            err,
            Error::TrailingKey {
                key: "2".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_index() {
        let err = IndexedMap::parse("1:a:x:b", ':').unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIndex {
                index: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_custom_delimiter() {
        // User list entries use `~` internally on some private servers; the
        // delimiter is a parameter rather than a constant.
        let map = IndexedMap::parse("1~name~2~42", '~').unwrap();
        assert_eq!(map.require(1).unwrap(), "name");
    }

    #[test]
    fn test_duplicate_index_keeps_last() {
        let map = IndexedMap::parse("1:first:1:second", ':').unwrap();
        assert_eq!(map.require(1).unwrap(), "second");
    }

    #[test]
    fn test_require_missing_field() {
        let map = IndexedMap::parse("1:a", ':').unwrap();
        assert_eq!(map.require(2).unwrap_err(), Error::MissingField { index: 2 });
    }

    #[test]
    fn test_require_parsed_rejects_non_numeric() {
        let map = IndexedMap::parse("2:abc", ':').unwrap();
        let err = map.require_parsed::<u64>(2).unwrap_err();
        assert_eq!(err, Error::invalid_field(2, "abc"));
    }

    #[test]
    fn test_parsed_or_default() {
        let map = IndexedMap::parse("3:7:4:", ':').unwrap();
        assert_eq!(map.parsed_or_default::<u32>(3).unwrap(), 7);
        // Empty value falls back to default
        assert_eq!(map.parsed_or_default::<u32>(4).unwrap(), 0);
        // Absent field falls back to default
        assert_eq!(map.parsed_or_default::<u32>(9).unwrap(), 0);
    }

    #[test]
    fn test_split_entities() {
        assert_eq!(split_entities("a|b|c", '|'), vec!["a", "b", "c"]);
        assert_eq!(split_entities("a||c|", '|'), vec!["a", "c"]);
        assert!(split_entities("", '|').is_empty());
    }
}
