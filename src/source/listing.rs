//! listing.json parsing

use crate::{PockitError, Result};
use serde_json::Value;

/// One app advertised by a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Display name, used as the menu label
    pub name: String,

    /// Payload path relative to the repository base URL
    pub path: String,
}

/// Parsed repository manifest, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<ListingEntry>,
}

impl Listing {
    /// Parse a listing document
    ///
    /// The document must be a JSON object whose values are strings. Key
    /// order is kept as written.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;

        let Value::Object(map) = value else {
            return Err(PockitError::Parse(
                "listing must be a JSON object of name -> path".to_string(),
            ));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, path) in map {
            match path {
                Value::String(path) => entries.push(ListingEntry { name, path }),
                other => {
                    return Err(PockitError::Parse(format!(
                        "path for '{}' must be a string, got {}",
                        name, other
                    )))
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Listing {
    type Item = ListingEntry;
    type IntoIter = std::vec::IntoIter<ListingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
