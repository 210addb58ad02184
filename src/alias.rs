//! Friendly names for physical outputs.
//!
//! ```yaml
//! aliases:
//!   laptop: eDP-1
//!   desk: DP-1-2
//! ```
//!
//! Aliasing is optional: any name that is not in the table is used as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from logical name to physical output name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aliases(BTreeMap<String, String>);

impl Aliases {
    /// Resolve `name` to a physical output name, or return it unchanged.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.0.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Alias names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Aliases {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_alias_resolves() {
        let aliases: Aliases = [("laptop", "eDP-1")].into_iter().collect();
        assert_eq!(aliases.resolve("laptop"), "eDP-1");
    }

    #[test]
    fn unknown_name_is_identity() {
        let aliases: Aliases = [("laptop", "eDP-1")].into_iter().collect();
        for name in ["eDP-1", "HDMI-1", "", "Laptop", "laptop "] {
            assert_eq!(aliases.resolve(name), name);
        }
        assert_eq!(Aliases::default().resolve("DP-1"), "DP-1");
    }

    #[test]
    fn names_are_sorted() {
        let aliases: Aliases = [("tv", "HDMI-1"), ("desk", "DP-1"), ("laptop", "eDP-1")]
            .into_iter()
            .collect();
        assert_eq!(aliases.names().collect::<Vec<_>>(), vec!["desk", "laptop", "tv"]);
    }

    #[test]
    fn deserializes_from_plain_map() {
        let aliases: Aliases = serde_yaml::from_str("laptop: eDP-1\ntv: HDMI-1\n").unwrap();
        assert_eq!(aliases.resolve("tv"), "HDMI-1");
    }
}
