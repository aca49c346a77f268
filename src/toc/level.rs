use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::error::IndexError;

/// A heading level that can take part in the table of contents.
///
/// `h1` is intentionally absent: it is reserved for the page title and never
/// indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Every selectable level, outermost first
    pub const ALL: [HeadingLevel; 5] = [
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Lowercase tag name, e.g. `h3`
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    /// Numeric depth (2..=6)
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HeadingLevel {
    type Err = IndexError;

    /// Accepts `h2`, `H2` or a bare `2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let digits = token.strip_prefix('h').unwrap_or(&token);
        match digits {
            "2" => Ok(HeadingLevel::H2),
            "3" => Ok(HeadingLevel::H3),
            "4" => Ok(HeadingLevel::H4),
            "5" => Ok(HeadingLevel::H5),
            "6" => Ok(HeadingLevel::H6),
            _ => Err(IndexError::Level(s.to_string())),
        }
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// The set of heading levels chosen for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingSelection {
    levels: BTreeSet<HeadingLevel>,
}

impl HeadingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from user-supplied tokens.
    ///
    /// Tokens that are not a selectable level are logged and skipped, so a
    /// selection made only of unknown tokens is empty and indexes nothing.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for token in tokens {
            match token.as_ref().parse::<HeadingLevel>() {
                Ok(level) => selection.insert(level),
                Err(e) => warn!("Ignoring heading level: {}", e),
            }
        }
        selection
    }

    /// Parse a comma separated list such as `h2,h3`, rejecting unknown tokens
    pub fn parse_list(list: &str) -> Result<Self, IndexError> {
        let mut selection = Self::new();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            selection.insert(token.parse()?);
        }
        Ok(selection)
    }

    pub fn insert(&mut self, level: HeadingLevel) {
        self.levels.insert(level);
    }

    pub fn contains(&self, level: HeadingLevel) -> bool {
        self.levels.contains(&level)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Selected levels in ascending order
    pub fn iter(&self) -> impl Iterator<Item = HeadingLevel> + '_ {
        self.levels.iter().copied()
    }
}

impl FromIterator<HeadingLevel> for HeadingSelection {
    fn from_iter<I: IntoIterator<Item = HeadingLevel>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for HeadingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.iter().map(HeadingLevel::tag).collect();
        f.write_str(&tags.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_tokens() {
        assert_eq!("h2".parse::<HeadingLevel>().unwrap(), HeadingLevel::H2);
        assert_eq!("H4".parse::<HeadingLevel>().unwrap(), HeadingLevel::H4);
        assert_eq!(" 6 ".parse::<HeadingLevel>().unwrap(), HeadingLevel::H6);
    }

    #[test]
    fn test_h1_is_not_selectable() {
        assert!("h1".parse::<HeadingLevel>().is_err());
        assert!("h7".parse::<HeadingLevel>().is_err());
        assert!("heading".parse::<HeadingLevel>().is_err());
    }

    #[test]
    fn test_from_tokens_skips_unknown() {
        let selection = HeadingSelection::from_tokens(["H2", "h1", "bogus", "h5"]);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(HeadingLevel::H2));
        assert!(selection.contains(HeadingLevel::H5));

        assert!(HeadingSelection::from_tokens(["h1"]).is_empty());
    }

    #[test]
    fn test_parse_list() {
        let selection = HeadingSelection::parse_list("h3, h2,,").unwrap();
        assert_eq!(selection.to_string(), "h2,h3");
        assert!(HeadingSelection::parse_list("h2,h1").is_err());
    }

    #[test]
    fn test_level_serde() {
        let levels: Vec<HeadingLevel> = serde_yaml::from_str("[h2, H3]").unwrap();
        assert_eq!(levels, vec![HeadingLevel::H2, HeadingLevel::H3]);
        assert_eq!(serde_json::to_string(&HeadingLevel::H6).unwrap(), "\"h6\"");
    }
}
