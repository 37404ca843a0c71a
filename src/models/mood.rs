//! Mood labels attached to every expense
//!
//! The common moods get their own variants so filters and insights can
//! match them regardless of how the user capitalized them. Anything else is
//! kept verbatim in `Other`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Calm,
    Stressed,
    Sad,
    Anxious,
    Excited,
    Bored,
    Other(String),
}

impl Mood {
    /// Moods offered by the CLI help text
    pub const KNOWN: [Mood; 7] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Stressed,
        Mood::Sad,
        Mood::Anxious,
        Mood::Excited,
        Mood::Bored,
    ];

    /// Canonical label used for storage, grouping and display
    pub fn label(&self) -> &str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Excited => "Excited",
            Mood::Bored => "Bored",
            Mood::Other(label) => label,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mood label is blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyMoodError;

impl fmt::Display for EmptyMoodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mood must not be empty")
    }
}

impl std::error::Error for EmptyMoodError {}

impl FromStr for Mood {
    type Err = EmptyMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyMoodError);
        }

        let known = Mood::KNOWN
            .iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(s))
            .cloned();
        Ok(known.unwrap_or_else(|| Mood::Other(s.to_string())))
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_is_case_insensitive() {
        assert_eq!("stressed".parse::<Mood>().unwrap(), Mood::Stressed);
        assert_eq!(" CALM ".parse::<Mood>().unwrap(), Mood::Calm);
    }

    #[test]
    fn test_parse_other_keeps_label() {
        let mood: Mood = "Nostalgic".parse().unwrap();
        assert_eq!(mood, Mood::Other("Nostalgic".into()));
        assert_eq!(mood.to_string(), "Nostalgic");
    }

    #[test]
    fn test_parse_blank_fails() {
        assert_eq!("  ".parse::<Mood>(), Err(EmptyMoodError));
    }

    #[test]
    fn test_serde_uses_label() {
        assert_eq!(serde_json::to_string(&Mood::Happy).unwrap(), "\"Happy\"");
        let mood: Mood = serde_json::from_str("\"happy\"").unwrap();
        assert_eq!(mood, Mood::Happy);
        assert!(serde_json::from_str::<Mood>("\"\"").is_err());
    }
}
