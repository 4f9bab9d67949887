use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seating zone on the train. Declaration order is the allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    A,
    B,
}

impl Section {
    /// Every section, in first-fit scan order
    pub const ALL: [Section; 2] = [Section::A, Section::B];

    pub fn label(&self) -> &'static str {
        match self {
            Section::A => "A",
            Section::B => "B",
        }
    }

    /// Position of this section in `Section::ALL`
    pub fn index(&self) -> usize {
        match self {
            Section::A => 0,
            Section::B => 1,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Section::A),
            "B" => Ok(Section::B),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// A validated seat identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    pub section: Section,
    pub number: u32,
}

impl Seat {
    pub fn new(section: Section, number: u32) -> Self {
        Self { section, number }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section, self.number)
    }
}

/// Seat as requested by a caller, before any validation.
///
/// Section is a free-form label and the number may be out of range; the
/// allocation store decides whether it names a real seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeatSelection {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub number: i64,
}

impl SeatSelection {
    pub fn new(section: impl Into<String>, number: i64) -> Self {
        Self {
            section: section.into(),
            number,
        }
    }
}

impl From<Seat> for SeatSelection {
    fn from(seat: Seat) -> Self {
        Self {
            section: seat.section.label().to_string(),
            number: i64::from(seat.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parsing_is_exact() {
        assert_eq!("A".parse::<Section>().unwrap(), Section::A);
        assert_eq!("B".parse::<Section>().unwrap(), Section::B);
        assert_eq!("a".parse::<Section>(), Err(UnknownSection("a".to_string())));
        assert!("C".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_order_matches_index() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
        assert!(Section::A < Section::B);
    }

    #[test]
    fn test_seat_serializes_section_as_label() {
        let json = serde_json::to_value(Seat::new(Section::B, 7)).unwrap();
        assert_eq!(json, serde_json::json!({ "section": "B", "number": 7 }));
    }

    #[test]
    fn test_selection_defaults_missing_fields() {
        let selection: SeatSelection = serde_json::from_str(r#"{"number": 3}"#).unwrap();
        assert_eq!(selection, SeatSelection::new("", 3));
    }
}
