//! Grade scale
//!
//! The fixed seven-symbol letter scale and its grade points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the O / A+ / A / B+ / B / C / U scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10 points)
    #[serde(rename = "O")]
    O,
    /// A+ (9 points)
    #[serde(rename = "A+")]
    APlus,
    /// A (8 points)
    #[serde(rename = "A")]
    A,
    /// B+ (7 points)
    #[serde(rename = "B+")]
    BPlus,
    /// B (6 points)
    #[serde(rename = "B")]
    B,
    /// C (5 points)
    #[serde(rename = "C")]
    C,
    /// U, a fail (0 points)
    #[serde(rename = "U")]
    U,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 7] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::C,
        Self::U,
    ];

    /// Grade points awarded for this grade
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::O => 10,
            Self::APlus => 9,
            Self::A => 8,
            Self::BPlus => 7,
            Self::B => 6,
            Self::C => 5,
            Self::U => 0,
        }
    }

    /// The symbol as the user enters it (e.g. `"A+"`)
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::U => "U",
        }
    }

    /// Look up a grade by its exact symbol. Matching is case-sensitive.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.symbol() == symbol)
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| format!("Unknown grade: '{s}'"))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points_table() {
        let table: Vec<(&str, u8)> = Grade::ALL
            .iter()
            .map(|g| (g.symbol(), g.points()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("O", 10),
                ("A+", 9),
                ("A", 8),
                ("B+", 7),
                ("B", 6),
                ("C", 5),
                ("U", 0)
            ]
        );
    }

    #[test]
    fn test_from_symbol_is_case_sensitive() {
        assert_eq!(Grade::from_symbol("A+"), Some(Grade::APlus));
        assert_eq!(Grade::from_symbol("o"), None);
        assert_eq!(Grade::from_symbol("b+"), None);
        assert_eq!(Grade::from_symbol(" A"), None);
        assert_eq!(Grade::from_symbol(""), None);
    }

    #[test]
    fn test_parse_and_display() {
        let grade: Grade = "B+".parse().unwrap();
        assert_eq!(grade, Grade::BPlus);
        assert_eq!(grade.to_string(), "B+");
        assert!("F".parse::<Grade>().is_err());
    }
}
