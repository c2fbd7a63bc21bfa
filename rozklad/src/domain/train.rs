//! Train labels as advertised on the results page.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("NON_WORD regex to compile"));

static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+|\D+").expect("DIGIT_RUNS regex to compile"));

/// Display colour for a train kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColour {
    Yellow,
    Red,
    Blue,
    Magenta,
    Green,
    White,
}

/// A short service identifier: a kind token plus an optional name.
///
/// Labels are display-only. The kind is the carrier/category token
/// (`IC`, `KD`, `TLK`, ...) and the name is whatever followed it, which is
/// usually a train number and sometimes a named service.
///
/// # Examples
///
/// ```
/// use rozklad::domain::TrainLabel;
///
/// let label = TrainLabel::parse("IC 1234 Hetman");
/// assert_eq!(label.kind(), "IC");
/// assert_eq!(label.name(), "1234 Hetman");
///
/// // A single token is split where the digits start.
/// let label = TrainLabel::parse("TLK123");
/// assert_eq!(label.kind(), "TLK");
/// assert_eq!(label.name(), "123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrainLabel {
    kind: String,
    name: String,
}

impl TrainLabel {
    /// Normalise a raw label taken from an image `alt` attribute.
    ///
    /// Runs of non-word characters collapse into single spaces and the
    /// result is split on spaces. When that leaves a single token, the token
    /// is split at digit boundaries instead. The first piece becomes the
    /// kind; the rest, space-joined, become the name. Never fails: an empty
    /// or all-punctuation label yields an empty kind and name.
    pub fn parse(raw: &str) -> Self {
        let collapsed = NON_WORD.replace_all(raw, " ");
        let mut parts: Vec<&str> = collapsed.trim().split(' ').collect();

        if parts.len() == 1 {
            parts = DIGIT_RUNS
                .find_iter(parts[0])
                .map(|m| m.as_str())
                .collect();
        }

        let mut parts = parts.into_iter();
        let kind = parts.next().unwrap_or_default().to_string();
        let name = parts.collect::<Vec<_>>().join(" ");

        Self { kind, name }
    }

    /// Returns the kind token, e.g. `IC`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the name/number suffix. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the colour the kind is highlighted with.
    pub fn colour(&self) -> LabelColour {
        match self.kind.as_str() {
            "KD" => LabelColour::Yellow,
            "R" | "L" => LabelColour::Red,
            "KS" | "KML" => LabelColour::Blue,
            "IC" | "EIC" | "TLK" | "EIP" => LabelColour::Magenta,
            "KM" => LabelColour::Green,
            _ => LabelColour::White,
        }
    }
}

impl fmt::Display for TrainLabel {
    /// Kind and name are written back to back: `IC1234 Hetman`, `TLK123`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Letters glued to digits come apart at the boundary.
        #[test]
        fn glued_number_splits(kind in "[A-Z]{1,4}", number in "[0-9]{1,6}") {
            let label = TrainLabel::parse(&format!("{kind}{number}"));
            prop_assert_eq!(label.kind(), kind.as_str());
            prop_assert_eq!(label.name(), number.as_str());
        }

        /// Any run of separators between tokens behaves like one space.
        #[test]
        fn separators_collapse(
            kind in "[A-Z]{1,4}",
            number in "[0-9]{1,6}",
            sep in "[ ,.;:/()-]{1,5}",
        ) {
            let label = TrainLabel::parse(&format!("{kind}{sep}{number}"));
            prop_assert_eq!(label.kind(), kind.as_str());
            prop_assert_eq!(label.name(), number.as_str());
        }

        /// The kind never carries separators and the name never has
        /// leading, trailing or doubled spaces.
        #[test]
        fn output_is_normalised(raw in "\\PC{0,40}") {
            let label = TrainLabel::parse(&raw);
            prop_assert!(!label.kind().contains(' '));
            prop_assert!(!label.name().starts_with(' '));
            prop_assert!(!label.name().ends_with(' '));
            prop_assert!(!label.name().contains("  "));
        }
    }
}
