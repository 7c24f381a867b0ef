//! Combinators and selectors joined by them.

use std::fmt;

use serde::{Deserialize, Serialize};
use selkit_common::warning::warn_once;

use super::CompoundSelector;

/// Reported once per process, whatever the combinator text.
const NON_STANDARD_COMBINATOR: &str = "non-standard combinator used verbatim";

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Any other string is kept as [`Combinator::Other`] and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,

    /// A non-standard combinator, rendered as given.
    Other(String),
}

impl Combinator {
    /// The combinator's symbol. The descendant combinator is a single space.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Other(symbol) => symbol,
        }
    }

    /// Whether this is one of the four standard combinators.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Combinator {
    fn from(symbol: &str) -> Self {
        match symbol {
            " " => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Combinator {
    fn from(symbol: String) -> Self {
        match Self::from(symbol.as_str()) {
            Self::Other(_) => Self::Other(symbol),
            standard => standard,
        }
    }
}

impl From<char> for Combinator {
    fn from(symbol: char) -> Self {
        let mut buf = [0; 4];
        Self::from(&*symbol.encode_utf8(&mut buf))
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        match combinator {
            Combinator::Other(symbol) => symbol,
            standard => standard.symbol().to_string(),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Two selectors joined by a combinator: `left combinator right`.
///
/// Rendering always pads the combinator with one space on each side, so the
/// descendant combinator renders as three spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: Box<ComplexSelector>,
    combinator: Combinator,
    right: Box<ComplexSelector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    ///
    /// Non-standard combinators are accepted. The first one in the process
    /// is reported through the warning system; later ones are silent.
    #[must_use]
    pub fn new(left: ComplexSelector, combinator: Combinator, right: ComplexSelector) -> Self {
        if !combinator.is_standard() {
            warn_once("Selector", NON_STANDARD_COMBINATOR);
        }
        Self {
            left: Box::new(left),
            combinator,
            right: Box::new(right),
        }
    }

    /// The selector left of the combinator.
    #[must_use]
    pub fn left(&self) -> &ComplexSelector {
        &self.left
    }

    /// The combinator.
    #[must_use]
    pub const fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// The selector right of the combinator.
    #[must_use]
    pub fn right(&self) -> &ComplexSelector {
        &self.right
    }

    /// Render the selector, e.g. `div#main + table#data`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Either a compound selector or two selectors joined by a combinator.
/// Nesting is unbounded on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexSelector {
    /// A selector without combinators.
    Compound(CompoundSelector),
    /// A selector joined by a combinator.
    Combined(CombinedSelector),
}

impl ComplexSelector {
    /// Check if this is a compound selector (no combinators).
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::Compound(_))
    }

    /// Render the selector.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl From<CompoundSelector> for ComplexSelector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<CombinedSelector> for ComplexSelector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SimpleSelector;
    use selkit_common::warning::has_warned;

    fn compound(tag: &str) -> ComplexSelector {
        CompoundSelector::new(SimpleSelector::Type(tag.to_string())).into()
    }

    #[test]
    fn test_standard_symbols() {
        assert_eq!(Combinator::from(" "), Combinator::Descendant);
        assert_eq!(Combinator::from(">"), Combinator::Child);
        assert_eq!(Combinator::from('+'), Combinator::NextSibling);
        assert_eq!(Combinator::from(String::from("~")), Combinator::SubsequentSibling);
    }

    #[test]
    fn test_other_symbol_kept_verbatim() {
        let combinator = Combinator::from("||");
        assert_eq!(combinator, Combinator::Other("||".to_string()));
        assert!(!combinator.is_standard());
        assert_eq!(combinator.to_string(), "||");
        assert_eq!(String::from(combinator), "||");
    }

    #[test]
    fn test_string_conversion_round_trips() {
        for symbol in [" ", ">", "+", "~", "/deep/"] {
            assert_eq!(String::from(Combinator::from(symbol)), symbol);
        }
    }

    // Only test in this binary that builds non-standard combined selectors.
    #[test]
    fn test_non_standard_combinator_reported_under_one_key() {
        for symbol in [" ", ">", "+", "~"] {
            let _ = CombinedSelector::new(compound("a"), symbol.into(), compound("b"));
        }
        assert!(!has_warned("Selector", NON_STANDARD_COMBINATOR));

        for i in 0..3 {
            let combined =
                CombinedSelector::new(compound("a"), format!("x{i}").into(), compound("b"));
            assert_eq!(combined.stringify(), format!("a x{i} b"));
        }
        assert!(has_warned("Selector", NON_STANDARD_COMBINATOR));
        for i in 0..3 {
            assert!(!has_warned(
                "Selector",
                &format!("non-standard combinator `x{i}` used verbatim")
            ));
        }
    }
}
