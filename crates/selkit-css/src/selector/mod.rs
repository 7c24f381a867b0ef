//! CSS selector values
//!
//! This module implements the selector values produced by the
//! [`builder`](crate::builder) facade, modelled after
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! A [`CompoundSelector`] accumulates [`SimpleSelector`] fragments in call
//! order. Two selectors joined by a [`Combinator`] form a
//! [`CombinedSelector`]; [`ComplexSelector`] is either of the two.

mod complex;

use std::fmt;

use serde::{Deserialize, Serialize};
use selkit_common::warning::warn_once;

use crate::error::ValidationError;

pub use complex::{CombinedSelector, Combinator, ComplexSelector};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single fragment of a compound selector. Values are
/// stored raw and rendered with the fragment's prefix/brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `a`
    #[serde(rename = "element")]
    Type(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#nav-bar`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.editable`
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Holds the raw expression between the brackets, e.g. `href$=".png"`.
    #[serde(rename = "attr")]
    Attribute(String),

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Holds the name without the leading colon, e.g. `nth-of-type(even)`.
    PseudoClass(String),

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Holds the name without the leading colons, e.g. `before`.
    PseudoElement(String),
}

impl SimpleSelector {
    /// The kind of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Type(_) => FragmentKind::Element,
            Self::Id(_) => FragmentKind::Id,
            Self::Class(_) => FragmentKind::Class,
            Self::Attribute(_) => FragmentKind::Attribute,
            Self::PseudoClass(_) => FragmentKind::PseudoClass,
            Self::PseudoElement(_) => FragmentKind::PseudoElement,
        }
    }

    /// The raw value, without prefix or brackets.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Type(v)
            | Self::Id(v)
            | Self::Class(v)
            | Self::Attribute(v)
            | Self::PseudoClass(v)
            | Self::PseudoElement(v) => v,
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(v) => f.write_str(v),
            Self::Id(v) => write!(f, "#{v}"),
            Self::Class(v) => write!(f, ".{v}"),
            Self::Attribute(v) => write!(f, "[{v}]"),
            Self::PseudoClass(v) => write!(f, ":{v}"),
            Self::PseudoElement(v) => write!(f, "::{v}"),
        }
    }
}

/// Fragment kinds, declared in canonical CSS order:
///
/// ```text
/// element#id.class[attr]:pseudoClass::pseudoElement
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    /// Type selector.
    Element,
    /// ID selector.
    Id,
    /// Class selector.
    Class,
    /// Attribute selector.
    Attribute,
    /// Pseudo-class.
    PseudoClass,
    /// Pseudo-element.
    PseudoElement,
}

impl FragmentKind {
    /// Whether a compound selector may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        })
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Fragments are kept in insertion order and rendered verbatim. Only the
/// uniqueness of element, id and pseudo-element is enforced; fragments out
/// of canonical order are accepted with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    simple_selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Start a compound selector from a single fragment.
    #[must_use]
    pub fn new(fragment: SimpleSelector) -> Self {
        Self {
            simple_selectors: vec![fragment],
        }
    }

    /// The fragments in insertion order.
    #[must_use]
    pub fn fragments(&self) -> &[SimpleSelector] {
        &self.simple_selectors
    }

    /// Whether a fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.simple_selectors.iter().any(|s| s.kind() == kind)
    }

    /// Append any fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateFragment`] if the fragment is an
    /// element, id or pseudo-element and one is already present.
    pub fn with_fragment(mut self, fragment: SimpleSelector) -> Result<Self, ValidationError> {
        let kind = fragment.kind();
        if kind.is_unique() && self.contains(kind) {
            return Err(ValidationError::DuplicateFragment { kind });
        }
        self.push(fragment);
        Ok(self)
    }

    /// Append a type selector.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateFragment`] if an element is
    /// already present.
    pub fn element(self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.with_fragment(SimpleSelector::Type(value.into()))
    }

    /// Append an ID selector.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateFragment`] if an id is already
    /// present.
    pub fn id(self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.with_fragment(SimpleSelector::Id(value.into()))
    }

    /// Append a class selector.
    #[must_use]
    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.push(SimpleSelector::Class(value.into()));
        self
    }

    /// Append an attribute selector. `value` is the expression without
    /// brackets, e.g. `href$=".png"`.
    #[must_use]
    pub fn attr(mut self, value: impl Into<String>) -> Self {
        self.push(SimpleSelector::Attribute(value.into()));
        self
    }

    /// Append a pseudo-class, given without the leading colon.
    #[must_use]
    pub fn pseudo_class(mut self, value: impl Into<String>) -> Self {
        self.push(SimpleSelector::PseudoClass(value.into()));
        self
    }

    /// Set the pseudo-element, given without the leading colons.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateFragment`] if a pseudo-element is
    /// already present.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.with_fragment(SimpleSelector::PseudoElement(value.into()))
    }

    /// Render the selector, e.g. `a#main.x`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Append without the uniqueness check. Callers check first.
    fn push(&mut self, fragment: SimpleSelector) {
        let kind = fragment.kind();
        if let Some(last) = self.simple_selectors.last().map(SimpleSelector::kind)
            && kind < last
        {
            warn_once("Selector", &order_warning(kind, last));
        }
        self.simple_selectors.push(fragment);
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for simple in &self.simple_selectors {
            write!(f, "{simple}")?;
        }
        Ok(())
    }
}

fn order_warning(kind: FragmentKind, last: FragmentKind) -> String {
    format!(
        "{kind} after {last} is out of canonical order \
         (element, id, class, attribute, pseudo-class, pseudo-element)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use selkit_common::warning::has_warned;

    #[test]
    fn test_fragment_kinds_in_canonical_order() {
        assert!(FragmentKind::Element < FragmentKind::Id);
        assert!(FragmentKind::Id < FragmentKind::Class);
        assert!(FragmentKind::Class < FragmentKind::Attribute);
        assert!(FragmentKind::Attribute < FragmentKind::PseudoClass);
        assert!(FragmentKind::PseudoClass < FragmentKind::PseudoElement);
    }

    #[test]
    fn test_out_of_order_fragment_is_kept_and_reported() {
        let selector = CompoundSelector::new(SimpleSelector::Attribute("lang".into()))
            .class("intro");
        assert_eq!(selector.stringify(), "[lang].intro");
        assert!(has_warned(
            "Selector",
            &order_warning(FragmentKind::Class, FragmentKind::Attribute)
        ));
    }

    #[test]
    fn test_repeated_kind_is_not_reported() {
        let selector = CompoundSelector::new(SimpleSelector::PseudoClass("hover".into()))
            .pseudo_class("focus");
        assert_eq!(selector.stringify(), ":hover:focus");
        assert!(!has_warned(
            "Selector",
            &order_warning(FragmentKind::PseudoClass, FragmentKind::PseudoClass)
        ));
    }

    #[test]
    fn test_value_strips_rendering() {
        let attr = SimpleSelector::Attribute(r#"href$=".png""#.into());
        assert_eq!(attr.value(), r#"href$=".png""#);
        assert_eq!(attr.to_string(), r#"[href$=".png"]"#);
        assert_eq!(attr.kind(), FragmentKind::Attribute);
    }
}
