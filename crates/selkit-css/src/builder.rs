//! Selector builder entry points.
//!
//! Each function starts an independent chain; there is no shared state
//! between chains.
//!
//! ```
//! use selkit_css::builder;
//!
//! # fn main() -> Result<(), selkit_css::ValidationError> {
//! let selector = builder::combine(
//!     builder::element("div").id("main")?.class("container"),
//!     '+',
//!     builder::element("table").id("data")?,
//! );
//! assert_eq!(selector.stringify(), "div#main.container + table#data");
//! # Ok(())
//! # }
//! ```

use crate::selector::{CombinedSelector, Combinator, ComplexSelector, CompoundSelector, SimpleSelector};

/// Start a selector with a type selector.
#[must_use]
pub fn element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::new(SimpleSelector::Type(value.into()))
}

/// Start a selector with an ID selector.
#[must_use]
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::new(SimpleSelector::Id(value.into()))
}

/// Start a selector with a class selector.
#[must_use]
pub fn class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::new(SimpleSelector::Class(value.into()))
}

/// Start a selector with an attribute selector (expression without brackets).
#[must_use]
pub fn attr(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::new(SimpleSelector::Attribute(value.into()))
}

/// Start a selector with a pseudo-class (name without the colon).
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::new(SimpleSelector::PseudoClass(value.into()))
}

/// Start a selector with a pseudo-element (name without the colons).
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::new(SimpleSelector::PseudoElement(value.into()))
}

/// Join two selectors with a combinator.
///
/// `combinator` is normally one of `' '`, `'+'`, `'~'`, `'>'`. Anything else
/// is rendered as given.
#[must_use]
pub fn combine(
    selector1: impl Into<ComplexSelector>,
    combinator: impl Into<Combinator>,
    selector2: impl Into<ComplexSelector>,
) -> ComplexSelector {
    CombinedSelector::new(selector1.into(), combinator.into(), selector2.into()).into()
}
