//! Fluent CSS selector builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - At most one element, id and pseudo-element, checked as fragments are added
//!   - Fragments rendered in insertion order
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Arbitrary nesting on either side
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity

/// Free functions that start a selector chain.
pub mod builder;
/// Validation errors raised by builder calls.
pub mod error;
/// Selector values and their serialization.
pub mod selector;

pub use error::ValidationError;
pub use selector::{
    CombinedSelector, Combinator, ComplexSelector, CompoundSelector, FragmentKind, SimpleSelector,
};
