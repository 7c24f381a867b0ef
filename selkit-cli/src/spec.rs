//! JSON selector descriptions.
//!
//! ```json
//! { "combine": [
//!     { "fragments": [ { "element": "div" }, { "id": "main" } ] },
//!     "+",
//!     { "fragments": [ { "element": "table" } ] }
//! ] }
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use selkit_common::from_json;
use selkit_css::{Combinator, ComplexSelector, CompoundSelector, SimpleSelector, builder};

/// A selector as described in the input file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorSpec {
    /// Fragments of one compound selector, in order.
    Fragments(Vec<SimpleSelector>),
    /// `[left, combinator, right]`
    Combine(Box<SelectorSpec>, Combinator, Box<SelectorSpec>),
}

impl SelectorSpec {
    /// Parse a description from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        from_json(json).context("invalid selector description")
    }

    /// Build the described selector with the builder.
    pub fn build(self) -> Result<ComplexSelector> {
        match self {
            Self::Fragments(fragments) => {
                let mut fragments = fragments.into_iter();
                let Some(first) = fragments.next() else {
                    bail!("a compound selector needs at least one fragment");
                };
                let compound = fragments
                    .try_fold(CompoundSelector::new(first), CompoundSelector::with_fragment)?;
                Ok(compound.into())
            }
            Self::Combine(left, combinator, right) => {
                Ok(builder::combine(left.build()?, combinator, right.build()?))
            }
        }
    }
}
