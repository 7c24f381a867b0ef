//! Selector validation errors.

use thiserror::Error;

use crate::selector::FragmentKind;

/// A builder call that would produce an invalid compound selector.
///
/// The chain that produced it should be discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A second element, id or pseudo-element was added.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateFragment {
        /// The kind that was duplicated.
        kind: FragmentKind,
    },
}
