//! Error types for selector construction.

use thiserror::Error;

use crate::selector::Kind;

/// Errors raised by an append that would produce an invalid selector.
///
/// The offending append never yields a value, so an invalid
/// [`SelectorState`](crate::SelectorState) is never observable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was appended after a part of a later stage,
    /// e.g. `#main` followed by `div`.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got {next} after {previous})"
    )]
    OrderViolation {
        /// Kind of the part already at the end of the chain.
        previous: Kind,
        /// Kind of the rejected part.
        next: Kind,
    },

    /// An element, id or pseudo-element was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (repeated {0})"
    )]
    DuplicateSingleton(Kind),
}

/// Errors from reading a textual `kind=value` selector part.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartParseError {
    /// The part has no `=` separating kind from value.
    #[error("expected `kind=value`, got '{0}'")]
    MissingSeparator(String),

    /// The kind name is not one of the six selector part kinds.
    #[error("unknown selector part kind '{0}'")]
    UnknownKind(String),
}
