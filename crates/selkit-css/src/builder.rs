//! Entry points that start a selector from the shared empty root.
//!
//! Each function here is the same operation invoked on [`ROOT`]:
//!
//! ```
//! use selkit_css::builder;
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let selector = builder::id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok(())
//! # }
//! ```

use crate::error::SelectorError;
use crate::selector::SelectorState;

/// Shared empty selector. Never mutated; every chain derives from a copy.
pub static ROOT: SelectorState = SelectorState::EMPTY;

/// Start a selector with a type selector.
///
/// # Errors
///
/// Never fails on the empty root; the `Result` matches the chained form.
pub fn element(value: &str) -> Result<SelectorState, SelectorError> {
    ROOT.element(value)
}

/// Start a selector with an id.
///
/// # Errors
///
/// Never fails on the empty root; the `Result` matches the chained form.
pub fn id(value: &str) -> Result<SelectorState, SelectorError> {
    ROOT.id(value)
}

/// Start a selector with a class.
///
/// # Errors
///
/// Never fails on the empty root; the `Result` matches the chained form.
pub fn class(value: &str) -> Result<SelectorState, SelectorError> {
    ROOT.class(value)
}

/// Start a selector with an attribute selector.
///
/// # Errors
///
/// Never fails on the empty root; the `Result` matches the chained form.
pub fn attribute(value: &str) -> Result<SelectorState, SelectorError> {
    ROOT.attribute(value)
}

/// Start a selector with a pseudo-class.
///
/// # Errors
///
/// Never fails on the empty root; the `Result` matches the chained form.
pub fn pseudo_class(value: &str) -> Result<SelectorState, SelectorError> {
    ROOT.pseudo_class(value)
}

/// Start a selector with a pseudo-element.
///
/// # Errors
///
/// Never fails on the empty root; the `Result` matches the chained form.
pub fn pseudo_element(value: &str) -> Result<SelectorState, SelectorError> {
    ROOT.pseudo_element(value)
}

/// Join two built selectors. See [`crate::combine`].
#[must_use]
pub fn combine(
    left: &SelectorState,
    combinator: impl AsRef<str>,
    right: &SelectorState,
) -> SelectorState {
    crate::selector::combine(left, combinator, right)
}
