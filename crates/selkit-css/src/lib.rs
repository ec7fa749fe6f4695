//! CSS selector builder for selkit.
//!
//! # Scope
//!
//! This crate provides:
//! - **Selector parts** - the six [`Kind`]s of simple selector and their
//!   fixed ordering (`element#id.class[attr]:pseudo-class::pseudo-element`)
//! - **Selector values** - [`SelectorState`], an immutable, append-only
//!   selector that validates every append
//! - **Builder facade** - [`builder`], free functions that start a chain from
//!   the shared empty root
//!
//! # Not Supported
//!
//! - Parsing selector text back into parts
//! - Validating attribute or pseudo-class syntax
//! - Specificity

pub mod builder;
pub mod error;
pub mod selector;

pub use error::{PartParseError, SelectorError};
pub use selector::{Combinator, Kind, Part, SelectorState, combine};
