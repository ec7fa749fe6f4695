//! Plain data objects and JSON helpers.
//!
//! # Scope
//!
//! This crate provides:
//! - **Shapes** - [`Rectangle`] and [`Circle`], plain data with a computed area
//! - **Serialization** - [`to_json`], compact JSON preserving key order
//! - **Reconstruction** - [`from_json`], which feeds the values of a JSON
//!   document positionally to a type's [`Construct`] implementation

pub mod error;
pub mod json;
pub mod shapes;

pub use error::ObjectError;
pub use json::{Construct, arg_f64, check_arity, from_json, to_json};
pub use shapes::{Circle, Rectangle, make};
