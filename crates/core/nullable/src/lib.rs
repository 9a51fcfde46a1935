//! Three-state field wrapper for structured decoding.
//!
//! [`Nullable`] tells apart a key that was never sent, a key sent as `null`
//! and a key sent with a value. Decoding hooks into serde, validation hooks
//! into the `validator` crate or, for reflection-style checkers, into the
//! type-erased [`erased::CustomTypes`] registry.

mod nullable;

#[cfg(feature = "serde")]
mod json;

#[cfg(feature = "validator")]
mod validator;

#[cfg(feature = "schemas")]
mod schemas;

pub mod erased;

pub use nullable::Nullable;
pub use nullable_result::{Error, ErrorType, Result};
