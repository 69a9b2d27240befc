//! # typegraph-error
//!
//! Unified error handling for typegraph.
//!
//! An [`Error`] carries an [`ErrorKind`], a human readable message, the
//! operation that failed, key/value context locating the cause, and the
//! wrapped underlying error if there is one.
//!
//! ```rust
//! use typegraph_error::{Error, ErrorKind};
//!
//! fn compile() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidPattern, "unclosed character class")
//!         .with_operation("discovery::compile_glob")
//!         .with_context("pattern", "src/[a-z.ts"))
//! }
//!
//! let err = compile().unwrap_err();
//! assert_eq!(err.context_value("pattern"), Some("src/[a-z.ts"));
//! ```
//!
//! Foreign errors are wrapped with [`Error::set_source`]; callers further up
//! only append context.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

pub type Result<T> = std::result::Result<T, Error>;
