//! Arbor Core - foundational types for the Arbor in-memory index.
//!
//! This crate provides the types shared by Arbor's index structures:
//!
//! - `Key`: the scalar integer key stored by the indexes
//! - `Error`: error types for index construction
//!
//! # Example
//!
//! ```rust
//! use arbor_core::{Error, Key};
//!
//! let key: Key = 42;
//! assert!(key.is_positive());
//!
//! let err = Error::invalid_degree(1);
//! assert_eq!(err, Error::InvalidDegree { min_degree: 1 });
//! ```

#![no_std]

extern crate alloc;

mod error;
mod key;

pub use error::{Error, Result};
pub use key::Key;
