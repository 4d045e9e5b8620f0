//! Core module for `posargs`.
//! See the `posargs` documentation root for full details.
#![deny(missing_docs)]
mod api;
mod flag;
mod interface;
mod model;
mod partition;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use flag::FlagSet;
pub use model::*;
pub use partition::{distribute, verify, ArgInfo, ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
