//! `posargs` validates and parses the positional arguments of a command line program.
//!
//! It sits alongside a conventional flag parser: once the flags have been extracted, the remaining Cli tokens are handed to `posargs`.
//! `posargs` works in two phases:
//! * *Verification*:
//! The ordered list of positional parameters (each an [`ArgSpec`]) is checked once, when the command is configured.
//! Required parameters and optional parameters must each form a single contiguous run, in either order.
//! Every required parameter must consume a fixed number of tokens.
//! The result is an [`ArgInfo`] partition.
//! * *Distribution*:
//! Each invocation slices the Cli tokens into a required window and an optional window, and feeds each parameter its tokens in order.
//! Value conversion is delegated back to the parameter.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/copy.rs")]
//! ```
//!
//! ```console
//! $ copy a.txt b.txt backup/
//! Copying ["a.txt", "b.txt"] into 'backup/'.
//!
//! $ copy backup/
//! Copying [] into 'backup/'.
//!
//! $ copy
//! copy: Parse error: Not enough tokens provided to parameter 'DEST' (provided=0, expected=1).
//! ```
//!
//! # Builder Api
//! Configure `posargs` by starting with a [`PositionalParser`] and `add`ing parameters.
//! Each [`Positional`] is either `required` or `optional`, and takes a *field* which specifies the underlying type `T` and its arity:
//! * [`Scalar`]: precisely 1 token.
//! * [`Collection`]: up to `max_length` tokens, for any collection that implements [Collectable](./prelude/trait.Collectable.html).
//! A `max_length` of `0` means unbounded, which is only valid for an optional parameter.
//! A required collection always takes precisely `max_length` tokens.
//!
//! All type `T` parsing is controlled by [`std::str::FromStr`].
//!
//! Fields either write into your program variables (`Scalar::new(&mut value)`), or own their value (`Scalar::owned(initial)`).
//! In both cases the raw tokens are also bound under the parameter's access name in the returned [`FlagSet`].
//!
//! ### Lower level Api
//! The builder is a thin layer over [`verify`] and [`distribute`], which work over any `ArgSpec` implementation.
//! ```
//! use posargs::{distribute, verify, FlagSet, Positional, Scalar};
//!
//! let mut a: u32 = 0;
//! let mut b: u32 = 0;
//! let mut specs = vec![
//!     Positional::required(Scalar::new(&mut a), "a"),
//!     Positional::optional(Scalar::new(&mut b), "b"),
//! ];
//! let info = verify(&specs).expect("positional configuration must be valid");
//! let mut flag_set = FlagSet::default();
//! distribute(&info, &mut specs, &["1"], &mut flag_set).unwrap();
//! drop(specs);
//!
//! assert_eq!(a, 1);
//! assert_eq!(b, 0);
//! ```
//!
//! # Cli Semantics
//! * Required parameters take the leading tokens when declared first, and the trailing tokens when declared last.
//! * Each required parameter receives precisely its arity; too few tokens is a parse error.
//! * Optional parameters consume the remaining tokens greedily from left to right.
//! Once the tokens run out, the later optional parameters keep their initial values.
//! * Tokens beyond what the parameters accept are rejected by [`Positionals::parse_tokens`] (but ignored by [`distribute`]).
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events for the partition and token windows.
pub use posargs_core::*;
