use thiserror::Error;

use crate::prelude::FlagRegistry;

/// The capability every positional parameter implements.
///
/// A sequence of `ArgSpec` is first checked via [`verify`](crate::verify), and then fed command line tokens via [`distribute`](crate::distribute).
/// The `Display` representation is `[NAME]` for required specs and `<NAME>` for optional specs.
pub trait ArgSpec: std::fmt::Display {
    /// The name by which the parsed value is later accessed.
    fn access_name(&self) -> &str;

    /// Whether this spec must receive tokens.
    fn is_required(&self) -> bool;

    /// Whether this spec may receive more than one token.
    fn is_slice(&self) -> bool;

    /// The maximum number of tokens for a slice spec.
    /// `0` means unbounded, which is only valid for an optional spec.
    fn max_length(&self) -> usize;

    /// Capture the `tokens` window into this spec, binding the raw values into the `registry`.
    ///
    /// An optional spec treats an empty window as a no-op.
    fn parse(&mut self, registry: &mut dyn FlagRegistry, tokens: &[&str])
        -> Result<(), InvalidCapture>;
}

impl<S: ArgSpec + ?Sized> ArgSpec for Box<S> {
    fn access_name(&self) -> &str {
        (**self).access_name()
    }

    fn is_required(&self) -> bool {
        (**self).is_required()
    }

    fn is_slice(&self) -> bool {
        (**self).is_slice()
    }

    fn max_length(&self) -> usize {
        (**self).max_length()
    }

    fn parse(
        &mut self,
        registry: &mut dyn FlagRegistry,
        tokens: &[&str],
    ) -> Result<(), InvalidCapture> {
        (**self).parse(registry, tokens)
    }
}

/// Behaviour to capture an explicit generic type T from input tokens.
///
/// We use this at the bottom of the positional object graph so the compiler can maintain each field's type.
pub trait GenericCapturable<'a, T> {
    /// Capture the tokens into the generic type T for this field.
    /// Implementations convert every token before writing, so a failure leaves the field untouched.
    fn capture(&mut self, tokens: &[&str]) -> Result<(), InvalidCapture>;

    /// Whether this field accepts more than one token.
    fn is_slice(&self) -> bool;

    /// The maximum number of tokens for a slice field (`0` for unbounded).
    fn max_length(&self) -> usize;
}

/// The reasons a spec may refuse its token window.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// A token does not convert to the spec's type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The offending token.
        token: String,
        /// The target type.
        type_name: &'static str,
    },

    /// A required spec received no tokens.
    #[error("no value provided.")]
    Missing,

    /// Fewer tokens than a fixed arity demands.
    #[error("too few values provided (provided={provided}, expected={expected}).")]
    TooFewValues {
        /// Tokens received.
        provided: usize,
        /// Tokens expected.
        expected: usize,
    },

    /// More tokens than the spec accepts.
    #[error("too many values provided (provided={provided}, expected={expected}).")]
    TooManyValues {
        /// Tokens received.
        provided: usize,
        /// Maximum tokens accepted.
        expected: usize,
    },
}
