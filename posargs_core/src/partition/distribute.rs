use thiserror::Error;

use crate::api::{ArgSpec, InvalidCapture};
use crate::partition::ArgInfo;
use crate::prelude::FlagRegistry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A Cli input that does not fit the positional parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Not enough tokens remain for a required spec's fixed arity.
    #[error("Parse error: Not enough tokens provided to parameter '{name}' (provided={provided}, expected={expected}).")]
    Undercomplete {
        /// Access name of the starved spec.
        name: String,
        /// Tokens remaining for it.
        provided: usize,
        /// Its fixed arity.
        expected: usize,
    },

    /// Tokens remain that no spec can receive.
    #[error("Parse error: Too many tokens provided; unmatched '{}'.", .surplus.join(" "))]
    Overcomplete {
        /// The unmatched tokens.
        surplus: Vec<String>,
    },

    /// A spec refused its token window.
    #[error("Parse error: Invalid value for parameter '{name}': {source}")]
    InvalidValue {
        /// Access name of the refusing spec.
        name: String,
        /// Why it refused.
        source: InvalidCapture,
    },
}

/// Distribute the Cli `tokens` across the `specs`, as partitioned by `info`.
///
/// The `info` must come from [`verify`](crate::verify) over these same `specs`.
/// Each required spec receives precisely its arity, in order.
/// Optional specs then receive the remaining window greedily from left to right; once the window is empty the rest keep their initial values.
/// Tokens beyond what the specs accept are ignored here (see [`ArgInfo::surplus`]).
///
/// The first failure aborts the distribution.
pub fn distribute<S: ArgSpec>(
    info: &ArgInfo,
    specs: &mut [S],
    tokens: &[&str],
    registry: &mut dyn FlagRegistry,
) -> Result<(), ParseError> {
    assert_eq!(
        info.len(),
        specs.len(),
        "internal error - ArgInfo must be verified from the same specs"
    );
    let (required_tokens, optional_tokens) = info.split_tokens(tokens);

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Distributing {} tokens: {:?} to required {:?}, {:?} to optional {:?}.",
            tokens.len(),
            required_tokens,
            info.required(),
            optional_tokens,
            info.optional(),
        );
    }

    parse_required(&mut specs[info.required()], required_tokens, registry)?;
    parse_optional(&mut specs[info.optional()], optional_tokens, registry)
}

fn parse_required<S: ArgSpec>(
    specs: &mut [S],
    mut tokens: &[&str],
    registry: &mut dyn FlagRegistry,
) -> Result<(), ParseError> {
    for spec in specs.iter_mut() {
        let count = if spec.is_slice() {
            spec.max_length()
        } else {
            1
        };

        if tokens.len() < count {
            return Err(ParseError::Undercomplete {
                name: spec.access_name().to_string(),
                provided: tokens.len(),
                expected: count,
            });
        }

        let (window, rest) = tokens.split_at(count);
        parse_window(spec, window, registry)?;
        tokens = rest;
    }

    Ok(())
}

fn parse_optional<S: ArgSpec>(
    specs: &mut [S],
    mut tokens: &[&str],
    registry: &mut dyn FlagRegistry,
) -> Result<(), ParseError> {
    for spec in specs.iter_mut() {
        if tokens.is_empty() {
            break;
        }

        let count = if spec.is_slice() {
            match spec.max_length() {
                0 => tokens.len(),
                max => std::cmp::min(max, tokens.len()),
            }
        } else {
            1
        };

        let (window, rest) = tokens.split_at(count);
        parse_window(spec, window, registry)?;
        tokens = rest;
    }

    Ok(())
}

fn parse_window<S: ArgSpec>(
    spec: &mut S,
    window: &[&str],
    registry: &mut dyn FlagRegistry,
) -> Result<(), ParseError> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Feeding {window:?} to {}.", spec.access_name());
    }

    spec.parse(registry, window)
        .map_err(|source| ParseError::InvalidValue {
            name: spec.access_name().to_string(),
            source,
        })
}
