use std::ops::Range;
use thiserror::Error;

use crate::api::ArgSpec;
use crate::model::Order;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A malformed positional configuration.
///
/// These depend only on how the program declares its positional parameters, never on the Cli input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An optional run (after a required run) is followed by another required spec.
    #[error("Config error: Switching back to \"required\" ArgSpec at index {index}.")]
    SwitchBackToRequired {
        /// Index of the offending spec.
        index: usize,
    },

    /// A required run (after an optional run) is followed by another optional spec.
    #[error("Config error: Switching back to \"optional\" ArgSpec at index {index}.")]
    SwitchBackToOptional {
        /// Index of the offending spec.
        index: usize,
    },

    /// A required slice spec does not have a fixed size.
    #[error("Config error: Unbounded size for \"required\"+\"slice\" ArgSpec '{name}' at index {index}.")]
    UnboundedRequired {
        /// Index of the offending spec.
        index: usize,
        /// Access name of the offending spec.
        name: String,
    },

    /// More than one optional slice spec is unbounded; the second could never receive tokens.
    #[error("Config error: Multiple unbounded \"optional\"+\"slice\" ArgSpecs at index {first} and {second}.")]
    MultipleUnbounded {
        /// Index of the first unbounded spec.
        first: usize,
        /// Index of the offending spec.
        second: usize,
    },

    /// Two specs share an access name.
    #[error("Config error: Cannot duplicate the parameter '{name}' at index {index}.")]
    DuplicateName {
        /// Index of the offending spec.
        index: usize,
        /// The duplicated access name.
        name: String,
    },
}

/// The partition of a verified spec list into its required and optional runs.
///
/// Produced by [`verify`], and consumed by [`distribute`](crate::distribute) against the same spec list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgInfo {
    order: Order,
    required: Range<usize>,
    optional: Range<usize>,
    required_tokens: usize,
    max_optional_tokens: usize,
    unbounded_optional: bool,
}

impl ArgInfo {
    /// Which run is declared first.
    pub fn order(&self) -> Order {
        self.order
    }

    /// The indices of the required run.
    pub fn required(&self) -> Range<usize> {
        self.required.clone()
    }

    /// The indices of the optional run.
    pub fn optional(&self) -> Range<usize> {
        self.optional.clone()
    }

    /// The index of the first required spec.
    pub fn first_required(&self) -> usize {
        self.required.start
    }

    /// The index of the first optional spec.
    pub fn first_optional(&self) -> usize {
        self.optional.start
    }

    /// The precise number of tokens the required run consumes.
    pub fn required_tokens(&self) -> usize {
        self.required_tokens
    }

    /// The maximum number of tokens the optional run consumes, excluding any unbounded spec.
    pub fn max_optional_tokens(&self) -> usize {
        self.max_optional_tokens
    }

    /// Whether an optional spec accepts any number of tokens.
    pub fn unbounded_optional(&self) -> bool {
        self.unbounded_optional
    }

    /// The number of specs this partition covers.
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    /// Whether this partition covers no specs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split `tokens` into the (required, optional) windows.
    ///
    /// Required specs take the leading tokens when declared first, and the trailing tokens when declared last.
    /// The required window is clamped to the available tokens.
    pub fn split_tokens<'t, 's>(
        &self,
        tokens: &'t [&'s str],
    ) -> (&'t [&'s str], &'t [&'s str]) {
        match self.order {
            Order::RequiredFirst => {
                let (required, optional) =
                    tokens.split_at(std::cmp::min(self.required_tokens, tokens.len()));
                (required, optional)
            }
            Order::OptionalFirst => {
                let (optional, required) =
                    tokens.split_at(tokens.len().saturating_sub(self.required_tokens));
                (required, optional)
            }
        }
    }

    /// The tokens no spec can receive.
    ///
    /// Optional specs consume their window greedily, so these are always the tail of the optional window.
    pub fn surplus<'t, 's>(&self, tokens: &'t [&'s str]) -> &'t [&'s str] {
        let (_, optional) = self.split_tokens(tokens);

        if self.unbounded_optional {
            &optional[optional.len()..]
        } else {
            &optional[std::cmp::min(self.max_optional_tokens, optional.len())..]
        }
    }
}

/// Check the positional `specs` are reasonable, and partition them into their required and optional runs.
///
/// The following rules are checked:
/// * The required specs are contiguous, and so are the optional specs (either may come first).
/// * Every required spec has a fixed size (including slice specs).
/// * At most one optional spec is an unbounded slice.
///
/// An empty list produces an empty partition.
pub fn verify<S: ArgSpec>(specs: &[S]) -> Result<ArgInfo, ConfigError> {
    let mut info = ArgInfo::default();
    let leading_required = match specs.first() {
        Some(spec) => spec.is_required(),
        None => return Ok(info),
    };
    let boundary = specs
        .iter()
        .position(|spec| spec.is_required() != leading_required)
        .unwrap_or(specs.len());

    if let Some(offset) = specs[boundary..]
        .iter()
        .position(|spec| spec.is_required() == leading_required)
    {
        let index = boundary + offset;
        return Err(if leading_required {
            ConfigError::SwitchBackToRequired { index }
        } else {
            ConfigError::SwitchBackToOptional { index }
        });
    }

    if leading_required {
        info.order = Order::RequiredFirst;
        info.required = 0..boundary;
        info.optional = boundary..specs.len();
    } else {
        info.order = Order::OptionalFirst;
        info.optional = 0..boundary;
        info.required = boundary..specs.len();
    }

    for index in info.required() {
        let spec = &specs[index];

        if spec.is_slice() {
            let max = spec.max_length();

            if max == 0 {
                return Err(ConfigError::UnboundedRequired {
                    index,
                    name: spec.access_name().to_string(),
                });
            }

            info.required_tokens += max;
        } else {
            info.required_tokens += 1;
        }
    }

    let mut unbounded: Option<usize> = None;

    for index in info.optional() {
        let spec = &specs[index];

        if spec.is_slice() {
            let max = spec.max_length();

            if max == 0 {
                if let Some(first) = unbounded.replace(index) {
                    return Err(ConfigError::MultipleUnbounded {
                        first,
                        second: index,
                    });
                }
            }

            info.max_optional_tokens += max;
        } else {
            info.max_optional_tokens += 1;
        }
    }

    info.unbounded_optional = unbounded.is_some();

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Partitioned {} specs ({}): required {:?} x{} tokens, optional {:?} up to {} tokens (unbounded: {}).",
            specs.len(),
            info.order,
            info.required,
            info.required_tokens,
            info.optional,
            info.max_optional_tokens,
            info.unbounded_optional,
        );
    }

    Ok(info)
}
