use crate::api::{ArgSpec, GenericCapturable, InvalidCapture};
use crate::prelude::FlagRegistry;

/// A positional parameter: a field, its access name, and whether it is required.
///
/// ### Example
/// ```
/// # use posargs_core as posargs;
/// use posargs::{Collection, Positional, Scalar};
///
/// let mut source: String = "".to_string();
/// let mut rest: Vec<u32> = Vec::default();
/// Positional::required(Scalar::new(&mut source), "source");
/// Positional::optional(Collection::unbounded(&mut rest), "rest");
/// ```
pub struct Positional<'a, T> {
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
    name: String,
    required: bool,
}

impl<'a, T> Positional<'a, T> {
    /// Create a required positional parameter.
    ///
    /// A required collection must be bounded (its `max_length` is its precise arity).
    pub fn required(
        field: impl GenericCapturable<'a, T> + 'a,
        name: impl Into<String>,
    ) -> Self {
        Self::new(field, name, true)
    }

    /// Create an optional positional parameter.
    ///
    /// When no tokens remain for it, its field keeps its initial value.
    pub fn optional(
        field: impl GenericCapturable<'a, T> + 'a,
        name: impl Into<String>,
    ) -> Self {
        Self::new(field, name, false)
    }

    fn new(
        field: impl GenericCapturable<'a, T> + 'a,
        name: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            field: Box::new(field),
            name: name.into(),
            required,
        }
    }

    fn check_arity(&self, provided: usize) -> Result<(), InvalidCapture> {
        if provided == 0 {
            return if self.required {
                Err(InvalidCapture::Missing)
            } else {
                Ok(())
            };
        }

        if !self.field.is_slice() {
            return if provided > 1 {
                Err(InvalidCapture::TooManyValues {
                    provided,
                    expected: 1,
                })
            } else {
                Ok(())
            };
        }

        match self.field.max_length() {
            0 => Ok(()),
            max if self.required && provided < max => Err(InvalidCapture::TooFewValues {
                provided,
                expected: max,
            }),
            max if provided > max => Err(InvalidCapture::TooManyValues {
                provided,
                expected: max,
            }),
            _ => Ok(()),
        }
    }
}

impl<'a, T> ArgSpec for Positional<'a, T> {
    fn access_name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn is_slice(&self) -> bool {
        self.field.is_slice()
    }

    fn max_length(&self) -> usize {
        if self.field.is_slice() {
            self.field.max_length()
        } else {
            0
        }
    }

    fn parse(
        &mut self,
        registry: &mut dyn FlagRegistry,
        tokens: &[&str],
    ) -> Result<(), InvalidCapture> {
        self.check_arity(tokens.len())?;

        if tokens.is_empty() {
            return Ok(());
        }

        self.field.capture(tokens)?;
        registry.bind(
            &self.name,
            tokens.iter().map(|token| token.to_string()).collect(),
        );
        Ok(())
    }
}

impl<'a, T> std::fmt::Display for Positional<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.required {
            write!(f, "[{}]", self.name)
        } else {
            write!(f, "<{}>", self.name)
        }
    }
}

impl<'a, T> std::fmt::Debug for Positional<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = if self.required { "Req" } else { "Opt" };
        let arity = if !self.field.is_slice() {
            "1".to_string()
        } else {
            match self.field.max_length() {
                0 => "*".to_string(),
                max => format!("..{max}"),
            }
        };

        write!(
            f,
            "{class}[{t}, {arity}, {name}]",
            t = std::any::type_name::<T>(),
            name = self.name,
        )
    }
}
