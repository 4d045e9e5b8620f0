use std::collections::HashSet;
use std::env;

use crate::api::ArgSpec;
use crate::flag::FlagSet;
use crate::interface::{ConsoleInterface, UserInterface};
use crate::partition::{distribute, verify, ArgInfo, ConfigError, ParseError};

/// The positional parameter configuration for a command.
///
/// ### Example
/// ```
/// # use posargs_core as posargs;
/// use posargs::{PositionalParser, Positional, Scalar};
///
/// let mut a: u32 = 0;
/// let mut b: u32 = 0;
/// let parser = PositionalParser::new("program")
///     .add(Positional::required(Scalar::new(&mut a), "a"))
///     .add(Positional::required(Scalar::new(&mut b), "b"))
///     .build()
///     .unwrap();
///
/// parser.parse_tokens(vec!["1", "2"].as_slice()).unwrap();
///
/// assert_eq!(a, 1);
/// assert_eq!(b, 2);
/// ```
pub struct PositionalParser<'a> {
    program: String,
    specs: Vec<Box<dyn ArgSpec + 'a>>,
}

impl<'a> std::fmt::Debug for PositionalParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionalParser")
            .field("program", &self.program)
            .field("specs", &self.specs.len())
            .finish()
    }
}

impl<'a> PositionalParser<'a> {
    /// Create a positional parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            specs: Vec::default(),
        }
    }

    /// Add a positional parameter.
    ///
    /// The order of additions is the positional order during parsing.
    /// Required and optional parameters must each be added contiguously, in either order.
    pub fn add(mut self, spec: impl ArgSpec + 'a) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// Build the [`Positionals`] for this configuration.
    ///
    /// Fails when the configuration is malformed (see [`verify`]), or when two parameters share an access name.
    pub fn build(self) -> Result<Positionals<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<Positionals<'a>, ConfigError> {
        let PositionalParser { program, specs } = self;
        let mut names = HashSet::new();

        for (index, spec) in specs.iter().enumerate() {
            if !names.insert(spec.access_name()) {
                return Err(ConfigError::DuplicateName {
                    index,
                    name: spec.access_name().to_string(),
                });
            }
        }

        let info = verify(&specs)?;

        Ok(Positionals {
            program,
            specs,
            info,
            user_interface,
        })
    }
}

/// The verified positional parameters of a command.
/// Built via [`PositionalParser::build`].
pub struct Positionals<'a> {
    program: String,
    specs: Vec<Box<dyn ArgSpec + 'a>>,
    info: ArgInfo,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for Positionals<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Positionals")
            .field("program", &self.program)
            .field("info", &self.info)
            .finish()
    }
}

impl<'a> Positionals<'a> {
    /// The partition of the parameters into their required and optional runs.
    pub fn arg_info(&self) -> &ArgInfo {
        &self.info
    }

    /// The usage representation of the parameters, in order.
    pub fn usage(&self) -> String {
        self.specs
            .iter()
            .map(|spec| spec.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Run the positional parameters against the input tokens.
    ///
    /// Tokens that no parameter can receive are rejected before any parameter is touched.
    /// Otherwise the tokens are distributed (see [`distribute`]), mutating your program variables.
    /// The returned [`FlagSet`] holds the raw values under each parameter's access name.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<FlagSet, ParseError> {
        let Positionals { specs, info, .. } = self;
        parse_positionals(specs, &info, tokens)
    }

    fn invoke(self, tokens: &[&str]) -> Result<FlagSet, i32> {
        let Positionals {
            program,
            specs,
            info,
            user_interface,
        } = self;

        parse_positionals(specs, &info, tokens).map_err(|error| {
            user_interface.print_error(&program, error);
            1
        })
    }

    /// Run the positional parameters against the Cli [`env::args`].
    ///
    /// If the tokens do not fit the parameters, the error is displayed and the process exits with error code `1` (via `std::process::exit`).
    pub fn parse(self) -> FlagSet {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(flag_set) => flag_set,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

fn parse_positionals(
    mut specs: Vec<Box<dyn ArgSpec + '_>>,
    info: &ArgInfo,
    tokens: &[&str],
) -> Result<FlagSet, ParseError> {
    let surplus = info.surplus(tokens);

    if !surplus.is_empty() {
        return Err(ParseError::Overcomplete {
            surplus: surplus.iter().map(|token| token.to_string()).collect(),
        });
    }

    let mut flag_set = FlagSet::default();
    distribute(info, &mut specs, tokens, &mut flag_set)?;
    Ok(flag_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Positional, Scalar};
    use crate::interface::util::InMemoryInterface;
    use crate::model::Order;
    use crate::test::{assert_contains, Recorder};

    #[test]
    fn build_empty() {
        let positionals = PositionalParser::new("program").build().unwrap();
        assert!(positionals.arg_info().is_empty());
        assert_eq!(positionals.usage(), "");

        let flag_set = positionals.parse_tokens(&[]).unwrap();
        assert!(flag_set.is_empty());
    }

    #[test]
    fn build_duplicate() {
        let result = PositionalParser::new("program")
            .add(Recorder::required("a"))
            .add(Recorder::optional("b"))
            .add(Recorder::optional("a"))
            .build();

        assert_matches!(
            result,
            Err(ConfigError::DuplicateName { index: 2, name }) if name == "a"
        );
    }

    #[test]
    fn build_interleaved() {
        let result = PositionalParser::new("program")
            .add(Recorder::required("a"))
            .add(Recorder::optional("b"))
            .add(Recorder::required("c"))
            .build();

        assert_matches!(result, Err(ConfigError::SwitchBackToRequired { index: 2 }));
    }

    #[test]
    fn parse_tokens() {
        let mut source: Vec<String> = Vec::default();
        let mut dest: String = String::default();
        let positionals = PositionalParser::new("copy")
            .add(Positional::optional(Collection::unbounded(&mut source), "source"))
            .add(Positional::required(Scalar::new(&mut dest), "dest"))
            .build()
            .unwrap();
        assert_eq!(positionals.arg_info().order(), Order::OptionalFirst);
        assert_eq!(positionals.usage(), "<source> [dest]");

        let flag_set = positionals.parse_tokens(&["a", "b", "c"]).unwrap();

        assert_eq!(source, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(dest, "c");
        assert_eq!(flag_set.value::<String>("dest"), Some("c".to_string()));
    }

    #[test]
    fn parse_tokens_overcomplete() {
        let mut a: u32 = 0;
        let mut b: u32 = 0;
        let positionals = PositionalParser::new("program")
            .add(Positional::required(Scalar::new(&mut a), "a"))
            .add(Positional::optional(Scalar::new(&mut b), "b"))
            .build()
            .unwrap();

        let error = positionals.parse_tokens(&["1", "2", "3", "4"]).unwrap_err();

        assert_eq!(
            error,
            ParseError::Overcomplete {
                surplus: vec!["3".to_string(), "4".to_string()],
            }
        );
        assert_contains!(error.to_string(), "'3 4'");
        assert_eq!(a, 0);
        assert_eq!(b, 0);
    }

    #[test]
    fn invoke_error() {
        let mut a: u32 = 0;
        let interface = InMemoryInterface::default();
        let positionals = PositionalParser::new("program")
            .add(Positional::required(Scalar::new(&mut a), "a"))
            .build_with_interface(Box::new(interface))
            .unwrap();

        assert_eq!(positionals.invoke(&["x"]).unwrap_err(), 1);
    }

    #[test]
    fn invoke_reports() {
        let interface = std::rc::Rc::new(InMemoryInterface::default());
        let positionals = PositionalParser::new("program")
            .add(Recorder::required_slice("pair", 2))
            .build_with_interface(Box::new(SharedInterface(interface.clone())))
            .unwrap();

        assert_eq!(positionals.invoke(&["x"]).unwrap_err(), 1);

        let interface = std::rc::Rc::try_unwrap(interface).ok().unwrap();
        let message = interface.consume().unwrap();
        assert_contains!(message, "program: Parse error: Not enough tokens");
        assert_contains!(message, "'pair'");
    }

    #[test]
    fn invoke_ok() {
        let mut a: u32 = 0;
        let positionals = PositionalParser::new("program")
            .add(Positional::required(Scalar::new(&mut a), "a"))
            .build_with_interface(Box::new(InMemoryInterface::default()))
            .unwrap();

        let flag_set = positionals.invoke(&["5"]).unwrap();

        assert_eq!(flag_set.value::<u32>("a"), Some(5));
        assert_eq!(a, 5);
    }

    struct SharedInterface(std::rc::Rc<InMemoryInterface>);

    impl UserInterface for SharedInterface {
        fn print_error(&self, program: &str, error: ParseError) {
            self.0.print_error(program, error);
        }
    }
}
