use crate::partition::ParseError;

pub(crate) trait UserInterface {
    fn print_error(&self, program: &str, error: ParseError);
}

pub(crate) struct ConsoleInterface {}

impl Default for ConsoleInterface {
    fn default() -> Self {
        ConsoleInterface {}
    }
}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, program: &str, error: ParseError) {
        eprintln!("{program}: {error}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        error: RefCell<Option<String>>,
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> Option<String> {
            self.error.into_inner()
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print_error(&self, program: &str, error: ParseError) {
            self.error.replace(Some(format!("{program}: {error}")));
        }
    }
}
