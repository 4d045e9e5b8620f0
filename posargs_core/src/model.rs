/// The declaration order of the required and optional runs in a positional spec list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Required specs are declared first (or there are only required specs).
    #[default]
    RequiredFirst,
    /// Optional specs are declared first (or there are only optional specs).
    OptionalFirst,
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
