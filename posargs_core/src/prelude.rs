//! Traits which, typically, may be imported without concern: `use posargs::prelude::*`.

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);
}

/// Behaviour for a flag registration facility that positional parameters write into.
///
/// A parameter binds its raw values under its access name once they have been captured.
/// Callers later retrieve those values by the same name.
// Needs to be imported in order to implement a custom `ArgSpec` or registry.
pub trait FlagRegistry {
    /// Bind the raw `values` under `name`, replacing any previous binding.
    fn bind(&mut self, name: &str, values: Vec<String>);

    /// Look up the raw values bound under `name`.
    fn lookup(&self, name: &str) -> Option<&[String]>;
}
