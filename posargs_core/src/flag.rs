use std::collections::HashMap;
use std::str::FromStr;

use crate::prelude::FlagRegistry;

/// The raw values bound by positional parameters during a parse, keyed by access name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagSet {
    values: HashMap<String, Vec<String>>,
}

impl FlagRegistry for FlagSet {
    fn bind(&mut self, name: &str, values: Vec<String>) {
        self.values.insert(name.to_string(), values);
    }

    fn lookup(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }
}

impl FlagSet {
    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a `FlagSet` directly, for testing code that reads parsed values.
    ///
    /// ### Example
    /// ```
    /// # use posargs_core as posargs;
    /// use posargs::FlagSet;
    ///
    /// let flag_set = FlagSet::with_values(vec![("count", vec!["3"])]);
    /// assert_eq!(flag_set.value::<u32>("count"), Some(3));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn with_values(pairs: Vec<(&str, Vec<&str>)>) -> Self {
        let mut flag_set = FlagSet::default();

        for (name, values) in pairs {
            flag_set.bind(name, values.into_iter().map(String::from).collect());
        }

        flag_set
    }

    /// Whether any value was bound under `name`.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The first value bound under `name`, converted to `T`.
    ///
    /// Returns `None` when nothing was bound, or when the value does not convert.
    pub fn value<T: FromStr>(&self, name: &str) -> Option<T> {
        self.lookup(name)?
            .first()
            .and_then(|value| T::from_str(value).ok())
    }

    /// All the values bound under `name`, converted to `T`.
    ///
    /// Returns `None` when nothing was bound, or when any value does not convert.
    pub fn values<T: FromStr>(&self, name: &str) -> Option<Vec<T>> {
        self.lookup(name)?
            .iter()
            .map(|value| T::from_str(value).ok())
            .collect()
    }

    /// The number of bound names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
