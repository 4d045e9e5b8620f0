use std::collections::HashSet;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::capture::*;
use crate::prelude::Collectable;

/// The value slot a field writes into.
///
/// Either the field owns its value, or it writes through to a variable supplied by the caller.
#[derive(Debug)]
pub enum Destination<'a, T> {
    /// The field owns the value; read it back via the [`FlagSet`](crate::FlagSet).
    Owned(T),
    /// The field writes into a caller's variable.
    Borrowed(&'a mut T),
}

impl<'a, T> Destination<'a, T> {
    /// The current value of the slot.
    pub fn get(&self) -> &T {
        match self {
            Destination::Owned(value) => value,
            Destination::Borrowed(value) => &**value,
        }
    }

    fn get_mut(&mut self) -> &mut T {
        match self {
            Destination::Owned(value) => value,
            Destination::Borrowed(value) => &mut **value,
        }
    }
}

impl<'a, T> From<&'a mut T> for Destination<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Destination::Borrowed(value)
    }
}

fn convert<T: FromStr>(token: &str) -> Result<T, InvalidCapture> {
    T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// A field that takes a single value (precisely 1).
pub struct Scalar<'a, T> {
    destination: Destination<'a, T>,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar field that writes into `variable`.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            destination: Destination::Borrowed(variable),
        }
    }

    /// Create a scalar field that owns its value, starting at `initial`.
    pub fn owned(initial: T) -> Self {
        Self {
            destination: Destination::Owned(initial),
        }
    }

    /// The current value.
    pub fn value(&self) -> &T {
        self.destination.get()
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T>
where
    T: FromStr,
{
    fn capture(&mut self, tokens: &[&str]) -> Result<(), InvalidCapture> {
        match tokens {
            [token] => {
                *self.destination.get_mut() = convert(token)?;
                Ok(())
            }
            [] => Err(InvalidCapture::Missing),
            _ => Err(InvalidCapture::TooManyValues {
                provided: tokens.len(),
                expected: 1,
            }),
        }
    }

    fn is_slice(&self) -> bool {
        false
    }

    fn max_length(&self) -> usize {
        0
    }
}

/// A field that takes multiple values, up to `max_length` of them (`0` for unbounded).
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    destination: Destination<'a, C>,
    max_length: usize,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection field that adds into `variable`.
    /// A `max_length` of `0` means unbounded.
    pub fn new(variable: &'a mut C, max_length: usize) -> Self {
        Self {
            destination: Destination::Borrowed(variable),
            max_length,
            _phantom: PhantomData,
        }
    }

    /// Create an unbounded collection field that adds into `variable`.
    pub fn unbounded(variable: &'a mut C) -> Self {
        Self::new(variable, 0)
    }

    /// Create a collection field that owns its collection, starting at `initial`.
    pub fn owned(initial: C, max_length: usize) -> Self {
        Self {
            destination: Destination::Owned(initial),
            max_length,
            _phantom: PhantomData,
        }
    }

    /// The current collection.
    pub fn value(&self) -> &C {
        self.destination.get()
    }
}

impl<'a, C, T> GenericCapturable<'a, T> for Collection<'a, C, T>
where
    T: FromStr,
    C: 'a + Collectable<T>,
{
    fn capture(&mut self, tokens: &[&str]) -> Result<(), InvalidCapture> {
        let values = tokens
            .iter()
            .map(|token| convert::<T>(token))
            .collect::<Result<Vec<T>, InvalidCapture>>()?;
        let collection = self.destination.get_mut();

        for value in values {
            collection.add(value);
        }

        Ok(())
    }

    fn is_slice(&self) -> bool {
        true
    }

    fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn vec() {
        let mut collection: Vec<u32> = Vec::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, vec![1, 0]);
    }

    #[test]
    fn hash_set() {
        let mut collection: HashSet<u32> = HashSet::default();
        collection.add(1);
        collection.add(0);
        collection.add(1);
        assert_eq!(collection, HashSet::from([1, 0]));
    }

    #[test]
    fn scalar_capture() {
        // Integer
        let mut variable: u32 = u32::default();
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture(&["5"]).unwrap();
        assert_eq!(variable, 5);

        // Boolean
        let mut variable: bool = false;
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture(&["true"]).unwrap();
        assert!(variable);
    }

    #[test]
    fn scalar_owned() {
        let mut scalar: Scalar<String> = Scalar::owned("initial".to_string());
        assert_eq!(scalar.value(), "initial");
        scalar.capture(&["abc"]).unwrap();
        assert_eq!(scalar.value(), "abc");
    }

    #[rstest]
    #[case(vec![], InvalidCapture::Missing)]
    #[case(vec!["1", "2"], InvalidCapture::TooManyValues { provided: 2, expected: 1 })]
    #[case(vec!["x"], InvalidCapture::InvalidConversion { token: "x".to_string(), type_name: "u32" })]
    fn scalar_invalid(#[case] tokens: Vec<&str>, #[case] expected: InvalidCapture) {
        let mut variable: u32 = 7;
        let mut scalar = Scalar::new(&mut variable);
        assert_eq!(scalar.capture(tokens.as_slice()).unwrap_err(), expected);
        assert_eq!(variable, 7);
    }

    #[test]
    fn collection_capture() {
        // Vec<u32>
        let mut variable: Vec<u32> = Vec::default();
        let mut collection = Collection::unbounded(&mut variable);
        collection.capture(&["1", "0"]).unwrap();
        assert_eq!(variable, vec![1, 0]);

        // HashSet<u32>
        let mut variable: HashSet<u32> = HashSet::default();
        let mut collection = Collection::new(&mut variable, 3);
        collection.capture(&["1", "0", "0"]).unwrap();
        assert_eq!(variable, HashSet::from([0, 1]));
    }

    #[test]
    fn collection_extends_initial() {
        let mut variable: Vec<u32> = vec![9];
        let mut collection = Collection::unbounded(&mut variable);
        collection.capture(&["1"]).unwrap();
        assert_eq!(variable, vec![9, 1]);
    }

    #[test]
    fn collection_atomic() {
        let mut variable: Vec<u32> = Vec::default();
        let mut collection = Collection::unbounded(&mut variable);
        assert_matches!(
            collection.capture(&["1", "x", "2"]),
            Err(InvalidCapture::InvalidConversion { token, .. }) if token == "x"
        );
        assert_eq!(variable, vec![]);
    }

    #[test]
    fn collection_owned() {
        let mut collection: Collection<Vec<String>, String> = Collection::owned(Vec::default(), 2);
        collection.capture(&["a", "b"]).unwrap();
        assert_eq!(collection.value(), &vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn arity() {
        let mut variable: u32 = u32::default();
        let scalar = Scalar::new(&mut variable);
        assert!(!scalar.is_slice());
        assert_eq!(scalar.max_length(), 0);

        let mut variable: Vec<u32> = Vec::default();
        let collection = Collection::new(&mut variable, 2);
        assert!(collection.is_slice());
        assert_eq!(collection.max_length(), 2);

        let mut variable: Vec<u32> = Vec::default();
        let collection = Collection::unbounded(&mut variable);
        assert_eq!(collection.max_length(), 0);
    }

    #[test]
    fn destination() {
        let mut variable: u32 = 1;
        let destination = Destination::from(&mut variable);
        assert_eq!(destination.get(), &1);

        let destination: Destination<u32> = Destination::Owned(2);
        assert_eq!(destination.get(), &2);
    }
}
