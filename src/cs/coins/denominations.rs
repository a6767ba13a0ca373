use crate::error::{Error, Result};

/// Face values used when no other set is supplied.
pub const STANDARD_DENOMINATIONS: [usize; 6] = [50, 25, 10, 5, 2, 1];

/// An immutable set of coin face values, stored in descending order.
///
/// Every value is positive and appears once. The set is built once and then
/// passed by reference into each change-making algorithm.
///
/// # Examples
///
/// ```
/// use change_algos::coins::Denominations;
///
/// let coins = Denominations::new(vec![1, 10, 5, 10]).unwrap();
/// assert_eq!(coins.as_slice(), &[10, 5, 1]);
/// assert!(Denominations::new(vec![]).is_err());
/// assert!(Denominations::new(vec![5, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    values: Vec<usize>,
}

impl Denominations {
    /// Builds a set from arbitrary face values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDenominations` if `values` is empty or holds a zero.
    pub fn new(mut values: Vec<usize>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::invalid_denominations(
                "at least one denomination is required",
            ));
        }
        if values.contains(&0) {
            return Err(Error::invalid_denominations(
                "denominations must be positive",
            ));
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();
        Ok(Self { values })
    }

    /// The standard set `[50, 25, 10, 5, 2, 1]`.
    pub fn standard() -> Self {
        Self {
            values: STANDARD_DENOMINATIONS.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    /// Iterates face values from largest to smallest.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn largest(&self) -> usize {
        self.values[0]
    }

    pub fn smallest(&self) -> usize {
        self.values[self.values.len() - 1]
    }

    pub fn contains(&self, value: usize) -> bool {
        self.values.contains(&value)
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<usize>> for Denominations {
    type Error = Error;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[usize]> for Denominations {
    type Error = Error;

    fn try_from(values: &[usize]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}
