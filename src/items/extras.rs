//! Extras
//!
//! Coffee add-ins and sandwich add-ons are small sets that remember the order in which
//! they were chosen, since that order is how they are listed on a ticket.

use smallvec::SmallVec;

use crate::pricing::{Price, sum_prices};

/// An option that can be added on top of a menu item.
pub trait Extra: Copy + Eq {
    /// Lower-case display name, e.g. `whipped cream`.
    fn label(self) -> &'static str;

    /// Price of one unit of the extra.
    fn price(self) -> Price;
}

/// An insertion-ordered set of extras.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extras<T: Extra> {
    values: SmallVec<[T; 5]>,
}

impl<T: Extra> Default for Extras<T> {
    fn default() -> Self {
        Self {
            values: SmallVec::new(),
        }
    }
}

impl<T: Extra> Extras<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extra, returning `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(value) {
            return false;
        }

        self.values.push(value);

        true
    }

    /// Removes an extra, returning `false` if it was not present.
    pub fn remove(&mut self, value: T) -> bool {
        match self.values.iter().position(|v| *v == value) {
            Some(idx) => {
                self.values.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Checks whether an extra has been chosen.
    pub fn contains(&self, value: T) -> bool {
        self.values.contains(&value)
    }

    /// Number of extras chosen.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no extras have been chosen.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the extras in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// Combined price of one of each chosen extra.
    pub fn price(&self) -> Price {
        sum_prices(self.iter().map(Extra::price))
    }

    /// Labels joined with `, `, in the order the extras were added.
    pub fn describe(&self) -> String {
        self.iter().map(Extra::label).collect::<Vec<_>>().join(", ")
    }
}

impl<T: Extra> FromIterator<T> for Extras<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut extras = Self::new();

        for value in iter {
            extras.insert(value);
        }

        extras
    }
}

impl<T: Extra> Extend<T> for Extras<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
