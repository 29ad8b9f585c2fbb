use std::cmp::Ordering;

use crate::BitString;

impl BitString {
    /// Same length and same element at every position.
    #[must_use]
    pub fn equals(&self, other: &BitString) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.elements()
            .iter()
            .zip(other.elements())
            .all(|(left, right)| left == right)
    }

    /// Length-first ordering: a shorter string is always less, whatever its contents.
    /// Strings of equal length compare element by element from the left.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let short: BitString = "011".parse().unwrap();
    /// assert!(short.less(&"100".parse().unwrap()));
    /// assert!(short.less(&"0110".parse().unwrap()));
    /// assert!(!short.less(&short));
    /// ```
    #[must_use]
    pub fn less(&self, other: &BitString) -> bool {
        match self.len().cmp(&other.len()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => {
                for (left, right) in self.elements().iter().zip(other.elements()) {
                    if left < right {
                        return true;
                    }
                    if left > right {
                        return false;
                    }
                }
                false
            }
        }
    }

    /// Neither equal nor less.
    #[must_use]
    pub fn greater(&self, other: &BitString) -> bool {
        !self.equals(other) && !self.less(other)
    }
}

impl PartialEq for BitString {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for BitString {}

impl Ord for BitString {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less(other) {
            Ordering::Less
        } else if self.equals(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for BitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
