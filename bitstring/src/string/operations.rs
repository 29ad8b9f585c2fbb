use std::ops::{Add, Not};

use crate::bit::element::complement;
use crate::{BitString, BitStringError, Element};

fn ensure_same_length(left: &BitString, right: &BitString) -> Result<(), BitStringError> {
    if left.len() == right.len() {
        Ok(())
    } else {
        log::debug!("length mismatch: {} != {}", left.len(), right.len());
        Err(BitStringError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

impl BitString {
    fn zip_with(
        &self,
        other: &BitString,
        operation: impl Fn(Element, Element) -> Element,
    ) -> Result<BitString, BitStringError> {
        ensure_same_length(self, other)?;
        let elements = self
            .elements()
            .iter()
            .zip(other.elements())
            .map(|(left, right)| operation(*left, *right))
            .collect();
        Ok(BitString::from_raw(elements))
    }

    /// Element-wise AND.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::LengthMismatch`] when the lengths differ.
    pub fn bit_and(&self, other: &BitString) -> Result<BitString, BitStringError> {
        self.zip_with(other, |left, right| left & right)
    }

    /// Element-wise OR.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::LengthMismatch`] when the lengths differ.
    pub fn bit_or(&self, other: &BitString) -> Result<BitString, BitStringError> {
        self.zip_with(other, |left, right| left | right)
    }

    /// Element-wise XOR.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::LengthMismatch`] when the lengths differ.
    pub fn bit_xor(&self, other: &BitString) -> Result<BitString, BitStringError> {
        self.zip_with(other, |left, right| left ^ right)
    }

    /// Element-wise complement; zero becomes one, everything else becomes zero.
    pub fn bit_not(&self) -> BitString {
        BitString::from_raw(self.elements().iter().copied().map(complement).collect())
    }

    /// Concatenation: the elements of `self` followed by those of `other`.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let left = BitString::from_elements(&[1, 0, 1]).unwrap();
    /// let right = BitString::from_elements(&[0, 1]).unwrap();
    /// assert_eq!(left.add(&right).to_string(), "10101");
    /// ```
    pub fn add(&self, other: &BitString) -> BitString {
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend_from_slice(self.elements());
        elements.extend_from_slice(other.elements());
        BitString::from_raw(elements)
    }

    /// Truncation: keeps the first `self.len() - other.len()` elements of `self`.
    ///
    /// Only the length of `other` matters.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let long = BitString::from_elements(&[1, 0, 1, 1, 0]).unwrap();
    /// let short = BitString::from_elements(&[0, 1]).unwrap();
    /// assert_eq!(long.subtract(&short).unwrap().to_string(), "101");
    /// assert!(short.subtract(&long).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::NegativeSize`] when `other` is longer than `self`.
    pub fn subtract(&self, other: &BitString) -> Result<BitString, BitStringError> {
        let Some(remaining) = self.len().checked_sub(other.len()) else {
            log::debug!("negative size: {} - {}", self.len(), other.len());
            return Err(BitStringError::NegativeSize {
                minuend: self.len(),
                subtrahend: other.len(),
            });
        };
        if remaining == 0 {
            return Ok(BitString::new());
        }
        Ok(BitString::from_raw(self.elements()[..remaining].to_vec()))
    }
}

impl Not for &BitString {
    type Output = BitString;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl Not for BitString {
    type Output = BitString;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl Add for &BitString {
    type Output = BitString;

    fn add(self, other: Self) -> Self::Output {
        BitString::add(self, other)
    }
}
