use derive_more::Into;

use crate::bit::element::{ElementBitIterator, is_valid_element, iter_bits, parse_char, render};
use crate::{BitStringError, Element};
use std::str::FromStr;

/// An owned, fixed-length string of 0/1 elements with value semantics.
///
/// Every operation leaves its operands untouched and returns a new `BitString`.
///
/// # Construction
///
/// ```
/// use bitstring::BitString;
///
/// let empty = BitString::new();
/// let zeros = BitString::zeros(4);
/// let from_text: BitString = "10110".parse().unwrap();
/// let from_elements = BitString::from_elements(&[1, 0, 1, 1, 0]).unwrap();
/// let from_iter: BitString = [true, false, true].into_iter().collect();
///
/// assert_eq!(empty.size(), 0);
/// assert_eq!(zeros.to_string(), "0000");
/// assert_eq!(from_text, from_elements);
/// assert_eq!(from_iter.to_string(), "101");
/// ```
///
/// Validating constructors reject anything but 0/1:
///
/// ```
/// use bitstring::{BitString, ErrorKind};
///
/// let error = BitString::from_text("10a1").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// assert!(BitString::from_elements(&[1, 2]).is_err());
/// ```
///
/// # Operations
///
/// ```
/// use bitstring::BitString;
///
/// let left = BitString::from_elements(&[1, 0, 1, 1]).unwrap();
/// let right = BitString::from_elements(&[1, 1, 0, 0]).unwrap();
///
/// let and = left.bit_and(&right).unwrap();
/// let or = left.bit_or(&right).unwrap();
/// assert_eq!(and.add(&or).to_string(), "10001111");
/// assert_eq!(left.subtract(&right).unwrap().size(), 0);
/// assert!(right.less(&and.add(&or)));
/// ```
#[must_use]
#[derive(Clone, Default, Into)]
pub struct BitString {
    elements: Vec<Element>,
}

impl BitString {
    /// Creates an empty `BitString`.
    pub fn new() -> BitString {
        BitString { elements: Vec::new() }
    }

    /// Creates a `BitString` of `size` copies of `value`.
    ///
    /// `value` is stored as given, without checking that it is 0 or 1.
    /// [`bit_not`](BitString::bit_not) treats any non-zero element as set for complementing,
    /// while rendering and [`iter`](BitString::iter) only treat 1 as set.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// assert_eq!(BitString::with_default(3, 1).to_string(), "111");
    /// assert_eq!(BitString::with_default(2, 7).bit_not().to_string(), "00");
    /// ```
    pub fn with_default(size: usize, value: Element) -> BitString {
        BitString {
            elements: vec![value; size],
        }
    }

    pub fn zeros(size: usize) -> BitString {
        Self::with_default(size, crate::ZERO)
    }

    pub fn ones(size: usize) -> BitString {
        Self::with_default(size, crate::ONE)
    }

    /// Creates a `BitString` holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::InvalidElement`] for the first value that is neither 0 nor 1.
    pub fn from_elements(values: &[Element]) -> Result<BitString, BitStringError> {
        validate_elements(values)?;
        Ok(Self::from_raw(values.to_vec()))
    }

    /// Parses a string of `'0'` and `'1'` characters, one element per character.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::InvalidCharacter`] for the first other character; its
    /// position counts characters, not bytes.
    pub fn from_text(text: &str) -> Result<BitString, BitStringError> {
        let elements = text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                parse_char(character).ok_or_else(|| {
                    log::debug!("rejecting character {character:?} at position {position}");
                    BitStringError::InvalidCharacter { position, character }
                })
            })
            .collect::<Result<Vec<Element>, BitStringError>>()?;
        Ok(Self::from_raw(elements))
    }

    /// Creates a `BitString` of `size` uniformly random elements.
    pub fn random(size: usize, random_number_generator: &mut impl rand::Rng) -> BitString {
        (0..size).map(|_| random_number_generator.r#gen::<bool>()).collect()
    }

    pub(crate) fn from_raw(elements: Vec<Element>) -> BitString {
        BitString { elements }
    }

    /// Moves the contents out, leaving `self` empty.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let mut source: BitString = "101".parse().unwrap();
    /// let moved = source.take();
    /// assert_eq!(moved.to_string(), "101");
    /// assert!(source.is_empty());
    /// ```
    pub fn take(&mut self) -> BitString {
        std::mem::take(self)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<Element> {
        self.elements.get(index).copied()
    }

    #[must_use]
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// Returns an iterator over the elements as booleans, `true` where the element is 1.
    pub fn iter(&self) -> ElementBitIterator<'_> {
        iter_bits(&self.elements)
    }
}

fn validate_elements(values: &[Element]) -> Result<(), BitStringError> {
    match values.iter().position(|value| !is_valid_element(*value)) {
        Some(position) => {
            let value = values[position];
            log::debug!("rejecting element {value} at position {position}");
            Err(BitStringError::InvalidElement { position, value })
        }
        None => Ok(()),
    }
}

impl TryFrom<&[Element]> for BitString {
    type Error = BitStringError;

    fn try_from(values: &[Element]) -> Result<Self, Self::Error> {
        Self::from_elements(values)
    }
}

impl TryFrom<Vec<Element>> for BitString {
    type Error = BitStringError;

    fn try_from(values: Vec<Element>) -> Result<Self, Self::Error> {
        validate_elements(&values)?;
        Ok(Self::from_raw(values))
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<Bits: IntoIterator<Item = bool>>(bits: Bits) -> Self {
        Self::from_raw(bits.into_iter().map(Element::from).collect())
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for element in &self.elements {
            write!(f, "{}", render(*element))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitString(len={},value={})", self.len(), self)
    }
}

impl std::hash::Hash for BitString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl AsRef<[Element]> for BitString {
    fn as_ref(&self) -> &[Element] {
        &self.elements
    }
}

impl<'life> IntoIterator for &'life BitString {
    type Item = bool;
    type IntoIter = ElementBitIterator<'life>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
