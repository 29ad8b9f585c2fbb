use std::iter::Map;
use std::slice::Iter;

/// Storage type of a single position of a [`BitString`](crate::BitString).
///
/// Validating constructors only ever store [`ZERO`] or [`ONE`]. Other values can only be
/// introduced through [`BitString::with_default`](crate::BitString::with_default), and the
/// helpers below give them a fixed interpretation.
pub type Element = u8;

pub const ZERO: Element = 0;
pub const ONE: Element = 1;

#[inline]
#[must_use]
pub fn is_valid_element(element: Element) -> bool {
    element == ZERO || element == ONE
}

/// Logical complement: anything non-zero maps to [`ZERO`].
#[inline]
#[must_use]
pub fn complement(element: Element) -> Element {
    if element == ZERO { ONE } else { ZERO }
}

/// Only [`ONE`] renders as `'1'`.
#[inline]
#[must_use]
pub fn render(element: Element) -> char {
    if element == ONE { '1' } else { '0' }
}

#[inline]
#[must_use]
pub fn parse_char(character: char) -> Option<Element> {
    match character {
        '0' => Some(ZERO),
        '1' => Some(ONE),
        _ => None,
    }
}

#[inline]
fn is_set(element: &Element) -> bool {
    *element == ONE
}

/// Elements as booleans, `true` exactly where the element is [`ONE`].
pub type ElementBitIterator<'life> = Map<Iter<'life, Element>, fn(&Element) -> bool>;

pub fn iter_bits(elements: &[Element]) -> ElementBitIterator<'_> {
    elements.iter().map(is_set as fn(&Element) -> bool)
}
