#![allow(dead_code)]

use bitstring::BitString;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// # Panics
///
/// Will panic if `values` holds anything but 0/1.
pub fn bits(values: &[u8]) -> BitString {
    BitString::from_elements(values).expect("valid elements")
}
