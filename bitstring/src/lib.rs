pub mod bit;
pub use bit::{Element, ONE, ZERO};

pub mod error;
pub use error::{BitStringError, ErrorKind};

pub mod string;
pub use string::BitString;

#[cfg(feature = "serde")]
pub mod serde;
