pub use element::{Element, ONE, ZERO};

pub mod element;
