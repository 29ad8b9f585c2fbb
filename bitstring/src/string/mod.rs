mod bitstring;
mod operations;
mod ordering;

pub use bitstring::BitString;
