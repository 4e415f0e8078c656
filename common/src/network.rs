pub mod family;
pub mod range;
