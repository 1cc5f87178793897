pub mod macros;
pub mod properties;
