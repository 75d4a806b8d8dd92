//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, capitalising element symbols or using consistent scientific
//! formatting for yields are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod num_format;
mod string_ext;

// Flatten
pub use num_format::NumFormat;
pub use string_ext::StringExt;
