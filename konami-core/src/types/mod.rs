pub mod key_code;

pub use key_code::*;
