pub mod macros;
pub mod utils;
