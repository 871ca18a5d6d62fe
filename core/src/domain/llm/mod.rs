pub mod ports;
pub mod response_parser;

pub use ports::*;
pub use response_parser::*;
