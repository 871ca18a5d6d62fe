pub mod entities;
pub mod ports;
pub mod services;
#[cfg(test)]
pub(crate) mod test_support;

pub use entities::*;
pub use ports::*;
