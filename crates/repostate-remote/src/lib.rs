pub mod contract;
pub mod file_remote;
pub mod static_remote;

pub use contract::*;
pub use file_remote::*;
pub use static_remote::*;
