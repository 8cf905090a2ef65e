pub mod factory;
pub mod job;
pub mod locks;
pub mod registry;
pub mod resolver;
pub mod util;

pub use factory::*;
pub use job::*;
pub use locks::*;
pub use registry::*;
pub use resolver::*;
pub use util::*;
