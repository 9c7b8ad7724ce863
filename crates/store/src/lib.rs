pub mod seed;
pub mod store;

pub use seed::*;
pub use store::*;
