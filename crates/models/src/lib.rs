pub mod chat;
pub mod error;
pub mod matches;
pub mod performance;
pub mod players;
pub mod predictions;
pub mod teams;
pub mod users;

pub use chat::*;
pub use error::*;
pub use matches::*;
pub use performance::*;
pub use players::*;
pub use predictions::*;
pub use teams::*;
pub use users::*;
