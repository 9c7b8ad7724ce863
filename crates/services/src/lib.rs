pub mod chat;
pub mod narrative;
pub mod scraper;

pub use chat::*;
pub use narrative::*;
pub use scraper::*;
