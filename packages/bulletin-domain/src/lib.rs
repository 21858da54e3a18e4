pub mod announcement;
pub mod category;
pub mod exchange;
pub mod timestamp;

pub use announcement::{Analysis, Announcement, Details};
pub use category::{Category, CategoryId, CategoryMap};
pub use exchange::{Exchange, ExchangeScope};
