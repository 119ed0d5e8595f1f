mod category;
mod mode;
mod report;

pub use category::Category;
pub use mode::SanitizationMode;
pub use report::{MatchFamily, Redaction, SanitizationStats, SanitizedText};
