pub mod analytics;
pub mod layout;
pub mod markdown;
pub mod mode_toggle;

pub use analytics::Analytics;
pub use markdown::Markdown;
pub use mode_toggle::ModeToggle;
