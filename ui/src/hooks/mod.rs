pub mod use_page_title;
pub mod use_stored_theme_sync;
pub mod use_system_theme;

pub use use_page_title::use_page_title;
pub use use_stored_theme_sync::use_stored_theme_sync;
pub use use_system_theme::use_system_theme;
