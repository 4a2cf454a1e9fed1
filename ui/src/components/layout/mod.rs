pub mod header;
pub mod nav;
pub mod root_layout;

pub use header::Header;
pub use nav::{NAV_LINKS, Nav, NavLink};
pub use root_layout::{BODY_DARK_CLASSES, BODY_LIGHT_CLASSES, RootLayout, body_class};
