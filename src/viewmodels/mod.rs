pub mod navigation_viewmodel;
pub mod page_viewmodel;

pub use navigation_viewmodel::{in_page_anchor, nav_links, scroll_target_offset, NavLink, QUOTE_ANCHOR};
pub use page_viewmodel::*;
