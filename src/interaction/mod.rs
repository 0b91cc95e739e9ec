pub mod active_section;
pub mod popup;
pub mod reveal;
pub mod scroll_source;
pub mod smooth_scroll;
