pub mod clipboard;
pub mod components;
pub mod icons;
pub mod page_frame;
pub mod sql_format;
pub mod tabbed_view;
