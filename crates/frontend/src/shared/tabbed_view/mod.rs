//! Tabbed content view - a selector row plus one panel per category

pub mod view;
pub mod view_model;

pub use view::{TabBar, TabPanels};
pub use view_model::TabbedViewVm;
