pub mod tabbed_view;
