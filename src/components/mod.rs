pub mod app;
pub mod header;
pub mod location_detail;
pub mod location_menu;
pub mod map_canvas;
pub mod zoom_controls;
