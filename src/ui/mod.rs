pub mod controls;
pub mod legend;
pub mod popup;
