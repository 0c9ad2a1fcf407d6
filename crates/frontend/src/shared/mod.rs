pub mod components;
pub mod icons;
pub mod motion_css;
