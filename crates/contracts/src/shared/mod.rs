pub mod brand;
pub mod motion;
pub mod presence;
