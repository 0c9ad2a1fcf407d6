pub mod category_icon;

pub use category_icon::CategoryIcon;
