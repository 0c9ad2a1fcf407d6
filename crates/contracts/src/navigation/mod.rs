pub mod catalog;
pub mod links;
pub mod state;

pub use catalog::{
    category_href, slugify, validate_catalog, CatalogError, ProductCategory, PRODUCT_CATEGORIES,
};
pub use links::{NavLink, NavLinkKind, DESKTOP_LINKS, MOBILE_LINKS};
pub use state::{NavEvent, NavState, ToggleGlyph};
