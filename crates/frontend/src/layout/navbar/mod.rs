//! Site navigation bar.
//!
//! `NavigationBar` owns the [`NavState`](contracts::navigation::NavState)
//! signal and hands read access plus an event callback to the pieces below.

pub mod desktop_nav;
pub mod mobile_menu;
pub mod navigation_bar;
pub mod products_dropdown;

pub use desktop_nav::DesktopNav;
pub use mobile_menu::{MobileMenu, MobileMenuToggle};
pub use navigation_bar::NavigationBar;
pub use products_dropdown::{ProductsDropdown, ProductsMenu};
