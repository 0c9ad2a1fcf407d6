//! Shared, DOM-free building blocks of the site navigation bar.
//!
//! Everything here is plain data or pure logic so it can be tested natively;
//! the `frontend` crate turns it into Leptos views.

pub mod enums;
pub mod navigation;
pub mod shared;
