//! Harvest Hub storefront
//!
//! Client-side rendered Leptos app over `harvest-commerce`:
//! - Landing page with featured products and category banners
//! - Catalog with category filter and search
//! - Product detail with quantity picker, related products and inquiry form
//! - Cart with order summary
//! - Contact page

mod app;
mod components;
mod console;
mod pages;
mod state;

pub use app::App;
pub use console::{init_console_logging, ConsoleSink, CONSOLE_FILTER};
pub use state::Storefront;
