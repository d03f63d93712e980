//! Routed pages.

mod cart;
mod contact;
mod home;
mod product;
mod products;

pub use cart::CartPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use product::ProductPage;
pub use products::ProductsPage;
