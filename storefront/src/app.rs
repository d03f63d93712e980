//! Application shell: routes and layout.

use harvest_commerce::catalog::Category;
use harvest_commerce::config::StoreConfig;
use harvest_commerce::search::CategoryFilter;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{CartPage, ContactPage, HomePage, ProductPage, ProductsPage};
use crate::state::Storefront;

/// Store settings bundled with the app.
pub const STORE_CONFIG: &str = include_str!("../harvest.toml");

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shop = match StoreConfig::from_toml_str(STORE_CONFIG).and_then(Storefront::boot) {
        Ok(shop) => shop,
        Err(e) => {
            tracing::error!(error = %e, "storefront failed to start");
            return view! {
                <div class="page-message">
                    <h1>"Something went wrong"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Premium coffee, arecanut and pepper from the estates of Chikmagalur"/>
        <Title text=shop.store_name()/>

        <Router>
            <Header shop=shop/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=move || view! { <HomePage shop=shop/> }/>
                    <Route path=path!("/products") view=move || view! { <ProductsPage shop=shop/> }/>
                    <Route path=path!("/product/:id") view=move || view! { <ProductPage shop=shop/> }/>
                    <Route path=path!("/cart") view=move || view! { <CartPage shop=shop/> }/>
                    <Route path=path!("/contact") view=move || view! { <ContactPage shop=shop/> }/>
                </Routes>
            </main>
            <Footer shop=shop/>
        </Router>
    }
    .into_any()
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(shop: Storefront) -> impl IntoView {
    let badge = move || {
        let count = shop.total_items();
        (count > 0).then(|| view! { <span class="cart-badge">{count.to_string()}</span> })
    };

    view! {
        <header>
            <a href="/" class="brand">{shop.store_name()}</a>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/contact">"Contact"</a>
                <a href="/cart" class="cart-link">"Cart" {badge}</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer(shop: Storefront) -> impl IntoView {
    let contact = shop.contact();
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            view! { <li><a href=CategoryFilter::from(category).href()>{category.label()}</a></li> }
        })
        .collect_view();

    view! {
        <footer>
            <div class="footer-grid">
                <div>
                    <a href="/" class="brand">{shop.store_name()}</a>
                    <p>"Premium spices and coffee, sourced directly from the hills of Chikmagalur."</p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li><a href="/">"Home"</a></li>
                        <li><a href="/products">"Products"</a></li>
                        <li><a href="/contact">"Contact"</a></li>
                        {categories}
                    </ul>
                </div>
                <div>
                    <h3>"Connect With Us"</h3>
                    <a href=contact.instagram_url.clone() target="_blank" rel="noopener noreferrer">"Instagram"</a>
                    " "
                    <a href=contact.mailto()>{contact.email.clone()}</a>
                </div>
            </div>
        </footer>
    }
}

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page-message">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn btn-primary">"Back to Home"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = StoreConfig::from_toml_str(STORE_CONFIG).unwrap();
        assert_eq!(config, StoreConfig::default());
    }
}
