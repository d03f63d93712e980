//! Product tiles.

use harvest_commerce::catalog::{Product, PLACEHOLDER_IMAGE};
use leptos::prelude::*;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let image_url = product.image_url.clone();
    let src = move || {
        if image_failed.get() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            image_url.clone()
        }
    };

    view! {
        <a href=product.href() class="product-card">
            <div class="product-image">
                <img src=src alt=product.name.clone() on:error=move |_| image_failed.set(true)/>
                <span class="category-badge">{product.category.slug()}</span>
            </div>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="short-description">{product.short_description.clone()}</p>
                <div class="product-footer">
                    <span class="price">{product.price_display()}</span>
                    <span class="details-link">"View details"</span>
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="products">
            {products.into_iter().map(|product| {
                view! { <ProductCard product=product/> }
            }).collect::<Vec<_>>()}
        </div>
    }
}
