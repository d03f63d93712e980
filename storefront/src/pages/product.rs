//! Product detail page.

use harvest_commerce::catalog::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{InquiryForm, ProductGrid};
use crate::state::Storefront;

#[component]
pub fn ProductPage(shop: Storefront) -> impl IntoView {
    let params = use_params_map();
    let product = Memo::new(move |_| {
        let segment = params.with(|p| p.get("id")).unwrap_or_default();
        shop.product(&segment).ok()
    });

    move || match product.get() {
        Some(product) => view! { <ProductDetail shop=shop product=product/> }.into_any(),
        None => view! { <ProductNotFound/> }.into_any(),
    }
}

#[component]
fn ProductDetail(shop: Storefront, product: Product) -> impl IntoView {
    let quantity = RwSignal::new(1u32);
    let added = RwSignal::new(false);
    let related = shop.related(&product);
    let flash = shop.forms().added_to_cart_period();
    let log = shop.logger("product").with_route(product.href());

    let to_add = product.clone();
    let add_to_cart = move |_| {
        let count = quantity.get_untracked();
        shop.add_many(&to_add, count);
        log.info_builder("added to cart")
            .field_u64("product_id", u64::from(to_add.id.get()))
            .field_u64("quantity", u64::from(count))
            .emit();
        added.set(true);
        set_timeout(move || added.set(false), flash);
    };

    view! {
        <section class="product-detail">
            <a href="/products" class="back-link">"← Back to Products"</a>
            <div class="detail-grid">
                <img class="detail-image" src=product.image_url.clone() alt=product.name.clone()/>
                <div class="detail-info">
                    <span class="category-badge">{product.category.label()}</span>
                    <h1>{product.name.clone()}</h1>
                    <p class="price">{product.price_display()}</p>
                    <p class="description">{product.description.clone()}</p>
                    <dl class="facts">
                        <dt>"Origin"</dt>
                        <dd>{product.origin.clone()}</dd>
                        <dt>"Last updated"</dt>
                        <dd>{product.last_updated.clone()}</dd>
                    </dl>

                    <div class="quantity">
                        <span>"Quantity:"</span>
                        <button
                            disabled=move || quantity.get() <= 1
                            on:click=move |_| quantity.update(|q| *q = q.saturating_sub(1).max(1))
                        >
                            "−"
                        </button>
                        <span class="quantity-value">{move || quantity.get().to_string()}</span>
                        <button on:click=move |_| quantity.update(|q| *q = q.saturating_add(1))>"+"</button>
                    </div>

                    <button class="btn btn-primary" class:added=move || added.get() on:click=add_to_cart>
                        {move || if added.get() { "Added to Cart" } else { "Add to Cart" }}
                    </button>
                </div>
            </div>

            <InquiryForm shop=shop product=product.clone()/>

            {(!related.is_empty()).then(|| view! {
                <div class="related">
                    <h2>"Related " <span class="accent">"Products"</span></h2>
                    <ProductGrid products=related/>
                </div>
            })}
        </section>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="page-message">
            <h2>"Product Not Found"</h2>
            <p>"The product you're looking for doesn't exist or has been removed."</p>
            <a href="/products" class="btn btn-primary">"Back to Products"</a>
        </div>
    }
}
