//! Cart page with order summary.

use harvest_commerce::cart::{CartPricing, LineItem};
use leptos::prelude::*;

use crate::state::Storefront;

#[component]
pub fn CartPage(shop: Storefront) -> impl IntoView {
    view! {
        <section class="cart">
            <h1>"Your " <span class="accent">"Cart"</span></h1>
            {move || {
                let cart = shop.cart();
                if cart.is_empty() {
                    view! {
                        <div class="page-message">
                            <p>"Your cart is empty."</p>
                            <a href="/products" class="btn btn-primary">"Continue Shopping"</a>
                        </div>
                    }.into_any()
                } else {
                    let lines = cart.items.clone();
                    view! {
                        <div class="cart-grid">
                            <div class="cart-lines">
                                {lines.into_iter().map(|item| view! { <CartLine shop=shop item=item/> }).collect_view()}
                                <div class="cart-actions">
                                    <a href="/products">"Continue Shopping"</a>
                                    <button class="btn btn-danger" on:click=move |_| shop.clear_cart()>
                                        "Clear Cart"
                                    </button>
                                </div>
                            </div>
                            <OrderSummary summary=shop.summary()/>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CartLine(shop: Storefront, item: LineItem) -> impl IntoView {
    let id = item.id();
    let quantity = i64::from(item.quantity);

    view! {
        <div class="cart-line">
            <a href=item.product.href() class="cart-line-product">
                <img src=item.product.image_url.clone() alt=item.product.name.clone()/>
                <div>
                    <strong>{item.product.name.clone()}</strong>
                    <p class="category">{item.product.category.label()}</p>
                </div>
            </a>
            <span class="unit-price">{item.product.price_display()}</span>
            <div class="quantity">
                <button on:click=move |_| shop.update_quantity(id, quantity - 1)>"−"</button>
                <span class="quantity-value">{item.quantity.to_string()}</span>
                <button on:click=move |_| shop.update_quantity(id, quantity + 1)>"+"</button>
            </div>
            <strong class="line-total">{item.line_total().display()}</strong>
            <button class="remove" on:click=move |_| shop.remove_item(id)>"Remove"</button>
        </div>
    }
}

#[component]
fn OrderSummary(summary: CartPricing) -> impl IntoView {
    view! {
        <aside class="order-summary">
            <h2>"Order Summary"</h2>
            <dl>
                <dt>{summary.subtotal_label()}</dt>
                <dd>{summary.subtotal.display()}</dd>
                <dt>"Shipping"</dt>
                <dd>{summary.shipping_total.display()}</dd>
                <dt>"Tax"</dt>
                <dd>{summary.tax_total.display()}</dd>
                <dt class="total">"Total"</dt>
                <dd class="total">{summary.grand_total.display()}</dd>
            </dl>
            // No checkout backend.
            <button class="btn btn-primary btn-block">"Proceed to Checkout"</button>
        </aside>
    }
}
