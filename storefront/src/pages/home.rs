//! Landing page.

use harvest_commerce::catalog::{Category, Product};
use harvest_commerce::search::CategoryFilter;
use leptos::prelude::*;

use crate::components::ProductGrid;
use crate::state::Storefront;

#[component]
pub fn HomePage(shop: Storefront) -> impl IntoView {
    let featured: Vec<Product> = shop.with_catalog(|catalog| catalog.featured().cloned().collect());

    view! {
        <section class="hero">
            <h1>"From the Hills of " <span class="accent">"Chikmagalur"</span></h1>
            <p>"Estate-grown coffee, arecanut and black pepper, sold direct by the families who farm them."</p>
            <a href="/products" class="btn btn-primary">"Explore Products"</a>
        </section>

        <section class="featured">
            <div class="section-header">
                <h2>"Featured " <span class="accent">"Products"</span></h2>
                <a href="/products">"View all"</a>
            </div>
            <ProductGrid products=featured/>
        </section>

        <section class="categories">
            <h2>"Explore Our " <span class="accent">"Categories"</span></h2>
            <div class="category-grid">
                {Category::ALL.into_iter().map(|category| view! { <CategoryBanner category=category/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CategoryBanner(category: Category) -> impl IntoView {
    view! {
        <a href=CategoryFilter::from(category).href() class="category-banner">
            <img src=category.banner_image() alt=category.label()/>
            <div class="category-text">
                <h3>{category.label()}</h3>
                <p>{category.tagline()}</p>
                <span class="btn btn-outline">"Shop Now"</span>
            </div>
        </a>
    }
}
