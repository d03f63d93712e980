//! Catalog listing with category filter and search.

use harvest_commerce::search::{CatalogQuery, CategoryFilter, CATEGORY_PARAM};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::ProductGrid;
use crate::state::Storefront;

#[component]
pub fn ProductsPage(shop: Storefront) -> impl IntoView {
    let query = use_query_map();
    let filter = Memo::new(move |_| {
        query.with(|params| CategoryFilter::from_param(params.get(CATEGORY_PARAM).as_deref()))
    });
    let term = RwSignal::new(String::new());

    let results = move || {
        let query = CatalogQuery::new()
            .with_category(filter.get())
            .with_term(term.get());
        shop.with_catalog(|catalog| query.run(catalog).into_iter().cloned().collect::<Vec<_>>())
    };

    let heading = move || match filter.get() {
        CategoryFilter::All => "All Products".to_string(),
        only => format!("{} Products", only.label()),
    };

    view! {
        <section class="catalog">
            <h1>{heading}</h1>

            <div class="catalog-controls">
                <input
                    type="search"
                    class="search"
                    placeholder="Search products..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <div class="filters">
                    {CategoryFilter::CHOICES.into_iter().map(|choice| {
                        view! {
                            <a
                                href=choice.href()
                                class="filter"
                                class:active=move || filter.get() == choice
                            >
                                {choice.label()}
                            </a>
                        }
                    }).collect_view()}
                </div>
            </div>

            {move || {
                let products = results();
                if products.is_empty() {
                    view! {
                        <div class="page-message">
                            <p>"No products match your search."</p>
                            <button class="btn btn-outline" on:click=move |_| term.set(String::new())>
                                "Clear search"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    view! { <ProductGrid products=products/> }.into_any()
                }
            }}
        </section>
    }
}
