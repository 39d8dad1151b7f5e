//! Product listing with filter sidebar.

use leptos::prelude::*;
use storefront_commerce::money::Money;
use storefront_commerce::search::{CatalogQuery, Facets, SortOption, StockFilter};
use storefront_commerce::session::Page;

use crate::app::{enter, use_session};
use crate::components::ProductCard;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    // Always granted; entering discards a shown order summary.
    enter(session, Page::Catalog);

    let (facets, currency, initial) = session.with_untracked(|s| {
        let catalog = s.catalog();
        (Facets::from_catalog(catalog), catalog.currency(), CatalogQuery::new(catalog))
    });
    let query = RwSignal::new(initial);

    let products = move || {
        session.with(|s| {
            query.with(|q| q.apply(s.catalog()).into_iter().cloned().collect::<Vec<_>>())
        })
    };
    let is_active = move || session.with(|s| query.with(|q| q.is_active(s.catalog())));
    let reset = move |_| session.with_untracked(|s| query.update(|q| q.reset(s.catalog())));

    let set_price = move |value: String, upper: bool| {
        if let Ok(amount) = value.trim().parse::<f64>() {
            let price = Money::from_decimal(amount, currency);
            query.update(|q| {
                if upper {
                    q.filter.set_max_price(price)
                } else {
                    q.filter.set_min_price(price)
                }
            });
        }
    };

    let categories = facets
        .categories
        .iter()
        .map(|facet| {
            let value = facet.value.clone();
            let checked_value = value.clone();
            view! {
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.filter.categories.contains(&checked_value))
                        on:change=move |_| query.update(|q| q.filter.toggle_category(&value))
                    />
                    {format!(" {} ({})", facet.value, facet.count)}
                </label>
            }
        })
        .collect::<Vec<_>>();

    let brands = facets
        .brands
        .iter()
        .map(|facet| {
            let value = facet.value.clone();
            let checked_value = value.clone();
            view! {
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.filter.brands.contains(&checked_value))
                        on:change=move |_| query.update(|q| q.filter.toggle_brand(&value))
                    />
                    {format!(" {} ({})", facet.value, facet.count)}
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="listing">
            <aside class="filters">
                <div class="filters-header">
                    <h2>"Filter"</h2>
                    <Show when=is_active>
                        <button class="link" aria-label="Clear all filters and sorting" on:click=reset>
                            "Clear all"
                        </button>
                    </Show>
                </div>

                <h3>"Availability"</h3>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.filter.stock == StockFilter::InStock)
                        on:change=move |ev| query.update(|q| q.filter.set_in_stock(event_target_checked(&ev)))
                    />
                    {format!(" In stock ({})", facets.in_stock)}
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.filter.stock == StockFilter::OutOfStock)
                        on:change=move |ev| query.update(|q| q.filter.set_out_of_stock(event_target_checked(&ev)))
                    />
                    {format!(" Out of stock ({})", facets.out_of_stock)}
                </label>

                <h3>"Price"</h3>
                <div class="price-range">
                    <input
                        type="number"
                        step="0.01"
                        aria-label="Minimum price"
                        prop:value=move || query.with(|q| q.filter.price.min.display_amount())
                        on:change=move |ev| set_price(event_target_value(&ev), false)
                    />
                    <span>"to"</span>
                    <input
                        type="number"
                        step="0.01"
                        aria-label="Maximum price"
                        prop:value=move || query.with(|q| q.filter.price.max.display_amount())
                        on:change=move |ev| set_price(event_target_value(&ev), true)
                    />
                </div>

                <h3>"Product type"</h3>
                {categories}

                <h3>"Brand"</h3>
                {brands}
            </aside>

            <section class="products">
                <div class="toolbar">
                    <span class="muted">{move || format!("{} products", products().len())}</span>
                    <label for="sort-select">"Sort by: "</label>
                    <select
                        id="sort-select"
                        prop:value=move || query.with(|q| q.sort.as_str())
                        on:change=move |ev| {
                            if let Some(sort) = SortOption::from_str(&event_target_value(&ev)) {
                                query.update(|q| q.sort = sort);
                            }
                        }
                    >
                        {SortOption::ALL
                            .into_iter()
                            .map(|o| view! { <option value=o.as_str()>{o.display_name()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="grid">
                    {move || {
                        products()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}
