use leptos::prelude::*;
use storefront_commerce::catalog::Product;

use crate::app::use_session;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let session = use_session();
    let in_stock = product.is_in_stock;
    let discount = product.discount_percent();
    let original = product.original_price.display();
    let to_add = product.clone();
    let stock_label = if in_stock { "In stock" } else { "Out of stock" };
    let card_class = if in_stock { "product-card" } else { "product-card out-of-stock" };

    view! {
        <div class=card_class>
            <div class="product-image">
                <img src=product.image_url.clone() alt=product.name.clone()/>
                {discount.map(|pct| view! { <span class="sale-badge">{format!("-{}%", pct)}</span> })}
            </div>
            <p class="brand">{product.brand.clone()}</p>
            <h3>{product.name.clone()}</h3>
            <p class="rating">
                {product.stars()} " " <span class="muted">{format!("({})", product.reviews)}</span>
            </p>
            <p class="price">
                {product.price.display()}
                {discount.map(|_| view! { " " <s class="muted">{original}</s> })}
            </p>
            <p class="stock">{stock_label}</p>
            <button
                class="btn btn-block"
                disabled=!in_stock
                on:click=move |_| session.update(|s| {
                    if let Err(e) = s.cart_mut().add_one(&to_add) {
                        tracing::warn!(product_id = %to_add.id, error = %e, "add to cart failed");
                    }
                })
            >
                "Add to Cart"
            </button>
        </div>
    }
}
