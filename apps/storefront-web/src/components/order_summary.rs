use leptos::prelude::*;
use storefront_commerce::cart::{CartItem, TAX_RATE_PERCENT};
use storefront_commerce::money::Money;
use storefront_commerce::session::Page;

/// Items and totals, as shown beside the checkout forms and on confirmation.
#[component]
pub fn OrderSummaryPanel(
    items: Vec<CartItem>,
    subtotal: Money,
    tax: Money,
    shipping: Money,
    total: Money,
) -> impl IntoView {
    view! {
        <div class="summary">
            <h2>"Order Summary"</h2>
            {items
                .into_iter()
                .map(|item| view! {
                    <div class="row">
                        <span>{format!("{} × {}", item.product.name, item.quantity)}</span>
                        <span>{item.line_total().display()}</span>
                    </div>
                })
                .collect::<Vec<_>>()}
            <hr/>
            <div class="row"><span>"Subtotal"</span><span>{subtotal.display()}</span></div>
            <div class="row">
                <span>{format!("Tax ({}%)", TAX_RATE_PERCENT)}</span>
                <span>{tax.display()}</span>
            </div>
            <div class="row">
                <span>"Shipping"</span>
                <span>{if shipping.is_zero() { "Free".to_string() } else { shipping.display() }}</span>
            </div>
            <div class="row total"><span>"Total"</span><span>{total.display()}</span></div>
        </div>
    }
}

/// Summary placeholder for an empty cart.
#[component]
pub fn EmptySummary() -> impl IntoView {
    view! {
        <div class="summary">
            <h2>"Order Summary"</h2>
            <p class="muted">"Your cart is empty."</p>
            <a href=Page::Catalog.path()>"Continue shopping"</a>
        </div>
    }
}
