//! Order confirmation.

use leptos::prelude::*;
use storefront_commerce::checkout::CustomerDetails;
use storefront_commerce::session::Page;

use crate::app::{enter, use_session, GuardRedirect};
use crate::components::OrderSummaryPanel;

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let session = use_session();
    let landing = enter(session, Page::Confirmation);
    // Snapshot: leaving the page discards the order from the session.
    let order = session.with_untracked(|s| s.last_order().cloned());
    let Some(order) = order.filter(|_| landing.page == Page::Confirmation) else {
        return view! { <GuardRedirect landing/> }.into_any();
    };

    let billing = order.distinct_billing_address().cloned();

    view! {
        <div class="confirmation">
            <h1>{Page::Confirmation.title()}</h1>
            <p class="success">"Thank you for your order!"</p>
            <p class="muted">"Order number: " {order.id.to_string()}</p>

            <div class="checkout">
                <div class="panel">
                    <AddressCard title="Shipping Address" details=order.shipping_address.clone()/>
                    {billing.map(|b| view! { <AddressCard title="Billing Address" details=b/> })}
                </div>
                <aside>
                    <OrderSummaryPanel
                        items=order.items.clone()
                        subtotal=order.subtotal
                        tax=order.tax
                        shipping=order.shipping
                        total=order.total
                    />
                </aside>
            </div>

            <a class="btn" href=Page::Catalog.path()>"Continue Shopping"</a>
        </div>
    }
    .into_any()
}

#[component]
fn AddressCard(title: &'static str, details: CustomerDetails) -> impl IntoView {
    view! {
        <div class="address">
            <h2>{title}</h2>
            {details.lines().into_iter().map(|line| view! { <p>{line}</p> }).collect::<Vec<_>>()}
            <p class="muted">{details.email.clone()}</p>
        </div>
    }
}
