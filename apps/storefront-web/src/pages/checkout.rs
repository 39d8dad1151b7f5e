//! Shipping details form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use storefront_commerce::error::CommerceError;
use storefront_commerce::session::{Notice, Page};

use crate::app::{enter, use_session, GuardRedirect};
use crate::components::{AddressFields, EmptySummary, NoticeModal, OrderSummaryPanel};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let session = use_session();
    let landing = enter(session, Page::Checkout);
    if landing.page != Page::Checkout {
        return view! { <GuardRedirect landing/> }.into_any();
    }

    let navigate = use_navigate();
    let details = RwSignal::new(session.with_untracked(|s| s.shipping().cloned().unwrap_or_default()));
    // An empty cart only blocks on submit.
    let notice = RwSignal::new(None::<Notice>);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = details.get_untracked();
        match session.try_update(|s| s.submit_shipping(submitted)) {
            Some(Ok(page)) => {
                error.set(None);
                navigate(page.path(), Default::default());
            }
            Some(Err(CommerceError::EmptyCart)) => notice.set(Some(Notice::EmptyCart)),
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    let summary = move || {
        session.with(|s| {
            if s.cart().is_empty() {
                return view! { <EmptySummary/> }.into_any();
            }
            let pricing = s.cart().pricing();
            view! {
                <OrderSummaryPanel
                    items=s.cart().items().to_vec()
                    subtotal=pricing.subtotal
                    tax=pricing.tax
                    shipping=pricing.shipping
                    total=pricing.total
                />
            }
            .into_any()
        })
    };

    view! {
        <h1>{Page::Checkout.title()}</h1>
        <div class="checkout">
            <form class="panel" on:submit=on_submit>
                <h2>"Shipping Information"</h2>
                <AddressFields details=details prefix="shipping"/>
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button type="submit" class="btn btn-block">"Continue to Payment"</button>
            </form>
            <aside>{summary}</aside>
        </div>
        <NoticeModal notice=notice/>
    }
    .into_any()
}
