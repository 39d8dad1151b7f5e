//! Card details, billing address and simulated payment.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use storefront_commerce::checkout::{BillingAddress, CardDetails, CustomerDetails, PaymentRequest};
use storefront_commerce::session::Page;

use crate::app::{enter, use_session, GuardRedirect};
use crate::components::{AddressFields, OrderSummaryPanel};

#[component]
pub fn PaymentPage() -> impl IntoView {
    let session = use_session();
    let landing = enter(session, Page::Payment);
    if landing.page != Page::Payment {
        return view! { <GuardRedirect landing/> }.into_any();
    }

    let navigate = use_navigate();
    let card = RwSignal::new(CardDetails::default());
    let same_as_shipping = RwSignal::new(true);
    let billing = RwSignal::new(CustomerDetails::default());
    let processing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }

        let billing_choice = if same_as_shipping.get_untracked() {
            BillingAddress::SameAsShipping
        } else {
            BillingAddress::Separate(billing.get_untracked())
        };
        let request = PaymentRequest::new(card.get_untracked(), billing_choice);

        match session.try_update(|s| s.submit_payment(request)) {
            Some(Ok(receipt)) => {
                error.set(None);
                processing.set(true);
                let navigate = navigate.clone();
                set_timeout(
                    move || navigate(Page::Confirmation.path(), Default::default()),
                    receipt.delay,
                );
            }
            Some(Err(e)) => match e.redirect() {
                Some(page) => navigate(page.path(), Default::default()),
                None => error.set(Some(e.to_string())),
            },
            None => {}
        }
    };

    let summary = move || {
        session.with(|s| {
            // The cart is already empty while the payment "processes".
            match s.last_order().filter(|_| processing.get()) {
                Some(order) => view! {
                    <OrderSummaryPanel
                        items=order.items.clone()
                        subtotal=order.subtotal
                        tax=order.tax
                        shipping=order.shipping
                        total=order.total
                    />
                }
                .into_any(),
                None => {
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
                }
            }
        })
    };

    let card_input = move |label: &'static str,
                           id: &'static str,
                           placeholder: &'static str,
                           pattern: &'static str,
                           get: fn(&CardDetails) -> &String,
                           set: fn(&mut CardDetails, String)| {
        view! {
            <div class="field">
                <label for=id>{label}</label>
                <input
                    id=id
                    type="text"
                    required=true
                    placeholder=placeholder
                    pattern=pattern
                    prop:value=move || card.with(|c| get(c).clone())
                    on:input=move |ev| card.update(|c| set(c, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <h1>{Page::Payment.title()}</h1>
        <div class="checkout">
            <form class="panel" on:submit=on_submit>
                <h2>"Payment Information"</h2>
                {card_input("Card Number", "card-number", "1234 5678 9012 3456", "[0-9 ]{13,19}",
                    |c| &c.card_number, |c, v| c.card_number = v)}
                {card_input("Name on Card", "card-name", "", ".+",
                    |c| &c.card_name, |c, v| c.card_name = v)}
                <div class="field-row">
                    {card_input("Expiry Date", "expiry-date", "MM/YY", "(0[1-9]|1[0-2])/?[0-9]{2}",
                        |c| &c.expiry_date, |c, v| c.expiry_date = v)}
                    {card_input("CVV", "cvv", "123", "[0-9]{3,4}",
                        |c| &c.cvv, |c, v| c.cvv = v)}
                </div>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || same_as_shipping.get()
                        on:change=move |ev| same_as_shipping.set(event_target_checked(&ev))
                    />
                    " Billing address same as shipping"
                </label>
                <Show when=move || !same_as_shipping.get()>
                    <h2>"Billing Address"</h2>
                    <AddressFields details=billing prefix="billing"/>
                </Show>

                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button type="submit" class="btn btn-block" disabled=move || processing.get()>
                    {move || if processing.get() { "Processing payment..." } else { "Pay Now" }}
                </button>
            </form>
            <aside>{summary}</aside>
        </div>
    }
    .into_any()
}
