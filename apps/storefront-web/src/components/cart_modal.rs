use leptos::prelude::*;
use storefront_commerce::cart::{CartItem, TAX_RATE_PERCENT};
use storefront_commerce::session::Page;

use crate::app::use_session;

/// Slide-over cart with quantity steppers and totals.
#[component]
pub fn CartModal(open: RwSignal<bool>) -> impl IntoView {
    let session = use_session();

    let items = move || session.with(|s| s.cart().items().to_vec());
    let pricing = move || session.with(|s| s.cart().pricing());
    let is_empty = move || session.with(|s| s.cart().is_empty());

    view! {
        <Show when=move || open.get()>
            <div class="overlay" on:click=move |_| open.set(false)>
                <div class="cart-panel" on:click=|ev| ev.stop_propagation()>
                    <div class="cart-header">
                        <h2>"Your Cart"</h2>
                        <button class="close" on:click=move |_| open.set(false)>"✕"</button>
                    </div>

                    <div class="cart-items">
                        <Show
                            when=move || !is_empty()
                            fallback=|| view! { <p class="muted">"Your cart is empty."</p> }
                        >
                            {move || items().into_iter().map(|item| view! { <CartLine item=item/> }).collect::<Vec<_>>()}
                        </Show>
                    </div>

                    <div class="cart-footer">
                        <div class="row">
                            <span>"Subtotal:"</span>
                            <span>{move || pricing().subtotal.display()}</span>
                        </div>
                        <div class="row">
                            <span>{format!("Tax ({}%):", TAX_RATE_PERCENT)}</span>
                            <span>{move || pricing().tax.display()}</span>
                        </div>
                        <div class="row total">
                            <span>"Total:"</span>
                            <span id="cart-modal-summary-total">{move || pricing().total.display()}</span>
                        </div>
                        <Show
                            when=move || !is_empty()
                            fallback=|| view! { <button class="btn btn-block" disabled=true>"Confirm"</button> }
                        >
                            <a
                                class="btn btn-block"
                                id="cart-modal-confirm"
                                href=Page::Checkout.path()
                                on:click=move |_| open.set(false)
                            >
                                "Confirm"
                            </a>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let session = use_session();
    let id = item.product.id.clone();
    let (dec_id, inc_id, remove_id) = (id.clone(), id.clone(), id);

    view! {
        <div class="cart-line">
            <img src=item.product.image_url.clone() alt=item.product.name.clone() width="80" height="80"/>
            <div class="cart-line-info">
                <p class="name">{item.product.name.clone()}</p>
                <p class="muted">{item.product.price.display()} " each"</p>
                <p class="line-total">{item.line_total().display()}</p>
            </div>
            <div class="stepper">
                <button on:click=move |_| session.update(|s| {
                    s.cart_mut().decrement(&dec_id);
                })>"−"</button>
                <span>{item.quantity}</span>
                <button on:click=move |_| session.update(|s| {
                    s.cart_mut().increment(&inc_id);
                })>"+"</button>
            </div>
            <button class="link danger" on:click=move |_| session.update(|s| {
                s.cart_mut().remove(&remove_id);
            })>"Remove"</button>
        </div>
    }
}
