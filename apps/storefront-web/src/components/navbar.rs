use leptos::prelude::*;
use storefront_commerce::session::Page;

use crate::app::{use_session, STORE_NAME};
use crate::components::CartModal;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let cart_open = RwSignal::new(false);
    let item_count = move || session.with(|s| s.cart().item_count());

    view! {
        <nav class="navbar">
            <a href=Page::Catalog.path() class="brand">{STORE_NAME}</a>
            <button class="cart-button" on:click=move |_| cart_open.set(true)>
                "Cart"
                <Show when=move || { item_count() > 0 }>
                    <span class="badge">{item_count}</span>
                </Show>
            </button>
        </nav>
        <CartModal open=cart_open/>
    }
}
