//! Storefront in the browser.
//!
//! Client-side rendered Leptos app over `storefront-commerce`:
//! - Product listing with filter sidebar and sorting
//! - Cart modal with quantity stepper
//! - Checkout, payment and confirmation pages behind session guards

mod app;
mod components;
mod pages;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(app::App);
}
