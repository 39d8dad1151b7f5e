//! Application shell, routes and shared session state.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use storefront_commerce::catalog::Catalog;
use storefront_commerce::session::{Landing, Page, StorefrontSession};

use crate::components::Navbar;
use crate::pages::{CatalogPage, CheckoutPage, ConfirmationPage, PaymentPage};

pub const STORE_NAME: &str = "TechStore";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(StorefrontSession::new(Catalog::demo())));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Storefront demo - catalog, cart and checkout in Rust + WASM"/>
        <Title text=STORE_NAME/>

        <Router>
            <Navbar/>
            <main class="container">
                <Routes fallback>
                    <Route path=path!("") view=CatalogPage/>
                    <Route path=path!("/checkout") view=CheckoutPage/>
                    <Route path=path!("/payment") view=PaymentPage/>
                    <Route path=path!("/confirmation") view=ConfirmationPage/>
                </Routes>
            </main>
            <footer>
                <p>"Payments are simulated. No card data leaves this page."</p>
            </footer>
        </Router>
    }
}

/// The session shared by every page.
pub fn use_session() -> RwSignal<StorefrontSession> {
    expect_context::<RwSignal<StorefrontSession>>()
}

/// Enter `page`: run its guard and record the landing page on the session.
pub fn enter(session: RwSignal<StorefrontSession>, page: Page) -> Landing {
    session
        .try_update(|s| s.navigate(page))
        .unwrap_or(Landing { page, notice: None })
}

/// Redirect to wherever the guard sent us.
#[component]
pub fn GuardRedirect(landing: Landing) -> impl IntoView {
    view! { <Redirect path=landing.page.path()/> }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=Page::Catalog.path()>"Back to Home"</a>
        </div>
    }
}
