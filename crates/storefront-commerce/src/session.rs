//! Storefront session: cart, checkout state and page guards.
//!
//! A session walks a linear flow:
//!
//! ```text
//! Catalog (/) -> Checkout (/checkout) -> Payment (/payment) -> Confirmation (/confirmation)
//! ```
//!
//! Each page has a guard ([`StorefrontSession::access`]). Front ends call
//! [`StorefrontSession::navigate`] and render whatever page it lands on.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{
    BillingAddress, CustomerDetails, OrderSummary, PaymentReceipt, PaymentRequest,
    DEFAULT_PROCESSING_DELAY,
};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Catalog,
    Checkout,
    Payment,
    Confirmation,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Catalog, Page::Checkout, Page::Payment, Page::Confirmation];

    /// Route path.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Catalog => "/",
            Page::Checkout => "/checkout",
            Page::Payment => "/payment",
            Page::Confirmation => "/confirmation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Catalog => "Products",
            Page::Checkout => "Checkout",
            Page::Payment => "Payment",
            Page::Confirmation => "Order Confirmation",
        }
    }

    /// Position in the checkout flow (1-indexed).
    pub fn step(&self) -> u8 {
        match self {
            Page::Catalog => 1,
            Page::Checkout => 2,
            Page::Payment => 3,
            Page::Confirmation => 4,
        }
    }
}

/// A message a page shows instead of proceeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// Checkout was opened or submitted with nothing in the cart.
    EmptyCart,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyCart => {
                "Your cart is empty! Please add items to your cart before proceeding to payment."
            }
        }
    }

    /// Label of the notice's single action.
    pub fn action_label(&self) -> &'static str {
        match self {
            Notice::EmptyCart => "Return to Home",
        }
    }

    /// Where the notice's action goes.
    pub fn action_target(&self) -> Page {
        match self {
            Notice::EmptyCart => Page::Catalog,
        }
    }
}

/// Outcome of a page guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the page.
    Granted,
    /// Render the page with a notice that blocks submission.
    Blocked(Notice),
    /// Do not render; go to another page.
    Redirect(Page),
}

/// Page actually shown after guards ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub page: Page,
    pub notice: Option<Notice>,
}

/// In-memory state of one shopper.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Catalog,
    cart: Cart,
    shipping: Option<CustomerDetails>,
    last_order: Option<OrderSummary>,
    page: Page,
    processing_delay: Duration,
}

impl StorefrontSession {
    /// Start on the catalog page with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        let cart = Cart::with_currency(catalog.currency());
        Self {
            catalog,
            cart,
            shipping: None,
            last_order: None,
            page: Page::Catalog,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Override the simulated payment delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Shipping details captured at checkout.
    pub fn shipping(&self) -> Option<&CustomerDetails> {
        self.shipping.as_ref()
    }

    /// Order produced by the last payment, until the shopper leaves confirmation.
    pub fn last_order(&self) -> Option<&OrderSummary> {
        self.last_order.as_ref()
    }

    /// Page the session is on.
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Add a catalog product to the cart by ID.
    pub fn add_to_cart(&mut self, product_id: &ProductId, quantity: u32) -> Result<(), CommerceError> {
        let product = self.catalog.require(product_id)?;
        self.cart.add(product, quantity)
    }

    /// Evaluate the guard for `page` against the current state.
    pub fn access(&self, page: Page) -> Access {
        match page {
            Page::Catalog => Access::Granted,
            Page::Checkout if self.cart.is_empty() => Access::Blocked(Notice::EmptyCart),
            Page::Checkout => Access::Granted,
            Page::Payment if self.cart.is_empty() || self.shipping.is_none() => {
                Access::Redirect(Page::Checkout)
            }
            Page::Payment => Access::Granted,
            Page::Confirmation if self.last_order.is_none() => Access::Redirect(Page::Catalog),
            Page::Confirmation => Access::Granted,
        }
    }

    /// Go to `page`, following guard redirects.
    ///
    /// Leaving the confirmation page discards the order summary.
    pub fn navigate(&mut self, page: Page) -> Landing {
        if self.page == Page::Confirmation && page != Page::Confirmation && self.last_order.take().is_some() {
            debug!("order summary discarded");
        }

        let mut target = page;
        // Guards redirect strictly backwards in the flow, so this terminates.
        let notice = loop {
            match self.access(target) {
                Access::Granted => break None,
                Access::Blocked(notice) => break Some(notice),
                Access::Redirect(next) => {
                    debug!(from = target.path(), to = next.path(), "guard redirect");
                    target = next;
                }
            }
        };

        self.page = target;
        debug!(page = target.path(), ?notice, "navigated");
        Landing { page: target, notice }
    }

    /// Capture shipping details and move to payment.
    pub fn submit_shipping(&mut self, details: CustomerDetails) -> Result<Page, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        details.validate()?;

        info!(customer = %details.full_name, email = %details.email, "shipping details captured");
        self.shipping = Some(details);
        self.page = Page::Payment;
        Ok(Page::Payment)
    }

    /// Simulate a payment.
    ///
    /// On success the order summary is stored, the cart is emptied and the
    /// receipt tells the caller how long to wait before showing confirmation.
    pub fn submit_payment(&mut self, request: PaymentRequest) -> Result<PaymentReceipt, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let shipping = self
            .shipping
            .clone()
            .ok_or(CommerceError::MissingShippingDetails)?;
        request.validate()?;

        let PaymentRequest { card, billing } = request;
        info!(
            card_number = %card.masked_number(),
            card_name = %card.card_name,
            expiry = %card.expiry_date,
            "processing payment"
        );
        info!(address = %shipping.lines().join(", "), "shipping address");
        match &billing {
            BillingAddress::SameAsShipping => info!("billing address same as shipping"),
            BillingAddress::Separate(details) => {
                info!(address = %details.lines().join(", "), "billing address")
            }
        }

        let order = OrderSummary::from_cart(&self.cart, shipping, billing);
        let receipt = PaymentReceipt {
            order_id: order.id.clone(),
            total: order.total,
            delay: self.processing_delay,
        };
        info!(order_id = %order.id, total = %order.total, items = order.item_count(), "payment accepted");

        self.last_order = Some(order);
        self.cart.clear();
        Ok(receipt)
    }

    /// Order summary for the confirmation page.
    pub fn confirmation(&self) -> Result<&OrderSummary, CommerceError> {
        self.last_order.as_ref().ok_or(CommerceError::MissingOrder)
    }
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self::new(Catalog::demo())
    }
}
