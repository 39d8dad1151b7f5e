//! End-to-end checkout flow over the demo catalog.

use std::time::Duration;
use storefront_commerce::prelude::*;

fn shipping() -> CustomerDetails {
    CustomerDetails {
        full_name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        address_line1: "1 Compiler Way".into(),
        address_line2: "Suite 100".into(),
        city: "Arlington".into(),
        state: "VA".into(),
        zip_code: "22201".into(),
        country: "United States".into(),
    }
}

fn card() -> CardDetails {
    CardDetails {
        card_number: "4111111111111111".into(),
        card_name: "GRACE HOPPER".into(),
        expiry_date: "1228".into(),
        cvv: "737".into(),
    }
}

#[test]
fn full_checkout_with_separate_billing() {
    let mut session = StorefrontSession::new(Catalog::demo()).with_processing_delay(Duration::ZERO);

    // Browse: in-stock footwear, cheapest first.
    let mut query = CatalogQuery::new(session.catalog()).with_sort(SortOption::PriceAsc);
    query.filter.set_in_stock(true);
    query.filter.toggle_category("Footwear");
    let ids: Vec<String> = query
        .apply(session.catalog())
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids, vec!["9", "3"]);

    for id in &ids {
        session.add_to_cart(&ProductId::new(id.as_str()), 1).unwrap();
    }
    session.add_to_cart(&ProductId::new("9"), 1).unwrap();
    assert_eq!(session.cart().unique_item_count(), 2);
    assert_eq!(session.cart().item_count(), 3);

    // 2 × 39.99 + 79.99 = 159.97; tax 19.1964 → 19.20
    let pricing = session.cart().pricing();
    assert_eq!(pricing.subtotal.amount_cents, 15997);
    assert_eq!(pricing.tax.amount_cents, 1920);
    assert_eq!(pricing.total.display(), "$179.17");

    assert_eq!(
        session.navigate(Page::Checkout),
        Landing { page: Page::Checkout, notice: None }
    );
    assert_eq!(session.submit_shipping(shipping()).unwrap(), Page::Payment);
    assert_eq!(session.navigate(Page::Payment).page, Page::Payment);

    let mut billing = shipping();
    billing.full_name = "US Navy Accounts".into();
    let receipt = session
        .submit_payment(PaymentRequest::new(card(), BillingAddress::Separate(billing)))
        .unwrap();
    assert_eq!(receipt.total, pricing.total);
    assert_eq!(receipt.delay, Duration::ZERO);
    assert!(session.cart().is_empty());

    assert_eq!(session.navigate(Page::Confirmation).page, Page::Confirmation);
    let order = session.confirmation().unwrap();
    assert_eq!(order.id, receipt.order_id);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.shipping_address, shipping());
    assert_eq!(
        order.distinct_billing_address().map(|b| b.full_name.as_str()),
        Some("US Navy Accounts")
    );

    session.navigate(Page::Catalog);
    assert!(session.confirmation().is_err());
    assert_eq!(session.navigate(Page::Confirmation).page, Page::Catalog);
}

#[test]
fn payment_with_empty_cart_goes_back_to_checkout() {
    let mut session = StorefrontSession::default();
    let err = session
        .submit_payment(PaymentRequest::new(card(), BillingAddress::SameAsShipping))
        .unwrap_err();
    assert_eq!(err, CommerceError::EmptyCart);
    assert_eq!(err.redirect(), Some(Page::Checkout));

    let landing = session.navigate(Page::Payment);
    assert_eq!(landing.page, Page::Checkout);
    assert_eq!(landing.notice, Some(Notice::EmptyCart));
}

#[test]
fn second_order_after_confirmation() {
    let mut session = StorefrontSession::default();
    session.add_to_cart(&ProductId::new("5"), 1).unwrap();
    session.submit_shipping(shipping()).unwrap();
    let first = session
        .submit_payment(PaymentRequest::new(card(), BillingAddress::SameAsShipping))
        .unwrap();
    session.navigate(Page::Confirmation);
    session.navigate(Page::Catalog);

    // Shipping details survive; only the cart was consumed.
    session.add_to_cart(&ProductId::new("10"), 3).unwrap();
    assert_eq!(session.navigate(Page::Payment).page, Page::Payment);
    let second = session
        .submit_payment(PaymentRequest::new(card(), BillingAddress::SameAsShipping))
        .unwrap();
    assert_ne!(first.order_id, second.order_id);
    assert_eq!(session.confirmation().unwrap().item_count(), 3);
}
