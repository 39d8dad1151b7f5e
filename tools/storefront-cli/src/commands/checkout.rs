//! Scripted checkout: add items, ship, pay, confirm.

use anyhow::{bail, Result};
use storefront_commerce::cart::TAX_RATE_PERCENT;
use storefront_commerce::checkout::{BillingAddress, CardDetails, PaymentRequest};
use storefront_commerce::session::{Page, StorefrontSession};
use tracing::info;

use super::CheckoutArgs;
use crate::context::Context;

fn step(ctx: &Context, page: Page, msg: &str) {
    ctx.output.step(page.step().into(), Page::ALL.len(), msg);
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.new_session()?;

    ctx.output.header(&format!("{} - Checkout", ctx.config.store.name));

    // Step 1: Fill the cart
    step(ctx, Page::Catalog, "Adding items to cart");
    for item in &args.items {
        session.add_to_cart(&item.product_id, item.quantity)?;
        ctx.output
            .debug(&format!("Added {} x {}", item.quantity, item.product_id));
    }
    ctx.output.pricing(&session.cart().pricing(), TAX_RATE_PERCENT);

    // Step 2: Shipping details
    step(ctx, Page::Checkout, "Submitting shipping details");
    let landing = session.navigate(Page::Checkout);
    if let Some(notice) = landing.notice {
        ctx.output.notice(notice);
        bail!("{}", notice.message());
    }
    let shipping = ctx.load_details(&args.shipping)?;
    session.submit_shipping(shipping)?;

    // Step 3: Payment
    step(ctx, Page::Payment, "Processing payment");
    let billing = match &args.billing {
        Some(path) => BillingAddress::Separate(ctx.load_details(path)?),
        None => BillingAddress::SameAsShipping,
    };
    let card = CardDetails {
        card_number: args.card_number,
        card_name: args.card_name,
        expiry_date: args.expiry,
        cvv: args.cvv,
    };
    pay(&mut session, PaymentRequest::new(card, billing), ctx).await?;

    // Step 4: Confirmation
    step(ctx, Page::Confirmation, "Done!");
    let landing = session.navigate(Page::Confirmation);
    let order = session.confirmation()?;
    info!(page = landing.page.path(), order_id = %order.id, "confirmation shown");
    ctx.output.order(order);

    Ok(())
}

/// Submit payment and wait out the processing delay behind a spinner.
pub async fn pay(
    session: &mut StorefrontSession,
    request: PaymentRequest,
    ctx: &Context,
) -> Result<()> {
    if session.navigate(Page::Payment).page != Page::Payment {
        bail!("Shipping details are required before payment");
    }

    let receipt = session.submit_payment(request)?;

    let spinner = ctx
        .output
        .spinner(&format!("Processing payment of {}...", receipt.total.display()));
    tokio::time::sleep(receipt.delay).await;
    spinner.finish_and_clear();

    ctx.output.success(&format!(
        "Payment of {} accepted (order {})",
        receipt.total.display(),
        receipt.order_id
    ));

    Ok(())
}
