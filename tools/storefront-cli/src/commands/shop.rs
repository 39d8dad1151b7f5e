//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Password, Select};
use storefront_commerce::cart::TAX_RATE_PERCENT;
use storefront_commerce::catalog::Product;
use storefront_commerce::checkout::{
    AddressField, BillingAddress, CardDetails, CustomerDetails, PaymentRequest,
};
use storefront_commerce::search::{CatalogQuery, SortOption};
use storefront_commerce::session::{Page, StorefrontSession};

use super::catalog::print_products;
use super::checkout::pay;
use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and does not support --json");
    }

    let mut session = ctx.new_session()?;
    for item in &args.items {
        session.add_to_cart(&item.product_id, item.quantity)?;
    }

    ctx.output.header(&format!("Welcome to {}", ctx.config.store.name));

    loop {
        let menu = [
            "Browse products".to_string(),
            "Add to cart".to_string(),
            format!("View cart ({})", session.cart().item_count()),
            "Checkout".to_string(),
            "Quit".to_string(),
        ];
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(&session, ctx)?,
            1 => add_to_cart(&mut session, ctx)?,
            2 => view_cart(&mut session, ctx)?,
            3 => checkout(&mut session, ctx).await?,
            _ => break,
        }
    }

    Ok(())
}

fn browse(session: &StorefrontSession, ctx: &Context) -> Result<()> {
    let catalog = session.catalog();
    let labels: Vec<&str> = SortOption::ALL.iter().map(|o| o.display_name()).collect();
    let sort = Select::new()
        .with_prompt("Sort by")
        .items(&labels)
        .default(0)
        .interact()?;

    let mut query = CatalogQuery::new(catalog).with_sort(SortOption::ALL[sort]);
    let in_stock_only = Confirm::new()
        .with_prompt("Only show products in stock?")
        .default(false)
        .interact()?;
    query.filter.set_in_stock(in_stock_only);

    print_products(&query.apply(catalog), ctx);
    Ok(())
}

fn add_to_cart(session: &mut StorefrontSession, ctx: &Context) -> Result<()> {
    let available: Vec<&Product> = session
        .catalog()
        .products()
        .iter()
        .filter(|p| p.is_in_stock)
        .collect();
    let labels: Vec<String> = available
        .iter()
        .map(|p| format!("{} - {}", p.name, p.price.display()))
        .collect();

    let index = Select::new()
        .with_prompt("Product")
        .items(&labels)
        .default(0)
        .interact()?;
    let quantity: u32 = Input::new()
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;

    let product_id = available[index].id.clone();
    let name = available[index].name.clone();
    session.add_to_cart(&product_id, quantity)?;
    if quantity > 0 {
        ctx.output.success(&format!("Added {} x {} to cart", quantity, name));
    }
    Ok(())
}

fn view_cart(session: &mut StorefrontSession, ctx: &Context) -> Result<()> {
    loop {
        if session.cart().is_empty() {
            ctx.output.info("Your cart is empty");
            return Ok(());
        }

        print_cart(session, ctx);

        let action = Select::new()
            .with_prompt("Cart")
            .items(&["Change quantity", "Remove item", "Back"])
            .default(2)
            .interact()?;
        if action == 2 {
            return Ok(());
        }

        let names: Vec<String> = session
            .cart()
            .items()
            .iter()
            .map(|i| i.product.name.clone())
            .collect();
        let index = Select::new()
            .with_prompt("Item")
            .items(&names)
            .default(0)
            .interact()?;
        let product_id = session.cart().items()[index].product.id.clone();

        if action == 0 {
            // Zero or less removes the item.
            let quantity: i64 = Input::new()
                .with_prompt("New quantity")
                .default(i64::from(session.cart().items()[index].quantity))
                .interact_text()?;
            session.cart_mut().set_quantity(&product_id, quantity);
        } else {
            session.cart_mut().remove(&product_id);
        }
    }
}

fn print_cart(session: &StorefrontSession, ctx: &Context) {
    ctx.output.header("Shopping Cart");
    for item in session.cart().items() {
        ctx.output.table_row(
            &[
                &item.product.name,
                &format!("{} x {}", item.product.price.display(), item.quantity),
                &item.line_total().display(),
            ],
            &[24, 16, 10],
        );
    }
    ctx.output.info("");
    ctx.output.pricing(&session.cart().pricing(), TAX_RATE_PERCENT);
}

async fn checkout(session: &mut StorefrontSession, ctx: &Context) -> Result<()> {
    let landing = session.navigate(Page::Checkout);
    if let Some(notice) = landing.notice {
        ctx.output.notice(notice);
        session.navigate(notice.action_target());
        return Ok(());
    }

    print_cart(session, ctx);

    ctx.output.header("Shipping Information");
    loop {
        let details = prompt_details(session.shipping())?;
        match session.submit_shipping(details) {
            Ok(_) => break,
            Err(e) => {
                ctx.output.error(&e.to_string());
                if !Confirm::new().with_prompt("Try again?").default(true).interact()? {
                    session.navigate(Page::Catalog);
                    return Ok(());
                }
            }
        }
    }

    ctx.output.header("Payment Information");
    let request = prompt_payment()?;
    if let Err(e) = pay(session, request, ctx).await {
        ctx.output.error(&format!("{:#}", e));
        return Ok(());
    }

    session.navigate(Page::Confirmation);
    ctx.output.order(session.confirmation()?);

    // Back to the catalog; the order summary is discarded.
    session.navigate(Page::Catalog);
    Ok(())
}

fn prompt_details(initial: Option<&CustomerDetails>) -> Result<CustomerDetails> {
    let mut details = CustomerDetails::default();
    for field in AddressField::ALL {
        let mut input = Input::<String>::new()
            .with_prompt(field.label())
            .allow_empty(!field.required());
        if let Some(existing) = initial.map(|d| d.field(field)).filter(|v| !v.is_empty()) {
            input = input.with_initial_text(existing);
        }
        details.set_field(field, input.interact_text()?);
    }
    Ok(details)
}

fn prompt_payment() -> Result<PaymentRequest> {
    let card = CardDetails {
        card_number: Input::new().with_prompt("Card Number").interact_text()?,
        card_name: Input::new().with_prompt("Name on Card").interact_text()?,
        expiry_date: Input::new().with_prompt("Expiry Date (MM/YY)").interact_text()?,
        cvv: Password::new().with_prompt("CVV").interact()?,
    };

    let same = Confirm::new()
        .with_prompt("Billing address same as shipping?")
        .default(true)
        .interact()?;
    let billing = if same {
        BillingAddress::SameAsShipping
    } else {
        BillingAddress::Separate(prompt_details(None)?)
    };

    Ok(PaymentRequest::new(card, billing))
}
