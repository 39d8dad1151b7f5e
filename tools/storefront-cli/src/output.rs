//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::cart::CartPricing;
use storefront_commerce::catalog::Product;
use storefront_commerce::checkout::OrderSummary;
use storefront_commerce::session::Notice;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print a blocking notice with its action.
    pub fn notice(&self, notice: Notice) {
        self.warn(notice.message());
        self.list_item(&format!(
            "{} ({})",
            notice.action_label(),
            notice.action_target().path()
        ));
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print subtotal, tax, shipping and total.
    pub fn pricing(&self, pricing: &CartPricing, tax_percent: i64) {
        self.kv("Subtotal", &pricing.subtotal.display());
        self.kv(&format!("Tax ({}%)", tax_percent), &pricing.tax.display());
        self.kv("Shipping", &shipping_label(pricing));
        self.kv("Total", &style(pricing.total.display()).bold().to_string());
    }

    /// Print an order summary as the confirmation page shows it.
    pub fn order(&self, order: &OrderSummary) {
        if self.json {
            self.json(order);
            return;
        }

        self.header("Order Confirmation");
        self.success("Thank you for your order!");
        self.kv("Order", order.id.as_str());

        self.header("Items");
        for item in &order.items {
            self.table_row(
                &[
                    &item.product.name,
                    &format!("x{}", item.quantity),
                    &item.line_total().display(),
                ],
                &[28, 5, 10],
            );
        }

        self.header("Summary");
        self.kv("Subtotal", &order.subtotal.display());
        self.kv("Tax", &order.tax.display());
        self.kv("Shipping", if order.shipping.is_zero() { "Free" } else { "" });
        self.kv("Total", &style(order.total.display()).bold().to_string());

        self.header("Shipping Address");
        for line in order.shipping_address.lines() {
            self.list_item(&line);
        }
        self.kv("Email", &order.shipping_address.email);

        if let Some(billing) = order.distinct_billing_address() {
            self.header("Billing Address");
            for line in billing.lines() {
                self.list_item(&line);
            }
            self.kv("Email", &billing.email);
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price column: sale price with the struck original and discount.
pub fn price_label(product: &Product) -> String {
    match product.discount_percent() {
        Some(pct) => format!(
            "{} (was {}, -{}%)",
            product.price.display(),
            product.original_price.display(),
            pct
        ),
        None => product.price.display(),
    }
}

/// Stock column.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In stock").green().to_string()
    } else {
        style("Out of stock").red().to_string()
    }
}

fn shipping_label(pricing: &CartPricing) -> String {
    if pricing.free_shipping() {
        "Free".to_string()
    } else {
        pricing.shipping.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Catalog;
    use storefront_commerce::ids::ProductId;

    #[test]
    fn test_price_label_on_sale() {
        let catalog = Catalog::demo();
        let headphones = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(price_label(headphones), "$99.99 (was $129.99, -23%)");

        let watch = catalog.get(&ProductId::new("2")).unwrap();
        assert_eq!(price_label(watch), "$199.99");
    }

    #[test]
    fn test_stock_badge_text() {
        console::set_colors_enabled(false);
        assert_eq!(stock_badge(true), "In stock");
        assert_eq!(stock_badge(false), "Out of stock");
    }
}
