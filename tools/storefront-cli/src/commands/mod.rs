//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};
use storefront_commerce::ids::ProductId;
use storefront_commerce::search::SortOption;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only products in stock.
    #[arg(long, conflicts_with = "out_of_stock")]
    pub in_stock: bool,

    /// Only products out of stock.
    #[arg(long)]
    pub out_of_stock: bool,

    /// Restrict to a category (repeatable).
    #[arg(long)]
    pub category: Vec<String>,

    /// Restrict to a brand (repeatable).
    #[arg(long)]
    pub brand: Vec<String>,

    /// Lowest price, inclusive.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price, inclusive.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort order: default, price-asc, price-desc, name-asc, name-desc.
    #[arg(short, long, default_value = "default", value_parser = parse_sort)]
    pub sort: SortOption,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to buy, as ID or ID:QTY (repeatable).
    #[arg(short, long = "item", required = true, value_parser = parse_item)]
    pub items: Vec<ItemSpec>,

    /// Shipping details file (TOML or JSON).
    #[arg(long)]
    pub shipping: String,

    /// Billing details file. Billing is the shipping address when omitted.
    #[arg(long)]
    pub billing: Option<String>,

    /// Card number (13-16 digits).
    #[arg(long)]
    pub card_number: String,

    /// Name on card.
    #[arg(long)]
    pub card_name: String,

    /// Expiry date, MM/YY.
    #[arg(long)]
    pub expiry: String,

    /// Card security code.
    #[arg(long)]
    pub cvv: String,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start with an item in the cart, as ID or ID:QTY (repeatable).
    #[arg(short, long = "item", value_parser = parse_item)]
    pub items: Vec<ItemSpec>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// A product ID with a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: ProductId,
    pub quantity: u32,
}

fn parse_item(s: &str) -> Result<ItemSpec, String> {
    let (id, quantity) = match s.split_once(':') {
        Some((id, qty)) => {
            let qty: u32 = qty
                .trim()
                .parse()
                .map_err(|_| format!("invalid quantity in '{}'", s))?;
            (id, qty)
        }
        None => (s, 1),
    };

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing product ID in '{}'", s));
    }
    if quantity == 0 {
        return Err(format!("quantity must be at least 1 in '{}'", s));
    }

    Ok(ItemSpec {
        product_id: ProductId::new(id),
        quantity,
    })
}

fn parse_sort(s: &str) -> Result<SortOption, String> {
    SortOption::from_str(s).ok_or_else(|| {
        let options: Vec<&str> = SortOption::ALL.iter().map(|o| o.as_str()).collect();
        format!("unknown sort '{}', expected one of: {}", s, options.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(
            parse_item("3:2").unwrap(),
            ItemSpec { product_id: ProductId::new("3"), quantity: 2 }
        );
        assert_eq!(parse_item("10").unwrap().quantity, 1);
        assert!(parse_item("3:0").is_err());
        assert!(parse_item(":2").is_err());
        assert!(parse_item("3:two").is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("price-desc").unwrap(), SortOption::PriceDesc);
        assert!(parse_sort("newest").unwrap_err().contains("name-asc"));
    }
}
