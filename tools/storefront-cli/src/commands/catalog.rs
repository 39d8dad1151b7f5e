//! List catalog products.

use anyhow::Result;
use storefront_commerce::catalog::{Catalog, Product};
use storefront_commerce::money::Money;
use storefront_commerce::search::{CatalogQuery, Facets};

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{price_label, stock_badge};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let query = build_query(&args, &catalog);
    let products = query.apply(&catalog);
    let facets = Facets::from_catalog(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "query": query,
            "facets": facets,
            "products": products,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("{} - Products", ctx.config.store.name));
    ctx.output.kv(
        "Showing",
        &format!("{} of {} products", products.len(), catalog.len()),
    );
    ctx.output.kv("Sort", query.sort.display_name());
    if query.is_active(&catalog) {
        ctx.output.debug("Filters active");
    }

    ctx.output.info("");
    print_products(&products, ctx);

    ctx.output.header("Filters");
    ctx.output.kv("In stock", &facets.in_stock.to_string());
    ctx.output.kv("Out of stock", &facets.out_of_stock.to_string());
    ctx.output.kv(
        "Price range",
        &format!("{} - {}", facets.min_price.display(), facets.max_price.display()),
    );
    ctx.output.info("Categories:");
    for facet in &facets.categories {
        ctx.output.list_item(&format!("{} ({})", facet.value, facet.count));
    }
    ctx.output.info("Brands:");
    for facet in &facets.brands {
        ctx.output.list_item(&format!("{} ({})", facet.value, facet.count));
    }

    Ok(())
}

const WIDTHS: [usize; 7] = [4, 22, 10, 12, 6, 12, 10];

/// Print the product table.
pub fn print_products(products: &[&Product], ctx: &Context) {
    ctx.output
        .table_row(&["ID", "Name", "Brand", "Category", "Rating", "Stock", "Price"], &WIDTHS);
    for product in products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.brand,
                &product.category,
                &product.stars(),
                &stock_badge(product.is_in_stock),
                &price_label(product),
            ],
            &WIDTHS,
        );
    }
    if products.is_empty() {
        ctx.output.warn("No products match these filters");
    }
}

/// Translate flags into a listing query over `catalog`.
fn build_query(args: &CatalogArgs, catalog: &Catalog) -> CatalogQuery {
    let mut query = CatalogQuery::new(catalog).with_sort(args.sort);
    let currency = catalog.currency();

    query.filter.set_in_stock(args.in_stock);
    query.filter.set_out_of_stock(args.out_of_stock);
    for category in &args.category {
        query.filter.toggle_category(category);
    }
    for brand in &args.brand {
        query.filter.toggle_brand(brand);
    }
    if let Some(min) = args.min_price {
        query.filter.set_min_price(Money::from_decimal(min, currency));
    }
    if let Some(max) = args.max_price {
        query.filter.set_max_price(Money::from_decimal(max, currency));
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::search::SortOption;

    fn args() -> CatalogArgs {
        CatalogArgs {
            in_stock: false,
            out_of_stock: false,
            category: Vec::new(),
            brand: Vec::new(),
            min_price: None,
            max_price: None,
            sort: SortOption::Default,
        }
    }

    fn ids(query: &CatalogQuery, catalog: &Catalog) -> Vec<String> {
        query.apply(catalog).iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_no_flags_lists_everything() {
        let catalog = Catalog::demo();
        let query = build_query(&args(), &catalog);
        assert!(!query.is_active(&catalog));
        assert_eq!(query.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_out_of_stock() {
        let catalog = Catalog::demo();
        let query = build_query(&CatalogArgs { out_of_stock: true, ..args() }, &catalog);
        assert_eq!(ids(&query, &catalog), vec!["4", "6"]);
    }

    #[test]
    fn test_brand_price_and_sort() {
        let catalog = Catalog::demo();
        let query = build_query(
            &CatalogArgs {
                brand: vec!["Nomad".into()],
                max_price: Some(59.0),
                sort: SortOption::PriceDesc,
                ..args()
            },
            &catalog,
        );
        // Sunglasses at $59.00 are included: bounds are inclusive.
        assert_eq!(ids(&query, &catalog), vec!["7", "10"]);
    }
}
