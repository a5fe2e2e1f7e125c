use clap::{Args, Subcommand};
use souk_cart::prices::format_mad;
use souk_client::catalog::{Product, ProductFilter};
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

use super::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List every category
    Categories(CategoriesArgs),
    /// List products, optionally narrowed by category or promotion
    Products(ProductsArgs),
    /// Show a single product
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct CategoriesArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(Debug, Args)]
struct ProductsArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Restrict to a category
    #[arg(long)]
    category: Option<u64>,

    /// Restrict to promoted products
    #[arg(long)]
    promo: bool,
}

#[derive(Debug, Args)]
struct ShowArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Product identifier
    id: u64,
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Categories(args) => categories(args).await,
        CatalogSubcommand::Products(args) => products(args).await,
        CatalogSubcommand::Show(args) => show(args).await,
    }
}

async fn categories(args: CategoriesArgs) -> Result<(), String> {
    let client = args.connection.client();

    let categories = client
        .list_categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    if categories.is_empty() {
        println!("no categories");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Name"]);

    for category in &categories {
        builder.push_record([category.id.to_string(), category.display_name().to_string()]);
    }

    print_table(builder);

    Ok(())
}

async fn products(args: ProductsArgs) -> Result<(), String> {
    let client = args.connection.client();

    let filter = ProductFilter {
        category: args.category,
        promotions_only: args.promo,
    };

    let products = client
        .list_products(&filter)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Variant", "Price", "Promo"]);

    for product in &products {
        builder.push_record(product_row(product));
    }

    print_table(builder);

    Ok(())
}

async fn show(args: ShowArgs) -> Result<(), String> {
    let client = args.connection.client();

    let product = client
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to fetch product {}: {error}", args.id))?;

    println!("id: {}", product.id);
    println!("name: {}", product.display_name());

    if let Some(name_ar) = &product.name_ar {
        println!("name_ar: {name_ar}");
    }

    if let Some(weight) = &product.weight {
        println!("variant: {weight}");
    }

    println!("price: {}", format_mad(product.price.amount()));

    if product.is_promo {
        println!("promo price: {}", format_mad(product.effective_price()));
    }

    if !product.image.is_empty() {
        println!("image: {}", product.image);
    }

    Ok(())
}

fn product_row(product: &Product) -> [String; 5] {
    [
        product.id.to_string(),
        product.display_name().to_string(),
        product.weight.clone().unwrap_or_default(),
        format_mad(product.effective_price()),
        if product.is_promo { "yes" } else { "" }.to_string(),
    ]
}

pub(crate) fn print_table(builder: Builder) {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    println!("{table}");
}
