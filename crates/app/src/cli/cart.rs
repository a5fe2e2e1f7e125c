use clap::{Args, Subcommand};
use souk_cart::{Cart, prices::format_mad};
use tabled::builder::Builder;

use super::{ConnectionArgs, catalog::print_table};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart with its totals
    Show(ShowArgs),
    /// Add units of a product
    Add(AddArgs),
    /// Remove a line
    Remove(LineArgs),
    /// Replace the quantity of a line
    Update(UpdateArgs),
    /// Empty the cart
    Clear(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Product identifier
    id: u64,

    /// Variant label, e.g. a pack weight
    #[arg(long)]
    variant: Option<String>,

    /// Units to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

#[derive(Debug, Args)]
struct LineArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Product identifier
    id: u64,

    /// Variant label
    #[arg(long)]
    variant: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Product identifier
    id: u64,

    /// New quantity; values below 1 are rejected
    quantity: u32,

    /// Variant label
    #[arg(long)]
    variant: Option<String>,
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show(args) => show(&args),
        CartSubcommand::Add(args) => add(args).await,
        CartSubcommand::Remove(args) => remove(&args),
        CartSubcommand::Update(args) => update(&args),
        CartSubcommand::Clear(args) => clear(&args),
    }
}

fn show(args: &ShowArgs) -> Result<(), String> {
    let store = args.connection.cart_store();

    print_cart(store.cart());

    Ok(())
}

async fn add(args: AddArgs) -> Result<(), String> {
    let client = args.connection.client();

    let product = client
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to fetch product {}: {error}", args.id))?;

    let mut store = args.connection.cart_store();
    store.add(&product.to_snapshot(), args.variant.as_deref(), args.quantity);

    print_cart(store.cart());

    Ok(())
}

fn remove(args: &LineArgs) -> Result<(), String> {
    let mut store = args.connection.cart_store();
    store.remove(args.id, args.variant.as_deref());

    print_cart(store.cart());

    Ok(())
}

fn update(args: &UpdateArgs) -> Result<(), String> {
    if args.quantity < 1 {
        return Err("quantity must be at least 1; use `souk cart remove` to drop a line".to_string());
    }

    let mut store = args.connection.cart_store();
    store.update_quantity(args.id, args.quantity, args.variant.as_deref());

    print_cart(store.cart());

    Ok(())
}

fn clear(args: &ShowArgs) -> Result<(), String> {
    let mut store = args.connection.cart_store();
    store.clear();

    println!("cart emptied");

    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Variant", "Unit Price", "Qty", "Line Total"]);

    for line in cart.lines() {
        builder.push_record([
            line.product_id.to_string(),
            line.display_name.clone(),
            line.variant.clone().unwrap_or_default(),
            format_mad(line.unit_price),
            line.quantity.to_string(),
            format_mad(line.line_total()),
        ]);
    }

    print_table(builder);

    println!("items: {}", cart.count());
    println!("subtotal: {}", format_mad(cart.subtotal()));
    println!("delivery: {}", format_mad(cart.delivery_fee()));
    println!("total: {}", format_mad(cart.total()));
}
