use clap::{Args, Subcommand};
use souk_cart::Cart;
use souk_client::orders::{NewOrder, OrderStatus};

use super::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Place an order for the current cart
    Place(PlaceArgs),
}

#[derive(Debug, Args)]
struct PlaceArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Buyer's full name
    #[arg(long)]
    name: String,

    /// Buyer's phone number
    #[arg(long)]
    phone: String,

    /// Delivery city
    #[arg(long)]
    city: String,

    /// Optional note for the courier
    #[arg(long)]
    note: Option<String>,
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::Place(args) => place(args).await,
    }
}

async fn place(args: PlaceArgs) -> Result<(), String> {
    let mut store = args.connection.cart_store();

    if store.cart().is_empty() {
        return Err("cart is empty; add products before placing an order".to_string());
    }

    let order = NewOrder {
        customer_name: args.name,
        phone: args.phone,
        city: args.city,
        address: args
            .note
            .map_or_else(|| "Pas d'adresse spécifiée".to_string(), |note| format!("Note: {note}")),
        items_description: checkout_description(store.cart()),
        status: OrderStatus::Pending,
    };

    let client = args.connection.client();

    let placed = client
        .create_order(&order)
        .await
        .map_err(|error| format!("failed to place order: {error}"))?;

    store.clear();

    println!("order placed");
    println!("order_id: {}", placed.id);
    println!("status: {}", placed.status);
    println!("items: {}", placed.items_description);

    Ok(())
}

/// One-line summary of the cart, e.g.
/// `Panier: Huile d'argan (250ml) (x2), Amlou (x1) (Total: 285 DH [240 + 45 liv])`.
fn checkout_description(cart: &Cart) -> String {
    let items = cart
        .lines()
        .iter()
        .map(|line| {
            let variant = line
                .variant
                .as_deref()
                .map(|variant| format!(" ({variant})"))
                .unwrap_or_default();

            format!("{}{variant} (x{})", line.display_name, line.quantity)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Panier: {items} (Total: {} DH [{} + {} liv])",
        cart.total(),
        cart.subtotal(),
        cart.delivery_fee()
    )
}
