use clap::{Args, Subcommand};
use souk_client::{ApiError, orders::OrderStatus};
use tabled::builder::Builder;

use super::{ConnectionArgs, catalog::print_table};

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Open an admin session
    Login(LoginArgs),
    /// Close the admin session
    Logout(LogoutArgs),
    /// List every order
    Orders(OrdersArgs),
    /// Move an order to a new status
    SetStatus(SetStatusArgs),
    /// Show per-day order counts
    Stats(StatsArgs),
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Admin username
    #[arg(long, env = "SOUK_ADMIN_USER")]
    username: String,

    /// Admin password
    #[arg(long, env = "SOUK_ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
struct LogoutArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(Debug, Args)]
struct OrdersArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(Debug, Args)]
struct SetStatusArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Order identifier
    id: u64,

    /// New status (PENDING, CONFIRMED, SHIPPED, DELIVERED, CANCELLED)
    status: OrderStatus,
}

#[derive(Debug, Args)]
struct StatsArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

pub(crate) async fn run(command: AdminCommand) -> Result<(), String> {
    match command.command {
        AdminSubcommand::Login(args) => login(args).await,
        AdminSubcommand::Logout(args) => logout(&args),
        AdminSubcommand::Orders(args) => orders(args).await,
        AdminSubcommand::SetStatus(args) => set_status(args).await,
        AdminSubcommand::Stats(args) => stats(args).await,
    }
}

async fn login(args: LoginArgs) -> Result<(), String> {
    let client = args.connection.client();

    client
        .login(&args.username, &args.password)
        .await
        .map_err(|error| format!("login failed: {error}"))?;

    println!("logged in as {}", args.username);

    Ok(())
}

fn logout(args: &LogoutArgs) -> Result<(), String> {
    let client = args.connection.client();

    client
        .logout()
        .map_err(|error| format!("logout failed: {error}"))?;

    println!("logged out");

    Ok(())
}

async fn orders(args: OrdersArgs) -> Result<(), String> {
    let client = args.connection.client();

    let orders = client
        .list_orders()
        .await
        .map_err(|error| describe("list orders", &error))?;

    if orders.is_empty() {
        println!("no orders");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Date", "Client", "Phone", "City", "Status", "Items"]);

    for order in &orders {
        builder.push_record([
            order.id.to_string(),
            order.created_at.strftime("%Y-%m-%d").to_string(),
            order.customer_name.clone(),
            order.phone.clone(),
            order.city.clone(),
            order.status.to_string(),
            order.items_description.clone(),
        ]);
    }

    print_table(builder);

    Ok(())
}

async fn set_status(args: SetStatusArgs) -> Result<(), String> {
    let client = args.connection.client();

    let order = client
        .update_order_status(args.id, args.status)
        .await
        .map_err(|error| describe("update order", &error))?;

    println!("order {} is now {}", order.id, order.status);

    Ok(())
}

async fn stats(args: StatsArgs) -> Result<(), String> {
    let client = args.connection.client();

    let stats = client
        .daily_stats()
        .await
        .map_err(|error| describe("fetch stats", &error))?;

    if stats.is_empty() {
        println!("no orders yet");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Date", "Orders"]);

    for stat in &stats {
        builder.push_record([stat.date.to_string(), stat.count.to_string()]);
    }

    print_table(builder);

    let total: u64 = stats.iter().map(|stat| stat.count).sum();
    println!("total orders: {total}");

    Ok(())
}

fn describe(action: &str, error: &ApiError) -> String {
    match error {
        ApiError::SessionExpired => {
            "session expired; run `souk admin login` to start a new one".to_string()
        }
        error => format!("failed to {action}: {error}"),
    }
}
