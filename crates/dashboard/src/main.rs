//! `stockroom` console front-end.
//!
//! Every invocation loads the collection once, performs one action through
//! the dashboard controller and prints the resulting state.

use anyhow::{Result, ensure};
use clap::{Args, Parser, Subcommand};

use stockroom_client::{ClientConfig, HttpItemClient};
use stockroom_core::ItemId;
use stockroom_dashboard::Dashboard;
use stockroom_dashboard::view::{draft_heading, render_summary, render_table};

#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Inventory dashboard for the items REST API")]
struct Cli {
    /// Backend base URL. Defaults to $INVENTORY_API_BASE_URL, then
    /// http://localhost:8000/api.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show items sorted by name.
    List {
        /// Only items whose name or location contains this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show totals and the low-stock list.
    Summary,
    /// Create an item.
    Add(AddArgs),
    /// Edit an item; fields not given keep their current value.
    Update(UpdateArgs),
    /// Delete an item.
    Delete { id: ItemId },
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value_t = 0)]
    quantity: u32,
    #[arg(long, default_value = "")]
    location: String,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: ItemId,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    quantity: Option<u32>,
    #[arg(long)]
    location: Option<String>,
}

#[tokio::main]
async fn main() {
    stockroom_observability::init_with_default_filter("warn");

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli
        .base_url
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);
    tracing::debug!(base_url = config.base_url(), "using backend");
    let client = HttpItemClient::new(config);
    let mut dashboard = Dashboard::new(client);
    dashboard.load().await?;

    match cli.command {
        Command::List { search } => {
            let items = match search.as_deref() {
                Some(query) => dashboard.search(query),
                None => dashboard.sorted_items(),
            };
            if items.is_empty() {
                println!("No items yet");
            } else {
                print!("{}", render_table(&items));
            }
        }
        Command::Summary => {
            print_summary(&dashboard);
            let low = dashboard.low_stock();
            if !low.is_empty() {
                println!();
                println!("Low stock:");
                print!("{}", render_table(&low));
            }
        }
        Command::Add(args) => {
            println!("{}", draft_heading(dashboard.draft()));
            dashboard.set_name(args.name);
            dashboard.set_description(args.description);
            dashboard.set_quantity(args.quantity);
            dashboard.set_location(args.location);
            dashboard.submit().await?;
            print_summary(&dashboard);
        }
        Command::Update(args) => {
            ensure!(dashboard.edit(args.id), "Item {} not found", args.id);
            println!("{}", draft_heading(dashboard.draft()));
            if let Some(name) = args.name {
                dashboard.set_name(name);
            }
            if let Some(description) = args.description {
                dashboard.set_description(description);
            }
            if let Some(quantity) = args.quantity {
                dashboard.set_quantity(quantity);
            }
            if let Some(location) = args.location {
                dashboard.set_location(location);
            }
            dashboard.submit().await?;
            print_summary(&dashboard);
        }
        Command::Delete { id } => {
            dashboard.delete(id).await?;
            print_summary(&dashboard);
        }
    }

    Ok(())
}

fn print_summary<A>(dashboard: &Dashboard<A>) {
    let label = dashboard.last_synced_label();
    println!("{}", render_summary(&dashboard.summary(), label.as_deref()));
}
