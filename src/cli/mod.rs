use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use property_alerts::commands::{AddAlertCommand, AddPropertyCommand, SearchQuery};
use property_alerts::AppContext;

#[derive(Debug, Parser)]
#[command(name = "property-alerts", about = "Property listings and alert matching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Register an alert for new listings
    AddAlert(AddAlertArgs),
    /// List a property and notify matching alerts
    AddProperty(AddPropertyArgs),
    /// Search listed properties
    Search(SearchArgs),
}

/// Optional bounds shared by alerts and searches
#[derive(Debug, Args)]
struct BoundsArgs {
    #[arg(long, allow_negative_numbers = true)]
    min_price: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    max_price: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    min_rooms: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    max_rooms: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    min_square_meters: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    max_square_meters: Option<i32>,
}

#[derive(Debug, Args)]
struct AddAlertArgs {
    #[arg(long)]
    user_id: u64,

    /// email, sms or push
    #[arg(long)]
    alert_type: String,

    #[arg(long)]
    postal_code: String,

    #[command(flatten)]
    bounds: BoundsArgs,
}

#[derive(Debug, Args)]
struct AddPropertyArgs {
    #[arg(long)]
    id: u64,

    #[arg(long)]
    description: String,

    #[arg(long)]
    postal_code: String,

    #[arg(long, allow_negative_numbers = true)]
    price: i64,

    #[arg(long, allow_negative_numbers = true)]
    rooms: i32,

    #[arg(long, allow_negative_numbers = true)]
    square_meters: i32,

    #[arg(long)]
    owner_id: u64,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long)]
    postal_code: String,

    #[command(flatten)]
    bounds: BoundsArgs,
}

impl From<AddAlertArgs> for AddAlertCommand {
    fn from(args: AddAlertArgs) -> Self {
        let b = args.bounds;
        AddAlertCommand::new(args.user_id, args.alert_type, args.postal_code)
            .with_price(b.min_price, b.max_price)
            .with_rooms(b.min_rooms, b.max_rooms)
            .with_square_meters(b.min_square_meters, b.max_square_meters)
    }
}

impl From<AddPropertyArgs> for AddPropertyCommand {
    fn from(args: AddPropertyArgs) -> Self {
        AddPropertyCommand {
            id: args.id,
            description: args.description,
            postal_code: args.postal_code,
            price: args.price,
            number_of_rooms: args.rooms,
            square_meters: args.square_meters,
            owner_id: args.owner_id,
        }
    }
}

impl From<SearchArgs> for SearchQuery {
    fn from(args: SearchArgs) -> Self {
        let b = args.bounds;
        SearchQuery::new(args.postal_code)
            .with_price(b.min_price, b.max_price)
            .with_rooms(b.min_rooms, b.max_rooms)
            .with_square_meters(b.min_square_meters, b.max_square_meters)
    }
}

impl Cli {
    pub async fn run(self, context: &AppContext) -> Result<()> {
        match self.command {
            Commands::AddAlert(args) => {
                let result = context.add_alert.execute(args.into()).await?;
                println!(
                    "Alert registered: {} at {} for user {}",
                    result.alert.alert_type, result.alert.postal_code, result.alert.user_id
                );
            }
            Commands::AddProperty(args) => {
                let result = context.add_property.execute(args.into()).await?;
                println!(
                    "Property {} listed, {} alert(s) sent",
                    result.property.id, result.notifications_sent
                );
            }
            Commands::Search(args) => {
                let properties = context.search_property.search(args.into()).await?;
                let json = serde_json::to_string_pretty(&properties)
                    .context("Failed to serialize search results")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
