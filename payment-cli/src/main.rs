//! Payment Query CLI
//!
//! Command-line interface for the payment query service. Loads a JSON
//! record file, wires the service to the in-memory record store and the
//! system clock, runs one query, and prints the result as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payment_queries::PaymentQueryService;
use payment_repo::{SystemClock, load_repo};
use payment_types::YearMonth;

#[derive(Parser)]
#[command(name = "payment-query")]
#[command(author, version, about = "Ad-hoc queries over a payment record file", long_about = None)]
struct Cli {
    /// Path to the JSON record file
    #[arg(
        long,
        env = "PAYMENTS_DATA",
        default_value = "payment-cli/data/payments.json"
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List payments sorted by payment date
    SortedByDate {
        /// Latest first instead of earliest first
        #[arg(long)]
        desc: bool,
    },
    /// List payments sorted by item count
    SortedByItemCount {
        /// Most items first instead of fewest first
        #[arg(long)]
        desc: bool,
    },
    /// List payments for a given month
    ForMonth {
        /// Target month (YYYY-MM)
        month: YearMonth,
    },
    /// List payments for the current month
    ForCurrentMonth,
    /// List payments from the last N days
    ForLastDays {
        /// Size of the day window
        days: i64,
    },
    /// List payments with exactly one item
    WithOneItem,
    /// List distinct products sold in the current month
    Products,
    /// Sum of sales for a given month
    TotalForMonth {
        /// Target month (YYYY-MM)
        month: YearMonth,
    },
    /// Sum of granted discounts for a given month
    DiscountForMonth {
        /// Target month (YYYY-MM)
        month: YearMonth,
    },
    /// List items bought by the user with the given email
    ItemsForUser {
        /// Exact email address (case-sensitive)
        email: String,
    },
    /// List payments whose total value exceeds a threshold
    ValueOver {
        /// Threshold the total sum must strictly exceed
        value: i64,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let repo = load_repo(&cli.data)?;
    let service = PaymentQueryService::new(repo, SystemClock);

    match cli.command {
        Commands::SortedByDate { desc } => {
            let payments = if desc {
                service.sorted_by_date_desc()?
            } else {
                service.sorted_by_date_asc()?
            };
            print_json(&payments)?;
        }
        Commands::SortedByItemCount { desc } => {
            let payments = if desc {
                service.sorted_by_item_count_desc()?
            } else {
                service.sorted_by_item_count_asc()?
            };
            print_json(&payments)?;
        }
        Commands::ForMonth { month } => {
            print_json(&service.for_month(month)?)?;
        }
        Commands::ForCurrentMonth => {
            print_json(&service.for_current_month()?)?;
        }
        Commands::ForLastDays { days } => {
            print_json(&service.for_last_days(days)?)?;
        }
        Commands::WithOneItem => {
            print_json(&service.with_exactly_one_item()?)?;
        }
        Commands::Products => {
            print_json(&service.products_sold_in_current_month()?)?;
        }
        Commands::TotalForMonth { month } => {
            print_json(&service.total_for_month(month)?)?;
        }
        Commands::DiscountForMonth { month } => {
            print_json(&service.discount_for_month(month)?)?;
        }
        Commands::ItemsForUser { email } => {
            print_json(&service.items_for_user_email(&email)?)?;
        }
        Commands::ValueOver { value } => {
            print_json(&service.with_value_over(value)?)?;
        }
    }

    Ok(())
}
