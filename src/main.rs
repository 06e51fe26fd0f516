use banktransfer::application::bootstrap::{ApiKeyPresenceTask, Bootstrap, PendingPaymentSchemaTask};
use banktransfer::application::gateway::BankTransferGateway;
use banktransfer::domain::arguments::PaymentArguments;
use banktransfer::infrastructure::in_memory::{
    InMemoryNoticeSink, InMemoryOrderStore, InMemorySchemaMigrator, InMemorySettingsStore,
};
use banktransfer::interfaces::csv::settings_reader::SettingsReader;
use banktransfer::interfaces::json::{read_arguments, read_order, read_payment};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gateway options CSV (`option,value`). Defaults apply when omitted.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Order JSON file
    #[arg(long, global = true)]
    order: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Augment a create-payment request body with due date and billing email
    Args {
        /// Request body JSON; an empty object when omitted
        #[arg(long)]
        args: Option<PathBuf>,

        /// Date the due date is counted from (YYYY-MM-DD); today when omitted
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Render bank transfer instructions for a provider payment
    Instructions {
        /// Provider payment JSON
        #[arg(long)]
        payment: PathBuf,

        /// Use the admin wording
        #[arg(long)]
        admin: bool,
    },
    /// Resolve the redirect target after checkout
    Redirect {
        /// Base URL of the checkout page
        #[arg(long)]
        checkout_url: Url,

        /// URL used when the payment screen is not skipped
        #[arg(long)]
        fallback: Url,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.settings {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            InMemorySettingsStore::from_map(SettingsReader::new(file).into_options()?)
        }
        None => InMemorySettingsStore::new(),
    };

    Bootstrap::new()
        .with_task(PendingPaymentSchemaTask::new(
            Box::new(settings.clone()),
            Box::new(InMemorySchemaMigrator::new()),
            "",
        ))
        .with_task(ApiKeyPresenceTask::new(
            Box::new(settings.clone()),
            Box::new(InMemoryNoticeSink::new()),
        ))
        .run_all()
        .await?;

    let order_path = cli
        .order
        .ok_or_else(|| miette::miette!("--order is required"))?;
    let order = read_order(File::open(order_path).into_diagnostic()?)?;
    let order_id = order.id;

    let checkout_url = match &cli.command {
        Command::Redirect { checkout_url, .. } => checkout_url.clone(),
        _ => Url::parse("http://localhost/checkout/").into_diagnostic()?,
    };
    let orders = InMemoryOrderStore::new(checkout_url);
    orders.insert(order);

    let gateway = BankTransferGateway::new(Box::new(settings), Box::new(orders));

    match cli.command {
        Command::Args { args, today } => {
            let args = match args {
                Some(path) => read_arguments(File::open(path).into_diagnostic()?)?,
                None => PaymentArguments::new(),
            };
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let args = gateway.payment_arguments(order_id, today, args).await?;
            println!("{}", serde_json::to_string(&args).into_diagnostic()?);
        }
        Command::Instructions { payment, admin } => {
            let payment = read_payment(File::open(payment).into_diagnostic()?)?;
            match gateway.instructions(order_id, &payment, admin).await? {
                Some(text) => print!("{}", text),
                None => eprintln!("No instructions: payment details not available yet"),
            }
        }
        Command::Redirect { fallback, .. } => {
            let url = gateway
                .process_payment_redirect(order_id, move || fallback)
                .await?;
            println!("{}", url);
        }
    }

    Ok(())
}
