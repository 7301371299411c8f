//! The command line client for pocketledger.
//!
//! This binary is presentation glue only: it parses user input, hands it to
//! the ledger store and prints the results. All ledger logic lives in the
//! library.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use pocketledger::{
    Error, HttpLedgerGateway, LedgerGateway, LedgerStore, Transaction, TransactionKind,
};

/// Track income and spending against a remote ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the remote document store.
    #[arg(long)]
    base_url: String,

    /// Name of the collection that holds the transactions.
    #[arg(long, default_value = "transactions")]
    collection: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current balance.
    Balance,
    /// List all transactions.
    List,
    /// Add a transaction to the ledger.
    Add {
        /// What the transaction was for.
        reason: String,
        /// The amount of money, as a positive number.
        amount: f64,
        /// Whether the money came in or went out ("Income" or "Spend").
        kind: TransactionKind,
    },
    /// List the transactions whose reason contains the query.
    Search {
        /// Case-insensitive substring to look for.
        query: String,
    },
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let gateway = HttpLedgerGateway::new(reqwest::Client::new(), &args.base_url, &args.collection);
    let mut store = LedgerStore::new(gateway);

    if let Err(error) = run(&mut store, args.command).await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run<G: LedgerGateway>(
    store: &mut LedgerStore<G>,
    command: Command,
) -> Result<(), Error> {
    let snapshot = store.initialize().await?;

    match command {
        Command::Balance => println!("Balance: {:.2}", snapshot.balance()),
        Command::List => print_transactions(snapshot.transactions()),
        Command::Add {
            reason,
            amount,
            kind,
        } => {
            let snapshot = store.add_transaction(&reason, amount, kind).await?;
            println!("Added. Balance is now {:.2}", snapshot.balance());
        }
        Command::Search { query } => print_transactions(&store.search(&query)),
    }

    Ok(())
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions.");
        return;
    }

    for transaction in transactions {
        println!(
            "{:<32} {:>12.2}  {}",
            transaction.reason, transaction.amount, transaction.kind
        );
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().with_filter(filter))
        .init();
}
