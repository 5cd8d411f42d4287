use std::sync::Arc;

use clap::{Parser, Subcommand};
use fintrack_store::utils::{format_price, Table};
use fintrack_store::{
    Config, CreateTransactionInput, StoreError, TransactionType, TransactionsProvider,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fintrack", version, about = "Browse and record transactions on a finance API")]
struct Cli {
    /// Overrides FINTRACK_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List transactions, newest first
    List {
        /// Free-text filter applied by the server
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Record a new transaction
    Add {
        description: String,
        price: f64,
        category: String,
        /// income or outcome
        #[arg(value_parser = parse_type)]
        kind: TransactionType,
    },

    /// Income, outcome and balance over all transactions
    Summary,
}

fn parse_type(s: &str) -> Result<TransactionType, String> {
    s.parse()
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fintrack_store=info,fintrack=info,reqwest=warn")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    debug!("Using API at {}", config.api_url);

    let client = match config.build_client() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            return;
        }
    };

    let provider = TransactionsProvider::mount(Arc::new(client), config.validation);
    if let Err(e) = run(&provider, cli.command, &config).await {
        error!("{}", e);
    }
}

async fn run(provider: &TransactionsProvider, command: Command, config: &Config) -> Result<(), StoreError> {
    provider.ready().await?;
    info!("Loaded {} transactions", provider.transactions().len());

    match command {
        Command::List { query } => {
            if query.is_some() {
                provider.fetch(query.as_deref()).await?;
            }
            let list = provider.transactions();
            if list.is_empty() {
                println!("No transactions found");
            } else {
                println!("{}", Table::from_transactions(&list, &config.currency_symbol).render());
            }
        }
        Command::Add {
            description,
            price,
            category,
            kind,
        } => {
            let created = provider
                .create(CreateTransactionInput::new(description, price, category, kind))
                .await?;
            info!("Created transaction {} ({})", created.id, created.description);
            println!("{}", Table::from_transactions(&provider.transactions(), &config.currency_symbol).render());
        }
        Command::Summary => {
            let summary = provider.summary();
            let symbol = &config.currency_symbol;
            let mut table = Table::new(vec!["Income", "Outcome", "Total"]);
            table.add_row(vec![
                format_price(summary.income, symbol),
                format_price(summary.outcome, symbol),
                format_price(summary.total, symbol),
            ]);
            println!("{}", table.render());
        }
    }

    Ok(())
}
