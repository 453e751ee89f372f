use clap::{Parser, Subcommand};
use mintfront::config;
use mintfront::logging::init_logging;
use mintfront::run::{build_storefront, serve};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let config = config::init()?;
    init_logging(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config).await,
        Command::Resolve { quantity } => {
            let storefront = build_storefront(&config)?;
            let listing = storefront.listing(true).await?;
            println!("{}", serde_json::to_string_pretty(&listing)?);

            if let Some(quantity) = quantity {
                let quote = storefront.quote(quantity).await?;
                println!("{}", serde_json::to_string_pretty(&quote)?);
                match quote.total_label() {
                    Some(total) => println!("Total: {total}"),
                    None => println!("Price unavailable"),
                }
            }
            Ok(())
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Mint storefront backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the listing and quote API (default)
    Serve,
    /// Resolve the configured contract once and print the listing
    Resolve {
        /// Also print a quote for this quantity
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<i64>,
    },
}
