#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use og_lib::{GeneratorConfig, config, generate_from_config, io, stats};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// og-cli: generate random order data for testing
#[derive(Parser)]
#[command(name = "og-cli")]
#[command(version = "0.1.0")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// number of orders to generate
    count: i64,

    /// output file path
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// minimum price (plain decimal or scientific notation)
    #[arg(long, default_value = "100.0", value_parser = config::parse_price)]
    min_price: Decimal,

    /// maximum price (exclusive)
    #[arg(long, default_value = "200.0", value_parser = config::parse_price)]
    max_price: Decimal,

    /// minimum quantity
    #[arg(long, default_value_t = 1)]
    min_qty: i64,

    /// maximum quantity
    #[arg(long, default_value_t = 1000)]
    max_qty: i64,

    /// skip the header row
    #[arg(long)]
    no_header: bool,

    /// random seed
    #[arg(long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,
}

impl From<Cli> for GeneratorConfig {
    fn from(c: Cli) -> Self {
        GeneratorConfig {
            count: c.count,
            output: c.output,
            min_price: c.min_price,
            max_price: c.max_price,
            min_qty: c.min_qty,
            max_qty: c.max_qty,
            include_header: !c.no_header,
            seed: c.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cfg = GeneratorConfig::from(cli);
    debug!(?cfg, "parsed configuration");
    cfg.validate()?;

    println!("Generating {} orders...", cfg.count);
    let orders = generate_from_config(&cfg)?;

    io::write_orders(&cfg.output, &orders, cfg.include_header)
        .with_context(|| format!("writing orders to {}", cfg.output.display()))?;
    println!("Generated {} orders in {}", orders.len(), cfg.output.display());

    println!("{}", stats::summarize(&orders));
    Ok(())
}
