use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mentor_pricing::observability::{setup_logging, setup_logging_json};
use mentor_pricing::pricing::{DEFAULT_CURRENCY, STANDARD_DURATIONS};
use mentor_pricing::{format_price, log_quote, MentorTier, PriceBreakdown, PricingConfig, PricingEngine};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mentor-pricing")]
#[command(about = "Mentor session pricing and rate validation")]
struct Cli {
    /// TOML file overriding the built-in fee schedule and tier bands
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price sessions at an hourly rate
    Quote {
        #[arg(long)]
        rate: f64,
        #[arg(long = "duration")]
        durations: Vec<u32>,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
    },
    /// Check an hourly rate against a tier's band
    Validate {
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        tier: MentorTier,
    },
    /// List every tier band
    Bands,
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.json {
        setup_logging_json(&cli.log_level);
    } else {
        setup_logging(&cli.log_level);
    }

    let config = match &cli.config {
        Some(path) => PricingConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PricingConfig::default(),
    };
    let engine = PricingEngine::new(config)?;

    match cli.command {
        Commands::Quote {
            rate,
            durations,
            currency,
        } => {
            let durations = if durations.is_empty() {
                STANDARD_DURATIONS.to_vec()
            } else {
                durations
            };
            let options = engine
                .calculator()
                .session_options(rate, &durations, &currency)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                for breakdown in &options {
                    print_breakdown(breakdown);
                }
            }
        }
        Commands::Validate { rate, tier } => {
            let result = engine.validate_rate_for_tier(rate, tier);
            log_quote!(debug, tier, rate, valid = result.valid, "validated rate");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if let Some(error) = &result.error {
                println!("invalid: {}", error);
            } else {
                println!("valid");
            }

            if !result.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Bands => {
            if cli.json {
                let bands: Vec<_> = engine
                    .registry()
                    .bands()
                    .map(|(tier, band)| json!({ "tier": tier, "band": band }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&bands)?);
            } else {
                for (tier, band) in engine.registry().bands() {
                    println!(
                        "{:<10} {} - {} (default {})",
                        tier,
                        format_price(band.min, &band.currency),
                        format_price(band.max, &band.currency),
                        format_price(band.default_rate, &band.currency),
                    );
                }
            }
        }
        Commands::Config => {
            print!("{}", engine.config().to_toml_string()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_breakdown(breakdown: &PriceBreakdown) {
    let currency = &breakdown.currency;
    println!("{} minutes", breakdown.duration_minutes);
    println!("  mentor fee    {}", format_price(breakdown.mentor_fee, currency));
    println!("  platform fee  {}", format_price(breakdown.platform_fee, currency));
    println!("  subtotal      {}", format_price(breakdown.subtotal, currency));
    println!("  VAT           {}", format_price(breakdown.vat, currency));
    println!("  total         {}", format_price(breakdown.total, currency));
}
