//! IBC Address Tools CLI
//!
//! - ibc-addr-tools address <ADDRESS> [PREFIX]      -> address under another chain prefix
//! - ibc-addr-tools denom <BASE_DENOM> [--channel]  -> ibc/<HASH> for a received token
//! - ibc-addr-tools trace <FULL_TRACE>              -> ibc/<HASH> for a full denom trace

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use serde_json::json;
use tracing::info;

use ibc_addr_tools::{ellipsize, Bech32Address, Config, DenomTrace, IbcDenom};

#[derive(Parser)]
#[command(name = "ibc-addr-tools")]
#[command(about = "Cosmos address conversion and IBC denom derivation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Never shorten results
    #[arg(long, global = true)]
    full: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a cosmos address to its counterpart on a different chain
    ///
    /// Both chains must be Cosmos SDK based with the same bip44 coin type.
    Address {
        /// Origin address (e.g. cosmos1...)
        address: String,

        /// Destination bech32 prefix (defaults to IBC_TOOLS_DEFAULT_PREFIX)
        prefix: Option<String>,
    },

    /// Get the IBC denom for a base denom received over a port and channel
    Denom {
        /// Base denomination (e.g. uatom)
        base_denom: String,

        /// Source port and channel (defaults to IBC_TOOLS_DEFAULT_CHANNEL)
        #[arg(short, long)]
        channel: Option<String>,
    },

    /// Get the IBC denom for a full trace (e.g. transfer/channel-0/uatom)
    Trace {
        /// Full denom trace including every hop
        trace: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let (as_json, full) = (cli.json, cli.full);

    match cli.command {
        Commands::Address { address, prefix } => {
            let prefix = prefix.unwrap_or_else(|| config.default_prefix.clone());
            let source = Bech32Address::parse(&address)?;
            let output = source.to_prefix(&prefix)?;

            info!(from = %source.prefix(), to = %prefix, "Address converted");

            if as_json {
                print_json(&json!({
                    "address": address,
                    "source_prefix": source.prefix(),
                    "target_prefix": prefix,
                    "payload_hex": hex::encode(source.payload()),
                    "output": output,
                }))?;
            } else if full {
                println!("{}", output);
            } else {
                println!("{}", ellipsize(&output, config.address_display_limit));
            }
        }

        Commands::Denom {
            base_denom,
            channel,
        } => {
            let channel = channel.unwrap_or_else(|| config.default_channel.clone());
            let trace = DenomTrace::new(&channel, &base_denom)?;
            print_denom(&trace, as_json, full, config.denom_display_limit)?;
        }

        Commands::Trace { trace } => {
            let trace = DenomTrace::parse(&trace)?;
            print_denom(&trace, as_json, full, config.denom_display_limit)?;
        }
    }

    Ok(())
}

fn print_denom(trace: &DenomTrace, as_json: bool, full: bool, limit: usize) -> Result<()> {
    let denom = trace.ibc_denom();

    info!(trace = %trace, "IBC denom derived");

    if as_json {
        print_json(&json!({
            "trace": trace,
            "full_path": trace.full_path(),
            "output": denom,
        }))
    } else {
        println!("{}", format_denom(&denom, full, limit));
        Ok(())
    }
}

/// Only the hash is shortened; the `ibc/` prefix stays readable.
fn format_denom(denom: &IbcDenom, full: bool, limit: usize) -> String {
    if full {
        denom.to_string()
    } else {
        format!(
            "{}{}",
            ibc_addr_tools::IBC_DENOM_PREFIX,
            ellipsize(&denom.hash_hex(), limit)
        )
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,ibc_addr_tools=info"))
    };

    // Results go to stdout, diagnostics to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
