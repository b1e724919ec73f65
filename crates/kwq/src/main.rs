use clap::Parser;
use kwq_core::{parse_with_config, ParserConfig, DEFAULT_MAX_DEPTH};
use std::io::Read;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "kwq")]
#[command(about = "Compile a DIS-style keyword query into postfix query elements")]
#[command(version)]
struct Args {
    /// Keyword query expression (read from stdin when omitted)
    query: Option<String>,

    /// Deepest parenthesis nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log filter used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays pure JSON
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();

    let query = match args.query {
        Some(query) => query,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(bytes = query.len(), "read keyword query");

    let config = ParserConfig::with_max_depth(args.max_depth);
    let parsed = parse_with_config(&query, &config)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };
    println!("{}", json);
    Ok(())
}
