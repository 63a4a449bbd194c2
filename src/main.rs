use anyhow::Result;
use frostie::item_parser::ItemTextParser;
use frostie::parser_config::ParserConfig;
use std::env;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Set to `json` for structured log output
const ENV_LOG_FORMAT: &str = "FROSTIE_LOG_FORMAT";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if env::var(ENV_LOG_FORMAT).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_tracing();

    let config = ParserConfig::from_env();
    info!(
        ai_enabled = config.ai.is_some(),
        default_expiration_days = config.default_expiration_days,
        "Starting Frostie item parser"
    );

    let parser = ItemTextParser::from_config(&config);

    // Arguments form one item; otherwise each stdin line is an item
    let args: Vec<String> = env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        io::stdin().lock().lines().collect::<io::Result<_>>()?
    } else {
        vec![args.join(" ")]
    };

    for input in inputs.iter().map(|line| line.trim()).filter(|line| !line.is_empty()) {
        let details = parser
            .parse_item_text(input, config.default_expiration_days)
            .await;
        println!("{}", serde_json::to_string(&details)?);
    }

    Ok(())
}
