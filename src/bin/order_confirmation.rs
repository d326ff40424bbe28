//! Render the post-checkout confirmation page for an order in the terminal.
//!
//! ```bash
//! RUST_LOG=debug order_confirmation --query '?orderNumber=ORD-1001'
//! order_confirmation --order-number ORD-1001 --base-url https://shop.example.com
//! ```
//!
//! `STOREFRONT_API_URL` and `STOREFRONT_SESSION` may also come from a `.env` file.

use anyhow::{bail, Context, Result};
use chrono::FixedOffset;
use clap::Parser;

use storefront_sdk::prelude::*;
use storefront_sdk::shared::query::ORDER_NUMBER_PARAM;

#[derive(Parser, Debug)]
#[command(about = "Show the order confirmation page for an order number")]
struct Args {
    /// Storefront API base URL
    #[arg(long, env = "STOREFRONT_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Session cookie (`name=value`) sent with every request
    #[arg(long, env = "STOREFRONT_SESSION")]
    session: Option<String>,

    /// Raw URL query string, e.g. `?orderNumber=ORD-1001`
    #[arg(long, conflicts_with = "order_number")]
    query: Option<String>,

    /// Order number, shorthand for `--query orderNumber=...`
    #[arg(long)]
    order_number: Option<String>,

    /// UTC offset in minutes used for dates
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    utc_offset_minutes: i32,

    /// Currency symbol prefixed to amounts
    #[arg(long, default_value = "$")]
    currency: String,
}

impl Args {
    fn query_string(&self) -> String {
        match (&self.query, &self.order_number) {
            (Some(q), _) => q.clone(),
            (None, Some(n)) => format!(
                "{}={}",
                ORDER_NUMBER_PARAM,
                urlencoding::encode(n)
            ),
            (None, None) => String::new(),
        }
    }

    fn display(&self) -> Result<DisplayConfig> {
        let Some(offset) = FixedOffset::east_opt(self.utc_offset_minutes * 60) else {
            bail!("UTC offset {} minutes is out of range", self.utc_offset_minutes);
        };
        Ok(DisplayConfig {
            currency_symbol: self.currency.clone(),
            utc_offset: offset,
        })
    }
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let args = Args::parse();
    let display = args.display()?;

    let mut builder = StorefrontClient::builder().base_url(&args.base_url);
    if let Some(session) = &args.session {
        builder = builder.session_cookie(session.clone());
    }
    let client = builder
        .build()
        .with_context(|| format!("building client for {}", args.base_url))?;

    let outcome = client.load_confirmation(&args.query_string()).await;

    for toast in outcome.toasts() {
        eprintln!("[{}] {}", toast.title, toast.description);
    }
    if let Some(route) = outcome.redirect() {
        eprintln!("→ redirect to {}", route);
        return Ok(());
    }

    print!(
        "{}",
        ConfirmationPage::from_state(&outcome.state, &display)
    );
    Ok(())
}
