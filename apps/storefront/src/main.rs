use std::io::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{CatalogTransport, StoreClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod config;
mod logging;
mod router;
mod views;

use config::load_settings;
use logging::init_logging;
use router::{parse_line, Input, Page, PageRouter};
use views::Screen;

/// Movie storefront: browse, search and buy from the catalog service.
///
/// Runs a single page when a subcommand is given, otherwise reads page
/// commands from stdin until `quit`.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides BACKEND_URL and storefront.toml.
    #[arg(long)]
    backend_url: Option<String>,
    /// Acting user id for purchases and purchase history.
    #[arg(long)]
    user_id: Option<i64>,
    #[command(subcommand)]
    page: Option<Page>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(backend_url) = args.backend_url {
        settings.backend_url = backend_url;
    }
    if let Some(user_id) = args.user_id {
        settings.user_id = user_id;
    }

    let _log_guard = init_logging(&settings.log_dir)?;
    let session = settings.session()?;
    let client = StoreClient::connect(&settings.backend_url, settings.request_timeout())
        .with_context(|| format!("cannot use backend url {}", settings.backend_url))?;
    info!(
        backend_url = %client.transport().base_url(),
        user_id = session.user_id.0,
        timeout_secs = ?settings.request_timeout_secs,
        "storefront started"
    );

    let router = PageRouter::new(client, session);
    match args.page {
        Some(page) => print_screen(&router.show(&page).await),
        None => run_interactive(&router).await?,
    }
    Ok(())
}

async fn run_interactive<T: CatalogTransport>(router: &PageRouter<T>) -> Result<()> {
    println!("Movie Store. Pages: home [--buy ID], detail ID, search KEYWORD, purchases,");
    println!("feedback ID [--comment TEXT], add-movie --title T --price P. `quit` to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        match parse_line(&line) {
            Ok(Input::Page(page)) => print_screen(&router.show(&page).await),
            Ok(Input::Blank) => {}
            Ok(Input::Quit) => break,
            Err(message) => eprintln!("{}", message.trim_end()),
        }
    }
    Ok(())
}

fn print_screen(screen: &Screen) {
    for line in &screen.lines {
        if line.is_error() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
