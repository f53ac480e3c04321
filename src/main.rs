//! Terminal front end for the shortening service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one URL and print the result
//! cargo run -- example.com/some/long/path
//!
//! # Shorten and copy to the clipboard
//! cargo run -- example.com --copy
//!
//! # Machine-readable output
//! cargo run -- example.com --json
//!
//! # Interactive session
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! See [`shortener_client::config`]. A `.env` file in the working directory
//! is honoured.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Input, Select};
use serde_json::json;

use shortener_client::config::Config;
use shortener_client::infrastructure::clipboard::CommandClipboard;
use shortener_client::infrastructure::http::HttpShortenerGateway;
use shortener_client::{ControllerError, SubmissionController, logging};

/// Shorten long URLs from the terminal.
#[derive(Parser)]
#[command(name = "shorten")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to shorten. Starts an interactive session when omitted
    url: Option<String>,

    /// Copy the short URL to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Base address of the shortening service (overrides API_BASE_URL)
    #[arg(long, value_name = "URL")]
    api_base_url: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_base_url) = cli.api_base_url.clone() {
        config.api_base_url = api_base_url;
    }
    config.validate()?;

    logging::init(&config);
    config.print_summary();

    let gateway = Arc::new(HttpShortenerGateway::new(&config)?);
    let clipboard = Arc::new(CommandClipboard::new());
    let controller = SubmissionController::new(gateway, clipboard, &config);

    match cli.url {
        Some(ref url) => shorten_once(&controller, url, &cli).await,
        None => {
            run_interactive(&controller).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs a single submission for `url` and reports it.
async fn shorten_once(controller: &SubmissionController, url: &str, cli: &Cli) -> Result<ExitCode> {
    controller.set_input(url)?;

    let shortened = match controller.submit().await {
        Ok(shortened) => shortened,
        Err(e) => {
            if cli.json {
                println!("{}", json!({ "error": e.to_string() }));
            } else {
                eprintln!("{} {}", "✗".red().bold(), e.to_string().red());
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string(&shortened)?);
    } else {
        println!("{}", shortened.short_url);
    }

    if cli.copy {
        match controller.copy_result().await {
            Ok(()) => eprintln!("{}", "✓ Copied!".green()),
            Err(e) => eprintln!("{} {}", "⚠".yellow(), e.to_string().yellow()),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Interactive form: prompt, submit, then offer copy / start over / quit.
async fn run_interactive(controller: &SubmissionController) -> Result<()> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!("{}", "Shorten your long URLs".dimmed());
    println!();

    loop {
        let input: String = Input::new()
            .with_prompt("Long URL")
            .with_initial_text(controller.input())
            .allow_empty(true)
            .interact_text()?;

        controller.set_input(input)?;

        let view = controller.snapshot();
        if !view.can_submit() {
            println!("{}", "Enter the URL".yellow());
            continue;
        }

        println!("{}", view.submit_label().dimmed());

        match controller.submit().await {
            Ok(_) => {
                print_result(controller);
                if !result_menu(controller).await? {
                    return Ok(());
                }
            }
            Err(ControllerError::AlreadyPending) => continue,
            Err(e) => {
                println!("{} {}", "⚠".yellow(), e.to_string().red());
                println!();
            }
        }
    }
}

fn print_result(controller: &SubmissionController) {
    let view = controller.snapshot();
    if let Some(short_url) = view.short_url {
        println!();
        println!("{}", "✓ Your shortened URL is ready!".green().bold());
        println!("  {}", short_url.cyan().underline());
        println!();
    }
}

/// Returns `false` when the user chose to quit.
async fn result_menu(controller: &SubmissionController) -> Result<bool> {
    loop {
        let view = controller.snapshot();
        let items = [view.copy_label(), "Shorten another", "Quit"];

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => match controller.copy_result().await {
                Ok(()) => println!("{}", "✓ Copied!".green()),
                Err(e) => println!("{} {}", "⚠".yellow(), e.to_string().yellow()),
            },
            1 => {
                controller.reset();
                println!();
                return Ok(true);
            }
            _ => return Ok(false),
        }
    }
}
