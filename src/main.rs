mod ai;
mod app;
mod config;
mod constants;
mod credentials;
mod input;
mod session;
mod ui;

use anyhow::{Context, Result};
use std::env;
use std::io::Read;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ai::{CompletionSettings, GroqClient, Tone};
use crate::app::App;
use crate::config::Config;
use crate::credentials::CredentialResolver;
use crate::session::{EmailRequest, Session};

fn setup_logging() {
    use std::fs::{self, OpenOptions};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mailreply=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .and_then(|dir| fs::create_dir_all(&dir).ok().map(|_| dir))
        .map(|dir| dir.join("mailreply.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"mailreply - Draft replies to incoming email with an LLM

Usage: mailreply [command]

Commands:
    (none)                Start the interactive reply screen
    draft [--tone TONE]   Read an email from stdin and print a drafted reply
                          TONE: auto, formal, friendly, persuasive
    check                 Show where the GROQ_API_KEY would be loaded from
    init-config           Write a default configuration file
    help                  Show this help message

Configuration file: ~/.config/mailreply/config.toml
Secrets file:       ~/.config/mailreply/secrets.toml
"#
    );
}

fn parse_tone_flag(args: &[String], default: Tone) -> Result<Tone> {
    let mut tone = default;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let value = match arg.as_str() {
            "--tone" | "-t" => iter.next().context("--tone requires a value")?.as_str(),
            other => match other.strip_prefix("--tone=") {
                Some(value) => value,
                None => anyhow::bail!("Unknown argument: {}", other),
            },
        };
        tone = value
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }
    Ok(tone)
}

/// One-shot generation: stdin in, structured reply out
async fn run_draft(args: &[String]) -> Result<()> {
    let config = Config::load()?;
    let tone = parse_tone_flag(args, config.ui.default_tone)?;

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read email from stdin")?;

    let client = GroqClient::new(CompletionSettings::from(&config.ai));
    let mut session = Session::start(&CredentialResolver::new(), tone);
    let request = EmailRequest::new(text, session.tone);

    let outcome = match session.generate(&client, &request).await {
        Ok(result) => {
            println!("Intent: {}", result.intent);
            println!("Tone:   {}", result.tone);
            println!();
            println!("{}", result.reply);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            if let Some(raw) = e.raw_output() {
                eprintln!("\nRaw output:\n{}", raw);
            }
            Err(e)
        }
    };

    session.end();

    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_init_config() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("check") => {
            println!("{}", CredentialResolver::new().debug_info());
            Ok(())
        }
        Some("init-config") => run_init_config(),
        Some("draft") => {
            setup_logging();
            run_draft(&args[2..]).await
        }
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;

            // Initialize theme from config
            crate::ui::theme::init_theme(config.ui.theme);

            let session = Session::start(&CredentialResolver::new(), config.ui.default_tone);
            App::new(&config, session).run().await
        }
    }
}
