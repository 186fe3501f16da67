mod config;
mod contact;
mod content;
mod errors;
mod models;
mod pages;
mod state;
mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, EmailJsConfig};
use crate::contact::clipboard::{CopyIndicator, SystemClipboard};
use crate::contact::emailjs::EmailJsClient;
use crate::contact::flow::SubmitOutcome;
use crate::content::ContentRepository;
use crate::errors::AppError;
use crate::models::contact::{Field, SubmissionStatus};
use crate::state::AppState;
use crate::ui::{Key, ViewState};

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Personal portfolio client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a page as JSON: /, /projects, /research or /contact
    Show {
        #[arg(default_value = "/")]
        path: String,
        /// Click a card: project or publication title, or institution on /. Repeating toggles it shut
        #[arg(long)]
        open: Vec<String>,
        /// Key presses delivered after the clicks
        #[arg(long, value_enum)]
        key: Vec<Key>,
        /// Click an experience timeline node by index
        #[arg(long)]
        hover: Vec<usize>,
        /// Toggle the mobile menu (repeatable)
        #[arg(long, action = clap::ArgAction::Count)]
        menu: u8,
        /// Scroll offset samples, in order
        #[arg(long, allow_negative_numbers = true)]
        scroll: Vec<f64>,
    },
    /// Send a message through the contact form
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Copy a contact email address to the clipboard
    CopyEmail {
        /// Copy the university address instead of the primary one
        #[arg(long)]
        university: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries page JSON and toast text
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let content = match &config.content_path {
        Some(path) => ContentRepository::from_path(path)?,
        None => ContentRepository::embedded()?,
    };

    let state = AppState {
        content,
        clipboard: Arc::new(SystemClipboard::default()),
    };

    match run(cli.command, &state).await {
        Ok(code) => Ok(code),
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::from(e.exit_code() as u8))
        }
    }
}

async fn run(command: Command, state: &AppState) -> Result<ExitCode, AppError> {
    match command {
        Command::Show {
            path,
            open,
            key,
            hover,
            menu,
            scroll,
        } => {
            let mut ui = ViewState::default();
            for title in open {
                ui.modal.toggle(title);
            }
            for pressed in key {
                ui.modal.on_key(pressed);
            }
            for index in hover {
                ui.timeline.toggle(index);
            }
            for _ in 0..menu {
                ui.menu.toggle();
            }
            for offset in scroll {
                if ui.back_to_top.observe(offset) {
                    debug!("Back-to-top now {:?} at offset {offset}", ui.back_to_top);
                }
            }
            show(state, &path, &ui)
        }
        Command::Send {
            name,
            email,
            subject,
            message,
        } => {
            let input = [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Subject, subject),
                (Field::Message, message),
            ];
            send(state, input).await
        }
        Command::CopyEmail { university } => copy_email(state, university).await,
    }
}

fn show(state: &AppState, path: &str, ui: &ViewState) -> Result<ExitCode, AppError> {
    let content = state.snapshot();
    let view = pages::render(&content, path, ui)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(ExitCode::SUCCESS)
}

async fn send(state: &AppState, input: [(Field, String); 4]) -> Result<ExitCode, AppError> {
    let content = state.snapshot();
    let fallback = content.personal.canonical_email();

    let delivery = EmailJsClient::new(EmailJsConfig::from_env()?)?;
    let flow = state.contact_flow(Arc::new(delivery));
    for (field, value) in input {
        flow.set_field(field, value);
    }

    if !flow.can_submit() {
        println!("All four fields are required.");
        return Ok(ExitCode::from(2));
    }

    let attempt = match flow.submit() {
        SubmitOutcome::Started { attempt } => attempt,
        SubmitOutcome::Incomplete | SubmitOutcome::AlreadySending => return Ok(ExitCode::from(2)),
    };

    let outcome = flow.settled(attempt).await;
    debug!("Attempt {attempt} settled after {:?}", outcome.elapsed);
    if let Some(toast) = outcome.toast {
        println!("{}", toast.text(fallback));
    }

    Ok(match outcome.status {
        SubmissionStatus::Succeeded => ExitCode::SUCCESS,
        _ => ExitCode::from(4),
    })
}

async fn copy_email(state: &AppState, university: bool) -> Result<ExitCode, AppError> {
    let content = state.snapshot();
    let address = if university {
        content.personal.email.as_str()
    } else {
        content.personal.canonical_email()
    };

    let button = state.copy_button();
    button.copy(address).await;
    if button.indicator() == CopyIndicator::Copied {
        println!("Copied!");
    }
    Ok(ExitCode::SUCCESS)
}
