use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod form;
mod gate;
mod models;
mod notify;
mod present;

use api::{ApiClient, DEFAULT_BASE_URL};
use form::FeedbackForm;
use gate::{AdminGate, GateEvent};
use models::{AdminCredentials, Emoji};
use notify::Notifier;

#[derive(Parser)]
#[command(name = "event-feedback-console")]
#[command(about = "Event feedback intake and admin statistics console", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit feedback for an event or activity
    Submit {
        #[arg(long)]
        event: String,
        #[arg(long)]
        feedback: String,
        #[arg(long, value_enum)]
        emoji: Emoji,
    },
    /// Log in as admin and print the statistics dashboard
    Dashboard {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url).context("failed to build HTTP client")?;
    let mut notifier = Notifier::new();

    match cli.command {
        Commands::Submit {
            event,
            feedback,
            emoji,
        } => {
            let mut form = FeedbackForm::new();
            form.event = event;
            form.feedback = feedback;
            form.emoji = Some(emoji);

            let result = form.submit(&api, &mut notifier).await;
            if let Some(notification) = notifier.current() {
                println!("{}", notification.message);
            }
            result.context("feedback not submitted")?;
        }
        Commands::Dashboard { email, password } => {
            let mut gate = AdminGate::new();
            let credentials = AdminCredentials { email, password };

            let event = gate.login(&api, &credentials, &mut notifier).await;
            match event {
                GateEvent::LoggedIn => match gate.stats() {
                    Some(snapshot) => {
                        let view = present::present(snapshot);
                        print!(
                            "{}",
                            present::render_dashboard(&view, snapshot.total_feedbacks)
                        );
                    }
                    None => {
                        // Login stands even though the snapshot is missing.
                        if let Some(notification) = notifier.current() {
                            println!("{}", notification.message);
                        }
                    }
                },
                GateEvent::Retry | GateEvent::ConnectionFailed => {
                    if let Some(notification) = notifier.current() {
                        println!("{}", notification.message);
                    }
                    anyhow::bail!("login failed");
                }
                GateEvent::LockedOut => {
                    // Silent beyond the forced return to the landing context.
                    anyhow::bail!("login failed");
                }
                GateEvent::Busy => unreachable!("fresh gate cannot be busy"),
            }
        }
    }

    Ok(())
}
