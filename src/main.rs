use std::process::ExitCode;

use activity_board::app::{ActivityBoard, TerminalView};
use activity_board::client::NoWasmClient;
use activity_board::config::{BoardConfig, DEFAULT_SERVER_URL, ENV_SERVER_URL};
use activity_board::error::Result;
use activity_board::model::SignupForm;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "activity-board", about = "Sign up for school activities", version)]
struct Cli {
    /// Activity board server
    #[arg(long, global = true, env = ENV_SERVER_URL, default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every activity with its participants
    List,

    /// Sign an email up for an activity
    Signup { activity: String, email: String },

    /// Remove an email from an activity
    Unregister {
        activity: String,
        email: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Using server {}", cli.server);
    let client = NoWasmClient::with_config(&BoardConfig::new(cli.server))?;

    let outcome = match cli.command {
        Command::List => {
            let board = ActivityBoard::new(client, TerminalView::new());
            return Ok(match board.load().await {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            });
        }
        Command::Signup { activity, email } => {
            let view = TerminalView::new().with_form(SignupForm::new(email, activity));
            ActivityBoard::new(client, view).submit_signup().await
        }
        Command::Unregister {
            activity,
            email,
            yes,
        } => {
            let view = TerminalView::new().assume_yes(yes);
            ActivityBoard::new(client, view)
                .unregister(&activity, &email)
                .await
        }
    };

    log::debug!("Finished with {outcome:?}");
    Ok(ExitCode::from(outcome.exit_status()))
}
