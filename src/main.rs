// ABOUTME: Main entry point for viecnong with TUI wizard and CLI commands
//
// Binary: viecnong
// Usage: viecnong [COMMAND]
// - No command / post: job-posting wizard (TUI)
// - jobs list|show: browse postings
// - apply: apply to a job
// - applicants, review: owner triage
// - login, register, logout, profile: session management

#![allow(missing_docs)]

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    sync::Arc,
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use viecnong::api::{ApiClient, ApiEnvelope, ApiError};
use viecnong::cli::{self, util::Context, Commands, JobsCommand};
use viecnong::config::AppConfig;
use viecnong::session::{SessionProvider, SessionStore};
use viecnong::wizard::{
    apply_action, catalog::MSG_POSTED, map_key, PostJobComponent, PostJobState, SubmitOutcome,
    WizardEffect,
};

type SubmitResult = Result<ApiEnvelope<serde_json::Value>, ApiError>;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    let ctx = Context::new(config, args.format)?;

    let result = match args.command {
        Some(Commands::Jobs(JobsCommand::List(list_args))) => {
            cli::jobs::list(&ctx, list_args).await
        }
        Some(Commands::Jobs(JobsCommand::Show(show_args))) => {
            cli::jobs::show(&ctx, show_args).await
        }
        Some(Commands::Apply(apply_args)) => cli::apply::execute(&ctx, apply_args).await,
        Some(Commands::Applicants(applicants_args)) => {
            cli::applicants::execute(&ctx, applicants_args).await
        }
        Some(Commands::Review(review_args)) => cli::applicants::review(&ctx, review_args).await,
        Some(Commands::Login(login_args)) => cli::auth::login(&ctx, login_args).await,
        Some(Commands::Register(register_args)) => cli::auth::register(&ctx, register_args).await,
        Some(Commands::Logout) => cli::auth::logout(&ctx),
        Some(Commands::Profile) => cli::profile::execute(&ctx).await,

        // Wizard (explicit or default)
        Some(Commands::Post) | None => run_post_wizard(&ctx).await,
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_post_wizard(ctx: &Context) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. The job-posting wizard requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    let store = Arc::new(SessionStore::new(ctx.config.session_path()?));
    let mut state = PostJobState::new(store.clone());
    let component = PostJobComponent::with_progress(ctx.config.ui.show_progress());
    let client = ctx.client()?;

    info!("Starting job-posting wizard");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drop keys typed before the wizard appeared
    while event::poll(Duration::from_millis(10)).unwrap_or(false) {
        let _ = event::read();
    }

    let result = run_wizard_loop(&mut state, &component, &client, &store, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    if matches!(result, Ok(true)) {
        println!("{MSG_POSTED}");
    }
    result.map(|_| ())
}

/// Drive the wizard until it posts (`Ok(true)`) or the user leaves (`Ok(false)`)
async fn run_wizard_loop(
    state: &mut PostJobState,
    component: &PostJobComponent,
    client: &ApiClient,
    store: &SessionStore,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<bool> {
    let tick_rate = Duration::from_millis(100);
    let (tx, mut rx) = mpsc::unbounded_channel::<SubmitResult>();

    loop {
        terminal
            .draw(|frame| {
                let area = frame.size();
                component.render(frame, area, state);
            })
            .context("Failed to draw wizard")?;

        while let Ok(result) = rx.try_recv() {
            if state.finish_submit(result) == SubmitOutcome::Posted {
                info!("Wizard finished with a posted job");
                return Ok(true);
            }
        }

        if !event::poll(tick_rate)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        let action = map_key(state, key);
        match apply_action(state, action) {
            WizardEffect::None => {}
            WizardEffect::Exit => {
                info!("Wizard closed without posting");
                return Ok(false);
            }
            WizardEffect::StartSubmit(payload) => {
                debug!("Submitting job '{}'", payload.title);
                // The user may have logged in from another shell since startup
                let client = client.clone().with_token(store.token());
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.create_job(&payload).await;
                    let _ = tx.send(result);
                });
            }
        }
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let Ok(log_dir) = AppConfig::get_user_config_dir().map(|dir| dir.join("logs")) else {
        return;
    };
    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "viecnong-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; the CLI still works without a log file
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viecnong=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs in ~/.viecnong/logs for more details.");
    }));
}
