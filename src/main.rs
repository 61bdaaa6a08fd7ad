mod cli;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qbox_modals::state::AppState;
use qbox_modals::{parser, persist, tui, Result};

use crate::cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _guard = initialize_logging();
    info!(page = %cli.page.display(), "starting qbox-modals");

    let page = parser::load_page(&cli.page)?;

    // Handle --list
    if cli.list {
        for line in page.listing() {
            println!("{}", line);
        }
        return Ok(());
    }

    let outbox_path = cli.outbox.unwrap_or_else(persist::default_outbox_path);

    // Handle --clear-outbox
    if cli.clear_outbox {
        persist::clear_outbox(&outbox_path)?;
        eprintln!("Outbox cleared.");
    }

    let queued = persist::load_outbox(&outbox_path)?;
    info!(queued = queued.len(), outbox = %outbox_path.display(), "outbox ready");

    let state = AppState::new(&page, outbox_path);
    if state.answer_modal.is_none() && state.detail_modal.is_none() {
        warn!("page has no report modals, elements are inert");
    }

    tui::run_tui(state)
}

/// Logs go to a daily file; the terminal belongs to the UI. A missing log
/// directory only disables logging.
fn initialize_logging() -> Option<WorkerGuard> {
    let directory = persist::data_dir().join("logs");
    std::fs::create_dir_all(&directory).ok()?;

    let file_appender = tracing_appender::rolling::daily(&directory, "qbox-modals.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Some(guard)
}
