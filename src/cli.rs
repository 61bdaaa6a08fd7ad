use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "qbox-modals", version, about = "Report answers and review report reasons")]
pub struct Cli {
    /// Page description (YAML)
    #[arg(default_value = "page.yaml")]
    pub page: PathBuf,

    /// Where submitted reports are queued [default: <data dir>/qbox-modals/outbox.yaml]
    #[arg(long, value_name = "path")]
    pub outbox: Option<PathBuf>,

    /// Print the page's elements and report reasons without entering the TUI
    #[arg(long)]
    pub list: bool,

    /// Delete queued reports before starting
    #[arg(long)]
    pub clear_outbox: bool,
}
