use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "Notepad")]
#[command(about = "A minimal plain text editor", long_about = None)]
struct Cli {
    /// Text file to open at startup
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    notepad::gui::run_app(cli.file);

    Ok(())
}
