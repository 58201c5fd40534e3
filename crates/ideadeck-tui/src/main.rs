mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ideadeck_core::config::CoreConfig;
use ideadeck_core::constants::DEFAULT_API_URL;
use ideadeck_core::runtime::CoreRuntime;
use ideadeck_core::store::CurationOverlay;
use ideadeck_core::tracing_setup::init_tracing;

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser)]
#[command(name = "ideadeck", about = "Terminal dashboard for AI-scored business ideas")]
struct Args {
    /// Directory for favorites/hidden persistence (defaults to the platform
    /// data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Scoring service base URL (falls back to IDEADECK_API_URL, then the
    /// built-in default)
    #[arg(long)]
    api_url: Option<String>,
}

fn resolve_config(args: &Args) -> CoreConfig {
    let data_dir = args.data_dir.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ideadeck")
    });

    let api_url = args
        .api_url
        .clone()
        .or_else(|| std::env::var("IDEADECK_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    CoreConfig::new(data_dir, api_url)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    init_tracing();

    let args = Args::parse();
    let config = resolve_config(&args);

    let mut core_runtime = CoreRuntime::new(&config)?;
    let api_rx = core_runtime
        .take_event_rx()
        .ok_or_else(|| anyhow::anyhow!("Core runtime already has an active event receiver"))?;

    let overlay = CurationOverlay::load(&config.data_dir);
    let mut app = App::new(core_runtime.handle(), overlay);

    // The one-shot listing; failure or timeout degrades to the bundled set
    core_runtime.handle().request_listing();

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, api_rx).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
