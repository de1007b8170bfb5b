use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use serde::Serialize;

use runway_watcher::app::{App, StatusLevel};
use runway_watcher::config::{self, Config, ConfigInputs, ConfigSource, RuntimeConfig};
use runway_watcher::domain::{Feed, Summary};
use runway_watcher::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "runway-watcher",
    version,
    about = "RunwayWatcher: airport runway hazard monitoring dashboard"
)]
struct Args {
    /// API base URL (overrides RUNWAY_API_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Runtime config script (window.__RUNTIME_CONFIG__ = {...};)
    #[arg(long, global = true)]
    runtime_script: Option<PathBuf>,

    /// Config file (defaults to ~/.config/runway-watcher/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print the derived summary as JSON and exit
    Summary,
    /// Print the runtime config script for the resolved API url
    RuntimeConfig,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    site: String,
    #[serde(flatten)]
    summary: Summary,
    api_url: &'a str,
    source: ConfigSource,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = config::load(args.config.as_deref());
    let config = loaded.config;

    if let Some(path) = config::log_path() {
        if let Err(err) = logging::init(&path, config.log_level.as_deref()) {
            eprintln!("logging disabled: {err}");
        }
    }
    if let Some(err) = &loaded.error {
        log::warn!("ignoring config file: {err}");
        eprintln!("ignoring config file: {err}");
    }

    let runtime = resolve_runtime(&args, &config);
    log::info!(
        "api url {} (from {})",
        runtime.api_url,
        runtime.source.title()
    );
    let feed = build_feed(&config);

    match args.command {
        Some(Cmd::Summary) => {
            let report = SummaryReport {
                site: feed.site.display(),
                summary: Summary::from_feed(&feed),
                api_url: &runtime.api_url,
                source: runtime.source,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Some(Cmd::RuntimeConfig) => {
            println!("{}", config::render_runtime_script(&runtime.api_url)?);
            Ok(())
        }
        None => {
            let mut app = App::new(runtime, feed);
            app.config_path = loaded.path;
            run_tui(app)
        }
    }
}

fn resolve_runtime(args: &Args, config: &Config) -> RuntimeConfig {
    let script = args
        .runtime_script
        .as_deref()
        .and_then(|path| match config::load_runtime_script(path) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("ignoring runtime script: {err}");
                None
            }
        });
    let env = std::env::var(config::API_URL_ENV).ok();

    config::resolve(ConfigInputs {
        cli: args.api_url.as_deref(),
        env: env.as_deref(),
        script: script.as_deref(),
        file: config.api_url.as_deref(),
    })
}

fn build_feed(config: &Config) -> Feed {
    let mut feed = Feed::sample();
    if let Some(code) = config.airport_code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        feed.site.code = code.to_uppercase();
    }
    if let Some(name) = config.airport_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        feed.site.name = name.to_string();
    }
    feed
}

fn run_tui(app: App) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("ui loop failed: {err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        app.sync_context();
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            log::info!("shutting down");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    let size = terminal_rect(terminal)?;
                    input::handle_mouse(&mut app, mouse, size);
                }
                _ => {}
            }
        }

        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, &text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect<B: ratatui::backend::Backend>(terminal: &Terminal<B>) -> Result<Rect> {
    Ok(terminal.size()?)
}

fn copy_to_clipboard(app: &mut App, text: &str) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text).is_ok() {
                app.set_status(format!("Copied: {text}"), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(err) => {
            log::warn!("clipboard unavailable: {err}");
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
