use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{debug, info};

use podlens_k8s::{Provider, ProviderKind};
use podlens_tui::app::{DEFAULT_ANALYSIS_CACHE_SIZE, DEFAULT_REFRESH_INTERVAL};
use podlens_tui::{
    Dispatcher, Event, EventHandler, KeyBindings, Message, NavigationState, Settings,
    StartupOptions, Strings, Theme, Tui, Viewport, render,
};
use podlens_types::{Language, Lookback};

/// Podlens - browse Kubernetes pods and classify their recent logs
#[derive(Parser, Debug)]
#[command(name = "podlens")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Namespace to open directly, skipping the namespace list
    #[arg(short, long)]
    namespace: Option<String>,

    /// How far back to read logs (e.g. 30s, 5m, 2h)
    #[arg(short, long)]
    since: Option<Lookback>,

    /// Display language: en or tr
    #[arg(long = "lang", visible_alias = "language", value_name = "LANG")]
    language: Option<String>,

    /// Kubeconfig context (defaults to the current context)
    #[arg(long)]
    context: Option<String>,

    /// Where cluster data comes from: api or kubectl
    #[arg(long)]
    provider: Option<ProviderKind>,

    /// Settings file (defaults to $XDG_CONFIG_HOME/podlens/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with auto-refresh turned off
    #[arg(long)]
    no_auto_refresh: bool,
}

/// Flags merged over the settings file
#[derive(Debug)]
struct Config {
    startup: StartupOptions,
    lookback: Lookback,
    language: Language,
    provider: ProviderKind,
    context: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the application
    let result = run_app(args).await;

    // Handle any errors
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path.map(Path::to_path_buf).or_else(Settings::default_path) else {
        return Ok(Settings::default());
    };
    debug!(path = %path.display(), "loading settings");
    Ok(Settings::load(&path)?)
}

fn resolve(args: Args, settings: Settings) -> Result<Config> {
    let analysis_cache_size = match settings.analysis_cache_size {
        Some(size) => NonZeroUsize::new(size).context("analysis_cache_size must be at least 1")?,
        None => DEFAULT_ANALYSIS_CACHE_SIZE,
    };
    let refresh_interval = match settings.refresh_interval_secs {
        Some(0) => bail!("refresh_interval_secs must be at least 1"),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_REFRESH_INTERVAL,
    };

    Ok(Config {
        startup: StartupOptions {
            namespace: args.namespace,
            auto_refresh: !args.no_auto_refresh && settings.auto_refresh.unwrap_or(true),
            refresh_interval,
            analysis_cache_size,
            viewport: Viewport::default(),
        },
        lookback: args.since.or(settings.since).unwrap_or_default(),
        language: args
            .language
            .map(Language::from)
            .or(settings.language)
            .unwrap_or_default(),
        provider: args.provider.or(settings.provider).unwrap_or_default(),
        context: args.context.or(settings.context),
    })
}

async fn run_app(args: Args) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let config = resolve(args, settings)?;
    info!(
        provider = ?config.provider,
        lookback = %config.lookback,
        namespace = ?config.startup.namespace,
        "starting"
    );

    // Connect before taking over the terminal so failures print normally
    let provider = Provider::connect(config.provider, config.context.as_deref()).await?;

    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<Message>();
    let dispatcher = Dispatcher::new(provider, config.lookback, message_tx);

    let keybindings = KeyBindings::new();
    let theme = Theme::default();
    let strings = Strings::for_language(config.language);

    // Initialize TUI
    let mut tui = Tui::new()?;
    let mut events = EventHandler::new();

    let (width, height) = tui.size()?;
    let mut state = NavigationState::new(StartupOptions {
        viewport: Viewport { width, height },
        ..config.startup
    });
    dispatcher.dispatch_all(state.init());

    // Main event loop: the only place the state changes
    loop {
        tui.terminal()
            .draw(|frame| render(frame, &state, &theme, strings))?;

        let message = tokio::select! {
            Some(event) = events.next() => match event {
                Event::Key(key) => match keybindings.action_for(state.view(), &key) {
                    Some(action) => Message::Action(action),
                    None => continue,
                },
                Event::Resize(width, height) => Message::Resize { width, height },
                Event::Error(e) => Message::TerminalError(e),
            },
            Some(message) = message_rx.recv() => message,
            else => break,
        };

        let commands = state.update(message);
        dispatcher.dispatch_all(commands);

        if state.should_quit() {
            break;
        }
    }

    events.shutdown();
    tui.restore()?;

    Ok(())
}
