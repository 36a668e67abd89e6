use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use cvpage::background::{BackgroundAnimator, FRAME_INTERVAL_MS};
use cvpage::reveal::Rect;
use cvpage::{Page, PageConfig, PageShell, PageState, ThemeStore};

/// Render a JSON-driven resume page without a browser.
#[derive(Parser, Debug)]
#[command(name = "cvpage", version, about)]
struct Cli {
    /// Primary resume API endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Local fallback JSON file
    #[arg(long)]
    fallback: Option<PathBuf>,

    /// HTML shell to render into (defaults to the bundled shell)
    #[arg(long)]
    shell: Option<PathBuf>,

    /// Where to write the final page
    #[arg(long, default_value = "resume.html")]
    out: PathBuf,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Run the background animation for this many frames after rendering
    #[arg(long, default_value_t = 0)]
    bg_frames: u32,

    /// Flip the persisted theme preference and exit
    #[arg(long)]
    toggle_theme: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = PageConfig::default();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(path) = cli.fallback {
        config.fallback_path = path;
    }
    if let Some(width) = cli.width {
        config.viewport.width = width;
    }
    if let Some(height) = cli.height {
        config.viewport.height = height;
    }

    let theme_path = config
        .theme_path
        .clone()
        .or_else(ThemeStore::default_path)
        .context("no config directory for the theme preference")?;
    let mut store = ThemeStore::open(theme_path);

    if cli.toggle_theme {
        let theme = store.toggle()?;
        println!("theme set to {}", theme.as_str());
        return Ok(());
    }

    let shell = match &cli.shell {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read shell {}", path.display()))?;
            PageShell::parse(&html)?
        }
        None => PageShell::builtin()?,
    };

    let mut page = Page::new(&config, shell, store.current())?;
    let output = page.load_and_render().await?;
    fs::write(&cli.out, &output.html)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;

    if output.state == PageState::Failed {
        eprintln!(
            "resume data unavailable; wrote error page to {}",
            cli.out.display()
        );
        std::process::exit(1);
    }
    info!("resume rendered to {}", cli.out.display());

    // Simulate scrolling the full page so every card reveals.
    let page_bottom = Rect {
        x: 0,
        y: 0,
        width: config.viewport.width,
        height: u32::MAX / 2,
    };
    let revealed = page.observer_mut().scroll_to(page_bottom);
    debug!("revealed cards: {:?}", revealed);

    if cli.bg_frames > 0 {
        let theme = store.current();
        let mut animator = BackgroundAnimator::new(config.viewport);
        let mut frames = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        for _ in 0..cli.bg_frames {
            frames.tick().await;
            animator.tick();
            let glyphs = animator.paint(theme);
            debug!("painted {} glyphs", glyphs.len());
        }
        info!("background preview finished after {} frames", cli.bg_frames);
    }

    Ok(())
}
