//! `marquee`: terminal browser for the Hyderabad movie-theater directory.
//!
//! # Usage
//!
//! ```
//! marquee
//! marquee --view list --images-dir ./public
//! marquee --config ~/.config/marquee/config.toml --log-file marquee.log
//! marquee --export > theaters.json
//! ```

mod app;
mod images;
mod ui;

use std::{
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use images::FsImages;
use marquee_core::{Catalog, ViewMode, geo::Gazetteer};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_IMAGES_DIR: &str = "public";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "marquee", about = "Browse movie theaters from the terminal")]
struct Args {
  /// Path to a TOML config file (data, locations, images_dir, view, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Theater dataset JSON (default: the built-in Hyderabad list).
  #[arg(long, value_name = "FILE", env = "MARQUEE_DATA")]
  data: Option<PathBuf>,

  /// Location table JSON (default: the built-in Hyderabad table).
  #[arg(long, value_name = "FILE", env = "MARQUEE_LOCATIONS")]
  locations: Option<PathBuf>,

  /// Directory holding `theaters/theater-<id>.jpg` (default: public).
  #[arg(long, value_name = "DIR", env = "MARQUEE_IMAGES_DIR")]
  images_dir: Option<PathBuf>,

  /// Initial density of the theaters tab: grid or list.
  #[arg(long, env = "MARQUEE_VIEW")]
  view: Option<String>,

  /// Write logs here. The terminal belongs to the UI, so nothing is logged
  /// without one.
  #[arg(long, value_name = "FILE", env = "MARQUEE_LOG_FILE")]
  log_file: Option<PathBuf>,

  /// Print the derived catalog as JSON and exit.
  #[arg(long)]
  export: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  data:       Option<PathBuf>,
  #[serde(default)]
  locations:  Option<PathBuf>,
  #[serde(default)]
  images_dir: Option<PathBuf>,
  #[serde(default)]
  view:       Option<String>,
  #[serde(default)]
  log_file:   Option<PathBuf>,
}

/// Settings after layering CLI flags over the config file over defaults.
#[derive(Debug)]
struct Settings {
  data:       Option<PathBuf>,
  locations:  Option<PathBuf>,
  images_dir: PathBuf,
  view:       ViewMode,
  log_file:   Option<PathBuf>,
}

impl Settings {
  fn resolve(args: Args, file: ConfigFile) -> Result<Self> {
    let view = match args.view.or(file.view) {
      Some(name) => name
        .parse::<ViewMode>()
        .map_err(marquee_core::Error::from)
        .with_context(|| format!("invalid view mode {name:?}"))?,
      None => ViewMode::default(),
    };
    Ok(Self {
      data: args.data.or(file.data),
      locations: args.locations.or(file.locations),
      images_dir: args
        .images_dir
        .or(file.images_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
      view,
      log_file: args.log_file.or(file.log_file),
    })
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();
  let export = args.export;

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };
  let settings = Settings::resolve(args, file_cfg)?;

  if let Some(path) = &settings.log_file {
    init_logging(path)?;
  }

  let catalog = load_catalog(settings.data.as_deref())?;

  // Helper mode: dump the derived catalog and exit.
  if export {
    println!("{}", marquee_data::export_catalog(&catalog)?);
    return Ok(());
  }

  let gazetteer = load_gazetteer(settings.locations.as_deref())?;
  if !settings.images_dir.is_dir() {
    tracing::warn!(
      dir = %settings.images_dir.display(),
      "images directory not found; every theater will use a stock photo"
    );
  }
  let images = FsImages::new(settings.images_dir);
  let mut app = App::new(catalog, gazetteer, images, settings.view);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

fn init_logging(path: &Path) -> Result<()> {
  let file = std::fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
  let raw = match path {
    Some(path) => marquee_data::load_theaters(path)
      .with_context(|| format!("loading theaters from {}", path.display()))?,
    None => marquee_data::embedded_theaters().context("parsing built-in theaters")?,
  };
  let catalog = Catalog::new(raw);
  tracing::info!(
    theaters = catalog.len(),
    locations = catalog.locations().len(),
    "catalog loaded"
  );
  Ok(catalog)
}

fn load_gazetteer(path: Option<&Path>) -> Result<Gazetteer> {
  match path {
    Some(path) => marquee_data::load_gazetteer(path)
      .with_context(|| format!("loading locations from {}", path.display())),
    None => marquee_data::embedded_gazetteer().context("parsing built-in locations"),
  }
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(50)).context("polling events")? {
      continue;
    }
    match event::read().context("reading event")? {
      Event::Key(key) => {
        if !app.handle_key(key)? {
          break;
        }
      }
      Event::Resize(_, _) => {
        // Terminal will redraw on next iteration.
      }
      _ => {}
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(extra: &[&str]) -> Args {
    Args::parse_from(std::iter::once("marquee").chain(extra.iter().copied()))
  }

  #[test]
  fn defaults_apply_without_flags_or_file() {
    let s = Settings::resolve(args(&[]), ConfigFile::default()).unwrap();
    assert_eq!(s.images_dir, PathBuf::from("public"));
    assert_eq!(s.view, ViewMode::Grid);
    assert!(s.data.is_none());
  }

  #[test]
  fn flags_override_config_file() {
    let file: ConfigFile = toml::from_str(
      r#"
        view = "list"
        images_dir = "assets"
        data = "file.json"
      "#,
    )
    .unwrap();
    let s = Settings::resolve(args(&["--data", "cli.json"]), file).unwrap();
    assert_eq!(s.data, Some(PathBuf::from("cli.json")));
    assert_eq!(s.images_dir, PathBuf::from("assets"));
    assert_eq!(s.view, ViewMode::List);
  }

  #[test]
  fn unknown_view_mode_is_rejected() {
    let err = Settings::resolve(args(&["--view", "mosaic"]), ConfigFile::default())
      .unwrap_err();
    assert!(err.to_string().contains("mosaic"));
  }
}
