use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reavital::env::{self, EnvVar};
use reavital::{FileStorage, MemoryStorage, Page, PageOptions, Site, SiteConfig, Storage};

/// Runs the ReaVital site scripts over an HTML page and writes the resulting document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// HTML file to load, or `-` for stdin
    #[arg(value_name = "INPUT", required_unless_present = "help_env")]
    input: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Switch to this language after the page is mounted
    #[arg(short, long, value_name = "CODE")]
    lang: Option<String>,

    /// Browser-reported locale used when no preference is stored
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,

    /// JSON file holding local storage between runs
    #[arg(long, value_name = "FILE", conflicts_with = "no_state")]
    state: Option<PathBuf>,

    /// Keep local storage in memory only
    #[arg(long)]
    no_state: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Virtual time to run before writing the output
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    advance_ms: u64,

    /// Viewport width in pixels
    #[arg(long, value_name = "PX", default_value_t = reavital::page::DEFAULT_VIEWPORT_WIDTH)]
    width: u32,

    /// Document charset
    #[arg(short, long, value_name = "CHARSET", default_value = "utf-8")]
    encoding: String,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,

    /// Print the environment variables understood by this tool
    #[arg(long)]
    help_env: bool,
}

fn init_logging(cli: &Cli, env_level: Option<String>) {
    let level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        env_level.unwrap_or_else(|| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("reavital={level}")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn default_state_file() -> Option<PathBuf> {
    if let Ok(path) = env::core::StateFile::get() {
        return Some(path);
    }

    ProjectDirs::from("com", "ReaVital", "reavital").map(|dirs| dirs.data_dir().join("storage.json"))
}

fn open_storage(cli: &Cli) -> Result<Box<dyn Storage>, Box<dyn Error>> {
    if cli.no_state {
        return Ok(Box::new(MemoryStorage::new()));
    }

    match cli.state.clone().or_else(default_state_file) {
        Some(path) => {
            let storage = FileStorage::open(path)?;
            tracing::debug!("Using state file {}", storage.path().display());
            Ok(Box::new(storage))
        }
        None => {
            tracing::warn!("No location for the state file, preferences will not persist");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}

fn read_input(input: &str) -> io::Result<Vec<u8>> {
    if input == "-" {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        fs::read(input)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.help_env {
        print!("{}", env::generate_env_docs());
        return Ok(());
    }

    init_logging(&cli, env::core::LogLevel::get_opt()?);

    let mut config = SiteConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env_overrides()?;

    let Some(input) = cli.input.as_deref() else {
        return Err("missing INPUT".into());
    };
    let data = read_input(input)?;

    let options = PageOptions {
        locale: cli.locale.clone(),
        viewport_width: cli.width,
        encoding: cli.encoding.clone(),
    };
    let page = Page::load(&data, options, open_storage(&cli)?)?;
    let site = Site::mount(&page, &config);

    if let Some(code) = cli.lang.as_deref() {
        let code = code.trim().to_lowercase();
        if !config.i18n.languages.contains(&code) {
            return Err(format!(
                "language `{}` is not supported (expected one of: {})",
                code,
                config.i18n.languages.join(", ")
            )
            .into());
        }
        site.language.change_language(&page, &code);
        page.flush_mutations();
    }

    page.advance(Duration::from_millis(cli.advance_ms));

    let output = page.serialize()?;
    match &cli.output {
        Some(path) => fs::write(path, output)?,
        None => io::stdout().write_all(&output)?,
    }

    tracing::info!("Rendered page in {}", site.language.current_language());

    Ok(())
}
