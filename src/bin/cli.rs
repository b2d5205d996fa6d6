//! site-probe CLI
//!
//! Runs probe operations against a configured base URL and writes captured
//! screenshots and JSON reports to disk or stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use site_probe::{Action, CaptureOptions, ExtractionMap, ProbeConfig, SiteProbe};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "site-probe", version, about = "Probe a site: screenshots, extraction, flows, responsive capture, accessibility checks")]
struct Cli {
    /// Base URL to probe (overrides PROBE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Run the browser with a visible window
    #[arg(long, global = true)]
    headed: bool,

    /// Navigation/selector wait timeout in milliseconds (overrides PROBE_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Capture a screenshot of a page
    Capture {
        /// Path relative to the base URL
        path: String,

        /// Capture only the element matching this selector
        #[arg(long)]
        selector: Option<String>,

        /// Capture the full scrollable page
        #[arg(long)]
        full_page: bool,

        /// Wait for this selector before capturing
        #[arg(long)]
        wait_for: Option<String>,

        /// Output file
        #[arg(long, default_value = "screenshot.png")]
        out: PathBuf,
    },

    /// Extract text content by CSS selectors
    Extract {
        /// Path relative to the base URL
        path: String,

        /// Extractors as key=selector pairs, e.g. title=h1 price=.price
        #[arg(required = true)]
        extractors: Vec<String>,
    },

    /// Run a scripted user flow from a JSON action file
    Flow {
        /// Path relative to the base URL
        path: String,

        /// JSON file holding an ordered array of actions
        #[arg(long)]
        actions: PathBuf,

        /// Directory for captured screenshots
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Capture a page across the default mobile/tablet/desktop viewports
    Responsive {
        /// Path relative to the base URL
        path: String,

        /// Directory for captured screenshots
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Run the structural accessibility check
    A11y {
        /// Path relative to the base URL
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let probe = SiteProbe::new(build_config(&cli)?);

    let result = run(&cli.command, &probe);
    probe.cleanup();
    result
}

fn build_config(cli: &Cli) -> anyhow::Result<ProbeConfig> {
    let mut config = match &cli.base_url {
        Some(url) => ProbeConfig::new(url.clone())?,
        None => ProbeConfig::from_env()?,
    };

    if cli.headed {
        config = config.headless(false);
    }
    if let Some(ms) = cli.timeout_ms {
        config = config.nav_timeout(Duration::from_millis(ms));
    }

    Ok(config)
}

fn run(command: &Command, probe: &SiteProbe) -> anyhow::Result<()> {
    match command {
        Command::Capture {
            path,
            selector,
            full_page,
            wait_for,
            out,
        } => {
            let mut options = CaptureOptions::new().full_page(*full_page);
            if let Some(selector) = selector {
                options = options.selector(selector.clone());
            }
            if let Some(wait_for) = wait_for {
                options = options.wait_for(wait_for.clone());
            }

            let png = probe.navigate_and_capture(path, &options)?;
            std::fs::write(out, png).with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Wrote {}", out.display());
        }

        Command::Extract { path, extractors } => {
            let map = parse_extractors(extractors)?;
            let extraction = probe.extract_page_data(path, &map)?;

            println!("{}", serde_json::to_string_pretty(&extraction)?);
            if !extraction.is_complete() {
                log::warn!("{} extractor(s) produced no text", extraction.misses.len());
            }
        }

        Command::Flow { path, actions, out_dir } => {
            let raw = std::fs::read_to_string(actions)
                .with_context(|| format!("Failed to read {}", actions.display()))?;
            let actions: Vec<Action> =
                serde_json::from_str(&raw).context("Action file is not a valid action array")?;

            let screenshots = probe.perform_user_flow(path, &actions)?;
            for (i, png) in screenshots.iter().enumerate() {
                let out = out_dir.join(format!("flow-{}.png", i + 1));
                std::fs::write(&out, png).with_context(|| format!("Failed to write {}", out.display()))?;
                println!("Wrote {}", out.display());
            }
        }

        Command::Responsive { path, out_dir } => {
            let screenshots = probe.test_responsiveness(path)?;
            for (name, png) in &screenshots {
                let out = out_dir.join(format!("{}.png", name));
                std::fs::write(&out, png).with_context(|| format!("Failed to write {}", out.display()))?;
                println!("Wrote {}", out.display());
            }
        }

        Command::A11y { path } => {
            let report = probe.validate_accessibility(path)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn parse_extractors(pairs: &[String]) -> anyhow::Result<ExtractionMap> {
    let mut map = ExtractionMap::with_capacity(pairs.len());

    for pair in pairs {
        let (key, selector) = pair
            .split_once('=')
            .with_context(|| format!("Extractor '{}' is not a key=selector pair", pair))?;
        map.insert(key.to_string(), selector.to_string());
    }

    Ok(map)
}
