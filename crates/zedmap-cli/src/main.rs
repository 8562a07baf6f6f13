use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zedmap::{AreaCoords, SaveLocator, SearchResult, format_results, results_to_json, search_save};

mod config;
mod prompter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "zedmap")]
#[command(about = "Search Project Zomboid map files for text")]
struct Args {
    /// Text to search for (prompted when omitted)
    #[arg(short, long)]
    needle: Option<String>,

    /// Save name filter, case-insensitive (prompted when omitted)
    #[arg(short, long)]
    save: Option<String>,

    /// Game mode folder (e.g. Survivor, Sandbox)
    #[arg(short, long)]
    mode: Option<String>,

    /// Saves root directory (defaults to <home>/Zomboid/Saves)
    #[arg(long)]
    saves_dir: Option<PathBuf>,

    #[arg(short, long, default_value = "zedmap.toml")]
    config: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Open the first result in the online map viewer
    #[arg(long)]
    open: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("zedmap=info".parse()?))
        .init();

    let args = Args::parse();

    let config = CliConfig::load_from_path(&args.config).unwrap_or_default();

    let locator = match args.saves_dir.clone().or_else(|| config.saves_root.clone()) {
        Some(root) => SaveLocator::new(root),
        None => {
            let home = dirs::home_dir().context("Could not determine home directory")?;
            SaveLocator::from_base(home)
        }
    };
    info!("Using saves root {}", locator.saves_root().display());

    let default_mode = config
        .default_mode
        .clone()
        .unwrap_or_else(|| config::DEFAULT_MODE.to_string());

    // One-shot when the needle came from the command line
    if let Some(ref needle) = args.needle {
        let save_filter = args.save.clone().unwrap_or_default();
        let mode = args.mode.clone().unwrap_or_else(|| default_mode.clone());
        return run_search(&locator, needle, &save_filter, &mode, &args);
    }

    // Interactive loop; an empty needle (or EOF) exits
    loop {
        let Some(needle) = prompter::prompt_line("Search for: ") else {
            break;
        };
        if needle.is_empty() {
            break;
        }

        let Some(save_filter) = prompter::prompt_line("Save name filter: ") else {
            break;
        };

        let mode = match args.mode {
            Some(ref m) => m.clone(),
            None => {
                let prompt = format!("Save type (default: {}): ", default_mode);
                let Some(input) = prompter::prompt_line(&prompt) else {
                    break;
                };
                if input.is_empty() {
                    default_mode.clone()
                } else {
                    input
                }
            }
        };

        if let Err(e) = run_search(&locator, &needle, &save_filter, &mode, &args) {
            eprintln!("{}", e);
        }
        println!("---");
    }

    Ok(())
}

fn run_search(
    locator: &SaveLocator,
    needle: &str,
    save_filter: &str,
    mode: &str,
    args: &Args,
) -> Result<()> {
    let save_dirs = locator.save_directories(save_filter, mode);
    if save_dirs.is_empty() {
        bail!(
            "No save found for filter {:?} under mode {:?}",
            save_filter,
            mode
        );
    }

    let selected = if save_dirs.len() == 1 {
        &save_dirs[0]
    } else {
        println!();
        println!("Save(s) found:");
        for (i, dir) in save_dirs.iter().enumerate() {
            println!("{}. {}", i + 1, dir);
        }
        let Some(choice) =
            prompter::prompt_selection("\nEnter number corresponding to save: ", save_dirs.len())
        else {
            bail!("No save selected");
        };
        &save_dirs[choice - 1]
    };

    let save_path = locator.save_path(mode, selected);
    let results = search_save(locator, &save_path, needle)?;

    println!();
    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    if args.json {
        println!("{}", results_to_json(&results)?);
    } else {
        print_results(&results)?;
    }

    if args.open
        && let Some(first) = results.first()
    {
        let url = AreaCoords::from_file_name(&first.file_name)?.viewer_url();
        info!("Opening {}", url);
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser: {}", e);
        }
    }

    Ok(())
}

fn print_results(results: &[SearchResult]) -> Result<()> {
    println!("Results:");
    for chunk in format_results(results)?.chunks(4) {
        println!("{}", chunk[0].green());
        println!("{}", chunk[1]);
        println!("{}", chunk[2].blue().underline());
        println!("{}", chunk[3]);
    }
    Ok(())
}
