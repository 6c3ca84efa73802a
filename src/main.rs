//! Pockit - App-repository loader
//!
//! Main entry point for the Pockit CLI.

use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use pockit::config::{validate_config_result, PockitConfig};
use pockit::menu::{Menu, MenuAction, MenuBar, APPS_MENU};
use pockit::source::{AppPayload, HttpAppSource};
use pockit::sync::{submit_repository_form, AddOutcome, AppLauncher, RepositoryPrompt, Synchronizer};
use pockit::{PockitError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// Pockit - Load apps from remote app repositories
#[derive(Parser, Debug)]
#[command(name = "pockit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: ~/.config/pockit/config.yaml)
    #[arg(short, long, env = "POCKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Fetch all listings and print the Apps menu
    Menu,

    /// List configured app repositories
    Repos,

    /// Add an app repository and refresh the Apps menu
    Add {
        /// Repository base URL (prompted for when omitted)
        url: Option<String>,
    },

    /// Activate an Apps menu entry by label
    Launch {
        /// Menu label, e.g. "Calculator"
        label: String,

        /// Write the app payload to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = pockit::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(PockitConfig::default_path);

    if let Commands::Init { force } = cli.command {
        return handle_init_command(&config_path, force);
    }

    let mut config = PockitConfig::load_or_default(Some(config_path.as_path()))?;
    validate_config_result(&config)?;

    tracing::info!(repositories = config.repositories.len(), "Configuration loaded");

    if let Commands::Repos = cli.command {
        for url in config.repository_set().iter() {
            println!("{}", url);
        }
        return Ok(());
    }

    let source = HttpAppSource::new(&config.fetch)?;
    let mut synchronizer = Synchronizer::new(source, config.repository_set());
    if config.fetch.timeout_secs > 0 {
        synchronizer =
            synchronizer.with_fetch_timeout(Duration::from_secs(config.fetch.timeout_secs));
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let mut bar = MenuBar::new();
    let mut prompt = TerminalPrompt::new();

    runtime.block_on(async {
        match cli.command {
            Commands::Menu => {
                let menu = synchronizer.synchronize(&mut bar).await;
                print_menu(&menu);
            }

            Commands::Add { url } => {
                synchronizer.synchronize(&mut bar).await;

                let input = match url {
                    Some(url) => url,
                    None => {
                        prompt.open();
                        prompt.read_url()?
                    }
                };
                add_and_persist(&input, &mut synchronizer, &mut bar, &mut prompt, &mut config, &config_path)
                    .await?;
            }

            Commands::Launch { label, out } => {
                let menu = synchronizer.synchronize(&mut bar).await;
                let option = menu
                    .find(&label)
                    .ok_or_else(|| PockitError::UnknownApp(label.clone()))?;

                let mut launcher = PayloadWriter::new(out);
                synchronizer.activate(option, &mut launcher, &mut prompt).await?;

                if option.action == MenuAction::AddRepository {
                    let input = prompt.read_url()?;
                    add_and_persist(&input, &mut synchronizer, &mut bar, &mut prompt, &mut config, &config_path)
                        .await?;
                } else if option.action == MenuAction::Inert {
                    eprintln!("'{}' has no action", label);
                }
            }

            Commands::Init { .. } | Commands::Repos => unreachable!("handled before runtime start"),
        }

        Ok::<(), PockitError>(())
    })
}

fn handle_init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PockitError::Config(format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    PockitConfig::new().save(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Submit `input` through the form path and save the repository list
/// when it grew
async fn add_and_persist(
    input: &str,
    synchronizer: &mut Synchronizer<HttpAppSource>,
    bar: &mut MenuBar,
    prompt: &mut TerminalPrompt,
    config: &mut PockitConfig,
    config_path: &Path,
) -> Result<()> {
    match submit_repository_form(input, synchronizer, bar, prompt).await {
        AddOutcome::Added => {
            config.set_repositories(synchronizer.repositories());
            config.save(config_path)?;
        }
        AddOutcome::Duplicate => println!("Repository already added"),
        AddOutcome::Rejected => println!("Not a repository URL (expected http:// or https://)"),
    }

    if let Some(menu) = bar.get(APPS_MENU) {
        print_menu(menu);
    }
    Ok(())
}

fn print_menu(menu: &Menu) {
    print!("{}", menu.render());
}

/// Writes launched app payloads to stdout or a file
struct PayloadWriter {
    out: Option<PathBuf>,
}

impl PayloadWriter {
    fn new(out: Option<PathBuf>) -> Self {
        Self { out }
    }
}

impl AppLauncher for PayloadWriter {
    fn create_app(&mut self, payload: AppPayload) -> Result<()> {
        match &self.out {
            Some(path) => {
                fs::write(path, payload.value.as_bytes())?;
                eprintln!("Wrote {} bytes to {}", payload.value.len(), path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(payload.value.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Add-repository form rendered as a terminal prompt
struct TerminalPrompt {
    theme: ColorfulTheme,
    open: bool,
}

impl TerminalPrompt {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            open: false,
        }
    }

    fn read_url(&self) -> Result<String> {
        if !self.open {
            return Err(PockitError::Other("Add-repository prompt is not open".to_string()));
        }

        Input::with_theme(&self.theme)
            .with_prompt("Repository URL")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PockitError::Other(format!("Failed to read repository URL: {}", e)))
    }
}

impl RepositoryPrompt for TerminalPrompt {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}
