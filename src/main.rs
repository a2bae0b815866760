use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use readme_canvas::storage::UsernameStore;
use readme_canvas::cards::CardRegistry;
use readme_canvas::{export, CardKind, CardStore, CardTag, EditorConfig, FileUsernameStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readme-canvas", version, about = "Compose a GitHub profile README from cards")]
struct Cli {
    /// File holding the persisted username
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the saved username, or save a new one
    Username { name: Option<String> },
    /// Fetch a profile summary (defaults to the saved username)
    Profile { name: Option<String> },
    /// Add cards in order and print the resulting README markdown
    Render {
        /// Card tags, e.g. `profile stats text`
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// List the card kinds that can be dropped on the canvas
    Kinds { search: Option<String> },
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("readme-canvas: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = EditorConfig::default();
    if let Some(state) = cli.state {
        config.state_path = Some(state);
    }
    if let Some(base) = cli.api_base {
        config.api_base_url = base;
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout_ms = ms;
    }

    match cli.command {
        Command::Username { name } => {
            let mut store = FileUsernameStore::from_config(&config)?;
            match name {
                Some(name) => {
                    let saved = store.save(&name)?;
                    println!("{}", saved);
                }
                None => match store.load()? {
                    Some(saved) => println!("{}", saved),
                    None => bail!("no username saved; run `readme-canvas username <NAME>`"),
                },
            }
        }
        Command::Profile { name } => profile(&config, name)?,
        Command::Render { tags } => {
            let username = FileUsernameStore::from_config(&config)?.load()?;
            if username.is_none() {
                log::warn!("no username saved; profile and stats cards will be blank");
            }
            let mut cards = CardStore::new(CardRegistry::new(username.unwrap_or_default()));
            for tag in &tags {
                cards.add_card(CardTag::parse(tag));
            }
            print!("{}", export::to_markdown(cards.list()));
        }
        Command::Kinds { search } => {
            let kinds = match search {
                Some(term) => CardKind::search(&term),
                None => CardKind::ALL.to_vec(),
            };
            for kind in kinds {
                println!("{:<10} {}", kind.as_str(), kind.label());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "github")]
fn profile(config: &EditorConfig, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => FileUsernameStore::from_config(config)?
            .load()?
            .context("no username given and none saved")?,
    };
    let client = readme_canvas::GitHubClient::new(config)?;
    let summary = client.fetch(&name)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(not(feature = "github"))]
fn profile(_config: &EditorConfig, _name: Option<String>) -> Result<()> {
    bail!("built without the `github` feature")
}
