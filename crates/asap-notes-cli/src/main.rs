//! asap-notes - plain-text notes from the command line

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{Context, Result};
use asap_notes_config::{Settings, SettingsUpdate};
use asap_notes_engine::{FolderItem, RenderOptions, Renderer, Session};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asap-notes")]
#[command(version, about = "Plain-text notes with a Markdown preview", long_about = None)]
#[command(after_help = "EXAMPLES:
    asap-notes new-note groceries         Create groceries.md in the notes folder
    asap-notes render notes/todo.md       Print a note as HTML
    asap-notes search milk                List notes mentioning milk")]
struct Cli {
    /// Settings file (default: ~/.config/asap-notes/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a Markdown file (or stdin with "-") to HTML
    Render {
        #[arg(value_name = "FILE")]
        file: String,

        /// Wrap list items in <ul>/<ol>
        #[arg(long)]
        wrap_lists: bool,
    },
    /// Print a note from the notes folder
    Read {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Replace a note's content with stdin
    Write {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Show folders and notes, newest notes first
    Tree,
    /// List notes containing QUERY (case-insensitive)
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Create an empty note (.md is added when no extension is given)
    NewNote {
        name: String,

        /// Folder to create the note in
        #[arg(long, default_value = "")]
        folder: String,
    },
    /// Create a folder
    NewFolder {
        name: String,

        /// Folder to create the new folder in
        #[arg(long, default_value = "")]
        parent: String,
    },
    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
enum SettingsCommand {
    Show,
    Set {
        #[arg(long)]
        notes_folder: Option<String>,
        #[arg(long)]
        font_family: Option<String>,
        #[arg(long)]
        font_size: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = cli.config;
    match cli.command {
        // Rendering a file needs no notes folder
        Command::Render { file, wrap_lists } => render(&file, wrap_lists)?,
        Command::Read { path } => print!("{}", open_session(config)?.read_note(&path)?),
        Command::Write { path } => {
            let content = read_stdin()?;
            let path = open_session(config)?.save_note(&path, &content)?;
            log::info!("Saved {path}");
        }
        Command::Tree => print_tree(&open_session(config)?)?,
        Command::Search { query } => {
            for path in open_session(config)?.search(&query)? {
                println!("{path}");
            }
        }
        Command::NewNote { name, folder } => {
            println!("{}", open_session(config)?.create_note(&folder, &name)?)
        }
        Command::NewFolder { name, parent } => {
            println!("{}", open_session(config)?.create_folder(&parent, &name)?)
        }
        Command::Settings(SettingsCommand::Show) => {
            print_settings(open_session(config)?.settings())
        }
        Command::Settings(SettingsCommand::Set {
            notes_folder,
            font_family,
            font_size,
        }) => {
            let update = SettingsUpdate {
                notes_folder,
                font_family,
                font_size,
            };
            if update.is_empty() {
                anyhow::bail!("Nothing to change: pass --notes-folder, --font-family or --font-size");
            }
            let mut session = open_session(config)?;
            print_settings(session.update_settings(&update)?);
        }
    }

    Ok(())
}

fn open_session(config: Option<PathBuf>) -> Result<Session> {
    let config_path = config.unwrap_or_else(Settings::config_path);
    Session::open(&config_path)
        .with_context(|| format!("Failed to open settings at {}", config_path.display()))
}

fn render(file: &str, wrap_lists: bool) -> Result<()> {
    let content = if file == "-" {
        read_stdin()?
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?
    };

    let renderer = Renderer::with_options(RenderOptions {
        list_containers: wrap_lists,
    });
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", renderer.render(&content))?;
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    Ok(content)
}

fn print_tree(session: &Session) -> Result<()> {
    let tree = session.folder_tree()?;
    let now = SystemTime::now();

    for item in tree.items() {
        let indent = "  ".repeat(item.depth());
        match item {
            FolderItem::Folder { folder, .. } => println!("{indent}{}/", folder.name),
            FolderItem::Note { note, .. } => {
                println!("{indent}{}  ({})", note.name, age(now, note.modified))
            }
        }
    }
    Ok(())
}

/// Coarse "how long ago" label for a modification time.
fn age(now: SystemTime, modified: SystemTime) -> String {
    let secs = now
        .duration_since(modified)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    match secs {
        0..60 => "just now".to_string(),
        60..3_600 => format!("{}m ago", secs / 60),
        3_600..86_400 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

fn print_settings(settings: &Settings) {
    println!("notes_folder = {}", settings.notes_folder.display());
    println!("font_family  = {}", settings.font_family);
    println!("font_size    = {}", settings.font_size);
}
