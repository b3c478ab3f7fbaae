//! Command-line front end for the diary store.
//!
//! # Responsibility
//! - Stand in for the list/detail screens: list, create, show, edit, delete.
//! - Resolve configuration, open the database once and inject it downward.

mod config;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use diary_core::db::open_db;
use diary_core::{
    default_log_level, flush_logging, init_logging, DiaryEntry, DiaryId, DiaryListView,
    DiaryStore, SqliteDiaryRepository,
};
use log::warn;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "diary", version, about = "Keep a simple diary")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "DIARY_DB_PATH", global = true)]
    db: Option<PathBuf>,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, env = "DIARY_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "DIARY_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List entries, newest first.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create and save a new entry.
    New {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
        /// Epoch milliseconds, may be negative; defaults to now.
        #[arg(long, allow_negative_numbers = true)]
        date: Option<i64>,
    },
    /// Print one entry.
    Show { id: DiaryId },
    /// Change fields of an existing entry.
    Edit {
        id: DiaryId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        date: Option<i64>,
    },
    /// Delete an entry permanently.
    Delete { id: DiaryId },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = cli.log_dir.as_deref() {
        let dir = config::absolute_log_dir(dir)?;
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &dir.to_string_lossy()).map_err(|err| anyhow!(err))?;
    }

    let db_path = config::resolve_db_path(cli.db);
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open diary database `{}`", db_path.display()))?;
    let store = DiaryStore::new(SqliteDiaryRepository::try_new(&conn)?);

    let result = run(&store, cli.command);
    flush_logging();
    result
}

fn run(store: &DiaryStore<SqliteDiaryRepository<'_>>, command: Command) -> Result<()> {
    match command {
        Command::List { json } => {
            let mut view = DiaryListView::new();
            view.refresh(store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(view.items())?);
                return Ok(());
            }
            if view.is_empty() {
                println!("No diary entries.");
            }
            for row in view.rows() {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.id,
                    row.date,
                    row.title,
                    row.preview.unwrap_or_default()
                );
            }
        }
        Command::New { title, body, date } => {
            let mut entry = store.create().titled(title).with_body(body);
            if let Some(date) = date {
                entry.date = date;
            }
            store.save(&entry)?;
            println!("{}", entry.id);
        }
        Command::Show { id } => {
            let entry = load(store, id)?;
            print_entry(&entry);
        }
        Command::Edit {
            id,
            title,
            body,
            date,
        } => {
            let mut entry = load(store, id)?;
            if title.is_none() && body.is_none() && date.is_none() {
                warn!("event=diary_edit module=cli status=noop id={id}");
            }
            if let Some(title) = title {
                entry.title = title;
            }
            if let Some(body) = body {
                entry.body = body;
            }
            if let Some(date) = date {
                entry.date = date;
            }
            store.update(&entry)?;
            print_entry(&entry);
        }
        Command::Delete { id } => {
            store.delete(id)?;
            println!("Deleted {id}");
        }
    }

    Ok(())
}

fn load(store: &DiaryStore<SqliteDiaryRepository<'_>>, id: DiaryId) -> Result<DiaryEntry> {
    store
        .get(id)?
        .ok_or_else(|| anyhow!("diary entry not found: {id}"))
}

fn print_entry(entry: &DiaryEntry) {
    println!("id: {}", entry.id);
    println!("date: {}", entry.date);
    println!("title: {}", entry.title);
    println!();
    println!("{}", entry.body);
}
