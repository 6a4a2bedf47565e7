// src/main.rs
//
// mangashelf CLI
//
//   mangashelf list
//   mangashelf export <manga_id>
//   mangashelf import <manga_id> <file>

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Local;

use mangashelf::application::AppState;
use mangashelf::backup::{read_backup_file, to_json};
use mangashelf::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use mangashelf::presentation::list_items::manga_rows;
use mangashelf::presentation::DisplayPreferences;

const USAGE: &str = "usage: mangashelf <list | export <manga_id> | import <manga_id> <file>>";

enum Command {
    List,
    Export { manga_id: i64 },
    Import { manga_id: i64, file: PathBuf },
}

fn parse_manga_id(arg: &str) -> Result<i64> {
    arg.parse()
        .with_context(|| format!("invalid manga id: {}", arg))
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [cmd] if cmd == "list" => Ok(Command::List),
        [cmd, manga_id] if cmd == "export" => Ok(Command::Export {
            manga_id: parse_manga_id(manga_id)?,
        }),
        [cmd, manga_id, file] if cmd == "import" => Ok(Command::Import {
            manga_id: parse_manga_id(manga_id)?,
            file: PathBuf::from(file),
        }),
        _ => bail!(USAGE),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // `init` also bridges `log` records from the library.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool().context("opening the library database")?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;

        let stats = get_database_stats(&conn)?;
        log::debug!(
            "Library: {} mangas, {} chapters, {} bookmarks ({} bytes)",
            stats.manga_count,
            stats.chapter_count,
            stats.bookmark_count,
            stats.size_bytes
        );
    }

    // 2. WIRING
    let state = AppState::new(pool);

    // 3. COMMAND
    match command {
        Command::List => {
            let model = state.bookmarks_top_model();
            model.load().await;

            let snapshot = model.state();
            let rows = manga_rows(
                &snapshot.manga_with_bookmarks,
                &DisplayPreferences::default(),
                &Local::now(),
            );
            if rows.is_empty() {
                println!("No bookmarks yet");
            }
            for row in rows {
                match row.last_updated_label {
                    Some(updated) => println!(
                        "{:>6}  {}  ({}, {})",
                        row.manga_id, row.title, row.bookmark_count_label, updated
                    ),
                    None => println!(
                        "{:>6}  {}  ({})",
                        row.manga_id, row.title, row.bookmark_count_label
                    ),
                }
            }
        }
        Command::Export { manga_id } => {
            let backup = state.bookmark_backup.clone();
            let entries = tokio::task::spawn_blocking(move || backup.backup(manga_id)).await??;
            println!("{}", to_json(&entries)?);
        }
        Command::Import { manga_id, file } => {
            let entries = read_backup_file(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let backup = state.bookmark_backup.clone();
            let report =
                tokio::task::spawn_blocking(move || backup.restore(manga_id, &entries)).await??;
            println!(
                "Restored {} bookmarks ({} skipped)",
                report.applied, report.skipped
            );
        }
    }

    Ok(())
}
