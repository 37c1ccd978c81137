use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use manga_state::{Bookmark, BookmarkStore, Config, ProgressStore, RecentStore};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder, prelude::*};

type MangaStateResult<T> = anyhow::Result<T>;

/// Inspect and edit the reader's saved state
#[derive(Parser, Debug)]
#[command(name = "manga_state")]
#[command(version)]
struct Cli {
    /// Overrides MANGA_DATA_DIR
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-chapter reading progress
    #[command(subcommand)]
    Progress(ProgressCommand),
    /// Recently opened manga
    #[command(subcommand)]
    Recent(RecentCommand),
    /// One bookmark per manga
    #[command(subcommand)]
    Bookmark(BookmarkCommand),
}

#[derive(Subcommand, Debug)]
enum ProgressCommand {
    Save {
        manga_id: String,
        chapter_id: String,
        #[arg(allow_negative_numbers = true)]
        page_index: i32,
    },
    Get {
        manga_id: String,
        chapter_id: String,
        /// Print whether progress exists instead of the page
        #[arg(long)]
        check: bool,
    },
    Clear {
        manga_id: String,
    },
    ClearAll,
}

#[derive(Subcommand, Debug)]
enum RecentCommand {
    Add {
        manga_id: String,
        title: String,
    },
    List,
    Rename {
        manga_id: String,
        title: String,
    },
    Remove {
        manga_id: String,
    },
    Clear,
    Contains {
        manga_id: String,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkCommand {
    Add {
        manga_id: String,
        manga_title: String,
        chapter_id: String,
        chapter_title: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i32,
    },
    Remove {
        manga_id: String,
    },
    Show {
        manga_id: String,
    },
    List,
}

fn main() -> MangaStateResult<()> {
    // Respect RUST_LOG if set, default to info for our crate.
    let default_filter = format!("{}=info", env!("CARGO_PKG_NAME"));
    let env_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish()
        .with(ErrorLayer::default())
        .init();

    if Path::new(".env.local").exists() {
        dotenvy::from_filename(".env.local")?;
    } else if Path::new(".env").exists() {
        dotenvy::from_filename(".env")?;
    };

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    tracing::debug!(data_dir = %config.data_dir.display(), "configured state files");

    match cli.command {
        Command::Progress(cmd) => run_progress(ProgressStore::open(config.progress_path()), cmd),
        Command::Recent(cmd) => run_recent(RecentStore::open(config.recent_path()), cmd),
        Command::Bookmark(cmd) => run_bookmark(BookmarkStore::open(config.bookmarks_path()), cmd),
    }
}

fn run_progress(mut store: ProgressStore, cmd: ProgressCommand) -> MangaStateResult<()> {
    match cmd {
        ProgressCommand::Save {
            manga_id,
            chapter_id,
            page_index,
        } => store.save_progress(&manga_id, &chapter_id, page_index),
        ProgressCommand::Get {
            manga_id,
            chapter_id,
            check,
        } => {
            if check {
                println!("{}", store.has_progress(&manga_id, &chapter_id));
            } else {
                println!("{}", store.page_index(&manga_id, &chapter_id));
            }
        }
        ProgressCommand::Clear { manga_id } => store.clear_manga_progress(&manga_id),
        ProgressCommand::ClearAll => store.clear_all(),
    }
    Ok(())
}

fn run_recent(mut store: RecentStore, cmd: RecentCommand) -> MangaStateResult<()> {
    match cmd {
        RecentCommand::Add { manga_id, title } => store.add(&manga_id, &title),
        RecentCommand::List => println!("{}", serde_json::to_string_pretty(&store.all())?),
        RecentCommand::Rename { manga_id, title } => store.update_title(&manga_id, &title),
        RecentCommand::Remove { manga_id } => store.remove(&manga_id),
        RecentCommand::Clear => store.clear(),
        RecentCommand::Contains { manga_id } => println!("{}", store.contains(&manga_id)),
    }
    Ok(())
}

fn run_bookmark(mut store: BookmarkStore, cmd: BookmarkCommand) -> MangaStateResult<()> {
    match cmd {
        BookmarkCommand::Add {
            manga_id,
            manga_title,
            chapter_id,
            chapter_title,
            page,
        } => store.add(Bookmark::new(
            manga_id,
            manga_title,
            chapter_id,
            chapter_title,
            page,
        )),
        BookmarkCommand::Remove { manga_id } => store.remove(&manga_id),
        BookmarkCommand::Show { manga_id } => match store.find(&manga_id) {
            Some(bookmark) => println!("{}", serde_json::to_string_pretty(bookmark)?),
            None => anyhow::bail!("no bookmark for {manga_id}"),
        },
        BookmarkCommand::List => println!("{}", serde_json::to_string_pretty(&store.all())?),
    }
    Ok(())
}
