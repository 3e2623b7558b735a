use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use alibi::banner::{BannerInfo, print_banner, print_farewell};
use alibi::category::Category;
use alibi::commands::{CommandRegistry, CommandResult};
use alibi::config;
use alibi::consts::{DEFAULT_DELAY_MS, default_db_path};
use alibi::logging;
use alibi::render;
use alibi::session::{Request, Session};
use alibi::spinner;
use alibi::store::ExcuseStore;
use alibi::store::sqlite::{IN_MEMORY, SqliteKv};

#[derive(Parser)]
#[command(name = "alibi", version, about = "The inventive apology engine.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database for saved excuses (use :memory: for ephemeral)
    #[arg(short, long, env = "ALIBI_DB")]
    db: Option<String>,

    /// Cosmetic pause before showing excuses, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Generate excuses and exit
    Generate {
        /// What you need an excuse for
        #[arg(short, long)]
        situation: String,

        /// Your actual reason
        #[arg(short, long)]
        reason: String,

        /// How many excuses (defaults to the saved /count setting)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Use this category's templates instead of matching keywords
        #[arg(short, long)]
        category: Option<Category>,

        /// Save every generated excuse
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// List saved excuses, newest first
    Saved,
    /// Delete a saved excuse by id
    Delete {
        /// Id as shown by `alibi saved`
        id: String,
    },
}

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let db = match cli.db {
        Some(db) => db,
        None => default_db_path()?.to_string_lossy().into_owned(),
    };
    let kv = SqliteKv::open(&db).with_context(|| format!("cannot open {db}"))?;
    let store = ExcuseStore::new(Box::new(kv));
    let delay = Duration::from_millis(cli.delay_ms);

    match cli.command {
        Some(Command::Generate {
            situation,
            reason,
            count,
            category,
            save,
        }) => {
            let mut session = Session::new(store);
            if let Some(count) = count {
                session.count = config::check_count(count)?;
            }
            session.category = category;
            let request = Request::new(&situation, &reason)?;
            craft(&mut session, request, delay).await;
            if save {
                let saved = session.save_batch()?;
                println!("✓ {saved} excuses saved to your collection");
            }
            Ok(())
        }
        Some(Command::Saved) => {
            print!("{}", render::saved(&store.list()));
            Ok(())
        }
        Some(Command::Delete { id }) => {
            if !store.contains(&id) {
                anyhow::bail!("no saved excuse with id {id}");
            }
            store.delete(&id)?;
            println!("✓ excuse deleted from your collection");
            Ok(())
        }
        None => repl(Session::new(store), &db, delay).await,
    }
}

async fn repl(mut session: Session, db: &str, delay: Duration) -> Result<()> {
    let store_label = if db == IN_MEMORY { "ephemeral" } else { db };
    print_banner(&BannerInfo {
        store: store_label,
        saved: session.store.list().len(),
        count: session.count,
    });

    let registry = CommandRegistry::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(line) = prompt(&mut lines, "\nsituation> ").await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let request = match registry.dispatch(&line, &mut session) {
            CommandResult::Handled => continue,
            CommandResult::Quit => break,
            CommandResult::Generate(request) => request,
            CommandResult::NotACommand => {
                let Some(reason) = prompt(&mut lines, "reason> ").await? else {
                    break;
                };
                match Request::new(&line, &reason) {
                    Ok(request) => request,
                    Err(e) => {
                        eprintln!("  ✗ {e}");
                        continue;
                    }
                }
            }
        };

        // Ctrl+C during the pause skips this batch, not the REPL
        tokio::select! {
            _ = craft(&mut session, request, delay) => {}
            _ = tokio::signal::ctrl_c() => println!("\n\ninterrupted"),
        }
    }

    print_farewell(session.store.list().len());
    Ok(())
}

/// Read one line. `None` on EOF (Ctrl+D) or Ctrl+C.
async fn prompt(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    tokio::select! {
        result = lines.next_line() => match result {
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => {
                println!();
                Ok(None)
            }
            Err(e) => {
                eprintln!("input error: {e}");
                Ok(None)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!();
            Ok(None)
        }
    }
}

/// Pause, generate a batch and print it.
async fn craft(session: &mut Session, request: Request, delay: Duration) {
    spinner::pause("Crafting your excuses...", delay).await;
    session.generate(request);
    let saved_ids = session.store.saved_ids();
    println!("\n  Your creative excuses are ready! /save <n> a favorite or /more for another batch.\n");
    print!("{}", render::batch(&session.batch, &saved_ids));
}
