use clap::Parser;
use config::Config;
use controller::Controller;
use dictionary::{Dictionary, Lookup};
use error::AppError;
use storage::{KeyValueStore, MemoryStore, SqliteStore};
use tracing_subscriber::EnvFilter;
use utilities::{input, Terminal};
use view::View;
use vocabulary::Vocabulary;

mod config;
mod controller;
mod error;
mod quiz;
mod storage;
mod utilities;
mod view;
mod vocabulary;

/// Look up English words, keep the ones you want to learn and quiz yourself on them.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// SQLite database holding the saved words (overrides WORDBOOK_DATABASE_URL)
    #[arg(long)]
    database: Option<String>,
    /// Keep saved words in memory only, nothing is written to disk
    #[arg(long, conflicts_with = "database")]
    in_memory: bool,
    /// Dictionary endpoint the word is appended to (overrides WORDBOOK_DICTIONARY_URL)
    #[arg(long)]
    dictionary_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(url) = args.dictionary_url {
        config.dictionary_url = url;
    }
    if let Some(database) = args.database {
        config.database_url = database;
    }

    let dict = Dictionary::with_endpoint(&config.dictionary_url, config.timeout)?;
    if args.in_memory {
        let vocabulary = Vocabulary::new(MemoryStore::default(), config.storage_key.clone());
        run(Controller::new(dict, vocabulary, &config)).await
    } else {
        let storage = SqliteStore::initialize(&config.database_url).await?;
        let vocabulary = Vocabulary::new(storage, config.storage_key.clone());
        run(Controller::new(dict, vocabulary, &config)).await
    }
}

async fn run<L: Lookup, S: KeyValueStore>(mut controller: Controller<L, S>) -> anyhow::Result<()> {
    println!("Type `help` to see what you can do.");
    while let Some(line) = input(">> ")? {
        let mut command_parts = line.split_ascii_whitespace();
        let Some(command) = command_parts.next() else {
            continue;
        };
        let argument = command_parts.collect::<Vec<&str>>().join(" ");
        let result = match command {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                break;
            }
            "define" | "find" | "search" => controller.search(&argument).await,
            "save" => controller.save_current().await,
            "remove" => controller.remove(&argument, &mut Terminal).await,
            "clear" => controller.clear(&mut Terminal).await,
            "vocab" | "list" => controller.toggle_vocabulary().await,
            "quiz" => {
                quiz(&mut controller).await?;
                continue;
            }
            "help" => {
                print_help();
                continue;
            }
            _ => {
                println!("Unknown command {command}.");
                continue;
            }
        };
        let changed = result.is_ok() && matches!(command, "save" | "remove" | "clear");
        show(result);
        if changed {
            match controller.visible_vocabulary().await {
                Ok(Some(view)) => println!("{view}"),
                Ok(None) => {}
                Err(error) => report(&error),
            }
        }
    }
    Ok(())
}

async fn quiz<L: Lookup, S: KeyValueStore>(controller: &mut Controller<L, S>) -> anyhow::Result<()> {
    match controller.start_quiz().await {
        Ok(view) => println!("{view}"),
        Err(error) => {
            report(&error);
            return Ok(());
        }
    }
    loop {
        let Some(answer) = input("Your answer (:end to stop): ")? else {
            break;
        };
        if is_end(&answer) {
            break;
        }
        show(controller.answer(&answer));

        let Some(next) = input("Press enter for the next question (:end to stop): ")? else {
            break;
        };
        if is_end(&next) {
            break;
        }
        match controller.next_question().await {
            Ok(view) => println!("{view}"),
            Err(error) => {
                report(&error);
                break;
            }
        }
    }
    show(controller.end_quiz());
    Ok(())
}

fn is_end(line: &str) -> bool {
    matches!(&line.trim().to_lowercase()[..], ":end" | ":e" | ":q" | ":quit")
}

fn show(result: Result<View, AppError>) {
    match result {
        Ok(view) => println!("{view}"),
        Err(error) => report(&error),
    }
}

fn report(error: &AppError) {
    if error.is_alert() {
        println!("[!] {error}");
    } else {
        println!("Error: {error}");
    }
}

fn print_help() {
    println!("define <word>   look a word up (also: find, search)");
    println!("save            save the word you just looked up");
    println!("remove <word>   remove a saved word");
    println!("clear           remove every saved word");
    println!("vocab           show or hide your saved words (also: list)");
    println!("quiz            guess saved words from their definitions");
    println!("exit            leave (also: quit, q)");
}
