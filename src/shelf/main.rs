use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::{CmdMessage, CmdResult, ConfigAction, MessageLevel, ShelfApi, ShelfPaths};
use shelf::error::{Result, ShelfError};
use shelf::model::Record;
use shelf::store::counter::FileCounter;
use shelf::store::fs::FileBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "SHELF_HOME";
const LOG_ENV: &str = "SHELF_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if e.is_recoverable() {
            // Bad input or an unknown id: the operation was abandoned, nothing was written.
            eprintln!("{}", e.to_string().red());
            return;
        }
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shelf=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = ShelfPaths::new(resolve_data_dir(&cli)?);
    tracing::debug!(data_dir = %paths.data_dir.display(), "resolved data directory");

    match cli.command.unwrap_or(Commands::List { short: false }) {
        // Config stays reachable even when the current config.json is unusable.
        Commands::Config { key, value } => handle_config(&paths, key, value),
        Commands::Add {
            title,
            author,
            year,
        } => print_result(&open(paths)?.add_book(&title, &author, &year)?, false),
        Commands::Remove { id } => print_result(&open(paths)?.remove_book(&id)?, false),
        Commands::Search { query } => print_result(&open(paths)?.search_books(&query)?, false),
        Commands::Status { id, status } => {
            print_result(&open(paths)?.change_status(&id, &status)?, false)
        }
        Commands::List { short } => print_result(&open(paths)?.list_books()?, short),
    }
}

fn open(paths: ShelfPaths) -> Result<ShelfApi<FileBackend, FileCounter>> {
    ShelfApi::open(paths)
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if cli.global {
        let dirs = ProjectDirs::from("com", "shelf", "shelf").ok_or_else(|| {
            ShelfError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn handle_config(paths: &ShelfPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ShelfApi::configure(paths, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in shelf::config::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult, short: bool) -> Result<()> {
    if let Some(heading) = &result.heading {
        println!("{}", heading.bold());
    }
    if short {
        print_rows(&result.listed_records);
    } else {
        print_records(&result.listed_records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record);
    }
}

const LINE_WIDTH: usize = 80;
const ID_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 14;

fn print_rows(records: &[Record]) {
    for record in records {
        let id = format!("{:>width$}  ", record.id(), width = ID_WIDTH - 2);
        let available = LINE_WIDTH.saturating_sub(ID_WIDTH + STATUS_WIDTH);

        let text = format!("{} / {} ({})", record.title(), record.author(), record.year());
        let text = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text.width());

        let status = truncate_to_width(record.status().label(), STATUS_WIDTH);
        let status_pad = STATUS_WIDTH.saturating_sub(status.width());

        println!(
            "{}{}{}{}{}",
            id.yellow(),
            text,
            " ".repeat(padding),
            " ".repeat(status_pad),
            status.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
