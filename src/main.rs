//! Bookshelf - command line front-end for the books and users REST API

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use bookshelf_client::{
    client::{ApiClient, BooksApi, HttpTransport, UsersApi},
    config::{AppConfig, LoggingConfig},
    controllers::{BookController, Outcome, UserController},
    ui::{book_ids, user_ids, ConsolePrompter, Document},
};

/// bookshelf - manage books and users through the REST API
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend root URL, e.g. http://localhost:8080
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book management commands
    Books {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// User management commands
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum BookCommands {
    /// List all books
    List,
    /// Add a book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
    /// Change the title and author of a book
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
    /// Show the current title and author of a book
    Show {
        #[arg(long)]
        id: String,
    },
    /// Delete the book with the highest ID
    DeleteHighest,
    /// List books whose title contains the query
    Search { query: String },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List all users
    List,
    /// Add a user
    Add {
        #[arg(long)]
        name: String,
    },
    /// Rename a user
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a user
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let _guard = init_tracing(&config.logging);

    tracing::debug!(
        "Bookshelf client v{} using {}",
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    let transport = Arc::new(HttpTransport::new(&config.api)?);
    let client = ApiClient::new(transport, &config.api.base_url);
    let prompter = Arc::new(ConsolePrompter::new(cli.yes));
    let mut doc = Document::new();

    let outcome = match cli.command {
        Commands::Books { command } => {
            let controller = BookController::new(BooksApi::new(client), prompter);
            let outcome = run_books(command, &controller, &mut doc).await;
            print_table(&doc, book_ids::TABLE_BODY);
            outcome
        }
        Commands::Users { command } => {
            let controller = UserController::new(UsersApi::new(client), prompter);
            let outcome = run_users(command, &controller, &mut doc).await;
            print_table(&doc, user_ids::TABLE_BODY);
            outcome
        }
    };

    if outcome.is_completed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

async fn run_books(
    command: BookCommands,
    controller: &BookController,
    doc: &mut Document,
) -> Outcome {
    match command {
        BookCommands::List => controller.load(doc).await,
        BookCommands::Add { title, author } => {
            doc.set_value(book_ids::TITLE, title);
            doc.set_value(book_ids::AUTHOR, author);
            controller.create(doc).await
        }
        BookCommands::Update { id, title, author } => {
            doc.set_value(book_ids::UPDATE_ID, id);
            doc.set_value(book_ids::UPDATE_TITLE, title);
            doc.set_value(book_ids::UPDATE_AUTHOR, author);
            controller.update(doc).await
        }
        BookCommands::Show { id } => {
            doc.set_value(book_ids::UPDATE_ID, id);
            let outcome = controller.prefill_update(doc).await;
            if outcome.is_completed() {
                println!(
                    "{}\t{}",
                    doc.value(book_ids::UPDATE_TITLE),
                    doc.value(book_ids::UPDATE_AUTHOR)
                );
            }
            outcome
        }
        BookCommands::DeleteHighest => controller.delete_highest(doc).await,
        BookCommands::Search { query } => {
            doc.set_value(book_ids::SEARCH, query);
            controller.search(doc).await
        }
    }
}

async fn run_users(
    command: UserCommands,
    controller: &UserController,
    doc: &mut Document,
) -> Outcome {
    match command {
        UserCommands::List => controller.load(doc).await,
        UserCommands::Add { name } => {
            doc.set_value(user_ids::NAME, name);
            controller.create(doc).await
        }
        UserCommands::Update { id, name } => {
            doc.set_value(user_ids::UPDATE_ID, id);
            doc.set_value(user_ids::UPDATE_NAME, name);
            controller.update(doc).await
        }
        UserCommands::Delete { id } => {
            doc.set_value(user_ids::DELETE_ID, id);
            controller.delete(doc).await
        }
    }
}

fn print_table(doc: &Document, table_id: &str) {
    let html = doc.inner_html(table_id);
    if !html.is_empty() {
        println!("{}", html.trim());
    }
}

/// Initialize tracing; the returned guard flushes the log file on drop
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookshelf_client={0},bookshelf={0}", logging.level).into()
    });

    // Logs go to stderr so stdout only carries page output
    let console_layer = match logging.format.as_str() {
        "json" => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        _ => fmt::layer().with_writer(std::io::stderr).boxed(),
    };

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "bookshelf.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
