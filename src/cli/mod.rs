pub mod api_client;
mod commands;
pub mod error;
mod utils;

use clap::{Parser, Subcommand};

use crate::cli::commands::todo;

#[derive(Parser)]
#[command(name = "todos")]
#[command(author, version, about = "Todo list CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: TODOS_API_URL env or http://localhost:8000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List todos
    List {
        /// Filter by completion
        #[arg(long, default_value = "all", value_parser = ["all", "completed", "incomplete"])]
        status: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a single todo
    Get {
        /// Todo ID
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a todo
    Add {
        /// Todo title
        title: String,
        /// Create the todo already completed
        #[arg(long)]
        completed: bool,
    },
    /// Replace a todo's title and completion state
    Update {
        /// Todo ID
        id: i64,
        /// New title
        #[arg(long)]
        title: String,
        /// New completion state (true or false)
        #[arg(long, required = true, action = clap::ArgAction::Set)]
        completed: bool,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: i64,
    },
    /// Remove every completed todo
    ClearCompleted,
    /// Remove every todo
    ClearAll,
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);

    let output = match cli.command {
        Some(Commands::List { status, format }) => {
            todo::list_todos(&api_client, Some(&status), &format).await?
        }
        Some(Commands::Get { id, format }) => todo::get_todo(&api_client, id, &format).await?,
        Some(Commands::Add { title, completed }) => {
            todo::create_todo(&api_client, &title, completed).await?
        }
        Some(Commands::Update {
            id,
            title,
            completed,
        }) => todo::update_todo(&api_client, id, &title, completed).await?,
        Some(Commands::Delete { id }) => todo::delete_todo(&api_client, id).await?,
        Some(Commands::ClearCompleted) => todo::clear_completed(&api_client).await?,
        Some(Commands::ClearAll) => todo::clear_all(&api_client).await?,
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["todos", "--help"]);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
