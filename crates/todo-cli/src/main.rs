//! todo-fn: invoke a task function locally with a raw JSON event.
//!
//! Stands in for the serverless runtime: it wires a store to the functions,
//! feeds one event in and prints what the runtime would return.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

use todo_core::config::{ENV_FUNCTION, ENV_LOG_FORMAT, ENV_STORE, LogFormat, StoreKind};
use todo_core::impls::{InMemoryTaskStore, MockStore};
use todo_core::{App, InvocationResponse, logging};

#[derive(Parser)]
#[command(name = "todo-fn")]
#[command(about = "Invoke todo functions with a raw JSON event", long_about = None)]
struct Cli {
    /// Task store behind the functions (mock, memory)
    #[arg(long, global = true, env = ENV_STORE, default_value = "mock")]
    store: StoreKind,

    /// Log output format (pretty, json)
    #[arg(long, global = true, env = ENV_LOG_FORMAT, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke a function; success on stdout with exit 0, failure payload with exit 1
    Invoke {
        /// Function name
        #[arg(env = ENV_FUNCTION)]
        function: Option<String>,

        /// Event file; reads stdin when omitted
        #[arg(long, short)]
        event: Option<PathBuf>,
    },
    /// List registered functions
    List,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let store = cli.store;
    let app = match store {
        StoreKind::Mock => App::with_store(MockStore::new())?,
        StoreKind::Memory => App::with_store(InMemoryTaskStore::new())?,
    };
    tracing::debug!(%store, "functions wired");

    match cli.command {
        Commands::List => {
            for name in app.registry().names() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Invoke { function, event } => {
            let Some(function) = function else {
                bail!("no function given (argument or TODO_FUNCTION)");
            };
            let raw = read_event(event.as_ref()).await?;

            let response = app.invoke(&function, &raw).await?;
            println!("{}", response.to_json()?);

            Ok(match response {
                InvocationResponse::Success(_) => ExitCode::SUCCESS,
                InvocationResponse::Failure(_) => ExitCode::FAILURE,
            })
        }
    }
}

async fn read_event(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("reading event file {}", path.display())),
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("reading event from stdin")?;
            Ok(buf)
        }
    }
}
