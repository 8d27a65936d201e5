use clap::{Parser, Subcommand};
use kumitate::prelude::*;

/// Inspect and edit endpoints stored in a workspace JSON file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workspace JSON file (`{"configs": [...], "endpoints": [...]}`)
    workspace: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the listing and advisory hints of one or all endpoints
    Check {
        /// Only check the endpoint with this name
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Print the variables in scope before an instruction
    Scope {
        #[arg(short, long)]
        endpoint: String,
        /// Instruction position; defaults to the end of the endpoint
        #[arg(short, long)]
        index: Option<usize>,
    },
    /// Rename a call's output and update the references that follow it
    Rename {
        #[arg(short, long)]
        endpoint: String,
        #[arg(short, long)]
        index: usize,
        /// The new output name; an empty name clears the binding
        #[arg(long)]
        to: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let workspace = Workspace::from_file(&cli.workspace).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load workspace '{}': {}", cli.workspace, e))
    });

    match cli.command {
        Command::Check { endpoint } => run_check(&workspace, endpoint.as_deref()),
        Command::Scope { endpoint, index } => run_scope(&workspace, &endpoint, index),
        Command::Rename {
            endpoint,
            index,
            to,
        } => run_rename(&cli.workspace, &workspace, &endpoint, index, to),
    }
}

fn run_check(workspace: &Workspace, only: Option<&str>) {
    let endpoints: Vec<&Endpoint> = match only {
        Some(name) => vec![find_endpoint(workspace, name)],
        None => workspace.endpoints.iter().collect(),
    };

    let mut total_hints = 0;
    for endpoint in endpoints {
        println!(
            "{}",
            EndpointFormatter::format_endpoint(endpoint, &workspace.catalog)
        );
        let hints = check(&endpoint.instructions, &workspace.catalog);
        if hints.is_empty() {
            println!("  -> No hints");
        }
        for hint in &hints {
            println!("  -> {}", hint);
        }
        total_hints += hints.len();
        println!();
    }
    println!("{} hint(s) total", total_hints);
}

fn run_scope(workspace: &Workspace, name: &str, index: Option<usize>) {
    let endpoint = find_endpoint(workspace, name);
    let index = index.unwrap_or(endpoint.instructions.len());
    let stack = stack_at(&endpoint.instructions, &workspace.catalog, index);
    println!(
        "Scope before #{}: {}",
        index,
        EndpointFormatter::format_stack(&stack)
    );
}

fn run_rename(path: &str, workspace: &Workspace, name: &str, index: usize, to: String) {
    let endpoint = find_endpoint(workspace, name).clone();
    let mut session = EndpointSession::new(endpoint, &workspace.catalog);

    match session.endpoint().instructions.get(index) {
        Some(Instruction::CallMethod(_)) => {}
        Some(Instruction::JsonReturn(_)) => {
            exit_with_error(&format!("Instruction #{} is a return, not a call", index))
        }
        None => exit_with_error(&format!("Endpoint '{}' has no instruction #{}", name, index)),
    }

    if !session.edit(index, Edit::SetOutputName(to)) {
        println!("Nothing to rename.");
        return;
    }

    let mut store = JsonFileStore::new(path);
    let echoed = store
        .save(session.endpoint().clone())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save workspace: {}", e)));
    session.mark_saved(echoed);

    println!(
        "{}",
        EndpointFormatter::format_endpoint(session.endpoint(), session.catalog())
    );
}

fn find_endpoint<'w>(workspace: &'w Workspace, name: &str) -> &'w Endpoint {
    workspace
        .require_endpoint(name)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
