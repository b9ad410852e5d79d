//! tareas command-line client.
//!
//! Thin consumer of `tareas-core`: every subcommand issues repository calls
//! and re-fetches the full list afterwards, the same flow the original UI
//! used (no local cache, no incremental patching).

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tareas_core::config::StoreConfig;
use tareas_core::domain::{NewTask, Priority, Task, TaskId};
use tareas_core::impls::FirebaseTaskStore;
use tareas_core::ports::{TaskStore, ToggleOutcome};
use tareas_core::stats::{format_cost, format_minutes, summarize};

#[derive(Parser, Debug)]
#[command(name = "tareas", about = "Task manager over a Firebase Realtime Database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Create a task.
    Add {
        title: String,
        #[arg(long, default_value = "general")]
        category: String,
        /// 1 = low, 2 = medium, 3 = high.
        #[arg(long, default_value_t = 2)]
        priority: u8,
        /// Estimated cost in currency units.
        #[arg(long)]
        cost: Option<f64>,
        /// Estimated time in minutes.
        #[arg(long)]
        time: Option<u32>,
    },
    /// List tasks, newest first.
    List {
        /// Only this priority level.
        #[arg(long)]
        priority: Option<u8>,
        /// Show archived tasks instead of active ones.
        #[arg(long)]
        archived: bool,
    },
    /// Flip a task's completed flag.
    Toggle { id: String },
    /// Archive a task.
    Archive { id: String },
    /// Bring a task back from the archive.
    Unarchive { id: String },
    /// Summary statistics, overall and per priority.
    Stats,
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let priority = task
        .priority_bucket()
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| format!("p{}", task.priority));
    let mut extras = Vec::new();
    if let Some(cost) = task.cost {
        extras.push(format_cost(cost));
    }
    if let Some(time) = task.time {
        extras.push(format_minutes(u64::from(time)));
    }
    let extras = if extras.is_empty() {
        String::new()
    } else {
        format!("  ({})", extras.join(", "))
    };
    println!(
        "[{mark}] {id}  {priority:<5} {title} [{category}]{extras}",
        id = task.id,
        title = task.title,
        category = task.category,
    );
}

fn print_list(tasks: &[Task], priority: Option<u8>, archived: bool) {
    // Filtering happens client-side over the full fetched list.
    let visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.archived == archived)
        .filter(|t| priority.is_none_or(|p| t.priority == p))
        .collect();

    if visible.is_empty() {
        println!("no tasks");
        return;
    }
    for task in visible {
        print_task(task);
    }
}

fn print_stats(tasks: &[Task]) {
    let summary = summarize(tasks);
    let overall = summary.overall;

    println!(
        "{}/{} completed ({:.0}%)",
        overall.completed,
        overall.total,
        overall.completion_ratio() * 100.0
    );
    println!("total cost: {}", format_cost(overall.total_cost));
    println!("total time: {}", format_minutes(overall.total_minutes));

    for priority in Priority::ALL {
        let stats = summary.for_priority(priority);
        println!(
            "  {:<6} {}/{} completed, {}, {}",
            priority.label(),
            stats.completed,
            stats.total,
            format_cost(stats.total_cost),
            format_minutes(stats.total_minutes),
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let config = StoreConfig::from_env()
        .context("store connection parameters (set TAREAS_DATABASE_URL)")?;
    let store = FirebaseTaskStore::new(&config);

    match args.command {
        Commands::Add {
            title,
            category,
            priority,
            cost,
            time,
        } => {
            let mut input = NewTask::new(title, category, priority);
            if let Some(cost) = cost {
                input = input.with_cost(cost);
            }
            if let Some(time) = time {
                input = input.with_time(time);
            }
            let task = store.create(input).await?;
            println!("created {}", task.id);
            print_list(&store.list_all().await?, None, false);
        }
        Commands::List { priority, archived } => {
            print_list(&store.list_all().await?, priority, archived);
        }
        Commands::Toggle { id } => {
            let id = TaskId::from(id);
            match store.toggle_completed(&id).await? {
                ToggleOutcome::Toggled { completed } => {
                    println!("{id}: completed = {completed}");
                }
                ToggleOutcome::NotFound => {
                    println!("{id}: not found, nothing changed");
                }
            }
            print_list(&store.list_all().await?, None, false);
        }
        Commands::Archive { id } => {
            let id = TaskId::from(id);
            store.set_archived(&id, true).await?;
            println!("archived {id}");
            print_list(&store.list_all().await?, None, false);
        }
        Commands::Unarchive { id } => {
            let id = TaskId::from(id);
            store.set_archived(&id, false).await?;
            println!("restored {id}");
            print_list(&store.list_all().await?, None, false);
        }
        Commands::Stats => {
            print_stats(&store.list_all().await?);
        }
    }

    Ok(())
}
