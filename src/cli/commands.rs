use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mt", about = concat!("mytasks v", env!("CARGO_PKG_VERSION"), " - my tasks, in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory (default: $MYTASKS_DIR or ~/.local/share/mytasks)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// List tasks in order
    List(ListArgs),
    /// Change a task's title
    Edit(EditArgs),
    /// Mark a task done, or not done again
    Toggle(IdArg),
    /// Delete a task
    Rm(IdArg),
    /// Move a task to a new position (1-based)
    Mv(MvArgs),
    /// Delete every task
    Clear(ClearArgs),
    /// Show how many tasks are left
    Count,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only completed tasks
    #[arg(long, conflicts_with = "remaining")]
    pub completed: bool,
    /// Only tasks not yet completed
    #[arg(long)]
    pub remaining: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New title
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Current position (1-based)
    pub from: usize,
    /// New position (1-based, clamped to the end of the list)
    pub to: usize,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Don't ask, just clear
    #[arg(short, long)]
    pub yes: bool,
}
