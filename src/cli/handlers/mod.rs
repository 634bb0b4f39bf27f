use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::storage::FileStore;
use crate::io::{config_io, data_dir};
use crate::model::task::{Task, TaskId, clean_title};
use crate::ops::task_store::TaskStore;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, json: bool, data_dir_flag: Option<&str>) -> CmdResult {
    crate::logging::init_stderr();

    let data_dir = data_dir::resolve(data_dir_flag);
    let config = config_io::read_config(&data_dir)?;
    let mut store = TaskStore::open(&data_dir, &config);
    tracing::debug!(data_dir = %data_dir.display(), "opened task store");

    match command {
        // Read commands
        Commands::List(args) => cmd_list(&store, args, json),
        Commands::Count => cmd_count(&store, json),

        // Write commands
        Commands::Add(args) => cmd_add(&mut store, args, json),
        Commands::Edit(args) => cmd_edit(&mut store, args),
        Commands::Toggle(args) => cmd_toggle(&mut store, args),
        Commands::Rm(args) => cmd_rm(&mut store, args),
        Commands::Mv(args) => cmd_mv(&mut store, args),
        Commands::Clear(args) => cmd_clear(&mut store, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_id(raw: &str) -> Result<TaskId, Box<dyn std::error::Error>> {
    raw.parse::<TaskId>()
        .map_err(|_| format!("invalid task id '{}'", raw).into())
}

/// Join title words and reject blank titles
fn title_from_words(words: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    clean_title(&words.join(" ")).ok_or_else(|| "task title cannot be empty".into())
}

fn not_found(id: TaskId) {
    eprintln!("no task with id {}", id);
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore<FileStore>, args: ListArgs, json: bool) -> CmdResult {
    let shown: Vec<(usize, &Task)> = store
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, t)| (i + 1, t))
        .filter(|(_, t)| {
            if args.completed {
                t.completed
            } else if args.remaining {
                !t.completed
            } else {
                true
            }
        })
        .collect();

    if json {
        let out: Vec<TaskJson> = shown
            .iter()
            .map(|(pos, task)| task_to_json(*pos, task))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No tasks");
    } else {
        for line in format_task_list(&shown) {
            println!("{}", line);
        }
    }
    println!("{}", format_remaining(store.remaining_count()));
    Ok(())
}

fn cmd_count(store: &TaskStore<FileStore>, json: bool) -> CmdResult {
    if json {
        let out = CountJson {
            remaining: store.remaining_count(),
            completed: store.completed_tasks().len(),
            total: store.len(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_remaining(store.remaining_count()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut TaskStore<FileStore>, args: AddArgs, json: bool) -> CmdResult {
    let title = title_from_words(&args.title)?;
    let id = store.add(title)?;
    if json {
        println!("{}", serde_json::to_string(&AddedJson { id: id.0 })?);
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_edit(store: &mut TaskStore<FileStore>, args: EditArgs) -> CmdResult {
    let id = parse_id(&args.id)?;
    let title = title_from_words(&args.title)?;
    if !store.edit(id, &title)? {
        not_found(id);
    }
    Ok(())
}

fn cmd_toggle(store: &mut TaskStore<FileStore>, args: IdArg) -> CmdResult {
    let id = parse_id(&args.id)?;
    if !store.toggle_completed(id)? {
        not_found(id);
    } else if let Some(task) = store.get(id) {
        println!("{} {}", task.checkbox(), task.title);
    }
    Ok(())
}

fn cmd_rm(store: &mut TaskStore<FileStore>, args: IdArg) -> CmdResult {
    let id = parse_id(&args.id)?;
    if !store.delete(id)? {
        not_found(id);
    }
    Ok(())
}

fn cmd_mv(store: &mut TaskStore<FileStore>, args: MvArgs) -> CmdResult {
    if args.from == 0 || args.to == 0 {
        return Err("positions start at 1".into());
    }
    if !store.reorder(args.from - 1, args.to - 1)? {
        eprintln!("no task at position {}", args.from);
    }
    Ok(())
}

fn cmd_clear(store: &mut TaskStore<FileStore>, args: ClearArgs) -> CmdResult {
    if !args.yes && !store.is_empty() {
        return Err(format!(
            "refusing to delete {} task(s) without --yes",
            store.len()
        )
        .into());
    }
    store.clear()?;
    Ok(())
}
