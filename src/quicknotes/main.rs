use chrono::Utc;
use clap::Parser;
use colored::*;
use quicknotes::config::{default_data_dir, QuickNotesConfig};
use quicknotes::editor::EditorSession;
use quicknotes::error::{NotesError, Result};
use quicknotes::store::fs_backend::FsBackend;
use quicknotes::store::NotesStore;
use quicknotes::view::sidebar_rows;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod args;
mod render;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    store: NotesStore<FsBackend>,
    config: QuickNotesConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New { title, content }) => handle_new(&mut ctx, title, content),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Edit { id, title, content }) => handle_edit(&mut ctx, &id, title, content),
        Some(Commands::Select { id }) => handle_select(&mut ctx, &id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let config = QuickNotesConfig::load_for(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), ?config, "configuration resolved");

    let mut store = NotesStore::open(FsBackend::new(&data_dir), config.storage_keys());
    store.resolve_initial_selection();

    Ok(AppContext {
        store,
        config,
        data_dir,
    })
}

fn handle_new(ctx: &mut AppContext, title: Option<String>, content: Option<String>) -> Result<()> {
    let note = ctx.store.create();
    ctx.store.select(note.id.clone());

    if title.is_some() || content.is_some() {
        let mut session = EditorSession::open(&note, ctx.config.debounce());
        let now = Instant::now();
        if let Some(title) = title {
            session.set_title(title, now);
        }
        if let Some(content) = content {
            session.set_content(content, now);
        }
        session.close(&mut ctx.store);
    }

    println!("{} {}", "Note created:".green(), note.id);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let query = search.unwrap_or_default();
    let rows = sidebar_rows(ctx.store.notes(), &query, ctx.store.selected_id());
    print!("{}", render::render_rows(&rows, Utc::now()));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: Option<String>) -> Result<()> {
    let note = match id {
        Some(input) => {
            let id = resolve_id(&ctx.store, &input)?;
            ctx.store.get(&id)
        }
        None => ctx.store.selected_note(),
    };

    match note {
        Some(note) => {
            print!("{}", render::render_note(note, Utc::now()));
            Ok(())
        }
        None => {
            println!("{}", "No note selected. Create one with `quicknotes new`.".dimmed());
            Ok(())
        }
    }
}

fn handle_edit(
    ctx: &mut AppContext,
    input: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        return Err(NotesError::Cli(
            "Nothing to change: pass --title and/or --content".into(),
        ));
    }

    let id = resolve_id(&ctx.store, input)?;
    let note = ctx
        .store
        .get(&id)
        .cloned()
        .ok_or_else(|| NotesError::NoteNotFound(id.clone()))?;

    let mut session = EditorSession::open(&note, ctx.config.debounce());
    let now = Instant::now();
    if let Some(title) = title {
        session.set_title(title, now);
    }
    if let Some(content) = content {
        session.set_content(content, now);
    }
    session.close(&mut ctx.store);
    ctx.store.select(id.clone());

    println!("{} {}", "Note updated:".green(), id);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, input: &str) -> Result<()> {
    let id = resolve_id(&ctx.store, input)?;
    ctx.store.select(id.clone());
    println!("{} {}", "Selected:".green(), id);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, input: &str, yes: bool) -> Result<()> {
    let id = resolve_id(&ctx.store, input)?;

    if !yes && !confirm("Delete this note? This cannot be undone.")? {
        println!("{}", "Deletion cancelled.".yellow());
        return Ok(());
    }

    ctx.store.delete(&id);
    println!("{} {}", "Note deleted:".green(), id);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    println!("data_dir = {}", ctx.data_dir.display());
    println!("storage_key = {}", ctx.config.storage_key);
    println!("selected_key = {}", ctx.config.selected_key);
    println!("debounce_ms = {}", ctx.config.debounce_ms);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(NotesError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(NotesError::Io)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Accepts a full id or a prefix that matches exactly one note.
fn resolve_id(store: &NotesStore<FsBackend>, input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(NotesError::NoteNotFound(input.to_string()));
    }
    if store.contains(input) {
        return Ok(input.to_string());
    }

    let matches: Vec<&str> = store
        .notes()
        .iter()
        .filter(|n| n.id.starts_with(input))
        .map(|n| n.id.as_str())
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Err(NotesError::NoteNotFound(input.to_string())),
        _ => Err(NotesError::Cli(format!(
            "Ambiguous id prefix {:?} matches {} notes",
            input,
            matches.len()
        ))),
    }
}
