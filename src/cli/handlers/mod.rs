use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::data_dir::resolve_data_dir;
use crate::io::recovery::{count_entries, read_recovery_log, recovery_log_path};
use crate::io::store::FileStore;
use crate::session::Session;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let dir = resolve_data_dir(cli.dir.as_deref())
        .map_err(|e| format!("cannot resolve data directory: {}", e))?;

    match cli.command {
        None => Err("no command given (run `tick` without arguments for the TUI)".into()),
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&dir, args, json),
            Commands::Add(args) => cmd_add(&dir, args, json),
            Commands::Toggle(args) => mutate(&dir, |s| s.toggle(args.id)),
            Commands::Rm(args) => mutate(&dir, |s| s.delete(args.id)),
            Commands::Mv(args) => mutate(&dir, |s| s.reorder(args.id, args.target)),
            Commands::Clear => mutate(&dir, |s| s.clear_completed()),
            Commands::Theme(args) => cmd_theme(&dir, args, json),
            Commands::Recovery(args) => cmd_recovery(&dir, args, json),
        },
    }
}

/// Open the store in `dir` and load the session. A fresh directory gets the
/// seed tasks.
fn open_session(dir: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    let store = FileStore::open(dir)?;
    let session = Session::load(Box::new(store));
    check_saved(&session)?;
    Ok(session)
}

/// Turn a failed persist into a command error. The unsaved list is already
/// in the recovery log by then.
fn check_saved(session: &Session) -> CmdResult {
    match session.save_error() {
        Some(err) => Err(format!("could not save todos: {}", err).into()),
        None => Ok(()),
    }
}

/// Run one list operation. Silent either way; a no-op is not an error.
fn mutate(dir: &Path, op: impl FnOnce(&mut Session) -> bool) -> CmdResult {
    let mut session = open_session(dir)?;
    if op(&mut session) {
        check_saved(&session)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(dir: &Path, args: ListArgs, json: bool) -> CmdResult {
    let mut session = open_session(dir)?;
    session.set_filter(args.filter);
    let view = session.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", format_view_text(&view));
    }
    Ok(())
}

fn cmd_add(dir: &Path, args: AddArgs, json: bool) -> CmdResult {
    let mut session = open_session(dir)?;
    let text = args.text.join(" ");
    if let Some(id) = session.add(&text) {
        check_saved(&session)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&AddedJson { id })?);
        } else {
            println!("{}", id);
        }
    }
    Ok(())
}

fn cmd_theme(dir: &Path, args: ThemeArgs, json: bool) -> CmdResult {
    let mut session = open_session(dir)?;
    match args.theme {
        None => {}
        Some(ThemeChoice::Toggle) => {
            session.toggle_theme();
        }
        Some(ThemeChoice::Light) => session.set_dark_theme(false),
        Some(ThemeChoice::Dark) => session.set_dark_theme(true),
    }
    check_saved(&session)?;

    let theme = theme_name(session.is_dark_theme());
    if json {
        println!("{}", serde_json::to_string_pretty(&ThemeJson { theme })?);
    } else {
        println!("{}", theme);
    }
    Ok(())
}

fn cmd_recovery(dir: &Path, args: RecoveryCmd, json: bool) -> CmdResult {
    let path = recovery_log_path(dir);
    if let Some(RecoveryAction::Path) = args.action {
        println!("{}", path.display());
        return Ok(());
    }

    let log = read_recovery_log(dir);
    if json {
        let out = RecoveryJson {
            path: path.display().to_string(),
            entries: log.as_deref().map_or(0, count_entries),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    match log {
        Some(log) => print!("{}", log),
        None => println!("no recovery log"),
    }
    Ok(())
}
