use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::Filter;
use crate::model::todo::TodoId;

#[derive(Parser)]
#[command(name = "tick", about = concat!("tick v", env!("CARGO_PKG_VERSION"), " - a small todo list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this data directory instead of the nearest .tick/
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List todos
    List(ListArgs),
    /// Add a todo to the bottom of the list
    Add(AddArgs),
    /// Flip a todo between active and completed
    Toggle(IdArg),
    /// Delete a todo
    Rm(IdArg),
    /// Move a todo into another todo's position
    Mv(MvArgs),
    /// Delete all completed todos
    Clear,
    /// Show or change the theme
    Theme(ThemeArgs),
    /// Show the recovery log
    Recovery(RecoveryCmd),
}

#[derive(Args)]
pub struct ListArgs {
    /// Which todos to show (all, active, completed)
    #[arg(long, short, default_value = "all", value_parser = parse_filter)]
    pub filter: Filter,
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Todo ID
    pub id: TodoId,
}

#[derive(Args)]
pub struct MvArgs {
    /// Todo to move
    pub id: TodoId,
    /// Todo whose position it takes
    pub target: TodoId,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// New theme (omit to print the current one)
    pub theme: Option<ThemeChoice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

#[derive(Args)]
pub struct RecoveryCmd {
    #[command(subcommand)]
    pub action: Option<RecoveryAction>,
}

#[derive(Subcommand)]
pub enum RecoveryAction {
    /// Print the absolute path to the recovery log
    Path,
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    s.parse()
}
