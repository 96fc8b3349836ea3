use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "asana",
    about = "List, move, mark and delete Asana tasks by name",
    version,
    after_help = "\
Examples:
  asana list workspaces
  asana list projects --workspace=\"Personal Projects\"
  asana list sections --workspace=\"Personal Projects\" --project=\"Test\"
  asana list tasks --workspace=\"Personal Projects\" --project=\"Test\" --section=\"Column 1\"
  asana delete tasks --workspace=\"Personal Projects\" --project=\"Test\" --section=\"Column 1\"
  asana mark tasks --workspace=\"Personal Projects\" --project=\"Test\" --section=\"Column 1\" --not-completed
  asana move tasks --workspace=\"Personal Projects\" --from-project=\"Test\" --from-section=\"Column 1\" --to-section=\"Column 2\""
)]
pub struct Cli {
    /// Personal access token
    #[arg(long, env = "ASANA_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// API root [default: https://app.asana.com/api/1.0]
    #[arg(long, env = "ASANA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Log HTTP requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print records as JSON, one per line
    List {
        #[command(subcommand)]
        what: ListCommand,
    },

    /// Move tasks between sections
    Move {
        #[command(subcommand)]
        what: MoveCommand,
    },

    /// Mark tasks complete or incomplete
    Mark {
        #[command(subcommand)]
        what: MarkCommand,
    },

    /// Delete tasks
    Delete {
        #[command(subcommand)]
        what: DeleteCommand,
    },
}

#[derive(Subcommand)]
pub enum ListCommand {
    /// Workspaces of the current user
    Workspaces,

    /// Projects in a workspace
    Projects {
        #[arg(long)]
        workspace: String,
    },

    /// Sections of a project
    Sections {
        #[arg(long)]
        workspace: String,
        #[arg(long)]
        project: String,
    },

    /// Tasks of a project, or of one of its sections
    Tasks {
        #[arg(long)]
        workspace: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        section: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MoveCommand {
    /// Move every task of a section into another section
    Tasks {
        #[arg(long)]
        workspace: String,
        /// Source project
        #[arg(long)]
        from_project: String,
        /// Source section
        #[arg(long)]
        from_section: String,
        /// Target project (defaults to the source project)
        #[arg(long)]
        to_project: Option<String>,
        /// Target section
        #[arg(long)]
        to_section: String,
    },
}

/// Workspace, project and section identifying a set of tasks.
#[derive(Args)]
pub struct SectionArgs {
    #[arg(long)]
    pub workspace: String,
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub section: String,
}

#[derive(Subcommand)]
pub enum MarkCommand {
    /// Mark every task of a section
    Tasks {
        #[command(flatten)]
        target: SectionArgs,
        /// Mark as completed (default)
        #[arg(long, overrides_with = "not_completed")]
        completed: bool,
        /// Mark as not completed
        #[arg(long, overrides_with = "completed")]
        not_completed: bool,
    },
}

#[derive(Subcommand)]
pub enum DeleteCommand {
    /// Delete every task of a section
    Tasks {
        #[command(flatten)]
        target: SectionArgs,
    },
}
