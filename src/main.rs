mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use asana_cli::client::HttpClient;
use asana_cli::config::Config;
use asana_cli::ops::{self, MoveRequest, SectionRef};
use asana_cli::output::write_json_lines;
use cli::{Cli, Command, DeleteCommand, ListCommand, MarkCommand, MoveCommand, SectionArgs};

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("ASANA_LOG")
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .init();
}

fn section_ref(args: &SectionArgs) -> SectionRef<'_> {
    SectionRef {
        workspace: &args.workspace,
        project: &args.project,
        section: &args.section,
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::new(cli.token, cli.base_url)?;
    let api = HttpClient::new(config).context("failed to build HTTP client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List { what } => match what {
            ListCommand::Workspaces => {
                write_json_lines(&mut out, &ops::list_workspaces(&api)?)?;
            }
            ListCommand::Projects { workspace } => {
                write_json_lines(&mut out, &ops::list_projects(&api, &workspace)?)?;
            }
            ListCommand::Sections { workspace, project } => {
                write_json_lines(&mut out, &ops::list_sections(&api, &workspace, &project)?)?;
            }
            ListCommand::Tasks {
                workspace,
                project,
                section,
            } => {
                let tasks = ops::list_tasks(&api, &workspace, &project, section.as_deref())?;
                write_json_lines(&mut out, &tasks)?;
            }
        },

        Command::Move {
            what:
                MoveCommand::Tasks {
                    workspace,
                    from_project,
                    from_section,
                    to_project,
                    to_section,
                },
        } => {
            let req = MoveRequest {
                workspace: &workspace,
                from_project: &from_project,
                from_section: &from_section,
                to_project: to_project.as_deref(),
                to_section: &to_section,
            };
            ops::move_tasks(&api, &mut out, req)?;
        }

        Command::Mark {
            what:
                MarkCommand::Tasks {
                    target,
                    completed: _,
                    not_completed,
                },
        } => {
            ops::mark_tasks(&api, &mut out, section_ref(&target), !not_completed)?;
        }

        Command::Delete {
            what: DeleteCommand::Tasks { target },
        } => {
            ops::delete_tasks(&api, &mut out, section_ref(&target))?;
        }
    }

    out.flush()?;
    Ok(())
}
