use crate::ledger::ledger::ReservationLedger;
use crate::ledger::pool::ResourcePool;
use crate::lot::Lot;
use crate::shell::{COMMANDS, Command, HELP, Reply};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::{Command as Process, Stdio};
use tracing::{Level, info};

mod billing;
mod category;
mod error;
mod ledger;
mod lot;
mod reservation;
mod shell;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON lot configuration; the built-in Downtown lot is used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured number of slots
    #[arg(long, value_name = "N")]
    capacity: Option<NonZeroUsize>,

    /// Log ledger activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) -> io::Result<()> {
    let mut pager = Process::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Process::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait().map(|_| ())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let mut lot = match &args.config {
        Some(path) => Lot::load_from_file(path)?,
        None => Lot::default(),
    };
    if let Some(capacity) = args.capacity {
        lot.capacity = capacity;
    }
    info!(id = lot.id, location = %lot.location, capacity = lot.capacity.get(), "lot configured");

    println!("Welcome to the Parking Management System");
    println!("Lot {}", lot);
    if let Some(admin) = &lot.admin {
        println!("Managed by {}. {}", admin, admin.add_parking_lot(&lot));
    }
    println!("Type 'help' for the list of commands.");

    let mut ledger = ReservationLedger::new(ResourcePool::new(lot.capacity));

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let command = match trimmed.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };

                match shell::execute(&mut ledger, command, Local::now().naive_local()) {
                    Ok(Reply::Text(text)) => println!("{}", text.green()),
                    Ok(Reply::Table { rendered, rows }) => {
                        if rows > 20 {
                            paginate(rendered)?;
                        } else {
                            println!("{}", rendered);
                        }
                    }
                    Ok(Reply::Help) => println!("{}", HELP),
                    Ok(Reply::Exit) => {
                        println!("Exiting the system. Thank you!");
                        break;
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
