//! Terminal front end for the todo list core.
//!
//! # Responsibility
//! - Resolve configuration and start logging.
//! - Wire bus, collection, surface and coordinator, then feed terminal lines
//!   to the view as raw input.

mod command;
mod config;

use command::{parse_command, Command, HELP};
use config::AppConfig;
use log::{info, warn};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;
use todolist_core::{
    init_logging, Coordinator, EventBus, InputSignal, ItemCollection, PresentationSurface,
    TextSurface, View,
};

fn main() -> ExitCode {
    let config = match AppConfig::from_process() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("todolist: {err}");
            return ExitCode::from(2);
        }
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        // Logging failure must not stop the list from working.
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("todolist: logging disabled: {err}");
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todolist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> io::Result<()> {
    let bus = EventBus::new();
    let collection = Rc::new(ItemCollection::new(bus.clone()));
    let surface = Rc::new(RefCell::new(TextSurface::new()));
    let coordinator = Coordinator::attach(bus.clone(), Rc::clone(&collection), surface.clone());
    let view = View::new(bus);
    info!(
        "event=session_start module=cli status=ok version={} json={}",
        todolist_core::core_version(),
        config.json
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    coordinator.refresh();
    print_frame(&mut out, &surface.borrow(), config.json)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => print_frame(&mut out, &surface.borrow(), config.json)?,
            Command::Input(signal) => {
                // A real checkbox flips itself before the click handler runs.
                if let InputSignal::BulkCheckboxClicked { checked } = &signal {
                    surface.borrow_mut().set_bulk_checked(*checked);
                }
                if !view.dispatch_input(signal) {
                    warn!("event=input_ignored module=cli status=ignored");
                    writeln!(out, "nothing to do")?;
                    continue;
                }
                print_frame(&mut out, &surface.borrow(), config.json)?;
            }
        }
    }

    info!(
        "event=session_end module=cli status=ok items={}",
        collection.len()
    );
    Ok(())
}

fn print_frame(out: &mut impl Write, surface: &TextSurface, json: bool) -> io::Result<()> {
    if !json {
        return write!(out, "{}", surface.frame());
    }
    let line = serde_json::json!({
        "bulk_checked": surface.bulk_checked(),
        "snapshot": surface.last_snapshot(),
    });
    writeln!(out, "{line}")
}
