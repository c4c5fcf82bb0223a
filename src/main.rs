// langtour: a console tour of programming-language basics

mod console;
mod demos;
mod errors;
mod runtime;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use console::Session;
use errors::DemoError;
use ui::App;

fn usage(program_name: &str) {
    eprintln!("Usage: {} <command> [args]", program_name);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                 Show the demonstration catalog");
    eprintln!("  run <demo>           Run one demonstration interactively");
    eprintln!("  run <demo> --replay  Replay it against its sample input");
    eprintln!("  all                  Replay every demonstration in order");
    eprintln!("  browse               Open the transcript browser");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} run operators     # fixed-operand operator walkthrough", program_name);
    eprintln!("  {} run loops         # interactive loop constructs", program_name);
    eprintln!("  {} browse            # page through every transcript", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("langtour");

    let command = match args.get(1) {
        Some(command) => command.as_str(),
        None => {
            eprintln!("Error: no command provided");
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    };

    match command {
        "list" => {
            for demo in demos::CATALOG {
                println!("{:<16} {}", demo.name, demo.title);
            }
            Ok(())
        }

        "run" => {
            let name = match args.get(2) {
                Some(name) => name.as_str(),
                None => {
                    eprintln!("Error: 'run' needs a demonstration name");
                    eprintln!();
                    usage(program_name);
                    std::process::exit(1);
                }
            };
            let demo = match demos::find(name) {
                Ok(demo) => demo,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    eprintln!("Run '{} list' to see the catalog.", program_name);
                    std::process::exit(1);
                }
            };

            let replay = args.iter().any(|a| a == "--replay");
            let result = if replay {
                replay_demo(demo)
            } else {
                let mut session = Session::interactive();
                (demo.run)(&mut session)
            };

            if let Err(e) = result {
                eprintln!("Demonstration stopped: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }

        "all" => {
            for demo in demos::CATALOG {
                println!("### {} — {}", demo.name, demo.title);
                println!();
                if let Err(e) = replay_demo(demo) {
                    eprintln!("Demonstration stopped: {}", e);
                    std::process::exit(1);
                }
                println!();
            }
            Ok(())
        }

        "browse" => {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend)?;

            let mut app = App::new();
            let res = app.run(&mut terminal);

            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            terminal.show_cursor()?;

            if let Err(err) = res {
                eprintln!("Error: {:?}", err);
            }
            Ok(())
        }

        other => {
            eprintln!("Error: unknown command '{}'", other);
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    }
}

/// Replay one demonstration against its sample input and print the transcript
fn replay_demo(demo: &demos::Demo) -> Result<(), DemoError> {
    let transcript = demos::replay(demo)?;
    for line in transcript.lines() {
        println!("{}", line);
    }
    Ok(())
}
