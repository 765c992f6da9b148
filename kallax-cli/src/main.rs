//! kallax CLI
//!
//! Interactive shell for managing board-game collections.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use kallax_core::{load_manager, save_manager, Manager};

mod menu;
mod settings;

use menu::{MenuState, Reply};

#[derive(Parser)]
#[command(name = "kallax")]
#[command(about = "Manage collections of board games", long_about = None)]
struct Cli {
    /// Data file to load and save (defaults to the configured path)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shell (the default)
    Shell,

    /// Inspect or change the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings and where the data file resolves to
    Show,

    /// Remember a data file path in the settings file
    SetFile {
        /// Path the shell should load and save from now on
        path: PathBuf,
    },

    /// Forget the remembered data file path
    ClearFile,

    /// Print the settings file path
    Path,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(cli.file),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(cli.file),
            ConfigAction::SetFile { path } => run_config_set_file(Some(path)),
            ConfigAction::ClearFile => run_config_set_file(None),
            ConfigAction::Path => println!("{}", settings::settings_path().display()),
        },
    }
}

fn run_shell(file_override: Option<PathBuf>) {
    let data_file = settings::resolve_data_file(file_override);

    let mut manager = match load_manager(&data_file) {
        Ok(manager) => {
            println!(
                "Loaded {} collection(s) from {}.",
                manager.collections().len(),
                data_file.display(),
            );
            manager
        }
        Err(err) => {
            log::warn!("could not load {}: {err}", data_file.display());
            println!("No collections loaded, starting with an empty shelf.");
            Manager::new()
        }
    };

    println!("{}", menu::INTRO);
    println!("{}", menu::help(MenuState::Main));

    let mut state = MenuState::Main;
    let stdin = std::io::stdin();
    loop {
        print!(">> ");
        std::io::stdout().flush().unwrap();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            // end of input behaves like an explicit exit
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log::warn!("could not read input: {err}");
                break;
            }
        }

        match menu::dispatch(state, &mut manager, &menu::tokenize(&line)) {
            Reply::Text(text) => println!("{text}"),
            Reply::Goto(next) => {
                state = next;
                println!("{}", menu::help(state));
            }
            Reply::Exit => break,
        }
    }

    println!("Saving data to {} ...", data_file.display());
    match save_manager(&data_file, &manager) {
        Ok(()) => println!("Done."),
        Err(err) => {
            eprintln!(
                "{} {err}",
                "Error:".if_supports_color(Stderr, |t| t.red()),
            );
            std::process::exit(1);
        }
    }
}

fn run_config_show(file_override: Option<PathBuf>) {
    let path = settings::settings_path();

    println!(
        "{}",
        "Kallax Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    if path.exists() {
        println!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        println!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if let Some(contents) = settings::load_settings_string() {
        println!();
        for line in contents.lines() {
            println!("  {line}");
        }
    }

    println!();
    println!(
        "  Data file resolves to: {}",
        settings::resolve_data_file(file_override)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
}

fn run_config_set_file(path: Option<PathBuf>) {
    match settings::save_data_file(path.as_deref()) {
        Ok(()) => match path {
            Some(p) => println!("Data file set to {}.", p.display()),
            None => println!("Data file setting cleared."),
        },
        Err(err) => {
            eprintln!(
                "{} could not update settings: {err}",
                "Error:".if_supports_color(Stderr, |t| t.red()),
            );
            std::process::exit(1);
        }
    }
}
