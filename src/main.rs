//! hlsl-syntax - HLSL tokenizer and completion engine
//!
//! Runs one-shot subcommands over files and prefixes, or an interactive
//! scratchpad with live highlighting when no command is given.
//!
//! # Usage
//!
//! ```bash
//! # Tokenize a shader
//! hlsl-syntax tokenize lit.hlsl --format table
//!
//! # Interactive mode
//! hlsl-syntax
//! ```

use tracing::{Level, debug};

use hlsl_syntax::cli::CliInterface;
use hlsl_syntax::error::Result;
use hlsl_syntax::formatter::Colorizer;
use hlsl_syntax::repl::ReplEngine;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands or start the REPL
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    run_interactive_mode(&cli)
}

/// Run application in interactive REPL mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let config = cli.config();
    let mut repl = ReplEngine::new(
        cli.language_for(None)?,
        cli.theme()?,
        &config.display,
        &config.history,
    )?;
    let colorizer = Colorizer::new(config.display.color_output);

    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(buffer) => buffer,
            None => break,
        };

        match repl.process_input(&input) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => eprintln!("{}", colorizer.error(&e.to_string())),
        }
    }

    debug!("REPL finished");
    if !cli.args().quiet {
        println!("Goodbye!");
    }
    Ok(())
}

/// Initialize logging system based on verbosity level
///
/// Logs go to stderr so they never mix with tokenizer output.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
