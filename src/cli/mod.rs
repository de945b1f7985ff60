//! Command-line interface for hlsl-syntax
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and CLI overrides
//! - The one-shot subcommands (tokenize, complete, theme, config)

pub mod completion;

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::completion::{Cursor, filter_by_prefix};
use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::{ConfigError, HlslError, Result};
use crate::formatter::{Colorizer, Formatter, JsonFormatter};
use crate::language::{HLSL_LANGUAGE_ID, HlslLanguage, LanguageRegistry, LanguageSupport};
use crate::theme::Theme;
use crate::tokenizer::LexicalState;

/// HLSL syntax engine - tokenizer, completion and highlighting scratchpad
#[derive(Parser, Debug)]
#[command(
    name = "hlsl-syntax",
    version,
    about = "HLSL line tokenizer and completion engine",
    long_about = "Tokenizes HLSL shader source line by line with carried lexical state,
lists completion candidates, and offers an interactive scratchpad with live
highlighting when run without a command."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv", global = true)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for hlsl-syntax
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize a file (or stdin) and print the tokens
    Tokenize {
        /// Source file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format (ansi, text, json, table)
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,

        /// Lexical state the first line starts in
        #[arg(long, value_name = "STATE", default_value = "root")]
        state: LexicalState,
    },

    /// List completion candidates ranked for a prefix
    Complete {
        /// Partial word; lists every candidate when omitted
        #[arg(value_name = "PREFIX", default_value = "")]
        prefix: String,

        /// Output format (text, json, table)
        #[arg(long, value_name = "FORMAT", default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective color theme
    Theme {
        /// Output format
        #[arg(long, value_enum, default_value_t = ThemeFormat::Toml)]
        format: ThemeFormat,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,

        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Serialization used by the `theme` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeFormat {
    Toml,
    Json,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;
        Self::apply_args_to_config(&mut config, args);
        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if args.no_color {
            config.display.color_output = false;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Registry with HLSL bound to the configured symbol table
    pub fn registry(&self) -> LanguageRegistry {
        let symbols = Arc::new(self.config.symbol_table());
        LanguageRegistry::with_hlsl(HlslLanguage::with_symbols(symbols))
    }

    /// Language for a file path, falling back to HLSL
    pub fn language_for(&self, path: Option<&Path>) -> Result<Arc<dyn LanguageSupport>> {
        let registry = self.registry();
        path.and_then(|path| registry.for_path(path))
            .or_else(|| registry.by_id(HLSL_LANGUAGE_ID))
            .ok_or_else(|| HlslError::Generic(format!("No language registered as '{HLSL_LANGUAGE_ID}'")))
    }

    /// Effective theme: built-in colors with configured overrides
    pub fn theme(&self) -> Result<Theme> {
        Theme::from_config(&self.config.theme)
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        let Some(command) = &self.args.command else {
            return Ok(false);
        };
        debug!("Dispatching {command:?}");

        match command {
            Commands::Tokenize {
                file,
                format,
                state,
            } => {
                let text = read_source(file.as_deref())?;
                let format = format.unwrap_or(self.config.display.format);
                println!("{}", self.tokenize_output(&text, file.as_deref(), format, *state)?);
            }
            Commands::Complete { prefix, format } => {
                let output = self.complete_output(prefix, *format)?;
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Commands::Theme { format } => println!("{}", self.theme_output(*format)?),
            Commands::Completion { shell } => completion::generate_completion(shell)?,
            Commands::Config {
                show,
                validate,
                init,
            } => self.handle_config_command(*show, *validate, *init)?,
        }

        Ok(true)
    }

    /// Tokenize `text` and render it in `format`
    pub fn tokenize_output(
        &self,
        text: &str,
        path: Option<&Path>,
        format: OutputFormat,
        start: LexicalState,
    ) -> Result<String> {
        let language = self.language_for(path)?;
        let lines = language.tokenize_document_from(text, start);
        info!("Tokenized {} line(s) as {}", lines.len(), language.id());

        Formatter::new(format, self.config.display.color_output, self.theme()?)
            .format_document(text, &lines)
    }

    /// Candidates for `prefix`, filtered and ranked
    pub fn complete_output(&self, prefix: &str, format: OutputFormat) -> Result<String> {
        let language = self.language_for(None)?;
        let candidates = filter_by_prefix(language.complete(prefix, Cursor::default()), prefix);
        debug!("{} candidate(s) for '{prefix}'", candidates.len());

        Formatter::new(format, self.config.display.color_output, self.theme()?)
            .format_candidates(&candidates)
    }

    /// The effective theme serialized as TOML or JSON
    pub fn theme_output(&self, format: ThemeFormat) -> Result<String> {
        let theme = self.theme()?;
        match format {
            ThemeFormat::Toml => Ok(toml::to_string_pretty(&theme)?),
            ThemeFormat::Json => {
                JsonFormatter::new(true, self.config.display.color_output).format_value(&theme)
            }
        }
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    /// * `init` - Whether to write a default configuration file
    fn handle_config_command(&self, show: bool, validate: bool, init: bool) -> Result<()> {
        let path = self.get_config_path();

        if init {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                Config::default().save(&path)?;
                println!("Wrote default configuration to {}", path.display());
            }
        }

        if validate {
            self.validate_config_file(&path);
        }

        if show || !(init || validate) {
            self.show_config(&path)?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self, path: &Path) {
        let colorizer = Colorizer::new(self.config.display.color_output);
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("{}", colorizer.warning("Configuration file does not exist"));
            return;
        }

        match Config::load_from_file(Some(path)) {
            Ok(_) => println!("{}", colorizer.info("Configuration is valid")),
            Err(e) => println!("{}", colorizer.error(&e.to_string())),
        }
    }

    /// Show effective configuration
    fn show_config(&self, path: &Path) -> Result<()> {
        println!("# Configuration file: {}", path.display());
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Print banner with version and a hint for the REPL
    pub fn print_banner(&self) {
        if !self.args.quiet {
            let colorizer = Colorizer::new(self.config.display.color_output);
            println!(
                "{}",
                colorizer.info(&format!("hlsl-syntax {}", env!("CARGO_PKG_VERSION")))
            );
            println!("{}", colorizer.dim("Type .help for commands, Ctrl-D to exit."));
        }
    }
}

/// Read a source file, or stdin when no path is given
fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                HlslError::Config(ConfigError::FileNotFound(path.display().to_string()))
            } else {
                HlslError::Io(e)
            }
        }),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
