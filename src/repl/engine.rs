use std::sync::Arc;

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder,
    Reedline, ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::{debug, info};

use crate::completion::{Cursor, filter_by_prefix};
use crate::config::{DisplayConfig, HistoryConfig, OutputFormat};
use crate::error::{HlslError, Result};
use crate::formatter::Formatter;
use crate::language::LanguageSupport;
use crate::theme::Theme;
use crate::tokenizer::LexicalState;

use super::completer::HlslCompleter;
use super::highlighter::SyntaxHighlighter;
use super::prompt::HlslPrompt;
use super::shared_state::SharedState;
use super::validator::HlslValidator;

const COMPLETION_MENU: &str = "completion_menu";

const HELP_TEXT: &str = "\
Enter HLSL source to see its tokens. Open block comments and strings
continue on the next line.

  .help              Show this help
  .state [STATE]     Show or set the starting state (root, comment, string, struct_name)
  .reset             Start the next submission in the root state
  .format [FORMAT]   Show or set the listing format (text, json, table)
  .complete PREFIX   List completion candidates for PREFIX
  .exit, .quit       Leave the REPL";

/// Evaluation side of the REPL, independent of the terminal
///
/// Submissions are tokenized starting from the carried lexical state; the
/// state each submission ends in is carried into the next one.
pub struct ReplSession {
    language: Arc<dyn LanguageSupport>,
    theme: Theme,
    shared_state: SharedState,
    running: bool,
}

impl ReplSession {
    /// Create a new session
    ///
    /// # Arguments
    /// * `language` - Language used for tokens and candidates
    /// * `theme` - Colors for the echoed listing
    /// * `shared_state` - State shared with the editor callbacks
    pub fn new(language: Arc<dyn LanguageSupport>, theme: Theme, shared_state: SharedState) -> Self {
        Self {
            language,
            theme,
            shared_state,
            running: true,
        }
    }

    pub fn shared_state(&self) -> &SharedState {
        &self.shared_state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Process one submitted buffer
    ///
    /// # Arguments
    /// * `input` - The submitted buffer, possibly spanning several lines
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Text to print, if any
    pub fn process_input(&mut self, input: &str) -> Result<Option<String>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if trimmed.starts_with('.') {
            return self.run_command(trimmed);
        }

        let lines = self
            .language
            .tokenize_document_from(input, self.shared_state.start_state());
        if let Some(last) = lines.last() {
            self.shared_state.set_start_state(last.end_state);
        }

        let output = self.formatter().format_document(input, &lines)?;
        Ok(Some(output))
    }

    /// The buffer is already highlighted on screen, so ANSI falls back to
    /// the token listing.
    fn formatter(&self) -> Formatter {
        let format = match self.shared_state.get_format() {
            OutputFormat::Ansi => OutputFormat::Text,
            format => format,
        };
        Formatter::new(format, self.shared_state.get_color_enabled(), self.theme.clone())
    }

    fn run_command(&mut self, command: &str) -> Result<Option<String>> {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (command, None),
        };
        debug!("REPL command {name}");

        match (name, arg) {
            (".exit" | ".quit", _) => {
                self.stop();
                Ok(None)
            }
            (".help", _) => Ok(Some(HELP_TEXT.to_string())),
            (".reset", _) => {
                self.shared_state.set_start_state(LexicalState::Root);
                Ok(Some(format!("state: {}", LexicalState::Root)))
            }
            (".state", None) => Ok(Some(format!("state: {}", self.shared_state.start_state()))),
            (".state", Some(value)) => {
                let state = value.parse::<LexicalState>().map_err(HlslError::Generic)?;
                self.shared_state.set_start_state(state);
                Ok(Some(format!("state: {state}")))
            }
            (".format", None) => Ok(Some(format!(
                "format: {}",
                self.shared_state.get_format().as_str()
            ))),
            (".format", Some(value)) => {
                let format = value.parse::<OutputFormat>()?;
                self.shared_state.set_format(format);
                Ok(Some(format!("format: {}", format.as_str())))
            }
            (".complete", prefix) => {
                let prefix = prefix.unwrap_or_default();
                let candidates =
                    filter_by_prefix(self.language.complete(prefix, Cursor::default()), prefix);
                if candidates.is_empty() {
                    return Ok(Some(format!("no candidates for '{prefix}'")));
                }
                self.formatter().format_candidates(&candidates).map(Some)
            }
            _ => Err(HlslError::Generic(format!(
                "Unknown command: {name} (type .help for a list)"
            ))),
        }
    }
}

/// REPL engine for interactive tokenization
pub struct ReplEngine {
    /// Line editor for buffer input
    editor: Reedline,

    /// Prompt showing the carried state
    prompt: HlslPrompt,

    /// Evaluation state
    session: ReplSession,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `language` - Language bound to the editor
    /// * `theme` - Colors for highlighting and listings
    /// * `display` - Display configuration
    /// * `history_config` - History configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        language: Arc<dyn LanguageSupport>,
        theme: Theme,
        display: &DisplayConfig,
        history_config: &HistoryConfig,
    ) -> Result<Self> {
        let shared_state = SharedState::with_config(display);
        let highlighting = display.syntax_highlighting && display.color_output;

        let highlighter = SyntaxHighlighter::new(language.clone(), theme.clone(), highlighting)
            .with_shared_state(shared_state.clone());
        let validator =
            HlslValidator::new(language.clone()).with_shared_state(shared_state.clone());
        let completer = HlslCompleter::new(language.clone());

        let completion_menu = ColumnarMenu::default().with_name(COMPLETION_MENU);
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let history = if history_config.persist {
            FileBackedHistory::with_file(history_config.max_size, history_config.file_path.clone())
                .map_err(|e| HlslError::Repl(format!("Failed to open history file: {e}")))?
        } else {
            FileBackedHistory::new(history_config.max_size)
                .map_err(|e| HlslError::Repl(format!("Failed to create history: {e}")))?
        };

        let editor = Reedline::create()
            .with_history(Box::new(history))
            .with_highlighter(Box::new(highlighter))
            .with_validator(Box::new(validator))
            .with_completer(Box::new(completer))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        info!("REPL ready for language '{}'", language.id());

        Ok(Self {
            editor,
            prompt: HlslPrompt::new(language.id()),
            session: ReplSession::new(language, theme, shared_state),
        })
    }

    /// Read one buffer
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Buffer, empty on Ctrl-C, None on Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.prompt
            .set_state(self.session.shared_state().start_state());

        match self.editor.read_line(&self.prompt)? {
            Signal::Success(buffer) => Ok(Some(buffer)),
            Signal::CtrlD => Ok(None),
            _ => Ok(Some(String::new())),
        }
    }

    pub fn process_input(&mut self, input: &str) -> Result<Option<String>> {
        self.session.process_input(input)
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::HlslLanguage;

    fn session(format: OutputFormat) -> ReplSession {
        let display = DisplayConfig {
            format,
            color_output: false,
            ..DisplayConfig::default()
        };
        ReplSession::new(
            Arc::new(HlslLanguage::new()),
            Theme::default(),
            SharedState::with_config(&display),
        )
    }

    #[test]
    fn test_exit_commands() {
        let mut repl = session(OutputFormat::Text);
        assert!(repl.process_input(".exit").unwrap().is_none());
        assert!(!repl.is_running());

        let mut repl = session(OutputFormat::Text);
        repl.process_input("  .quit  ").unwrap();
        assert!(!repl.is_running());
    }

    #[test]
    fn test_blank_input_prints_nothing() {
        let mut repl = session(OutputFormat::Text);
        assert!(repl.process_input("   ").unwrap().is_none());
        assert!(repl.is_running());
    }

    #[test]
    fn test_buffer_echoed_as_listing() {
        let mut repl = session(OutputFormat::Ansi);
        let output = repl.process_input("return x;").unwrap().unwrap();
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("1:0..6"));
        assert!(first.contains("keyword"));
        assert!(first.ends_with("\"return\""));
    }

    #[test]
    fn test_state_command_sets_start() {
        let mut repl = session(OutputFormat::Text);
        assert_eq!(
            repl.process_input(".state comment").unwrap().as_deref(),
            Some("state: comment")
        );

        let output = repl.process_input("still */ int x;").unwrap().unwrap();
        assert!(output.lines().next().unwrap().contains("comment"));
        assert_eq!(repl.shared_state().start_state(), LexicalState::Root);
    }

    #[test]
    fn test_reset_and_bad_state() {
        let mut repl = session(OutputFormat::Text);
        repl.process_input(".state string").unwrap();
        repl.process_input(".reset").unwrap();
        assert_eq!(repl.shared_state().start_state(), LexicalState::Root);
        assert!(repl.process_input(".state nowhere").is_err());
    }

    #[test]
    fn test_format_command() {
        let mut repl = session(OutputFormat::Text);
        assert_eq!(
            repl.process_input(".format json").unwrap().as_deref(),
            Some("format: json")
        );
        let output = repl.process_input("int x;").unwrap().unwrap();
        assert!(output.starts_with('['));
        assert!(repl.process_input(".format yaml").is_err());
    }

    #[test]
    fn test_complete_command() {
        let mut repl = session(OutputFormat::Text);
        let output = repl.process_input(".complete lerp").unwrap().unwrap();
        assert!(output.starts_with("lerp"));

        let output = repl.process_input(".complete zzz").unwrap().unwrap();
        assert_eq!(output, "no candidates for 'zzz'");
    }

    #[test]
    fn test_unknown_command() {
        let mut repl = session(OutputFormat::Text);
        let err = repl.process_input(".frobnicate").unwrap_err();
        assert!(err.to_string().contains("Unknown command: .frobnicate"));
        assert!(repl.process_input(".help").unwrap().unwrap().contains(".state"));
    }
}
