//! Shell completion generation for hlsl-syntax
//!
//! Scripts come from clap_complete. Bash, zsh and fish also get a helper that
//! completes the PREFIX argument of `hlsl-syntax complete` by asking the
//! binary itself for candidate labels.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

use crate::cli::CliArgs;
use crate::error::{ConfigError, HlslError, Result};

const BIN_NAME: &str = "hlsl-syntax";

/// Generate shell completion script on stdout
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    let mut stdout = io::stdout().lock();
    write_completion(shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write the completion script for `shell` to `out`
pub fn write_completion<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buffer);

    let basic_completion = String::from_utf8_lossy(&buffer);
    let extra = match shell {
        Shell::Bash => BASH_CANDIDATES,
        Shell::Zsh => ZSH_CANDIDATES,
        Shell::Fish => FISH_CANDIDATES,
        _ => "",
    };

    write!(out, "{basic_completion}{extra}")?;
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(HlslError::Config(ConfigError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish",
            shell_name
        )))),
    }
}

const BASH_CANDIDATES: &str = r#"
# Candidate labels for `hlsl-syntax complete PREFIX`
_hlsl_syntax_candidates() {
    hlsl-syntax --no-color -q complete --format text "$1" 2>/dev/null | awk '{print $1}'
}

_hlsl_syntax_enhanced() {
    local cur prev words cword
    _init_completion || return

    if [[ "${words[1]}" == "complete" && "$cur" != -* && $cword -eq 2 ]]; then
        COMPREPLY=($(compgen -W "$(_hlsl_syntax_candidates "$cur")" -- "$cur"))
        return 0
    fi

    _hlsl-syntax "$@"
}

complete -F _hlsl_syntax_enhanced hlsl-syntax
"#;

const ZSH_CANDIDATES: &str = r#"
# Candidate labels for `hlsl-syntax complete PREFIX`
_hlsl_syntax_candidates() {
    local -a labels
    labels=(${(f)"$(hlsl-syntax --no-color -q complete --format text "$PREFIX" 2>/dev/null | awk '{print $1}')"})
    _describe 'candidates' labels
}

_hlsl_syntax_enhanced() {
    if [[ ${words[2]} == "complete" && $CURRENT -eq 3 && $PREFIX != -* ]]; then
        _hlsl_syntax_candidates
        return 0
    fi

    _hlsl-syntax "$@"
}

compdef _hlsl_syntax_enhanced hlsl-syntax
"#;

const FISH_CANDIDATES: &str = r#"
# Candidate labels for `hlsl-syntax complete PREFIX`
function __hlsl_syntax_candidates
    hlsl-syntax --no-color -q complete --format text (commandline -ct) 2>/dev/null | awk '{print $1}'
end

complete -c hlsl-syntax -n "__fish_seen_subcommand_from complete" -f -a "(__hlsl_syntax_candidates)"
"#;
