//! Shell completions command

use clap::CommandFactory;
use frontmatter_seo::error::{Result, invalid_request};

use crate::cli::CompletionsArgs;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = match args.shell.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(invalid_request(format!(
                "unknown shell '{}', expected one of bash, elvish, fish, powershell, zsh",
                args.shell
            )));
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "frontmatter-seo", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(shell: &str) -> Result<()> {
        run(CompletionsArgs {
            shell: shell.to_string(),
        })
    }

    #[test]
    fn test_completions_supported_shells() {
        for shell in ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(completions(shell).is_ok(), "{shell} should be supported");
        }
    }

    #[test]
    fn test_completions_case_insensitive() {
        assert!(completions("BASH").is_ok());
        assert!(completions("Zsh").is_ok());
    }

    #[test]
    fn test_completions_unknown_shell() {
        assert!(completions("tcsh").is_err());
    }
}
