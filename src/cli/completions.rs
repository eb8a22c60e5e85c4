use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    frontmatter-seo completions bash > ~/.bash_completion.d/frontmatter-seo\n\n\
                  Generate zsh completions:\n    frontmatter-seo completions zsh > ~/.zfunc/_frontmatter-seo\n\n\
                  Generate fish completions:\n    frontmatter-seo completions fish > ~/.config/fish/completions/frontmatter-seo.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
