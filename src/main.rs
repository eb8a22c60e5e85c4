//! frontmatter-seo - frontmatter repair and SEO audit
//!
//! Command line front end over the `frontmatter_seo` library: batch audit
//! and repair tools plus the local admin API server.

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Audit(args) => commands::audit::run(cli.content_root, args),
        Commands::Show(args) => commands::show::run(cli.content_root, args),
        Commands::FixDuplicates(args) => commands::fix_duplicates::run(cli.content_root, args),
        Commands::Apply(args) => commands::apply::run(cli.content_root, args),
        Commands::Serve(args) => commands::serve::run(cli.content_root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
