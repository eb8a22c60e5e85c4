//! Serve command implementation

use std::path::PathBuf;

use console::Style;
use frontmatter_seo::config::{ServerSettings, Settings};
use frontmatter_seo::error::{Result, server_failed};
use frontmatter_seo::server;

use crate::cli::ServeArgs;

/// Run serve command
pub fn run(content_root: PathBuf, args: ServeArgs) -> Result<()> {
    let settings = Settings::new(content_root).with_server(ServerSettings {
        addr: args.addr,
        dev_mode: args.dev,
    });
    let root = settings.open_content_root()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| server_failed(format!("cannot start runtime: {e}")))?;

    println!(
        "{} http://{}/api/admin/seo {}",
        Style::new().bold().green().apply_to("Admin API:"),
        settings.server.addr,
        Style::new().dim().apply_to("(Ctrl-C to stop)")
    );
    runtime.block_on(server::serve(root, &settings.server))
}
