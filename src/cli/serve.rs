use clap::Parser;
use std::net::SocketAddr;

use frontmatter_seo::config::DEFAULT_ADDR;

/// Arguments for the serve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Serve on the default address:\n    frontmatter-seo serve\n\n\
                  Serve with error details in responses:\n    frontmatter-seo serve --addr 127.0.0.1:8080 --dev")]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "FRONTMATTER_SEO_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Development mode: include error details in API responses
    #[arg(long, env = "FRONTMATTER_SEO_DEV")]
    pub dev: bool,
}
