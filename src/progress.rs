//! Progress bar display for batch commands

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress over a list of documents.
///
/// Per-file lines go through [`BatchProgress::println`] so they are not
/// torn by the bar. The bar draws only when stderr is a terminal.
pub struct BatchProgress {
    pb: ProgressBar,
}

impl BatchProgress {
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr());
        pb.set_style(style);
        Self { pb }
    }

    /// Count one processed file and show its path.
    pub fn advance(&self, path: &str) {
        // Keep the tail of long paths.
        let count = path.chars().count();
        let display_path = if count > 50 {
            format!("...{}", path.chars().skip(count - 47).collect::<String>())
        } else {
            path.to_string()
        };
        self.pb.set_message(display_path);
        self.pb.inc(1);
    }

    pub fn println(&self, line: impl AsRef<str>) {
        self.pb.suspend(|| println!("{}", line.as_ref()));
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
