//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use crate::cli::OutputFormat;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

/// Inputs that shape the UI, merged from flags and the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub json: bool,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub ascii: bool,
}

impl UiContext {
    /// Create context from environment and resolved options.
    pub fn from_env(options: UiOptions) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !options.no_color && !no_color_env && !term_is_dumb;
        let unicode = !options.ascii;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(options.json, options.format, is_tty, term_is_dumb);

        Self {
            color,
            unicode,
            width,
            mode,
        }
    }
}

/// Get terminal width from `COLUMNS` or the tty, if either is available.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
