//! Output mode routing logic.

use crate::cli::OutputFormat;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON object on stdout
    Json,
    /// `key=value` lines, stable for logs and scripts
    #[default]
    Plain,
    /// Header, table and badges for a human at a terminal
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins, then an explicit format, then `TERM=dumb` forces
    /// plain, and otherwise pretty is used only when stdout is a TTY.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            Some(OutputFormat::Pretty) => Self::Pretty,
            None if is_tty && !term_is_dumb => Self::Pretty,
            None => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
