//! Application context for the Affine CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::{Cli, OutputFormat};
use crate::config::{load_config, resolve_config_path, AffineConfig};
use crate::ui::{UiContext, UiOptions};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<AffineConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path()
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&AffineConfig> {
        self.config
            .get_or_try_init(|| load_config(&self.config_path()?))
    }

    /// Build a UI context; flags win over the config file.
    ///
    /// A config that fails to load falls back to defaults here so that
    /// errors can still be rendered.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let (config_color, config_ascii, config_format) = match self.config() {
            Ok(config) => (config.ui.color, config.ui.ascii, config.ui.format),
            Err(_) => (true, false, None),
        };

        UiContext::from_env(UiOptions {
            json,
            format: format.or(config_format),
            no_color: self.cli.no_color || !config_color,
            ascii: self.cli.ascii || config_ascii,
        })
    }
}
