use crate::app::AppContext;
use crate::cli::ConfigSubcommand;
use crate::config::{write_config, AffineConfig};
use crate::errors::CliError;
use crate::ui::{badge, print, Badge};

pub fn handle_config(ctx: &AppContext, command: &ConfigSubcommand) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    match command {
        ConfigSubcommand::Path => {
            println!("{}", path.display());
        }
        ConfigSubcommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::invalid_input_with_hint(
                    format!("Config already exists at {}", path.display()),
                    "Pass --force to overwrite it.",
                )
                .into());
            }
            write_config(&path, &AffineConfig::default())?;
            if !ctx.quiet() {
                let ui = ctx.ui_context(false, None);
                print(
                    &ui,
                    &badge(&ui, Badge::Ok, &format!("Wrote {}", path.display())),
                );
            }
        }
    }
    Ok(())
}
