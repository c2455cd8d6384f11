//! Interactive prompt primitives.

use std::io::IsTerminal;

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use super::context::UiContext;

/// Prompt for a line of text. Empty answers are allowed so that the
/// caller can report them with its own error.
pub fn prompt_text(ctx: &UiContext, prompt: &str) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Use flags, pipe input, or run on a TTY."
        ));
    }

    let colorful = ColorfulTheme::default();
    let theme: &dyn Theme = if ctx.color { &colorful } else { &SimpleTheme };

    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}
