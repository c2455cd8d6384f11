//! Input handling for the solve flow.
//!
//! Values come from flags or environment (resolved by clap), then piped
//! stdin, then interactive prompts.

use std::io::{self, BufRead, IsTerminal};

use affine_core::KNOWN_PLAINTEXT;

use crate::errors::CliError;
use crate::ui::prompt::prompt_text;
use crate::ui::{print, UiContext};

/// Raw operator input, not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveInputs {
    pub secret: String,
    pub sample: String,
}

/// Gather the secret and the "ABC" sample.
pub fn read_solve_inputs(
    ctx: &UiContext,
    secret: Option<String>,
    sample: Option<String>,
    no_input: bool,
    quiet: bool,
) -> anyhow::Result<SolveInputs> {
    if let (Some(secret), Some(sample)) = (&secret, &sample) {
        return Ok(SolveInputs {
            secret: secret.clone(),
            sample: sample.clone(),
        });
    }

    if !io::stdin().is_terminal() {
        tracing::debug!("reading missing values from stdin");
        let stdin = io::stdin();
        return fill_from_reader(stdin.lock(), secret, sample);
    }

    if no_input {
        return Err(CliError::invalid_input_with_hint(
            "--no-input requires --secret and --sample",
            "Set AFFINE_SECRET and AFFINE_SAMPLE or pipe both lines via stdin.",
        )
        .into());
    }

    let secret = match secret {
        Some(value) => value,
        None => prompt_text(ctx, "Encrypted secret from the challenge")?,
    };
    let sample = match sample {
        Some(value) => value,
        None => {
            if !quiet {
                print(
                    ctx,
                    &format!(
                        "On the challenge, choose encrypt and enter: {}",
                        KNOWN_PLAINTEXT
                    ),
                );
            }
            prompt_text(ctx, &format!("Result for '{}'", KNOWN_PLAINTEXT))?
        }
    };

    Ok(SolveInputs { secret, sample })
}

/// Fill whichever values are missing from successive lines of `reader`,
/// secret first.
fn fill_from_reader<R: BufRead>(
    reader: R,
    secret: Option<String>,
    sample: Option<String>,
) -> anyhow::Result<SolveInputs> {
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> anyhow::Result<String> {
        match lines.next() {
            Some(line) => line.map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e)),
            None => Err(CliError::invalid_input_with_hint(
                format!("No {} provided on stdin", what),
                "Pipe the secret on the first line and the ABC sample on the second.",
            )
            .into()),
        }
    };

    let secret = match secret {
        Some(value) => value,
        None => next_line("secret")?,
    };
    let sample = match sample {
        Some(value) => value,
        None => next_line("sample")?,
    };

    Ok(SolveInputs { secret, sample })
}
