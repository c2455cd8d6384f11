//! The `solve` command.
//!
//! Recovery runs on its own so `a` and `b` are shown before the inverse is
//! computed; a non-invertible key still reports the derived parameters.

use affine_core::{normalize, recover_key, solve_with_key, KNOWN_PLAINTEXT};

use crate::app::AppContext;
use crate::cli::SolveArgs;
use crate::helpers::read_solve_inputs;
use crate::ui::theme::inverse_label;
use crate::ui::{badge, blank_line, divider, header, hint, kv, params_table, print, warning, Badge};

pub fn handle_solve(ctx: &AppContext, args: &SolveArgs) -> anyhow::Result<()> {
    let verify = ctx.config()?.solver.verify_sample;
    let ui = ctx.ui_context(args.json, args.format);
    let quiet = ctx.quiet();
    let verbose_output = !quiet && !ui.mode.is_json();

    if verbose_output {
        print(&ui, &header(&ui, "solve"));
        blank_line(&ui);
    }

    let inputs = read_solve_inputs(
        &ui,
        args.secret.clone(),
        args.sample.clone(),
        args.no_input,
        quiet,
    )?;
    let secret = normalize(&inputs.secret);
    let sample = normalize(&inputs.sample);
    tracing::debug!(secret = %secret, sample = %sample, "normalized input");

    let key = recover_key(&sample)?;
    if verbose_output {
        blank_line(&ui);
        print(
            &ui,
            &params_table(&ui, &[("a", key.a.to_string()), ("b", key.b.to_string())]),
        );
    }

    let solution = solve_with_key(key, &secret, verify.then_some(sample.as_str()))?;
    tracing::info!(a = key.a, b = key.b, "secret decrypted");

    if solution.sample_consistent == Some(false) {
        eprintln!(
            "{}",
            warning(
                &ui,
                &format!(
                    "Sample '{}' does not match {} encrypted with the recovered key ({})",
                    sample,
                    KNOWN_PLAINTEXT,
                    key.encrypt(KNOWN_PLAINTEXT)
                )
            )
        );
    }

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    if quiet {
        println!("{}", solution.plaintext);
        return Ok(());
    }

    if ui.mode.is_pretty() {
        print(&ui, &kv(&ui, inverse_label(ui.unicode), &solution.a_inverse.to_string()));
        print(&ui, &divider(&ui));
        print(&ui, &badge(&ui, Badge::Ok, &format!("Decrypted: {}", solution.plaintext)));
        blank_line(&ui);
        print(
            &ui,
            &hint(&ui, "Submit the decrypted word with the challenge's guess option."),
        );
    } else {
        print(&ui, &kv(&ui, "a_inverse", &solution.a_inverse.to_string()));
        print(&ui, &kv(&ui, "plaintext", &solution.plaintext));
    }

    Ok(())
}
