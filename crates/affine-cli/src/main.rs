//! Affine CLI - recover an affine cipher key from a known plaintext and
//! decrypt a secret.
//!
//! This is the command-line interface for Affine. The arithmetic lives in
//! `affine-core`; this crate handles input, config, logging and output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{config as config_cmd, encrypt, inverse, misc, solve};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let (json, format) = match &cli.command {
            Some(Commands::Solve(args)) => (args.json, args.format),
            None => (cli.solve.json, cli.solve.format),
            Some(_) => (false, None),
        };
        let ui_ctx = ctx.ui_context(json, format);
        let (code, hint) = errors::classify(&e);
        tracing::debug!(error = ?e, code, "command failed");

        print_error(&ui_ctx, &format!("{}", e), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Solve(args)) => {
            solve::handle_solve(ctx, args)?;
        }
        Some(Commands::Encrypt(args)) => {
            encrypt::handle_encrypt(ctx, args)?;
        }
        Some(Commands::Inverse(args)) => {
            inverse::handle_inverse(ctx, args)?;
        }
        Some(Commands::Config(args)) => {
            config_cmd::handle_config(ctx, &args.command)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            solve::handle_solve(ctx, &cli.solve)?;
        }
    }

    Ok(())
}
