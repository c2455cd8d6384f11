use affine_core::mod_inverse;

use crate::app::AppContext;
use crate::cli::InverseArgs;
use crate::errors::CliError;
use crate::ui::{kv, print};

pub fn handle_inverse(ctx: &AppContext, args: &InverseArgs) -> anyhow::Result<()> {
    let inverse = mod_inverse(args.value, args.modulus).ok_or_else(|| CliError::NotInvertible {
        message: format!(
            "{} has no modular inverse mod {}",
            args.value, args.modulus
        ),
        hint: "The value and the modulus must share no common factor.".to_string(),
    })?;

    if ctx.quiet() {
        println!("{}", inverse);
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    print(&ui, &kv(&ui, "inverse", &inverse.to_string()));
    Ok(())
}
