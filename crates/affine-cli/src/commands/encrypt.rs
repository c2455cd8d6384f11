use affine_core::{normalize, AffineKey};

use crate::app::AppContext;
use crate::cli::EncryptArgs;
use crate::ui::{header, kv, print};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let key = AffineKey::checked(args.a, args.b)?;
    let ciphertext = key.encrypt(&normalize(&args.text));

    let ui = ctx.ui_context(false, None);
    if ctx.quiet() {
        println!("{}", ciphertext);
        return Ok(());
    }

    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "encrypt"));
        print(&ui, &kv(&ui, "Key", &key.to_string()));
    }
    print(&ui, &kv(&ui, "ciphertext", &ciphertext));
    Ok(())
}
