//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Affine · command"
/// Plain mode: "affine command"
pub fn header(ctx: &UiContext, command: &str) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Affine", styles::bold(), ctx.color);
            format!("{} \u{00B7} {}", title, command)
        }
        OutputMode::Plain => format!("affine {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        let glyph = if ctx.unicode { "\u{2500}" } else { "-" };
        glyph.repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a warning line (badge in pretty mode, `warning=` otherwise).
pub fn warning(ctx: &UiContext, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, Badge::Warn, message)
    } else {
        format!("warning={}", message)
    }
}

/// Render a two-column parameter table.
///
/// Pretty mode: bordered table with highlighted values
/// Plain mode: one `name=value` line per row
pub fn params_table(ctx: &UiContext, rows: &[(&str, String)]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|(name, value)| kv(ctx, name, value))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Parameter", "Value"]);

    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(styled(value, styles::value(), ctx.color)),
        ]);
    }

    table.to_string()
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
/// JSON mode: one `{"error": ..., "hint": ...}` object
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    if ctx.mode.is_json() {
        return serde_json::json!({ "error": message, "hint": error_hint }).to_string();
    }

    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(header(&plain_ctx(), "solve"), "affine solve");
        let h = header(&pretty_ctx(), "solve");
        assert!(h.contains("Affine"));
        assert!(h.contains("solve"));
    }

    #[test]
    fn test_kv_plain() {
        assert_eq!(kv(&plain_ctx(), "Plaintext", "GOUDA"), "plaintext=GOUDA");
        assert_eq!(kv(&plain_ctx(), "Sample Check", "ok"), "sample_check=ok");
    }

    #[test]
    fn test_kv_pretty() {
        let line = kv(&pretty_ctx(), "Plaintext", "GOUDA");
        assert_eq!(line, "Plaintext: GOUDA");
    }

    #[test]
    fn test_params_table_plain() {
        let rows = [("a", "23".to_string()), ("b", "7".to_string())];
        assert_eq!(params_table(&plain_ctx(), &rows), "a=23\nb=7");
    }

    #[test]
    fn test_params_table_pretty() {
        let rows = [("a", "23".to_string()), ("b", "7".to_string())];
        let t = params_table(&pretty_ctx(), &rows);
        assert!(t.contains("Parameter"));
        assert!(t.contains("23"));
        assert!(t.contains('7'));
    }

    #[test]
    fn test_divider() {
        assert_eq!(divider(&plain_ctx()), "---");
        assert_eq!(divider(&pretty_ctx()).chars().count(), 60);
    }

    #[test]
    fn test_warning() {
        assert_eq!(warning(&plain_ctx(), "odd"), "warning=odd");
        assert!(warning(&pretty_ctx(), "odd").contains("odd"));
    }

    #[test]
    fn test_error_message_plain() {
        let msg = error_message(&plain_ctx(), "bad", Some("try again"));
        assert_eq!(msg, "error=bad\nhint=try again");
    }

    #[test]
    fn test_error_message_json() {
        let ctx = UiContext {
            mode: OutputMode::Json,
            ..plain_ctx()
        };
        let msg = error_message(&ctx, "bad", Some("try again"));
        let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
        assert_eq!(value["error"], "bad");
        assert_eq!(value["hint"], "try again");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "bad", None);
        assert!(msg.contains("[\u{2717}]"));
        assert!(msg.contains("bad"));
    }
}
