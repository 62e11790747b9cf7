//! Terminal renderer for render units.
//!
//! This is the visual side the engine leaves to its host: it maps each
//! unit's [`Style`] to SGR escape codes. Links are underlined and followed
//! by their target when it differs from the label.

use mdtext_core::{Color, FontLevel, RenderedUnit, Style, is_valid_url};

const RESET: &str = "\x1b[0m";

fn sgr_codes(style: Style, link: bool, code: bool) -> Vec<&'static str> {
    let mut codes = Vec::new();
    if style.bold {
        codes.push("1");
    }
    if code {
        codes.push("2");
    }
    if style.italic {
        codes.push("3");
    }
    if link || matches!(style.font, FontLevel::LargeTitle | FontLevel::Title) {
        codes.push("4");
    }
    if style.color == Color::Blue {
        codes.push("34");
    }
    codes
}

fn push_styled(out: &mut String, text: &str, codes: &[&str]) {
    if codes.is_empty() {
        out.push_str(text);
        return;
    }
    out.push_str(&format!("\x1b[{}m", codes.join(";")));
    out.push_str(text);
    out.push_str(RESET);
}

/// Renders units with ANSI escape codes.
pub fn render_ansi(units: &[RenderedUnit]) -> String {
    let mut out = String::new();
    for unit in units {
        match unit {
            RenderedUnit::PlainText { text, style } => {
                push_styled(&mut out, text, &sgr_codes(*style, false, false));
            }
            RenderedUnit::InlineCode { text, style } => {
                push_styled(&mut out, text, &sgr_codes(*style, false, true));
            }
            RenderedUnit::Link { text, style, url } => {
                push_styled(&mut out, text, &sgr_codes(*style, true, false));
                if is_valid_url(url) && url != text {
                    push_styled(&mut out, &format!(" <{url}>"), &["2"]);
                }
            }
        }
    }
    out
}

/// Renders the display text of every unit with no styling.
pub fn render_plain(units: &[RenderedUnit]) -> String {
    units.iter().map(RenderedUnit::text).collect()
}
