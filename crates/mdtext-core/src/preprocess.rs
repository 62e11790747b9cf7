//! Input shaping applied before segmentation.

use std::borrow::Cow;

/// Pads header markers at the start of a line with a leading space.
///
/// Every `\n#` becomes `\n #`, and input opening with a header marker (a
/// `#` run followed by a space or tab) gets a space in front. A leading
/// hashtag such as `#tag` is left alone. The built-in header rules anchor
/// on that space, which keeps a `#` run from being confused with the
/// marker characters other rules look for.
pub fn normalize_headers(input: &str) -> Cow<'_, str> {
    let pad_start = starts_with_header_marker(input);
    if !pad_start && !input.contains("\n#") {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    if pad_start {
        out.push(' ');
    }
    out.push_str(&input.replace("\n#", "\n #"));
    Cow::Owned(out)
}

fn starts_with_header_marker(input: &str) -> bool {
    input.starts_with('#')
        && input
            .trim_start_matches('#')
            .starts_with([' ', '\t'])
}
