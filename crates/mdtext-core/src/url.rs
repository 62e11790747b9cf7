//! Link target extraction and the link activation boundary.

use std::sync::OnceLock;

use regex::Regex;

use crate::merge::RenderedUnit;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:[a-z][a-z0-9+.\-]*://|www\.|mailto:)[^\s<>()\[\]"'`]+"#)
            .expect("url pattern is valid")
    })
}

/// Finds the first URL-looking substring of `text`.
///
/// The pattern is deliberately loose and runs on the raw segment text, so
/// it finds the target of `[label](target)` and `<target>` alike. Trailing
/// sentence punctuation is not part of the URL.
pub fn extract_url(text: &str) -> Option<&str> {
    let found = url_regex().find(text)?.as_str();
    let trimmed = found.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Whether `url` is worth handing to a [`LinkHandler`].
pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && url_regex().find(url).is_some_and(|m| m.start() == 0)
}

/// Host callback invoked when the user activates a link.
///
/// The engine never calls this itself; renderers do, through
/// [`activate_link`].
pub trait LinkHandler {
    fn activate(&self, url: &str);
}

impl<F> LinkHandler for F
where
    F: Fn(&str),
{
    fn activate(&self, url: &str) {
        self(url)
    }
}

/// Forwards a link unit's URL to `handler`.
///
/// Returns whether the handler was called. Non-link units and links whose
/// URL is empty or malformed are ignored.
pub fn activate_link(handler: &dyn LinkHandler, unit: &RenderedUnit) -> bool {
    match unit.url() {
        Some(url) if is_valid_url(url) => {
            handler.activate(url);
            true
        }
        Some(url) => {
            log::debug!("Ignoring activation of invalid link target {:?}", url);
            false
        }
        None => false,
    }
}
