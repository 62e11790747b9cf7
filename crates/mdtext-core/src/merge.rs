//! Final render units and the pass that coalesces plain runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resolver::{SegmentKind, TypedSegment};
use crate::style::Style;

/// One item of the final render list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum RenderedUnit {
    PlainText { text: String, style: Style },
    InlineCode { text: String, style: Style },
    Link { text: String, style: Style, url: String },
}

impl RenderedUnit {
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text, .. } | Self::InlineCode { text, .. } | Self::Link { text, .. } => {
                text
            }
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::PlainText { style, .. }
            | Self::InlineCode { style, .. }
            | Self::Link { style, .. } => *style,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::PlainText { .. })
    }
}

impl From<TypedSegment> for RenderedUnit {
    fn from(segment: TypedSegment) -> Self {
        let TypedSegment {
            display_text: text,
            style,
            kind,
            url,
        } = segment;
        match kind {
            SegmentKind::Plain => Self::PlainText { text, style },
            SegmentKind::InlineCode => Self::InlineCode { text, style },
            SegmentKind::Link => Self::Link {
                text,
                style,
                url: url.unwrap_or_default(),
            },
        }
    }
}

/// Converts resolved segments to render units, joining adjacent plain runs.
pub fn merge<I>(segments: I) -> Vec<RenderedUnit>
where
    I: IntoIterator<Item = TypedSegment>,
{
    merge_units(segments.into_iter().map(RenderedUnit::from))
}

/// Joins consecutive plain-text units that share a style.
///
/// Plain runs with differing styles stay apart so no style is lost. Code
/// and link units are never joined, not even with each other. Empty plain
/// runs are dropped. The output is a fixed point: merging it again
/// changes nothing.
pub fn merge_units<I>(units: I) -> Vec<RenderedUnit>
where
    I: IntoIterator<Item = RenderedUnit>,
{
    let mut out: Vec<RenderedUnit> = Vec::new();
    for unit in units {
        if let RenderedUnit::PlainText { text, style } = &unit {
            if text.is_empty() {
                continue;
            }
            if let Some(RenderedUnit::PlainText {
                text: last_text,
                style: last_style,
            }) = out.last_mut()
                && last_style == style
            {
                last_text.push_str(text);
                continue;
            }
        }
        out.push(unit);
    }
    out
}
