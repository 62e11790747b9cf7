//! Turning a segment's rule stack into display text, style and kind.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule_set::ids;
use crate::segmenter::Segment;
use crate::style::Style;
use crate::url::extract_url;

/// How rule templates strip markers from a segment's text.
///
/// Segments deep in a nest carry several rules. Under `FirstRule` only the
/// oldest non-identity rule rewrites the text and later rules contribute
/// style alone, so a bold link shows its brackets because the bold pattern
/// does not match the inner `[label](url)` span. `EveryRule` runs each
/// rule's template in stack order on the progressively stripped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DisplayTextPolicy {
    #[default]
    FirstRule,
    EveryRule,
}

/// Semantic classification of a resolved segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SegmentKind {
    Plain,
    InlineCode,
    Link,
}

/// A segment after style and kind resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSegment {
    pub display_text: String,
    pub style: Style,
    pub kind: SegmentKind,
    /// Link target; `Some` only for links, and empty when the segment
    /// holds nothing that looks like a URL.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    policy: DisplayTextPolicy,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DisplayTextPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DisplayTextPolicy {
        self.policy
    }

    pub fn resolve(&self, segment: &Segment<'_>) -> TypedSegment {
        let raw = segment.text();
        let mut applicable = segment.applicable_rules().peekable();

        let Some(first) = applicable.peek().copied() else {
            return TypedSegment {
                display_text: raw.to_string(),
                style: Style::default(),
                kind: SegmentKind::Plain,
                url: None,
            };
        };

        let display_text = match self.policy {
            DisplayTextPolicy::FirstRule => first.strip(raw).into_owned(),
            DisplayTextPolicy::EveryRule => {
                let mut text = raw.to_string();
                for rule in segment.applicable_rules() {
                    text = rule.strip(&text).into_owned();
                }
                text
            }
        };
        let style = applicable.fold(Style::default(), |style, rule| rule.apply_style(style));

        let kind = classify(segment);
        let url = (kind == SegmentKind::Link)
            .then(|| extract_url(raw).unwrap_or_default().to_string());

        TypedSegment {
            display_text,
            style,
            kind,
            url,
        }
    }
}

/// Resolves with the default [`DisplayTextPolicy`].
pub fn resolve(segment: &Segment<'_>) -> TypedSegment {
    Resolver::default().resolve(segment)
}

/// Links win over inline code when a span carries both.
fn classify(segment: &Segment<'_>) -> SegmentKind {
    if segment.has_rule(ids::LINK) || segment.has_rule(ids::HYPERLINK) {
        SegmentKind::Link
    } else if segment.has_rule(ids::CODE) {
        SegmentKind::InlineCode
    } else {
        SegmentKind::Plain
    }
}
