//! A single pattern-based inline rule.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::style::{Style, StyleOp};

/// Errors raised while building rules or rule sets.
#[derive(Debug, Clone)]
pub enum RuleError {
    /// The rule's pattern does not compile.
    InvalidPattern { id: String, source: regex::Error },
    /// Two rules in one set share an identifier.
    DuplicateId(String),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { id, source } => {
                write!(f, "invalid pattern for rule '{}': {}", id, source)
            }
            Self::DuplicateId(id) => write!(f, "duplicate rule id '{}'", id),
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

/// One inline construct: a pattern, the template that extracts its
/// payload, and the style applied to matched text.
///
/// The template uses the `regex` replacement syntax (`$1`, `${name}`).
/// A rule with an empty pattern never matches; that is the identity rule
/// every segment starts with.
#[derive(Clone)]
pub struct Rule {
    id: String,
    pattern: String,
    template: String,
    style: Vec<StyleOp>,
    regex: Option<Regex>,
}

impl Rule {
    /// Builds a rule, treating an invalid pattern as one that never matches.
    pub fn new(
        id: impl Into<String>,
        pattern: impl Into<String>,
        template: impl Into<String>,
        style: Vec<StyleOp>,
    ) -> Self {
        let id = id.into();
        let pattern = pattern.into();
        let regex = match compile(&pattern) {
            Ok(regex) => regex,
            Err(err) => {
                log::warn!("Rule '{}' will never match: {}", id, err);
                None
            }
        };
        Self {
            id,
            pattern,
            template: template.into(),
            style,
            regex,
        }
    }

    /// Builds a rule, reporting an invalid pattern instead of disabling it.
    pub fn try_new(
        id: impl Into<String>,
        pattern: impl Into<String>,
        template: impl Into<String>,
        style: Vec<StyleOp>,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        let pattern = pattern.into();
        let regex =
            compile(&pattern).map_err(|source| RuleError::InvalidPattern {
                id: id.clone(),
                source,
            })?;
        Ok(Self {
            id,
            pattern,
            template: template.into(),
            style,
            regex,
        })
    }

    /// The shared identity rule.
    pub fn identity() -> &'static Rule {
        static IDENTITY: OnceLock<Rule> = OnceLock::new();
        IDENTITY.get_or_init(|| Rule::new("identity", "", "", Vec::new()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn style_ops(&self) -> &[StyleOp] {
        &self.style
    }

    pub fn is_identity(&self) -> bool {
        self == Rule::identity()
    }

    /// Whether the pattern compiled. Identity and broken rules never match.
    pub fn can_match(&self) -> bool {
        self.regex.is_some()
    }

    /// Byte ranges of every non-empty match in `text`, left to right.
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };
        regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect()
    }

    /// Replaces every match in `text` with the payload template.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.regex {
            Some(regex) => regex.replace_all(text, self.template.as_str()),
            None => Cow::Borrowed(text),
        }
    }

    pub fn apply_style(&self, style: Style) -> Style {
        style.with_ops(&self.style)
    }
}

fn compile(pattern: &str) -> Result<Option<Regex>, regex::Error> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern).map(Some)
}

/// Rules are interchangeable when pattern and template agree, whatever
/// their ids.
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.template == other.template
    }
}

impl Eq for Rule {}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .field("template", &self.template)
            .field("style", &self.style)
            .finish()
    }
}
