//! Ordered rule lists and the built-in inline rule set.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::rule::{Rule, RuleError};
use crate::style::{Color, FontLevel, StyleOp};

/// Identifiers of the built-in rules.
///
/// Segment classification looks rules up by these ids, so a custom rule
/// that reuses `LINK`, `HYPERLINK` or `CODE` gets link or code semantics.
pub mod ids {
    pub const HEADER1: &str = "header1";
    pub const HEADER2: &str = "header2";
    pub const HEADER3: &str = "header3";
    pub const CODE: &str = "code";
    pub const BOLD: &str = "bold";
    pub const ITALIC: &str = "italic";
    pub const LINK: &str = "link";
    pub const HYPERLINK: &str = "hyperlink";
}

/// An ordered, immutable list of rules.
///
/// Each rule is applied only after every earlier rule has subdivided the
/// text, so order decides how constructs nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set, rejecting duplicate ids.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id()) {
                return Err(RuleError::DuplicateId(rule.id().to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// The built-in rules in application order: headers, inline code,
    /// bold, italic, bracket links, angle-bracket hyperlinks.
    ///
    /// Header patterns expect the padding added by
    /// [`normalize_headers`](crate::preprocess::normalize_headers): a
    /// space at the start of the line before the `#` run.
    pub fn builtin() -> Self {
        let rules = vec![
            Rule::new(
                ids::HEADER1,
                r"(?m)^ #[ \t]+([^\n]*)",
                "$1",
                vec![StyleOp::Bold, StyleOp::Font(FontLevel::LargeTitle)],
            ),
            Rule::new(
                ids::HEADER2,
                r"(?m)^ ##[ \t]+([^\n]*)",
                "$1",
                vec![StyleOp::Bold, StyleOp::Font(FontLevel::Title)],
            ),
            Rule::new(
                ids::HEADER3,
                r"(?m)^ #{3,6}[ \t]+([^\n]*)",
                "$1",
                vec![StyleOp::Bold, StyleOp::Font(FontLevel::Headline)],
            ),
            Rule::new(ids::CODE, r"`([^`\n]+)`", "$1", Vec::new()),
            Rule::new(
                ids::BOLD,
                r"\*\*(.+?)\*\*|__(.+?)__",
                "$1$2",
                vec![StyleOp::Bold],
            ),
            // The whitespace before the marker is captured and re-emitted
            // so it survives stripping.
            Rule::new(
                ids::ITALIC,
                r"(\s)(?:\*([^*\s][^*]*?)\*|_([^_\s][^_]*?)_)",
                "$1$2$3",
                vec![StyleOp::Italic],
            ),
            Rule::new(
                ids::LINK,
                r"\[([^\[]+)\]\(([^\)]+)\)",
                "$1",
                vec![StyleOp::Color(Color::Blue)],
            ),
            Rule::new(
                ids::HYPERLINK,
                r"<((?i)https?://(?:www\.)?\S+(?:/|\b))>",
                "$1",
                vec![StyleOp::Color(Color::Blue)],
            ),
        ];
        Self { rules }
    }

    /// Process-wide copy of [`RuleSet::builtin`], compiled once.
    pub fn default_rules() -> &'static RuleSet {
        static DEFAULT: OnceLock<RuleSet> = OnceLock::new();
        DEFAULT.get_or_init(RuleSet::builtin)
    }

    /// Appends `rule` after the existing ones.
    pub fn with_rule(mut self, rule: Rule) -> Result<Self, RuleError> {
        if self.get(rule.id()).is_some() {
            return Err(RuleError::DuplicateId(rule.id().to_string()));
        }
        self.rules.push(rule);
        Ok(self)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules().clone()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
