//! Splitting text into segments tagged with the rules that matched them.
//!
//! The pipeline starts from one segment covering the whole input and folds
//! every rule of a [`RuleSet`] over the segments produced so far. A rule
//! splits each segment into its matches (which get the rule pushed onto
//! their stack) and the unmatched gaps (which keep the parent stack), so a
//! later rule can subdivide a span an earlier rule already claimed. That is
//! how nested formatting accumulates several rules on one span.

use std::fmt;
use std::ops::Range;

use crate::rule::Rule;
use crate::rule_set::RuleSet;

/// A substring of the input and the ordered stack of rules that wrapped it.
///
/// `text` is always a slice of the input the pipeline was started on, and
/// `range` is its byte range in that input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a str,
    range: Range<usize>,
    rules: Vec<&'a Rule>,
}

impl<'a> Segment<'a> {
    /// A segment covering all of `input`, tagged with the identity rule.
    pub fn root(input: &'a str) -> Self {
        Self {
            text: input,
            range: 0..input.len(),
            rules: vec![Rule::identity()],
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Rules oldest first. The first entry is always the identity rule.
    pub fn rules(&self) -> &[&'a Rule] {
        &self.rules
    }

    /// Rules other than the identity rule, oldest first.
    pub fn applicable_rules(&self) -> impl Iterator<Item = &'a Rule> + '_ {
        self.rules.iter().copied().filter(|rule| !rule.is_identity())
    }

    pub fn has_rule(&self, id: &str) -> bool {
        self.rules.iter().any(|rule| rule.id() == id)
    }

    /// The segment's range counted in UTF-16 code units of `source`.
    ///
    /// `source` must be the text the pipeline ran on.
    pub fn utf16_range(&self, source: &str) -> Range<usize> {
        let start = source[..self.range.start].encode_utf16().count();
        start..start + self.text.encode_utf16().count()
    }

    fn child(&self, local: Range<usize>, rules: Vec<&'a Rule>) -> Self {
        Self {
            text: &self.text[local.clone()],
            range: self.range.start + local.start..self.range.start + local.end,
            rules,
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack: Vec<&str> = self.rules.iter().map(|rule| rule.id()).collect();
        write!(
            f,
            "{}..{} [{}] {:?}",
            self.range.start,
            self.range.end,
            stack.join(" > "),
            self.text
        )
    }
}

/// Splits one segment on every match of `rule`.
///
/// Matches carry the segment's stack plus `rule`; the text before, between
/// and after them keeps the segment's stack. Empty pieces are never
/// emitted, and a segment with no match comes back unchanged.
pub fn split<'a>(segment: Segment<'a>, rule: &'a Rule) -> Vec<Segment<'a>> {
    let ranges = rule.find_ranges(segment.text);
    if ranges.is_empty() {
        return vec![segment];
    }

    let mut matched_rules = segment.rules.clone();
    matched_rules.push(rule);

    let mut out = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            out.push(segment.child(cursor..range.start, segment.rules.clone()));
        }
        cursor = range.end;
        out.push(segment.child(range, matched_rules.clone()));
    }
    if cursor < segment.text.len() {
        out.push(segment.child(cursor..segment.text.len(), segment.rules.clone()));
    }
    out
}

/// Applies `rule` to every segment, preserving order.
pub fn apply<'a>(segments: Vec<Segment<'a>>, rule: &'a Rule) -> Vec<Segment<'a>> {
    if !rule.can_match() {
        return segments;
    }
    let before = segments.len();
    let out: Vec<Segment<'a>> = segments
        .into_iter()
        .flat_map(|segment| split(segment, rule))
        .collect();
    log::trace!(
        "Rule '{}' split {} segment(s) into {}",
        rule.id(),
        before,
        out.len()
    );
    out
}

/// Runs the whole rule set over `input` and returns the leaf segments.
///
/// Concatenating the `text` of the result reproduces `input`. Empty input
/// yields no segments.
pub fn segment<'a>(input: &'a str, rules: &'a RuleSet) -> Vec<Segment<'a>> {
    if input.is_empty() {
        return Vec::new();
    }
    rules
        .iter()
        .fold(vec![Segment::root(input)], |segments, rule| apply(segments, rule))
}
