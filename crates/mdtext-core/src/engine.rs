//! The full pipeline from raw text to render units.

use std::borrow::Cow;

use crate::merge::{RenderedUnit, merge};
use crate::preprocess::normalize_headers;
use crate::resolver::{DisplayTextPolicy, Resolver, TypedSegment};
use crate::rule_set::RuleSet;
use crate::segmenter::{Segment, segment};

/// A configured pipeline: rule set, display text policy and preprocessing.
///
/// Rendering is a pure function of the input. An engine holds no state
/// between calls and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RuleSet,
    resolver: Resolver,
    preprocess: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl Engine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            resolver: Resolver::default(),
            preprocess: true,
        }
    }

    pub fn with_policy(mut self, policy: DisplayTextPolicy) -> Self {
        self.resolver = Resolver::with_policy(policy);
        self
    }

    /// Enables or disables header padding before segmentation.
    pub fn with_preprocess(mut self, enabled: bool) -> Self {
        self.preprocess = enabled;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn policy(&self) -> DisplayTextPolicy {
        self.resolver.policy()
    }

    /// The text segmentation actually runs on.
    pub fn prepare<'t>(&self, input: &'t str) -> Cow<'t, str> {
        if self.preprocess {
            normalize_headers(input)
        } else {
            Cow::Borrowed(input)
        }
    }

    /// Leaf segments of already prepared `text`.
    pub fn segment<'a>(&'a self, text: &'a str) -> Vec<Segment<'a>> {
        segment(text, &self.rules)
    }

    pub fn resolve(&self, text: &str) -> Vec<TypedSegment> {
        self.segment(text)
            .iter()
            .map(|s| self.resolver.resolve(s))
            .collect()
    }

    /// Renders `input` into its final ordered units.
    pub fn render(&self, input: &str) -> Vec<RenderedUnit> {
        let text = self.prepare(input);
        let typed = self.resolve(&text);
        log::debug!(
            "Resolved {} segment(s) from {} byte(s) of input",
            typed.len(),
            text.len()
        );
        let units = merge(typed);
        log::debug!("Merged into {} unit(s)", units.len());
        units
    }
}
