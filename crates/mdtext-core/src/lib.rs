//! Rule-driven segmentation of inline Markdown into styled runs and links.
//!
//! The pipeline is: [`normalize_headers`] → [`segment`] (fold a
//! [`RuleSet`] over the text) → [`Resolver`] (style, kind and display
//! text per segment) → [`merge`] (join adjacent plain runs). [`Engine`]
//! wires the stages together.
//!
//! ```rust
//! use mdtext_core::{Engine, RenderedUnit};
//!
//! let units = Engine::default().render("see [docs](https://example.com) now");
//! assert_eq!(units.len(), 3);
//! assert!(matches!(&units[1], RenderedUnit::Link { url, .. } if url == "https://example.com"));
//! ```

pub mod engine;
pub mod merge;
pub mod preprocess;
pub mod resolver;
pub mod rule;
pub mod rule_set;
pub mod segmenter;
pub mod style;
pub mod url;

pub use engine::Engine;
pub use merge::{RenderedUnit, merge, merge_units};
pub use preprocess::normalize_headers;
pub use resolver::{DisplayTextPolicy, Resolver, SegmentKind, TypedSegment, resolve};
pub use rule::{Rule, RuleError};
pub use rule_set::{RuleSet, ids};
pub use segmenter::{Segment, segment};
pub use style::{Color, FontLevel, Style, StyleOp};
pub use url::{LinkHandler, activate_link, extract_url, is_valid_url};

/// Renders `input` with the built-in rules and default settings.
pub fn render(input: &str) -> Vec<RenderedUnit> {
    Engine::default().render(input)
}
