//! Style values computed by the engine and the operations that build them.
//!
//! The engine never applies a style to pixels. It only decides which
//! attributes are on for a run and hands the resulting [`Style`] to a
//! renderer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative font size of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FontLevel {
    #[default]
    Body,
    Headline,
    Title,
    LargeTitle,
}

/// Foreground color of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Color {
    #[default]
    Default,
    Blue,
}

/// Accumulated style of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub font: FontLevel,
    pub color: Color,
}

impl Style {
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Applies `ops` in order, each on top of the previous result.
    pub fn with_ops(self, ops: &[StyleOp]) -> Style {
        ops.iter().fold(self, |style, op| op.apply(style))
    }
}

/// A single style transform.
///
/// Rules carry a list of these instead of closures so a rule stays plain
/// data that can be compared, cloned, and read from configuration. In
/// TOML they are written as `"bold"`, `"italic"`, `{ font = "headline" }`
/// or `{ color = "blue" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StyleOp {
    Bold,
    Italic,
    Font(FontLevel),
    Color(Color),
}

impl StyleOp {
    pub fn apply(self, style: Style) -> Style {
        match self {
            StyleOp::Bold => Style {
                bold: true,
                ..style
            },
            StyleOp::Italic => Style {
                italic: true,
                ..style
            },
            StyleOp::Font(font) => Style { font, ..style },
            StyleOp::Color(color) => Style { color, ..style },
        }
    }
}
