pub mod config;
pub mod terminal;

pub use config::Config;
pub use config::ConfigBuilder;
pub use mdtext_core::{
    Color, DisplayTextPolicy, Engine, FontLevel, LinkHandler, RenderedUnit, Rule, RuleError,
    RuleSet, Segment, SegmentKind, Style, StyleOp, activate_link,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders an inline Markdown string into styled runs and links.
///
/// # Examples
///
/// ```no_run
/// use mdtext::render;
///
/// let cfg = mdtext::ConfigBuilder::default().preprocess(true).build();
/// let units = render("# Title with **bold**", Some(cfg)).unwrap();
/// ```
///
/// # Arguments
///
/// * `input` - The inline Markdown to render
/// * `config` - Optional configuration (defaults to the built-in rules)
pub fn render(input: &str, config: Option<Config>) -> Result<Vec<RenderedUnit>, RuleError> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let engine = match config {
        Some(cfg) => cfg.engine()?,
        None => Engine::default(),
    };
    Ok(engine.render(input))
}

/// Segments an inline Markdown string and describes every leaf segment.
///
/// Each line holds the segment's byte range in the preprocessed input, its
/// rule stack and its raw text. Useful for seeing how rules nested.
pub fn parse(input: &str, config: Option<Config>) -> Result<Vec<String>, RuleError> {
    let engine = config.unwrap_or_default().engine()?;
    let text = engine.prepare(input);
    Ok(engine
        .segment(&text)
        .iter()
        .map(|segment| segment.to_string())
        .collect())
}
