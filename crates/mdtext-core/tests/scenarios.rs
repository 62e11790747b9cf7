//! End-to-end rendering of the documented inline Markdown scenarios.

use mdtext_core::{
    Color, DisplayTextPolicy, Engine, FontLevel, RenderedUnit, Style, render,
};
use similar_asserts::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn plain(text: &str) -> RenderedUnit {
    RenderedUnit::PlainText {
        text: text.to_string(),
        style: Style::default(),
    }
}

fn styled(text: &str, style: Style) -> RenderedUnit {
    RenderedUnit::PlainText {
        text: text.to_string(),
        style,
    }
}

fn bold() -> Style {
    Style {
        bold: true,
        ..Style::default()
    }
}

fn blue() -> Style {
    Style {
        color: Color::Blue,
        ..Style::default()
    }
}

#[test]
fn header_at_input_start() {
    init_logger();
    let units = render("# Title");
    assert_eq!(
        units,
        vec![styled(
            "Title",
            Style {
                bold: true,
                font: FontLevel::LargeTitle,
                ..Style::default()
            }
        )]
    );
}

#[test]
fn header_levels_on_later_lines() {
    init_logger();
    let units = render("intro\n## Section\n### Detail");
    let texts: Vec<&str> = units.iter().map(RenderedUnit::text).collect();
    assert_eq!(texts, vec!["intro\n", "Section", "\n", "Detail"]);
    assert_eq!(units[1].style().font, FontLevel::Title);
    assert_eq!(units[3].style().font, FontLevel::Headline);
    assert!(units[2].style().is_default());
}

#[test]
fn bracket_link_between_plain_runs() {
    init_logger();
    let units = render("see [Wikipedia](https://en.wikipedia.org/wiki/Markdown) now");
    assert_eq!(
        units,
        vec![
            plain("see "),
            RenderedUnit::Link {
                text: "Wikipedia".to_string(),
                style: blue(),
                url: "https://en.wikipedia.org/wiki/Markdown".to_string(),
            },
            plain(" now"),
        ]
    );
}

#[test]
fn bold_then_italic() {
    init_logger();
    let units = render("**bold** and _italic_");
    assert_eq!(
        units,
        vec![
            styled("bold", bold()),
            plain(" and"),
            styled(
                " italic",
                Style {
                    italic: true,
                    ..Style::default()
                }
            ),
        ]
    );
}

#[test]
fn plain_text_passes_through() {
    init_logger();
    assert_eq!(render("just plain text"), vec![plain("just plain text")]);
}

#[test]
fn link_nested_in_bold_stacks_both_rules() {
    init_logger();
    let units = render("**[label](http://x.test)**");
    // Only the bold pattern strips text, and it does not match the inner span.
    assert_eq!(
        units,
        vec![
            styled("**", bold()),
            RenderedUnit::Link {
                text: "[label](http://x.test)".to_string(),
                style: Style {
                    bold: true,
                    color: Color::Blue,
                    ..Style::default()
                },
                url: "http://x.test".to_string(),
            },
            styled("**", bold()),
        ]
    );
}

#[test]
fn link_nested_in_bold_with_every_rule_policy() {
    init_logger();
    let engine = Engine::default().with_policy(DisplayTextPolicy::EveryRule);
    let units = engine.render("**[label](http://x.test)**");
    assert_eq!(
        units,
        vec![
            styled("**", bold()),
            RenderedUnit::Link {
                text: "label".to_string(),
                style: Style {
                    bold: true,
                    color: Color::Blue,
                    ..Style::default()
                },
                url: "http://x.test".to_string(),
            },
            styled("**", bold()),
        ]
    );
}

// Bold runs before links, so emphasis markers inside a bracket link split
// it before the link rule sees it and no link unit is produced.
#[test]
fn bold_inside_link_label_breaks_the_link() {
    init_logger();
    let units = render("[**b**](http://x.test)");
    assert_eq!(
        units,
        vec![
            plain("["),
            styled("b", bold()),
            plain("](http://x.test)"),
        ]
    );
}

#[test]
fn double_underscore_in_link_target_breaks_the_link() {
    init_logger();
    let units = render("[docs](https://x.test/__init__.py)");
    assert_eq!(
        units,
        vec![
            plain("[docs](https://x.test/"),
            styled("init", bold()),
            plain(".py)"),
        ]
    );
}

#[test]
fn leading_hashtag_is_not_padded() {
    init_logger();
    assert_eq!(render("#tag at start"), vec![plain("#tag at start")]);
}

#[test]
fn angle_bracket_hyperlink() {
    init_logger();
    let units = render("visit <https://www.example.com/> today");
    assert_eq!(
        units,
        vec![
            plain("visit "),
            RenderedUnit::Link {
                text: "https://www.example.com/".to_string(),
                style: blue(),
                url: "https://www.example.com/".to_string(),
            },
            plain(" today"),
        ]
    );
}

#[test]
fn inline_code_is_its_own_unit() {
    init_logger();
    let units = render("run `cargo test` twice");
    assert_eq!(
        units,
        vec![
            plain("run "),
            RenderedUnit::InlineCode {
                text: "cargo test".to_string(),
                style: Style::default(),
            },
            plain(" twice"),
        ]
    );
}

#[test]
fn unterminated_markers_stay_literal() {
    init_logger();
    let input = "**bold without end and [label](";
    assert_eq!(render(input), vec![plain(input)]);
}

#[test]
fn non_ascii_text_keeps_boundaries() {
    init_logger();
    let units = render("Grüße **schön** und [日本](https://例え.jp) 😀");
    let texts: Vec<&str> = units.iter().map(RenderedUnit::text).collect();
    assert_eq!(texts, vec!["Grüße ", "schön", " und ", "日本", " 😀"]);
    assert_eq!(units[3].url(), Some("https://例え.jp"));
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render("").is_empty());
}
