use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdtext")]
#[command(author, version)]
#[command(about = "Render inline Markdown as styled terminal text")]
#[command(
    long_about = "mdtext renders a constrained subset of inline Markdown (headers, bold, italic, \
    inline code, bracket links and <hyperlinks>) as styled text runs. Rules are applied in a \
    fixed order and nest, so a link inside bold text is both bold and a link."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to the terminal
    mdtext render notes.md

    # Render from stdin
    echo '**hello** [world](https://example.com)' | mdtext render

    # Emit the render units as JSON
    mdtext render --format json notes.md

    # Show how the input was segmented
    mdtext parse notes.md

CONFIGURATION:

mdtext looks for configuration files in this order:
  1. Explicit --config path
  2. mdtext.toml or .mdtext.toml in current/parent directories
  3. ~/.config/mdtext/config.toml (XDG)
  4. Built-in defaults

Example .mdtext.toml:

    display_text = \"every-rule\"

    [[rule]]
    id = \"strike\"
    pattern = '~~(.+?)~~'
    template = \"$1\"
    style = [\"italic\"]")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdtext will \
        search for .mdtext.toml or mdtext.toml in the current directory and its parents, \
        then fall back to ~/.config/mdtext/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled with ANSI escape codes
    Ansi,
    /// Display text only
    Plain,
    /// Render units as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render inline Markdown as styled text
    #[command(
        long_about = "Render inline Markdown as styled text runs. Markers are stripped, styles \
        are applied with ANSI escape codes and links are followed by their target."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to the terminal
    mdtext render notes.md

    # Plain display text, no escape codes
    mdtext render --format plain notes.md

    # JSON render units for another renderer
    echo '# Title' | mdtext render --format json")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Ansi)]
        format: OutputFormat,
    },
    /// Show the segments and rule stacks for debugging
    #[command(
        long_about = "Segment a document and print every leaf segment with its byte range, \
        the stack of rules that matched it and its raw text. Useful for understanding how \
        rules nest."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
