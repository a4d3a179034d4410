use clap::Parser;
use is_terminal::IsTerminal;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prompt-builder")]
#[command(version)]
#[command(about = "Build a prompt by filling in a template from a categorized library")]
#[command(long_about = "
prompt-builder asks what you would like to do, suggests a template category,
lets you pick a template, and then asks one question for every {{placeholder}}
in it. The filled-in prompt is printed at the end.

Templates live in <templates-dir>/<category>/<name>.txt.

Exit codes:
  0 - Prompt produced
  1 - No categories found
  2 - No templates in the chosen category
  3 - Error (missing template directory, unreadable template, closed input,
      retries exhausted)

Example usage:
  prompt-builder                          # Use ./templates
  prompt-builder -t ~/my-templates        # Use another template library
  prompt-builder --max-attempts 3         # Stop after three invalid choices
")]
pub struct Cli {
    /// Directory containing one subdirectory per category, relative to the
    /// working directory (default: ./templates)
    #[arg(short, long, value_name = "DIR", default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Give up after this many invalid menu choices (default: keep asking)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Print only the final prompt, without the banner
    #[arg(long)]
    pub raw: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn is_interactive() -> bool {
        io::stdin().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}
