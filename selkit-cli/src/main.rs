//! selkit CLI - build CSS selectors from JSON descriptions
//!
//! Usage:
//!   selkit <file>              Build the selector described in a JSON file
//!   selkit --json '<json>'     Build from an inline JSON description
//!   selkit <file> --tree       Also show the selector structure

mod spec;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_css::ComplexSelector;

use spec::SelectorSpec;

/// selkit — build canonical CSS selector strings
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build from a file
    selkit selector.json

    # Build inline
    selkit --json '{"fragments": [{"element": "a"}, {"id": "main"}, {"class": "x"}]}'

    # Show the structure
    selkit --tree --json '{"combine": [{"fragments": [{"element": "ul"}]}, ">", {"fragments": [{"element": "li"}]}]}'
"#)]
struct Cli {
    /// Path to a JSON selector description
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Inline JSON selector description instead of a file
    #[arg(long, value_name = "JSON", conflicts_with = "path")]
    json: Option<String>,

    /// Print the fragment and combinator tree before the selector
    #[arg(short, long)]
    tree: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = load_source(cli)?;
    let selector = SelectorSpec::parse(&source)?
        .build()
        .context("invalid selector")?;

    if cli.tree {
        println!("{}", "=== Selector Tree ===".bold());
        print_tree(&selector, 0);
        println!();
    }

    println!("{}", selector.stringify().green());
    Ok(())
}

/// Read the description from `--json` or the file argument
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref json) = cli.json {
        Ok(json.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
    } else {
        bail!("no input file or --json provided (see --help)")
    }
}

fn print_tree(selector: &ComplexSelector, depth: usize) {
    let indent = "  ".repeat(depth);

    match selector {
        ComplexSelector::Compound(compound) => {
            println!("{indent}{} {}", "compound".cyan(), compound.stringify());
            for fragment in compound.fragments() {
                let kind = format!("{:<14}", fragment.kind());
                println!("{indent}  {} {}", kind.dimmed(), fragment.value());
            }
        }
        ComplexSelector::Combined(combined) => {
            println!(
                "{indent}{} {:?}",
                "combinator".yellow(),
                combined.combinator().symbol()
            );
            print_tree(combined.left(), depth + 1);
            print_tree(combined.right(), depth + 1);
        }
    }
}
