//! Selkit CLI
//!
//! Build selectors and inspect shapes from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use selkit_common::warning::warn_once;
use selkit_css::{Combinator, Kind, Part, SelectorState, combine};
use selkit_objects::{Circle, Rectangle, from_json, to_json};

/// Selkit - order-checked CSS selector builder
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build one compound selector (parts in order)
    selkit build element=a attr='href$=".png"' pseudo-class=focus

    # Join two selectors
    selkit combine element=div,id=main '+' element=table,id=data

    # Rectangle area, or its JSON form
    selkit rect 10 20
    selkit rect 10 20 --json

    # Rebuild a shape from JSON (values are taken in document order)
    selkit from-json circle '{"radius":10}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind=value` parts, applied left to right
    Build {
        /// Parts such as `element=a`, `id=main`, `class=btn`, `attr=href`,
        /// `pseudo-class=hover`, `pseudo-element=after`
        #[arg(value_name = "KIND=VALUE", required = true)]
        parts: Vec<Part>,
    },

    /// Join two selectors with a combinator
    Combine {
        /// Comma-separated parts of the left selector
        left: String,
        /// Combinator text, usually one of ' ', '+', '~', '>'
        combinator: String,
        /// Comma-separated parts of the right selector
        right: String,
    },

    /// Print a rectangle's area
    Rect {
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Print the JSON form instead of the area
        #[arg(long)]
        json: bool,
    },

    /// Rebuild a shape from JSON and print it with its area
    FromJson {
        /// Shape type to construct
        #[arg(value_enum)]
        shape: ShapeKind,
        /// JSON text; values are passed to the constructor in order
        json: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShapeKind {
    Rectangle,
    Circle,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build { parts } => {
            let selector = build(&parts)?;
            println!("{selector}");
        }
        Command::Combine {
            left,
            combinator,
            right,
        } => {
            let left = build(&split_parts(&left).context("left selector")?)
                .context("left selector")?;
            let right = build(&split_parts(&right).context("right selector")?)
                .context("right selector")?;
            if Combinator::from_token(&combinator).is_none() {
                warn_once("CLI", &format!("unusual combinator '{combinator}'"));
            }
            println!("{}", combine(&left, &combinator, &right));
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            let rect = Rectangle::new(width, height);
            if json {
                println!("{}", to_json(&rect)?);
            } else {
                println!("{}", rect.area());
            }
        }
        Command::FromJson { shape, json } => match shape {
            ShapeKind::Rectangle => {
                let rect: Rectangle = from_json(&json)?;
                println!("{} area={}", to_json(&rect)?, rect.area());
            }
            ShapeKind::Circle => {
                let circle: Circle = from_json(&json)?;
                println!("{} area={}", to_json(&circle)?, circle.area());
            }
        },
    }
    Ok(())
}

fn build(parts: &[Part]) -> Result<SelectorState> {
    let selector = SelectorState::EMPTY
        .extend(parts.iter().map(|part| (part.kind, part.value.as_str())))?;
    Ok(selector)
}

/// Split a comma-separated part list. A comma only separates parts when a
/// `kind=` follows it, so values like `is(.a,.b)` stay whole.
fn split_parts(list: &str) -> Result<Vec<Part>> {
    let mut items: Vec<String> = Vec::new();
    for segment in list.split(',').filter(|segment| !segment.is_empty()) {
        let starts_part = segment
            .split_once('=')
            .is_some_and(|(kind, _)| kind.trim().parse::<Kind>().is_ok());
        if !starts_part {
            if let Some(current) = items.last_mut() {
                current.push(',');
                current.push_str(segment);
                continue;
            }
        }
        items.push(segment.to_string());
    }
    items
        .iter()
        .map(|item| item.parse::<Part>().map_err(anyhow::Error::from))
        .collect()
}
