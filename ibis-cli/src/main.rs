//! ibis CLI
//!
//! A debugging front end for the ibis parser: dump the document tree, the
//! raw event trace, or the markup reconstructed from the event stream.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;

use ibis_dom::{Attributes, print_tree};
use ibis_xml::{EchoHandler, Handler, ParseError, Tokenizer, parse_document};

#[derive(Parser)]
#[command(name = "ibis", about = "Permissive XML/HTML parser debug tool")]
struct Args {
    /// Markup file to parse
    input: Option<PathBuf>,

    /// Inline markup source instead of a file
    #[arg(long)]
    markup: Option<String>,

    /// Print the raw tokenizer event trace instead of the tree
    #[arg(long)]
    events: bool,

    /// Echo the markup reconstructed from the event stream
    #[arg(long)]
    echo: bool,
}

/// Prints one colored line per tokenizer event.
struct TraceHandler;

fn format_attrs(attrs: &Attributes) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Handler for TraceHandler {
    fn processing_instruction(&mut self, name: &str, attrs: &Attributes) -> Result<(), ParseError> {
        println!("{}: {} {}", "pi".cyan(), name, format_attrs(attrs));
        Ok(())
    }

    fn open(&mut self, tag: &str, attrs: &Attributes) -> Result<(), ParseError> {
        println!("{}: {} {}", "open".green(), tag, format_attrs(attrs));
        Ok(())
    }

    fn empty(&mut self, tag: &str, attrs: &Attributes) -> Result<(), ParseError> {
        println!("{}: {} {}", "empty".green(), tag, format_attrs(attrs));
        Ok(())
    }

    fn close(&mut self, tag: &str) -> Result<(), ParseError> {
        println!("{}: {}", "close".red(), tag);
        Ok(())
    }

    fn text(&mut self, content: &str) -> Result<(), ParseError> {
        println!("text: {content:?}");
        Ok(())
    }

    fn cdata(&mut self, content: &str) -> Result<(), ParseError> {
        println!("{}: {content:?}", "cdata".magenta());
        Ok(())
    }

    fn doctype(&mut self, content: &str) -> Result<(), ParseError> {
        println!("{}: {content:?}", "doctype".yellow());
        Ok(())
    }

    fn comment(&mut self, content: &str) -> Result<(), ParseError> {
        println!("{}: {content:?}", "comment".blue());
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = if let Some(markup) = args.markup {
        markup
    } else if let Some(path) = &args.input {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        bail!("provide a markup file or --markup '<a>...</a>'");
    };

    if args.events {
        let mut tokenizer = Tokenizer::new();
        tokenizer.parse_str(&source, &mut TraceHandler)?;
    } else if args.echo {
        let stdout = io::stdout();
        let mut echo = EchoHandler::new(stdout.lock());
        let mut tokenizer = Tokenizer::new();
        tokenizer.parse_str(&source, &mut echo)?;
        let mut out = echo.into_inner();
        writeln!(out)?;
    } else {
        let tree = parse_document(&source).context("parsing document")?;
        println!("=== Document Tree ===");
        print_tree(&tree, tree.root(), 0);
    }

    Ok(())
}
