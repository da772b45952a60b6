mod adjacency;
mod input;
mod numbers;
mod schematic;

use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use joinery::{separators::Newline, JoinableIterator};
use lazy_format::lazy_format;
use tracing_subscriber::EnvFilter;

use crate::{
    adjacency::{is_adjacent, sum_adjacent},
    input::InputSource,
    numbers::extract,
    schematic::Schematic,
};

const DEFAULT_INPUT: &str = "input";

/// Find the missing part number in an engine schematic: the sum of every
/// number that is adjacent to a symbol. Unless --string or --stdin are given,
/// the schematic is read from --file, which defaults to `input` in the
/// current directory. Set RUST_LOG to control logging, which is always
/// written to standard error.
#[derive(Parser)]
#[command(group(clap::ArgGroup::new("source")))]
struct Args {
    /// Print the parsed schematic and every number found in it to stderr
    #[arg(short = 'v', long)]
    show_input: bool,

    /// Print only the sum, without any decoration
    #[arg(short, long)]
    raw: bool,

    /// If given, read the schematic from this file
    #[arg(short, long, group = "source")]
    file: Option<PathBuf>,

    /// If given, use this as the schematic directly
    #[arg(short, long, group = "source")]
    string: Option<String>,

    /// Read the schematic from standard input
    #[arg(long, group = "source")]
    stdin: bool,
}

impl Args {
    fn source(&self) -> InputSource {
        match (&self.string, &self.file) {
            (Some(buf), _) => InputSource::Literal(buf.clone()),
            _ if self.stdin => InputSource::Stdin,
            (None, Some(file)) => InputSource::File(file.clone()),
            (None, None) => InputSource::File(PathBuf::from(DEFAULT_INPUT)),
        }
    }
}

fn show_input(schematic: &Schematic) -> anyhow::Result<()> {
    let numbers = extract(schematic)?;

    let lines = numbers.iter().map(|number| {
        let last = number.cells().last().unwrap_or(number.root);

        lazy_format!(
            "{value:>6} at row {row}, columns {first}..={last}: {adjacency}",
            value = number.value,
            row = number.root.row.0,
            first = number.root.column.0,
            last = last.column.0,
            adjacency = match is_adjacent(schematic, number) {
                true => "adjacent",
                false => "not adjacent",
            },
        )
    });

    eprintln!("Parsed input:\n{schematic}\n\nNumbers:\n{}", lines.join_with(Newline));

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Args = Args::parse();
    let source = args.source();

    tracing::debug!(?source, "loading puzzle input");

    let buf = input::load(source).context("failed to load puzzle input")?;

    let schematic = Schematic::try_from(buf.as_str()).context("failed to parse the schematic")?;

    tracing::info!(
        height = schematic.height(),
        width = schematic.width(),
        "parsed schematic"
    );

    if args.show_input {
        show_input(&schematic)?;
    }

    let sum = sum_adjacent(&schematic).context("failed to solve the schematic")?;
    tracing::info!(sum, "computed sum of adjacent numbers");

    match args.raw {
        true => println!("{sum}"),
        false => println!("A-ha! The number to help the missing part is: {sum}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::iter;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(iter::once("schematic").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_source() {
        assert_eq!(
            args(&[]).source(),
            InputSource::File(PathBuf::from(DEFAULT_INPUT))
        );
    }

    #[test]
    fn test_sources() {
        assert_eq!(
            args(&["--file", "schematic.txt"]).source(),
            InputSource::File(PathBuf::from("schematic.txt"))
        );
        assert_eq!(
            args(&["-s", "1*1"]).source(),
            InputSource::Literal("1*1".to_owned())
        );
        assert_eq!(args(&["--stdin"]).source(), InputSource::Stdin);
    }

    #[test]
    fn test_sources_are_exclusive() {
        assert!(Args::try_parse_from(["schematic", "--stdin", "--string", "1*1"]).is_err());
    }

    #[test]
    fn test_show_input_reports_overflow() {
        let schematic = Schematic::try_from("*99999999999").unwrap();
        let error = show_input(&schematic).unwrap_err();

        assert!(error.downcast_ref::<numbers::NumberOverflowError>().is_some());
    }
}
