/*
Most basic example: print the completions for a single prefix and exit.

## Usage

```
$ cargo run --example complete -- dictionary.txt ca
car, cart, cat
$ cargo run --example complete -- dictionary.txt ca --frequency
car, cat, cart
```
*/
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use typeahead::{BaseCompleter, Completer, Dictionary, FrequencyCompleter};

#[derive(Parser)]
struct Cli {
    /// Dictionary file with one "word frequency" record per line.
    dict: PathBuf,
    /// The prefix to complete.
    prefix: String,
    /// Rank completions by usage frequency instead of lexicographically.
    #[arg(short, long)]
    frequency: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.dict)
        .with_context(|| format!("unable to read {}", cli.dict.display()))?;
    let (dict, warnings) = Dictionary::parse(&text);
    for warning in &warnings {
        eprintln!("{}: {warning}", cli.dict.display());
    }

    let completer: Box<dyn Completer> = if cli.frequency {
        Box::new(FrequencyCompleter::new(&dict).context("invalid dictionary")?)
    } else {
        Box::new(BaseCompleter::new(&dict).context("invalid dictionary")?)
    };

    let mut completions = Vec::new();
    completer.complete(&cli.prefix, &mut completions);
    if completions.is_empty() {
        println!("No completions for {:?}", cli.prefix);
    } else {
        println!("{}", completions.join(", "));
    }

    Ok(())
}
