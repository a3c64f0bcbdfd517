/*
An interactive completion prompt over a two-column dictionary file.

## Usage

```
$ cargo run --example repl -- --dict dictionary.txt --completer frequency
String: ca
["cat", "car", "cart"]
```

Type a prefix and press enter; end-of-input (Ctrl-D) or Ctrl-C exits.
*/
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use typeahead::{BaseCompleter, Completer, Dictionary, FrequencyCompleter};

#[derive(Parser)]
struct Cli {
    /// Dictionary file with one "word frequency" record per line.
    #[arg(short, long)]
    dict: PathBuf,
    /// Ranking strategy for completions.
    #[arg(short, long, value_enum, default_value = "base")]
    completer: Strategy,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Lexicographic order.
    Base,
    /// Most frequently used words first.
    Frequency,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.dict)
        .with_context(|| format!("unable to read {}", cli.dict.display()))?;
    let (dict, warnings) = Dictionary::parse(&text);
    for warning in &warnings {
        eprintln!("{}: {warning}", cli.dict.display());
    }

    let completer: Box<dyn Completer> = match cli.completer {
        Strategy::Base => Box::new(BaseCompleter::new(&dict).context("invalid dictionary")?),
        Strategy::Frequency => {
            Box::new(FrequencyCompleter::new(&dict).context("invalid dictionary")?)
        }
    };

    let mut completions = Vec::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("String: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let prefix = line.trim();
        if prefix.is_empty() {
            println!("Please type one or more characters");
            continue;
        }
        completer.complete(prefix, &mut completions);
        println!("{completions:?}");
    }

    Ok(())
}
