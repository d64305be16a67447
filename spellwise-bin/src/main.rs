use std::io::{self, Read};
use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use spellwise::speller::{Confidence, Correction, Speller};

mod config;
mod server;

use config::SpellerArgs;

trait OutputWriter {
    fn write_correction(&mut self, word: &str, correction: &Correction);
    fn write_error(&mut self, word: &str, error: &str);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, correction: &Correction) {
        println!(
            "Input: {}\t\t[{}]",
            word,
            correction.confidence.as_str().to_uppercase()
        );

        if correction.confidence != Confidence::None && correction.word != word {
            println!("{}", correction.word);
        }

        if let Some(d) = &correction.dialects {
            println!("us: {}\tuk: {}\tau: {}\tnz: {}", d.us, d.uk, d.au, d.nz);
        }
        println!();
    }

    fn write_error(&mut self, word: &str, error: &str) {
        println!("Input: {:?}\t\t[ERROR] {}", word, error);
        println!();
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum CheckResult {
    Resolved {
        input: String,
        #[serde(flatten)]
        correction: Correction,
    },
    Failed {
        input: String,
        error: String,
    },
}

#[derive(Default, Serialize)]
struct JsonWriter {
    results: Vec<CheckResult>,
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, correction: &Correction) {
        self.results.push(CheckResult::Resolved {
            input: word.to_owned(),
            correction: correction.clone(),
        });
    }

    fn write_error(&mut self, word: &str, error: &str) {
        self.results.push(CheckResult::Failed {
            input: word.to_owned(),
            error: error.to_owned(),
        });
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

fn run(speller: &Speller, words: Vec<String>, writer: &mut dyn OutputWriter) {
    for word in words {
        match speller.resolve(&word) {
            Ok(correction) => writer.write_correction(&word, &correction),
            Err(e) => writer.write_error(&word, &e.to_string()),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "spellwise",
    about = "English spelling correction with US/UK/AU/NZ dialect variants"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the provided words
    Check(CheckArgs),

    /// Serve the speller over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    #[command(flatten)]
    speller: SpellerArgs,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Words to be processed
    inputs: Vec<String>,
}

#[derive(Debug, Parser)]
struct ServeArgs {
    #[command(flatten)]
    speller: SpellerArgs,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let speller = args.speller.build()?;

    let mut writer: Box<dyn OutputWriter> = if args.json {
        Box::new(JsonWriter::default())
    } else {
        Box::new(StdoutWriter)
    };

    let words = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
            .trim()
            .lines()
            .map(|x| x.trim().to_string())
            .collect()
    } else {
        args.inputs
    };

    run(&speller, words, &mut *writer);
    writer.finish()
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let speller = Arc::new(args.speller.build()?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(server::serve(speller, args.addr))
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();

    match args.command {
        None => Ok(()),
        Some(Command::Check(args)) => check(args),
        Some(Command::Serve(args)) => serve(args),
    }
}
