use chrono::prelude::*;
use std::error::Error;
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::{Instant, SystemTime},
};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use structopt::StructOpt;

use spellwise::dictionary::source::{FileWordSource, HttpWordSource, WordListConfig};
use spellwise::distance::levenshtein;
use spellwise::lexicon::Lexicon;
use spellwise::speller::{Confidence, Correction, Speller, SpellerConfig};
use spellwise::word::normalize;

#[derive(Debug, StructOpt)]
#[structopt(name = "spellwise-accuracy", about = "Accuracy testing for spellwise.")]
struct Args {
    /// Provide JSON config file to override test defaults
    #[structopt(short = "c", long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// The 'input -> expected' list in tab-delimited value file (TSV)
    #[structopt(value_name = "WORDS", parse(from_os_str))]
    words: PathBuf,

    /// Use the given newline-delimited dictionary instead of fetching one
    #[structopt(long, parse(from_os_str))]
    word_file: Option<PathBuf>,

    /// The file path for the JSON report output
    #[structopt(short = "o", value_name = "JSON-OUTPUT", parse(from_os_str))]
    json_output: Option<PathBuf>,

    /// The file path for the TSV line append
    #[structopt(short = "t", value_name = "TSV-OUTPUT", parse(from_os_str))]
    tsv_output: Option<PathBuf>,

    /// Truncate typos list to max number of words specified
    #[structopt(short = "w")]
    max_words: Option<usize>,
}

fn load_words(
    path: &Path,
    max_words: Option<usize>,
) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    Ok(rdr
        .records()
        .filter_map(Result::ok)
        .filter_map(|r| {
            r.get(0)
                .and_then(|x| r.get(1).map(|y| (x.to_string(), y.to_string())))
        })
        .take(max_words.unwrap_or(usize::MAX))
        .collect())
}

#[derive(Debug, Default, Serialize, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
struct Time {
    secs: u64,
    subsec_nanos: u32,
}

impl From<std::time::Duration> for Time {
    fn from(d: std::time::Duration) -> Time {
        Time {
            secs: d.as_secs(),
            subsec_nanos: d.subsec_nanos(),
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let us = self.secs * 1_000_000 + (self.subsec_nanos as u64 / 1_000);
        write!(f, "{}µs", us)
    }
}

#[derive(Debug, Serialize)]
struct AccuracyResult<'a> {
    input: &'a str,
    expected: &'a str,
    distance: usize,
    correction: Option<Correction>,
    is_correct: bool,
    time: Time,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    config: &'a SpellerConfig,
    summary: Summary,
    results: Vec<AccuracyResult<'a>>,
    start_timestamp: Time,
    total_time: Time,
}

#[derive(Serialize, Default, Debug, Clone)]
struct Summary {
    total_words: u32,
    correct: u32,
    exact: u32,
    close: u32,
    guess: u32,
    none: u32,
    wrong: u32,
    slowest_lookup: Time,
    fastest_lookup: Time,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let percent = |v: u32| -> String {
            format!("{:.2}%", v as f32 / self.total_words.max(1) as f32 * 100f32)
        };

        write!(
            f,
            "[ok] {} [exact] {} [close] {} [guess] {} [none] {} [wrong] {} [fast] {} [slow] {}",
            percent(self.correct),
            percent(self.exact),
            percent(self.close),
            percent(self.guess),
            percent(self.none),
            percent(self.wrong),
            self.fastest_lookup,
            self.slowest_lookup
        )
    }
}

impl Summary {
    fn new(results: &[AccuracyResult<'_>]) -> Summary {
        let mut summary = Summary::default();

        results.iter().for_each(|result| {
            summary.total_words += 1;

            if result.is_correct {
                summary.correct += 1;
            }

            match result.correction.as_ref().map(|c| c.confidence) {
                Some(Confidence::Exact) => summary.exact += 1,
                Some(Confidence::Close) => summary.close += 1,
                Some(Confidence::Guess) => summary.guess += 1,
                Some(Confidence::None) | None => summary.none += 1,
            }

            if !result.is_correct && result.correction.as_ref().map_or(false, Correction::is_found) {
                summary.wrong += 1;
            }
        });

        if let Some(slowest) = results.iter().map(|x| x.time).max() {
            summary.slowest_lookup = slowest;
        }
        if let Some(fastest) = results.iter().map(|x| x.time).min() {
            summary.fastest_lookup = fastest;
        }

        summary
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let args = Args::from_args();

    let cfg: SpellerConfig = match &args.config {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(file)?
        }
        None => SpellerConfig::default(),
    };

    let lexicon = Lexicon::embedded()?;
    let speller = match &args.word_file {
        Some(path) => Speller::with_config(FileWordSource::new(path), lexicon, cfg.clone()),
        None => Speller::with_config(
            HttpWordSource::new(&WordListConfig::default()),
            lexicon,
            cfg.clone(),
        ),
    };

    let words = load_words(&args.words, args.max_words)?;

    // keep the word-list fetch out of the per-word timings
    let dictionary = speller.dictionary();
    eprintln!("Dictionary: {} words ({:?})", dictionary.len(), dictionary.origin());

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} [{percent}%] {wide_bar} {elapsed_precise}"),
    );

    let start_time = Instant::now();
    let results = words
        .par_iter()
        .progress_with(pb)
        .map(|(input, expected)| {
            let now = Instant::now();
            let correction = speller.resolve(input).ok();
            let time = Time::from(now.elapsed());

            let is_correct = match (&correction, normalize(expected)) {
                (Some(c), Some(expected)) => c.is_found() && c.word == expected,
                _ => false,
            };

            AccuracyResult {
                input,
                expected,
                distance: levenshtein(input, expected),
                correction,
                is_correct,
                time,
            }
        })
        .collect::<Vec<_>>();

    let total_time = Time::from(start_time.elapsed());
    let start_timestamp = Time::from(SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)?);

    let summary = Summary::new(&results);
    println!("{}", summary);

    if let Some(path) = &args.json_output {
        let output = std::fs::File::create(path)?;
        let report = Report {
            config: &cfg,
            summary,
            results,
            start_timestamp,
            total_time,
        };
        println!("Writing JSON report…");
        serde_json::to_writer_pretty(output, &report)?;
    } else if let Some(path) = &args.tsv_output {
        let mut output = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        if output.metadata()?.len() == 0 {
            // new file, write headers:
            output.write_all(b"date\ttotal\tcorrect\texact\tclose\tguess\tnone\twrong\n")?;
        }
        writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            Local::now().to_rfc3339(),
            summary.total_words,
            summary.correct,
            summary.exact,
            summary.close,
            summary.guess,
            summary.none,
            summary.wrong
        )?;
    };

    println!("Done!");
    Ok(())
}
