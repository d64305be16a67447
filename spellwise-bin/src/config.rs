use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::Deserialize;

use spellwise::dictionary::source::{FileWordSource, HttpWordSource, WordListConfig};
use spellwise::lexicon::{parse_word_list, DialectTable, Lexicon, MisspellingTable};
use spellwise::speller::{Speller, SpellerConfig};

/// Contents of the `--config` JSON file. Both sections are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speller: SpellerConfig,
    pub word_list: WordListConfig,
}

impl Config {
    pub fn from_path(path: &Path) -> anyhow::Result<Config> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config '{}'", path.display()))?;
        serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))
    }
}

#[derive(Debug, Args)]
pub struct SpellerArgs {
    /// JSON config file with `speller` and `word_list` sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL of the newline-delimited word list
    #[arg(long, env = "SPELLWISE_WORD_LIST")]
    pub word_list: Option<String>,

    /// read the word list from a local file instead of fetching it; wins over `--word-list`
    #[arg(long)]
    pub word_file: Option<PathBuf>,

    /// dialect table to use instead of the bundled one
    #[arg(long)]
    pub dialects: Option<PathBuf>,

    /// misspelling table to use instead of the bundled one
    #[arg(long)]
    pub misspellings: Option<PathBuf>,

    /// supplementary word list to use instead of the bundled one
    #[arg(long)]
    pub supplementary: Option<PathBuf>,

    /// scan fuzzy-match candidates in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl SpellerArgs {
    pub fn build(&self) -> anyhow::Result<Speller> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };

        if let Some(url) = &self.word_list {
            config.word_list.url = url.clone();
        }
        if self.parallel {
            config.speller.parallel = true;
        }

        let lexicon = self.lexicon()?;

        let speller = match &self.word_file {
            Some(path) => Speller::with_config(FileWordSource::new(path), lexicon, config.speller),
            None => Speller::with_config(
                HttpWordSource::new(&config.word_list),
                lexicon,
                config.speller,
            ),
        };

        Ok(speller)
    }

    fn lexicon(&self) -> anyhow::Result<Lexicon> {
        let mut lexicon = Lexicon::embedded().context("Bundled lexicon is invalid")?;

        if let Some(path) = &self.dialects {
            lexicon.dialects = DialectTable::from_json(&read(path)?)
                .with_context(|| format!("Invalid dialect table '{}'", path.display()))?;
        }
        if let Some(path) = &self.misspellings {
            lexicon.misspellings = MisspellingTable::from_json(&read(path)?)
                .with_context(|| format!("Invalid misspelling table '{}'", path.display()))?;
        }
        if let Some(path) = &self.supplementary {
            lexicon.supplementary = parse_word_list(&read(path)?)
                .with_context(|| format!("Invalid word list '{}'", path.display()))?;
        }

        Ok(lexicon)
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}
