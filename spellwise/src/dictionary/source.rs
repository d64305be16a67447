//! Where the baseline word list comes from.
//!
//! The provider only sees the [`WordSource`] trait, so tests and offline
//! deployments swap the HTTP fetch for a file or an in-memory list.
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::SourceError;
use crate::constants::{WORD_LIST_TIMEOUT_SECS, WORD_LIST_URL};

/// A newline-delimited list of correctly-spelled words.
pub trait WordSource: Send + Sync {
    /// Fetches the whole list as text, one word per line.
    fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Remote word-list settings
pub struct WordListConfig {
    /// URL of a plain-text, newline-delimited word list
    pub url: String,
    /// request timeout; expiry counts as a failed fetch
    pub timeout_secs: u64,
}

/// The Google 10,000 English (USA, no swears) list with a 10 second timeout.
impl Default for WordListConfig {
    fn default() -> Self {
        WordListConfig {
            url: WORD_LIST_URL.to_string(),
            timeout_secs: WORD_LIST_TIMEOUT_SECS,
        }
    }
}

/// Fetches the word list over HTTP with a blocking client.
///
/// Must not be called from inside an async runtime's worker threads; run it
/// on a blocking thread instead.
#[derive(Clone, Debug)]
pub struct HttpWordSource {
    url: String,
    timeout: Duration,
}

impl HttpWordSource {
    /// Creates a source for the configured URL and timeout.
    pub fn new(config: &WordListConfig) -> HttpWordSource {
        HttpWordSource {
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// the URL the list is fetched from
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpWordSource {
    fn default() -> Self {
        HttpWordSource::new(&WordListConfig::default())
    }
}

impl WordSource for HttpWordSource {
    fn fetch(&self) -> Result<String, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        if let Some(value) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            let content_type = value.to_str().unwrap_or_default();
            if !content_type.starts_with("text/") {
                return Err(SourceError::NotText(content_type.to_string()));
            }
        }

        Ok(response.text()?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the word list from a local file.
#[derive(Clone, Debug)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Creates a source reading `path` on every fetch.
    pub fn new<P: AsRef<Path>>(path: P) -> FileWordSource {
        FileWordSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileWordSource {
    fn fetch(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io(self.path.clone(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed list held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryWordSource {
    text: String,
}

impl MemoryWordSource {
    /// Creates a source from individual words.
    pub fn new<I, S>(words: I) -> MemoryWordSource
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for word in words {
            text.push_str(word.as_ref());
            text.push('\n');
        }
        MemoryWordSource { text }
    }

    /// Creates a source from newline-delimited text.
    pub fn from_text<S: Into<String>>(text: S) -> MemoryWordSource {
        MemoryWordSource { text: text.into() }
    }
}

impl WordSource for MemoryWordSource {
    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "in-memory word list".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryOrigin, DictionaryProvider};
    use crate::lexicon::Lexicon;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::Arc;

    /// Answers a single request with the given status line, content type and body.
    fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            )
            .unwrap();
        });

        format!("http://{}/words.txt", addr)
    }

    fn http_source(url: String, timeout_secs: u64) -> HttpWordSource {
        HttpWordSource::new(&WordListConfig { url, timeout_secs })
    }

    #[test]
    fn memory_source_joins_lines() {
        let source = MemoryWordSource::new(["the", "rhythm"]);
        assert_eq!(source.fetch().unwrap(), "the\nrhythm\n");
    }

    #[test]
    fn file_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour\nreceive").unwrap();

        let source = FileWordSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), "colour\nreceive\n");
    }

    #[test]
    fn file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileWordSource::new(dir.path().join("missing.txt"));

        assert!(matches!(source.fetch(), Err(SourceError::Io(..))));
    }

    #[test]
    fn http_source_from_config() {
        let source = HttpWordSource::new(&WordListConfig {
            url: "http://localhost/words.txt".into(),
            timeout_secs: 2,
        });

        assert_eq!(source.url(), "http://localhost/words.txt");
        assert_eq!(source.timeout, Duration::from_secs(2));
        assert_eq!(HttpWordSource::default().url(), WORD_LIST_URL);
    }

    #[test]
    fn http_source_fetches_text() {
        let url = serve_once("200 OK", "text/plain; charset=utf-8", "kitten\nthe\n");

        assert_eq!(http_source(url, 5).fetch().unwrap(), "kitten\nthe\n");
    }

    #[test]
    fn http_source_rejects_error_status() {
        let url = serve_once("404 Not Found", "text/plain", "missing");

        match http_source(url, 5).fetch() {
            Err(SourceError::Status(status)) => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn http_source_rejects_non_text() {
        let url = serve_once("200 OK", "application/json", "[\"kitten\"]");

        match http_source(url, 5).fetch() {
            Err(SourceError::NotText(content_type)) => assert_eq!(content_type, "application/json"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn silent_server_times_out_to_fallback() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/words.txt", listener.local_addr().unwrap());

        // accept and hold the connection without answering
        std::thread::spawn(move || {
            let _conn = listener.accept();
            std::thread::sleep(Duration::from_secs(5));
        });

        let provider = DictionaryProvider::new(http_source(url, 1), Arc::new(Lexicon::default()));
        let started = std::time::Instant::now();

        assert_eq!(provider.load().origin(), DictionaryOrigin::Fallback);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn config_deserializes() {
        let config: WordListConfig =
            serde_json::from_str(r#"{ "url": "https://example.com/w.txt", "timeout_secs": 3 }"#)
                .unwrap();

        assert_eq!(config.url, "https://example.com/w.txt");
        assert_eq!(config.timeout_secs, 3);

        let partial: WordListConfig = serde_json::from_str(r#"{ "timeout_secs": 1 }"#).unwrap();
        assert_eq!(partial.url, WORD_LIST_URL);
    }
}
