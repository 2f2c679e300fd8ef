//! Sentence collections from a string, file, or glob pattern
//!
//! Files are read one after another in the order given. Files that cannot be
//! opened and malformed sentences are logged and skipped.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::conll::ParseReader;
use crate::error::Result;
use crate::srl::SrlSentence;

/// Source of sentences for a corpus
#[derive(Debug, Clone)]
enum CorpusSource {
    /// In-memory CoNLL text
    String(String),
    /// Single file path
    File(PathBuf),
    /// Multiple file paths (from glob or explicit paths)
    Files(Vec<PathBuf>),
}

/// Collection of annotated sentences
///
/// ```no_run
/// use compsrl::{Config, Corpus};
///
/// let corpus = Corpus::from_glob("data/*.conll.gz", Config::default()).unwrap();
/// for sentence in corpus {
///     println!("{} predicates", sentence.predicates().len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Corpus {
    source: CorpusSource,
    config: Config,
}

impl Corpus {
    /// Create from in-memory CoNLL text
    pub fn from_string(text: &str, config: Config) -> Self {
        Self {
            source: CorpusSource::String(text.to_string()),
            config,
        }
    }

    /// Create from a single file path
    pub fn from_file(path: impl AsRef<Path>, config: Config) -> Self {
        Self {
            source: CorpusSource::File(path.as_ref().to_path_buf()),
            config,
        }
    }

    /// Create from a glob pattern
    ///
    /// Files are processed in sorted order for deterministic results.
    pub fn from_glob(pattern: &str, config: Config) -> Result<Self> {
        let mut file_paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(|p| p.ok()).collect();
        file_paths.sort();
        if file_paths.is_empty() {
            log::warn!("No files match {}", pattern);
        }
        Ok(Self::from_paths(file_paths, config))
    }

    /// Create from explicit file paths
    pub fn from_paths(file_paths: Vec<PathBuf>, config: Config) -> Self {
        Self {
            source: CorpusSource::Files(file_paths),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = SrlSentence>> {
        self.clone().into_iter()
    }
}

impl IntoIterator for Corpus {
    type Item = SrlSentence;
    type IntoIter = Box<dyn Iterator<Item = Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        let config = self.config;
        match self.source {
            CorpusSource::String(text) => {
                Box::new(skip_errors(ParseReader::from_string(&text, &config)))
            }
            CorpusSource::File(path) => open_file_sentences(path, config),
            CorpusSource::Files(paths) => Box::new(
                paths
                    .into_iter()
                    .flat_map(move |path| open_file_sentences(path, config)),
            ),
        }
    }
}

/// Open a file and return an iterator over its sentences
///
/// Logs a file that cannot be opened and yields nothing for it.
fn open_file_sentences(path: PathBuf, config: Config) -> Box<dyn Iterator<Item = SrlSentence>> {
    let mut reader = ParseReader::new(&path, &config);
    match reader.open() {
        Ok(()) => Box::new(skip_errors(reader)),
        Err(e) => {
            log::warn!("Failed to open {}: {}", path.display(), e);
            Box::new(std::iter::empty())
        }
    }
}

fn skip_errors(reader: ParseReader) -> impl Iterator<Item = SrlSentence> {
    reader.filter_map(|result| match result {
        Ok(sentence) => Some(sentence),
        Err(e) => {
            log::warn!("Skipping sentence: {}", e);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conll::ReadMode;
    use std::fs;
    use tempfile::TempDir;

    const TWO_SENTENCES: &str = "# sent_id = 1
1\tThe\tthe\t_\tDT\t_\t_\t_\t2\t_\tdet\t_
2\tdog\tdog\t_\tNN\t_\t_\t_\t3\t_\tnsubj\t_
3\truns\trun\t_\tVBZ\t_\t_\t_\t0\t_\troot\t_

1\tCats\tcat\t_\tNNS\t_\t_\t_\t2\t_\tnsubj\t_
2\tsleep\tsleep\t_\tVBP\t_\t_\t_\t0\t_\troot\t_

";

    const COMPARATIVE: &str = "\
1\tA\tA\t_\tNNP\t_\t_\t_\t2\t_\tnsubj\t_\t_\t_\tA1
2\tis\tbe\t_\tVBZ\t_\t_\t_\t0\t_\troot\t_\t_\t_\t_
3\tfaster\tfast\t_\tJJR\t_\t_\t_\t2\t_\tacomp\t_\tY\tcomparative.01\t_

";

    fn create_test_files() -> (TempDir, Vec<PathBuf>) {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.conll");
        let second = dir.path().join("b.conll");
        fs::write(&first, TWO_SENTENCES).unwrap();
        fs::write(&second, COMPARATIVE).unwrap();
        (dir, vec![first, second])
    }

    #[test]
    fn test_corpus_from_string() {
        let sentences: Vec<_> = Corpus::from_string(TWO_SENTENCES, Config::default())
            .into_iter()
            .collect();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 3);
        assert_eq!(sentences[1].len(), 2);
        assert_eq!(sentences[0].metadata.get("sent_id").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_corpus_skips_malformed_sentences() {
        let text = format!("1\tbroken\n\n{}", TWO_SENTENCES);
        let corpus = Corpus::from_string(&text, Config::default());
        assert_eq!(corpus.iter().count(), 2);
    }

    #[test]
    fn test_corpus_from_file() {
        let (_dir, paths) = create_test_files();
        let sentences: Vec<_> = Corpus::from_file(&paths[1], Config::default())
            .into_iter()
            .collect();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].predicates(), &[3]);
        assert_eq!(sentences[0].arguments_of(3), vec![1]);
    }

    #[test]
    fn test_corpus_uses_read_mode() {
        let (_dir, paths) = create_test_files();
        let config = Config::default().with_read_mode(ReadMode::OnlyDeps);
        let sentence = Corpus::from_file(&paths[1], config).into_iter().next().unwrap();
        assert!(sentence.predicates().is_empty());
    }

    #[test]
    fn test_corpus_from_glob() {
        let (dir, _paths) = create_test_files();
        let pattern = format!("{}/*.conll", dir.path().display());
        let corpus = Corpus::from_glob(&pattern, Config::default()).unwrap();
        let sentences: Vec<_> = corpus.iter().collect();

        assert_eq!(sentences.len(), 3);
        // Sorted file order: a.conll before b.conll
        assert_eq!(sentences[2].to_string(), "A is faster");
    }

    #[test]
    fn test_corpus_skips_missing_files() {
        let (_dir, mut paths) = create_test_files();
        paths.insert(0, PathBuf::from("/nonexistent/file.conll"));
        let count = Corpus::from_paths(paths, Config::default()).into_iter().count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_invalid_glob_pattern() {
        assert!(Corpus::from_glob("[", Config::default()).is_err());
    }
}
