//! CoNLL 2009 parse files with comparative SRL columns
//!
//! Reads and writes tab-separated records, one word per line, sentences
//! separated by a blank line:
//!
//! ```text
//! 0:ID 1:FORM 2:LEMMA 3:PLEMMA 4:POS 5:PPOS 6:FEAT 7:PFEAT 8:HEAD 9:PHEAD
//! 10:DEPREL 11:PDEPREL [12:FILLPRED 13:PRED [14..:APRED]*]
//! ```
//!
//! Lemma and POS come from the first column that is not `_`. Column 12 is
//! `Y` for predicates, column 13 their annotation (`comparative.05`), and
//! every following column holds the argument codes of one predicate, in
//! predicate order.
//!
//! Files ending in `.gz` are decompressed on read and compressed on write.

use atoi::FromRadix10Checked;
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::srl::SrlSentence;
use crate::tree::Sentence;
use crate::types::{ArgumentType, Grouping, predicate_from_annotation};
use crate::word::{Word, WordId};

/// Empty column
pub const PLACEHOLDER: &str = "_";
/// Predicate family written in column 13
pub const PREDICATE_FAMILY: &str = "comparative";

/// Columns up to and including DEPREL
const MIN_FIELDS: usize = 11;
const PRED_FLAG_COL: usize = 12;
const PRED_COL: usize = 13;
const FIRST_ARG_COL: usize = 14;

/// Which annotation layers a read keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Dependencies only
    OnlyDeps,
    /// Dependencies and predicates, no arguments
    OnlyPredicates,
    /// Dependencies, predicates and arguments
    #[default]
    Full,
}

impl ReadMode {
    fn reads_predicates(self) -> bool {
        !matches!(self, ReadMode::OnlyDeps)
    }

    fn reads_arguments(self) -> bool {
        matches!(self, ReadMode::Full)
    }
}

/// Argument column value waiting for the predicate list to be complete
#[derive(Debug)]
struct PendingArgument {
    predicate_index: usize,
    argument: WordId,
    code: String,
}

/// Reader that yields one sentence per call.
///
/// The file is opened on the first read (or an explicit [`open`](Self::open))
/// and released by [`close`](Self::close). A malformed record aborts the
/// sentence it belongs to; the next read continues with the line after it.
pub struct ParseReader {
    path: Option<PathBuf>,
    name: String,
    lines: Option<Lines<Box<dyn BufRead>>>,
    line_num: usize,
    failed: bool,
    grouping: Grouping,
    mode: ReadMode,
}

impl ParseReader {
    /// Create a reader for a file. Nothing is opened yet.
    pub fn new(path: impl AsRef<Path>, config: &Config) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            path: Some(path),
            lines: None,
            line_num: 0,
            failed: false,
            grouping: config.grouping,
            mode: config.read_mode,
        }
    }

    /// Create a reader over any buffered source
    pub fn from_reader<R: BufRead + 'static>(reader: R, name: &str, config: &Config) -> Self {
        let boxed: Box<dyn BufRead> = Box::new(reader);
        Self {
            path: None,
            name: name.to_string(),
            lines: Some(boxed.lines()),
            line_num: 0,
            failed: false,
            grouping: config.grouping,
            mode: config.read_mode,
        }
    }

    /// Create a reader over in-memory text
    pub fn from_string(text: &str, config: &Config) -> Self {
        Self::from_reader(
            std::io::Cursor::new(text.to_string()),
            "<string>",
            config,
        )
    }

    /// Open the file if it is not open yet
    pub fn open(&mut self) -> Result<()> {
        if self.lines.is_some() {
            return Ok(());
        }
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.clone(),
            source,
        })?;
        let reader: Box<dyn BufRead> = if is_gzip(path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        log::debug!("Opened {} for reading", self.name);
        self.lines = Some(reader.lines());
        self.line_num = 0;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.lines.is_some()
    }

    /// Release the input. A later read reopens files from the start.
    pub fn close(&mut self) {
        if self.lines.take().is_some() {
            log::debug!("Closed {}", self.name);
        }
        self.line_num = 0;
    }

    /// Number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_num
    }

    /// Read a sentence with dependencies only
    pub fn read_parse_only_deps(&mut self) -> Option<SrlSentence> {
        self.read_parse(ReadMode::OnlyDeps)
    }

    /// Read a sentence with dependencies and predicates, but no arguments
    pub fn read_parse_only_predicates(&mut self) -> Option<SrlSentence> {
        self.read_parse(ReadMode::OnlyPredicates)
    }

    /// Read a sentence with dependencies and all SRL information
    pub fn read_parse_srl(&mut self) -> Option<SrlSentence> {
        self.read_parse(ReadMode::Full)
    }

    /// Read the next sentence.
    ///
    /// Returns `None` at the end of the input and for malformed sentences;
    /// the latter are logged with file and line.
    pub fn read_parse(&mut self, mode: ReadMode) -> Option<SrlSentence> {
        match self.next_sentence(mode)? {
            Ok(sentence) => Some(sentence),
            Err(e) => {
                log::error!("Skipping sentence: {}", e);
                None
            }
        }
    }

    /// Read the next sentence, reporting why a sentence was dropped.
    ///
    /// Returns `None` at the end of the input.
    pub fn next_sentence(&mut self, mode: ReadMode) -> Option<Result<SrlSentence>> {
        if self.failed {
            return None;
        }
        if let Err(e) = self.open() {
            self.failed = true;
            return Some(Err(e));
        }
        let lines = self.lines.as_mut()?;

        let mut sentence = SrlSentence::new();
        let mut pending = Vec::new();
        let mut seen_record = false;

        loop {
            let line = match lines.next() {
                None => break,
                Some(Err(e)) => {
                    self.line_num += 1;
                    return Some(Err(Error::parse(
                        self.name.clone(),
                        self.line_num,
                        format!("IO error: {}", e),
                    )));
                }
                Some(Ok(line)) => line,
            };
            self.line_num += 1;
            let line = line.trim();

            if line.is_empty() {
                if seen_record {
                    break;
                }
                // Skip extra blank lines between sentences
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                parse_comment(comment, &mut sentence.sentence_mut().metadata);
                continue;
            }

            if let Err(message) =
                parse_record(line, mode, &mut sentence, &mut pending)
            {
                return Some(Err(Error::parse(
                    self.name.clone(),
                    self.line_num,
                    message,
                )));
            }
            seen_record = true;
        }

        // Comments alone do not make a sentence
        if !seen_record {
            return None;
        }

        if let Err(e) = sentence.sentence_mut().build_dependency_tree() {
            return Some(Err(Error::parse(
                self.name.clone(),
                self.line_num,
                e.to_string(),
            )));
        }

        if let Err(message) = attach_arguments(&mut sentence, pending, self.grouping) {
            return Some(Err(Error::parse(
                self.name.clone(),
                self.line_num,
                message,
            )));
        }

        Some(Ok(sentence))
    }
}

impl Iterator for ParseReader {
    type Item = Result<SrlSentence>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sentence(self.mode)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Parse a comment line (starts with #) of the form `key = value`
fn parse_comment(comment: &str, metadata: &mut std::collections::BTreeMap<String, String>) {
    if let Some((key, value)) = comment.split_once('=') {
        metadata.insert(key.trim().to_string(), value.trim().to_string());
    }
}

/// Split a record into its tab-separated columns
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(16);
    let mut start = 0;
    for tab in memchr::memchr_iter(b'\t', line.as_bytes()) {
        fields.push(&line[start..tab]);
        start = tab + 1;
    }
    fields.push(&line[start..]);
    fields
}

/// Parse a non-negative integer that fills the whole column
fn parse_number(field: &str) -> Option<usize> {
    let bytes = field.as_bytes();
    match usize::from_radix_10_checked(bytes) {
        (Some(n), used) if used > 0 && used == bytes.len() => Some(n),
        _ => None,
    }
}

/// Value of a column pair: the first one that is not `_`, or empty if both are
fn first_filled<'a>(first: &'a str, second: &'a str) -> &'a str {
    match (first, second) {
        (PLACEHOLDER, PLACEHOLDER) => "",
        (PLACEHOLDER, value) => value,
        (value, _) => value,
    }
}

/// Parse one record, add its word to the sentence, register it as predicate
/// and buffer its argument columns
fn parse_record(
    line: &str,
    mode: ReadMode,
    sentence: &mut SrlSentence,
    pending: &mut Vec<PendingArgument>,
) -> std::result::Result<(), String> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(format!(
            "Expected at least {} fields, found {}",
            MIN_FIELDS,
            fields.len()
        ));
    }

    let id = parse_number(fields[0]).ok_or_else(|| format!("Invalid ID: {}", fields[0]))?;
    let head = parse_number(fields[8]).ok_or_else(|| format!("Invalid HEAD: {}", fields[8]))?;
    let lemma = first_filled(fields[2], fields[3]);
    let pos = first_filled(fields[4], fields[5]);

    let deprel = first_filled(fields[10], fields[11]);

    let word = Word::new(id, fields[1], lemma, pos, head, deprel);
    let position = sentence.sentence_mut().append(word);

    if mode.reads_predicates()
        && fields.len() > PRED_COL
        && fields[PRED_FLAG_COL] == "Y"
    {
        let annotation = fields[PRED_COL];
        let (kind, direction) = predicate_from_annotation(annotation)
            .ok_or_else(|| format!("Invalid predicate annotation: {}", annotation))?;
        // Rejections are already logged by the sentence
        let _ = sentence.add_predicate(position, kind, direction);
    }

    if mode.reads_arguments() {
        for (column, code) in fields.iter().enumerate().skip(FIRST_ARG_COL) {
            if *code != PLACEHOLDER {
                pending.push(PendingArgument {
                    predicate_index: column - FIRST_ARG_COL,
                    argument: position,
                    code: code.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Resolve buffered argument columns against the complete predicate list
fn attach_arguments(
    sentence: &mut SrlSentence,
    pending: Vec<PendingArgument>,
    grouping: Grouping,
) -> std::result::Result<(), String> {
    for arg in pending {
        let Some(&predicate) = sentence.predicates().get(arg.predicate_index) else {
            return Err(format!(
                "Argument column {} of word {} has no predicate ({} predicates)",
                arg.predicate_index + FIRST_ARG_COL,
                arg.argument,
                sentence.predicates().len()
            ));
        };
        let role = ArgumentType::from_code(&arg.code, grouping);
        let _ = sentence.add_argument(predicate, arg.argument, role);
    }
    Ok(())
}

/// Something that can be written as CoNLL lines
pub trait Projection {
    /// The sentence whose words are written
    fn sentence(&self) -> &Sentence;

    /// Columns for one word, without the leading index
    fn project_word(&self, id: WordId, grouping: Grouping) -> String;
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

/// Dependency columns 1-11. Predicates carry their direction in the
/// feature columns.
fn dependency_columns(word: &Word) -> String {
    let feats = match word.predicate() {
        Some(frame) => frame.direction.to_string(),
        None => PLACEHOLDER.to_string(),
    };
    let form = or_placeholder(&word.form);
    let lemma = or_placeholder(&word.lemma);
    let pos = or_placeholder(&word.pos);
    let deprel = or_placeholder(&word.deprel);
    format!(
        "{form}\t{lemma}\t{lemma}\t{pos}\t{pos}\t{feats}\t{feats}\t{head}\t{head}\t{deprel}\t{deprel}",
        head = word.head_id
    )
}

impl Projection for Sentence {
    fn sentence(&self) -> &Sentence {
        self
    }

    fn project_word(&self, id: WordId, _grouping: Grouping) -> String {
        self.get(id).map(dependency_columns).unwrap_or_default()
    }
}

impl Projection for SrlSentence {
    fn sentence(&self) -> &Sentence {
        SrlSentence::sentence(self)
    }

    fn project_word(&self, id: WordId, grouping: Grouping) -> String {
        let Some(word) = self.get(id) else {
            return String::new();
        };
        let mut line = dependency_columns(word);

        match word.predicate() {
            Some(frame) => {
                line.push_str("\tY\t");
                line.push_str(PREDICATE_FAMILY);
                line.push('.');
                line.push_str(frame.kind.to_code(frame.direction));
            }
            None => {
                line.push_str("\t_\t_");
            }
        }

        for role in self.roles_of(id) {
            line.push('\t');
            line.push_str(role.map_or(PLACEHOLDER, |r| r.to_code(grouping)));
        }
        line
    }
}

/// Write one parse: metadata comments, one line per word, a blank line
pub fn write_parse_to<W, P>(out: &mut W, parse: &P, grouping: Grouping) -> std::io::Result<()>
where
    W: Write + ?Sized,
    P: Projection + ?Sized,
{
    let sentence = parse.sentence();
    for (key, value) in &sentence.metadata {
        writeln!(out, "# {} = {}", key, value)?;
    }
    for id in 1..=sentence.len() {
        writeln!(out, "{}\t{}", id, parse.project_word(id, grouping))?;
    }
    writeln!(out)?;
    out.flush()
}

/// A parse as CoNLL text
pub fn format_parse<P: Projection + ?Sized>(parse: &P, grouping: Grouping) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_parse_to(&mut buf, parse, grouping);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Writer that appends parses to a file.
///
/// The file is created on the first write (or an explicit
/// [`open`](Self::open)); each sentence is flushed when written.
pub struct ParseWriter {
    path: Option<PathBuf>,
    out: Option<Output>,
    grouping: Grouping,
}

/// Writer output. Compressed files keep their encoder so the gzip trailer is
/// written and checked on close.
enum Output {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
    Sink(Box<dyn Write>),
}

impl Output {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Output::Plain(w) => w,
            Output::Gzip(w) => w,
            Output::Sink(w) => w,
        }
    }

    /// Flush everything and finish the compressed stream
    fn finish(self) -> std::io::Result<()> {
        match self {
            Output::Plain(mut w) => w.flush(),
            Output::Gzip(w) => {
                let encoder = w.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
            Output::Sink(mut w) => w.flush(),
        }
    }
}

impl ParseWriter {
    /// Create a writer for a file. Nothing is created yet.
    pub fn new(path: impl AsRef<Path>, config: &Config) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            out: None,
            grouping: config.grouping,
        }
    }

    /// Create a writer over any sink
    pub fn from_writer<W: Write + 'static>(writer: W, config: &Config) -> Self {
        Self {
            path: None,
            out: Some(Output::Sink(Box::new(writer))),
            grouping: config.grouping,
        }
    }

    /// Create the file if it is not open yet
    pub fn open(&mut self) -> Result<()> {
        if self.out.is_some() {
            return Ok(());
        }
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file = File::create(path).map_err(|source| Error::FileOpen {
            path: path.clone(),
            source,
        })?;
        let out = if is_gzip(path) {
            Output::Gzip(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Output::Plain(BufWriter::new(file))
        };
        log::debug!("Opened {} for writing", path.display());
        self.out = Some(out);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.out.is_some()
    }

    /// Write one parse and flush
    pub fn write_parse<P: Projection + ?Sized>(&mut self, parse: &P) -> Result<()> {
        self.open()?;
        let Some(out) = self.out.as_mut() else {
            return Err(Error::Io(std::io::Error::other("writer is closed")));
        };
        write_parse_to(out.writer(), parse, self.grouping)?;
        Ok(())
    }

    /// Flush and release the output. Compressed files are finished here.
    pub fn close(&mut self) -> Result<()> {
        if let Some(out) = self.out.take() {
            out.finish()?;
            log::debug!("Closed writer");
        }
        Ok(())
    }
}
