use super::config::Config;
use super::config::Malformed;
use super::error::DecisionError;
use super::key::Key;
use super::record::DecisionRecord;
use super::spacing::SkipInitialSpace;
use crate::cards::Hand;
use std::collections::HashMap;
use std::path::Path;

/// Digested decisions keyed by normalized `cards;board`.
///
/// Built once from a CSV dump and read-only afterward, so a table can be
/// shared across threads by reference. When the source repeats a key, the
/// later row wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionTable(HashMap<Key, DecisionRecord>);

impl DecisionTable {
    const DELIMITER: u8 = b',';

    /// Loads with the default policy: fail on the first malformed row, no card validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DecisionError> {
        Self::load_with(&Config::new(path.as_ref()))
    }

    pub fn load_with(config: &Config) -> Result<Self, DecisionError> {
        log::info!("loading decisions from {}", config.path.display());
        let file = std::fs::File::open(&config.path).map_err(|source| DecisionError::Io {
            path: config.path.clone(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file), config)
    }

    /// Reads a digest dump from any byte source. `config.path` only labels I/O errors.
    pub fn from_reader<R>(reader: R, config: &Config) -> Result<Self, DecisionError>
    where
        R: std::io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(SkipInitialSpace::new(reader, Self::DELIMITER));
        let ref headers = reader
            .headers()
            .map_err(|e| Self::reading(&config.path, e))?
            .clone();
        Self::check(headers)?;
        let mut table = HashMap::new();
        let mut skipped = 0usize;
        let mut overwritten = 0usize;
        for row in reader.records() {
            let (line, parsed) = match row {
                Err(e) if e.is_io_error() => return Err(Self::reading(&config.path, e)),
                Err(e) => (e.position().map(|p| p.line()), Err(e.to_string())),
                Ok(ref row) => (
                    row.position().map(|p| p.line()),
                    Self::parse(row, headers, config),
                ),
            };
            let line = line.unwrap_or_default();
            match parsed {
                Ok(record) => {
                    if let Some(prev) = table.insert(record.key(), record) {
                        log::debug!("line {}: overwrites {} ({})", line, prev.key(), prev.action());
                        overwritten += 1;
                    }
                }
                Err(reason) => match config.malformed {
                    Malformed::Fail => return Err(DecisionError::Row { line, reason }),
                    Malformed::Skip => {
                        log::warn!("skipping line {}: {}", line, reason);
                        skipped += 1;
                    }
                },
            }
        }
        log::info!(
            "loaded {} decisions ({} skipped, {} overwritten)",
            table.len(),
            skipped,
            overwritten
        );
        Ok(Self(table))
    }

    /// The recorded action for this holding, if one was ever observed.
    ///
    /// Tokens may be given in any order; both sides are sorted before the
    /// key is built.
    pub fn lookup(&self, cards: &str, board: &str) -> Option<&str> {
        self.record(cards, board).map(DecisionRecord::action)
    }
    pub fn record(&self, cards: &str, board: &str) -> Option<&DecisionRecord> {
        self.0.get(&Key::from((cards, board)))
    }
    pub fn decide(&self, cards: &Hand, board: &Hand) -> Option<&str> {
        self.0
            .get(&Key::from((cards, board)))
            .map(DecisionRecord::action)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRecord> {
        self.0.values()
    }

    /// Writes the table in digest format: shortest boards first, then by cards, then by board.
    /// Cards and Board are always quoted; other fields only when they must be.
    pub fn write<W>(&self, writer: W) -> Result<(), DecisionError>
    where
        W: std::io::Write,
    {
        let mut records = self.iter().collect::<Vec<_>>();
        records.sort_by(|a, b| {
            a.board()
                .len()
                .cmp(&b.board().len())
                .then_with(|| a.cards().cmp(b.cards()))
                .then_with(|| a.board().cmp(b.board()))
        });
        let mut writer = csv::WriterBuilder::new()
            .delimiter(Self::DELIMITER)
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);
        writer.write_record(DecisionRecord::COLUMNS)?;
        for record in records {
            writer.write_record([
                Self::quote(record.cards(), true),
                Self::quote(record.board(), true),
                Self::quote(record.action(), false),
                record.average_rank().to_string(),
                record.count().to_string(),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DecisionError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| DecisionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write(std::io::BufWriter::new(file))?;
        log::info!("saved {} decisions to {}", self.len(), path.display());
        Ok(())
    }

    /// Quoting is done here because the csv writer cannot quote per column.
    fn quote(field: &str, always: bool) -> String {
        let special = field
            .bytes()
            .any(|b| b == Self::DELIMITER || b == b'"' || b == b'\n' || b == b'\r');
        match always || special {
            true => format!("\"{}\"", field.replace('"', "\"\"")),
            false => field.to_string(),
        }
    }

    /// I/O failures while reading are the same kind of failure as a file that will not open.
    fn reading(path: &Path, e: csv::Error) -> DecisionError {
        match e.is_io_error() {
            false => DecisionError::Csv(e),
            true => match e.into_kind() {
                csv::ErrorKind::Io(source) => DecisionError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                _ => unreachable!("is_io_error implies ErrorKind::Io"),
            },
        }
    }

    fn check(headers: &csv::StringRecord) -> Result<(), DecisionError> {
        let missing = DecisionRecord::COLUMNS
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect::<Vec<&str>>();
        match missing.len() {
            0 => Ok(()),
            _ => Err(DecisionError::Format(format!(
                "missing column(s) {}",
                missing.join(", ")
            ))),
        }
    }

    fn parse(
        row: &csv::StringRecord,
        headers: &csv::StringRecord,
        config: &Config,
    ) -> Result<DecisionRecord, String> {
        if row.len() != headers.len() {
            return Err(format!(
                "expected {} fields, found {}",
                headers.len(),
                row.len()
            ));
        }
        let record = row
            .deserialize::<DecisionRecord>(Some(headers))
            .map_err(|e| e.to_string())?
            .normalized();
        if config.validate {
            Self::validate(&record)?;
        }
        Ok(record)
    }

    fn validate(record: &DecisionRecord) -> Result<(), String> {
        let cards = Hand::try_from(record.cards())?;
        let board = Hand::try_from(record.board())?;
        if Hand::overlaps(&cards, &board) {
            return Err(format!("cards {} overlap board {}", cards, board));
        }
        if Key::from((&cards, &board)) != record.key() {
            return Err(format!("tokens not in canonical form: {}", record.key()));
        }
        Ok(())
    }
}

/// Later records overwrite earlier ones with the same key.
impl FromIterator<DecisionRecord> for DecisionTable {
    fn from_iter<I>(records: I) -> Self
    where
        I: IntoIterator<Item = DecisionRecord>,
    {
        Self(
            records
                .into_iter()
                .map(DecisionRecord::normalized)
                .map(|r| (r.key(), r))
                .collect(),
        )
    }
}
