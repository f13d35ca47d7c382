//! Card file format handling
//!
//! Cards are stored one per line as `term:definition:errors`. There is no
//! header, no quoting and no escaping: a colon inside a term or definition
//! produces a line with the wrong number of fields, which import rejects.
//!
//! This module provides:
//! - `CardRecord` for (de)serializing one line
//! - `CardReader`, a streaming iterator over the cards of a source
//! - `import_cards` / `write_cards` for moving a whole store in and out

use crate::core::CardStore;
use crate::types::{Card, FlashcardError};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Field separator of the card file format
pub const DELIMITER: u8 = b':';

/// Number of fields on every card line
const FIELD_COUNT: usize = 3;

/// One line of a card file
///
/// The error count is kept as text so a bad number can be reported with the
/// offending value rather than a generic deserialize error.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub errors: String,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        CardRecord {
            term: card.term.clone(),
            definition: card.definition.clone(),
            errors: card.errors.to_string(),
        }
    }
}

/// Convert a CardRecord to a Card
///
/// # Returns
///
/// * `Ok(Card)` - If the error count is a non-negative integer
/// * `Err(String)` - Description of the conversion failure
pub fn convert_card_record(record: CardRecord) -> Result<Card, String> {
    let errors = record
        .errors
        .parse::<u32>()
        .map_err(|_| format!("invalid error count '{}' for \"{}\"", record.errors, record.term))?;

    Ok(Card::with_errors(record.term, record.definition, errors))
}

/// Streaming reader over the cards of a card file
///
/// Yields one `Result<Card, FlashcardError>` per non-empty line. Errors carry
/// the line number of the offending line.
pub struct CardReader<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl<R: Read> CardReader<R> {
    /// Wrap a byte source in a card reader
    pub fn new(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(input);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }

    fn parse_current(&self) -> Result<Card, FlashcardError> {
        let line = self.record.position().map(|pos| pos.line());

        if self.record.len() != FIELD_COUNT {
            return Err(FlashcardError::parse_error(
                line,
                format!(
                    "expected {} colon-separated fields, found {}",
                    FIELD_COUNT,
                    self.record.len()
                ),
            ));
        }

        let record: CardRecord = self.record.deserialize(None)?;
        convert_card_record(record).map_err(|message| FlashcardError::parse_error(line, message))
    }
}

impl<R: Read> Iterator for CardReader<R> {
    type Item = Result<Card, FlashcardError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.parse_current()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Read every card from `input` into `store`
///
/// Cards are upserted in file order. The first bad line stops the import:
/// cards before it stay in the store, cards after it are never read.
///
/// Definitions may change hands between terms while the file is applied, so
/// uniqueness is checked once on the result. If two cards would end up with
/// the same definition, nothing is imported.
///
/// # Returns
///
/// * `Ok(usize)` - Number of lines imported
/// * `Err(FlashcardError)` - The parse error that stopped the import, or
///   `DuplicateDefinition` if the imported cards clash
pub fn import_cards<R: Read>(store: &mut CardStore, input: R) -> Result<usize, FlashcardError> {
    let mut staged = store.clone();
    let mut count = 0;
    let mut stopped = None;

    for result in CardReader::new(input) {
        match result {
            Ok(card) => {
                staged.upsert(card);
                count += 1;
            }
            Err(e) => {
                stopped = Some(e);
                break;
            }
        }
    }

    if let Some(definition) = staged.duplicate_definition() {
        log::debug!("Import rejected, definition {:?} is shared", definition);
        return Err(FlashcardError::duplicate_definition(definition));
    }
    *store = staged;

    match stopped {
        Some(e) => Err(e),
        None => {
            log::debug!("Imported {} cards", count);
            Ok(count)
        }
    }
}

/// Write cards in card file format
///
/// # Arguments
///
/// * `cards` - Cards to write, in the order they should appear
/// * `output` - Destination of the serialized lines
///
/// # Returns
///
/// * `Ok(usize)` - Number of cards written
/// * `Err(FlashcardError)` - If writing to `output` failed
pub fn write_cards<'a, I>(cards: I, output: &mut dyn Write) -> Result<usize, FlashcardError>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    let mut count = 0;
    for card in cards {
        writer
            .serialize(CardRecord::from(card))
            .map_err(|e| FlashcardError::IoError {
                message: format!("Failed to write card \"{}\": {}", card.term, e),
            })?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}
