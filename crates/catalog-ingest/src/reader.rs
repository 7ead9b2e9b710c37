//! Incremental catalog reader.
//!
//! Reads the feed through a bounded `BufReader`, resolves namespaces with
//! `quick_xml::NsReader`, and feeds a [`ContextTracker`]. Records come out as
//! an iterator, one per closed presentation, so the feed is never held in
//! memory as a whole.
//!
//! # Usage
//!
//! ```ignore
//! use catalog_ingest::{CatalogReader, ReaderOptions};
//!
//! let file = std::fs::File::open("catalog.xml")?;
//! for record in CatalogReader::new(file, &ReaderOptions::default()) {
//!     let record = record?;
//!     println!("{:?}", record.first("presentation_identifier"));
//! }
//! ```

use std::io::{BufReader, Read};

use catalog_model::RawRecord;
use quick_xml::NsReader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{Attribute, ContextTracker, FeedEvent, QualifiedName};
use crate::error::{IngestError, Result};

/// Default read buffer capacity in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Options for reading a catalog stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// Capacity of the buffer between the input and the XML tokenizer.
    /// Defaults to 8192.
    pub buffer_size: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ReaderOptions {
    /// Set the read buffer capacity. Values below one byte are raised to one.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }
}

/// Streaming iterator over the raw presentation records of a catalog.
///
/// The iterator ends after the first error.
pub struct CatalogReader<R: Read> {
    reader: NsReader<BufReader<R>>,
    tracker: ContextTracker,
    buf: Vec<u8>,
    /// Character data collected since the last markup event.
    pending_text: String,
    emitted: usize,
    finished: bool,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(input: R, options: &ReaderOptions) -> Self {
        let buffered = BufReader::with_capacity(options.buffer_size.max(1), input);
        Self {
            reader: NsReader::from_reader(buffered),
            tracker: ContextTracker::new(),
            buf: Vec::with_capacity(1024),
            pending_text: String::new(),
            emitted: 0,
            finished: false,
        }
    }

    /// Number of records produced so far.
    pub fn records_emitted(&self) -> usize {
        self.emitted
    }

    /// Read XML events until a presentation closes or the document ends.
    fn next_record(&mut self) -> Result<Option<RawRecord>> {
        loop {
            self.buf.clear();
            let (namespace, event) = match self.reader.read_resolved_event_into(&mut self.buf) {
                Ok((resolved, event)) => (namespace_of(&resolved), event),
                Err(err) => return Err(malformed(&self.reader, err)),
            };

            let decoder = self.reader.decoder();
            let mut events = Vec::with_capacity(2);
            match event {
                Event::Start(start) => {
                    flush_text(&mut self.pending_text, &mut events);
                    events.push(FeedEvent::Open {
                        name: element_name(namespace, &start),
                        attributes: attributes_of(&start),
                    });
                }
                Event::Empty(start) => {
                    flush_text(&mut self.pending_text, &mut events);
                    let name = element_name(namespace, &start);
                    events.push(FeedEvent::Open {
                        name: name.clone(),
                        attributes: attributes_of(&start),
                    });
                    events.push(FeedEvent::Close(name));
                }
                Event::End(end) => {
                    flush_text(&mut self.pending_text, &mut events);
                    events.push(FeedEvent::Close(QualifiedName {
                        namespace,
                        local_name: String::from_utf8_lossy(end.local_name().as_ref())
                            .into_owned(),
                    }));
                }
                Event::Text(text) => {
                    let raw = decoder
                        .decode(&text)
                        .map_err(|err| malformed(&self.reader, err))?;
                    let unescaped = unescape(&raw).map_err(|err| malformed(&self.reader, err))?;
                    self.pending_text.push_str(&unescaped);
                }
                Event::CData(data) => {
                    let raw = decoder
                        .decode(&data)
                        .map_err(|err| malformed(&self.reader, err))?;
                    self.pending_text.push_str(&raw);
                }
                Event::GeneralRef(reference) => {
                    let name = decoder
                        .decode(&reference)
                        .map_err(|err| malformed(&self.reader, err))?;
                    push_reference(&mut self.pending_text, &name);
                }
                Event::Eof => {
                    if self.tracker.depth() > 0 {
                        return Err(IngestError::Truncated {
                            open_elements: self.tracker.depth(),
                        });
                    }
                    debug!(records = self.emitted, "catalog stream finished");
                    return Ok(None);
                }
                _ => {}
            }

            let mut record = None;
            for event in events {
                if let Some(finished) = self.tracker.handle(event) {
                    record = Some(finished);
                }
            }
            if let Some(record) = record {
                self.emitted += 1;
                debug!(
                    record = self.emitted,
                    fields = record.len(),
                    "presentation record emitted"
                );
                return Ok(Some(record));
            }
        }
    }
}

impl<R: Read> Iterator for CatalogReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Read every raw record of a catalog, failing on the first stream error.
pub fn read_records<R: Read>(input: R, options: &ReaderOptions) -> Result<Vec<RawRecord>> {
    CatalogReader::new(input, options).collect()
}

fn namespace_of(resolved: &ResolveResult<'_>) -> Option<String> {
    match resolved {
        ResolveResult::Bound(namespace) => {
            Some(String::from_utf8_lossy(namespace.0).into_owned())
        }
        _ => None,
    }
}

fn element_name(namespace: Option<String>, start: &BytesStart<'_>) -> QualifiedName {
    QualifiedName {
        namespace,
        local_name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
    }
}

fn flush_text(pending: &mut String, events: &mut Vec<FeedEvent>) {
    if !pending.is_empty() {
        events.push(FeedEvent::Text(std::mem::take(pending)));
    }
}

/// Append the replacement text of an entity or character reference.
fn push_reference(pending: &mut String, name: &str) {
    if let Some(ch) = char_reference(name) {
        pending.push(ch);
    } else if let Some(replacement) = resolve_predefined_entity(name) {
        pending.push_str(replacement);
    } else {
        debug!(entity = name, "unknown entity reference kept verbatim");
        pending.push('&');
        pending.push_str(name);
        pending.push(';');
    }
}

fn malformed<R>(reader: &NsReader<R>, err: impl std::fmt::Display) -> IngestError {
    IngestError::Malformed {
        position: reader.buffer_position() as u64,
        message: err.to_string(),
    }
}

/// Attributes of an element. Unparseable attributes are skipped.
fn attributes_of(start: &BytesStart<'_>) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = match attribute {
            Ok(attribute) => attribute,
            Err(err) => {
                debug!(error = %err, "skipping malformed attribute");
                continue;
            }
        };
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        match attribute.unescape_value() {
            Ok(value) => attributes.push(Attribute::new(name, value.into_owned())),
            Err(err) => debug!(attribute = %name, error = %err, "skipping attribute value"),
        }
    }
    attributes
}

/// Resolve `#NN` / `#xHH` character references.
fn char_reference(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
