//! Record parsing for YAML document streams.
//!
//! Each data file is a stream of YAML documents separated by `---`, one
//! record per document. Documents are decoded independently and in stream
//! order; an empty document (e.g. a trailing `---`) is skipped, and the first
//! malformed document fails the whole stream.

pub mod render;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Book, Fact, Quote};

pub use render::TextStyle;

/// Errors that can occur while decoding a document stream
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed document #{index}: {source}")]
    Document {
        /// Zero-based position of the document in the stream
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Decode every non-empty document of a stream into `T`
pub fn decode_stream<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, ParseError> {
    let mut records = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_slice(bytes).enumerate() {
        let record = Option::<T>::deserialize(document)
            .map_err(|source| ParseError::Document { index, source })?;

        if let Some(record) = record {
            records.push(record);
        }
    }

    Ok(records)
}

/// Parse a day-file into enriched facts
pub fn parse_facts(bytes: &[u8]) -> Result<Vec<Fact>, ParseError> {
    let mut facts: Vec<Fact> = decode_stream(bytes)?;
    facts.iter_mut().for_each(enrich_fact);
    Ok(facts)
}

/// Parse the quotes file
pub fn parse_quotes(bytes: &[u8]) -> Result<Vec<Quote>, ParseError> {
    decode_stream(bytes)
}

/// Parse the books file into enriched books
pub fn parse_books(bytes: &[u8]) -> Result<Vec<Book>, ParseError> {
    let mut books: Vec<Book> = decode_stream(bytes)?;
    books.iter_mut().for_each(enrich_book);
    Ok(books)
}

/// Fill the derived presentation fields of a fact from its own fields
pub fn enrich_fact(fact: &mut Fact) {
    fact.content_html = render::fact_content(&fact.content, &fact.sources, TextStyle::Html);
    fact.image_html = render::image_block(&fact.image, &fact.image_info);
    fact.geo_html = render::geo_block(&fact.geo);
}

/// Fill the derived presentation fields of a book from its own fields
pub fn enrich_book(book: &mut Book) {
    book.image_html = render::book_image_block(&book.image);
    book.url_html = render::book_link(&book.url, &book.url_name);
}
