//! Auxiliary record kinds: quotes and books.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A quotation with its attribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

/// A bibliography entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Publication year, kept verbatim ("1584", "ok. 1590")
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,

    /// Publishing house
    #[serde(deserialize_with = "null_as_default")]
    pub pubhause: String,

    /// Place of publication
    #[serde(rename = "where", deserialize_with = "null_as_default")]
    pub place: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "ISBN", deserialize_with = "null_as_default")]
    pub isbn: String,

    #[serde(rename = "URL", deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(rename = "URLName", deserialize_with = "null_as_default")]
    pub url_name: String,

    /// Cover image file reference
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,

    #[serde(deserialize_with = "null_as_default")]
    pub pages: u32,

    /// External link block, empty without a URL
    #[serde(skip)]
    pub url_html: String,

    /// Cover image block, empty without an image
    #[serde(skip)]
    pub image_html: String,
}
