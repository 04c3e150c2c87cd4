// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! URL-safe query-string codec.
//!
//! The wire form is `base64(json) || checksum`: the shortened JSON encoded as
//! unpadded URL-safe base64, followed by eight lowercase hex digits of a
//! shifted CRC32 over the base64 text. The empty query has no wire form; it
//! encodes to and decodes from the empty string. Corrupt input never errors,
//! it decodes to the empty string, because these strings travel through URLs
//! and bookmarks the application does not control.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use super::shortened::ShortenedQuery;
use crate::model::Query;

const CHECKSUM_LEN: usize = 8;

/// CRC32 of the base64 text, shifted into `0..2^32` via signed wrap-around
/// plus `2^31`, as eight zero-padded lowercase hex digits.
///
/// The shift looks odd but is load-bearing: the original format computed the
/// checksum in a signed 32-bit domain, and existing persisted strings carry
/// these digits.
fn checksum(payload: &str) -> String {
    let crc = crc32fast::hash(payload.as_bytes());
    let shifted = i64::from(crc as i32) + (1i64 << 31);
    format!("{shifted:08x}")
}

/// The shortened JSON form of a query.
///
/// An empty query shortens to `{}`, which [`encode`] in turn maps to the
/// empty string.
pub fn stringify_query(query: &Query) -> String {
    serde_json::to_string(&ShortenedQuery::from_query(query)).unwrap_or_default()
}

/// Wraps a JSON text into the checksummed wire form.
///
/// The empty text and the empty object have no wire form.
pub fn encode(text: &str) -> String {
    if text.is_empty() || text == "{}" {
        return String::new();
    }
    let mut payload = URL_SAFE_NO_PAD.encode(text.as_bytes());
    let sum = checksum(&payload);
    payload.push_str(&sum);
    payload
}

/// Unwraps the checksummed wire form back into its JSON text.
///
/// Any corruption, a failed checksum, invalid base64, or payload bytes that
/// are not UTF-8, yields the empty string.
pub fn decode(text: &str) -> String {
    if text.len() <= CHECKSUM_LEN || !text.is_ascii() {
        return String::new();
    }
    let (payload, expected) = text.split_at(text.len() - CHECKSUM_LEN);
    if checksum(payload) != expected {
        return String::new();
    }
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload) else {
        return String::new();
    };
    String::from_utf8(bytes).unwrap_or_default()
}

/// Shortens, stringifies and encodes a query in one step.
pub fn encode_query(query: &Query) -> String {
    encode(&stringify_query(query))
}

/// Decodes and rebuilds a query from its wire form.
///
/// The empty string parses to the empty query. Anything else that fails
/// decoding, JSON parsing or id validation yields `None`.
pub fn parse_query(text: &str) -> Option<Query> {
    if text.is_empty() {
        return Some(Query::default());
    }
    let json = decode(text);
    if json.is_empty() {
        return None;
    }
    let shortened: ShortenedQuery = serde_json::from_str(&json).ok()?;
    shortened.into_query().ok()
}
