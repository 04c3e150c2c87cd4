// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query serialization surfaces.
//!
//! Two independent codecs: [`items`] converts between the structured query
//! and the editor's ordered token list, [`string`] converts between the
//! structured query and the compact checksummed string persisted in URLs.

pub mod items;
pub mod shortened;
pub mod string;

pub use items::{from_query, to_query, QueryItemSequenceError};
pub use shortened::ShortenedQuery;
pub use string::{decode, encode, encode_query, parse_query, stringify_query};
