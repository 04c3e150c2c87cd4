// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Suggestion ranking over catalog snapshots.
//!
//! Free text plus the current query items go in; a scored, deduplicated,
//! quota-limited list of query items comes out.

pub mod chain;
pub mod engine;
pub mod score;
pub mod text;

pub use chain::{
    collection_ids_chain, filter_last_stem_items, last_collection_index, link_type_ids_chain,
};
pub use engine::{
    ConditionDefaults, StandardConditionDefaults, SuggestionCategory, SuggestionEngine,
    SuggestionRequest,
};
pub use score::{match_score, recency_and_favorite_bonus, MAX_SUGGESTIONS};
pub use text::strip_diacritics;
