// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Base match scoring and recency/favorite bonuses.
//!
//! Matching is substring-based over diacritic-stripped, lowercased text; there
//! is no fuzzy or edit-distance matching.

use super::text::fold;

/// Candidate name equals the typed text.
pub const FULL_MATCH: i32 = 20;
/// Typed text equals one whitespace-delimited word of the name.
pub const CONTAINS_WORD: i32 = 10;
/// Candidate name starts with the typed text.
pub const STARTS_WITH: i32 = 5;
/// Candidate name contains the typed text somewhere.
pub const CONTAINS: i32 = 0;
/// Sentinel excluding a candidate entirely, not just de-prioritizing it.
///
/// Half of `i32::MIN` so bonus arithmetic on top of it cannot overflow.
pub const RESTRICTED: i32 = i32::MIN / 2;

pub const FAVORITE: i32 = 8;
pub const LAST_USED: i32 = 4;
pub const MOST_USED: i32 = 4;

/// How deep into the recency ordering an entity still counts as last-used.
pub const LAST_USED_THRESHOLD: usize = 5;
/// How many attributes count as most-used across all visible collections.
pub const MOST_USED_THRESHOLD: usize = 5;

pub const MAX_SUGGESTIONS: usize = 15;

/// Flat bonus so a bare collection outranks a bare attribute at equal text
/// score.
pub const ADDITIONAL_COLLECTION_POINTS: i32 = MOST_USED + 1;

/// Base score of a candidate name against the typed text; first rule wins.
pub fn match_score(name: &str, text: &str) -> i32 {
    let name = fold(name);
    let text = fold(text);

    if name == text {
        FULL_MATCH
    } else if name.split_whitespace().any(|word| word == text) {
        CONTAINS_WORD
    } else if name.starts_with(&text) {
        STARTS_WITH
    } else if name.contains(&text) {
        CONTAINS
    } else {
        RESTRICTED
    }
}

/// Bonus for favorite and recently used entities.
///
/// `recently_used` means the entity sits within the first
/// [`LAST_USED_THRESHOLD`] positions of the store-supplied recency ordering.
/// `divider` halves the weight when a link type touches two collections, so
/// each side contributes half.
pub fn recency_and_favorite_bonus(favorite: bool, recently_used: bool, divider: i32) -> i32 {
    let mut bonus = 0;
    if favorite {
        bonus += FAVORITE;
    }
    if recently_used {
        bonus += LAST_USED;
    }
    bonus / divider
}

/// True when a recency-ordering position counts as recently used.
pub(crate) fn within_last_used(position: Option<usize>) -> bool {
    position.is_some_and(|p| p < LAST_USED_THRESHOLD)
}
