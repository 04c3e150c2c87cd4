// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics by NFD-decomposing and dropping combining marks.
///
/// This is an input normalization step for comparisons, not scoring logic;
/// `café` and `cafe` compare equal afterwards.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Comparison form used by the scorer: diacritics stripped, lowercased.
pub(crate) fn fold(text: &str) -> String {
    strip_diacritics(text).to_lowercase()
}
