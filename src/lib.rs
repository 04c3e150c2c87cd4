// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stemma — query suggestion ranking and compact query-string codec.
//!
//! The [`suggest`] module turns typed text plus the current query tokens into
//! a ranked token list; the [`codec`] module moves queries between their
//! structured, token and URL-string forms.

pub mod codec;
pub mod model;
pub mod suggest;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
