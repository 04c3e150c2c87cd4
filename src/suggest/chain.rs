// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resolution of the active stem and its positional id chains.
//!
//! The chains are parallel: index `i` of the link-type chain is the link
//! joining collection-chain index `i` to `i + 1`.

use crate::model::{CollectionId, LinkTypeId, QueryItem};

/// Index of the last `Collection` item, or 0 when none exists.
pub fn last_collection_index(items: &[QueryItem]) -> usize {
    items
        .iter()
        .rposition(QueryItem::is_collection)
        .unwrap_or(0)
}

/// The "active stem": items from the last collection onwards, minus fulltexts.
pub fn filter_last_stem_items(items: &[QueryItem]) -> Vec<&QueryItem> {
    let start = last_collection_index(items);
    items[start..]
        .iter()
        .filter(|item| !item.is_fulltext())
        .collect()
}

/// Collection ids reachable by following the active stem's links in order.
///
/// Empty unless the first item is a `Collection`. The walk stops at the first
/// non-`Link` item, and at a link that does not touch the previous chain
/// entry.
pub fn collection_ids_chain<'a, I>(stem_items: I) -> Vec<CollectionId>
where
    I: IntoIterator<Item = &'a QueryItem>,
{
    let mut iter = stem_items.into_iter();
    let Some(QueryItem::Collection(first)) = iter.next() else {
        return Vec::new();
    };

    let mut chain = vec![first.collection().id().clone()];
    for item in iter {
        let QueryItem::Link(link) = item else {
            break;
        };
        let previous = chain.last().cloned().expect("non-empty chain");
        match link.link_type().other_collection_id(&previous) {
            Some(next) => chain.push(next.clone()),
            None => break,
        }
    }
    chain
}

/// Link-type ids of the same walk as [`collection_ids_chain`].
pub fn link_type_ids_chain<'a, I>(stem_items: I) -> Vec<LinkTypeId>
where
    I: IntoIterator<Item = &'a QueryItem>,
{
    let mut iter = stem_items.into_iter();
    if !matches!(iter.next(), Some(QueryItem::Collection(_))) {
        return Vec::new();
    }

    let mut chain = Vec::new();
    for item in iter {
        let QueryItem::Link(link) = item else {
            break;
        };
        chain.push(link.link_type().id().clone());
    }
    chain
}
