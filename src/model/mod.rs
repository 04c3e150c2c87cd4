// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types.
//!
//! Queries are ordered stems over a catalog of collections, link types and
//! views; query items are the editor-facing token form of the same data.

pub mod catalog;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod query;
pub mod query_item;

pub use catalog::{Attribute, Catalog, Collection, LinkType, View};
pub use ids::{
    AttributeId, CollectionId, DocumentId, Id, IdError, LinkTypeId, ViewId,
};
pub use query::{
    AttributeFilter, ConditionArity, ConditionType, ConditionValue, LinkAttributeFilter, Query,
    QueryStem,
};
pub use query_item::{
    AttributeItem, CollectionItem, DeletedItem, DocumentItem, FulltextItem, LinkAttributeItem,
    LinkItem, QueryItem, QueryItemKind, ViewItem,
};
