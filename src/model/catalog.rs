// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{AttributeId, CollectionId, LinkTypeId, ViewId};
use super::query::Query;

/// One attribute of a collection or link type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    id: AttributeId,
    name: String,
    usage_count: u64,
}

impl Attribute {
    pub fn new(id: AttributeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            usage_count: 0,
        }
    }

    pub fn with_usage_count(mut self, usage_count: u64) -> Self {
        self.usage_count = usage_count;
        self
    }

    pub fn id(&self) -> &AttributeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }
}

/// A table-like entity holding documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    id: CollectionId,
    name: String,
    favorite: bool,
    attributes: Vec<Attribute>,
}

impl Collection {
    pub fn new(id: CollectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            favorite: false,
            attributes: Vec::new(),
        }
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn id(&self) -> &CollectionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn favorite(&self) -> bool {
        self.favorite
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, attribute_id: &AttributeId) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id() == attribute_id)
    }
}

/// A named join between exactly two collections, with its own attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkType {
    id: LinkTypeId,
    name: String,
    collection_ids: [CollectionId; 2],
    attributes: Vec<Attribute>,
}

impl LinkType {
    pub fn new(
        id: LinkTypeId,
        name: impl Into<String>,
        collection_ids: [CollectionId; 2],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            collection_ids,
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn id(&self) -> &LinkTypeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collection_ids(&self) -> &[CollectionId; 2] {
        &self.collection_ids
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, attribute_id: &AttributeId) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id() == attribute_id)
    }

    pub fn touches(&self, collection_id: &CollectionId) -> bool {
        self.collection_ids.iter().any(|id| id == collection_id)
    }

    /// The collection on the other end of this link, seen from `collection_id`.
    ///
    /// For a self-link (both ends on the same collection) this returns that
    /// collection again.
    pub fn other_collection_id(&self, collection_id: &CollectionId) -> Option<&CollectionId> {
        let [first, second] = &self.collection_ids;
        if first == collection_id {
            Some(second)
        } else if second == collection_id {
            Some(first)
        } else {
            None
        }
    }
}

/// A saved perspective carrying a whole query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    id: ViewId,
    name: String,
    favorite: bool,
    query: Query,
}

impl View {
    pub fn new(id: ViewId, name: impl Into<String>, query: Query) -> Self {
        Self {
            id,
            name: name.into(),
            favorite: false,
            query,
        }
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn favorite(&self) -> bool {
        self.favorite
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// Read-only snapshot of the entities suggestions are generated from.
///
/// The lists arrive pre-sorted by the surrounding store: most recently used
/// or favorite entities first. The ordering contract is: stable, and
/// deterministic for equal inputs. The catalog never recomputes recency; it
/// only reads positions off these lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    collections: Vec<Collection>,
    link_types: Vec<LinkType>,
    views: Vec<View>,
}

impl Catalog {
    pub fn new(collections: Vec<Collection>, link_types: Vec<LinkType>, views: Vec<View>) -> Self {
        Self {
            collections,
            link_types,
            views,
        }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn link_types(&self) -> &[LinkType] {
        &self.link_types
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id() == id)
    }

    pub fn link_type(&self, id: &LinkTypeId) -> Option<&LinkType> {
        self.link_types.iter().find(|l| l.id() == id)
    }

    pub fn view(&self, id: &ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id() == id)
    }

    /// Position of a collection in the recency ordering, if present.
    pub fn collection_position(&self, id: &CollectionId) -> Option<usize> {
        self.collections.iter().position(|c| c.id() == id)
    }

    /// Position of a view in the recency ordering, if present.
    pub fn view_position(&self, id: &ViewId) -> Option<usize> {
        self.views.iter().position(|v| v.id() == id)
    }
}
