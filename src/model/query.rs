// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{AttributeId, CollectionId, DocumentId, LinkTypeId};

/// A structured search expression over collections, links and attributes.
///
/// Stem order is insertion order and is semantically meaningful: it defines
/// the join chain. Filters within a stem are unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    stems: Vec<QueryStem>,
    fulltexts: Vec<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl Query {
    pub fn new(stems: Vec<QueryStem>, fulltexts: Vec<String>) -> Self {
        Self {
            stems,
            fulltexts,
            page: None,
            page_size: None,
        }
    }

    pub fn stems(&self) -> &[QueryStem] {
        &self.stems
    }

    pub fn stems_mut(&mut self) -> &mut Vec<QueryStem> {
        &mut self.stems
    }

    pub fn fulltexts(&self) -> &[String] {
        &self.fulltexts
    }

    pub fn fulltexts_mut(&mut self) -> &mut Vec<String> {
        &mut self.fulltexts
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn set_page(&mut self, page: Option<u32>) {
        self.page = page;
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: Option<u32>) {
        self.page_size = page_size;
    }

    /// True when the query carries no stems, no fulltexts and no pagination.
    ///
    /// An empty query has no serialized form: the string codec maps it to the
    /// empty string and back.
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
            && self.fulltexts.is_empty()
            && self.page.is_none()
            && self.page_size.is_none()
    }
}

/// One base collection plus its outgoing join chain and filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStem {
    collection_id: CollectionId,
    link_type_ids: Vec<LinkTypeId>,
    filters: Vec<AttributeFilter>,
    link_filters: Vec<LinkAttributeFilter>,
    document_ids: Vec<DocumentId>,
}

impl QueryStem {
    pub fn new(collection_id: CollectionId) -> Self {
        Self {
            collection_id,
            link_type_ids: Vec::new(),
            filters: Vec::new(),
            link_filters: Vec::new(),
            document_ids: Vec::new(),
        }
    }

    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    pub fn link_type_ids(&self) -> &[LinkTypeId] {
        &self.link_type_ids
    }

    pub fn link_type_ids_mut(&mut self) -> &mut Vec<LinkTypeId> {
        &mut self.link_type_ids
    }

    pub fn filters(&self) -> &[AttributeFilter] {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut Vec<AttributeFilter> {
        &mut self.filters
    }

    pub fn link_filters(&self) -> &[LinkAttributeFilter] {
        &self.link_filters
    }

    pub fn link_filters_mut(&mut self) -> &mut Vec<LinkAttributeFilter> {
        &mut self.link_filters
    }

    pub fn document_ids(&self) -> &[DocumentId] {
        &self.document_ids
    }

    pub fn document_ids_mut(&mut self) -> &mut Vec<DocumentId> {
        &mut self.document_ids
    }
}

/// A filter over one attribute of a collection in the stem's chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFilter {
    collection_id: CollectionId,
    attribute_id: AttributeId,
    condition: ConditionType,
    condition_values: Vec<ConditionValue>,
}

impl AttributeFilter {
    pub fn new(
        collection_id: CollectionId,
        attribute_id: AttributeId,
        condition: ConditionType,
        condition_values: Vec<ConditionValue>,
    ) -> Self {
        Self {
            collection_id,
            attribute_id,
            condition,
            condition_values,
        }
    }

    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    pub fn attribute_id(&self) -> &AttributeId {
        &self.attribute_id
    }

    pub fn condition(&self) -> ConditionType {
        self.condition
    }

    pub fn condition_values(&self) -> &[ConditionValue] {
        &self.condition_values
    }
}

/// A filter over one attribute of a traversed link type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttributeFilter {
    link_type_id: LinkTypeId,
    attribute_id: AttributeId,
    condition: ConditionType,
    condition_values: Vec<ConditionValue>,
}

impl LinkAttributeFilter {
    pub fn new(
        link_type_id: LinkTypeId,
        attribute_id: AttributeId,
        condition: ConditionType,
        condition_values: Vec<ConditionValue>,
    ) -> Self {
        Self {
            link_type_id,
            attribute_id,
            condition,
            condition_values,
        }
    }

    pub fn link_type_id(&self) -> &LinkTypeId {
        &self.link_type_id
    }

    pub fn attribute_id(&self) -> &AttributeId {
        &self.attribute_id
    }

    pub fn condition(&self) -> ConditionType {
        self.condition
    }

    pub fn condition_values(&self) -> &[ConditionValue] {
        &self.condition_values
    }
}

/// The closed set of comparison operators a filter may use.
///
/// The serde names are part of the persisted query-string format and must
/// stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    #[serde(rename = "eq")]
    Eq,
    #[serde(rename = "neq")]
    NotEq,
    #[serde(rename = "gt")]
    Gt,
    #[serde(rename = "lt")]
    Lt,
    #[serde(rename = "gte")]
    GtEq,
    #[serde(rename = "lte")]
    LtEq,
    #[serde(rename = "between")]
    Between,
    #[serde(rename = "notBetween")]
    NotBetween,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "notContains")]
    NotContains,
    #[serde(rename = "startsWith")]
    StartsWith,
    #[serde(rename = "endsWith")]
    EndsWith,
    #[serde(rename = "empty")]
    IsEmpty,
    #[serde(rename = "notEmpty")]
    NotEmpty,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "hasSome")]
    HasSome,
    #[serde(rename = "hasAll")]
    HasAll,
    #[serde(rename = "hasNoneOf")]
    HasNoneOf,
}

/// How many operands a condition consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionArity {
    None,
    One,
    Pair,
    Many,
}

impl ConditionType {
    pub fn arity(self) -> ConditionArity {
        match self {
            Self::IsEmpty | Self::NotEmpty => ConditionArity::None,
            Self::Eq
            | Self::NotEq
            | Self::Gt
            | Self::Lt
            | Self::GtEq
            | Self::LtEq
            | Self::Contains
            | Self::NotContains
            | Self::StartsWith
            | Self::EndsWith => ConditionArity::One,
            Self::Between | Self::NotBetween => ConditionArity::Pair,
            Self::In | Self::HasSome | Self::HasAll | Self::HasNoneOf => ConditionArity::Many,
        }
    }
}

/// One typed operand of a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionValue {
    kind: Option<String>,
    value: Option<String>,
}

impl ConditionValue {
    pub fn new(kind: Option<String>, value: Option<String>) -> Self {
        Self { kind, value }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            kind: None,
            value: Some(value.into()),
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
