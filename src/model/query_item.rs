// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::catalog::{Attribute, Collection, LinkType, View};
use super::ids::{CollectionId, DocumentId, LinkTypeId};
use super::query::{AttributeFilter, ConditionType, ConditionValue, LinkAttributeFilter};

/// One visually distinct token in the interactive query editor.
///
/// An ordered list of these is the sole interchange format between the
/// ranking engine and the editor UI; the UI never builds [`Query`] values
/// directly while editing.
///
/// [`Query`]: super::query::Query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryItem {
    View(ViewItem),
    Collection(CollectionItem),
    Link(LinkItem),
    Attribute(AttributeItem),
    LinkAttribute(LinkAttributeItem),
    Document(DocumentItem),
    Fulltext(FulltextItem),
    Deleted(DeletedItem),
}

impl QueryItem {
    pub fn kind(&self) -> QueryItemKind {
        match self {
            Self::View(_) => QueryItemKind::View,
            Self::Collection(_) => QueryItemKind::Collection,
            Self::Link(_) => QueryItemKind::Link,
            Self::Attribute(_) => QueryItemKind::Attribute,
            Self::LinkAttribute(_) => QueryItemKind::LinkAttribute,
            Self::Document(_) => QueryItemKind::Document,
            Self::Fulltext(_) => QueryItemKind::Fulltext,
            Self::Deleted(_) => QueryItemKind::Deleted,
        }
    }

    /// Display text shown in the editor.
    pub fn text(&self) -> &str {
        match self {
            Self::View(item) => item.view.name(),
            Self::Collection(item) => item.collection.name(),
            Self::Link(item) => item.link_type.name(),
            Self::Attribute(item) => item.attribute.name(),
            Self::LinkAttribute(item) => item.attribute.name(),
            Self::Document(item) => &item.title,
            Self::Fulltext(item) => &item.text,
            Self::Deleted(_) => "",
        }
    }

    /// Identity key used for diffing and deduplication.
    ///
    /// Identity is the pair (kind, value); values are only unique within one
    /// kind.
    pub fn value(&self) -> String {
        match self {
            Self::View(item) => item.view.id().to_string(),
            Self::Collection(item) => item.collection.id().to_string(),
            Self::Link(item) => item.link_type.id().to_string(),
            Self::Attribute(item) => {
                format!("{}:{}", item.collection.id(), item.attribute.id())
            }
            Self::LinkAttribute(item) => {
                format!("{}:{}", item.link_type.id(), item.attribute.id())
            }
            Self::Document(item) => format!("{}:{}", item.collection_id, item.document_id),
            Self::Fulltext(item) => item.text.clone(),
            Self::Deleted(item) => item.value(),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    pub fn is_fulltext(&self) -> bool {
        matches!(self, Self::Fulltext(_))
    }
}

/// Discriminant of [`QueryItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryItemKind {
    View,
    Collection,
    Link,
    Attribute,
    LinkAttribute,
    Document,
    Fulltext,
    Deleted,
}

impl QueryItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Collection => "collection",
            Self::Link => "link",
            Self::Attribute => "attribute",
            Self::LinkAttribute => "link-attribute",
            Self::Document => "document",
            Self::Fulltext => "fulltext",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for QueryItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewItem {
    view: View,
}

impl ViewItem {
    pub fn new(view: View) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &View {
        &self.view
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionItem {
    collection: Collection,
}

impl CollectionItem {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkItem {
    link_type: LinkType,
}

impl LinkItem {
    pub fn new(link_type: LinkType) -> Self {
        Self { link_type }
    }

    pub fn link_type(&self) -> &LinkType {
        &self.link_type
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeItem {
    collection: Collection,
    attribute: Attribute,
    condition: Option<ConditionType>,
    condition_values: Vec<ConditionValue>,
}

impl AttributeItem {
    pub fn new(
        collection: Collection,
        attribute: Attribute,
        condition: Option<ConditionType>,
        condition_values: Vec<ConditionValue>,
    ) -> Self {
        Self {
            collection,
            attribute,
            condition,
            condition_values,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn condition(&self) -> Option<ConditionType> {
        self.condition
    }

    pub fn condition_values(&self) -> &[ConditionValue] {
        &self.condition_values
    }

    /// The filter this token stands for, once its condition has been chosen.
    ///
    /// `None` while the condition is still being edited.
    pub fn to_filter(&self) -> Option<AttributeFilter> {
        self.condition.map(|condition| {
            AttributeFilter::new(
                self.collection.id().clone(),
                self.attribute.id().clone(),
                condition,
                self.condition_values.clone(),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkAttributeItem {
    link_type: LinkType,
    attribute: Attribute,
    condition: Option<ConditionType>,
    condition_values: Vec<ConditionValue>,
}

impl LinkAttributeItem {
    pub fn new(
        link_type: LinkType,
        attribute: Attribute,
        condition: Option<ConditionType>,
        condition_values: Vec<ConditionValue>,
    ) -> Self {
        Self {
            link_type,
            attribute,
            condition,
            condition_values,
        }
    }

    pub fn link_type(&self) -> &LinkType {
        &self.link_type
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn condition(&self) -> Option<ConditionType> {
        self.condition
    }

    pub fn condition_values(&self) -> &[ConditionValue] {
        &self.condition_values
    }

    /// The filter this token stands for, once its condition has been chosen.
    ///
    /// `None` while the condition is still being edited.
    pub fn to_filter(&self) -> Option<LinkAttributeFilter> {
        self.condition.map(|condition| {
            LinkAttributeFilter::new(
                self.link_type.id().clone(),
                self.attribute.id().clone(),
                condition,
                self.condition_values.clone(),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentItem {
    collection_id: CollectionId,
    document_id: DocumentId,
    title: String,
}

impl DocumentItem {
    pub fn new(
        collection_id: CollectionId,
        document_id: DocumentId,
        title: impl Into<String>,
    ) -> Self {
        Self {
            collection_id,
            document_id,
            title: title.into(),
        }
    }

    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulltextItem {
    text: String,
}

impl FulltextItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Placeholder for a token whose referenced entity no longer exists.
///
/// The underlying reference is kept so the item survives the round trip back
/// into a [`Query`]; the UI renders it as deleted and the user removes it
/// explicitly.
///
/// [`Query`]: super::query::Query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletedItem {
    Collection(CollectionId),
    Link(LinkTypeId),
    Attribute(AttributeFilter),
    LinkAttribute(LinkAttributeFilter),
}

impl DeletedItem {
    /// Which variant this placeholder stands in for.
    pub fn replaces(&self) -> QueryItemKind {
        match self {
            Self::Collection(_) => QueryItemKind::Collection,
            Self::Link(_) => QueryItemKind::Link,
            Self::Attribute(_) => QueryItemKind::Attribute,
            Self::LinkAttribute(_) => QueryItemKind::LinkAttribute,
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Collection(id) => id.to_string(),
            Self::Link(id) => id.to_string(),
            Self::Attribute(filter) => {
                format!("{}:{}", filter.collection_id(), filter.attribute_id())
            }
            Self::LinkAttribute(filter) => {
                format!("{}:{}", filter.link_type_id(), filter.attribute_id())
            }
        }
    }
}
