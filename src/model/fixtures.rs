// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalog::{Attribute, Catalog, Collection, LinkType, View};
use super::ids::{AttributeId, CollectionId, LinkTypeId, ViewId};
use super::query::{Query, QueryStem};
use super::query_item::{
    AttributeItem, CollectionItem, FulltextItem, LinkAttributeItem, LinkItem, QueryItem,
};

pub(crate) fn cid(value: &str) -> CollectionId {
    CollectionId::new(value).expect("collection id")
}

pub(crate) fn lid(value: &str) -> LinkTypeId {
    LinkTypeId::new(value).expect("link type id")
}

pub(crate) fn aid(value: &str) -> AttributeId {
    AttributeId::new(value).expect("attribute id")
}

pub(crate) fn vid(value: &str) -> ViewId {
    ViewId::new(value).expect("view id")
}

/// Three collections, two link types joining them in a row, two views.
///
/// Recency ordering is list order: `tasks` is both first and favorite.
pub(crate) fn small_catalog() -> Catalog {
    let tasks = Collection::new(cid("c1"), "tasks")
        .with_favorite(true)
        .with_attributes(vec![
            Attribute::new(aid("a1"), "title").with_usage_count(40),
            Attribute::new(aid("a2"), "due date").with_usage_count(10),
        ]);
    let projects = Collection::new(cid("c2"), "projects").with_attributes(vec![
        Attribute::new(aid("a1"), "name").with_usage_count(25),
    ]);
    let clients = Collection::new(cid("c3"), "clients").with_attributes(vec![
        Attribute::new(aid("a1"), "company").with_usage_count(2),
    ]);

    let assignment = LinkType::new(lid("l12"), "assignment", [cid("c1"), cid("c2")])
        .with_attributes(vec![Attribute::new(aid("a1"), "role").with_usage_count(5)]);
    let contract = LinkType::new(lid("l23"), "contract", [cid("c2"), cid("c3")]);

    let kanban = View::new(vid("v1"), "kanban", Query::new(vec![QueryStem::new(cid("c1"))], Vec::new()))
        .with_favorite(true);
    let timeline = View::new(vid("v2"), "timeline", Query::default());

    Catalog::new(
        vec![tasks, projects, clients],
        vec![assignment, contract],
        vec![kanban, timeline],
    )
}

pub(crate) fn collection_item(catalog: &Catalog, collection: &str) -> QueryItem {
    let collection = catalog.collection(&cid(collection)).expect("collection");
    QueryItem::Collection(CollectionItem::new(collection.clone()))
}

pub(crate) fn link_item(catalog: &Catalog, link_type: &str) -> QueryItem {
    let link_type = catalog.link_type(&lid(link_type)).expect("link type");
    QueryItem::Link(LinkItem::new(link_type.clone()))
}

pub(crate) fn attribute_item(catalog: &Catalog, collection: &str, attribute: &str) -> QueryItem {
    let collection = catalog.collection(&cid(collection)).expect("collection");
    let attribute = collection.attribute(&aid(attribute)).expect("attribute");
    QueryItem::Attribute(AttributeItem::new(
        collection.clone(),
        attribute.clone(),
        None,
        Vec::new(),
    ))
}

pub(crate) fn link_attribute_item(
    catalog: &Catalog,
    link_type: &str,
    attribute: &str,
) -> QueryItem {
    let link_type = catalog.link_type(&lid(link_type)).expect("link type");
    let attribute = link_type.attribute(&aid(attribute)).expect("attribute");
    QueryItem::LinkAttribute(LinkAttributeItem::new(
        link_type.clone(),
        attribute.clone(),
        None,
        Vec::new(),
    ))
}

pub(crate) fn fulltext_item(text: &str) -> QueryItem {
    QueryItem::Fulltext(FulltextItem::new(text))
}
