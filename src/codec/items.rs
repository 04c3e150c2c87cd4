// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Conversion between the structured [`Query`] model and the ordered,
//! typed [`QueryItem`] list used by the interactive editor.

use std::fmt;

use crate::model::{
    AttributeFilter, AttributeItem, Catalog, CollectionItem, DeletedItem, FulltextItem,
    LinkAttributeFilter, LinkAttributeItem, LinkItem, Query, QueryItem, QueryItemKind, QueryStem,
};

/// A stem-scoped item appeared before any collection opened a stem.
///
/// The editor is responsible for only presenting well-formed orderings; this
/// error marks a caller contract violation, not a recoverable runtime state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItemSequenceError {
    index: usize,
    kind: QueryItemKind,
}

impl QueryItemSequenceError {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> QueryItemKind {
        self.kind
    }
}

impl fmt::Display for QueryItemSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query item `{}` at position {} appears before any collection",
            self.kind, self.index
        )
    }
}

impl std::error::Error for QueryItemSequenceError {}

/// Folds an ordered item list back into a structured query.
///
/// A `Collection` item opens a new stem; `Link`, `Attribute`, `LinkAttribute`
/// and `Document` items append to the current (last) stem; `Fulltext` items
/// append to the query's top-level list. Deleted placeholders write their
/// preserved reference back, so a deleted entity survives persistence instead
/// of being silently dropped. `View` items carry no query part and are
/// skipped, as are attribute items whose condition is still being edited.
pub fn to_query(items: &[QueryItem]) -> Result<Query, QueryItemSequenceError> {
    let mut query = Query::default();

    for (index, item) in items.iter().enumerate() {
        match item {
            QueryItem::View(_) => {}
            QueryItem::Collection(collection) => {
                query
                    .stems_mut()
                    .push(QueryStem::new(collection.collection().id().clone()));
            }
            QueryItem::Deleted(DeletedItem::Collection(collection_id)) => {
                query.stems_mut().push(QueryStem::new(collection_id.clone()));
            }
            QueryItem::Link(link) => {
                last_stem(&mut query, index, QueryItemKind::Link)?
                    .link_type_ids_mut()
                    .push(link.link_type().id().clone());
            }
            QueryItem::Deleted(DeletedItem::Link(link_type_id)) => {
                last_stem(&mut query, index, QueryItemKind::Link)?
                    .link_type_ids_mut()
                    .push(link_type_id.clone());
            }
            QueryItem::Attribute(attribute) => {
                if let Some(filter) = attribute.to_filter() {
                    last_stem(&mut query, index, QueryItemKind::Attribute)?
                        .filters_mut()
                        .push(filter);
                }
            }
            QueryItem::Deleted(DeletedItem::Attribute(filter)) => {
                last_stem(&mut query, index, QueryItemKind::Attribute)?
                    .filters_mut()
                    .push(filter.clone());
            }
            QueryItem::LinkAttribute(attribute) => {
                if let Some(filter) = attribute.to_filter() {
                    last_stem(&mut query, index, QueryItemKind::LinkAttribute)?
                        .link_filters_mut()
                        .push(filter);
                }
            }
            QueryItem::Deleted(DeletedItem::LinkAttribute(filter)) => {
                last_stem(&mut query, index, QueryItemKind::LinkAttribute)?
                    .link_filters_mut()
                    .push(filter.clone());
            }
            QueryItem::Document(document) => {
                last_stem(&mut query, index, QueryItemKind::Document)?
                    .document_ids_mut()
                    .push(document.document_id().clone());
            }
            QueryItem::Fulltext(fulltext) => {
                query.fulltexts_mut().push(fulltext.text().to_owned());
            }
        }
    }

    Ok(query)
}

fn last_stem<'q>(
    query: &'q mut Query,
    index: usize,
    kind: QueryItemKind,
) -> Result<&'q mut QueryStem, QueryItemSequenceError> {
    query
        .stems_mut()
        .last_mut()
        .ok_or(QueryItemSequenceError { index, kind })
}

/// Expands a structured query into the ordered item list the editor renders.
///
/// Per stem: the collection item, then the link items, then the attribute and
/// link-attribute filters in chain order (walking the positional collection
/// and link chains, emitting each position's filters before moving on).
/// Filters whose owner fell off a broken chain are appended afterwards in
/// declaration order. Unresolvable references degrade to deleted
/// placeholders; nothing is dropped. Document references are not rendered as
/// items. All fulltexts come last.
pub fn from_query(query: &Query, catalog: &Catalog) -> Vec<QueryItem> {
    let mut items = Vec::new();

    for stem in query.stems() {
        emit_stem(stem, catalog, &mut items);
    }

    for fulltext in query.fulltexts() {
        items.push(QueryItem::Fulltext(FulltextItem::new(fulltext.clone())));
    }

    items
}

fn emit_stem(stem: &QueryStem, catalog: &Catalog, items: &mut Vec<QueryItem>) {
    match catalog.collection(stem.collection_id()) {
        Some(collection) => {
            items.push(QueryItem::Collection(CollectionItem::new(collection.clone())));
        }
        None => {
            items.push(QueryItem::Deleted(DeletedItem::Collection(
                stem.collection_id().clone(),
            )));
        }
    }

    // The positional collection chain; stops extending once a link cannot be
    // resolved against the previous entry.
    let mut collection_chain = vec![stem.collection_id().clone()];
    let mut chain_intact = true;
    for link_type_id in stem.link_type_ids() {
        match catalog.link_type(link_type_id) {
            Some(link_type) => {
                items.push(QueryItem::Link(LinkItem::new(link_type.clone())));
                if chain_intact {
                    let previous = collection_chain.last().expect("non-empty chain");
                    match link_type.other_collection_id(previous) {
                        Some(next) => collection_chain.push(next.clone()),
                        None => chain_intact = false,
                    }
                }
            }
            None => {
                items.push(QueryItem::Deleted(DeletedItem::Link(link_type_id.clone())));
                chain_intact = false;
            }
        }
    }

    let mut filter_emitted = vec![false; stem.filters().len()];
    let mut link_filter_emitted = vec![false; stem.link_filters().len()];

    let positions = collection_chain.len().max(stem.link_type_ids().len());
    for position in 0..positions {
        if let Some(collection_id) = collection_chain.get(position) {
            for (index, filter) in stem.filters().iter().enumerate() {
                if !filter_emitted[index] && filter.collection_id() == collection_id {
                    filter_emitted[index] = true;
                    items.push(attribute_item(filter, catalog));
                }
            }
        }
        if let Some(link_type_id) = stem.link_type_ids().get(position) {
            for (index, filter) in stem.link_filters().iter().enumerate() {
                if !link_filter_emitted[index] && filter.link_type_id() == link_type_id {
                    link_filter_emitted[index] = true;
                    items.push(link_attribute_item(filter, catalog));
                }
            }
        }
    }

    for (index, filter) in stem.filters().iter().enumerate() {
        if !filter_emitted[index] {
            items.push(attribute_item(filter, catalog));
        }
    }
    for (index, filter) in stem.link_filters().iter().enumerate() {
        if !link_filter_emitted[index] {
            items.push(link_attribute_item(filter, catalog));
        }
    }
}

fn attribute_item(filter: &AttributeFilter, catalog: &Catalog) -> QueryItem {
    let resolved = catalog
        .collection(filter.collection_id())
        .and_then(|collection| {
            collection
                .attribute(filter.attribute_id())
                .map(|attribute| (collection, attribute))
        });
    match resolved {
        Some((collection, attribute)) => QueryItem::Attribute(AttributeItem::new(
            collection.clone(),
            attribute.clone(),
            Some(filter.condition()),
            filter.condition_values().to_vec(),
        )),
        None => QueryItem::Deleted(DeletedItem::Attribute(filter.clone())),
    }
}

fn link_attribute_item(filter: &LinkAttributeFilter, catalog: &Catalog) -> QueryItem {
    let resolved = catalog.link_type(filter.link_type_id()).and_then(|link_type| {
        link_type
            .attribute(filter.attribute_id())
            .map(|attribute| (link_type, attribute))
    });
    match resolved {
        Some((link_type, attribute)) => QueryItem::LinkAttribute(LinkAttributeItem::new(
            link_type.clone(),
            attribute.clone(),
            Some(filter.condition()),
            filter.condition_values().to_vec(),
        )),
        None => QueryItem::Deleted(DeletedItem::LinkAttribute(filter.clone())),
    }
}
