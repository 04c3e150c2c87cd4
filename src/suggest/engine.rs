// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The suggestion pipeline: generate, re-score, sort, slice, convert.
//!
//! Every stage is a pure transform over the request snapshot; scoring stages
//! produce new scored records instead of mutating candidates in place.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{
    Attribute, AttributeId, AttributeItem, Catalog, Collection, CollectionId, CollectionItem,
    ConditionType, ConditionValue, FulltextItem, LinkAttributeItem, LinkItem, LinkType,
    LinkTypeId, QueryItem, View, ViewItem,
};

use super::chain;
use super::score;

// Bonus applied when both the query and the typed text are still empty; views
// are only suggested before any stem has been started, collections next, and
// so on down the ladder.
const VIEW_EMPTY_QUERY_AND_TEXT: i32 = 100;
const COLLECTION_EMPTY_QUERY_AND_TEXT: i32 = 70;
const LINK_EMPTY_QUERY_AND_TEXT: i32 = 45;
const ATTRIBUTE_EMPTY_QUERY_AND_TEXT: i32 = 10;
const LINK_ATTRIBUTE_EMPTY_QUERY_AND_TEXT: i32 = 0;

const IS_DIRECTLY_LINKABLE: i32 = 20;
const IS_LINKABLE: i32 = 10;
const IS_LINKABLE_DUPLICATED: i32 = 5;

const ATTRIBUTE_IN_CURRENT_STEM: i32 = 20;
const ATTRIBUTE_USED_IN_CURRENT_STEM: i32 = 17;
const LINK_ATTRIBUTE_IN_CURRENT_STEM: i32 = 15;
const LINK_ATTRIBUTE_USED_IN_CURRENT_STEM: i32 = 12;

/// Per-category cap in the empty/browse state.
const EMPTY_STATE_QUOTA: usize = 3;
const FULLTEXT_QUOTA: usize = 1;

/// The category a scored candidate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuggestionCategory {
    View,
    Collection,
    LinkType,
    Attribute,
    LinkAttribute,
    Fulltext,
}

const ALL_CATEGORIES: [SuggestionCategory; 6] = [
    SuggestionCategory::View,
    SuggestionCategory::Collection,
    SuggestionCategory::LinkType,
    SuggestionCategory::Attribute,
    SuggestionCategory::LinkAttribute,
    SuggestionCategory::Fulltext,
];

/// Supplies the initial filter condition for attribute-like suggestions.
///
/// The condition depends on the attribute's value type, which lives outside
/// this core; callers inject their own mapping.
pub trait ConditionDefaults {
    fn default_condition(&self, attribute: &Attribute) -> (ConditionType, Vec<ConditionValue>);
}

/// Equality with a single empty operand slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConditionDefaults;

impl ConditionDefaults for StandardConditionDefaults {
    fn default_condition(&self, _attribute: &Attribute) -> (ConditionType, Vec<ConditionValue>) {
        (ConditionType::Eq, vec![ConditionValue::default()])
    }
}

/// One suggestion request; all fields are read-only snapshots.
#[derive(Debug, Clone, Default)]
pub struct SuggestionRequest<'a> {
    /// Free text typed so far; may be empty.
    pub text: &'a str,
    /// The current, ordered query items.
    pub items: &'a [QueryItem],
    /// Restrict candidates to entities already referenced by `items`.
    pub only_current: bool,
    /// Categories to leave out entirely.
    pub excluded: BTreeSet<SuggestionCategory>,
}

impl<'a> SuggestionRequest<'a> {
    pub fn new(text: &'a str, items: &'a [QueryItem]) -> Self {
        Self {
            text,
            items,
            only_current: false,
            excluded: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
enum Candidate<'a> {
    View(&'a View),
    Collection(&'a Collection),
    LinkType(&'a LinkType),
    Attribute {
        collection: &'a Collection,
        attribute: &'a Attribute,
    },
    LinkAttribute {
        link_type: &'a LinkType,
        attribute: &'a Attribute,
    },
    Fulltext(String),
}

impl Candidate<'_> {
    fn category(&self) -> SuggestionCategory {
        match self {
            Self::View(_) => SuggestionCategory::View,
            Self::Collection(_) => SuggestionCategory::Collection,
            Self::LinkType(_) => SuggestionCategory::LinkType,
            Self::Attribute { .. } => SuggestionCategory::Attribute,
            Self::LinkAttribute { .. } => SuggestionCategory::LinkAttribute,
            Self::Fulltext(_) => SuggestionCategory::Fulltext,
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::View(view) => view.name(),
            Self::Collection(collection) => collection.name(),
            Self::LinkType(link_type) => link_type.name(),
            Self::Attribute { attribute, .. } | Self::LinkAttribute { attribute, .. } => {
                attribute.name()
            }
            Self::Fulltext(text) => text,
        }
    }
}

#[derive(Debug, Clone)]
struct Scored<'a> {
    score: i32,
    candidate: Candidate<'a>,
}

/// Derived per-request state shared by the scoring stages.
struct RequestContext<'r> {
    text: &'r str,
    items: &'r [QueryItem],
    stem_items: Vec<&'r QueryItem>,
    collection_chain: Vec<CollectionId>,
    link_chain: Vec<LinkTypeId>,
}

impl<'r> RequestContext<'r> {
    fn new(request: &SuggestionRequest<'r>) -> Self {
        let stem_items = chain::filter_last_stem_items(request.items);
        let collection_chain = chain::collection_ids_chain(stem_items.iter().copied());
        let link_chain = chain::link_type_ids_chain(stem_items.iter().copied());
        Self {
            text: request.text,
            items: request.items,
            stem_items,
            collection_chain,
            link_chain,
        }
    }

    /// True before any stem has been started and before any text was typed.
    fn empty_state(&self) -> bool {
        self.stem_items.is_empty() && self.text.is_empty()
    }

    fn attribute_filter_active(&self, collection_id: &CollectionId, attribute_id: &AttributeId) -> bool {
        self.stem_items.iter().any(|item| match item {
            QueryItem::Attribute(attr) => {
                attr.collection().id() == collection_id && attr.attribute().id() == attribute_id
            }
            _ => false,
        })
    }

    fn link_attribute_filter_active(
        &self,
        link_type_id: &LinkTypeId,
        attribute_id: &AttributeId,
    ) -> bool {
        self.stem_items.iter().any(|item| match item {
            QueryItem::LinkAttribute(attr) => {
                attr.link_type().id() == link_type_id && attr.attribute().id() == attribute_id
            }
            _ => false,
        })
    }
}

/// Turns free text plus the current query items into a ranked, deduplicated,
/// quota-limited list of suggestions.
pub struct SuggestionEngine<'a> {
    catalog: &'a Catalog,
    defaults: &'a dyn ConditionDefaults,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            defaults: &StandardConditionDefaults,
        }
    }

    pub fn with_defaults(catalog: &'a Catalog, defaults: &'a dyn ConditionDefaults) -> Self {
        Self { catalog, defaults }
    }

    /// Produces at most [`score::MAX_SUGGESTIONS`] ordered query items.
    ///
    /// Empty text with no current items is a valid, common call; it yields the
    /// "browse" suggestion set driven by the empty-state bonuses. A category
    /// with no eligible candidates simply contributes nothing.
    pub fn suggest(&self, request: &SuggestionRequest<'_>) -> Vec<QueryItem> {
        let context = RequestContext::new(request);

        let pool = self.generate(request);
        let pool: Vec<Scored<'_>> = pool
            .into_iter()
            .map(|scored| add_score_by_current_items(scored, &context))
            .collect();
        let ranked = filter_and_sort(pool);

        let mut sliced = slice_by_quota(ranked.clone(), context.empty_state());
        ensure_fulltext(&mut sliced, &ranked);

        let mut picked = filter_and_sort(sliced);
        if picked.len() > score::MAX_SUGGESTIONS {
            if let Some(drop) = picked
                .iter()
                .rposition(|s| s.candidate.category() != SuggestionCategory::Fulltext)
            {
                picked.remove(drop);
            }
        }

        picked
            .into_iter()
            .map(|scored| self.to_query_item(scored.candidate))
            .collect()
    }

    fn generate(&self, request: &SuggestionRequest<'_>) -> Vec<Scored<'a>> {
        let text = request.text;
        let included = |category: SuggestionCategory| !request.excluded.contains(&category);

        let referenced_collections = referenced_collection_ids(request.items);
        let referenced_links = referenced_link_type_ids(request.items);
        let most_used = self.most_used_attributes();

        let mut pool: Vec<Scored<'a>> = Vec::new();

        if included(SuggestionCategory::View) && !request.only_current {
            for (position, view) in self.catalog.views().iter().enumerate() {
                let bonus = score::recency_and_favorite_bonus(
                    view.favorite(),
                    score::within_last_used(Some(position)),
                    1,
                );
                pool.push(Scored {
                    score: score::match_score(view.name(), text) + bonus,
                    candidate: Candidate::View(view),
                });
            }
        }

        if included(SuggestionCategory::Collection) {
            for (position, collection) in self.catalog.collections().iter().enumerate() {
                if request.only_current && !referenced_collections.contains(collection.id()) {
                    continue;
                }
                let bonus = score::recency_and_favorite_bonus(
                    collection.favorite(),
                    score::within_last_used(Some(position)),
                    1,
                );
                pool.push(Scored {
                    score: score::match_score(collection.name(), text)
                        + bonus
                        + score::ADDITIONAL_COLLECTION_POINTS,
                    candidate: Candidate::Collection(collection),
                });
            }
        }

        if included(SuggestionCategory::LinkType) {
            for link_type in self.catalog.link_types() {
                if request.only_current && !referenced_links.contains(link_type.id()) {
                    continue;
                }
                pool.push(Scored {
                    score: score::match_score(link_type.name(), text)
                        + self.link_sides_bonus(link_type),
                    candidate: Candidate::LinkType(link_type),
                });
            }
        }

        if included(SuggestionCategory::Attribute) {
            for (position, collection) in self.catalog.collections().iter().enumerate() {
                if request.only_current && !referenced_collections.contains(collection.id()) {
                    continue;
                }
                let bonus = score::recency_and_favorite_bonus(
                    collection.favorite(),
                    score::within_last_used(Some(position)),
                    1,
                );
                for attribute in collection.attributes() {
                    let most_used_bonus = if most_used
                        .contains(&(collection.id().clone(), attribute.id().clone()))
                    {
                        score::MOST_USED
                    } else {
                        0
                    };
                    pool.push(Scored {
                        score: score::match_score(attribute.name(), text) + bonus + most_used_bonus,
                        candidate: Candidate::Attribute {
                            collection,
                            attribute,
                        },
                    });
                }
            }
        }

        if included(SuggestionCategory::LinkAttribute) {
            for link_type in self.catalog.link_types() {
                if request.only_current && !referenced_links.contains(link_type.id()) {
                    continue;
                }
                let bonus = self.link_sides_bonus(link_type);
                for attribute in link_type.attributes() {
                    pool.push(Scored {
                        score: score::match_score(attribute.name(), text) + bonus,
                        candidate: Candidate::LinkAttribute {
                            link_type,
                            attribute,
                        },
                    });
                }
            }
        }

        if included(SuggestionCategory::Fulltext) && !text.is_empty() {
            pool.push(Scored {
                score: score::match_score(text, text),
                candidate: Candidate::Fulltext(text.to_owned()),
            });
        }

        pool
    }

    /// Recency/favorite bonus of a link type: each touched collection side
    /// contributes half.
    fn link_sides_bonus(&self, link_type: &LinkType) -> i32 {
        link_type
            .collection_ids()
            .iter()
            .map(|id| {
                let position = self.catalog.collection_position(id);
                let favorite = self
                    .catalog
                    .collection(id)
                    .map(Collection::favorite)
                    .unwrap_or(false);
                score::recency_and_favorite_bonus(favorite, score::within_last_used(position), 2)
            })
            .sum()
    }

    /// The top attributes by historical usage count across all collections.
    fn most_used_attributes(&self) -> BTreeSet<(CollectionId, AttributeId)> {
        let mut usage: Vec<(u64, CollectionId, AttributeId)> = self
            .catalog
            .collections()
            .iter()
            .flat_map(|collection| {
                collection.attributes().iter().map(move |attribute| {
                    (
                        attribute.usage_count(),
                        collection.id().clone(),
                        attribute.id().clone(),
                    )
                })
            })
            .collect();
        usage.sort_by(|a, b| b.0.cmp(&a.0));
        usage
            .into_iter()
            .take(score::MOST_USED_THRESHOLD)
            .map(|(_, collection_id, attribute_id)| (collection_id, attribute_id))
            .collect()
    }

    fn to_query_item(&self, candidate: Candidate<'_>) -> QueryItem {
        match candidate {
            Candidate::View(view) => QueryItem::View(ViewItem::new(view.clone())),
            Candidate::Collection(collection) => {
                QueryItem::Collection(CollectionItem::new(collection.clone()))
            }
            Candidate::LinkType(link_type) => QueryItem::Link(LinkItem::new(link_type.clone())),
            Candidate::Attribute {
                collection,
                attribute,
            } => {
                let (condition, values) = self.defaults.default_condition(attribute);
                QueryItem::Attribute(AttributeItem::new(
                    collection.clone(),
                    attribute.clone(),
                    Some(condition),
                    values,
                ))
            }
            Candidate::LinkAttribute {
                link_type,
                attribute,
            } => {
                let (condition, values) = self.defaults.default_condition(attribute);
                QueryItem::LinkAttribute(LinkAttributeItem::new(
                    link_type.clone(),
                    attribute.clone(),
                    Some(condition),
                    values,
                ))
            }
            Candidate::Fulltext(text) => QueryItem::Fulltext(FulltextItem::new(text)),
        }
    }
}

fn referenced_collection_ids(items: &[QueryItem]) -> BTreeSet<CollectionId> {
    let mut ids = BTreeSet::new();
    for item in items {
        match item {
            QueryItem::Collection(collection) => {
                ids.insert(collection.collection().id().clone());
            }
            QueryItem::Link(link) => {
                ids.extend(link.link_type().collection_ids().iter().cloned());
            }
            QueryItem::Attribute(attribute) => {
                ids.insert(attribute.collection().id().clone());
            }
            _ => {}
        }
    }
    ids
}

fn referenced_link_type_ids(items: &[QueryItem]) -> BTreeSet<LinkTypeId> {
    let mut ids = BTreeSet::new();
    for item in items {
        match item {
            QueryItem::Link(link) => {
                ids.insert(link.link_type().id().clone());
            }
            QueryItem::LinkAttribute(attribute) => {
                ids.insert(attribute.link_type().id().clone());
            }
            _ => {}
        }
    }
    ids
}

/// Chain-aware re-scoring; returns a new record, never mutates the input.
fn add_score_by_current_items<'a>(scored: Scored<'a>, context: &RequestContext<'_>) -> Scored<'a> {
    let empty = context.empty_state();
    let score = match &scored.candidate {
        Candidate::View(_) => {
            if context.items.iter().any(|item| !item.is_fulltext()) {
                score::RESTRICTED
            } else if context.text.is_empty() {
                scored.score + VIEW_EMPTY_QUERY_AND_TEXT
            } else {
                scored.score
            }
        }
        Candidate::Collection(_) => {
            if empty {
                scored.score + COLLECTION_EMPTY_QUERY_AND_TEXT
            } else {
                scored.score
            }
        }
        Candidate::LinkType(link_type) => {
            let mut delta = if empty { LINK_EMPTY_QUERY_AND_TEXT } else { 0 };
            delta += link_type_chain_bonus(link_type, context);
            scored.score + delta
        }
        Candidate::Attribute {
            collection,
            attribute,
        } => {
            let mut delta = if empty { ATTRIBUTE_EMPTY_QUERY_AND_TEXT } else { 0 };
            if context.collection_chain.contains(collection.id()) {
                delta += if context.attribute_filter_active(collection.id(), attribute.id()) {
                    ATTRIBUTE_USED_IN_CURRENT_STEM
                } else {
                    ATTRIBUTE_IN_CURRENT_STEM
                };
            }
            scored.score + delta
        }
        Candidate::LinkAttribute {
            link_type,
            attribute,
        } => {
            let mut delta = if empty { LINK_ATTRIBUTE_EMPTY_QUERY_AND_TEXT } else { 0 };
            if context.link_chain.contains(link_type.id()) {
                delta += if context.link_attribute_filter_active(link_type.id(), attribute.id()) {
                    LINK_ATTRIBUTE_USED_IN_CURRENT_STEM
                } else {
                    LINK_ATTRIBUTE_IN_CURRENT_STEM
                };
            }
            scored.score + delta
        }
        Candidate::Fulltext(text) => {
            let duplicate = context.items.iter().any(|item| match item {
                QueryItem::Fulltext(fulltext) => fulltext.text() == text,
                _ => false,
            });
            if duplicate {
                score::RESTRICTED
            } else {
                scored.score
            }
        }
    };

    Scored {
        score,
        candidate: scored.candidate,
    }
}

fn link_type_chain_bonus(link_type: &LinkType, context: &RequestContext<'_>) -> i32 {
    match context.stem_items.last() {
        Some(QueryItem::Collection(collection)) => {
            if link_type.touches(collection.collection().id()) {
                IS_DIRECTLY_LINKABLE
            } else {
                0
            }
        }
        Some(QueryItem::Link(last_link)) => {
            if context.link_chain.contains(link_type.id()) {
                IS_LINKABLE_DUPLICATED
            } else if last_link
                .link_type()
                .collection_ids()
                .iter()
                .any(|id| link_type.touches(id))
            {
                IS_DIRECTLY_LINKABLE
            } else {
                0
            }
        }
        _ => match context.collection_chain.last() {
            Some(last) if link_type.touches(last) => {
                if context.link_chain.contains(link_type.id()) {
                    IS_LINKABLE_DUPLICATED
                } else {
                    IS_LINKABLE
                }
            }
            _ => 0,
        },
    }
}

/// Drops excluded candidates and orders by score, ties broken by shorter
/// display text first.
fn filter_and_sort(mut pool: Vec<Scored<'_>>) -> Vec<Scored<'_>> {
    pool.retain(|scored| scored.score >= 0);
    pool.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            let a_len = a.candidate.text().chars().count();
            let b_len = b.candidate.text().chars().count();
            a_len.cmp(&b_len)
        })
    });
    pool
}

fn initial_quota(category: SuggestionCategory, empty_state: bool) -> usize {
    match category {
        SuggestionCategory::Fulltext => FULLTEXT_QUOTA,
        _ if empty_state => EMPTY_STATE_QUOTA,
        _ => (score::MAX_SUGGESTIONS + 1) / 2,
    }
}

/// Hard per-category ceiling redistribution may never exceed.
///
/// In the browse state quota flows freely between object categories; once the
/// user has typed or started a stem, no category may claim more than half of
/// the result (rounded up), which keeps the list diverse.
fn category_ceiling(category: SuggestionCategory, empty_state: bool) -> usize {
    match category {
        SuggestionCategory::Fulltext => FULLTEXT_QUOTA,
        _ if empty_state => score::MAX_SUGGESTIONS,
        _ => (score::MAX_SUGGESTIONS + 1) / 2,
    }
}

/// Takes candidates in global score order while each category has quota left,
/// then hands unused quota round-robin to categories with deferred candidates
/// and repeats.
fn slice_by_quota(ranked: Vec<Scored<'_>>, empty_state: bool) -> Vec<Scored<'_>> {
    let mut quotas: BTreeMap<SuggestionCategory, usize> = ALL_CATEGORIES
        .iter()
        .map(|&category| (category, initial_quota(category, empty_state)))
        .collect();
    let mut taken_by_category: BTreeMap<SuggestionCategory, usize> = BTreeMap::new();

    let mut taken: Vec<Scored<'_>> = Vec::new();
    let mut pending = ranked;

    loop {
        let mut deferred: Vec<Scored<'_>> = Vec::new();
        for scored in pending {
            if taken.len() >= score::MAX_SUGGESTIONS {
                break;
            }
            let category = scored.candidate.category();
            let quota = quotas.entry(category).or_insert(0);
            if *quota > 0 {
                *quota -= 1;
                *taken_by_category.entry(category).or_insert(0) += 1;
                taken.push(scored);
            } else {
                deferred.push(scored);
            }
        }

        if deferred.is_empty() || taken.len() >= score::MAX_SUGGESTIONS {
            break;
        }

        let unused: usize = quotas.values().sum();
        let budget = unused.min(score::MAX_SUGGESTIONS - taken.len());
        if budget == 0 {
            break;
        }

        // Waiting categories with headroom left under their ceiling, in the
        // order their best deferred candidate ranks.
        let mut waiting: Vec<SuggestionCategory> = Vec::new();
        for scored in &deferred {
            let category = scored.candidate.category();
            if waiting.contains(&category) {
                continue;
            }
            let used = taken_by_category.get(&category).copied().unwrap_or(0);
            if used < category_ceiling(category, empty_state) {
                waiting.push(category);
            }
        }
        if waiting.is_empty() {
            break;
        }

        let mut fresh: BTreeMap<SuggestionCategory, usize> = ALL_CATEGORIES
            .iter()
            .map(|&category| (category, 0))
            .collect();
        let mut remaining = budget;
        'grant: loop {
            let mut granted = false;
            for &category in &waiting {
                if remaining == 0 {
                    break 'grant;
                }
                let used = taken_by_category.get(&category).copied().unwrap_or(0);
                let planned = fresh.get(&category).copied().unwrap_or(0);
                if used + planned < category_ceiling(category, empty_state) {
                    *fresh.entry(category).or_insert(0) += 1;
                    remaining -= 1;
                    granted = true;
                }
            }
            if !granted {
                break;
            }
        }
        if fresh.values().all(|&quota| quota == 0) {
            break;
        }

        quotas = fresh;
        pending = deferred;
    }

    taken
}

/// Full text is always offered as a fallback when the user typed something:
/// if slicing dropped the fulltext candidate but the pool had one, force it
/// back onto the end.
fn ensure_fulltext<'a>(sliced: &mut Vec<Scored<'a>>, pool: &[Scored<'a>]) {
    let present = sliced
        .iter()
        .any(|scored| scored.candidate.category() == SuggestionCategory::Fulltext);
    if present {
        return;
    }
    if let Some(fulltext) = pool
        .iter()
        .find(|scored| scored.candidate.category() == SuggestionCategory::Fulltext)
    {
        sliced.push(fulltext.clone());
    }
}
