// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use stemma::model::{
    Attribute, AttributeFilter, AttributeId, Catalog, Collection, CollectionId, ConditionType,
    ConditionValue, LinkType, LinkTypeId, Query, QueryStem, View, ViewId,
};

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn collection_id(idx: usize) -> CollectionId {
    CollectionId::new(format!("c{idx:04}")).expect("valid collection id")
}

fn link_type_id(idx: usize) -> LinkTypeId {
    LinkTypeId::new(format!("l{idx:04}")).expect("valid link type id")
}

fn attribute_id(idx: usize) -> AttributeId {
    AttributeId::new(format!("a{idx:02}")).expect("valid attribute id")
}

fn view_id(idx: usize) -> ViewId {
    ViewId::new(format!("v{idx:04}")).expect("valid view id")
}

pub mod catalog {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub collections: usize,
        pub attributes_per_collection: usize,
        pub link_types: usize,
        pub views: usize,
        pub name_len: usize,
    }

    impl Params {
        pub const fn new(
            collections: usize,
            attributes_per_collection: usize,
            link_types: usize,
            views: usize,
            name_len: usize,
        ) -> Self {
            Self {
                collections,
                attributes_per_collection,
                link_types,
                views,
                name_len,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        LargeLongNames,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::LargeLongNames => "large_long_names",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(10, 4, 6, 5, 12),
                Self::Medium => Params::new(60, 10, 40, 30, 12),
                Self::LargeLongNames => Params::new(250, 20, 150, 120, 48),
            }
        }
    }

    /// Deterministic catalog generator.
    ///
    /// - Collection names share the prefix `task` so typed-text benches match
    ///   a predictable subset.
    /// - Link types chain neighbouring collections, wrapping at the end.
    pub fn build(params: Params) -> Catalog {
        assert!(params.collections >= 2, "collections must be >= 2");

        let mut collections = Vec::with_capacity(params.collections);
        for idx in 0..params.collections {
            let attributes = (0..params.attributes_per_collection)
                .map(|a| {
                    let base = format!("field {a:02}");
                    Attribute::new(attribute_id(a), ascii_repeat_to_len(&base, 'x', params.name_len))
                        .with_usage_count((a * 7 % 50) as u64)
                })
                .collect();
            let base = format!("task set {idx:04}");
            collections.push(
                Collection::new(
                    collection_id(idx),
                    ascii_repeat_to_len(&base, 'x', params.name_len),
                )
                .with_favorite(idx % 9 == 0)
                .with_attributes(attributes),
            );
        }

        let mut link_types = Vec::with_capacity(params.link_types);
        for idx in 0..params.link_types {
            let from = idx % params.collections;
            let to = (idx + 1) % params.collections;
            let base = format!("link {idx:04}");
            link_types.push(LinkType::new(
                link_type_id(idx),
                ascii_repeat_to_len(&base, 'x', params.name_len),
                [collection_id(from), collection_id(to)],
            ));
        }

        let mut views = Vec::with_capacity(params.views);
        for idx in 0..params.views {
            let stem = QueryStem::new(collection_id(idx % params.collections));
            let base = format!("board {idx:04}");
            views.push(
                View::new(
                    view_id(idx),
                    ascii_repeat_to_len(&base, 'x', params.name_len),
                    Query::new(vec![stem], Vec::new()),
                )
                .with_favorite(idx % 7 == 0),
            );
        }

        Catalog::new(collections, link_types, views)
    }

    pub fn fixture(case: Case) -> Catalog {
        build(case.params())
    }
}

pub mod query {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub stems: usize,
        pub links_per_stem: usize,
        pub filters_per_stem: usize,
        pub fulltexts: usize,
    }

    impl Params {
        pub const fn new(
            stems: usize,
            links_per_stem: usize,
            filters_per_stem: usize,
            fulltexts: usize,
        ) -> Self {
            Self {
                stems,
                links_per_stem,
                filters_per_stem,
                fulltexts,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        BareStem,
        Medium,
        LargeFiltered,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::BareStem => "bare_stem",
                Self::Medium => "medium",
                Self::LargeFiltered => "large_filtered",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::BareStem => Params::new(1, 0, 0, 0),
                Self::Medium => Params::new(3, 2, 3, 2),
                Self::LargeFiltered => Params::new(10, 5, 12, 6),
            }
        }
    }

    pub fn build(params: Params) -> Query {
        let mut stems = Vec::with_capacity(params.stems);
        for s in 0..params.stems {
            let mut stem = QueryStem::new(collection_id(s));
            for l in 0..params.links_per_stem {
                stem.link_type_ids_mut().push(link_type_id(s * 100 + l));
            }
            for f in 0..params.filters_per_stem {
                stem.filters_mut().push(AttributeFilter::new(
                    collection_id(s),
                    attribute_id(f),
                    ConditionType::Contains,
                    vec![ConditionValue::plain(format!("value {f:02}"))],
                ));
            }
            stems.push(stem);
        }

        let fulltexts = (0..params.fulltexts)
            .map(|f| format!("search term {f:02}"))
            .collect();

        Query::new(stems, fulltexts)
    }

    pub fn fixture(case: Case) -> Query {
        build(case.params())
    }
}
