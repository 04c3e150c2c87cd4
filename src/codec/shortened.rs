// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shortened wire mirror of the query model.
//!
//! Every struct here maps 1:1 onto a model type but uses one- or two-letter
//! JSON keys and omits empty members, keeping the encoded query string short.
//! The key names are part of the persisted format and must stay stable across
//! releases.

use serde::{Deserialize, Serialize};

use crate::model::{
    AttributeFilter, AttributeId, CollectionId, ConditionType, ConditionValue, DocumentId,
    IdError, LinkAttributeFilter, LinkTypeId, Query, QueryStem,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortenedQuery {
    #[serde(rename = "s", default, skip_serializing_if = "Vec::is_empty")]
    pub stems: Vec<ShortenedStem>,
    #[serde(rename = "f", default, skip_serializing_if = "Vec::is_empty")]
    pub fulltexts: Vec<String>,
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "l", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortenedStem {
    #[serde(rename = "c")]
    pub collection_id: String,
    #[serde(rename = "l", default, skip_serializing_if = "Vec::is_empty")]
    pub link_type_ids: Vec<String>,
    #[serde(rename = "f", default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ShortenedAttributeFilter>,
    #[serde(rename = "lf", default, skip_serializing_if = "Vec::is_empty")]
    pub link_filters: Vec<ShortenedLinkAttributeFilter>,
    #[serde(rename = "d", default, skip_serializing_if = "Vec::is_empty")]
    pub document_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortenedAttributeFilter {
    #[serde(rename = "c")]
    pub collection_id: String,
    #[serde(rename = "a")]
    pub attribute_id: String,
    #[serde(rename = "e")]
    pub condition: ConditionType,
    #[serde(rename = "v", default, skip_serializing_if = "Vec::is_empty")]
    pub condition_values: Vec<ShortenedConditionValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortenedLinkAttributeFilter {
    #[serde(rename = "l")]
    pub link_type_id: String,
    #[serde(rename = "a")]
    pub attribute_id: String,
    #[serde(rename = "e")]
    pub condition: ConditionType,
    #[serde(rename = "v", default, skip_serializing_if = "Vec::is_empty")]
    pub condition_values: Vec<ShortenedConditionValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortenedConditionValue {
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ShortenedQuery {
    pub fn from_query(query: &Query) -> Self {
        Self {
            stems: query.stems().iter().map(ShortenedStem::from_stem).collect(),
            fulltexts: query.fulltexts().to_vec(),
            page: query.page(),
            page_size: query.page_size(),
        }
    }

    /// Rebuilds the full model, re-validating every identifier on the way.
    pub fn into_query(self) -> Result<Query, IdError> {
        let stems = self
            .stems
            .into_iter()
            .map(ShortenedStem::into_stem)
            .collect::<Result<Vec<_>, _>>()?;
        let mut query = Query::new(stems, self.fulltexts);
        query.set_page(self.page);
        query.set_page_size(self.page_size);
        Ok(query)
    }
}

impl ShortenedStem {
    fn from_stem(stem: &QueryStem) -> Self {
        Self {
            collection_id: stem.collection_id().to_string(),
            link_type_ids: stem.link_type_ids().iter().map(ToString::to_string).collect(),
            filters: stem
                .filters()
                .iter()
                .map(ShortenedAttributeFilter::from_filter)
                .collect(),
            link_filters: stem
                .link_filters()
                .iter()
                .map(ShortenedLinkAttributeFilter::from_filter)
                .collect(),
            document_ids: stem.document_ids().iter().map(ToString::to_string).collect(),
        }
    }

    fn into_stem(self) -> Result<QueryStem, IdError> {
        let mut stem = QueryStem::new(CollectionId::new(self.collection_id)?);
        for link_type_id in self.link_type_ids {
            stem.link_type_ids_mut().push(LinkTypeId::new(link_type_id)?);
        }
        for filter in self.filters {
            stem.filters_mut().push(filter.into_filter()?);
        }
        for filter in self.link_filters {
            stem.link_filters_mut().push(filter.into_filter()?);
        }
        for document_id in self.document_ids {
            stem.document_ids_mut().push(DocumentId::new(document_id)?);
        }
        Ok(stem)
    }
}

impl ShortenedAttributeFilter {
    fn from_filter(filter: &AttributeFilter) -> Self {
        Self {
            collection_id: filter.collection_id().to_string(),
            attribute_id: filter.attribute_id().to_string(),
            condition: filter.condition(),
            condition_values: filter
                .condition_values()
                .iter()
                .map(ShortenedConditionValue::from_value)
                .collect(),
        }
    }

    fn into_filter(self) -> Result<AttributeFilter, IdError> {
        Ok(AttributeFilter::new(
            CollectionId::new(self.collection_id)?,
            AttributeId::new(self.attribute_id)?,
            self.condition,
            self.condition_values
                .into_iter()
                .map(ShortenedConditionValue::into_value)
                .collect(),
        ))
    }
}

impl ShortenedLinkAttributeFilter {
    fn from_filter(filter: &LinkAttributeFilter) -> Self {
        Self {
            link_type_id: filter.link_type_id().to_string(),
            attribute_id: filter.attribute_id().to_string(),
            condition: filter.condition(),
            condition_values: filter
                .condition_values()
                .iter()
                .map(ShortenedConditionValue::from_value)
                .collect(),
        }
    }

    fn into_filter(self) -> Result<LinkAttributeFilter, IdError> {
        Ok(LinkAttributeFilter::new(
            LinkTypeId::new(self.link_type_id)?,
            AttributeId::new(self.attribute_id)?,
            self.condition,
            self.condition_values
                .into_iter()
                .map(ShortenedConditionValue::into_value)
                .collect(),
        ))
    }
}

impl ShortenedConditionValue {
    fn from_value(value: &ConditionValue) -> Self {
        Self {
            kind: value.kind().map(ToOwned::to_owned),
            value: value.value().map(ToOwned::to_owned),
        }
    }

    fn into_value(self) -> ConditionValue {
        ConditionValue::new(self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::ShortenedQuery;
    use crate::model::fixtures;
    use crate::model::{
        AttributeFilter, ConditionType, ConditionValue, Query, QueryStem,
    };

    fn sample_query() -> Query {
        let mut stem = QueryStem::new(fixtures::cid("c1"));
        stem.link_type_ids_mut().push(fixtures::lid("l12"));
        stem.filters_mut().push(AttributeFilter::new(
            fixtures::cid("c2"),
            fixtures::aid("a1"),
            ConditionType::Contains,
            vec![ConditionValue::plain("report")],
        ));
        let mut query = Query::new(vec![stem], vec!["urgent".to_owned()]);
        query.set_page(Some(2));
        query
    }

    #[test]
    fn bare_stem_serializes_to_the_minimal_form() {
        let query = Query::new(
            vec![QueryStem::new(fixtures::cid("5d24b3632ec57b390456ed06"))],
            Vec::new(),
        );
        let json = serde_json::to_string(&ShortenedQuery::from_query(&query)).expect("json");
        assert_eq!(json, r#"{"s":[{"c":"5d24b3632ec57b390456ed06"}]}"#);
    }

    #[test]
    fn empty_members_are_omitted_and_restored_by_default() {
        let shortened: ShortenedQuery =
            serde_json::from_str(r#"{"s":[{"c":"c1"}]}"#).expect("shortened");
        let query = shortened.into_query().expect("query");
        assert_eq!(query.stems().len(), 1);
        assert!(query.stems()[0].link_type_ids().is_empty());
        assert!(query.fulltexts().is_empty());
        assert_eq!(query.page(), None);
    }

    #[test]
    fn shorten_then_prolong_preserves_the_query() {
        let query = sample_query();
        let restored = ShortenedQuery::from_query(&query)
            .into_query()
            .expect("query");
        assert_eq!(restored, query);
    }

    #[test]
    fn filter_uses_single_letter_keys_and_condition_names() {
        let query = sample_query();
        let json = serde_json::to_string(&ShortenedQuery::from_query(&query)).expect("json");
        assert!(json.contains(r#""f":[{"c":"c2","a":"a1","e":"contains","v":[{"v":"report"}]}]"#));
        assert!(json.contains(r#""p":2"#));
    }

    #[test]
    fn empty_collection_id_fails_validation_on_prolong() {
        let shortened: ShortenedQuery =
            serde_json::from_str(r#"{"s":[{"c":"c1","f":[{"c":"","a":"a1","e":"eq"}]}]}"#)
                .expect("shortened");
        assert!(shortened.into_query().is_err());
    }
}
