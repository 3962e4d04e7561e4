// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label selector and identity label used to scope topic queries.

use crate::constants::labels;
use crate::error::{Result, TopicError};
use std::collections::BTreeMap;
use std::fmt;

/// Immutable set of required label key/value pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSelector {
    labels: BTreeMap<String, String>,
}

impl LabelSelector {
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    /// Parse a selector of the form `key=value,key2=value2`
    pub fn parse(selector: &str) -> Result<Self> {
        let mut labels = BTreeMap::new();
        for entry in selector.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((key, value)) = entry.split_once('=') else {
                return Err(TopicError::InvalidSelector(format!(
                    "expected key=value, got '{}'",
                    entry
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(TopicError::InvalidSelector(format!(
                    "empty label key in '{}'",
                    entry
                )));
            }
            labels.insert(key.to_string(), value.trim().to_string());
        }
        Ok(Self { labels })
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// Check that every required label is present with the required value
    pub fn matches(&self, labels: Option<&BTreeMap<String, String>>) -> bool {
        self.labels.iter().all(|(k, v)| {
            labels
                .and_then(|l| l.get(k))
                .is_some_and(|actual| actual == v)
        })
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in &self.labels {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}={}", k, v)?;
            first = false;
        }
        Ok(())
    }
}

/// Which resources this operator instance owns, and how they are identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelPredicate {
    selector: LabelSelector,
    identity_label: String,
}

impl LabelPredicate {
    pub fn new(selector: LabelSelector, identity_label: impl Into<String>) -> Self {
        Self {
            selector,
            identity_label: identity_label.into(),
        }
    }

    pub fn selector(&self) -> &LabelSelector {
        &self.selector
    }

    /// Reserved label key holding a topic's identity
    pub fn identity_label(&self) -> &str {
        &self.identity_label
    }
}

impl Default for LabelPredicate {
    fn default() -> Self {
        Self::new(LabelSelector::default(), labels::TOPIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_single() {
        let selector = LabelSelector::parse("strimzi.io/kind=topic").unwrap();
        assert_eq!(selector.labels(), &labels(&[("strimzi.io/kind", "topic")]));
    }

    #[test]
    fn test_parse_multiple_with_whitespace() {
        let selector = LabelSelector::parse(" app = strimzi , strimzi.io/cluster=my-cluster ").unwrap();
        assert_eq!(
            selector.labels(),
            &labels(&[("app", "strimzi"), ("strimzi.io/cluster", "my-cluster")])
        );
    }

    #[test]
    fn test_parse_empty_is_empty_selector() {
        let selector = LabelSelector::parse("").unwrap();
        assert!(selector.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_equals() {
        let err = LabelSelector::parse("app=strimzi,bogus").unwrap_err();
        assert!(matches!(err, TopicError::InvalidSelector(_)));
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        let err = LabelSelector::parse("=value").unwrap_err();
        assert!(matches!(err, TopicError::InvalidSelector(_)));
    }

    #[test]
    fn test_display_is_sorted_selector_string() {
        let selector = LabelSelector::new(labels(&[("b", "2"), ("a", "1")]));
        assert_eq!(selector.to_string(), "a=1,b=2");
    }

    #[test]
    fn test_matches_superset() {
        let selector = LabelSelector::new(labels(&[("app", "strimzi")]));
        let actual = labels(&[("app", "strimzi"), ("other", "x")]);
        assert!(selector.matches(Some(&actual)));
    }

    #[test]
    fn test_matches_wrong_value() {
        let selector = LabelSelector::new(labels(&[("app", "strimzi")]));
        let actual = labels(&[("app", "other")]);
        assert!(!selector.matches(Some(&actual)));
    }

    #[test]
    fn test_matches_no_labels() {
        let selector = LabelSelector::new(labels(&[("app", "strimzi")]));
        assert!(!selector.matches(None));
        assert!(LabelSelector::default().matches(None));
    }

    #[test]
    fn test_default_predicate_uses_topic_label() {
        let predicate = LabelPredicate::default();
        assert_eq!(predicate.identity_label(), "strimzi.io/topic");
        assert!(predicate.selector().is_empty());
    }
}
