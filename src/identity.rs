// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of a Kafka topic name to the KafkaTopic resource that mirrors it.
//!
//! Each candidate yields a match key from, in order of preference, the identity
//! label, the `spec.topicName` field, or the resource name. The first candidate
//! in list order whose key equals the key of the queried name wins.
//!
//! Under [`IdentityMatch::JavaHash`] keys are the decimal form of the JVM
//! `String.hashCode`, which is what existing identity labels hold. Distinct
//! names with colliding hashes cannot be told apart in that mode.

use crate::error::{Result, TopicError};
use crate::types::KafkaTopic;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How topic names are compared against resource keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdentityMatch {
    /// Compare decimal `String.hashCode` values, compatible with persisted labels
    #[default]
    JavaHash,
    /// Compare names directly
    Exact,
}

impl IdentityMatch {
    /// Key under which `name` is compared
    pub fn key(&self, name: &str) -> String {
        match self {
            IdentityMatch::JavaHash => java_string_hash(name).to_string(),
            IdentityMatch::Exact => name.to_string(),
        }
    }
}

impl FromStr for IdentityMatch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(IdentityMatch::JavaHash),
            "exact" => Ok(IdentityMatch::Exact),
            other => Err(format!("unknown identity match mode '{}'", other)),
        }
    }
}

/// JVM `String.hashCode`: `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code
/// units, with 32-bit wrapping arithmetic.
pub fn java_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Where a candidate's match key came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchSource {
    Label,
    SpecTopicName,
    ResourceName,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSource::Label => f.write_str("label"),
            MatchSource::SpecTopicName => f.write_str("spec.topicName"),
            MatchSource::ResourceName => f.write_str("metadata.name"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityResolver {
    label: String,
    mode: IdentityMatch,
}

impl IdentityResolver {
    pub fn new(label: impl Into<String>, mode: IdentityMatch) -> Self {
        Self {
            label: label.into(),
            mode,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mode(&self) -> IdentityMatch {
        self.mode
    }

    /// Compute the key a candidate is compared under.
    ///
    /// A label value is taken verbatim since it already holds a key.
    pub fn match_key(&self, topic: &KafkaTopic) -> (MatchSource, String) {
        if let Some(value) = topic.label(&self.label) {
            return (MatchSource::Label, value.to_string());
        }
        if let Some(topic_name) = topic.external_topic_name() {
            debug!(
                "Label {} not set on {}, using spec.topicName",
                self.label,
                topic.resource_name()
            );
            return (MatchSource::SpecTopicName, self.mode.key(topic_name));
        }
        debug!(
            "Neither label {} nor spec.topicName set on {}, using resource name",
            self.label,
            topic.resource_name()
        );
        (MatchSource::ResourceName, self.mode.key(&topic.resource_name()))
    }

    /// Return the first topic, in list order, matching `topic_name`
    pub fn resolve<I>(&self, topics: I, topic_name: &str) -> Result<KafkaTopic>
    where
        I: IntoIterator<Item = KafkaTopic>,
    {
        let query = self.mode.key(topic_name);
        debug!("Searching k8s topic with {}=={}", self.label, topic_name);

        for topic in topics {
            let (source, key) = self.match_key(&topic);
            debug!(
                "Comparing: {} - {} ({}, from {})",
                query,
                key,
                topic.resource_name(),
                source
            );
            if key == query {
                debug!(
                    "Found k8s topic {} with {} equal to {}",
                    topic.resource_name(),
                    source,
                    key
                );
                return Ok(topic);
            }
        }

        Err(TopicError::NotFound {
            label: self.label.clone(),
            topic_name: topic_name.to_string(),
        })
    }
}
