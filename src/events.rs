// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Audit events about KafkaTopic resources.
//!
//! Events are best effort: [`crate::topics::TopicResources::create_event`]
//! logs a failed write and reports success anyway.

use crate::constants::OPERATOR_NAME;
use crate::types::KafkaTopic;
use k8s_openapi::api::core::v1::{Event, EventSource};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::chrono::Utc;
use kube::api::ObjectMeta;
use kube::runtime::events::EventType;
use kube::{Resource, ResourceExt};

fn type_name(type_: EventType) -> &'static str {
    match type_ {
        EventType::Normal => "Normal",
        EventType::Warning => "Warning",
    }
}

/// Well-known event reason strings.
pub mod reasons {
    pub const TOPIC_CREATED: &str = "TopicCreated";
    pub const TOPIC_UPDATED: &str = "TopicUpdated";
    pub const TOPIC_DELETED: &str = "TopicDeleted";
    pub const RECONCILE_FAILED: &str = "ReconcileFailed";
}

/// Build an event about `topic`
pub fn topic_event(topic: &KafkaTopic, type_: EventType, reason: &str, message: &str) -> Event {
    let now = Utc::now();

    Event {
        metadata: ObjectMeta {
            generate_name: Some(format!("{}.", topic.name_any())),
            namespace: topic.namespace(),
            ..Default::default()
        },
        involved_object: topic.object_ref(&()),
        type_: Some(type_name(type_).to_string()),
        reason: Some(reason.to_string()),
        message: Some(message.to_string()),
        count: Some(1),
        first_timestamp: Some(Time(now)),
        last_timestamp: Some(Time(now)),
        source: Some(EventSource {
            component: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        }),
        reporting_component: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    }
}
