// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types managed by the topic operator.

pub mod topic;

pub use topic::{Condition, KafkaTopic, KafkaTopicSpec, KafkaTopicStatus, ResourceName};
