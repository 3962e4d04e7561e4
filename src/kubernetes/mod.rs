// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access: the blocking topic store and CRD discovery.

pub mod crd;
pub mod store;

pub use crd::wait_for_topic_crd;
pub use store::{KubeTopicStore, TopicStore};
