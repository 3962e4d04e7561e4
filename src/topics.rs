// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Non-blocking CRUD access to the KafkaTopic resources of one namespace.

use crate::config::Config;
use crate::error::Result;
use crate::executor::{BlockingExecutor, Pending};
use crate::identity::{IdentityMatch, IdentityResolver};
use crate::kubernetes::{KubeTopicStore, TopicStore};
use crate::labels::LabelPredicate;
use crate::types::{KafkaTopic, ResourceName};
use futures::FutureExt;
use k8s_openapi::api::core::v1::Event;
use kube::Client;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Adapter between the reconciler and the cluster store.
///
/// Every call is handed to the blocking pool and returns immediately with a
/// [`Pending`] result. Store failures come back unchanged and are never retried
/// here.
#[derive(Clone)]
pub struct TopicResources {
    store: Arc<dyn TopicStore>,
    executor: BlockingExecutor,
    namespace: Arc<str>,
    predicate: Arc<LabelPredicate>,
    resolver: Arc<IdentityResolver>,
}

impl TopicResources {
    /// Topics are resolved under the predicate's identity label
    pub fn new(
        store: Arc<dyn TopicStore>,
        executor: BlockingExecutor,
        namespace: &str,
        predicate: LabelPredicate,
        identity_match: IdentityMatch,
    ) -> Self {
        let resolver = IdentityResolver::new(predicate.identity_label(), identity_match);
        Self {
            store,
            executor,
            namespace: Arc::from(namespace),
            predicate: Arc::new(predicate),
            resolver: Arc::new(resolver),
        }
    }

    /// Build an adapter over the Kubernetes API on the current runtime
    pub fn from_config(client: Client, config: &Config) -> Self {
        let executor = BlockingExecutor::current();
        let store = KubeTopicStore::new(client, executor.runtime().clone());
        Self::new(
            Arc::new(store),
            executor,
            &config.namespace,
            config.label_predicate(),
            config.identity_match,
        )
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn predicate(&self) -> &LabelPredicate {
        &self.predicate
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn create(&self, topic: KafkaTopic) -> Pending<()> {
        let store = self.store.clone();
        let namespace = self.namespace.clone();
        self.executor.run(move || {
            info!("Creating topic resource {}/{}", namespace, topic.resource_name());
            store.create(&namespace, &topic)
        })
    }

    /// Patch the existing resource with the same resource name as `topic`
    pub fn update(&self, topic: KafkaTopic) -> Pending<()> {
        let store = self.store.clone();
        let namespace = self.namespace.clone();
        self.executor.run(move || {
            let name = topic.resource_name();
            info!("Updating topic resource {}/{}", namespace, name);
            store.patch(&namespace, &name, &topic)
        })
    }

    pub fn delete(&self, name: ResourceName) -> Pending<()> {
        let store = self.store.clone();
        let namespace = self.namespace.clone();
        self.executor.run(move || {
            info!("Deleting topic resource {}/{}", namespace, name);
            store.delete(&namespace, &name)
        })
    }

    /// All topics in the namespace matching the label selector
    pub fn list(&self) -> Pending<Vec<KafkaTopic>> {
        let store = self.store.clone();
        let namespace = self.namespace.clone();
        let predicate = self.predicate.clone();
        self.executor
            .run(move || store.list(&namespace, predicate.selector()))
    }

    /// Find the resource mirroring the Kafka topic `topic_name`
    pub fn find_by_external_name(&self, topic_name: &str) -> Pending<KafkaTopic> {
        let store = self.store.clone();
        let namespace = self.namespace.clone();
        let predicate = self.predicate.clone();
        let resolver = self.resolver.clone();
        let topic_name = topic_name.to_string();
        self.executor.run(move || {
            let topics = store.list(&namespace, predicate.selector())?;
            resolver.resolve(topics, &topic_name)
        })
    }

    /// Record an audit event.
    ///
    /// Always resolves to `Ok`. A rejected write or a failed worker is only
    /// logged.
    pub fn create_event(&self, event: Event) -> impl Future<Output = Result<()>> + Send {
        let store = self.store.clone();
        let namespace = self.namespace.clone();
        let reason = event.reason.clone().unwrap_or_default();
        self.executor
            .run(move || {
                debug!("Creating event {:?}", event.reason);
                store.create_event(&namespace, &event)
            })
            .map(move |result| {
                if let Err(e) = result {
                    error!(reason = %reason, "Error creating event: {}", e);
                }
                Ok(())
            })
    }
}
