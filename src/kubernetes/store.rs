// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Blocking access to KafkaTopic resources and core events.

use crate::error::Result;
use crate::labels::LabelSelector;
use crate::types::{KafkaTopic, ResourceName};
use k8s_openapi::api::core::v1::Event;
use kube::{
    api::{DeleteParams, ListParams, Patch, PatchParams, PostParams},
    Api, Client,
};
use tokio::runtime::Handle;
use tracing::{debug, instrument};

/// Blocking view of the cluster store.
///
/// Every call may perform network I/O, so implementations must only be driven
/// from a blocking pool thread (see [`crate::executor::BlockingExecutor`]).
pub trait TopicStore: Send + Sync {
    fn create(&self, namespace: &str, topic: &KafkaTopic) -> Result<()>;

    /// Merge-patch the resource named by `name`
    fn patch(&self, namespace: &str, name: &str, topic: &KafkaTopic) -> Result<()>;

    fn delete(&self, namespace: &str, name: &ResourceName) -> Result<()>;

    fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<KafkaTopic>>;

    fn create_event(&self, namespace: &str, event: &Event) -> Result<()>;
}

/// [`TopicStore`] backed by the Kubernetes API.
#[derive(Clone)]
pub struct KubeTopicStore {
    client: Client,
    runtime: Handle,
}

impl KubeTopicStore {
    /// `runtime` must be the runtime the client was created on
    pub fn new(client: Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    fn topics(&self, namespace: &str) -> Api<KafkaTopic> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl TopicStore for KubeTopicStore {
    #[instrument(skip(self, topic), fields(topic = %topic.resource_name()))]
    fn create(&self, namespace: &str, topic: &KafkaTopic) -> Result<()> {
        let api = self.topics(namespace);
        self.runtime
            .block_on(api.create(&PostParams::default(), topic))?;
        Ok(())
    }

    #[instrument(skip(self, topic))]
    fn patch(&self, namespace: &str, name: &str, topic: &KafkaTopic) -> Result<()> {
        let api = self.topics(namespace);
        self.runtime
            .block_on(api.patch(name, &PatchParams::default(), &Patch::Merge(topic)))?;
        Ok(())
    }

    #[instrument(skip(self, name), fields(name = %name))]
    fn delete(&self, namespace: &str, name: &ResourceName) -> Result<()> {
        let api = self.topics(namespace);
        self.runtime
            .block_on(api.delete(name.as_str(), &DeleteParams::default()))?;
        Ok(())
    }

    #[instrument(skip(self, selector), fields(selector = %selector))]
    fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<KafkaTopic>> {
        let api = self.topics(namespace);
        let lp = if selector.is_empty() {
            ListParams::default()
        } else {
            ListParams::default().labels(&selector.to_string())
        };

        let list = self.runtime.block_on(api.list(&lp))?;
        let total = list.items.len();
        let topics: Vec<KafkaTopic> = list
            .items
            .into_iter()
            .filter(|t| selector.matches(t.metadata.labels.as_ref()))
            .collect();

        if topics.len() != total {
            debug!(
                "Dropped {} topics not matching selector '{}'",
                total - topics.len(),
                selector
            );
        }

        Ok(topics)
    }

    fn create_event(&self, namespace: &str, event: &Event) -> Result<()> {
        let events: Api<Event> = Api::namespaced(self.client.clone(), namespace);
        self.runtime
            .block_on(events.create(&PostParams::default(), event))?;
        Ok(())
    }
}
