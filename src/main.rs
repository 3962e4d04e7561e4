// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::{debug, info};

use topic_k8s::config::Config;
use topic_k8s::kubernetes::wait_for_topic_crd;
use topic_k8s::TopicResources;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, selector='{}', identity_label={}, workers={}",
        config.namespace, config.label_selector, config.identity_label, config.worker_threads
    );

    // Cluster calls run on the blocking pool, bounded by worker_threads
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(config.worker_threads)
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    info!("Waiting for KafkaTopic CRD to become available...");
    wait_for_topic_crd(&client).await?;

    let topics = TopicResources::from_config(client, &config);
    let managed = topics.list().await?;
    info!(
        "Found {} managed topics in namespace {}",
        managed.len(),
        topics.namespace()
    );

    for topic in &managed {
        debug!(
            "Topic resource {} (spec.topicName={:?}, {}={:?})",
            topic.resource_name(),
            topic.external_topic_name(),
            topics.predicate().identity_label(),
            topic.label(topics.predicate().identity_label())
        );
    }

    Ok(())
}
