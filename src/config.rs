// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, labels};
use crate::identity::IdentityMatch;
use crate::labels::{LabelPredicate, LabelSelector};
use anyhow::{anyhow, bail, Context, Result};
use std::env;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the KafkaTopic resources
    pub namespace: String,
    /// Labels a resource must carry to be managed by this instance
    pub label_selector: LabelSelector,
    pub identity_label: String,
    pub identity_match: IdentityMatch,
    /// Upper bound on concurrently running blocking cluster calls
    pub worker_threads: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup("TOPIC_NAMESPACE")
            .filter(|ns| !ns.trim().is_empty())
            .context("TOPIC_NAMESPACE environment variable not set")?;

        let label_selector = LabelSelector::parse(&lookup("TOPIC_LABEL_SELECTOR").unwrap_or_default())
            .context("Invalid TOPIC_LABEL_SELECTOR")?;

        let identity_label =
            lookup("TOPIC_IDENTITY_LABEL").unwrap_or_else(|| labels::TOPIC.to_string());

        let identity_match = match lookup("TOPIC_IDENTITY_MATCH") {
            Some(mode) => mode
                .parse::<IdentityMatch>()
                .map_err(|e: String| anyhow!(e))
                .context("Invalid TOPIC_IDENTITY_MATCH")?,
            None => IdentityMatch::default(),
        };

        let worker_threads = match lookup("TOPIC_WORKER_THREADS") {
            Some(n) => n
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid TOPIC_WORKER_THREADS '{}'", n))?,
            None => defaults::WORKER_THREADS,
        };
        if worker_threads == 0 {
            bail!("TOPIC_WORKER_THREADS must be greater than zero");
        }

        Ok(Config {
            namespace,
            label_selector,
            identity_label,
            identity_match,
            worker_threads,
        })
    }

    pub fn label_predicate(&self) -> LabelPredicate {
        LabelPredicate::new(self.label_selector.clone(), self.identity_label.clone())
    }
}
