// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopicError {
    /// Failure reported by the cluster store, passed through untouched.
    #[error("Kubernetes API error: {0}")]
    Store(#[from] kube::Error),

    #[error("K8s topic with {label}=={topic_name} not found")]
    NotFound { label: String, topic_name: String },

    #[error("Blocking worker failed: {0}")]
    Worker(String),

    #[error("Invalid label selector: {0}")]
    InvalidSelector(String),
}

impl TopicError {
    /// HTTP status code of the underlying API failure, if the store produced one.
    pub fn api_code(&self) -> Option<u16> {
        match self {
            TopicError::Store(kube::Error::Api(err)) => Some(err.code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TopicError>;
