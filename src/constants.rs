// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label keys used on KafkaTopic resources
pub mod labels {
    /// Identity label stamped on a topic resource once it has been reconciled
    pub const TOPIC: &str = "strimzi.io/topic";
}

/// Component name reported on emitted events
pub const OPERATOR_NAME: &str = "topic-operator";

/// KafkaTopic CRD coordinates
pub mod crd {
    pub const GROUP: &str = "kafka.strimzi.io";
    pub const VERSION: &str = "v1beta2";
    pub const KIND: &str = "KafkaTopic";
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Defaults for environment configuration
pub mod defaults {
    pub const WORKER_THREADS: usize = 16;
}
