// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod executor;
pub mod identity;
pub mod kubernetes;
pub mod labels;
pub mod topics;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{Result, TopicError};
pub use topics::TopicResources;
