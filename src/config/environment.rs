// ABOUTME: Environment configuration for the plan service and CLI
// ABOUTME: Parses start-date anchoring, post-generation validation, and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based service configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Which start date a generated plan uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartAnchor {
    /// Keep the caller's start date
    #[default]
    Requested,
    /// Replace the caller's start date with today's date
    Today,
}

impl StartAnchor {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "today" | "now" => Self::Today,
            _ => Self::Requested,
        }
    }
}

impl fmt::Display for StartAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => write!(f, "requested"),
            Self::Today => write!(f, "today"),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Plan service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Start date handling for generated plans
    pub start_anchor: StartAnchor,
    /// Run the validator on every generated plan
    pub validate_generated: bool,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            start_anchor: StartAnchor::Requested,
            validate_generated: true,
            environment: Environment::Development,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `PLANNER_VALIDATE_GENERATED` is not a boolean
    pub fn from_env() -> Result<Self> {
        let config = Self {
            start_anchor: StartAnchor::from_str_or_default(&env_var_or(
                "PLANNER_START_ANCHOR",
                "requested",
            )),
            validate_generated: parse_bool(
                "PLANNER_VALIDATE_GENERATED",
                &env_var_or("PLANNER_VALIDATE_GENERATED", "true"),
            )?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        info!(
            start_anchor = %config.start_anchor,
            validate_generated = config.validate_generated,
            environment = %config.environment,
            "Service configuration loaded"
        );
        Ok(config)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean flag, accepting `true/false/1/0/yes/no`
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow!("Invalid {key} value: {other}")),
    }
}
