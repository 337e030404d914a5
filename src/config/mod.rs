// ABOUTME: Configuration module for the plan service and CLI
// ABOUTME: Environment-driven service settings; planning defaults live in the engine crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: service settings from environment variables
//! - **Planning**: re-exported from `planner_engine::config`

/// Environment and service configuration
pub mod environment;

pub use environment::{Environment, ServiceConfig, StartAnchor};
pub use planner_engine::config::PlanningConfig;
