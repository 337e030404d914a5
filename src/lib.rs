// ABOUTME: Main library entry point for the Pierre training planner service
// ABOUTME: Wires logging, environment configuration, and the plan service over the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Planner
//!
//! Deterministic periodized running plans, plus a fail-fast validator that
//! gates plans from any source before they are accepted.
//!
//! ## Architecture
//!
//! - **`planner_core`**: plan models, errors, dates, constants
//! - **`planner_engine`**: generation pipeline, validator, audit, strategy trait
//! - **this crate**: logging, service configuration, `PlanService`, and the
//!   `pierre-planner` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_planner::config::ServiceConfig;
//! use pierre_planner::plan_service::{read_preferences_file, PlanService};
//! use planner_core::errors::AppResult;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = PlanService::deterministic(ServiceConfig::default());
//!     let input = read_preferences_file(Path::new("preferences.json")).await?;
//!     let plan = service.create_plan(&input).await?;
//!     println!("{} weeks planned", plan.total_weeks());
//!     Ok(())
//! }
//! ```

/// Environment-driven service configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Strategy orchestration, start anchoring, and validation gate
pub mod plan_service;

pub use planner_core::errors::{AppError, AppResult, ErrorCode};
pub use planner_core::models;
pub use planner_engine::{
    audit_plan, DeterministicPlanGenerator, PlanGenerationStrategy, PlanSummary,
    PlanValidationError, PlanValidator, PlanWarning,
};
