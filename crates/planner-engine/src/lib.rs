// ABOUTME: Training plan engine for the Pierre training planner
// ABOUTME: Periodization pipeline, fail-fast plan validator, audit, and generation strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Engine
//!
//! Turns a runner's preferences into a periodized multi-week plan and checks
//! plans from any source before they are accepted.
//!
//! ## Pipeline
//!
//! `PreferenceNormalizer` → `PhaseScheduler` + `MileageCurve` →
//! `WorkoutDistributor` → `WorkoutTypeSelector` → `PlanAssembler`.
//! `DeterministicPlanGenerator` drives the whole pipeline and implements
//! `PlanGenerationStrategy`.
//!
//! ## Checks
//!
//! - **validator**: fail-fast structural rules with user-facing messages
//! - **audit**: non-fatal consistency warnings
//! - **summary**: plan totals for reporting

/// Planning configuration with environment overrides
pub mod config;

/// Experience-based preference clamping
pub mod normalizer;

/// Phase labelling by week
pub mod phases;

/// Weekly mileage targets
pub mod mileage;

/// Running day assignment
pub mod distributor;

/// Workout type, distance, and description per day
pub mod workout_selector;

/// Weekly and plan assembly
pub mod assembler;

/// Deterministic generator
pub mod generator;

/// Generation strategy contract
pub mod strategy;

/// Fail-fast plan validation
pub mod validator;

/// Non-fatal plan consistency checks
pub mod audit;

/// Plan totals
pub mod summary;

pub use audit::{audit_plan, PlanWarning};
pub use config::{ConfigError, PlanningConfig};
pub use generator::DeterministicPlanGenerator;
pub use normalizer::{EffectivePreferences, PreferenceNormalizer};
pub use strategy::PlanGenerationStrategy;
pub use summary::PlanSummary;
pub use validator::{PlanValidationError, PlanValidator};
