// ABOUTME: Core types and constants for the Pierre training planner
// ABOUTME: Foundation crate with plan models, error handling, date helpers, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing the shared vocabulary of the training planner:
//! runner preferences, the assembled training plan, the error system, and the
//! calendar helpers every other crate leans on. Nothing here performs planning;
//! the engine crate owns the algorithms.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Planning constants organized by domain
//! - **dates**: ISO date parsing/formatting and weekday arithmetic
//! - **models**: Preferences input, training plan, weekly plan, and workout types

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Planning constants organized by domain
pub mod constants;

/// ISO date parsing, formatting, and weekday arithmetic shared by generator and validator
pub mod dates;

/// Core data models (preferences, training plan, workouts)
pub mod models;
