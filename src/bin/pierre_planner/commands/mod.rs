// ABOUTME: Re-exports command modules for pierre-planner
// ABOUTME: Provides access to plan generation, validation, and audit commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plan;
