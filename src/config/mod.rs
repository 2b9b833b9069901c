// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment configs, validation, and runtime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Configuration module for the Study Planner server
//!
//! Centralized configuration management:
//!
//! - **Environment**: Server configuration from environment variables
//! - **Validation**: Range and sanity checks applied at load time

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, ServerConfig};
