// ABOUTME: Main library entry point for the study planner platform
// ABOUTME: Provides an adaptive study recommendation engine behind a REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Study Planner Server
//!
//! An adaptive study planning service for secondary-school students. The
//! server compares each student's self-rated subject confidence against
//! their actual quiz performance, flags the mismatches, and lays out a
//! weekly study schedule around the resulting recommendations.
//!
//! ## Features
//!
//! - **Adaptive recommendations**: Overconfidence, underconfidence, and weak
//!   performance are detected from confidence and quiz score aggregates
//! - **Weekly scheduling**: Sessions are distributed Monday through Sunday,
//!   highest priority first
//! - **JWT authentication**: Stateless sessions with optional extended
//!   "remember me" expiry
//! - **Motivational quotes**: A curated quote rotation for the dashboard
//!
//! ## Quick Start
//!
//! 1. Seed the quote table with the `seed-quotes` binary
//! 2. Start the API with `study-planner-server`
//! 3. Register via `POST /api/signup` and fetch `GET /api/study-plan`
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Intelligence**: The recommendation engine and schedule allocator
//! - **Models**: Users, subject confidences, quiz attempts, quotes
//! - **Database**: `SQLite` storage and the performance aggregation query
//! - **Routes**: Thin axum handlers delegating to service layers
//! - **Config**: Environment-driven configuration management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use study_planner::config::environment::ServerConfig;
//! use study_planner::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     // Start the study planner server with loaded configuration
//!     println!("Study planner configured with port: HTTP={}",
//!              config.http_port);
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by binary crates (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Authentication and session management
pub mod auth;

/// Configuration management and persistence
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// `SQLite` storage for users, subjects, quiz attempts, and quotes
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recommendation engine and schedule allocator
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for authentication and CORS
pub mod middleware;

/// Common data models for users, subjects, quizzes, and quotes
pub mod models;

/// Shared server resources behind reference-counted handles
pub mod resources;

/// `HTTP` routes for registration, planning, and quote endpoints
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;
