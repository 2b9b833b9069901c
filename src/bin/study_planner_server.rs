// ABOUTME: Server binary for the study planner REST API
// ABOUTME: Loads environment configuration and runs the HTTP server until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Study Planner Server Binary
//!
//! This binary starts the study planner REST API with user authentication,
//! quiz tracking, and adaptive weekly schedule generation.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use study_planner::{
    auth::{generate_jwt_secret, AuthManager},
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    server::StudyPlannerServer,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "study-planner-server")]
#[command(about = "Study Planner - Adaptive study recommendations for students")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(url) = &args.database_url {
        config.database.url = DatabaseUrl::parse_url(url);
    }
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Study Planner Server");
    info!("{}", config.summary());

    // File-backed databases need their parent directory to exist before
    // sqlite can create the file
    if let DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        config.database.url
    );

    // Use the configured JWT secret, or generate an ephemeral one. A
    // generated secret invalidates all sessions on restart.
    let auth_manager = match &config.auth.jwt_secret {
        Some(secret) => AuthManager::new(
            secret.as_bytes(),
            config.auth.token_expiry_hours,
            config.auth.remember_me_expiry_hours,
        ),
        None => {
            warn!("JWT_SECRET not set; generating an ephemeral signing secret");
            let secret = generate_jwt_secret()?;
            AuthManager::new(
                &secret,
                config.auth.token_expiry_hours,
                config.auth.remember_me_expiry_hours,
            )
        }
    };
    info!("Authentication manager initialized");

    let server = StudyPlannerServer::new(database, auth_manager, Arc::new(config));

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
