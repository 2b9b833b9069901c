// ABOUTME: Motivational quote route handlers for random selection and curation
// ABOUTME: Serves the dashboard quote widget and lets users contribute quotes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Motivational quote routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::errors::AppError;
use crate::models::MotivationalQuote;
use crate::resources::ServerResources;

/// Response carrying one random quote, or null when none exist
#[derive(Debug, Serialize)]
pub struct RandomQuoteResponse {
    pub quote: Option<MotivationalQuote>,
}

/// Response listing all quotes, newest first
#[derive(Debug, Serialize)]
pub struct QuoteListResponse {
    pub quotes: Vec<MotivationalQuote>,
}

/// Request contributing a new quote
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub quote_text: String,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// Confirmation with the stored quote
#[derive(Debug, Serialize)]
pub struct CreateQuoteResponse {
    pub success: bool,
    pub message: String,
    pub quote: MotivationalQuote,
}

/// Motivational quote route handlers
pub struct QuoteRoutes;

impl QuoteRoutes {
    /// Create the quote routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/random-quote", get(Self::handle_random_quote))
            .route(
                "/api/quotes",
                get(Self::handle_list_quotes).post(Self::handle_create_quote),
            )
            .with_state(resources)
    }

    /// Return one random active quote, or null when the table is empty
    async fn handle_random_quote(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let quote = resources.database.get_random_active_quote().await?;
        Ok((StatusCode::OK, Json(RandomQuoteResponse { quote })).into_response())
    }

    /// List all quotes, newest first
    async fn handle_list_quotes(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let quotes = resources.database.get_quotes().await?;
        Ok((StatusCode::OK, Json(QuoteListResponse { quotes })).into_response())
    }

    /// Store a user-contributed quote
    async fn handle_create_quote(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateQuoteRequest>,
    ) -> Result<Response, AppError> {
        let user = resources.auth_middleware.authenticate_request(&headers).await?;

        let quote_text = request.quote_text.trim().to_owned();
        if quote_text.is_empty() {
            return Err(AppError::invalid_input("Quote text must not be empty"));
        }
        let author = request
            .author
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| defaults::QUOTE_AUTHOR.to_owned());
        let category = request
            .category
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| defaults::QUOTE_CATEGORY.to_owned());

        let id = resources
            .database
            .create_quote(&quote_text, &author, &category)
            .await?;

        tracing::info!(user_id = %user.user_id, quote_id = id, "Stored new quote");

        Ok((
            StatusCode::CREATED,
            Json(CreateQuoteResponse {
                success: true,
                message: "Quote added successfully".into(),
                quote: MotivationalQuote {
                    id,
                    quote_text,
                    author,
                    category,
                    is_active: true,
                    created_at: Utc::now(),
                },
            }),
        )
            .into_response())
    }
}
