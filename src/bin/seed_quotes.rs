// ABOUTME: Motivational quote seeding utility for the study planner
// ABOUTME: Creates the default quote rotation shown on the student dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Motivational quote seeder for the study planner.
//!
//! This binary inserts the default motivational quotes into the database.
//! Run it once after the first server start, or with `--force` to re-seed.
//!
//! Usage:
//! ```bash
//! # Seed quotes (uses DATABASE_URL from environment)
//! cargo run --bin seed-quotes
//!
//! # Override database URL
//! cargo run --bin seed-quotes -- --database-url sqlite:./data/study_planner.db
//!
//! # Verbose output
//! cargo run --bin seed-quotes -- -v
//!
//! # Force re-seed (skip existing check)
//! cargo run --bin seed-quotes -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use std::env;
use study_planner::database::Database;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-quotes",
    about = "Study Planner Motivational Quote Seeder",
    long_about = "Insert the default motivational quotes shown on the student dashboard"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if quotes already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Seed quote definition
struct SeedQuote {
    quote_text: &'static str,
    author: &'static str,
    category: &'static str,
}

/// The default motivational quote rotation
const SEED_QUOTES: &[SeedQuote] = &[
    SeedQuote {
        quote_text: "Push yourself, because no one else is going to do it for you.",
        author: "Unknown",
        category: "Motivation",
    },
    SeedQuote {
        quote_text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
        category: "Procrastination",
    },
    SeedQuote {
        quote_text: "Don't limit your challenges. Challenge your limits.",
        author: "Unknown",
        category: "Growth",
    },
    SeedQuote {
        quote_text: "The expert in anything was once a beginner.",
        author: "Helen Hayes",
        category: "Learning",
    },
    SeedQuote {
        quote_text: "Success doesn't come from what you do occasionally, it comes from what you do consistently.",
        author: "Marie Forleo",
        category: "Consistency",
    },
    SeedQuote {
        quote_text: "The harder you work for something, the greater you'll feel when you achieve it.",
        author: "Unknown",
        category: "Achievement",
    },
    SeedQuote {
        quote_text: "Education is the most powerful weapon which you can use to change the world.",
        author: "Nelson Mandela",
        category: "Education",
    },
    SeedQuote {
        quote_text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
        category: "Belief",
    },
    SeedQuote {
        quote_text: "Your future is created by what you do today, not tomorrow.",
        author: "Robert Kiyosaki",
        category: "Action",
    },
    SeedQuote {
        quote_text: "The beautiful thing about learning is that no one can take it away from you.",
        author: "B.B. King",
        category: "Learning",
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Study Planner Quote Seeder ===");

    // Load database URL
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/study_planner.db".into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;

    // Check if quotes already exist
    let existing_count = database.get_quote_count().await?;
    if existing_count > 0 && !args.force {
        info!(
            "Quotes already seeded ({} quotes found). Use --force to re-seed.",
            existing_count
        );
        return Ok(());
    }

    info!("Seeding {} motivational quotes...", SEED_QUOTES.len());
    let seeded_count = seed_quotes(&database).await?;

    info!("");
    info!("=== Seeding Complete ===");
    info!("Created {} motivational quotes", seeded_count);
    info!("Quotes are now available on the dashboard.");

    Ok(())
}

/// Insert one quote, reporting failure without aborting the run
async fn insert_quote(database: &Database, quote: &SeedQuote) -> bool {
    match database
        .create_quote(quote.quote_text, quote.author, quote.category)
        .await
    {
        Ok(_) => {
            info!("  ✓ {}", quote.quote_text);
            true
        }
        Err(e) => {
            info!("  ✗ {} - Error: {}", quote.quote_text, e);
            false
        }
    }
}

/// Seed the default quotes into the database
async fn seed_quotes(database: &Database) -> Result<u32> {
    let mut seeded_count = 0u32;

    for quote in SEED_QUOTES {
        if insert_quote(database, quote).await {
            seeded_count += 1;
        }
    }

    Ok(seeded_count)
}
