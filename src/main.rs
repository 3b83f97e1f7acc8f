use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod config;
mod db;
mod explain;
mod facts;
mod majors;
mod models;
mod recommend;
mod report;
mod scatter;
mod source;

use config::Config;
use models::{NewResponse, RecommendationResult, PERSONALITY_TYPES};
use recommend::SurveySource;
use source::{CsvSurveySource, PgSurveySource};

#[derive(Parser)]
#[command(name = "college-fit")]
#[command(about = "Crowd-sourced college recommendations by personality type", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "college-fit.toml")]
    config: PathBuf,

    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load sample survey responses
    Seed,
    /// Import survey responses from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Record a single survey response
    Submit {
        #[arg(long)]
        school: String,
        #[arg(long)]
        personality_type: String,
        /// Currently or previously enrolled in a college
        #[arg(long, requires_all = ["college", "fits", "would_switch"])]
        enrolled: bool,
        #[arg(long)]
        college: Option<String>,
        /// Does the major fit your personality?
        #[arg(long)]
        fits: Option<bool>,
        /// Would you switch majors if you could go back?
        #[arg(long)]
        would_switch: Option<bool>,
        #[arg(long)]
        switch_college: Option<String>,
    },
    /// Recommend a college for a personality type
    Recommend {
        #[arg(long)]
        personality_type: String,
        /// Read responses from a CSV export instead of the database
        #[arg(long)]
        from_csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        personality_type: String,
        #[arg(long)]
        from_csv: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Draw the fit vs switch scatter chart as SVG
    Chart {
        #[arg(long)]
        personality_type: String,
        #[arg(long)]
        from_csv: Option<PathBuf>,
        #[arg(long, default_value = "chart.svg")]
        out: PathBuf,
        /// Print the computed layout as JSON instead of writing SVG
        #[arg(long)]
        json: bool,
    },
    /// Summarize recommendations for all sixteen personality types
    Sweep {
        #[arg(long)]
        from_csv: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn connect(database_url: Option<&str>, config: &Config) -> anyhow::Result<PgPool> {
    let database_url =
        database_url.context("DATABASE_URL must be set to the survey Postgres instance")?;

    PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")
}

async fn recommend_from(
    from_csv: Option<&Path>,
    database_url: Option<&str>,
    config: &Config,
    personality_types: &[&str],
) -> anyhow::Result<Vec<RecommendationResult>> {
    match from_csv {
        Some(path) => run_all(&CsvSurveySource::new(path), personality_types, config).await,
        None => {
            let pool = connect(database_url, config).await?;
            run_all(&PgSurveySource::new(pool), personality_types, config).await
        }
    }
}

async fn run_all<S: SurveySource>(
    source: &S,
    personality_types: &[&str],
    config: &Config,
) -> anyhow::Result<Vec<RecommendationResult>> {
    let mut results = Vec::with_capacity(personality_types.len());
    for personality_type in personality_types {
        results.push(recommend::compute_recommendation(source, personality_type, &config.scoring).await);
    }
    Ok(results)
}

async fn recommend_one(
    from_csv: Option<&Path>,
    database_url: Option<&str>,
    config: &Config,
    personality_type: &str,
) -> anyhow::Result<RecommendationResult> {
    recommend_from(from_csv, database_url, config, &[personality_type])
        .await?
        .pop()
        .context("no recommendation computed")
}

fn print_recommendation(personality_type: &str, result: &RecommendationResult, min_responses: usize) {
    println!("Total data points: {}", result.total_data_points);

    let Some(top) = &result.recommended else {
        println!("Not enough data for {personality_type} recommendations.");
        if let Some(note) = report::shortfall_note(result.total_data_points, min_responses) {
            println!("{note}");
        }
        return;
    };

    println!("Recommended: {}", top.college);
    println!(
        "  fit {:.1}%, switch {:.1}%, score {:.2}, {} responses",
        top.fit_rate, top.switch_rate, top.score, top.total_responses
    );
    println!("  {}", explain::explain(top, personality_type));

    if !result.alternatives.is_empty() {
        println!("Alternatives:");
        for (index, alt) in result.alternatives.iter().enumerate() {
            println!(
                "  {}. {} (fit {:.1}%, switch {:.1}%, score {:.2})",
                index + 1,
                alt.college,
                alt.fit_rate,
                alt.switch_rate,
                alt.score
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(&cli.config)?;
    let database_url = cli.database_url.as_deref();

    match cli.command {
        Commands::InitDb => {
            let pool = connect(database_url, &config).await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            let pool = connect(database_url, &config).await?;
            let inserted = db::seed(&pool).await?;
            println!("Seed data inserted ({inserted} new responses).");
        }
        Commands::Import { csv } => {
            let pool = connect(database_url, &config).await?;
            let inserted = db::import_csv(&pool, &csv).await?;
            println!("Inserted {inserted} responses from {}.", csv.display());
        }
        Commands::Submit {
            school,
            personality_type,
            enrolled,
            college,
            fits,
            would_switch,
            switch_college,
        } => {
            let response = if enrolled {
                NewResponse {
                    school,
                    enrolled,
                    personality_type,
                    college,
                    major_fits: fits,
                    would_switch,
                    switch_college: switch_college.filter(|_| would_switch == Some(true)),
                    source_key: format!("submit-{}", Uuid::new_v4()),
                    submitted_at: Utc::now(),
                }
            } else {
                NewResponse::not_enrolled(&school, &personality_type)
            };

            let pool = connect(database_url, &config).await?;
            db::insert_response(&pool, &response).await?;
            tracing::info!(source_key = %response.source_key, "stored response");
            println!("Response saved for {}.", response.personality_type);
        }
        Commands::Recommend {
            personality_type,
            from_csv,
            json,
        } => {
            let result =
                recommend_one(from_csv.as_deref(), database_url, &config, &personality_type).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_recommendation(&personality_type, &result, config.scoring.min_responses);
            }
        }
        Commands::Report {
            personality_type,
            from_csv,
            out,
        } => {
            let result =
                recommend_one(from_csv.as_deref(), database_url, &config, &personality_type).await?;
            let report = report::build_report(&personality_type, &result, &config.scoring, &config.chart);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Chart {
            personality_type,
            from_csv,
            out,
            json,
        } => {
            let result =
                recommend_one(from_csv.as_deref(), database_url, &config, &personality_type).await?;
            let layout = scatter::layout(&result.all_colleges, &config.chart);
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                let svg = scatter::render_svg(&layout, &personality_type, &config.chart);
                std::fs::write(&out, svg)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                println!("Chart written to {}.", out.display());
            }
        }
        Commands::Sweep { from_csv } => {
            let results =
                recommend_from(from_csv.as_deref(), database_url, &config, &PERSONALITY_TYPES).await?;
            for (personality_type, result) in PERSONALITY_TYPES.iter().zip(&results) {
                println!("== {personality_type}");
                print_recommendation(personality_type, result, config.scoring.min_responses);
            }
        }
    }

    Ok(())
}
