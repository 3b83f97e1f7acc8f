use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::PgPool;

use crate::db;
use crate::models::SurveyRecord;
use crate::recommend::SurveySource;

pub struct PgSurveySource {
    pool: PgPool,
}

impl PgSurveySource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SurveySource for PgSurveySource {
    async fn fetch_eligible(&self, personality_type: &str) -> anyhow::Result<Vec<SurveyRecord>> {
        db::fetch_eligible(&self.pool, personality_type).await
    }
}

/// Reads a CSV export of the responses table, re-read on every fetch.
pub struct CsvSurveySource {
    path: PathBuf,
}

impl CsvSurveySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SurveySource for CsvSurveySource {
    async fn fetch_eligible(&self, personality_type: &str) -> anyhow::Result<Vec<SurveyRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        let mut records = Vec::new();
        for row in reader.deserialize::<SurveyRecord>() {
            let record = row.with_context(|| format!("malformed row in {}", self.path.display()))?;
            if record.is_eligible_for(personality_type) {
                records.push(record);
            }
        }

        Ok(records)
    }
}
