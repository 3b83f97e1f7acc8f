use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{NewResponse, SurveyRecord};

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn seed(pool: &PgPool) -> anyhow::Result<usize> {
    // (source_key, school, personality_type, college, major_fits, would_switch, switch_college)
    let responses = vec![
        ("seed-001", "Brigham Young University", "INTJ", "Engineering", true, false, None),
        ("seed-002", "Brigham Young University", "INTJ", "Engineering", true, true, Some("Business")),
        ("seed-003", "Brigham Young University", "INTJ", "Computational, Mathematical and Physical Sciences", true, false, None),
        ("seed-004", "Brigham Young University", "INTJ", "Computational, Mathematical and Physical Sciences", false, false, None),
        ("seed-005", "Brigham Young University", "INTJ", "Business", false, true, Some("Engineering")),
        ("seed-006", "Stanford University", "ENFP", "Fine Arts and Communications", true, false, None),
        ("seed-007", "Stanford University", "ENFP", "Fine Arts and Communications", true, false, None),
        ("seed-008", "Stanford University", "ENFP", "Humanities", false, true, Some("Fine Arts and Communications")),
        ("seed-009", "Rice University", "ISFJ", "Nursing", true, false, None),
        ("seed-010", "Rice University", "ISFJ", "Nursing", true, false, None),
        ("seed-011", "Rice University", "ISFJ", "Education", true, true, Some("Nursing")),
        ("seed-012", "Rice University", "ISFJ", "Education", false, false, None),
    ];

    let mut inserted = 0usize;
    for (source_key, school, personality_type, college, major_fits, would_switch, switch_college) in responses {
        let response = NewResponse {
            school: school.to_string(),
            enrolled: true,
            personality_type: personality_type.to_string(),
            college: Some(college.to_string()),
            major_fits: Some(major_fits),
            would_switch: Some(would_switch),
            switch_college: switch_college.map(str::to_string),
            source_key: source_key.to_string(),
            submitted_at: Utc::now(),
        };
        if insert_response(pool, &response).await? {
            inserted += 1;
        }
    }

    tracing::info!(inserted, "seeded sample responses");
    Ok(inserted)
}

/// Returns `false` when a response with the same source key already exists.
pub async fn insert_response(pool: &PgPool, response: &NewResponse) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO college_fit.responses
        (id, submitted_at, school, enrolled, personality_type, college, major_fits, would_switch, switch_college, source_key)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (source_key) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(response.submitted_at)
    .bind(&response.school)
    .bind(response.enrolled)
    .bind(&response.personality_type)
    .bind(&response.college)
    .bind(response.major_fits)
    .bind(response.would_switch)
    .bind(&response.switch_college)
    .bind(&response.source_key)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn fetch_eligible(pool: &PgPool, personality_type: &str) -> anyhow::Result<Vec<SurveyRecord>> {
    let rows = sqlx::query(
        r#"
        SELECT personality_type, college, major_fits, would_switch, enrolled
        FROM college_fit.responses
        WHERE personality_type = $1
          AND enrolled = TRUE
          AND college IS NOT NULL
        "#,
    )
    .bind(personality_type)
    .fetch_all(pool)
    .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(SurveyRecord {
            personality_type: row.get("personality_type"),
            college: row.get("college"),
            major_fits: row.get("major_fits"),
            would_switch: row.get("would_switch"),
            enrolled: row.get("enrolled"),
        });
    }

    Ok(records)
}

#[derive(Debug, serde::Deserialize)]
pub struct CsvResponse {
    pub school: String,
    pub enrolled: bool,
    pub personality_type: String,
    pub college: Option<String>,
    pub major_fits: Option<bool>,
    pub would_switch: Option<bool>,
    pub switch_college: Option<String>,
    pub source_key: Option<String>,
}

impl From<CsvResponse> for NewResponse {
    fn from(row: CsvResponse) -> Self {
        let source_key = row
            .source_key
            .unwrap_or_else(|| format!("import-{}", Uuid::new_v4()));

        NewResponse {
            school: row.school,
            enrolled: row.enrolled,
            personality_type: row.personality_type,
            college: row.college,
            major_fits: row.major_fits,
            would_switch: row.would_switch,
            switch_college: row.switch_college,
            source_key,
            submitted_at: Utc::now(),
        }
    }
}

pub async fn import_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvResponse>() {
        let response = NewResponse::from(result?);
        if insert_response(pool, &response).await? {
            inserted += 1;
        } else {
            tracing::debug!(source_key = %response.source_key, "skipping duplicate response");
        }
    }

    Ok(inserted)
}
