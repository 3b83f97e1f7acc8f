use std::collections::HashMap;

use crate::config::{ScoringConfig, MAX_ALTERNATIVES};
use crate::models::{CollegeStats, RecommendationResult, SurveyRecord};

/// Where survey answers come from.
pub trait SurveySource {
    /// Records answered as `personality_type` by enrolled respondents with a college.
    async fn fetch_eligible(&self, personality_type: &str) -> anyhow::Result<Vec<SurveyRecord>>;
}

#[derive(Debug, Default)]
struct CollegeTally {
    fits: Vec<bool>,
    switches: Vec<bool>,
}

impl CollegeTally {
    fn total_responses(&self) -> usize {
        self.fits.len().max(self.switches.len())
    }
}

/// Rank colleges for one personality type.
///
/// Never fails: a datastore error, an empty result set and a set where no
/// college reaches `min_responses` all come back as `has_enough_data == false`.
pub async fn compute_recommendation<S: SurveySource>(
    source: &S,
    personality_type: &str,
    scoring: &ScoringConfig,
) -> RecommendationResult {
    let records = match source.fetch_eligible(personality_type).await {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(personality_type, "failed to fetch survey responses: {err:#}");
            return RecommendationResult::empty(0);
        }
    };

    let eligible: Vec<&SurveyRecord> = records
        .iter()
        .filter(|record| record.is_eligible_for(personality_type))
        .collect();

    if eligible.is_empty() {
        tracing::info!(personality_type, "no responses recorded yet");
        return RecommendationResult::empty(0);
    }

    let ranked = rank_colleges(eligible.iter().copied(), scoring);
    let total_data_points = eligible.len();

    if ranked.is_empty() {
        tracing::info!(
            personality_type,
            total_data_points,
            min_responses = scoring.min_responses,
            "no college has enough responses"
        );
        return RecommendationResult::empty(total_data_points);
    }

    tracing::debug!(
        personality_type,
        total_data_points,
        colleges = ranked.len(),
        "ranked colleges"
    );

    let alternatives = ranked
        .iter()
        .skip(1)
        .take(scoring.alternatives.min(MAX_ALTERNATIVES))
        .cloned()
        .collect();

    RecommendationResult {
        recommended: ranked.first().cloned(),
        alternatives,
        total_data_points,
        has_enough_data: true,
        all_colleges: ranked,
    }
}

/// Group records by college, drop small samples and sort by score.
pub fn rank_colleges<'a, I>(records: I, scoring: &ScoringConfig) -> Vec<CollegeStats>
where
    I: IntoIterator<Item = &'a SurveyRecord>,
{
    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, CollegeTally> = HashMap::new();

    for record in records {
        let Some(college) = record.college.as_deref() else {
            continue;
        };

        let tally = tallies.entry(college.to_string()).or_insert_with(|| {
            order.push(college.to_string());
            CollegeTally::default()
        });

        if let Some(fits) = record.major_fits {
            tally.fits.push(fits);
        }
        if let Some(would_switch) = record.would_switch {
            tally.switches.push(would_switch);
        }
    }

    let mut stats: Vec<CollegeStats> = order
        .into_iter()
        .filter_map(|college| {
            let tally = tallies.remove(&college)?;
            college_stats(college, &tally, scoring)
        })
        .collect();

    // sort_by is stable, so equal scores keep first-seen order
    stats.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    stats
}

fn college_stats(college: String, tally: &CollegeTally, scoring: &ScoringConfig) -> Option<CollegeStats> {
    let total_responses = tally.total_responses();
    if total_responses < scoring.min_responses {
        return None;
    }

    let fit_rate = percent_true(&tally.fits);
    let switch_rate = percent_true(&tally.switches);

    Some(CollegeStats {
        college,
        total_responses,
        fit_rate: round_one_decimal(fit_rate),
        switch_rate: round_one_decimal(switch_rate),
        score: composite_score(fit_rate, switch_rate, scoring),
    })
}

pub fn composite_score(fit_rate: f64, switch_rate: f64, scoring: &ScoringConfig) -> f64 {
    fit_rate * scoring.fit_weight + (100.0 - switch_rate) * scoring.switch_weight
}

fn percent_true(values: &[bool]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hits = values.iter().filter(|value| **value).count();
    hits as f64 / values.len() as f64 * 100.0
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
