use crate::models::CollegeStats;

pub fn fit_band(fit_rate: f64) -> &'static str {
    if fit_rate >= 75.0 {
        "excellent"
    } else if fit_rate >= 60.0 {
        "strong"
    } else if fit_rate >= 50.0 {
        "good"
    } else {
        "moderate"
    }
}

pub fn switch_band(switch_rate: f64) -> &'static str {
    if switch_rate <= 20.0 {
        "rarely"
    } else if switch_rate <= 35.0 {
        "infrequently"
    } else if switch_rate <= 50.0 {
        "sometimes"
    } else {
        "often"
    }
}

/// One-sentence summary of why `stats` ranks where it does.
pub fn explain(stats: &CollegeStats, personality_type: &str) -> String {
    format!(
        "Based on {} {} students in this college, {}% report that their major fits their \
         personality ({} fit rate), and {}% say they would switch if they could go back \
         (students {} regret this choice).",
        stats.total_responses,
        personality_type,
        whole_percent(stats.fit_rate),
        fit_band(stats.fit_rate),
        whole_percent(stats.switch_rate),
        switch_band(stats.switch_rate),
    )
}

// f64::round breaks ties away from zero; `{:.0}` alone would round half to even.
fn whole_percent(rate: f64) -> i64 {
    rate.round() as i64
}
