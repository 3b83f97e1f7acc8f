use std::fmt::Write;

use crate::config::{ChartConfig, ScoringConfig};
use crate::explain;
use crate::facts;
use crate::majors;
use crate::models::{CollegeStats, RecommendationResult};
use crate::scatter;

/// Colleges with the largest response count; several can tie.
pub fn most_popular(colleges: &[CollegeStats]) -> Vec<&str> {
    let Some(max) = colleges.iter().map(|c| c.total_responses).max() else {
        return Vec::new();
    };
    if max == 0 {
        return Vec::new();
    }

    colleges
        .iter()
        .filter(|c| c.total_responses == max)
        .map(|c| c.college.as_str())
        .collect()
}

/// Why no recommendation was made despite some responses existing.
pub fn shortfall_note(total_data_points: usize, min_responses: usize) -> Option<String> {
    (total_data_points > 0).then(|| {
        format!(
            "Found {} response(s), but each college needs at least {}.",
            total_data_points, min_responses
        )
    })
}

fn write_fun_facts(output: &mut String, personality_type: &str) {
    let _ = writeln!(output);
    let _ = writeln!(output, "## Did you know");
    for fact in facts::fun_facts(personality_type) {
        let _ = writeln!(output, "- {}", fact);
    }
}

pub fn build_report(
    personality_type: &str,
    result: &RecommendationResult,
    scoring: &ScoringConfig,
    chart: &ChartConfig,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# College Fit Report: {}", personality_type);
    let _ = writeln!(
        output,
        "Generated from {} eligible responses",
        result.total_data_points
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendation");

    let Some(top) = result.recommended.as_ref().filter(|_| result.has_enough_data) else {
        let _ = writeln!(
            output,
            "Not enough {} responses to recommend a college yet.",
            personality_type
        );
        if let Some(note) = shortfall_note(result.total_data_points, scoring.min_responses) {
            let _ = writeln!(output, "{}", note);
        }
        write_fun_facts(&mut output, personality_type);
        return output;
    };

    let _ = writeln!(output, "**{}** (score {:.2})", top.college, top.score);
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", explain::explain(top, personality_type));
    let _ = writeln!(output);
    let _ = writeln!(output, "Top majors: {}", majors::top_majors(Some(&top.college)).join(", "));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Alternatives");

    if result.alternatives.is_empty() {
        let _ = writeln!(output, "No other college has enough responses.");
    } else {
        for (index, alt) in result.alternatives.iter().enumerate() {
            let _ = writeln!(
                output,
                "{}. {}: fit {:.1}%, switch {:.1}%, score {:.2}",
                index + 1,
                alt.college,
                alt.fit_rate,
                alt.switch_rate,
                alt.score
            );
        }
    }

    let popular = most_popular(&result.all_colleges);
    let _ = writeln!(output);
    let _ = writeln!(output, "## College Comparison");
    let _ = writeln!(output, "| College | Responses | Fit rate | Switch rate | Score |");
    let _ = writeln!(output, "|---|---|---|---|---|");

    for stats in &result.all_colleges {
        let mut label = stats.college.clone();
        if stats.college == top.college {
            label.push_str(" (recommended)");
        }
        if popular.contains(&stats.college.as_str()) {
            label.push_str(" ★ most popular");
        }
        let _ = writeln!(
            output,
            "| {} | {} | {:.1}% | {:.1}% | {:.2} |",
            label, stats.total_responses, stats.fit_rate, stats.switch_rate, stats.score
        );
    }

    let bounds = scatter::layout(&result.all_colleges, chart).bounds;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Chart Ranges");
    let _ = writeln!(
        output,
        "- Fit range: {:.0}% - {:.0}%",
        bounds.fit_min.round(),
        bounds.fit_max.round()
    );
    let _ = writeln!(
        output,
        "- Switch range: {:.0}% - {:.0}%",
        bounds.switch_min.round(),
        bounds.switch_max.round()
    );

    write_fun_facts(&mut output, personality_type);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(college: &str, total_responses: usize, fit_rate: f64, switch_rate: f64, score: f64) -> CollegeStats {
        CollegeStats {
            college: college.to_string(),
            total_responses,
            fit_rate,
            switch_rate,
            score,
        }
    }

    #[test]
    fn popularity_includes_ties() {
        let colleges = vec![
            stats("Engineering", 4, 80.0, 10.0, 83.0),
            stats("Law", 6, 50.0, 50.0, 50.0),
            stats("Nursing", 6, 70.0, 20.0, 73.0),
        ];
        assert_eq!(most_popular(&colleges), vec!["Law", "Nursing"]);
        assert!(most_popular(&[]).is_empty());
    }

    #[test]
    fn report_lists_recommendation_and_comparison() {
        let top = stats("Engineering", 10, 80.0, 15.0, 81.5);
        let alt = stats("Law", 12, 50.0, 40.0, 53.0);
        let result = RecommendationResult {
            recommended: Some(top.clone()),
            alternatives: vec![alt.clone()],
            total_data_points: 22,
            has_enough_data: true,
            all_colleges: vec![top, alt],
        };

        let report = build_report("INTJ", &result, &ScoringConfig::default(), &ChartConfig::default());
        assert!(report.contains("# College Fit Report: INTJ"));
        assert!(report.contains("**Engineering** (score 81.50)"));
        assert!(report.contains("excellent fit rate"));
        assert!(report.contains("Top majors: Mechanical Engineering"));
        assert!(report.contains("1. Law: fit 50.0%, switch 40.0%, score 53.00"));
        assert!(report.contains("| Engineering (recommended) | 10 |"));
        assert!(report.contains("| Law ★ most popular | 12 |"));
        assert!(report.contains("## Chart Ranges"));
        assert!(report.contains("## Did you know"));
        assert!(report.contains("- INTJs report the highest satisfaction"));
    }

    #[test]
    fn report_without_data_says_so() {
        let report = build_report(
            "ESFP",
            &RecommendationResult::empty(1),
            &ScoringConfig::default(),
            &ChartConfig::default(),
        );
        assert!(report.contains("Not enough ESFP responses"));
        assert!(report.contains("Found 1 response(s), but each college needs at least 2."));
        assert!(!report.contains("## Alternatives"));
        assert!(report.contains("- ESFPs stay engaged"));
    }

    #[test]
    fn shortfall_reflects_configured_minimum() {
        let scoring = ScoringConfig {
            min_responses: 5,
            ..ScoringConfig::default()
        };
        let report = build_report("INTJ", &RecommendationResult::empty(3), &scoring, &ChartConfig::default());
        assert!(report.contains("Found 3 response(s), but each college needs at least 5."));

        assert_eq!(shortfall_note(0, 5), None);
    }

    #[test]
    fn unknown_type_gets_default_facts() {
        let report = build_report(
            "intj",
            &RecommendationResult::empty(0),
            &ScoringConfig::default(),
            &ChartConfig::default(),
        );
        assert!(report.contains("- MBTI magic incoming soon!"));
        assert!(report.contains("- Share the quiz to unlock more insights."));
    }
}
