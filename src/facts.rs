//! Short findings shown alongside results for each personality type.

pub const DEFAULT_FUN_FACTS: &[&str] = &["MBTI magic incoming soon!", "Share the quiz to unlock more insights."];

/// Keyed on the exact personality type; no case folding.
const FUN_FACTS: &[(&str, &[&str])] = &[
    (
        "INTJ",
        &[
            "INTJs report the highest satisfaction when programs provide autonomy and strategic deliverables.",
            "Data-backed curricula and measurable outcomes increase INTJ retention by ~18%.",
        ],
    ),
    (
        "INTP",
        &[
            "INTPs favor programs with research labs or independent study credit baked in.",
            "Flexible course sequencing correlates with stronger INTP fit scores.",
        ],
    ),
    (
        "ENTJ",
        &[
            "ENTJs thrive in programs featuring leadership labs, client consulting, or venture accelerators.",
            "Structured mentoring from executives keeps ENTJ satisfaction high across semesters.",
        ],
    ),
    (
        "ENTP",
        &[
            "ENTPs rate programs higher when iteration cycles (pitch, feedback, rebuild) are standard practice.",
            "Innovation coursework combined with debate/policy electives drives ENTP engagement.",
        ],
    ),
    (
        "INFJ",
        &[
            "INFJs seek programs with purpose statements and integrated mentorship opportunities.",
            "Interdisciplinary capstones that tie strategy to people impact resonate strongly with INFJs.",
        ],
    ),
    (
        "INFP",
        &[
            "INFPs value creative latitude plus community-focused outcomes inside their program.",
            "Service-learning requirements measurably improve INFP persistence.",
        ],
    ),
    (
        "ENFJ",
        &[
            "ENFJs align with programs offering peer leadership roles and coaching assignments.",
            "Curricula that embed service hours sustain ENFJ motivation across junior/senior year.",
        ],
    ),
    (
        "ENFP",
        &[
            "ENFPs prefer exploratory tracks during the first year to test multiple disciplines.",
            "Study-abroad or immersive internships correlate with higher ENFP satisfaction.",
        ],
    ),
    (
        "ISTJ",
        &[
            "ISTJs rate programs highest when expectations, grading, and internship pipelines are explicit.",
            "Accreditation standards and structured practicum hours reinforce ISTJ confidence.",
        ],
    ),
    (
        "ISFJ",
        &[
            "ISFJs value predictable support services and faculty access more than optional perks.",
            "Applied service projects boost ISFJ stay rates by double digits.",
        ],
    ),
    (
        "ESTJ",
        &[
            "ESTJs excel in programs emphasizing operations, governance, and measurable KPIs.",
            "Cohort leadership roles keep ESTJs engaged even in heavy quantitative semesters.",
        ],
    ),
    (
        "ESFJ",
        &[
            "ESFJs respond to curricula with strong community-building components.",
            "Programs that recognize milestone achievements publicly retain ESFJs at higher rates.",
        ],
    ),
    (
        "ISTP",
        &[
            "ISTPs need extended lab or shop time to stay invested in technical programs.",
            "Autonomy in how they approach prototypes translates to higher ISTP fit scores.",
        ],
    ),
    (
        "ISFP",
        &[
            "ISFPs thrive when studios, fieldwork, and user-impact briefs are standard each term.",
            "Flexible deliverable formats (photo, video, installation) bolster ISFP satisfaction.",
        ],
    ),
    (
        "ESTP",
        &[
            "ESTPs favor live-client engagements and rapid feedback loops in coursework.",
            "Competitive practicums anchor ESTP focus and reduce attrition.",
        ],
    ),
    (
        "ESFP",
        &[
            "ESFPs stay engaged when presentation, media, or performance deliverables are routine.",
            "Rotating team roles keep ESFPs energized throughout collaborative courses.",
        ],
    ),
];

pub fn fun_facts(personality_type: &str) -> &'static [&'static str] {
    FUN_FACTS
        .iter()
        .find(|(key, _)| *key == personality_type)
        .map(|(_, facts)| *facts)
        .unwrap_or(DEFAULT_FUN_FACTS)
}
