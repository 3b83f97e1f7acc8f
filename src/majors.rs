//! Popular majors per college, shown next to a recommendation.

pub const DEFAULT_TOP_MAJORS: &[&str] = &["Data Science", "Communications", "Experience Design"];

const BUSINESS: &[&str] = &["Accountancy", "Finance", "Information Systems", "Management", "Supply Chain"];
const FINE_ARTS: &[&str] = &["Art", "Design", "Dance", "Music", "Communications"];
const HUMANITIES: &[&str] = &["English", "Philosophy", "Languages", "Comparative Arts & Letters"];
const LIFE_SCIENCES: &[&str] = &[
    "Biology",
    "Nutrition",
    "Public Health",
    "Neuroscience",
    "Plant & Wildlife Sciences",
];
const NURSING: &[&str] = &["Nursing (BS)", "Nursing (MS)", "Nurse Practitioner Programs"];
const PHYSICAL_SCIENCES: &[&str] = &[
    "Chemistry",
    "Physics",
    "Mathematics",
    "Computer Science",
    "Applied Statistics",
];
const SOCIAL_SCIENCES: &[&str] = &["Sociology", "Psychology", "Family Studies", "Economics", "Anthropology"];
const INTERNATIONAL: &[&str] = &["International Relations", "Area Studies", "Language & Cultural Studies"];
const LAW: &[&str] = &["Juris Doctor (JD)", "Business Law", "International Law"];
const EDUCATION: &[&str] = &["Elementary Education", "Special Education", "Early Childhood Education"];
const RELIGIOUS: &[&str] = &["Ancient Scripture", "Church History", "World Religions"];
const UNDERGRADUATE: &[&str] = &["General Education", "Interdisciplinary Studies", "Teacher Preparation"];
const CONTINUING: &[&str] = &["Evening Classes", "Independent Study", "Professional Certificates"];
const ENGINEERING: &[&str] = &[
    "Mechanical Engineering",
    "Electrical Engineering",
    "Computer Engineering",
    "Civil Engineering",
];
const UNIVERSITY_WIDE: &[&str] = &["General Education", "Campus-wide Programs", "Leadership Development"];
const OTHER: &[&str] = &["Interdisciplinary Studies", "Entrepreneurship", "Data Analytics"];

/// Keys are lowercase; several spellings of a college share one list.
const TOP_MAJORS: &[(&str, &[&str])] = &[
    ("marriott school of business", BUSINESS),
    ("business", BUSINESS),
    ("college of fine arts and communications", FINE_ARTS),
    ("fine arts and communications", FINE_ARTS),
    ("fine arts", FINE_ARTS),
    ("college of humanities", HUMANITIES),
    ("humanities", HUMANITIES),
    ("college of life sciences", LIFE_SCIENCES),
    ("life sciences", LIFE_SCIENCES),
    ("college of nursing", NURSING),
    ("nursing", NURSING),
    ("college of physical and mathematical sciences", PHYSICAL_SCIENCES),
    ("college of computational, mathematical & physical sciences", PHYSICAL_SCIENCES),
    ("college of computational, mathematical and physical sciences", PHYSICAL_SCIENCES),
    ("computational, mathematical and physical sciences", PHYSICAL_SCIENCES),
    ("college of family, home, and social sciences", SOCIAL_SCIENCES),
    ("college of family, home & social sciences", SOCIAL_SCIENCES),
    ("family, home & social sciences", SOCIAL_SCIENCES),
    ("family, home, and social sciences", SOCIAL_SCIENCES),
    ("david m. kennedy center for international studies", INTERNATIONAL),
    ("kennedy center for international studies", INTERNATIONAL),
    ("international studies", INTERNATIONAL),
    ("j. reuben clark law school", LAW),
    ("law school", LAW),
    ("law", LAW),
    ("david o. mckay school of education", EDUCATION),
    ("school of education", EDUCATION),
    ("education", EDUCATION),
    ("college of religious education", RELIGIOUS),
    ("religious education", RELIGIOUS),
    ("college of undergraduate education", UNDERGRADUATE),
    ("undergraduate education", UNDERGRADUATE),
    ("continuing education", CONTINUING),
    ("ira a. fulton college of engineering", ENGINEERING),
    ("engineering", ENGINEERING),
    ("brigham young university", UNIVERSITY_WIDE),
    ("byu", UNIVERSITY_WIDE),
    ("other", OTHER),
];

pub fn top_majors(college: Option<&str>) -> &'static [&'static str] {
    let Some(college) = college else {
        return DEFAULT_TOP_MAJORS;
    };
    let key = college.trim().to_lowercase();

    TOP_MAJORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, majors)| *majors)
        .unwrap_or(DEFAULT_TOP_MAJORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(top_majors(Some("  Engineering ")), ENGINEERING);
        assert_eq!(top_majors(Some("FINE ARTS AND COMMUNICATIONS")), FINE_ARTS);
    }

    #[test]
    fn aliases_share_a_list() {
        assert_eq!(top_majors(Some("Law")), top_majors(Some("J. Reuben Clark Law School")));
    }

    #[test]
    fn unknown_or_missing_college_uses_default() {
        assert_eq!(top_majors(Some("Astrology")), DEFAULT_TOP_MAJORS);
        assert_eq!(top_majors(None), DEFAULT_TOP_MAJORS);
    }
}
