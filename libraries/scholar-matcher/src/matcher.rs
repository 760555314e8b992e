//! Student/opportunity matching

use scholar_core::{
    error::Result,
    types::{Match, Opportunity, User},
    SimilarityScorer, Storage,
};
use serde::Serialize;

use crate::fuzzy::PartialRatio;

/// Pairs must score strictly above this to be reported.
pub const MATCH_THRESHOLD: u8 = 60;

/// Outcome of one matching pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Matches in student order, then opportunity order
    pub matches: Vec<Match>,

    /// Number of student/opportunity pairs that were scored
    pub pairs_evaluated: usize,
}

/// Scans every student × opportunity pair and keeps those above
/// [`MATCH_THRESHOLD`]
pub struct Matcher<S = PartialRatio> {
    scorer: S,
}

impl Default for Matcher<PartialRatio> {
    fn default() -> Self {
        Self {
            scorer: PartialRatio,
        }
    }
}

impl Matcher<PartialRatio> {
    /// Create a matcher using partial-ratio scoring
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SimilarityScorer> Matcher<S> {
    /// Create a matcher with a custom scorer
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Match students against opportunities
    ///
    /// Non-students and students without interests are skipped. Both sides
    /// are lowercased before scoring. Output keeps input order; nothing is
    /// sorted by score.
    pub fn find_matches(&self, students: &[User], opportunities: &[Opportunity]) -> MatchReport {
        let descriptions: Vec<String> = opportunities
            .iter()
            .map(|opp| opp.description.to_lowercase())
            .collect();

        let mut report = MatchReport::default();

        for student in students.iter().filter(|u| u.is_student()) {
            let Some(interests) = student.interests() else {
                continue;
            };
            let interests_lower = interests.to_lowercase();

            for (opp, description) in opportunities.iter().zip(&descriptions) {
                let score = self.scorer.score(&interests_lower, description);
                report.pairs_evaluated += 1;

                if score > MATCH_THRESHOLD {
                    report.matches.push(Match {
                        student_id: student.id,
                        student_name: student.name.clone(),
                        interests: interests.to_string(),
                        opportunity_title: opp.title.clone(),
                        opportunity_description: opp.description.clone(),
                        match_score: score,
                    });
                }
            }
        }

        tracing::debug!(
            pairs = report.pairs_evaluated,
            matches = report.matches.len(),
            "Fuzzy match pass complete"
        );

        report
    }
}

/// Read a snapshot from `storage` and match it
///
/// Two bulk reads (students, opportunities), then a synchronous scan.
pub async fn run<St, S>(storage: &St, matcher: &Matcher<S>) -> Result<MatchReport>
where
    St: Storage + ?Sized,
    S: SimilarityScorer,
{
    let students = storage.get_students().await?;
    let opportunities = storage.get_all_opportunities().await?;

    Ok(matcher.find_matches(&students, &opportunities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_core::types::Role;

    fn user(id: i64, role: Role, interests: Option<&str>) -> User {
        User {
            id,
            name: format!("user-{id}"),
            email: format!("user-{id}@uni.edu"),
            role,
            interests: interests.map(str::to_string),
            created_at: String::new(),
        }
    }

    fn opportunity(id: i64, title: &str, description: &str) -> Opportunity {
        Opportunity {
            id,
            title: title.to_string(),
            description: description.to_string(),
            academic_id: 1,
            created_at: String::new(),
        }
    }

    /// Scores every pair with the same fixed value
    struct Fixed(u8);

    impl SimilarityScorer for Fixed {
        fn score(&self, _a: &str, _b: &str) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let students = vec![user(1, Role::Student, Some("anything"))];
        let opps = vec![opportunity(1, "T", "d")];

        let at = Matcher::with_scorer(Fixed(60)).find_matches(&students, &opps);
        assert!(at.matches.is_empty());
        assert_eq!(at.pairs_evaluated, 1);

        let above = Matcher::with_scorer(Fixed(61)).find_matches(&students, &opps);
        assert_eq!(above.matches.len(), 1);
        assert_eq!(above.matches[0].match_score, 61);
    }

    #[test]
    fn test_students_without_interests_are_skipped() {
        let students = vec![
            user(1, Role::Student, None),
            user(2, Role::Student, Some("")),
            user(3, Role::Student, Some("robotics")),
        ];
        let opps = vec![opportunity(1, "A", "a"), opportunity(2, "B", "b")];

        let report = Matcher::with_scorer(Fixed(100)).find_matches(&students, &opps);
        assert_eq!(report.pairs_evaluated, 2);
        assert!(report.matches.iter().all(|m| m.student_id == 3));
    }

    #[test]
    fn test_academics_are_ignored() {
        let students = vec![user(1, Role::Academic, Some("robotics"))];
        let opps = vec![opportunity(1, "A", "robotics")];

        let report = Matcher::new().find_matches(&students, &opps);
        assert_eq!(report, MatchReport::default());
    }

    #[test]
    fn test_output_order_follows_inputs() {
        let students = vec![
            user(7, Role::Student, Some("x")),
            user(3, Role::Student, Some("y")),
        ];
        let opps = vec![opportunity(9, "Second", "s"), opportunity(2, "First", "f")];

        let report = Matcher::with_scorer(Fixed(90)).find_matches(&students, &opps);
        let order: Vec<(i64, &str)> = report
            .matches
            .iter()
            .map(|m| (m.student_id, m.opportunity_title.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(7, "Second"), (7, "First"), (3, "Second"), (3, "First")]
        );
    }

    #[test]
    fn test_case_is_normalized_but_originals_are_reported() {
        let students = vec![user(1, Role::Student, Some("Machine Learning"))];
        let opps = vec![opportunity(
            1,
            "ML Lab",
            "Seeking students for MACHINE LEARNING research",
        )];

        let report = Matcher::new().find_matches(&students, &opps);
        assert_eq!(report.matches.len(), 1);

        let m = &report.matches[0];
        assert_eq!(m.match_score, 100);
        assert_eq!(m.interests, "Machine Learning");
        assert_eq!(
            m.opportunity_description,
            "Seeking students for MACHINE LEARNING research"
        );
    }

    #[test]
    fn test_empty_description_participates_but_is_filtered() {
        let students = vec![user(1, Role::Student, Some("chemistry"))];
        let opps = vec![opportunity(1, "Blank", "")];

        let report = Matcher::new().find_matches(&students, &opps);
        assert_eq!(report.pairs_evaluated, 1);
        assert!(report.matches.is_empty());
    }
}
