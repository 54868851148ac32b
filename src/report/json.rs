use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Strategy;
    use crate::types::report::{AssignedTask, AssignmentReport, ComparisonReport, VolunteerReport};

    fn report(strategy: Strategy, satisfaction_score: i64) -> AssignmentReport {
        AssignmentReport {
            strategy,
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            total_tasks: 1,
            total_volunteers: 1,
            fair_share: 1,
            satisfaction_score,
            volunteers: vec![VolunteerReport {
                name: "Ana".to_string(),
                satisfaction: satisfaction_score,
                tasks: vec![AssignedTask {
                    id: 1,
                    name: "Greeter".to_string(),
                    description: "Door".to_string(),
                    people_facing: true,
                    rank: None,
                }],
            }],
        }
    }

    #[test]
    fn json_assignment_report_contains_score_and_strategy() {
        let rendered = to_json(&report(Strategy::Balanced, 4)).expect("json should serialize");
        assert!(rendered.contains("\"satisfaction_score\": 4"));
        assert!(rendered.contains("\"strategy\": \"balanced\""));
        assert!(rendered.contains("\"rank\": null"));
    }

    #[test]
    fn json_comparison_report_contains_improvement() {
        let comparison =
            ComparisonReport::new(report(Strategy::Naive, 2), report(Strategy::Balanced, 5));
        let rendered = to_json(&comparison).expect("json should serialize");
        assert!(rendered.contains("\"improvement\": 3"));
    }
}
