use crate::types::report::{AssignmentReport, ComparisonReport};

pub fn assignment_to_markdown(report: &AssignmentReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Task Assignments ({})\n\n", report.strategy));
    output.push_str(&format!(
        "Volunteer satisfaction score: {}\n\n",
        report.satisfaction_score
    ));
    output.push_str(&format!(
        "- tasks: {}\n- volunteers: {}\n- fair share: {}\n\n",
        report.total_tasks, report.total_volunteers, report.fair_share
    ));

    output.push_str("## Volunteers\n\n");
    if report.volunteers.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for volunteer in &report.volunteers {
        output.push_str(&format!(
            "### {} (satisfaction {})\n\n",
            volunteer.name, volunteer.satisfaction
        ));
        for task in &volunteer.tasks {
            let choice = match task.rank {
                Some(rank) => format!("choice #{}", rank + 1),
                None => "not requested".to_string(),
            };
            output.push_str(&format!(
                "- Task #{}: {} [{}]{}\n",
                task.id,
                task.name,
                choice,
                if task.people_facing {
                    " (people-facing)"
                } else {
                    ""
                }
            ));
        }
        output.push('\n');
    }

    output
}

pub fn comparison_to_markdown(report: &ComparisonReport) -> String {
    let mut output = String::new();
    output.push_str("# Strategy Comparison\n\n");
    output.push_str(&format!(
        "- naive: {}\n- balanced: {}\n- improvement: {:+}\n\n",
        report.naive.satisfaction_score, report.balanced.satisfaction_score, report.improvement
    ));
    output.push_str(&assignment_to_markdown(&report.naive));
    output.push('\n');
    output.push_str(&assignment_to_markdown(&report.balanced));
    output
}
