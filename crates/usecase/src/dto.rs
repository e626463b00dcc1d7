use bbcheck_ports::observer::CaseOutcome;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Result of running a [`BlackBoxSuite`](crate::BlackBoxSuite).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub generated_at: DateTime<Local>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.verdict.is_pass())
    }
}

#[cfg(test)]
mod tests {
    use bbcheck_domain::classify;

    use crate::BlackBoxSuite;

    #[test]
    fn report_serializes_verdicts_in_snake_case() {
        let report = BlackBoxSuite::new("age")
            .with_examples(&[(13, "Child")])
            .run(|v| classify(v).to_string(), None)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failed"], 1);
        assert_eq!(json["outcomes"][0]["verdict"], "failed");
        assert_eq!(json["outcomes"][0]["actual"], "Teenager");
        assert_eq!(report.failures().count(), 1);
    }
}
