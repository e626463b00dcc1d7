use std::fmt;

use bbcheck_domain::design::{ProbeKind, boundary_values, partitions, threshold_probes};
use bbcheck_domain::{RangeTable, ThresholdGate};
use bbcheck_ports::observer::{CaseObserver, CaseOutcome, Technique, Verdict};
use bbcheck_shared_kernel::{ApplicationError, Result};
use chrono::Local;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dto::SuiteReport;

/// One black-box case: an input and the output the subject must return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub input: i64,
    pub expected: String,
    pub technique: Technique,
}

impl TestCase {
    pub fn new(name: impl Into<String>, input: i64, expected: impl Into<String>, technique: Technique) -> Self {
        Self { name: name.into(), input, expected: expected.into(), technique }
    }
}

/// Named collection of cases run against a subject through its public contract only.
#[derive(Debug, Clone, Default)]
pub struct BlackBoxSuite {
    name: String,
    cases: Vec<TestCase>,
}

impl BlackBoxSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), cases: Vec::new() }
    }

    /// Boundary probes followed by one representative per equivalence partition.
    pub fn for_table<C>(table: &RangeTable<C>) -> Self
    where
        C: Clone + PartialEq + fmt::Display,
    {
        let mut suite = Self::new(table.name());
        for probe in boundary_values(table) {
            suite.push(TestCase::new(
                case_name(table.name(), probe.kind.as_str(), probe.value),
                probe.value,
                probe.expected.to_string(),
                Technique::Boundary,
            ));
        }
        for part in partitions(table) {
            let class = if part.valid { "valid" } else { "invalid" };
            suite.push(TestCase::new(
                case_name(table.name(), &format!("partition_{class}"), part.representative),
                part.representative,
                part.expected.to_string(),
                Technique::Partition,
            ));
        }
        suite
    }

    /// Probes around the gate threshold; expected outputs are `"on"` / `"off"`.
    pub fn for_threshold(gate: &ThresholdGate<i64>) -> Self {
        let name = format!("threshold_{}", value_tag(gate.threshold()));
        let mut suite = Self::new(name.clone());
        for probe in threshold_probes(gate) {
            let technique = match probe.kind {
                ProbeKind::Extreme => Technique::Partition,
                _ => Technique::Boundary,
            };
            suite.push(TestCase::new(
                case_name(&name, probe.kind.as_str(), probe.value),
                probe.value,
                probe.expected.to_string(),
                technique,
            ));
        }
        suite
    }

    /// Append hand-written `(input, expected)` pairs.
    #[must_use]
    pub fn with_examples<S: AsRef<str>>(mut self, examples: &[(i64, S)]) -> Self {
        for (input, expected) in examples {
            let name = case_name(&self.name, "example", *input);
            let expected: &str = expected.as_ref();
            self.push(TestCase::new(name, *input, expected, Technique::Example));
        }
        self
    }

    pub fn push(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    pub fn truncate(&mut self, max_cases: usize) {
        self.cases.truncate(max_cases);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every case against `subject`, calling it twice per input.
    ///
    /// A case passes when both calls return the expected output. Disagreeing
    /// calls yield [`Verdict::NonDeterministic`] regardless of the expected value.
    ///
    /// # Errors
    /// Returns [`ApplicationError::EmptySuite`] for a suite without cases, or the
    /// observer's error if it fails.
    pub fn run<F>(&self, subject: F, observer: Option<&dyn CaseObserver>) -> Result<SuiteReport>
    where
        F: Fn(i64) -> String,
    {
        if self.cases.is_empty() {
            return Err(ApplicationError::EmptySuite { suite: self.name.clone() }.into());
        }
        info!("running suite '{}' ({} cases)", self.name, self.cases.len());

        let mut outcomes = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let first = subject(case.input);
            let second = subject(case.input);
            let verdict = if first != second {
                Verdict::NonDeterministic
            } else if first == case.expected {
                Verdict::Passed
            } else {
                Verdict::Failed
            };
            debug!("{} input={} expected={} actual={first} -> {verdict}", case.name, case.input, case.expected);

            let outcome = CaseOutcome {
                name: case.name.clone(),
                input: case.input,
                expected: case.expected.clone(),
                actual: first,
                technique: case.technique,
                verdict,
            };
            if let Some(observer) = observer {
                observer.on_case(&outcome)?;
            }
            outcomes.push(outcome);
        }

        let passed = outcomes.iter().filter(|o| o.verdict.is_pass()).count();
        let failed = outcomes.len() - passed;
        if let Some(observer) = observer {
            observer.on_complete(passed, failed)?;
        }
        info!("suite '{}': {passed} passed, {failed} failed", self.name);

        Ok(SuiteReport {
            suite: self.name.clone(),
            generated_at: Local::now(),
            total: outcomes.len(),
            passed,
            failed,
            outcomes,
        })
    }
}

fn case_name(prefix: &str, kind: &str, value: i64) -> String {
    format!("{prefix}__{kind}_{}", value_tag(value))
}

// Test names cannot carry a minus sign.
fn value_tag(value: i64) -> String {
    if value < 0 { format!("neg{}", value.unsigned_abs()) } else { value.to_string() }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Mutex;

    use bbcheck_domain::classification::age_table;
    use bbcheck_domain::{GateState, LED_THRESHOLD, classify, threshold_state};

    use super::*;

    #[derive(Default)]
    struct Collecting {
        names: Mutex<Vec<String>>,
        totals: Mutex<Option<(usize, usize)>>,
    }

    impl CaseObserver for Collecting {
        fn on_case(&self, outcome: &CaseOutcome) -> Result<()> {
            self.names.lock().unwrap().push(outcome.name.clone());
            Ok(())
        }

        fn on_complete(&self, passed: usize, failed: usize) -> Result<()> {
            *self.totals.lock().unwrap() = Some((passed, failed));
            Ok(())
        }
    }

    #[test]
    fn age_suite_passes_against_classifier() {
        let suite = BlackBoxSuite::for_table(&age_table());
        let report = suite.run(|v| classify(v).to_string(), None).unwrap();
        assert!(report.is_success(), "failures: {:?}", report.failures().collect::<Vec<_>>());
        assert_eq!(report.total, suite.len());
        assert_eq!(report.suite, "age");
    }

    #[test]
    fn wrong_boundary_is_caught() {
        // Off-by-one: teenagers start at 14.
        let buggy = |v: i64| match v {
            0..=13 => "Child".to_string(),
            14..=19 => "Teenager".to_string(),
            _ => classify(v).to_string(),
        };
        let report = BlackBoxSuite::for_table(&age_table()).run(buggy, None).unwrap();
        let failed: Vec<i64> = report.failures().map(|o| o.input).collect();
        assert_eq!(failed, vec![13]);
    }

    #[test]
    fn flaky_subject_is_flagged() {
        let calls = Cell::new(0_u32);
        let flaky = |v: i64| {
            calls.set(calls.get() + 1);
            if calls.get() % 2 == 0 { "Invalid".to_string() } else { classify(v).to_string() }
        };
        let suite = BlackBoxSuite::new("flaky").with_examples(&[(5, "Child")]);
        let report = suite.run(flaky, None).unwrap();
        assert_eq!(report.outcomes[0].verdict, Verdict::NonDeterministic);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn threshold_suite_matches_led_gate() {
        let suite = BlackBoxSuite::for_threshold(&ThresholdGate::new(LED_THRESHOLD));
        assert_eq!(suite.name(), "threshold_30");
        let report = suite
            .run(|v| GateState::from(threshold_state(v)).to_string(), None)
            .unwrap();
        assert!(report.is_success());
        assert!(suite.cases().iter().any(|c| c.input == 30 && c.expected == "off"));
        assert!(suite.cases().iter().any(|c| c.input == 31 && c.expected == "on"));
    }

    #[test]
    fn observer_sees_every_case() {
        let observer = Collecting::default();
        let suite = BlackBoxSuite::new("age").with_examples(&[(0, "Child"), (121, "Invalid"), (13, "Adult")]);
        let report = suite.run(|v| classify(v).to_string(), Some(&observer)).unwrap();
        assert_eq!(observer.names.lock().unwrap().len(), 3);
        assert_eq!(*observer.totals.lock().unwrap(), Some((2, 1)));
        assert_eq!(report.passed, 2);
    }

    #[test]
    fn empty_suite_is_an_error() {
        let err = BlackBoxSuite::new("nothing").run(|_| String::new(), None).unwrap_err();
        assert!(err.to_string().contains("nothing"));
    }

    #[test]
    fn case_names_encode_negative_values() {
        let suite = BlackBoxSuite::for_table(&age_table());
        assert!(suite.cases().iter().any(|c| c.name == "age__just_below_neg1"));
        assert!(suite.cases().iter().any(|c| c.name == "age__lower_0"));
    }

    #[test]
    fn truncate_limits_cases() {
        let mut suite = BlackBoxSuite::for_table(&age_table());
        suite.truncate(3);
        assert_eq!(suite.len(), 3);
    }
}
