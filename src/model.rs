//! Report data model: test-run records plus the derived pass/fail summary.

/// Outcome of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    /// Display label used in the status badge.
    pub fn label(self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
        }
    }

    /// CSS class applied to the card header and badge.
    pub fn css_class(self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
        }
    }
}

/// One row of the report: a single API check and its outcome.
///
/// Immutable once constructed; a test has no identity beyond its position
/// in the run sequence.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    /// "METHOD path", e.g. "POST /Services/innovologin".
    pub endpoint: String,
    pub status: TestStatus,
    pub response_code: u16,
    /// Pre-formatted by the harness that timed the call.
    pub response_time: String,
    pub request_body: String,
    pub response: String,
    pub notes: String,
}

/// One entry of the known-issues panel.
#[derive(Debug, Clone)]
pub struct KnownIssue {
    pub title: String,
    pub detail: String,
}

/// Run-level metadata shown in the report header and footer.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub title: String,
    pub subtitle: String,
    /// "%Y-%m-%d %H:%M:%S", captured once when the run data is assembled.
    pub test_date: String,
    pub database: String,
    pub base_url: String,
}

/// Everything the renderer needs, passed in as a parameter so the report
/// builder itself holds no state.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub meta: ReportMeta,
    pub known_issues: Vec<KnownIssue>,
    pub tests: Vec<TestResult>,
}

/// Counters derived from a test sequence. Computed once per run, never stored.
#[derive(Debug, Clone, Copy)]
pub struct ReportSummary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Percent, rounded to one decimal place. 0.0 for an empty run.
    pub success_rate: f64,
}

/// Tally pass/fail over a test sequence in a single pass.
pub fn summarize(tests: &[TestResult]) -> ReportSummary {
    let total_tests = tests.len();
    let passed_tests = tests
        .iter()
        .filter(|t| t.status == TestStatus::Pass)
        .count();
    let failed_tests = total_tests - passed_tests;

    let success_rate = if total_tests == 0 {
        0.0
    } else {
        round1(passed_tests as f64 / total_tests as f64 * 100.0)
    };

    ReportSummary {
        total_tests,
        passed_tests,
        failed_tests,
        success_rate,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
