use crate::model::{ReportData, ReportSummary, TestResult};

/// Response bodies longer than this are cut for display.
const RESPONSE_DISPLAY_LIMIT: usize = 500;

/// Render a self-contained HTML report.
///
/// Important: the document shell uses placeholder substitution instead of
/// `format!()` because the embedded CSS is full of `{}` blocks, which would
/// conflict with Rust formatting.
pub fn render_html_report(data: &ReportData, summary: &ReportSummary) -> String {
    let mut cards = String::new();
    for test in &data.tests {
        cards.push_str(&render_test_card(test));
    }

    TEMPLATE
        .replace("__TITLE__", &escape_html(&data.meta.title))
        .replace("__SUBTITLE__", &escape_html(&data.meta.subtitle))
        .replace("__TEST_DATE__", &escape_html(&data.meta.test_date))
        .replace("__DATABASE__", &escape_html(&data.meta.database))
        .replace("__BASE_URL__", &escape_html(&data.meta.base_url))
        .replace("__TOTAL__", &summary.total_tests.to_string())
        .replace("__PASSED__", &summary.passed_tests.to_string())
        .replace("__FAILED__", &summary.failed_tests.to_string())
        .replace("__RATE__", &format!("{:.1}", summary.success_rate))
        .replace("__ISSUES__", &render_issues_panel(data))
        .replace("__TESTS__", &cards)
}

/// One detail card per test, tagged with the pass/fail class.
fn render_test_card(test: &TestResult) -> String {
    let status_class = test.status.css_class();
    format!(
        r#"
            <div class="test-item">
                <div class="test-header {status_class}">
                    <span>{name}</span>
                    <span class="status-badge {status_class}">{status}</span>
                </div>
                <div class="test-details">
                    <p><strong>Endpoint:</strong> {endpoint}</p>
                    <p><strong>Response Code:</strong> {response_code}</p>
                    <p><strong>Response Time:</strong> {response_time}</p>
                    <div class="request-body">
                        <strong>Request Body:</strong><br>
                        <pre>{request_body}</pre>
                    </div>
                    <div class="response-body">
                        <strong>Response:</strong><br>
                        <pre>{response}</pre>
                    </div>
                    <p><strong>Notes:</strong> {notes}</p>
                </div>
            </div>
"#,
        status_class = status_class,
        name = escape_html(&test.name),
        status = test.status.label(),
        endpoint = escape_html(&test.endpoint),
        response_code = test.response_code,
        response_time = escape_html(&test.response_time),
        request_body = escape_html(&test.request_body),
        response = escape_html(&truncate_body(&test.response, RESPONSE_DISPLAY_LIMIT)),
        notes = escape_html(&test.notes),
    )
}

/// The amber known-issues panel. Omitted entirely when there are no issues.
fn render_issues_panel(data: &ReportData) -> String {
    if data.known_issues.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for issue in &data.known_issues {
        items.push_str(&format!(
            "                    <li><strong>{}:</strong> {}</li>\n",
            escape_html(&issue.title),
            escape_html(&issue.detail)
        ));
    }

    format!(
        r#"<div class="issues">
                <h3>🚨 Known Issues</h3>
                <ul>
{items}                </ul>
            </div>"#
    )
}

/// Cut a body for display. Counts characters, not bytes, and appends a
/// marker only when something was actually dropped.
fn truncate_body(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let head: String = s.chars().take(limit).collect();
    format!("{head}...")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TITLE__</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1400px;
            margin: 0 auto;
            background: white;
            border-radius: 10px;
            box-shadow: 0 0 20px rgba(0,0,0,0.1);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            text-align: center;
        }
        .header h1 {
            margin: 0;
            font-size: 2.5em;
            font-weight: 300;
        }
        .header p {
            margin: 10px 0 0 0;
            font-size: 1.2em;
            opacity: 0.9;
        }
        .summary {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            padding: 30px;
            background: #f8f9fa;
        }
        .summary-card {
            background: white;
            padding: 20px;
            border-radius: 8px;
            text-align: center;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .summary-card h3 {
            margin: 0 0 10px 0;
            color: #333;
        }
        .summary-card .number {
            font-size: 2.5em;
            font-weight: bold;
            margin: 10px 0;
        }
        .summary-card.passed .number {
            color: #28a745;
        }
        .summary-card.failed .number {
            color: #dc3545;
        }
        .summary-card.total .number {
            color: #007bff;
        }
        .test-results {
            padding: 30px;
        }
        .test-item {
            margin-bottom: 30px;
            border: 1px solid #e9ecef;
            border-radius: 8px;
            overflow: hidden;
        }
        .test-header {
            padding: 15px 20px;
            display: flex;
            justify-content: space-between;
            align-items: center;
            font-weight: bold;
        }
        .test-header.pass {
            background: #d4edda;
            color: #155724;
        }
        .test-header.fail {
            background: #f8d7da;
            color: #721c24;
        }
        .test-details {
            padding: 20px;
            background: #f8f9fa;
        }
        .test-details p {
            margin: 8px 0;
            font-family: 'Courier New', monospace;
            font-size: 0.9em;
            word-break: break-all;
        }
        .test-details .request-body {
            background: #e3f2fd;
            padding: 10px;
            border-radius: 4px;
            margin: 10px 0;
        }
        .test-details .response-body {
            background: #f3e5f5;
            padding: 10px;
            border-radius: 4px;
            margin: 10px 0;
        }
        .status-badge {
            padding: 4px 12px;
            border-radius: 20px;
            font-size: 0.8em;
            font-weight: bold;
        }
        .status-badge.pass {
            background: #28a745;
            color: white;
        }
        .status-badge.fail {
            background: #dc3545;
            color: white;
        }
        .issues {
            background: #fff3cd;
            border: 1px solid #ffeaa7;
            border-radius: 8px;
            padding: 20px;
            margin: 20px 30px;
        }
        .issues h3 {
            color: #856404;
            margin-top: 0;
        }
        .issues ul {
            color: #856404;
            margin: 10px 0;
        }
        .footer {
            background: #343a40;
            color: white;
            padding: 20px;
            text-align: center;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>__TITLE__</h1>
            <p>__SUBTITLE__</p>
            <p>Test Date: __TEST_DATE__ | Database: __DATABASE__</p>
        </div>

        <div class="summary">
            <div class="summary-card total">
                <h3>Total Tests</h3>
                <div class="number">__TOTAL__</div>
            </div>
            <div class="summary-card passed">
                <h3>Passed</h3>
                <div class="number">__PASSED__</div>
            </div>
            <div class="summary-card failed">
                <h3>Failed</h3>
                <div class="number">__FAILED__</div>
            </div>
            <div class="summary-card">
                <h3>Success Rate</h3>
                <div class="number">__RATE__%</div>
            </div>
        </div>

        __ISSUES__

        <div class="test-results">
            <h2>Detailed Test Results</h2>
__TESTS__
        </div>

        <div class="footer">
            <p>Generated by api-report | Database: __DATABASE__ | Base URL: __BASE_URL__</p>
        </div>
    </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{summarize, KnownIssue, ReportMeta, TestStatus};

    fn meta() -> ReportMeta {
        ReportMeta {
            title: "API Test Report".to_string(),
            subtitle: "Nightly run".to_string(),
            test_date: "2025-01-01 00:00:00".to_string(),
            database: "MySQL (test)".to_string(),
            base_url: "http://localhost:8500".to_string(),
        }
    }

    fn result(name: &str, status: TestStatus, response: &str) -> TestResult {
        TestResult {
            name: name.to_string(),
            endpoint: "GET /health".to_string(),
            status,
            response_code: 200,
            response_time: "0.001s".to_string(),
            request_body: "N/A (GET request)".to_string(),
            response: response.to_string(),
            notes: "ok".to_string(),
        }
    }

    fn report(tests: Vec<TestResult>) -> ReportData {
        ReportData {
            meta: meta(),
            known_issues: vec![KnownIssue {
                title: "Flaky endpoint".to_string(),
                detail: "intermittent 502 from upstream".to_string(),
            }],
            tests,
        }
    }

    fn render(data: &ReportData) -> String {
        render_html_report(data, &summarize(&data.tests))
    }

    #[test]
    fn one_card_per_test_in_input_order() {
        let data = report(vec![
            result("alpha", TestStatus::Pass, "{}"),
            result("beta", TestStatus::Fail, "{}"),
            result("gamma", TestStatus::Pass, "{}"),
        ]);
        let html = render(&data);

        assert_eq!(html.matches(r#"<div class="test-item">"#).count(), 3);

        let a = html.find("<span>alpha</span>").unwrap();
        let b = html.find("<span>beta</span>").unwrap();
        let g = html.find("<span>gamma</span>").unwrap();
        assert!(a < b && b < g);
    }

    #[test]
    fn cards_carry_pass_fail_classes() {
        let data = report(vec![
            result("good", TestStatus::Pass, "{}"),
            result("bad", TestStatus::Fail, "{}"),
        ]);
        let html = render(&data);

        assert_eq!(html.matches(r#"<div class="test-header pass">"#).count(), 1);
        assert_eq!(html.matches(r#"<div class="test-header fail">"#).count(), 1);
        assert!(html.contains(r#"<span class="status-badge pass">PASS</span>"#));
        assert!(html.contains(r#"<span class="status-badge fail">FAIL</span>"#));
    }

    #[test]
    fn summary_counts_appear() {
        let data = report(vec![
            result("a", TestStatus::Pass, "{}"),
            result("b", TestStatus::Pass, "{}"),
            result("c", TestStatus::Fail, "{}"),
            result("d", TestStatus::Fail, "{}"),
        ]);
        let html = render(&data);

        assert!(html.contains(r#"<div class="number">4</div>"#));
        assert!(html.contains(r#"<div class="number">2</div>"#));
        assert!(html.contains(r#"<div class="number">50.0%</div>"#));
    }

    #[test]
    fn long_response_is_cut_at_limit_with_marker() {
        let long = "x".repeat(RESPONSE_DISPLAY_LIMIT + 100);
        let data = report(vec![result("big", TestStatus::Pass, &long)]);
        let html = render(&data);

        let expected = format!("{}...", "x".repeat(RESPONSE_DISPLAY_LIMIT));
        assert!(html.contains(&expected));
        // Exactly the limit, not one character more.
        assert!(!html.contains(&"x".repeat(RESPONSE_DISPLAY_LIMIT + 1)));
    }

    #[test]
    fn short_response_renders_verbatim_without_marker() {
        let data = report(vec![result("small", TestStatus::Pass, "short body")]);
        let html = render(&data);

        assert!(html.contains("<pre>short body</pre>"));
        assert!(!html.contains("short body..."));
    }

    #[test]
    fn response_exactly_at_limit_is_not_marked() {
        let exact = "y".repeat(RESPONSE_DISPLAY_LIMIT);
        let data = report(vec![result("edge", TestStatus::Pass, &exact)]);
        let html = render(&data);

        assert!(html.contains(&format!("<pre>{exact}</pre>")));
        assert!(!html.contains(&format!("{exact}...")));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Multi-byte characters must not be split.
        let wide = "é".repeat(RESPONSE_DISPLAY_LIMIT + 1);
        let cut = truncate_body(&wide, RESPONSE_DISPLAY_LIMIT);
        assert_eq!(cut.chars().count(), RESPONSE_DISPLAY_LIMIT + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn markup_in_values_is_escaped() {
        let mut bad = result("xss", TestStatus::Pass, r#"<script>alert("hi")</script>"#);
        bad.name = "a <b> & 'c'".to_string();
        let data = report(vec![bad]);
        let html = render(&data);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"));
        assert!(html.contains("a &lt;b&gt; &amp; &#39;c&#39;"));
    }

    #[test]
    fn issues_panel_lists_every_issue_and_hides_when_empty() {
        let mut data = report(vec![result("a", TestStatus::Pass, "{}")]);
        let html = render(&data);
        assert!(html.contains("Known Issues"));
        assert!(html.contains("<li><strong>Flaky endpoint:</strong> intermittent 502 from upstream</li>"));

        data.known_issues.clear();
        let html = render(&data);
        assert!(!html.contains("Known Issues"));
    }

    #[test]
    fn rendering_is_deterministic_for_fixed_data() {
        let data = report(vec![
            result("a", TestStatus::Pass, "{}"),
            result("b", TestStatus::Fail, "{}"),
        ]);
        assert_eq!(render(&data), render(&data));
    }

    #[test]
    fn written_report_round_trips_byte_identical() {
        let data = report(vec![result("a", TestStatus::Pass, "{}")]);
        let html = render(&data);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        std::fs::write(&path, &html).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
    }

    #[test]
    fn document_shell_is_complete() {
        let data = report(vec![result("a", TestStatus::Pass, "{}")]);
        let html = render(&data);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>API Test Report</title>"));
        assert!(html.contains("Test Date: 2025-01-01 00:00:00 | Database: MySQL (test)"));
        assert!(html.trim_end().ends_with("</html>"));
        // No placeholder left behind.
        assert!(!html.contains("__"));
    }
}
