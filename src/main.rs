mod dataset;
mod diagnostics;
mod model;
mod render;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "api-report")]
#[command(about = "API test suite report generator", long_about = None)]
struct Cli {
    /// Output path for the generated HTML report.
    #[arg(
        short = 'o',
        long,
        default_value = "comprehensive_api_test_report.html"
    )]
    out: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) Assemble the report data (fixed test-run dataset, stamped now).
    let data = dataset::builtin_run();

    // 2) Tally pass/fail.
    let summary = model::summarize(&data.tests);
    if summary.total_tests == 0 {
        diagnostics::warn("report contains no test results");
    }

    // 3) Render HTML.
    let html = render::html::render_html_report(&data, &summary);

    // 4) Write it out (overwrites any previous report).
    std::fs::write(&cli.out, html)
        .with_context(|| diagnostics::error_message(format!("write report file {}", cli.out)))?;

    diagnostics::status(format!("HTML report generated: {}", cli.out));
    diagnostics::status(format!(
        "Test summary: {}/{} tests passed ({:.1}%)",
        summary.passed_tests, summary.total_tests, summary.success_rate
    ));

    Ok(())
}
