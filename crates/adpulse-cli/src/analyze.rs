use adpulse_analysis::{AnalyzerConfig, CopyAnalyzer};
use adpulse_core::AppConfig;

/// Audit a piece of ad copy and print the structured result.
///
/// Without an `OPENAI_API_KEY` the analyzer serves its static fallback, so
/// the command still produces output offline.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    text: &str,
    objective: &str,
) -> anyhow::Result<()> {
    let analyzer = CopyAnalyzer::new(AnalyzerConfig::from_app_config(config))?;
    let result = analyzer.analyze(text, objective).await;

    println!("score: {:.1}", result.score);
    print_section("hooks", &result.hooks);
    print_section("ctas", &result.ctas);
    print_section("improvements", &result.improvements);
    print_section("winning patterns", &result.winning_patterns);

    Ok(())
}

fn print_section(label: &str, items: &[String]) {
    println!("{label}:");
    if items.is_empty() {
        println!("  (none)");
        return;
    }
    for item in items {
        println!("  - {item}");
    }
}
