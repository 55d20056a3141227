//! `uxa analyze <url>` – run one analysis and print the report.

use anyhow::{Context, Result};
use std::fmt::{self, Write};
use uxa_core::config::UxaConfig;
use uxa_core::url_model::embed_url;
use uxa_core::{AnalysisReport, AnalysisSession, Notice};

pub async fn run_analyze(cfg: &UxaConfig, url: &str, json: bool) -> Result<()> {
    let session = AnalysisSession::from_config(cfg);
    if !json {
        println!("Analyzing {} ...", url.trim());
    }

    let report = match session.submit(url).await {
        Ok(report) => report,
        Err(err) => {
            let notice = err.notice();
            return Err(anyhow::Error::new(err).context(notice.to_string()));
        }
    };

    if json {
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    let embed = embed_url(&cfg.preview.embed_endpoint, url)
        .with_context(|| format!("invalid embed endpoint {}", cfg.preview.embed_endpoint))?;
    print!("{}", render_report(&report, &embed)?);
    println!("{}", Notice::analysis_complete());
    Ok(())
}

/// `{"notice": ..., "report": ...}` so JSON consumers also see the outcome.
pub(crate) fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "notice": Notice::analysis_complete(),
        "report": report,
    }))
}

pub(crate) fn render_report(report: &AnalysisReport, embed: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", report.file_name())?;
    writeln!(out, "Preview: {}", report.preview_reference())?;
    writeln!(out, "Embed:   {embed}")?;
    writeln!(out, "Overall score: {}/10", report.overall_score())?;
    writeln!(out)?;

    writeln!(out, "{:<20} {:>5}", "CATEGORY", "SCORE")?;
    for (category, score) in report.category_scores().iter() {
        writeln!(
            out,
            "{:<20} {:>5}  {}",
            category.title(),
            score.to_string(),
            bar(score.as_percent())
        )?;
    }

    writeln!(out, "\nStrengths:")?;
    for s in report.strengths() {
        writeln!(out, "  + {s}")?;
    }
    writeln!(out, "\nIssues:")?;
    for (i, issue) in report.issues().iter().enumerate() {
        writeln!(out, "  {}. {issue}", i + 1)?;
    }
    writeln!(out, "\nInsights:")?;
    for (topic, text) in report.insights().iter() {
        writeln!(out, "  {}: {text}", topic.title())?;
    }
    Ok(out)
}

/// Twenty-cell progress bar for a 0..=100 value.
fn bar(percent: f64) -> String {
    let filled = ((percent / 5.0).round() as usize).min(20);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use uxa_core::{AnalysisRequest, CannedCritique};

    fn report() -> AnalysisReport {
        let request = AnalysisRequest::new("https://figma.com/file/ABC123/My-Design")
            .validate()
            .unwrap();
        CannedCritique::new(Duration::ZERO, "https://www.figma.com/file/")
            .report_for(&request)
            .unwrap()
    }

    #[test]
    fn bar_scales_to_twenty_cells() {
        assert_eq!(bar(0.0), format!("[{}]", ".".repeat(20)));
        assert_eq!(bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(bar(45.0), format!("[{}{}]", "#".repeat(9), ".".repeat(11)));
    }

    #[test]
    fn render_lists_all_sections() {
        let text = render_report(&report(), "https://embed").unwrap();
        assert!(text.starts_with("E-commerce Dashboard Redesign\n"));
        assert!(text.contains("Preview: https://www.figma.com/file/ABC123"));
        assert!(text.contains("Overall score: 6.2/10"));
        assert!(text.contains("Visual Hierarchy"));
        assert!(text.contains("Accessibility"));
        assert!(text.contains("  8. Loading states"));
        assert!(text.contains("Brand Consistency: "));
    }

    #[test]
    fn json_output_carries_completion_notice() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&report()).unwrap()).unwrap();
        assert_eq!(json["notice"]["kind"], "analysisComplete");
        assert_eq!(json["notice"]["title"], "Analysis Complete");
        assert_eq!(json["report"]["fileName"], "E-commerce Dashboard Redesign");
        assert_eq!(json["report"]["categoryScores"].as_object().unwrap().len(), 6);
    }
}
