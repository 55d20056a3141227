//! Placeholder generator returning a fixed critique after a simulated delay.

use super::CritiqueGenerator;
use crate::error::AnalysisError;
use crate::report::{AnalysisReport, CategoryScores, Insights, Score, ScoreOutOfRange};
use crate::request::ValidatedRequest;
use crate::url_model::preview_reference;
use async_trait::async_trait;
use std::time::Duration;

const FILE_NAME: &str = "E-commerce Dashboard Redesign";

const OVERALL: f64 = 6.2;

// visualHierarchy, colorScheme, typography, spacing, components, accessibility
const CATEGORY_SCORES: [f64; 6] = [4.5, 7.8, 5.2, 6.1, 7.0, 3.8];

const STRENGTHS: [&str; 4] = [
    "Color palette shows decent contrast ratios and maintains brand consistency",
    "Component library structure demonstrates systematic thinking",
    "Grid system implementation is mathematically sound",
    "Visual density management prevents overwhelming the user",
];

const ISSUES: [&str; 8] = [
    "Visual hierarchy is fundamentally broken - users won't know where to look first. Primary actions are buried among secondary elements",
    "Typography scale lacks mathematical precision. Line heights are inconsistent and text hierarchy confuses rather than guides",
    "Accessibility is severely compromised - color contrast fails WCAG AA standards in multiple areas. Screen reader users will struggle",
    "Information architecture is cluttered and illogical. Related functions are scattered across different sections",
    "White space usage is amateur - cramped sections alternate with wasteful empty areas",
    "Interactive elements lack clear affordances. Users won't understand what's clickable",
    "Mobile responsiveness appears to be an afterthought rather than mobile-first design",
    "Loading states and error handling are completely absent from the design system",
];

const DESIGN_TRENDS: &str = "Following outdated design patterns from 2019. Lacks modern micro-interactions and progressive disclosure techniques";
const USER_EXPERIENCE: &str = "UX flow has critical gaps. Task completion rates will suffer due to unclear navigation paths and cognitive overload";
const BRAND_CONSISTENCY: &str = "Brand application is superficial - colors and logos are present but brand personality is completely absent from interaction design";

/// Content-static critique: every request gets the same body, only the
/// preview reference varies.
#[derive(Debug, Clone)]
pub struct CannedCritique {
    delay: Duration,
    preview_base: String,
}

impl CannedCritique {
    pub fn new(delay: Duration, preview_base: impl Into<String>) -> Self {
        Self {
            delay,
            preview_base: preview_base.into(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Builds the report without waiting.
    pub fn report_for(&self, request: &ValidatedRequest) -> Result<AnalysisReport, ScoreOutOfRange> {
        let [vh, cs, ty, sp, co, ac] = CATEGORY_SCORES;
        let category_scores = CategoryScores {
            visual_hierarchy: Score::new(vh)?,
            color_scheme: Score::new(cs)?,
            typography: Score::new(ty)?,
            spacing: Score::new(sp)?,
            components: Score::new(co)?,
            accessibility: Score::new(ac)?,
        };
        let insights = Insights {
            design_trends: DESIGN_TRENDS.to_string(),
            user_experience: USER_EXPERIENCE.to_string(),
            brand_consistency: BRAND_CONSISTENCY.to_string(),
        };
        Ok(AnalysisReport::new(
            FILE_NAME,
            preview_reference(&self.preview_base, request.file_id(), request.raw_url()),
            Score::new(OVERALL)?,
            category_scores,
            STRENGTHS.iter().map(|s| s.to_string()).collect(),
            ISSUES.iter().map(|s| s.to_string()).collect(),
            insights,
        ))
    }
}

#[async_trait]
impl CritiqueGenerator for CannedCritique {
    async fn generate(&self, request: &ValidatedRequest) -> Result<AnalysisReport, AnalysisError> {
        tracing::debug!(delay = ?self.delay, "simulating analysis");
        tokio::time::sleep(self.delay).await;
        self.report_for(request)
            .map_err(|e| AnalysisError::GenerationFailure(e.to_string()))
    }
}
