//! Critique report model handed to the presentation layer.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("score {0} is outside 0..=10")]
pub struct ScoreOutOfRange(pub f64);

/// A score in `0.0..=10.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Result<Self, ScoreOutOfRange> {
        if value.is_finite() && (0.0..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Progress-bar value in `0.0..=100.0`.
    pub fn as_percent(self) -> f64 {
        self.0 * 10.0
    }
}

impl TryFrom<f64> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Scored design category. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    VisualHierarchy,
    ColorScheme,
    Typography,
    Spacing,
    Components,
    Accessibility,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::VisualHierarchy,
        Category::ColorScheme,
        Category::Typography,
        Category::Spacing,
        Category::Components,
        Category::Accessibility,
    ];

    /// Serialized key.
    pub fn key(self) -> &'static str {
        match self {
            Category::VisualHierarchy => "visualHierarchy",
            Category::ColorScheme => "colorScheme",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::Components => "components",
            Category::Accessibility => "accessibility",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::VisualHierarchy => "Visual Hierarchy",
            Category::ColorScheme => "Color Scheme",
            Category::Typography => "Typography",
            Category::Spacing => "Spacing",
            Category::Components => "Components",
            Category::Accessibility => "Accessibility",
        }
    }
}

/// One score per [`Category`]; every key is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub visual_hierarchy: Score,
    pub color_scheme: Score,
    pub typography: Score,
    pub spacing: Score,
    pub components: Score,
    pub accessibility: Score,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::VisualHierarchy => self.visual_hierarchy,
            Category::ColorScheme => self.color_scheme,
            Category::Typography => self.typography,
            Category::Spacing => self.spacing,
            Category::Components => self.components,
            Category::Accessibility => self.accessibility,
        }
    }

    /// Scores in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Narrative insight topic. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightTopic {
    DesignTrends,
    UserExperience,
    BrandConsistency,
}

impl InsightTopic {
    pub const ALL: [InsightTopic; 3] = [
        InsightTopic::DesignTrends,
        InsightTopic::UserExperience,
        InsightTopic::BrandConsistency,
    ];

    pub fn key(self) -> &'static str {
        match self {
            InsightTopic::DesignTrends => "designTrends",
            InsightTopic::UserExperience => "userExperience",
            InsightTopic::BrandConsistency => "brandConsistency",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            InsightTopic::DesignTrends => "Design Trends",
            InsightTopic::UserExperience => "User Experience",
            InsightTopic::BrandConsistency => "Brand Consistency",
        }
    }
}

/// One narrative per [`InsightTopic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub design_trends: String,
    pub user_experience: String,
    pub brand_consistency: String,
}

impl Insights {
    pub fn get(&self, topic: InsightTopic) -> &str {
        match topic {
            InsightTopic::DesignTrends => &self.design_trends,
            InsightTopic::UserExperience => &self.user_experience,
            InsightTopic::BrandConsistency => &self.brand_consistency,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (InsightTopic, &str)> + '_ {
        InsightTopic::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

/// Complete critique for one analysis request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    file_name: String,
    preview_reference: String,
    overall_score: Score,
    category_scores: CategoryScores,
    strengths: Vec<String>,
    issues: Vec<String>,
    insights: Insights,
}

impl AnalysisReport {
    pub fn new(
        file_name: impl Into<String>,
        preview_reference: impl Into<String>,
        overall_score: Score,
        category_scores: CategoryScores,
        strengths: Vec<String>,
        issues: Vec<String>,
        insights: Insights,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            preview_reference: preview_reference.into(),
            overall_score,
            category_scores,
            strengths,
            issues,
            insights,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn preview_reference(&self) -> &str {
        &self.preview_reference
    }

    pub fn overall_score(&self) -> Score {
        self.overall_score
    }

    pub fn category_scores(&self) -> &CategoryScores {
        &self.category_scores
    }

    /// Observations in generation order.
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    /// Observations in generation order; order carries no ranking.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: f64) -> Score {
        Score::new(v).unwrap()
    }

    fn scores() -> CategoryScores {
        CategoryScores {
            visual_hierarchy: s(1.0),
            color_scheme: s(2.0),
            typography: s(3.0),
            spacing: s(4.0),
            components: s(5.0),
            accessibility: s(6.0),
        }
    }

    #[test]
    fn score_bounds() {
        assert!(Score::new(0.0).is_ok());
        assert!(Score::new(10.0).is_ok());
        assert_eq!(Score::new(10.01), Err(ScoreOutOfRange(10.01)));
        assert!(Score::new(-0.1).is_err());
        assert!(Score::new(f64::NAN).is_err());
        assert!(Score::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn score_display_and_percent() {
        assert_eq!(s(6.2).to_string(), "6.2");
        assert_eq!(s(7.0).to_string(), "7.0");
        assert!((s(4.5).as_percent() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn category_scores_iterate_in_fixed_order() {
        let keys: Vec<&str> = scores().iter().map(|(c, _)| c.key()).collect();
        assert_eq!(
            keys,
            [
                "visualHierarchy",
                "colorScheme",
                "typography",
                "spacing",
                "components",
                "accessibility"
            ]
        );
        assert_eq!(scores().get(Category::Spacing), s(4.0));
    }

    #[test]
    fn serialized_keys_match_category_keys() {
        let json = serde_json::to_value(scores()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), Category::ALL.len());
        for c in Category::ALL {
            assert!(obj.contains_key(c.key()), "missing {}", c.key());
        }
    }

    #[test]
    fn insights_lookup() {
        let insights = Insights {
            design_trends: "a".into(),
            user_experience: "b".into(),
            brand_consistency: "c".into(),
        };
        assert_eq!(insights.get(InsightTopic::UserExperience), "b");
        let json = serde_json::to_value(&insights).unwrap();
        for t in InsightTopic::ALL {
            assert_eq!(json[t.key()], insights.get(t));
        }
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = AnalysisReport::new(
            "Name",
            "https://www.figma.com/file/abc",
            s(5.0),
            scores(),
            vec!["good".into()],
            vec!["bad".into()],
            Insights {
                design_trends: "a".into(),
                user_experience: "b".into(),
                brand_consistency: "c".into(),
            },
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fileName"], "Name");
        assert_eq!(json["previewReference"], "https://www.figma.com/file/abc");
        assert_eq!(json["overallScore"], 5.0);
        assert_eq!(json["categoryScores"]["visualHierarchy"], 1.0);
        assert_eq!(json["issues"][0], "bad");
    }
}
