//! Job catalog — the fixed category → job-title mapping plus the display
//! metadata the recruiter UI shows next to each category.

use serde::Serialize;

use crate::classification::rules::{conditions_for, FitCategory};
use crate::errors::AppError;

/// Ordered job titles for one category. Order is part of the contract: it is
/// the order recommendations are presented in.
pub fn jobs_for(category: FitCategory) -> &'static [&'static str] {
    match category {
        FitCategory::AnalyticalCreative => &[
            "Data Scientist",
            "Data Analyst",
            "UI/UX Designer",
            "UX Researcher",
            "Product Manager",
            "Content Strategist",
        ],
        FitCategory::TechnicalStructured => &[
            "Software Engineer",
            "DevOps Engineer",
            "QA Engineer",
            "Security Analyst",
            "Tax Officer",
            "Finance Analyst",
        ],
        FitCategory::InterpersonalOutgoing => &[
            "Account Executive",
            "Sales Development Representative",
            "Public Relations Specialist",
            "Partner Acquisition",
            "Event Marketing",
        ],
        FitCategory::PeopleSupport => &[
            "HR Manager",
            "Customer Success",
            "Customer Support",
            "People and Culture",
        ],
        FitCategory::ContentWriting => &["Content Writer", "Copywriter", "UX Writer"],
    }
}

pub fn display_name(category: FitCategory) -> &'static str {
    match category {
        FitCategory::AnalyticalCreative => "Analytical & Creative Roles",
        FitCategory::TechnicalStructured => "Technical & Structured Roles",
        FitCategory::InterpersonalOutgoing => "Interpersonal Roles",
        FitCategory::PeopleSupport => "People & Support Roles",
        FitCategory::ContentWriting => "Writing Roles",
    }
}

pub fn description(category: FitCategory) -> &'static str {
    match category {
        FitCategory::AnalyticalCreative => {
            "Roles requiring strong analytical thinking and creative problem-solving"
        }
        FitCategory::TechnicalStructured => {
            "Technical positions requiring precision and disciplined execution"
        }
        FitCategory::InterpersonalOutgoing => {
            "Roles requiring strong interpersonal and communication skills"
        }
        FitCategory::PeopleSupport => {
            "People-oriented roles focused on support and relationships"
        }
        FitCategory::ContentWriting => "Creative roles focused on written communication",
    }
}

/// Resolves a category id arriving over the API, failing with
/// `UnknownCategory` for anything outside the fixed five.
pub fn lookup(id: &str) -> Result<FitCategory, AppError> {
    id.parse()
}

/// Category metadata for the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: FitCategory,
    pub name: &'static str,
    pub description: &'static str,
    /// Human-readable threshold rules, e.g. "conscientiousness >= 4.2".
    pub rules: Vec<String>,
    pub jobs: &'static [&'static str],
}

pub fn all_categories() -> Vec<CategoryInfo> {
    FitCategory::ALL
        .into_iter()
        .map(|c| CategoryInfo {
            id: c,
            name: display_name(c),
            description: description(c),
            rules: conditions_for(c).iter().map(|cond| cond.to_string()).collect(),
            jobs: jobs_for(c),
        })
        .collect()
}
