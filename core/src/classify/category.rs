use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Life-domain (or urgency) bucket assigned to a goal, task or project.
///
/// The set is closed: every classification resolves to exactly one variant,
/// with `Other` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    QuickMoney,
    SaveMoney,
    Health,
    NetworkExpansion,
    BusinessGrowth,
    Fires,
    GoodLiving,
    BigVision,
    Job,
    Organization,
    TechIssues,
    BusinessLaunch,
    FuturePlanning,
    Innovation,
    Other,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 15] = [
        Category::QuickMoney,
        Category::SaveMoney,
        Category::Health,
        Category::NetworkExpansion,
        Category::BusinessGrowth,
        Category::Fires,
        Category::GoodLiving,
        Category::BigVision,
        Category::Job,
        Category::Organization,
        Category::TechIssues,
        Category::BusinessLaunch,
        Category::FuturePlanning,
        Category::Innovation,
        Category::Other,
    ];

    /// The wire identifier, e.g. `quick_money`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::QuickMoney => "quick_money",
            Category::SaveMoney => "save_money",
            Category::Health => "health",
            Category::NetworkExpansion => "network_expansion",
            Category::BusinessGrowth => "business_growth",
            Category::Fires => "fires",
            Category::GoodLiving => "good_living",
            Category::BigVision => "big_vision",
            Category::Job => "job",
            Category::Organization => "organization",
            Category::TechIssues => "tech_issues",
            Category::BusinessLaunch => "business_launch",
            Category::FuturePlanning => "future_planning",
            Category::Innovation => "innovation",
            Category::Other => "other",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::QuickMoney => "Quick Money",
            Category::SaveMoney => "Save Money",
            Category::Health => "Health",
            Category::NetworkExpansion => "Network Expansion",
            Category::BusinessGrowth => "Business Growth",
            Category::Fires => "Fires",
            Category::GoodLiving => "Good Living",
            Category::BigVision => "Big Vision",
            Category::Job => "Job",
            Category::Organization => "Organization",
            Category::TechIssues => "Tech Issues",
            Category::BusinessLaunch => "Business Launch",
            Category::FuturePlanning => "Future Planning",
            Category::Innovation => "Innovation",
            Category::Other => "Other",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::QuickMoney => "Earning money fast: side hustles, freelancing, selling things",
            Category::SaveMoney => "Cutting costs, budgeting, paying down debt",
            Category::Health => "Physical and mental health, fitness, diet, sleep",
            Category::NetworkExpansion => "Meeting people, mentors, events, professional contacts",
            Category::BusinessGrowth => "Growing an existing business: customers, sales, marketing",
            Category::Fires => "Urgent problems and crises that need attention right now",
            Category::GoodLiving => "Enjoying life: travel, hobbies, family, relaxation",
            Category::BigVision => "Long-term dreams, life purpose, legacy",
            Category::Job => "Current employment and career moves",
            Category::Organization => "Planning, routines, decluttering, personal systems",
            Category::TechIssues => "Computer, software, device and connectivity problems",
            Category::BusinessLaunch => "Starting a new business or product",
            Category::FuturePlanning => "Retirement, investing, insurance, financial future",
            Category::Innovation => "Learning, research, experiments and new ideas",
            Category::Other => "Anything that does not fit another category",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or(UnknownCategory(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_fifteen_distinct_ids() {
        let mut ids: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_from_str_accepts_wire_ids() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Health\n".parse::<Category>(), Ok(Category::Health));
    }

    #[test]
    fn test_from_str_rejects_unknown_labels() {
        assert!("wellness".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert!("quick money".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::NetworkExpansion).unwrap();
        assert_eq!(json, "\"network_expansion\"");
        let parsed: Category = serde_json::from_str("\"tech_issues\"").unwrap();
        assert_eq!(parsed, Category::TechIssues);
        assert!(serde_json::from_str::<Category>("\"misc\"").is_err());
    }
}
