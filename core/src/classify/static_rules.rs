//! Rule-based category classifier.
//!
//! Matches lowercase keyword literals against the item text with plain
//! substring containment (no tokenizing, no word boundaries). Rule sets are
//! evaluated in `RULE_SETS` order and the first hit wins, so an urgent item is
//! never filed under a lower-priority bucket. No I/O, no state.

use super::category::Category;

/// Keywords that route an item to one category.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Outcome of a static classification, including the keyword that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMatch {
    pub category: Category,
    /// `None` when nothing matched and the item fell through to `Other`.
    pub keyword: Option<&'static str>,
}

/// Priority-ordered rule table. Order is part of the contract:
/// fires, quick_money, save_money, health, network_expansion, business_growth,
/// good_living, big_vision, job, organization, tech_issues, business_launch,
/// future_planning, innovation. `Other` has no rules.
pub const RULE_SETS: &[RuleSet] = &[
    RuleSet {
        category: Category::Fires,
        keywords: &[
            "urgent",
            "emergency",
            "crisis",
            "asap",
            "deadline",
            "overdue",
            "broken",
            "critical",
            "immediately",
            "right away",
            "past due",
            "late fee",
            "outage",
            "is down",
            "went down",
            "failing",
            "escalat",
            "angry client",
            "complaint",
            "lawsuit",
            "eviction",
            "penalty",
            "missed payment",
            "fix now",
            "time sensitive",
            "blocker",
            "on fire",
            "fire drill",
        ],
    },
    RuleSet {
        category: Category::QuickMoney,
        keywords: &[
            "side hustle",
            "freelance",
            "gig",
            "sell",
            "flip",
            "quick cash",
            "fast money",
            "extra income",
            "make money",
            "earn money",
            "earn extra",
            "cash",
            "resell",
            "commission",
            "bonus",
            "passive income",
            "dropship",
            "affiliate",
            "rent out",
            "upwork",
            "fiverr",
            "etsy",
            "ebay",
            "garage sale",
            "paid survey",
            "tutoring",
            "babysit",
            "pet sit",
            "deliver for",
            "uber",
        ],
    },
    RuleSet {
        category: Category::SaveMoney,
        keywords: &[
            "debt payoff",
            "pay off debt",
            "debt",
            "credit card",
            "budget",
            "save money",
            "saving",
            "cut cost",
            "cut back",
            "frugal",
            "expense",
            "spending",
            "cancel subscription",
            "subscription",
            "coupon",
            "discount",
            "cheaper",
            "refinance",
            "lower bill",
            "bills",
            "loan",
            "interest rate",
            "mortgage",
            "grocer",
            "negotiate bill",
            "no spend",
            "price compar",
            "money leak",
        ],
    },
    RuleSet {
        category: Category::Health,
        keywords: &[
            "workout",
            "exercise",
            "gym",
            "fitness",
            "diet",
            "nutrition",
            "weight",
            "doctor",
            "dentist",
            "therapy",
            "therapist",
            "meditat",
            "sleep",
            "yoga",
            "jog",
            "running",
            "marathon",
            "walk",
            "hydrat",
            "vitamin",
            "mental health",
            "stress",
            "healthy",
            "medication",
            "checkup",
            "check-up",
            "protein",
            "cardio",
            "stretch",
            "calorie",
        ],
    },
    RuleSet {
        category: Category::NetworkExpansion,
        keywords: &[
            "network",
            "linkedin",
            "connect with",
            "meetup",
            "meet up with",
            "conference",
            "mentor",
            "introduc",
            "referral",
            "coffee chat",
            "reach out",
            "outreach",
            "follow up with",
            "contacts",
            "community",
            "event",
            "alumni",
            "podcast guest",
            "collaborat",
            "partnership",
            "relationship building",
            "industry peers",
            "join a group",
            "mastermind",
        ],
    },
    RuleSet {
        category: Category::BusinessGrowth,
        keywords: &[
            "grow the business",
            "grow my business",
            "scale",
            "revenue",
            "customer",
            "client",
            "sales",
            "marketing",
            "lead gen",
            "leads",
            "conversion",
            "funnel",
            "seo",
            "advertis",
            "campaign",
            "pricing",
            "upsell",
            "retention",
            "growth",
            "expand",
            "market share",
            "brand",
            "kpi",
            "newsletter",
            "social media",
            "content strategy",
            "profit margin",
        ],
    },
    RuleSet {
        category: Category::GoodLiving,
        keywords: &[
            "travel",
            "vacation",
            "holiday",
            "trip",
            "relax",
            "hobby",
            "hobbies",
            "have fun",
            "enjoy",
            "restaurant",
            "concert",
            "movie",
            "family time",
            "friends",
            "date night",
            "garden",
            "cook",
            "recipe",
            "music",
            "beach",
            "weekend",
            "self care",
            "self-care",
            "spa",
            "hike",
            "hiking",
            "camping",
            "flight",
            "hotel",
            "read a book",
        ],
    },
    RuleSet {
        category: Category::BigVision,
        keywords: &[
            "vision",
            "dream",
            "life goal",
            "bucket list",
            "legacy",
            "purpose",
            "mission",
            "long term",
            "long-term",
            "10 year",
            "ten year",
            "someday",
            "impact",
            "change the world",
            "manifest",
            "aspiration",
            "ambition",
            "big picture",
            "north star",
            "core values",
            "meaning",
            "fulfil",
            "life direction",
            "what i want in life",
        ],
    },
    RuleSet {
        category: Category::Job,
        keywords: &[
            "job",
            "career",
            "resume",
            "interview",
            "promotion",
            "ask for a raise",
            "pay raise",
            "boss",
            "manager",
            "coworker",
            "co-worker",
            "colleague",
            "salary",
            "performance review",
            "apply for",
            "application",
            "hiring",
            "cover letter",
            "work project",
            "office",
            "meeting",
            "team",
            "shift",
            "overtime",
            "employer",
            "onboarding",
            "quarterly review",
        ],
    },
    RuleSet {
        category: Category::Organization,
        keywords: &[
            "organiz",
            "organis",
            "declutter",
            "clean",
            "tidy",
            "schedule",
            "calendar",
            "to-do",
            "todo",
            "checklist",
            "system",
            "routine",
            "habit",
            "filing",
            "inbox",
            "email",
            "folder",
            "sort",
            "prioriti",
            "time management",
            "productivity",
            "spreadsheet",
            "reminder",
            "planner",
            "workflow",
            "paperwork",
        ],
    },
    RuleSet {
        category: Category::TechIssues,
        keywords: &[
            "bug",
            "error",
            "crash",
            "wifi",
            "wi-fi",
            "internet",
            "laptop",
            "computer",
            "phone",
            "password",
            "login",
            "log in",
            "update software",
            "install",
            "virus",
            "malware",
            "backup",
            "printer",
            "server",
            "website",
            "mobile app",
            "software",
            "hardware",
            "slow",
            "freeze",
            "frozen",
            "glitch",
            "reset",
            "router",
            "database",
        ],
    },
    RuleSet {
        category: Category::BusinessLaunch,
        keywords: &[
            "launch",
            "startup",
            "start-up",
            "start a business",
            "business plan",
            "llc",
            "incorporat",
            "register business",
            "mvp",
            "product launch",
            "founder",
            "co-founder",
            "cofounder",
            "pitch",
            "investor",
            "fundrais",
            "seed round",
            "business idea",
            "domain name",
            "logo",
            "landing page",
            "trademark",
            "go to market",
            "go-to-market",
            "beta",
            "new venture",
            "first customer",
        ],
    },
    RuleSet {
        category: Category::FuturePlanning,
        keywords: &[
            "retire",
            "401k",
            "401(k)",
            "roth ira",
            "ira account",
            "invest",
            "stock",
            "portfolio",
            "index fund",
            "pension",
            "estate plan",
            "write a will",
            "insurance",
            "college fund",
            "five year plan",
            "5 year plan",
            "future",
            "nest egg",
            "financial plan",
            "net worth",
            "wealth",
            "long-term savings",
            "succession",
        ],
    },
    RuleSet {
        category: Category::Innovation,
        keywords: &[
            "innovat",
            "invent",
            "new idea",
            "brainstorm",
            "experiment",
            "research",
            "learn",
            "study",
            "course",
            "skill",
            "artificial intelligence",
            "machine learning",
            "patent",
            "creative",
            "create",
            "design",
            "build",
            "prototype",
            "explore",
            "technology",
            "automat",
            "side project",
            "tinker",
            "hackathon",
            "r&d",
            "disrupt",
        ],
    },
];

/// Classify an item by title and optional description.
///
/// Total: always returns a category, `Other` when no keyword matches.
pub fn classify_static(title: &str, description: Option<&str>) -> Category {
    match_static(title, description).category
}

/// Same as [`classify_static`] but also reports which keyword fired.
pub fn match_static(title: &str, description: Option<&str>) -> StaticMatch {
    let text = item_text(title, description);

    for rule in RULE_SETS {
        if let Some(keyword) = rule.keywords.iter().find(|k| text.contains(*k)) {
            return StaticMatch {
                category: rule.category,
                keyword: Some(*keyword),
            };
        }
    }

    StaticMatch {
        category: Category::Other,
        keyword: None,
    }
}

/// Keyword list for a category (empty for `Other`).
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    RULE_SETS
        .iter()
        .find(|rule| rule.category == category)
        .map(|rule| rule.keywords)
        .unwrap_or_default()
}

fn item_text(title: &str, description: Option<&str>) -> String {
    format!("{title} {}", description.unwrap_or("")).to_lowercase()
}
