/// Keyword test applied to the lower-cased last user message.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// At least one keyword is a substring of the text.
    Any(&'static [&'static str]),
    /// Every keyword is a substring of the text.
    All(&'static [&'static str]),
}

impl Keywords {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| text.contains(w)),
            Keywords::All(words) => words.iter().all(|w| text.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    /// Short identifier used in logs and trace events.
    pub name: &'static str,
    pub keywords: Keywords,
    pub response: &'static str,
}

/// Answer used when no rule matches.
pub const DEFAULT_RESPONSE: &str = "I can help you with information about store openings, \
pending tasks, vendors and contracts. Try asking about the Downtown Flagship Store, \
upcoming contract renewals, or high-priority tasks.";

/// The fallback table. Evaluated top to bottom; the first match wins.
///
/// The two single-store rules must stay ahead of `store_openings`: a question
/// naming a specific store also mentions "store" and often "opening".
pub const RULES: &[FallbackRule] = &[
    FallbackRule {
        name: "downtown_flagship",
        keywords: Keywords::Any(&["new york", "downtown flagship"]),
        response: "The Downtown Flagship Store in New York is 65% complete. \
It has a budget of $2.5M, covers 15,000 sq ft and will be staffed by 45 employees. \
The store manager is Sarah Johnson, and opening is planned for June 15.",
    },
    FallbackRule {
        name: "oxford_street",
        keywords: Keywords::Any(&["london", "oxford street"]),
        response: "The Oxford Street Branch in London is 40% complete. \
It has a budget of £1.8M, covers 12,000 sq ft and will be staffed by 35 employees. \
The store manager is James Wilson, and opening is planned for August 1.",
    },
    FallbackRule {
        name: "store_openings",
        keywords: Keywords::All(&["store", "opening"]),
        response: "There are 4 store openings in progress: Downtown Flagship Store \
(New York, 65%), Oxford Street Branch (London, 40%), Shibuya Crossing Store (Tokyo, 25%) \
and Champs-Élysées Boutique (Paris, 80%).",
    },
    FallbackRule {
        name: "tasks",
        keywords: Keywords::Any(&["task", "priority"]),
        response: "There are 12 pending tasks, 3 of them high priority: fixture installation \
at the Downtown Flagship Store, staff hiring for the Oxford Street Branch, and the lease \
amendment sign-off for the Shibuya Crossing Store.",
    },
    FallbackRule {
        name: "vendors",
        keywords: Keywords::Any(&["vendor", "supplier"]),
        response: "You are working with 4 key vendors: BuildRight Construction (general \
contractor), Luma Lighting Co. (lighting), SecureTech Systems (security) and ShelfCraft \
Fixtures (fixtures and shelving).",
    },
    FallbackRule {
        name: "contracts",
        keywords: Keywords::Any(&["contract", "agreement"]),
        response: "2 vendor contracts expire soon: SecureTech Systems renews in 21 days and \
ShelfCraft Fixtures renews in 45 days.",
    },
    FallbackRule {
        name: "progress",
        keywords: Keywords::Any(&["progress", "status"]),
        response: "Overall, the store opening program is 52% complete. The Paris boutique is \
ahead of schedule, New York and London are on track, and Tokyo is at risk due to permit delays.",
    },
    FallbackRule {
        name: "joke",
        keywords: Keywords::Any(&["joke"]),
        response: "Why did the store manager bring a ladder to the grand opening? \
Because the prices were going through the roof!",
    },
    FallbackRule {
        name: "greeting",
        keywords: Keywords::Any(&["hello", "hi", "hey"]),
        response: "Hello! I'm your store opening assistant. Ask me about store progress, \
tasks, vendors or contracts.",
    },
];

/// Find the first rule matching `text`, which must already be lower-cased.
pub fn find_rule(text: &str) -> Option<&'static FallbackRule> {
    RULES.iter().find(|rule| rule.keywords.matches(text))
}
