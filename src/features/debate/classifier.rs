//! Ranked rules deciding whether a key point is an arguable claim or a
//! settled fact.
//!
//! Rules are checked in order and the first one that matches decides. A point
//! that matches no rule gets the policy's fallback verdict.

pub const DEBATABLE_KEYWORDS: &[&str] = &[
    "should", "might", "complex", "issue", "problem", "benefit", "impact",
];

/// Points with at most this many words are too short to carry a claim.
pub const SHORT_POINT_MAX_WORDS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct DebatabilityRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub debatable: bool,
}

pub const NUMERIC_FACT: DebatabilityRule = DebatabilityRule {
    name: "numeric-fact",
    matches: contains_digit,
    debatable: false,
};

pub const DEBATE_KEYWORD: DebatabilityRule = DebatabilityRule {
    name: "debate-keyword",
    matches: contains_debate_keyword,
    debatable: true,
};

pub const SHORT_POINT: DebatabilityRule = DebatabilityRule {
    name: "short-point",
    matches: is_short_point,
    debatable: false,
};

const STANDARD_RULES: [DebatabilityRule; 3] = [NUMERIC_FACT, DEBATE_KEYWORD, SHORT_POINT];
const STANDARD_FALLBACK: bool = true;

#[derive(Debug, Clone)]
pub struct DebatabilityPolicy {
    rules: Vec<DebatabilityRule>,
    fallback: bool,
}

impl Default for DebatabilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl DebatabilityPolicy {
    /// Digits mark a fact, then keywords mark a claim, then short points are
    /// facts; anything else is debatable.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
            fallback: STANDARD_FALLBACK,
        }
    }

    pub fn new(rules: Vec<DebatabilityRule>, fallback: bool) -> Self {
        Self { rules, fallback }
    }

    /// Inserts `rule` at `rank` (0 is checked first); ranks past the end append.
    pub fn with_rule(mut self, rank: usize, rule: DebatabilityRule) -> Self {
        let rank = rank.min(self.rules.len());
        self.rules.insert(rank, rule);
        self
    }

    pub fn rules(&self) -> &[DebatabilityRule] {
        &self.rules
    }

    pub fn matching_rule(&self, point: &str) -> Option<&DebatabilityRule> {
        self.rules.iter().find(|rule| (rule.matches)(point))
    }

    pub fn is_debatable(&self, point: &str) -> bool {
        self.matching_rule(point)
            .map(|rule| rule.debatable)
            .unwrap_or(self.fallback)
    }
}

/// Classifies `point` with the standard rule order.
pub fn is_debatable(point: &str) -> bool {
    DebatabilityPolicy::standard().is_debatable(point)
}

/// Decimal digits only; fractions and numeral letters such as `½` or `Ⅻ` do
/// not count.
fn contains_digit(point: &str) -> bool {
    point.chars().any(|ch| ch.is_ascii_digit())
}

fn contains_debate_keyword(point: &str) -> bool {
    let lower = point.to_lowercase();
    DEBATABLE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

fn is_short_point(point: &str) -> bool {
    point.split_whitespace().count() <= SHORT_POINT_MAX_WORDS
}
