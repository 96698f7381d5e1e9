use std::fmt;
use std::sync::LazyLock;

/// Correctly oriented words. Any hit means the text reads the right way.
pub const CORRECT_MARKERS: &[&str] = &[
    "מה ",   // what
    "מי ",   // who
    "איך ",  // how
    "האם ",  // is/does
    "הינך",  // you are
    "בעת ",  // during
    "כאשר", // when
];

/// Reversed forms of question words and domain vocabulary.
pub const REVERSED_MARKERS: &[&str] = &[
    " המ ",    // what
    " המ,",
    ",המ ",
    "המ?",
    " ימ ",    // who
    " ךיא ",   // how
    " םאה ",   // is/does
    "ןיחבמ",   // noticing
    "תניפס",   // ship
    "תישרפמ",  // sailboat
    "ךמוטרח",  // your bow
    "הגלפה",   // sailing; also a valid correct spelling
];

/// Reversed "during", only trusted at the very end of the text.
pub const REVERSED_TRAILING_STEM: &str = "תעב";

pub const TRAILING_TERMINATORS: &str = "?.!";

/// Direction evidence a rule contributes when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Reversed,
}

/// Suffix-anchored match: `stem` then at most one terminator, at the end of
/// the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingPattern {
    pub stem: String,
    pub terminators: String,
}

impl TrailingPattern {
    pub fn new(stem: impl Into<String>, terminators: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            terminators: terminators.into(),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        let trimmed = text.trim_matches(is_strippable);
        if trimmed.ends_with(self.stem.as_str()) {
            return true;
        }
        match trimmed.chars().next_back() {
            Some(last) if self.terminators.contains(last) => trimmed
                [..trimmed.len() - last.len_utf8()]
                .ends_with(self.stem.as_str()),
            _ => false,
        }
    }
}

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F).
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Contains(String),
    EndsWith(TrailingPattern),
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Rule::Contains(marker) => text.contains(marker.as_str()),
            Rule::EndsWith(pattern) => pattern.matches(text),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Contains(marker) => write!(f, "contains {:?}", marker),
            Rule::EndsWith(p) => write!(f, "ends with {:?} [{}]?", p.stem, p.terminators),
        }
    }
}

/// Outcome of classifying one text, naming the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'r> {
    Empty,
    Correct(&'r Rule),
    Reversed(&'r Rule),
    NoEvidence,
}

impl Classification<'_> {
    pub fn is_reversed(&self) -> bool {
        matches!(self, Classification::Reversed(_))
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            Classification::Correct(rule) | Classification::Reversed(rule) => {
                Some(rule.to_string())
            }
            Classification::Empty | Classification::NoEvidence => None,
        }
    }
}

/// Ordered rule list. First match wins.
///
/// Construction always lays rules out as correct-contains, then
/// reversed-contains, then the reversed suffix rule; callers cannot reorder
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(Verdict, Rule)>,
}

impl RuleSet {
    pub fn new<C, R>(correct: C, reversed: R, trailing: Option<TrailingPattern>) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let mut rules: Vec<(Verdict, Rule)> = correct
            .into_iter()
            .map(|m| (Verdict::Correct, Rule::Contains(m.into())))
            .collect();
        rules.extend(
            reversed
                .into_iter()
                .map(|m| (Verdict::Reversed, Rule::Contains(m.into()))),
        );
        if let Some(pattern) = trailing {
            rules.push((Verdict::Reversed, Rule::EndsWith(pattern)));
        }
        Self { rules }
    }

    pub fn rules(&self) -> impl Iterator<Item = &(Verdict, Rule)> {
        self.rules.iter()
    }

    pub fn classify(&self, text: &str) -> Classification<'_> {
        if text.is_empty() {
            return Classification::Empty;
        }
        for (verdict, rule) in &self.rules {
            if rule.matches(text) {
                return match verdict {
                    Verdict::Correct => Classification::Correct(rule),
                    Verdict::Reversed => Classification::Reversed(rule),
                };
            }
        }
        Classification::NoEvidence
    }

    pub fn is_reversed(&self, text: &str) -> bool {
        self.classify(text).is_reversed()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(
            CORRECT_MARKERS.iter().copied(),
            REVERSED_MARKERS.iter().copied(),
            Some(TrailingPattern::new(
                REVERSED_TRAILING_STEM,
                TRAILING_TERMINATORS,
            )),
        )
    }
}

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::default);

/// The built-in rule tables.
pub fn default_rules() -> &'static RuleSet {
    &DEFAULT_RULES
}

/// Whether `text` looks character-reversed under the built-in rules.
pub fn is_reversed(text: &str) -> bool {
    DEFAULT_RULES.is_reversed(text)
}
