//! Injectable marker configuration.
//!
//! Lists left unset fall back to the built-in tables.

use crate::rules::{
    CORRECT_MARKERS, REVERSED_MARKERS, REVERSED_TRAILING_STEM, RuleSet, TRAILING_TERMINATORS,
    TrailingPattern,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Markers proving the text is correctly oriented.
    pub correct: Option<Vec<String>>,

    /// Markers proving the text is reversed.
    pub reversed: Option<Vec<String>>,

    /// Suffix-anchored reversed pattern.
    pub trailing: Option<TrailingConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrailingConfig {
    pub stem: String,
    #[serde(default = "default_terminators")]
    pub terminators: String,
}

fn default_terminators() -> String {
    TRAILING_TERMINATORS.to_string()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleConfigError {
    #[error("empty marker in `{list}` list")]
    EmptyMarker { list: &'static str },

    #[error("trailing pattern stem must not be empty")]
    EmptyStem,
}

impl RulesConfig {
    /// Build the rule set, rejecting markers that would match every text.
    pub fn build(&self) -> Result<RuleSet, RuleConfigError> {
        let correct = markers(self.correct.as_deref(), CORRECT_MARKERS, "correct")?;
        let reversed = markers(self.reversed.as_deref(), REVERSED_MARKERS, "reversed")?;

        let trailing = match &self.trailing {
            Some(t) if t.stem.is_empty() => return Err(RuleConfigError::EmptyStem),
            Some(t) => TrailingPattern::new(t.stem.clone(), t.terminators.clone()),
            None => TrailingPattern::new(REVERSED_TRAILING_STEM, TRAILING_TERMINATORS),
        };

        Ok(RuleSet::new(correct, reversed, Some(trailing)))
    }
}

fn markers(
    configured: Option<&[String]>,
    builtin: &[&str],
    list: &'static str,
) -> Result<Vec<String>, RuleConfigError> {
    match configured {
        Some(list_values) => {
            if list_values.iter().any(String::is_empty) {
                return Err(RuleConfigError::EmptyMarker { list });
            }
            Ok(list_values.to_vec())
        }
        None => Ok(builtin.iter().map(|m| m.to_string()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;

    #[test]
    fn empty_config_matches_defaults() {
        let rules = RulesConfig::default().build().expect("build");
        assert_eq!(&rules, default_rules());
    }

    #[test]
    fn parses_from_toml() {
        let cfg: RulesConfig = toml::from_str(
            r#"
correct = ["שלום "]
[trailing]
stem = "םוי"
"#,
        )
        .expect("parse");
        let rules = cfg.build().expect("build");

        assert!(!rules.is_reversed("שלום  המ "));
        // Reversed list still the built-in one.
        assert!(rules.is_reversed("רבד  המ "));
        assert!(rules.is_reversed("הז םוי?"));
        assert!(!rules.is_reversed("הז תעב?"));
    }

    #[test]
    fn rejects_empty_marker() {
        let cfg = RulesConfig {
            reversed: Some(vec!["".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            cfg.build(),
            Err(RuleConfigError::EmptyMarker { list: "reversed" })
        );
    }

    #[test]
    fn rejects_empty_stem() {
        let cfg = RulesConfig {
            trailing: Some(TrailingConfig {
                stem: String::new(),
                terminators: "?".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(cfg.build(), Err(RuleConfigError::EmptyStem));
    }
}
