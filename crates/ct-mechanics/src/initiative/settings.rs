//! Configuration for initiative rolls.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;

/// Smallest die the roller accepts.
pub const MIN_DIE: u32 = 2;
/// Largest die the roller accepts.
pub const MAX_DIE: u32 = 100;
/// The standard initiative die.
pub const DEFAULT_DIE: u32 = 20;

/// Which combatants roll with advantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvantageRule {
    /// Use each definition's own advantage flag.
    #[default]
    FromDefinition,
    /// Everyone rolls with advantage.
    Always,
    /// Nobody rolls with advantage.
    Never,
}

impl AdvantageRule {
    /// Whether a combatant whose definition says `has_advantage` rolls twice.
    pub fn applies(self, has_advantage: bool) -> bool {
        match self {
            Self::FromDefinition => has_advantage,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Parse a rule from a string like "always" or "definition".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "definition" | "from_definition" | "default" => Some(Self::FromDefinition),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdvantageRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FromDefinition => write!(f, "definition"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// How initiative is rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiativeSettings {
    /// Sides on the initiative die.
    pub die: u32,
    /// Which combatants roll with advantage.
    pub advantage: AdvantageRule,
    /// Combatants sharing a definition share one die roll.
    pub group_same_definitions: bool,
    /// Re-roll combatants that already have initiative.
    pub overwrite: bool,
}

impl Default for InitiativeSettings {
    fn default() -> Self {
        Self {
            die: DEFAULT_DIE,
            advantage: AdvantageRule::FromDefinition,
            group_same_definitions: true,
            overwrite: false,
        }
    }
}

impl InitiativeSettings {
    /// Set the initiative die. Out-of-range values are clamped by
    /// [`normalized`](Self::normalized).
    pub fn with_die(mut self, sides: u32) -> Self {
        self.die = sides;
        self
    }

    /// Set the advantage rule.
    pub fn with_advantage(mut self, rule: AdvantageRule) -> Self {
        self.advantage = rule;
        self
    }

    /// Set whether same-definition combatants share a roll.
    pub fn grouped(mut self, group: bool) -> Self {
        self.group_same_definitions = group;
        self
    }

    /// Set whether existing initiative values are rolled again.
    pub fn overwriting(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Clamp out-of-range values, reporting what was changed.
    pub fn normalized(mut self) -> (Self, Option<Diagnostic>) {
        let clamped = self.die.clamp(MIN_DIE, MAX_DIE);
        if clamped == self.die {
            return (self, None);
        }
        let diagnostic = Diagnostic::InvalidSettings {
            field: "die",
            given: self.die,
            used: clamped,
        };
        self.die = clamped;
        (self, Some(diagnostic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = InitiativeSettings::default();
        assert_eq!(s.die, 20);
        assert_eq!(s.advantage, AdvantageRule::FromDefinition);
        assert!(s.group_same_definitions);
        assert!(!s.overwrite);
    }

    #[test]
    fn builder_methods() {
        let s = InitiativeSettings::default()
            .with_die(12)
            .with_advantage(AdvantageRule::Never)
            .grouped(false)
            .overwriting(true);
        assert_eq!(s.die, 12);
        assert_eq!(s.advantage, AdvantageRule::Never);
        assert!(!s.group_same_definitions);
        assert!(s.overwrite);
    }

    #[test]
    fn normalized_clamps_die() {
        let (s, diag) = InitiativeSettings::default().with_die(0).normalized();
        assert_eq!(s.die, MIN_DIE);
        assert_eq!(
            diag,
            Some(Diagnostic::InvalidSettings {
                field: "die",
                given: 0,
                used: 2
            })
        );

        let (s, diag) = InitiativeSettings::default().with_die(1000).normalized();
        assert_eq!(s.die, MAX_DIE);
        assert!(diag.is_some());
    }

    #[test]
    fn normalized_accepts_valid() {
        let (s, diag) = InitiativeSettings::default().normalized();
        assert_eq!(s, InitiativeSettings::default());
        assert!(diag.is_none());
    }

    #[test]
    fn advantage_rules() {
        assert!(AdvantageRule::FromDefinition.applies(true));
        assert!(!AdvantageRule::FromDefinition.applies(false));
        assert!(AdvantageRule::Always.applies(false));
        assert!(!AdvantageRule::Never.applies(true));
    }

    #[test]
    fn advantage_parse_and_display() {
        assert_eq!(AdvantageRule::from_str_tag("Always"), Some(AdvantageRule::Always));
        assert_eq!(
            AdvantageRule::from_str_tag("definition"),
            Some(AdvantageRule::FromDefinition)
        );
        assert_eq!(AdvantageRule::from_str_tag("sometimes"), None);
        assert_eq!(AdvantageRule::Never.to_string(), "never");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let s: InitiativeSettings = serde_json::from_str(r#"{ "die": 12 }"#).unwrap();
        assert_eq!(s.die, 12);
        assert!(s.group_same_definitions);
    }
}
