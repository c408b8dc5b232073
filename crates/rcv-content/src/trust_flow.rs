//! The trust experience: three short scenarios, then a reflected pattern.
//!
//! The flow is a linear state machine. Each action is only valid from one
//! step; anything else is a [`ContentError::InvalidTransition`].

use std::fmt;

use serde::Serialize;

use crate::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustStep {
    Opening,
    Scenario1,
    Scenario2,
    Scenario3,
    Reflection,
    Recognition,
    Invitation,
    Deeper,
}

impl TrustStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Scenario1 => "scenario1",
            Self::Scenario2 => "scenario2",
            Self::Scenario3 => "scenario3",
            Self::Reflection => "reflection",
            Self::Recognition => "recognition",
            Self::Invitation => "invitation",
            Self::Deeper => "deeper",
        }
    }

    /// Index into [`SCENARIOS`] for a scenario step.
    const fn scenario_index(self) -> Option<usize> {
        match self {
            Self::Scenario1 => Some(0),
            Self::Scenario2 => Some(1),
            Self::Scenario3 => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for TrustStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioOption {
    pub text: &'static str,
    /// Tag naming the disposition this answer suggests, e.g. `guarded-mistrust`.
    pub reveals: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub situation: &'static str,
    pub prompt: &'static str,
    pub options: &'static [ScenarioOption],
}

const fn option(text: &'static str, reveals: &'static str) -> ScenarioOption {
    ScenarioOption { text, reveals }
}

pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        id: "friend-cancels",
        situation: "A friend cancels plans last minute",
        prompt: "What is your first instinct?",
        options: &[
            option("They probably found something better to do", "anxious-rejection"),
            option(
                "Something must have come up. I will check if they are okay.",
                "secure-trust",
            ),
            option("Typical. People always do this.", "guarded-mistrust"),
            option("Actually relieved. Now I do not have to go.", "avoidant-pattern"),
        ],
    },
    Scenario {
        id: "work-coffee",
        situation: "Someone at work invites you for coffee to connect",
        prompt: "What runs through your mind?",
        options: &[
            option("They want something from me. What is the angle?", "guarded-mistrust"),
            option("That could be nice. I will go but keep it light.", "guarded-cautious"),
            option("Great, I would love to get to know them better.", "secure-openness"),
            option(
                "I will say yes but probably cancel closer to the time.",
                "avoidant-pattern",
            ),
        ],
    },
    Scenario {
        id: "friend-asks",
        situation: "A close friend asks how you are really doing",
        prompt: "What happens inside you?",
        options: &[
            option("I deflect. They do not actually want to hear it.", "guarded-deflection"),
            option("I share a bit but keep the heavy stuff to myself.", "guarded-selective"),
            option("I tell them. It feels good to be seen.", "secure-vulnerability"),
            option("I freeze. I do not even know how I am doing.", "avoidant-disconnect"),
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrustResponse {
    pub scenario: String,
    pub choice: String,
    pub reveals: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrustPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub insight: &'static str,
    pub cost: &'static str,
}

pub const GUARDED_TRUST: TrustPattern = TrustPattern {
    name: "Guarded Trust",
    description: "You keep people at a distance to protect yourself. Getting close feels dangerous.",
    insight: "This makes sense if trust has been broken before. Your system learned to protect you.",
    cost: "But it also means missing real connection, even with people who are safe.",
};

pub const AVOIDANT_PATTERN: TrustPattern = TrustPattern {
    name: "Avoidant Pattern",
    description: "You say yes but pull away. Intimacy triggers an urge to escape.",
    insight: "This pattern keeps you safe from vulnerability, but at a cost.",
    cost: "It prevents the very connection you might actually want.",
};

pub const ANXIOUS_ATTACHMENT: TrustPattern = TrustPattern {
    name: "Anxious Attachment",
    description: "You scan for signs of rejection. Every small cue feels loaded.",
    insight: "Your nervous system is trying to predict abandonment before it happens.",
    cost: "But this hypervigilance exhausts you and pushes people away.",
};

pub const CAUTIOUS_TRUST: TrustPattern = TrustPattern {
    name: "Cautious Trust",
    description: "You are open but careful. You want connection but stay alert.",
    insight: "You are working to find the balance between openness and protection.",
    cost: "Sometimes the guard stays up even when it is safe to lower it.",
};

/// Rules checked in order; the first keyword seen in enough answers wins.
const PATTERN_RULES: [(&str, &TrustPattern); 3] = [
    ("guarded", &GUARDED_TRUST),
    ("avoidant", &AVOIDANT_PATTERN),
    ("anxious", &ANXIOUS_ATTACHMENT),
];

const PATTERN_THRESHOLD: usize = 2;

/// Pick the pattern the responses point to, falling back to [`CAUTIOUS_TRUST`].
#[must_use]
pub fn classify_pattern(responses: &[TrustResponse]) -> &'static TrustPattern {
    PATTERN_RULES
        .iter()
        .find(|(keyword, _)| {
            responses
                .iter()
                .filter(|r| r.reveals.contains(keyword))
                .count()
                >= PATTERN_THRESHOLD
        })
        .map_or(&CAUTIOUS_TRUST, |&(_, pattern)| pattern)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrustFlow {
    step: TrustStep,
    responses: Vec<TrustResponse>,
    recognized: Option<bool>,
}

impl Default for TrustFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl TrustFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: TrustStep::Opening,
            responses: Vec::new(),
            recognized: None,
        }
    }

    #[must_use]
    pub const fn step(&self) -> TrustStep {
        self.step
    }

    #[must_use]
    pub fn responses(&self) -> &[TrustResponse] {
        &self.responses
    }

    /// Whether the user recognized themselves in the pattern, once asked.
    #[must_use]
    pub const fn recognized(&self) -> Option<bool> {
        self.recognized
    }

    /// The scenario being asked, if the flow is on a scenario step.
    #[must_use]
    pub fn current_scenario(&self) -> Option<&'static Scenario> {
        self.step.scenario_index().map(|i| &SCENARIOS[i])
    }

    #[must_use]
    pub fn pattern(&self) -> &'static TrustPattern {
        classify_pattern(&self.responses)
    }

    fn expect(&self, step: TrustStep, action: &str) -> Result<(), ContentError> {
        if self.step == step {
            Ok(())
        } else {
            Err(ContentError::InvalidTransition {
                step: self.step.to_string(),
                action: action.to_string(),
            })
        }
    }

    /// # Errors
    ///
    /// [`ContentError::InvalidTransition`] unless on the opening step.
    pub fn begin(&mut self) -> Result<(), ContentError> {
        self.expect(TrustStep::Opening, "begin")?;
        self.step = TrustStep::Scenario1;
        Ok(())
    }

    /// Answer the current scenario with the option at `choice` (zero-based).
    ///
    /// # Errors
    ///
    /// [`ContentError::InvalidTransition`] when not on a scenario step, or
    /// [`ContentError::UnknownChoice`] when `choice` is out of range.
    pub fn respond(&mut self, choice: usize) -> Result<&TrustResponse, ContentError> {
        let scenario = self
            .current_scenario()
            .ok_or_else(|| ContentError::InvalidTransition {
                step: self.step.to_string(),
                action: "respond".to_string(),
            })?;
        let picked = scenario
            .options
            .get(choice)
            .ok_or_else(|| ContentError::UnknownChoice {
                scenario: scenario.id.to_string(),
                choice,
            })?;

        self.responses.push(TrustResponse {
            scenario: scenario.id.to_string(),
            choice: picked.text.to_string(),
            reveals: picked.reveals.to_string(),
        });
        self.step = match self.step {
            TrustStep::Scenario1 => TrustStep::Scenario2,
            TrustStep::Scenario2 => TrustStep::Scenario3,
            _ => TrustStep::Reflection,
        };
        tracing::debug!(scenario = scenario.id, reveals = picked.reveals, "trust response");
        Ok(&self.responses[self.responses.len() - 1])
    }

    /// # Errors
    ///
    /// [`ContentError::InvalidTransition`] unless on the reflection step.
    pub fn reflect(&mut self) -> Result<&'static TrustPattern, ContentError> {
        self.expect(TrustStep::Reflection, "reflect")?;
        self.step = TrustStep::Recognition;
        Ok(self.pattern())
    }

    /// # Errors
    ///
    /// [`ContentError::InvalidTransition`] unless on the recognition step.
    pub fn recognize(&mut self, recognized: bool) -> Result<(), ContentError> {
        self.expect(TrustStep::Recognition, "recognize")?;
        self.recognized = Some(recognized);
        self.step = TrustStep::Invitation;
        Ok(())
    }

    /// # Errors
    ///
    /// [`ContentError::InvalidTransition`] unless on the invitation step.
    pub fn go_deeper(&mut self) -> Result<(), ContentError> {
        self.expect(TrustStep::Invitation, "go deeper")?;
        self.step = TrustStep::Deeper;
        Ok(())
    }
}
