use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{EVENT_POOL_MAX, EVENT_POOL_MIN};

const DEFAULT_EVENTS_DATA: &str = include_str!("../data/events.json");

/// Stat deltas and flag grants applied by one resolved branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Effects {
    #[serde(default)]
    pub money: i32,
    #[serde(default)]
    pub coding_skill: i32,
    #[serde(default)]
    pub hatred: i32,
    /// Added to the ledger's daily passive income, not to money directly.
    #[serde(default)]
    pub daily_income: i32,
    #[serde(default)]
    pub automation: bool,
    #[serde(default)]
    pub bootcamp: bool,
}

/// Narrative text plus the effects that land with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBranch {
    pub text: String,
    #[serde(default)]
    pub effects: Effects,
}

/// How a selected choice resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Deterministic resolution.
    Flat {
        text: String,
        #[serde(default)]
        effects: Effects,
    },
    /// Fixed percentage branch, e.g. the 80/20 splits.
    Chance {
        pct: i32,
        success: EventBranch,
        failure: EventBranch,
    },
    /// Success chance scales with coding skill: `min(100, skill * 2)`.
    SkillCheck {
        success: EventBranch,
        failure: EventBranch,
    },
}

/// A choice offered inside an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    pub label: String,
    pub outcome: Outcome,
}

/// A one-time narrative vignette in the random pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDef {
    pub id: String,
    pub title: String,
    pub text: String,
    pub choices: Vec<EventChoice>,
    /// When set, firing this event costs the player an extra day.
    #[serde(default)]
    pub consumes_day: bool,
}

/// Container for the full random-event roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventSet {
    pub events: Vec<EventDef>,
}

/// Errors raised when event data violates roster invariants.
#[derive(Debug, Error)]
pub enum EventDataError {
    #[error("event json malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event roster must hold between {min} and {max} entries (got {found})")]
    PoolSize {
        found: usize,
        min: usize,
        max: usize,
    },
    #[error("duplicate event id {id:?}")]
    DuplicateEvent { id: String },
    #[error("event {id:?} offers no choices")]
    NoChoices { id: String },
    #[error("event {id:?} chance {pct} outside 0..=100")]
    ChanceRange { id: String, pct: i32 },
}

impl EventSet {
    /// Create an empty roster (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Parse and validate a roster from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the roster violates
    /// the documented invariants.
    pub fn from_json(json: &str) -> Result<Self, EventDataError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Parse and validate the roster shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is malformed; that is a bug in
    /// the shipped assets, not a runtime condition.
    pub fn load_default() -> Result<Self, EventDataError> {
        Self::from_json(DEFAULT_EVENTS_DATA)
    }

    /// Shared copy of the shipped roster.
    #[must_use]
    pub fn default_set() -> &'static Self {
        static SET: OnceLock<EventSet> = OnceLock::new();
        SET.get_or_init(|| Self::load_default().unwrap_or_else(|_| Self::empty()))
    }

    /// Check roster invariants: size bounds, unique ids, well-formed
    /// choices and chances.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), EventDataError> {
        if !(EVENT_POOL_MIN..=EVENT_POOL_MAX).contains(&self.events.len()) {
            return Err(EventDataError::PoolSize {
                found: self.events.len(),
                min: EVENT_POOL_MIN,
                max: EVENT_POOL_MAX,
            });
        }
        let mut seen = HashSet::new();
        for event in &self.events {
            if !seen.insert(event.id.as_str()) {
                return Err(EventDataError::DuplicateEvent {
                    id: event.id.clone(),
                });
            }
            if event.choices.is_empty() {
                return Err(EventDataError::NoChoices {
                    id: event.id.clone(),
                });
            }
            for choice in &event.choices {
                if let Outcome::Chance { pct, .. } = &choice.outcome
                    && !(0..=100).contains(pct)
                {
                    return Err(EventDataError::ChanceRange {
                        id: event.id.clone(),
                        pct: *pct,
                    });
                }
            }
        }
        Ok(())
    }

    /// Ids of every event in roster order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.events.iter().map(|e| e.id.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EventDef> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
