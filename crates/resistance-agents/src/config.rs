//! Tunable constants for the agent's belief updates and decision policies.
//!
//! The [`AgentConfig`] struct bundles every threshold, increment, and
//! probability the agent uses so that callers (the host configuration
//! loader, tests) can override defaults. It deserializes from the `agent`
//! section of `resistance-config.yaml`; missing keys fall back to the
//! defaults below.

use serde::Deserialize;

use crate::error::AgentError;

/// Configuration for suspicion bookkeeping and decision policies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Suspicion above which a player is confirmed as an infiltrator
    /// after a failed mission (default: 0.7).
    pub confirm_threshold: f64,

    /// Suspicion added to each team member who approved their own team
    /// (default: 0.05).
    pub approval_bump: f64,

    /// Suspicion removed from each unconfirmed member of a successful
    /// mission (default: 0.1).
    pub success_relief: f64,

    /// Mean team suspicion a loyalist tolerates with no failed missions
    /// (default: 0.3).
    pub base_vote_threshold: f64,

    /// Added to the loyalist vote threshold per failed mission (default: 0.1).
    pub vote_threshold_step: f64,

    /// Chance an infiltrator approves a team with no infiltrator on it
    /// (default: 0.6).
    pub infiltrator_approve_chance: f64,

    /// Chance an infiltrator betrays when no other rule applies (default: 0.3).
    pub noise_betray_chance: f64,

    /// Successes or failures at which the game is one mission from being
    /// decided and infiltrators always betray (default: 2).
    pub critical_mission_count: u32,

    /// Post-game suspicion shift an infiltrator applies to allies on past
    /// missions (default: 0.3).
    pub endgame_bluff_adjustment: f64,

    /// Post-game suspicion a losing loyalist adds to members of failed
    /// missions (default: 0.3).
    pub endgame_blame: f64,

    /// Post-game suspicion a winning loyalist removes from cleared players
    /// (default: 0.2).
    pub endgame_exoneration: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            confirm_threshold: 0.7,
            approval_bump: 0.05,
            success_relief: 0.1,
            base_vote_threshold: 0.3,
            vote_threshold_step: 0.1,
            infiltrator_approve_chance: 0.6,
            noise_betray_chance: 0.3,
            critical_mission_count: 2,
            endgame_bluff_adjustment: 0.3,
            endgame_blame: 0.3,
            endgame_exoneration: 0.2,
        }
    }
}

impl AgentConfig {
    /// Check that every probability lies in [0.0, 1.0] and every
    /// increment is finite and non-negative.
    pub fn validate(&self) -> Result<(), AgentError> {
        let unit_values = [
            ("confirm_threshold", self.confirm_threshold),
            ("infiltrator_approve_chance", self.infiltrator_approve_chance),
            ("noise_betray_chance", self.noise_betray_chance),
        ];
        for (name, value) in unit_values {
            if !(0.0..=1.0).contains(&value) {
                return Err(AgentError::InvalidConfig {
                    reason: format!("{name} must be within [0.0, 1.0], got {value}"),
                });
            }
        }

        let increments = [
            ("approval_bump", self.approval_bump),
            ("success_relief", self.success_relief),
            ("base_vote_threshold", self.base_vote_threshold),
            ("vote_threshold_step", self.vote_threshold_step),
            ("endgame_bluff_adjustment", self.endgame_bluff_adjustment),
            ("endgame_blame", self.endgame_blame),
            ("endgame_exoneration", self.endgame_exoneration),
        ];
        for (name, value) in increments {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentError::InvalidConfig {
                    reason: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Mean team suspicion a loyalist tolerates after `failed_missions`
    /// failures.
    pub fn vote_threshold(&self, failed_missions: u32) -> f64 {
        self.vote_threshold_step
            .mul_add(f64::from(failed_missions), self.base_vote_threshold)
    }
}
