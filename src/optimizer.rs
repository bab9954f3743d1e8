//! Lineup optimization: assigns players to roster slots to maximize an
//! aggregate score under per-slot capacity constraints.
//!
//! The assignment is a deterministic greedy pass, not an exact matching:
//! players are ranked by the requested scoring attribute (ties broken by
//! player key) and each is placed into the most capacity-constrained
//! still-open eligible slot. Slot eligibility and the specific-before-flex
//! preference live behind [`SlotPolicy`], so the priority rule can be
//! swapped without touching the assignment loop.

use crate::constants::slots;
use crate::fetcher::models::{
    PlayerRecord, PositionCapacityMap, RankingCriterion, SimplePlayer,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Decides which slots a player may fill and how general each slot is.
pub trait SlotPolicy {
    /// Whether a player with the given eligible positions may fill `slot`.
    fn is_eligible(&self, slot: &str, eligible_positions: &[String]) -> bool;

    /// How many natural positions the slot admits. Used to prefer specific
    /// slots over flex slots when remaining capacities tie, keeping the
    /// shared slots open for players whose natural slots fill up.
    fn generality(&self, slot: &str) -> usize;
}

/// Standard hockey slots: natural positions match directly, `F` admits any
/// forward and `UTIL` admits any skater.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSlotPolicy;

impl SlotPolicy for StandardSlotPolicy {
    fn is_eligible(&self, slot: &str, eligible_positions: &[String]) -> bool {
        match slot {
            slots::FORWARD_FLEX => eligible_positions
                .iter()
                .any(|p| matches!(p.as_str(), "C" | "LW" | "RW")),
            slots::UTILITY => eligible_positions.iter().any(|p| p != slots::GOALIE),
            _ => eligible_positions.iter().any(|p| p == slot),
        }
    }

    fn generality(&self, slot: &str) -> usize {
        match slot {
            slots::FORWARD_FLEX => 3,
            slots::UTILITY => 5,
            _ => 1,
        }
    }
}

/// One filled slot in an optimized lineup.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupSlot {
    /// Label of the slot the player fills (`BN` for bench)
    pub slot: String,
    pub player: PlayerRecord,
}

/// An optimized lineup: starters and bench in assignment order. A player
/// never appears twice.
#[derive(Debug, Clone, Default)]
pub struct Lineup {
    pub slots: Vec<LineupSlot>,
}

impl Lineup {
    /// Starting assignments (everything except the bench).
    pub fn starters(&self) -> impl Iterator<Item = &LineupSlot> {
        self.slots.iter().filter(|s| s.slot != slots::BENCH)
    }

    /// Bench assignments.
    pub fn bench(&self) -> impl Iterator<Item = &LineupSlot> {
        self.slots.iter().filter(|s| s.slot == slots::BENCH)
    }

    /// Simplified projection with each player labeled by the slot they fill.
    pub fn to_simple_players(&self) -> Vec<SimplePlayer> {
        self.slots
            .iter()
            .map(|s| SimplePlayer {
                position: s.slot.clone(),
                name: s.player.name.clone(),
                moved: s.player.moved,
            })
            .collect()
    }
}

/// Computes a best-effort lineup maximizing `criterion` subject to slot
/// capacities and eligibility.
///
/// Players are processed in descending score order with ties broken by
/// player key, so the result is fully deterministic for a given input.
/// Each player goes to the eligible open starting slot with the fewest
/// remaining openings (ties: the less general slot, then the
/// lexicographically first); when no starting slot remains they go to the
/// bench while its capacity lasts, and beyond that they are excluded.
pub fn optimize_lineup_by_attribute(
    players: &[PlayerRecord],
    criterion: RankingCriterion,
    capacities: &PositionCapacityMap,
    policy: &impl SlotPolicy,
) -> Lineup {
    let mut ranked: Vec<&PlayerRecord> = players.iter().collect();
    ranked.sort_by(|a, b| {
        b.score(criterion)
            .partial_cmp(&a.score(criterion))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.player_key.cmp(&b.player_key))
    });

    // Remaining openings per starting slot; BTreeMap iteration order gives
    // the lexicographic tie-break for free.
    let mut open: BTreeMap<&str, u32> = capacities
        .iter()
        .filter(|(label, _)| label.as_str() != slots::BENCH)
        .map(|(label, count)| (label.as_str(), *count))
        .collect();
    // None means an unbounded bench
    let mut bench_remaining: Option<u32> = capacities.get(slots::BENCH).copied();

    let mut lineup = Lineup::default();
    for player in ranked {
        let chosen = open
            .iter()
            .filter(|(label, remaining)| {
                **remaining > 0 && policy.is_eligible(label, &player.eligible_positions)
            })
            .min_by_key(|(label, remaining)| (**remaining, policy.generality(label)))
            .map(|(label, _)| *label);

        if let Some(label) = chosen {
            if let Some(remaining) = open.get_mut(label) {
                *remaining -= 1;
            }
            lineup.slots.push(LineupSlot {
                slot: label.to_string(),
                player: player.clone(),
            });
            continue;
        }

        match bench_remaining.as_mut() {
            Some(0) => {
                debug!(
                    "Excluding {} from the lineup: no eligible slot and bench is full",
                    player.player_key
                );
            }
            Some(remaining) => {
                *remaining -= 1;
                lineup.slots.push(LineupSlot {
                    slot: slots::BENCH.to_string(),
                    player: player.clone(),
                });
            }
            None => {
                lineup.slots.push(LineupSlot {
                    slot: slots::BENCH.to_string(),
                    player: player.clone(),
                });
            }
        }
    }

    lineup
}
