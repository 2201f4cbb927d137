//! Per-chain hit bookkeeping for trick-shot ricochets.

use std::collections::BTreeMap;

use crate::env::WorldView;
use crate::state::{ChainId, EntityId, Ticks};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ChainEntry {
    hits: BTreeMap<EntityId, u32>,
    max_hits_per_target: u32,
    previous: EntityId,
    idle_ticks: Ticks,
}

/// Open ricochet chains and the targets each one has struck.
///
/// Chain ids are allocated monotonically and never reused, so a target
/// capped in one chain is eligible again in the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainLedger {
    next_id: u64,
    chains: BTreeMap<ChainId, ChainEntry>,
}

impl ChainLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a chain whose first hit was on `initial`.
    pub fn start(&mut self, initial: EntityId, max_hits_per_target: u32) -> ChainId {
        let id = ChainId(self.next_id);
        self.next_id += 1;
        self.chains.insert(
            id,
            ChainEntry {
                hits: BTreeMap::from([(initial, 1)]),
                max_hits_per_target,
                previous: initial,
                idle_ticks: 0,
            },
        );
        id
    }

    /// Counts a hit. Returns the target's hit count in the chain, or `None`
    /// if the chain is closed.
    pub fn record_hit(&mut self, chain: ChainId, target: EntityId) -> Option<u32> {
        let entry = self.chains.get_mut(&chain)?;
        let count = entry.hits.entry(target).or_insert(0);
        *count += 1;
        entry.previous = target;
        entry.idle_ticks = 0;
        Some(*count)
    }

    pub fn hits(&self, chain: ChainId, target: EntityId) -> u32 {
        self.chains
            .get(&chain)
            .and_then(|entry| entry.hits.get(&target).copied())
            .unwrap_or(0)
    }

    /// Whether the chain may bounce to `target` next.
    pub fn is_eligible(&self, chain: ChainId, target: EntityId) -> bool {
        self.chains.get(&chain).is_some_and(|entry| {
            target != entry.previous
                && entry.hits.get(&target).copied().unwrap_or(0) < entry.max_hits_per_target
        })
    }

    pub fn end(&mut self, chain: ChainId) -> bool {
        self.chains.remove(&chain).is_some()
    }

    pub fn contains(&self, chain: ChainId) -> bool {
        self.chains.contains_key(&chain)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Ages every chain and closes those idle longer than `timeout`.
    pub fn tick(&mut self, timeout: Ticks) -> usize {
        let before = self.chains.len();
        self.chains.retain(|_, entry| {
            entry.idle_ticks += 1;
            entry.idle_ticks <= timeout
        });
        before - self.chains.len()
    }

    /// Forgets hits on targets that no longer exist.
    pub fn prune(&mut self, world: &dyn WorldView) {
        for entry in self.chains.values_mut() {
            entry.hits.retain(|id, _| world.is_live(*id));
        }
    }

    /// Drops every reference to `target`.
    pub fn forget(&mut self, target: EntityId) {
        for entry in self.chains.values_mut() {
            entry.hits.remove(&target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_target_is_excluded_until_a_new_chain() {
        let mut ledger = ChainLedger::new();
        let a = EntityId(1);
        let b = EntityId(2);
        let c = EntityId(3);

        let chain = ledger.start(a, 2);
        ledger.record_hit(chain, b);
        ledger.record_hit(chain, a);
        ledger.record_hit(chain, c);
        assert_eq!(ledger.hits(chain, a), 2);
        assert!(!ledger.is_eligible(chain, a));
        assert!(ledger.is_eligible(chain, b));

        let fresh = ledger.start(c, 2);
        assert_ne!(fresh, chain);
        assert!(ledger.is_eligible(fresh, a));
    }

    #[test]
    fn previous_target_is_never_eligible() {
        let mut ledger = ChainLedger::new();
        let chain = ledger.start(EntityId(1), 5);
        assert!(!ledger.is_eligible(chain, EntityId(1)));
    }

    #[test]
    fn idle_chains_time_out() {
        let mut ledger = ChainLedger::new();
        let chain = ledger.start(EntityId(1), 2);
        assert_eq!(ledger.tick(2), 0);
        assert_eq!(ledger.tick(2), 0);
        assert_eq!(ledger.tick(2), 1);
        assert!(!ledger.contains(chain));
        assert!(!ledger.is_eligible(chain, EntityId(2)));
    }
}
