//! Hit handling: perk followups and ricochet chains.

use tracing::trace;

use super::CombatEngine;
use crate::perk::tuning::{right_choice, trick_shot};
use crate::ricochet::{nearest_target, nearest_targets};
use crate::stats::WeaponStats;
use crate::trigger::{
    ChainLink, CombatEffect, Followup, HitEvent, HitOrigin, Ricochet, dispatch,
};
use crate::weapon::WeaponInstance;

impl CombatEngine<'_> {
    /// Applies a reported hit and returns the effects it triggers.
    pub fn on_hit(&mut self, weapon: &mut WeaponInstance, hit: &HitEvent) -> Vec<CombatEffect> {
        let stats = self.resolve(weapon);
        let followups = dispatch::on_hit(
            &weapon.loadout,
            &mut weapon.timers,
            hit,
            stats.magazine_size,
        );

        let mut effects = Vec::new();
        if let HitOrigin::Chain(link) = hit.origin {
            self.continue_chain(link, hit, &mut effects);
        }
        for followup in followups {
            self.apply_followup(weapon, &stats, hit, followup, &mut effects);
        }
        effects
    }

    fn apply_followup(
        &mut self,
        weapon: &mut WeaponInstance,
        stats: &WeaponStats,
        hit: &HitEvent,
        followup: Followup,
        effects: &mut Vec<CombatEffect>,
    ) {
        let world = self.env.world;

        match followup {
            Followup::RefundAmmo(rounds) => {
                let refunded = weapon.magazine.refund(rounds, stats.magazine_size);
                if refunded > 0 {
                    effects.push(CombatEffect::AmmoRefunded { rounds: refunded });
                }
            }
            Followup::RightChoiceBounce => {
                let bounces = nearest_targets(
                    world,
                    hit.position,
                    right_choice::RANGE,
                    right_choice::BOUNCES as usize,
                    |id| id != hit.target,
                );
                effects.extend(bounces.into_iter().map(|(target, _)| {
                    CombatEffect::Ricochet(Ricochet {
                        chain: None,
                        origin: hit.position,
                        source: hit.target,
                        target,
                        remaining_bounces: 0,
                    })
                }));
            }
            Followup::StartChain => self.start_chain(hit, effects),
            Followup::Scorch(stacks) => {
                effects.extend(
                    self.state
                        .targets
                        .apply_scorch(hit.target, stacks, None, world),
                );
            }
            Followup::ScorchArea { radius, stacks } => {
                effects.extend(self.state.targets.scorch_area(
                    hit.position,
                    radius,
                    stacks,
                    hit.target,
                    world,
                ));
            }
            Followup::TagNanites => {
                self.state.targets.tag_nanites(hit.target);
            }
            Followup::ReleaseNanites => {
                let nanites = self.state.targets.release_nanites(hit.target);
                if nanites > 0 {
                    effects.push(CombatEffect::NaniteSwarm {
                        source: hit.target,
                        position: hit.position,
                        nanites,
                    });
                }
            }
            Followup::LodgeSlug(projectile) => {
                self.state.targets.lodge_slug(hit.target, projectile, hit.position);
            }
            Followup::TremorHit => {
                let required = weapon.archetype.profile().tremors_hits_required;
                self.state.targets.tremor_hit(hit.target, required);
            }
        }
    }

    fn start_chain(&mut self, hit: &HitEvent, effects: &mut Vec<CombatEffect>) {
        let chain = self
            .state
            .ledger
            .start(hit.target, trick_shot::MAX_HITS_PER_TARGET);
        let link = ChainLink {
            chain,
            remaining_bounces: trick_shot::CHAIN_BOUNCES,
        };
        self.bounce(link, hit, effects);
    }

    fn continue_chain(&mut self, link: ChainLink, hit: &HitEvent, effects: &mut Vec<CombatEffect>) {
        if self.state.ledger.record_hit(link.chain, hit.target).is_none() {
            trace!(chain = %link.chain, "hit reported for a closed chain");
            return;
        }
        self.bounce(link, hit, effects);
    }

    /// Spawns the next link of `link`'s chain, or closes the chain when it
    /// is spent or has nowhere to go.
    fn bounce(&mut self, link: ChainLink, hit: &HitEvent, effects: &mut Vec<CombatEffect>) {
        if link.remaining_bounces == 0 {
            self.state.ledger.end(link.chain);
            return;
        }

        let ledger = &self.state.ledger;
        let next = nearest_target(self.env.world, hit.position, trick_shot::RANGE, |id| {
            ledger.is_eligible(link.chain, id)
        });
        match next {
            Some((target, _)) => effects.push(CombatEffect::Ricochet(Ricochet {
                chain: Some(link.chain),
                origin: hit.position,
                source: hit.target,
                target,
                remaining_bounces: link.remaining_bounces - 1,
            })),
            None => {
                trace!(chain = %link.chain, "no eligible ricochet target");
                self.state.ledger.end(link.chain);
            }
        }
    }
}
