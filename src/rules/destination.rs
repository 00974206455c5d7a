//! Destination rules: checked once, at commit, against the final position.

use crate::core::Coord;

use super::rule::{DestinationCheck, DestinationRule, RuleContext, RuleId};

/// Final position is neutral or belongs to the mover's pair.
pub fn no_enemy_finishing(ctx: &RuleContext<'_>, at: Coord) -> bool {
    ctx.topology.get(at).is_friendly_to(ctx.mover)
}

/// Standard destination rules, in evaluation order.
pub fn standard() -> Vec<DestinationRule> {
    vec![DestinationRule::new(
        RuleId::NoEnemyFinishing,
        "Can not finish in enemy territory",
        no_enemy_finishing as DestinationCheck,
    )]
}
