//! Transit rules: checked on every individual move attempt.
//!
//! Predicates never index outside the grid: topology and occupancy treat
//! out-of-bounds cells as forbidden and empty, so disabling `InBounds`
//! changes outcomes but cannot panic.

use crate::core::{Axis, Coord, Line};

use super::rule::{RuleContext, RuleId, TransitCheck, TransitRule};

/// Destination lies inside the grid.
pub fn in_bounds(ctx: &RuleContext<'_>, _from: Coord, to: Coord) -> bool {
    ctx.topology.in_bounds(to)
}

/// Destination is not forbidden terrain.
pub fn not_forbidden(ctx: &RuleContext<'_>, _from: Coord, to: Coord) -> bool {
    ctx.topology.get(to).is_playable()
}

/// Nothing may move after a single-step hop.
pub fn single_hop_is_final(ctx: &RuleContext<'_>, _from: Coord, _to: Coord) -> bool {
    !ctx.single_step_made
}

/// Same row, same column or anti-diagonal.
pub fn line(_ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
    [Axis::Row, Axis::Column, Axis::AntiDiagonal]
        .into_iter()
        .any(|axis| axis.contains(from, to))
}

/// Any of the four axis families, main diagonal included.
pub fn line_or_diagonal(_ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
    Axis::between(from, to).is_some()
}

/// Destination is empty.
pub fn unoccupied(ctx: &RuleContext<'_>, _from: Coord, to: Coord) -> bool {
    !ctx.occupancy.is_occupied(to)
}

/// At most one interior cell is occupied.
pub fn one_piece_over(ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
    let Some(line) = Line::between(from, to) else {
        return false;
    };
    line.interior
        .iter()
        .filter(|&&at| ctx.occupancy.is_occupied(at))
        .count()
        <= 1
}

/// Interior occupancy is mirror symmetric about the segment midpoint.
pub fn super_symmetry(ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
    let Some(line) = Line::between(from, to) else {
        return false;
    };
    let symmetric = line
        .mirrored_pairs()
        .all(|(near, far)| ctx.occupancy.is_occupied(near) == ctx.occupancy.is_occupied(far));
    symmetric
}

/// Jumps must pass over at least one piece. The only exception is the
/// turn's opening hop when it is a single step.
pub fn no_gaps(ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
    if ctx.hops == 0 && from.is_single_step(to) {
        return true;
    }
    Line::between(from, to).is_some_and(|line| {
        line.interior
            .iter()
            .any(|&at| ctx.occupancy.is_occupied(at))
    })
}

/// Destination terrain is neutral or belongs to the mover's pair.
pub fn no_enemy_landing(ctx: &RuleContext<'_>, _from: Coord, to: Coord) -> bool {
    ctx.topology.get(to).is_friendly_to(ctx.mover)
}

/// Standard transit rules, in evaluation order.
pub fn standard() -> Vec<TransitRule> {
    vec![
        TransitRule::new(
            RuleId::InBounds,
            "Can not move off the board",
            in_bounds as TransitCheck,
        )
        .required(),
        TransitRule::new(
            RuleId::NotForbidden,
            "Can not move out of bounds",
            not_forbidden as TransitCheck,
        )
        .required(),
        TransitRule::new(
            RuleId::SingleHopIsFinal,
            "Can not move after moving by only one spot",
            single_hop_is_final as TransitCheck,
        )
        .required(),
        TransitRule::new(RuleId::Line, "Must move in a line", line as TransitCheck),
        TransitRule::new(
            RuleId::LineOrDiagonal,
            "Must move in a line or along the diagonal",
            line_or_diagonal as TransitCheck,
        ),
        TransitRule::new(
            RuleId::Unoccupied,
            "Must land on an unoccupied slot",
            unoccupied as TransitCheck,
        ),
        TransitRule::new(
            RuleId::OnePieceOver,
            "Can not jump over multiple pieces in a jump",
            one_piece_over as TransitCheck,
        )
        .disabled(),
        TransitRule::new(
            RuleId::SuperSymmetry,
            "Move must be mirror symmetric",
            super_symmetry as TransitCheck,
        ),
        TransitRule::new(
            RuleId::NoGaps,
            "Can not cross gaps without jumping over a piece",
            no_gaps as TransitCheck,
        ),
        TransitRule::new(
            RuleId::NoEnemyLanding,
            "Can not land in enemy territory, even temporarily",
            no_enemy_landing as TransitCheck,
        )
        .disabled(),
    ]
}
