//! Action selection from a final ranking.

use curator_core::Action;

/// Decide what to do with a post given the ranking after the keep-current
/// override.
///
/// - `Keep` when `current` is first. After the override this covers both a
///   strict lead and a tie for the lead.
/// - `Eval` when another topic is first and the first two entries tie:
///   several topics beat `current` equally and a person has to pick one.
/// - `Move` when a single topic strictly beats every other, `current` included.
pub fn decide(order: &[usize], scores: &[u32], current: usize) -> Action {
    let leader = match order.first() {
        Some(&leader) if leader != current => leader,
        _ => return Action::Keep,
    };
    match order.get(1) {
        Some(&runner_up) if scores[runner_up] == scores[leader] => Action::Eval,
        _ => Action::Move,
    }
}
