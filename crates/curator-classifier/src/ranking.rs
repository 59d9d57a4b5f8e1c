//! Ranking and the keep-current override.

/// Topic indices ordered by descending score. The sort is stable, so equal
/// scores keep table order.
pub fn rank(scores: &[u32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    order
}

/// If the leader is not `current` but has the same score, swap `current`
/// into first place. Only the two swapped entries move.
///
/// Returns whether the override was applied.
pub fn apply_stability(order: &mut [usize], scores: &[u32], current: usize) -> bool {
    let Some(&leader) = order.first() else {
        return false;
    };
    if leader == current || scores[leader] != scores[current] {
        return false;
    }
    match order.iter().position(|&i| i == current) {
        Some(position) => {
            order.swap(0, position);
            true
        }
        None => false,
    }
}
