//! Destination arithmetic for a single marble.

use super::occupancy::Occupancy;
use super::topology::{is_safe_space, safe_space, BOARD_SIZE};
use crate::core::player::PlayerId;

/// Where a marble at `current` lands after moving `distance` cells, or
/// `None` if the move is illegal.
///
/// ## Rules
///
/// - **Inside the own safe space**: moves forward only, never past the deepest
///   slot, and may not pass or land on any marble.
/// - **Reaching the own safe-space entry**: a forward move whose path touches
///   the entry cell is legal only if it ends exactly there. Overshooting fails;
///   the marble cannot slip past its own entrance.
/// - **Plain track move**: wraps modulo `BOARD_SIZE` and is blocked by any
///   marble on a passed cell or on the destination.
///
/// `occupied` must include the moving marble itself; it is never on its own
/// path so it does not block.
#[must_use]
pub fn calculate_destination(
    current: u8,
    distance: i8,
    player: PlayerId,
    occupied: &Occupancy,
) -> Option<u8> {
    if distance == 0 {
        return None;
    }

    if is_safe_space(player, current) {
        return move_within_safe_space(current, distance, player, occupied);
    }

    let steps = distance.unsigned_abs();
    let forward = distance > 0;

    if forward {
        let entry = safe_space(player)[0];
        if let Some(k) = (1..=steps).find(|&k| step(current, k, true) == entry) {
            return (k == steps && !occupied.is_occupied(entry)).then_some(entry);
        }
    }

    if (1..=steps).any(|k| occupied.is_occupied(step(current, k, forward))) {
        return None;
    }

    Some(step(current, steps, forward))
}

fn move_within_safe_space(
    current: u8,
    distance: i8,
    player: PlayerId,
    occupied: &Occupancy,
) -> Option<u8> {
    // No way back out of the safe space.
    if distance < 0 {
        return None;
    }

    let last = safe_space(player)[safe_space(player).len() - 1];
    let dest = current.checked_add(distance.unsigned_abs())?;
    if dest > last {
        return None;
    }

    if (current + 1..=dest).any(|pos| occupied.is_occupied(pos)) {
        return None;
    }

    Some(dest)
}

/// The cell `k` steps away from `from`, wrapping around the board.
fn step(from: u8, k: u8, forward: bool) -> u8 {
    let size = i16::from(BOARD_SIZE);
    let delta = if forward { i16::from(k) } else { -i16::from(k) };
    (i16::from(from) + delta).rem_euclid(size) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn occ(positions: &[u8]) -> Occupancy {
        Occupancy::from_positions(positions.iter().copied())
    }

    #[test]
    fn test_plain_forward_move() {
        assert_eq!(calculate_destination(3, 2, P0, &occ(&[3])), Some(5));
        assert_eq!(calculate_destination(20, 13, P0, &occ(&[20])), Some(33));
    }

    #[test]
    fn test_zero_distance_is_not_a_move() {
        assert_eq!(calculate_destination(3, 0, P0, &occ(&[3])), None);
    }

    #[test]
    fn test_destination_blocked_by_any_marble() {
        assert_eq!(calculate_destination(3, 2, P0, &occ(&[3, 5])), None);
    }

    #[test]
    fn test_path_blocked_by_any_marble() {
        assert_eq!(calculate_destination(3, 5, P0, &occ(&[3, 6])), None);
        // A marble just behind the destination still blocks
        assert_eq!(calculate_destination(3, 5, P0, &occ(&[3, 7])), None);
        // A marble past the destination does not
        assert_eq!(calculate_destination(3, 5, P0, &occ(&[3, 9])), Some(8));
    }

    #[test]
    fn test_backward_move() {
        assert_eq!(calculate_destination(10, -4, P0, &occ(&[10])), Some(6));
        assert_eq!(calculate_destination(10, -4, P0, &occ(&[10, 8])), None);
    }

    #[test]
    fn test_backward_move_wraps() {
        assert_eq!(calculate_destination(2, -4, P1, &occ(&[2])), Some(94));
    }

    #[test]
    fn test_exact_safe_space_entry() {
        assert_eq!(calculate_destination(63, 5, P0, &occ(&[63])), Some(68));
        assert_eq!(calculate_destination(60, 8, P0, &occ(&[60])), Some(68));
    }

    #[test]
    fn test_overshooting_entry_fails() {
        assert_eq!(calculate_destination(63, 6, P0, &occ(&[63])), None);
        assert_eq!(calculate_destination(60, 13, P0, &occ(&[60])), None);
    }

    #[test]
    fn test_entry_ignores_kennel_on_path() {
        // Seat 0's kennel lies between cell 63 and its safe-space entry.
        let board = occ(&[63, 64, 65, 66, 67]);
        assert_eq!(calculate_destination(63, 5, P0, &board), Some(68));
    }

    #[test]
    fn test_occupied_entry_fails() {
        assert_eq!(calculate_destination(63, 5, P0, &occ(&[63, 68])), None);
    }

    #[test]
    fn test_other_seat_entry_reached_by_wrap() {
        assert_eq!(calculate_destination(63, 13, P1, &occ(&[63])), Some(76));
    }

    #[test]
    fn test_wrap_past_board_end() {
        assert_eq!(calculate_destination(90, 10, P0, &occ(&[90])), Some(4));
        assert_eq!(calculate_destination(90, 10, P0, &occ(&[90, 0])), None);
    }

    #[test]
    fn test_safe_space_moves() {
        assert_eq!(calculate_destination(68, 3, P0, &occ(&[68])), Some(71));
        assert_eq!(calculate_destination(69, 1, P0, &occ(&[69])), Some(70));
    }

    #[test]
    fn test_safe_space_cannot_overflow() {
        assert_eq!(calculate_destination(69, 3, P0, &occ(&[69])), None);
        assert_eq!(calculate_destination(71, 1, P0, &occ(&[71])), None);
    }

    #[test]
    fn test_safe_space_cannot_overtake() {
        assert_eq!(calculate_destination(68, 2, P0, &occ(&[68, 69])), None);
        assert_eq!(calculate_destination(68, 1, P0, &occ(&[68, 69])), None);
    }

    #[test]
    fn test_safe_space_no_backward() {
        assert_eq!(calculate_destination(70, -4, P0, &occ(&[70])), None);
    }
}
