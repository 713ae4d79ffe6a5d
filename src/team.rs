//! Balanced team selection.
//!
//! A team is *balanced* when no member is more efficient than any two other
//! members combined. Over players sorted by efficiency, a contiguous window
//! `[l..=r]` is balanced iff it has at most two players or
//! `e[l] + e[l + 1] >= e[r]`: the two weakest members must cover the strongest.
//!
//! Because the left bound of the best balanced window only ever moves right as
//! the right bound grows, a single sliding-window pass finds the window with
//! the largest total efficiency.
//!
//! ```
//! use wildscan::team::select_team;
//!
//! let team = select_team(&[3, 2, 5, 4, 1])?;
//! assert_eq!(team.total_efficiency(), 14);
//! assert_eq!(team.member_ids(), vec![1, 2, 3, 4]);
//! # Ok::<(), wildscan::WildscanError>(())
//! ```

use crate::error::WildscanError;
use crate::tokens::TokenScanner;
use serde::Serialize;
use std::io::BufRead;

/// A player with its 1-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    /// 1-based input order
    pub id: usize,
    /// Efficiency score
    pub efficiency: u64,
}

/// The selected team, members ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    members: Vec<Player>,
    total_efficiency: u128,
}

impl Team {
    /// Members ordered by id.
    pub fn members(&self) -> &[Player] {
        &self.members
    }

    /// Ids of the members, ascending.
    pub fn member_ids(&self) -> Vec<usize> {
        self.members.iter().map(|p| p.id).collect()
    }

    /// Sum of member efficiencies.
    pub fn total_efficiency(&self) -> u128 {
        self.total_efficiency
    }
}

/// Picks the balanced team with the highest total efficiency.
///
/// Ties go to the team found first, i.e. the one made of weaker players.
///
/// # Errors
///
/// [`WildscanError::EmptyInput`] if there are no players.
pub fn select_team(efficiencies: &[u64]) -> Result<Team, WildscanError> {
    if efficiencies.is_empty() {
        return Err(WildscanError::EmptyInput("no players".to_string()));
    }

    let mut players: Vec<Player> = efficiencies
        .iter()
        .enumerate()
        .map(|(index, &efficiency)| Player {
            id: index + 1,
            efficiency,
        })
        .collect();
    players.sort_by_key(|p| p.efficiency);

    let e = |i: usize| players[i].efficiency as u128;

    let mut left = 0;
    let mut window_sum: u128 = 0;
    let mut best = (0, 0, 0u128);

    for right in 0..players.len() {
        window_sum += e(right);
        while right - left >= 2 && e(left) + e(left + 1) < e(right) {
            window_sum -= e(left);
            left += 1;
        }
        if right == 0 || window_sum > best.2 {
            best = (left, right, window_sum);
        }
    }

    let (first, last, total_efficiency) = best;
    let mut members = players[first..=last].to_vec();
    members.sort_by_key(|p| p.id);

    log::debug!(
        "selected {} of {} players, total efficiency {}",
        members.len(),
        players.len(),
        total_efficiency
    );

    Ok(Team {
        members,
        total_efficiency,
    })
}

/// Reads a player count followed by that many efficiencies.
pub fn read_efficiencies<R: BufRead>(
    tokens: &mut TokenScanner<R>,
) -> Result<Vec<u64>, WildscanError> {
    let count: usize = tokens.expect_parse("player count")?;
    (0..count)
        .map(|i| tokens.expect_parse(&format!("efficiency of player {}", i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the balance rule directly on a selected team.
    fn is_balanced(team: &Team) -> bool {
        let mut e: Vec<u128> = team
            .members()
            .iter()
            .map(|p| p.efficiency as u128)
            .collect();
        e.sort_unstable();
        e.len() <= 2 || e[0] + e[1] >= e[e.len() - 1]
    }

    #[test]
    fn test_single_player() {
        let team = select_team(&[7]).unwrap();
        assert_eq!(team.total_efficiency(), 7);
        assert_eq!(team.member_ids(), vec![1]);
    }

    #[test]
    fn test_everyone_balanced() {
        let team = select_team(&[3, 2, 5, 4, 1]).unwrap();
        assert_eq!(team.total_efficiency(), 14);
        assert_eq!(team.member_ids(), vec![1, 2, 3, 4]);
        assert!(is_balanced(&team));
    }

    #[test]
    fn test_star_player_pairs_with_strongest_helper() {
        let team = select_team(&[1, 1, 1, 100]).unwrap();
        assert_eq!(team.total_efficiency(), 101);
        assert_eq!(team.member_ids(), vec![3, 4]);
    }

    #[test]
    fn test_many_weak_players_beat_one_pair() {
        let team = select_team(&[10, 10, 10, 10, 10, 21]).unwrap();
        // 10 + 21 = 31 for the best pair; the five tens give 50
        assert_eq!(team.total_efficiency(), 50);
        assert_eq!(team.member_ids(), vec![1, 2, 3, 4, 5]);
        assert!(is_balanced(&team));
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let team = select_team(&[u64::MAX, u64::MAX, u64::MAX]).unwrap();
        assert_eq!(team.total_efficiency(), u64::MAX as u128 * 3);
    }

    #[test]
    fn test_zero_efficiencies() {
        let team = select_team(&[0, 0, 0]).unwrap();
        assert_eq!(team.total_efficiency(), 0);
        assert_eq!(team.member_ids(), vec![1]);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(select_team(&[]), Err(WildscanError::EmptyInput(_))));
    }

    #[test]
    fn test_read_efficiencies() {
        let mut tokens = TokenScanner::new(&b"3\n5 1 4\n"[..]);
        assert_eq!(read_efficiencies(&mut tokens).unwrap(), vec![5, 1, 4]);

        let mut tokens = TokenScanner::new(&b"3\n5 1\n"[..]);
        assert!(matches!(
            read_efficiencies(&mut tokens),
            Err(WildscanError::EmptyInput(_))
        ));

        let mut tokens = TokenScanner::new(&b"2\n5 -1\n"[..]);
        assert!(matches!(
            read_efficiencies(&mut tokens),
            Err(WildscanError::InvalidInput(_))
        ));
    }
}
