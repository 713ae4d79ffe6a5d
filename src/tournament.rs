//! Tournament closure over a "who beat whom" graph.
//!
//! Every decisive game adds an edge from winner to loser. Players that beat
//! each other directly or transitively form a strongly connected component.
//! A component is *unbeaten* when nobody outside it has beaten any of its
//! members.
//!
//! The guaranteed team size is the smallest `k` such that every `k`-player team
//! includes a member of every unbeaten component. Any team that misses the
//! smallest unbeaten component (size `s`) has at most `n - s` players, and a
//! team of `n - s + 1` players cannot miss any component of size `s` or more,
//! so the answer is `n - s + 1`.
//!
//! Components are found with Kosaraju's algorithm, written with explicit
//! stacks so long chains of games cannot overflow the call stack.

use crate::error::WildscanError;
use crate::tokens::TokenScanner;
use std::io::BufRead;

/// Outcome code of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// First player won
    FirstWins,
    /// Second player won
    SecondWins,
    /// No winner
    Draw,
}

impl TryFrom<u8> for GameResult {
    type Error = WildscanError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(GameResult::FirstWins),
            2 => Ok(GameResult::SecondWins),
            3 => Ok(GameResult::Draw),
            _ => Err(WildscanError::InvalidInput(format!(
                "unknown game result {} (expected 1, 2 or 3)",
                code
            ))),
        }
    }
}

/// A game between two players, 1-based as in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    /// First player
    pub first: usize,
    /// Second player
    pub second: usize,
    /// Outcome
    pub result: GameResult,
}

/// Strongly connected components of a tournament graph.
#[derive(Debug, Clone)]
pub struct Components {
    /// Component index per player (0-based)
    component_of: Vec<usize>,
    /// Player count per component
    sizes: Vec<usize>,
    /// Whether nobody outside the component beat one of its members
    unbeaten: Vec<bool>,
}

impl Components {
    /// Number of components.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Component of a 0-based player.
    pub fn component_of(&self, player: usize) -> usize {
        self.component_of[player]
    }

    /// Size of a component.
    pub fn size(&self, component: usize) -> usize {
        self.sizes[component]
    }

    /// Whether a component is unbeaten from outside.
    pub fn is_unbeaten(&self, component: usize) -> bool {
        self.unbeaten[component]
    }

    /// Size of the smallest unbeaten component.
    pub fn smallest_unbeaten(&self) -> Option<usize> {
        (0..self.count())
            .filter(|&c| self.unbeaten[c])
            .map(|c| self.sizes[c])
            .min()
    }
}

/// Players and the decisive games between them.
#[derive(Debug, Clone)]
pub struct Tournament {
    /// `beats[w]` lists every player `w` has beaten (0-based)
    beats: Vec<Vec<usize>>,
}

impl Tournament {
    /// A tournament of `players` players and no games.
    pub fn new(players: usize) -> Self {
        Self {
            beats: vec![Vec::new(); players],
        }
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.beats.len()
    }

    /// Records a game; draws add no edge.
    ///
    /// # Errors
    ///
    /// [`WildscanError::InvalidInput`] if a player number is out of range.
    pub fn record(&mut self, game: Game) -> Result<(), WildscanError> {
        let players = self.player_count();
        for player in [game.first, game.second] {
            if player == 0 || player > players {
                return Err(WildscanError::InvalidInput(format!(
                    "player {} is out of range 1..={}",
                    player, players
                )));
            }
        }

        let (winner, loser) = match game.result {
            GameResult::FirstWins => (game.first, game.second),
            GameResult::SecondWins => (game.second, game.first),
            GameResult::Draw => return Ok(()),
        };
        self.beats[winner - 1].push(loser - 1);
        Ok(())
    }

    /// Computes strongly connected components and which are unbeaten.
    pub fn components(&self) -> Components {
        let n = self.player_count();
        let finish_order = self.finish_order();

        let mut beaten_by = vec![Vec::new(); n];
        for (winner, losers) in self.beats.iter().enumerate() {
            for &loser in losers {
                beaten_by[loser].push(winner);
            }
        }

        const UNASSIGNED: usize = usize::MAX;
        let mut component_of = vec![UNASSIGNED; n];
        let mut sizes = Vec::new();
        let mut stack = Vec::new();

        for &start in finish_order.iter().rev() {
            if component_of[start] != UNASSIGNED {
                continue;
            }
            let component = sizes.len();
            let mut size = 0;
            component_of[start] = component;
            stack.push(start);
            while let Some(player) = stack.pop() {
                size += 1;
                for &winner in &beaten_by[player] {
                    if component_of[winner] == UNASSIGNED {
                        component_of[winner] = component;
                        stack.push(winner);
                    }
                }
            }
            sizes.push(size);
        }

        let mut unbeaten = vec![true; sizes.len()];
        for (winner, losers) in self.beats.iter().enumerate() {
            for &loser in losers {
                if component_of[winner] != component_of[loser] {
                    unbeaten[component_of[loser]] = false;
                }
            }
        }

        log::debug!("{} players form {} components", n, sizes.len());

        Components {
            component_of,
            sizes,
            unbeaten,
        }
    }

    /// Post-order of an iterative depth-first search over the whole graph.
    fn finish_order(&self) -> Vec<usize> {
        let n = self.player_count();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        // (player, index of the next edge to follow)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            stack.push((start, 0));

            while let Some(top) = stack.last_mut() {
                let (player, next_edge) = *top;
                if let Some(&loser) = self.beats[player].get(next_edge) {
                    top.1 += 1;
                    if !visited[loser] {
                        visited[loser] = true;
                        stack.push((loser, 0));
                    }
                } else {
                    order.push(player);
                    stack.pop();
                }
            }
        }

        order
    }

    /// Smallest team size guaranteed to include a member of every unbeaten
    /// component.
    ///
    /// # Errors
    ///
    /// [`WildscanError::EmptyInput`] if there are no players.
    pub fn guaranteed_team_size(&self) -> Result<usize, WildscanError> {
        let n = self.player_count();
        if n == 0 {
            return Err(WildscanError::EmptyInput("no players".to_string()));
        }
        // The condensation of a non-empty graph always has a source component
        let smallest = self.components().smallest_unbeaten().unwrap_or(n);
        Ok(n - smallest + 1)
    }
}

/// Reads `players games` followed by `games` triples `first second result`.
pub fn read_tournament<R: BufRead>(
    tokens: &mut TokenScanner<R>,
) -> Result<Tournament, WildscanError> {
    let players: usize = tokens.expect_parse("player count")?;
    let games: usize = tokens.expect_parse("game count")?;

    let mut tournament = Tournament::new(players);
    for _ in 0..games {
        let first = tokens.expect_parse("first player")?;
        let second = tokens.expect_parse("second player")?;
        let result = GameResult::try_from(tokens.expect_parse::<u8>("game result")?)?;
        tournament.record(Game {
            first,
            second,
            result,
        })?;
    }
    Ok(tournament)
}
