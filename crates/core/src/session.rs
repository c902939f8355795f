//! Match session: turn order and running score across rounds.

use tracing::info;

use crate::grid::Grid;
use crate::policy::InputPolicy;
use crate::rules::WinRule;
use crate::types::{ArrayPos, Mark, Verdict};

/// Rounds won per player and rounds drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub player1: u32,
    pub player2: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Player1Wins => self.player1 += 1,
            Verdict::Player2Wins => self.player2 += 1,
            Verdict::Draw => self.draws += 1,
            Verdict::NoWinnerYet => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.player1 + self.player2 + self.draws
    }
}

/// Two players alternating on one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    turn: Mark,
    opener: Mark,
    verdict: Verdict,
    tally: Tally,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Cross opens the first round.
    pub fn new() -> Self {
        Self {
            turn: Mark::Cross,
            opener: Mark::Cross,
            verdict: Verdict::NoWinnerYet,
            tally: Tally::default(),
        }
    }

    /// Mark to be placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Place the current player's mark.
    ///
    /// Returns false if the round is already decided or the grid rejected
    /// the placement; the turn only passes on an accepted move that does
    /// not end the round.
    pub fn play<R: WinRule, P: InputPolicy>(
        &mut self,
        grid: &mut Grid<R, P>,
        pos: ArrayPos,
    ) -> bool {
        if self.verdict.is_final() || !grid.add(self.turn, pos) {
            return false;
        }
        self.verdict = grid.update_score();
        if self.verdict.is_final() {
            self.tally.record(self.verdict);
            info!(verdict = ?self.verdict, filled = grid.filled(), "round over");
        } else {
            self.turn = self.turn.opponent();
        }
        true
    }

    /// Clear the grid and start another round; the opening mark alternates.
    pub fn next_round<R: WinRule, P: InputPolicy>(&mut self, grid: &mut Grid<R, P>) {
        grid.reset();
        self.opener = self.opener.opponent();
        self.turn = self.opener;
        self.verdict = Verdict::NoWinnerYet;
    }
}
