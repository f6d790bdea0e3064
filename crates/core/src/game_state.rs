//! Game controller - session state and the tick/input state machine
//!
//! [`Game`] owns the score, the upcoming block, the playing/paused flags, the
//! tick speed and the commit-pending flag, and translates timer ticks and key
//! events into [`BoardAction`]s.
//!
//! # Tick handling
//!
//! 1. A pending commit is processed and nothing else happens that tick.
//! 2. If the piece cannot move down, the tick speed switches to `Sliding` and
//!    a commit is marked pending. The player gets one fast tick to slide the
//!    piece sideways.
//! 3. Otherwise the piece descends one row.
//!
//! Commit processing re-checks whether the piece is still grounded: if a
//! sideways move freed the column below, the commit is abandoned and normal
//! descent resumes.
//!
//! The controller never reads a clock. Something else (see the engine crate)
//! calls [`Game::tick`] at the period given by [`Game::tick_speed`].

use tracing::{debug, info};

use crate::board_state::{ActivePiece, BoardAction, BoardState};
use crate::keys::HeldKeys;
use crate::pieces::shape_of;
use crate::rng::{BlockSource, RandomBlocks};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, or paused
    Idle,
    /// The piece moved down one row
    Descended,
    /// The piece is grounded; the next tick commits it
    Sliding,
    /// The piece was free to fall again, commit abandoned
    CommitAborted,
    /// The piece was committed and `cleared` rows were removed
    Committed { cleared: usize },
    /// The upcoming block cannot spawn; play stopped
    GameOver,
}

/// Complete game session.
#[derive(Debug, Clone)]
pub struct Game<S = RandomBlocks> {
    board: BoardState,
    blocks: S,
    held: HeldKeys,
    score: u32,
    upcoming: Option<Block>,
    playing: bool,
    paused: bool,
    committing: bool,
    tick_speed: Option<TickSpeed>,
}

impl Game<RandomBlocks> {
    /// Create an idle game drawing blocks from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomBlocks::new(seed))
    }
}

impl<S: BlockSource> Game<S> {
    /// Create an idle game (not playing, timer stopped)
    pub fn new(blocks: S) -> Self {
        Self {
            board: BoardState::new(),
            blocks,
            held: HeldKeys::new(),
            score: 0,
            upcoming: None,
            playing: false,
            paused: false,
            committing: false,
            tick_speed: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn upcoming(&self) -> Option<Block> {
        self.upcoming
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_committing(&self) -> bool {
        self.committing
    }

    /// Current cadence; `None` means the timer should not fire
    pub fn tick_speed(&self) -> Option<TickSpeed> {
        self.tick_speed
    }

    pub fn board_state(&self) -> &BoardState {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        self.board.active()
    }

    /// Reset the session and start a new game
    pub fn start(&mut self) {
        self.score = 0;
        self.upcoming = Some(self.blocks.next_block());
        self.committing = false;
        self.playing = true;
        self.paused = false;
        self.tick_speed = Some(TickSpeed::Normal);
        self.dispatch(BoardAction::Start);
        info!(
            active = self.active().block.as_str(),
            upcoming = ?self.upcoming,
            "game started"
        );
    }

    /// Flip the paused flag. Ticks and keys have no effect while paused.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// End play, keeping the score readable
    pub fn stop(&mut self) {
        self.playing = false;
        self.paused = false;
        self.upcoming = None;
        info!(score = self.score, "game stopped");
    }

    /// Dispatch a control intent
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Start => self.start(),
            Intent::TogglePause => self.toggle_pause(),
            Intent::Stop => self.stop(),
        }
    }

    /// Advance the game by one timer tick
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing || self.paused {
            return TickOutcome::Idle;
        }

        if self.committing {
            self.commit_position()
        } else if !self.board.can_descend() {
            self.tick_speed = Some(TickSpeed::Sliding);
            self.committing = true;
            TickOutcome::Sliding
        } else {
            self.dispatch(BoardAction::Descend);
            TickOutcome::Descended
        }
    }

    fn commit_position(&mut self) -> TickOutcome {
        if self.board.can_descend() {
            self.committing = false;
            self.tick_speed = Some(TickSpeed::Normal);
            debug!(col = self.active().col, "commit aborted, piece free to fall");
            return TickOutcome::CommitAborted;
        }

        let next_block = match self.upcoming {
            Some(block) => block,
            None => self.blocks.next_block(),
        };

        let spawn = shape_of(next_block);
        if self.board.board().has_collision(SPAWN_ROW, SPAWN_COLUMN, &spawn) {
            self.playing = false;
            self.committing = false;
            self.tick_speed = None;
            info!(score = self.score, "game over");
            return TickOutcome::GameOver;
        }

        let (cleared_board, cleared) = self.board.rendered().clear_full_rows();
        self.score = self
            .score
            .saturating_add(ROW_CLEAR_POINTS * cleared as u32);
        self.upcoming = Some(self.blocks.next_block());
        self.tick_speed = Some(TickSpeed::Normal);

        self.dispatch(BoardAction::Commit {
            board: cleared_board.pad_to_height(BOARD_HEIGHT),
            block: next_block,
        });
        self.committing = false;

        debug!(
            cleared,
            score = self.score,
            next = next_block.as_str(),
            "piece committed"
        );
        TickOutcome::Committed { cleared }
    }

    /// Key-down. Returns `true` if the key changed the game.
    ///
    /// Only the first press of a held key counts; auto-repeat is ignored.
    pub fn key_down(&mut self, key: Key) -> bool {
        if !self.held.press(key) {
            return false;
        }
        if !self.playing || self.paused {
            return false;
        }

        match key {
            Key::Down => self.tick_speed = Some(TickSpeed::Fast),
            Key::Up => self.dispatch(BoardAction::rotate()),
            Key::Left => self.dispatch(BoardAction::left()),
            Key::Right => self.dispatch(BoardAction::right()),
        }
        true
    }

    /// Key-up. Releasing the down key restores normal speed.
    pub fn key_up(&mut self, key: Key) -> bool {
        let was_held = self.held.release(key);
        if !self.playing || self.paused {
            return false;
        }

        if key == Key::Down {
            self.tick_speed = Some(TickSpeed::Normal);
            return was_held;
        }
        false
    }

    /// Render projection: the board with the falling piece while playing
    pub fn snapshot(&self) -> GameSnapshot {
        let board = if self.playing {
            self.board.rendered()
        } else {
            self.board.board().clone()
        };

        GameSnapshot {
            board,
            score: self.score,
            upcoming: self.upcoming,
            playing: self.playing,
            paused: self.paused,
        }
    }

    fn dispatch(&mut self, action: BoardAction) {
        let state = std::mem::take(&mut self.board);
        self.board = state.apply(action, &mut self.blocks);
    }

    /// Replace the board state, e.g. to set up a position
    pub fn set_board_state(&mut self, state: BoardState) {
        self.board = state;
    }
}

impl Default for Game<RandomBlocks> {
    fn default() -> Self {
        Self::new(RandomBlocks::default())
    }
}
