//! The game state machine.
//!
//! `GameState` owns one board and drives it through
//! placement → action → game over. Every command either succeeds or
//! returns a `RuleError` with the state untouched: all checks run before
//! the first mutation.
//!
//! ## Example
//!
//! ```
//! use wall_go::board::Side;
//! use wall_go::core::{GameConfig, Player};
//! use wall_go::game::{GameState, Phase};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! for (x, y) in [(3, 3), (0, 0), (6, 6), (3, 0)] {
//!     game.place_piece(x, y).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Action);
//! assert_eq!(game.current_player(), Player::Red);
//!
//! game.select_piece(3, 3).unwrap();
//! game.move_selected(3, 4).unwrap();
//! game.place_wall(Side::Bottom).unwrap();
//! assert_eq!(game.current_player(), Player::Blue);
//! ```

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::phase::{Phase, Selection};
use crate::board::{Board, Cell, Piece, PieceId, Side, Wall};
use crate::core::{
    ActionRecord, Command, ConfigError, GameConfig, GameRng, Player, PlayerMap, RuleError,
};
use crate::rules::{GameResult, Territory};

/// Full state of one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    phase: Phase,
    current_player: Player,

    /// Extra pieces placed so far.
    placements: usize,

    selection: Option<Selection>,

    /// 0 during placement, then incremented at every turn end.
    turn_number: u32,

    /// Source for the timeout wall.
    rng: GameRng,

    /// Accepted commands since the last restart.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Start a new game in the placement phase.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        let mut board = Board::new(config.board_size);
        for start in &config.starting_pieces {
            board.add_piece(start.cell, start.owner);
        }

        let mut state = Self {
            rng: GameRng::new(config.seed),
            current_player: config.placement_order.first().copied().unwrap_or(Player::Red),
            config,
            board,
            phase: Phase::Placement,
            placements: 0,
            selection: None,
            turn_number: 0,
            history: Vector::new(),
        };
        if state.config.placement_order.is_empty() {
            state.begin_action_phase();
        }
        state
    }

    // === Queries ===

    /// The configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to act. During placement, the owner of the next piece.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Extra pieces still to be placed.
    #[must_use]
    pub fn placements_remaining(&self) -> usize {
        self.config.placement_order.len() - self.placements
    }

    /// Every piece with its position, owner and action flag.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.pieces().iter().map(|(_, p)| p)
    }

    /// Every wall in placement order.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.board.walls().walls()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The selected piece, if any.
    #[must_use]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selection
            .as_ref()
            .and_then(|s| self.board.pieces().get(s.piece))
    }

    /// Where the selected piece may move; empty without a selection or
    /// after the move.
    #[must_use]
    pub fn legal_destinations(&self) -> &[Cell] {
        self.selection
            .as_ref()
            .map(|s| s.destinations.as_slice())
            .unwrap_or(&[])
    }

    /// Free sides of the selected piece's cell.
    #[must_use]
    pub fn available_wall_sides(&self) -> &[Side] {
        self.selection
            .as_ref()
            .map(|s| s.wall_sides.as_slice())
            .unwrap_or(&[])
    }

    /// Current regions and claims, recomputed from the board.
    #[must_use]
    pub fn territory(&self) -> Territory {
        Territory::analyze(&self.board)
    }

    /// Territory currently owned by `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> usize {
        self.territory().score(player)
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        self.territory().scores()
    }

    /// The final result. Only available once the game is over.
    pub fn winner(&self) -> Result<GameResult, RuleError> {
        match self.phase {
            Phase::GameOver => Ok(self.territory().winner()),
            phase => Err(RuleError::WrongPhase(phase)),
        }
    }

    /// Time left in the turn given the time already spent on it.
    #[must_use]
    pub fn remaining_time(&self, elapsed: Duration) -> Duration {
        self.config.turn_time_limit.saturating_sub(elapsed)
    }

    /// Whether a turn that has run for `elapsed` is out of time.
    #[must_use]
    pub fn is_turn_expired(&self, elapsed: Duration) -> bool {
        elapsed > self.config.turn_time_limit
    }

    /// Accepted commands since the game (re)started.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Commands ===

    /// Apply a command on behalf of `player`.
    ///
    /// Anyone may restart; every other command must come from the
    /// player to act.
    #[instrument(skip(self))]
    pub fn apply(&mut self, player: Player, command: Command) -> Result<(), RuleError> {
        if command != Command::Restart && player != self.current_player {
            return Err(RuleError::NotYourTurn(player));
        }

        match command {
            Command::PlacePiece { x, y } => self.place_piece(x, y),
            Command::SelectPiece { x, y } => self.select_piece(x, y),
            Command::Deselect => self.deselect(),
            Command::MoveSelected { x, y } => self.move_selected(x, y),
            Command::PlaceWall(side) => self.place_wall(side),
            Command::Timeout => self.force_timeout_wall().map(|_| ()),
            Command::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// Put the next extra piece on an empty cell.
    #[instrument(skip(self))]
    pub fn place_piece(&mut self, x: i32, y: i32) -> Result<(), RuleError> {
        self.require_phase(Phase::Placement)?;
        let cell = self.board.cell(x, y)?;
        if self.board.is_occupied(cell) {
            return Err(RuleError::CellOccupied(cell));
        }

        let owner = self.config.placement_order[self.placements];
        self.board.add_piece(cell, owner);
        self.placements += 1;
        self.record(owner, Command::PlacePiece { x, y });
        debug!(%cell, %owner, "piece placed");

        match self.config.placement_order.get(self.placements) {
            Some(&next) => self.current_player = next,
            None => self.begin_action_phase(),
        }
        Ok(())
    }

    /// Select one of the current player's pieces that has not acted.
    ///
    /// Replaces an unmoved selection.
    #[instrument(skip(self))]
    pub fn select_piece(&mut self, x: i32, y: i32) -> Result<(), RuleError> {
        self.require_phase(Phase::Action)?;
        self.require_unmoved()?;
        let cell = self.board.cell(x, y)?;

        let id = self.board.pieces().id_at(cell).ok_or(RuleError::NoPieceAt(cell))?;
        let piece = self.board.pieces().get(id).ok_or(RuleError::NoPieceAt(cell))?;
        if piece.owner != self.current_player {
            return Err(RuleError::NotYourPiece(cell, piece.owner));
        }
        if piece.has_acted {
            return Err(RuleError::AlreadyActed(cell));
        }

        self.selection = Some(Selection::new(&self.board, id, self.config.move_budget));
        self.record(self.current_player, Command::SelectPiece { x, y });
        Ok(())
    }

    /// Drop the selection. Not allowed once the piece has moved.
    #[instrument(skip(self))]
    pub fn deselect(&mut self) -> Result<(), RuleError> {
        self.require_phase(Phase::Action)?;
        if self.selection.is_none() {
            return Err(RuleError::NoSelection);
        }
        self.require_unmoved()?;

        self.selection = None;
        self.record(self.current_player, Command::Deselect);
        Ok(())
    }

    /// Move the selected piece. Moving onto its own cell commits to
    /// staying put. Either way the turn must now end with a wall.
    #[instrument(skip(self))]
    pub fn move_selected(&mut self, x: i32, y: i32) -> Result<(), RuleError> {
        self.require_phase(Phase::Action)?;
        self.require_unmoved()?;
        let selection = self.selection.as_ref().ok_or(RuleError::NoSelection)?;
        let target = self.board.cell(x, y)?;

        if !selection.destinations.contains(&target) {
            return Err(if self.board.is_occupied(target) {
                RuleError::CellOccupied(target)
            } else {
                RuleError::IllegalDestination(target)
            });
        }

        let id = selection.piece;
        self.board.pieces_mut().move_to(id, target);
        if let Some(selection) = self.selection.as_mut() {
            selection.commit_move(&self.board, target);
        }
        self.record(self.current_player, Command::MoveSelected { x, y });
        debug!(%target, "piece moved");
        Ok(())
    }

    /// Build a wall on `side` of the selected piece's cell and end the turn.
    #[instrument(skip(self))]
    pub fn place_wall(&mut self, side: Side) -> Result<(), RuleError> {
        self.require_phase(Phase::Action)?;
        let id = self.selection.as_ref().ok_or(RuleError::NoSelection)?.piece;
        let cell = self.piece_cell(id)?;
        if self.board.has_wall(cell, side) {
            return Err(RuleError::WallAlreadyPresent(cell, side));
        }

        let player = self.current_player;
        self.board.add_wall(cell, side, player);
        self.board.pieces_mut().mark_acted(id);
        self.record(player, Command::PlaceWall(side));
        debug!(%cell, %side, %player, "wall placed");

        self.end_turn();
        Ok(())
    }

    /// The turn clock ran out.
    ///
    /// The selected piece gets a wall on a uniformly random free side and
    /// the turn ends. Without a selection, or with no free side, the turn
    /// passes with no wall. Returns the wall built, if any.
    #[instrument(skip(self))]
    pub fn force_timeout_wall(&mut self) -> Result<Option<Wall>, RuleError> {
        self.require_phase(Phase::Action)?;
        let player = self.current_player;

        let mut built = None;
        if let Some(id) = self.selection.as_ref().map(|s| s.piece) {
            let cell = self.piece_cell(id)?;
            let sides = self.board.available_sides(cell);
            if let Some(&side) = self.rng.choose(&sides) {
                self.board.add_wall(cell, side, player);
                self.board.pieces_mut().mark_acted(id);
                built = Some(Wall { cell, side, owner: player });
            }
        }

        self.record(player, Command::Timeout);
        info!(%player, wall = ?built, "turn timed out");
        self.end_turn();
        Ok(built)
    }

    /// Throw the game away and start again from the same config.
    ///
    /// The RNG restarts from the configured seed, so a restarted game is
    /// reproducible from its own history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let config = self.config.clone();
        *self = Self::fresh(config);
        info!("game restarted");
    }

    // === Internals ===

    fn require_phase(&self, phase: Phase) -> Result<(), RuleError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(RuleError::WrongPhase(self.phase))
        }
    }

    fn require_unmoved(&self) -> Result<(), RuleError> {
        match &self.selection {
            Some(selection) if selection.moved => {
                Err(RuleError::MustPlaceWallFirst(self.piece_cell(selection.piece)?))
            }
            _ => Ok(()),
        }
    }

    fn piece_cell(&self, id: PieceId) -> Result<Cell, RuleError> {
        self.board
            .pieces()
            .get(id)
            .map(|p| p.cell)
            .ok_or(RuleError::NoSelection)
    }

    fn begin_action_phase(&mut self) {
        self.phase = Phase::Action;
        self.current_player = Player::Red;
        self.turn_number = 1;
        info!("placement complete, action phase begins");
    }

    /// Close the current player's turn: new round for them if all their
    /// pieces acted, hand over, then check for game over.
    fn end_turn(&mut self) {
        let finished = self.current_player;
        self.selection = None;

        if self.board.pieces().all_acted(finished) {
            self.board.pieces_mut().reset_actions(finished);
            debug!(player = %finished, "round complete");
        }

        self.current_player = finished.opponent();
        self.turn_number += 1;

        let territory = Territory::analyze(&self.board);
        if territory.is_game_over() {
            self.phase = Phase::GameOver;
            let scores = territory.scores();
            info!(
                red = scores[Player::Red],
                blue = scores[Player::Blue],
                result = %territory.winner(),
                "game over"
            );
        }
    }

    fn record(&mut self, player: Player, command: Command) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, command, self.turn_number, sequence));
    }
}
