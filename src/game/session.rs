//! One game instance: board, players, rules and the turn state machine.

use tracing::{debug, info, warn};

use crate::board::{Occupancy, Topology};
use crate::core::{
    Color, ConfigError, Coord, GameConfig, GameError, Player, PlayerId, PlayerMap, SelectionIssue,
    SnapshotError,
};
use crate::rules::{RuleContext, RuleEngine};
use crate::turn::{GameSnapshot, TurnPhase, TurnState};

/// A running game.
///
/// Every operation is synchronous and either succeeds or leaves the game
/// as it was, except a rejected commit, which rolls the turn back before
/// reporting.
///
/// ## Example
///
/// ```
/// use supersymmetry::core::{Color, Coord, GameConfig, PlayerId};
/// use supersymmetry::game::Game;
///
/// let config = GameConfig::new(2)
///     .with_player("ada", Color::Red)
///     .with_player("bob", Color::Black);
/// let mut game = Game::new(config).unwrap();
///
/// game.select(Coord::new(5, 6)).unwrap();
/// game.attempt_move(Coord::new(4, 6)).unwrap();
/// assert_eq!(game.commit_turn().unwrap(), PlayerId::new(1));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    topology: Topology,
    occupancy: Occupancy,
    players: PlayerMap<Player>,
    turn: TurnState,
    rules: RuleEngine,
}

impl Game {
    /// Build a game in its starting position with the first registered
    /// player to act.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let topology = Topology::new(config.board_size)?;
        let colors: Vec<Color> = config.players.iter().map(|p| p.color).collect();
        let occupancy = Occupancy::initial(&topology, &colors);
        let players = PlayerMap::from_vec(
            config
                .players
                .iter()
                .map(|p| Player::new(p.username.clone(), p.color))
                .collect(),
        );
        let rules = RuleEngine::with_overrides(&config.rule_overrides)?;

        debug!(
            board_size = config.board_size,
            players = players.player_count(),
            "created game"
        );

        Ok(Self {
            config,
            topology,
            occupancy,
            players,
            turn: TurnState::new(PlayerId::new(0)),
            rules,
        })
    }

    /// Build a game from configuration and continue from an exported state.
    pub fn from_snapshot(config: GameConfig, snapshot: GameSnapshot) -> Result<Self, GameError> {
        let mut game = Self::new(config)?;
        game.import_state(snapshot)?;
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Static cell classification.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Current piece placement.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    #[must_use]
    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Mutable rule access, for toggling or appending rules mid-game.
    pub fn rules_mut(&mut self) -> &mut RuleEngine {
        &mut self.rules
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active_player
    }

    /// The active player's selected piece.
    #[must_use]
    pub fn selection(&self) -> Option<Coord> {
        self.players
            .get(self.turn.active_player)
            .and_then(|p| p.selected)
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase(self.selection())
    }

    fn current(&self) -> Result<&Player, SelectionIssue> {
        self.players
            .get(self.turn.active_player)
            .ok_or(SelectionIssue::NoActivePlayer)
    }

    fn context(&self, mover: Color) -> RuleContext<'_> {
        RuleContext {
            topology: &self.topology,
            occupancy: &self.occupancy,
            mover,
            hops: self.turn.hops,
            single_step_made: self.turn.single_step_made,
        }
    }

    // === Turn Operations ===

    /// Select one of the active player's pieces.
    ///
    /// With no hop applied this only re-targets the selection. After hops,
    /// the piece must be the player's at the start of the turn; the turn is
    /// rolled back and the piece selected afresh.
    pub fn select(&mut self, at: Coord) -> Result<(), GameError> {
        let active = self.turn.active_player;
        let mover = self.current()?.color;

        if !self.topology.in_bounds(at) {
            return Err(SelectionIssue::OutOfBounds(at).into());
        }

        let board = match self.turn.snapshot() {
            Some(start) if self.turn.hops > 0 => start,
            _ => &self.occupancy,
        };
        if board.get(at) != Some(mover) {
            return Err(SelectionIssue::NotOwnPiece(at).into());
        }

        if self.turn.hops > 0 {
            warn!(player = %active, hops = self.turn.hops, "reselecting, rolling back turn");
            self.rollback();
        }

        self.turn.arm_snapshot(&self.occupancy);
        self.players[active].selected = Some(at);
        debug!(player = %active, %at, "selected piece");
        Ok(())
    }

    /// Move the selected piece one hop to `to`.
    ///
    /// On success the selection follows the piece. A rejected move changes
    /// nothing.
    pub fn attempt_move(&mut self, to: Coord) -> Result<(), GameError> {
        let active = self.turn.active_player;
        let player = self.current()?;
        let mover = player.color;
        let from = player.selected.ok_or(SelectionIssue::NothingSelected)?;

        self.rules.check_move(&self.context(mover), from, to)?;

        self.turn.arm_snapshot(&self.occupancy);
        self.occupancy.move_piece(from, to);
        self.turn.record_hop(from, to);
        self.players[active].selected = Some(to);

        debug!(
            player = %active,
            %from,
            %to,
            hops = self.turn.hops,
            single_step = self.turn.single_step_made,
            "applied hop"
        );
        Ok(())
    }

    /// End the turn, checking the destination rules against the selected
    /// piece's position.
    ///
    /// Returns the next player. Committing without any hop is a pass. If a
    /// destination rule fails the turn is rolled back, the same player stays
    /// active, and the failure is returned.
    pub fn commit_turn(&mut self) -> Result<PlayerId, GameError> {
        let active = self.turn.active_player;
        let player = self.current()?;
        let mover = player.color;
        let at = player.selected.ok_or(SelectionIssue::NothingSelected)?;

        if let Err(err) = self.rules.check_destination(&self.context(mover), at) {
            warn!(player = %active, %at, %err, "commit rejected, rolling back turn");
            self.rollback();
            return Err(err);
        }

        let hops = self.turn.hops;
        self.players[active].selected = None;
        self.turn.advance(self.players.player_count());

        info!(
            player = %active,
            %at,
            hops,
            next = %self.turn.active_player,
            turn = self.turn.turn_number,
            "committed turn"
        );
        Ok(self.turn.active_player)
    }

    /// Check whether `commit_turn` would be accepted, without committing.
    pub fn check_commit(&self) -> Result<(), GameError> {
        let player = self.current()?;
        let at = player.selected.ok_or(SelectionIssue::NothingSelected)?;
        self.rules.check_destination(&self.context(player.color), at)
    }

    /// Abandon the turn in progress: restore the start-of-turn board and
    /// clear the selection. The same player stays active.
    pub fn cancel_turn(&mut self) {
        debug!(player = %self.turn.active_player, hops = self.turn.hops, "cancelled turn");
        self.rollback();
    }

    fn rollback(&mut self) {
        if let Some(start) = self.turn.reset() {
            self.occupancy = start;
        }
        if let Some(player) = self.players.get_mut(self.turn.active_player) {
            player.selected = None;
        }
    }

    // === Queries ===

    /// Legal next hops for the selected piece, row-major. Empty without a
    /// selection.
    #[must_use]
    pub fn legal_destinations(&self) -> Vec<Coord> {
        self.selection()
            .map(|from| self.legal_destinations_from(from))
            .unwrap_or_default()
    }

    /// Legal hops from any cell, as if it held a piece of the active
    /// player's colour, under the current turn bookkeeping.
    #[must_use]
    pub fn legal_destinations_from(&self, from: Coord) -> Vec<Coord> {
        match self.current() {
            Ok(player) => self.rules.legal_destinations(&self.context(player.color), from),
            Err(_) => Vec::new(),
        }
    }

    /// Cells holding the active player's pieces, row-major.
    #[must_use]
    pub fn own_pieces(&self) -> Vec<Coord> {
        match self.current() {
            Ok(player) => self.occupancy.pieces(player.color).collect(),
            Err(_) => Vec::new(),
        }
    }

    // === Export / Import ===

    /// Copy out the whole mutable state.
    #[must_use]
    pub fn export_state(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.topology.size(),
            occupancy: self.occupancy.clone(),
            turn: self.turn.clone(),
            players: self.players.values().cloned().collect(),
        }
    }

    /// Replace the mutable state with an exported one.
    ///
    /// The snapshot must match this game's board size and roster colours.
    /// On error nothing changes.
    pub fn import_state(&mut self, snapshot: GameSnapshot) -> Result<(), SnapshotError> {
        if snapshot.board_size != self.topology.size() {
            return Err(SnapshotError::BoardSizeMismatch {
                expected: self.topology.size(),
                found: snapshot.board_size,
            });
        }

        let cells = self.topology.width() * self.topology.width();
        let grids = std::iter::once(&snapshot.occupancy).chain(snapshot.turn.snapshot());
        for grid in grids {
            if grid.width() != self.topology.width() || grid.len() != cells {
                return Err(SnapshotError::GridMismatch {
                    expected: cells,
                    found: grid.len(),
                });
            }
        }

        let same_roster = snapshot.players.len() == self.players.player_count()
            && snapshot
                .players
                .iter()
                .zip(self.players.values())
                .all(|(a, b)| a.color == b.color);
        if !same_roster {
            return Err(SnapshotError::RosterMismatch);
        }

        if snapshot.turn.active_player.index() >= snapshot.players.len() {
            return Err(SnapshotError::UnknownActivePlayer(snapshot.turn.active_player.0));
        }

        self.occupancy = snapshot.occupancy;
        self.turn = snapshot.turn;
        self.players = PlayerMap::from_vec(snapshot.players);

        debug!(
            player = %self.turn.active_player,
            turn = self.turn.turn_number,
            "imported state"
        );
        Ok(())
    }
}
