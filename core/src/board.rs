use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game from setup to the end, discarded and rebuilt on restart.
///
/// Only built through [`Board::new`] or [`Board::from_bomb_positions`], so it is serializable but never deserialized.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: GameConfig,
    grid: Array2<Cell>,
    bomb_positions: Vec<Position>,
    invisible_cells_left: CellCount,
    flagged_cells: CellCount,
    mode: Mode,
    state: GameState,
    triggered_bomb: Option<Position>,
}

impl Board {
    pub fn new(config: GameConfig, generator: impl LayoutGenerator) -> Result<Self> {
        // fields are public, so the config may not have gone through `GameConfig::new`
        let config = GameConfig::new(config.rows, config.columns, config.bombs)?;
        let positions = generator.generate(config);
        if positions.len() != usize::from(config.bombs) {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                positions.len(),
                config.bombs
            );
        }
        Self::from_bomb_positions(config.rows, config.columns, &positions)
    }

    /// Builds a board with bombs exactly at `positions`.
    pub fn from_bomb_positions(rows: Coord, columns: Coord, positions: &[Position]) -> Result<Self> {
        let bombs = positions
            .len()
            .try_into()
            .map_err(|_| GameError::TooManyBombs)?;
        let config = GameConfig::new(rows, columns, bombs)?;

        let mut board = Self {
            config,
            grid: Array2::default([usize::from(rows), usize::from(columns)]),
            bomb_positions: Vec::with_capacity(positions.len()),
            invisible_cells_left: config.total_cells(),
            flagged_cells: 0,
            mode: Mode::default(),
            state: GameState::default(),
            triggered_bomb: None,
        };
        for &position in positions {
            board.place_bomb(position)?;
        }
        log::debug!(
            "new board {}x{} with {} bombs",
            rows,
            columns,
            board.bomb_positions.len()
        );

        // a board made only of bombs has nothing left to open
        board.settle();
        Ok(board)
    }

    fn place_bomb(&mut self, position: Position) -> Result<()> {
        let position = self.validate_position(position)?;
        let cell = &mut self.grid[position.to_nd_index()];
        if cell.is_bomb() {
            return Err(GameError::DuplicateBomb);
        }
        cell.set_bomb();
        self.bomb_positions.push(position);

        for neighbor in position.neighbors(self.config.rows, self.config.columns) {
            self.grid[neighbor.to_nd_index()].increase_value();
        }
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn columns(&self) -> Coord {
        self.config.columns
    }

    pub fn bombs(&self) -> CellCount {
        self.config.bombs
    }

    pub fn bomb_positions(&self) -> &[Position] {
        &self.bomb_positions
    }

    pub fn invisible_cells_left(&self) -> CellCount {
        self.invisible_cells_left
    }

    pub fn flagged_cells(&self) -> CellCount {
        self.flagged_cells
    }

    /// Bombs minus flags, negative when the player placed more flags than there are bombs.
    pub fn bombs_left(&self) -> i32 {
        i32::from(self.config.bombs) - i32::from(self.flagged_cells)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_bomb(&self) -> Option<Position> {
        self.triggered_bomb
    }

    /// Panics when `position` is out of bounds, see [`Board::get`] for the checked version.
    pub fn cell_at(&self, position: Position) -> Cell {
        self.grid[position.to_nd_index()]
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.grid.get(position.to_nd_index()).copied()
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((row, column), &cell)| (Position::new(row as Coord, column as Coord), cell))
    }

    pub fn change_mode(&mut self) -> Mode {
        self.mode = self.mode.next();
        log::debug!("mode changed to {:?}", self.mode);
        self.mode
    }

    pub fn act(&mut self, position: Position, action: Action) -> Result<ActionOutcome> {
        Ok(match action {
            Action::Open => ActionOutcome::Open(self.open(position)?),
            Action::Flag => ActionOutcome::Flag(self.flag(position)?),
        })
    }

    /// Opens a hidden cell, flooding through every connected zero cell.
    pub fn open(&mut self, position: Position) -> Result<OpenOutcome> {
        let position = self.validate_position(position)?;
        if self.state.is_finished() {
            return Ok(OpenOutcome::NoChange);
        }

        let cell = self.grid[position.to_nd_index()];
        if cell.is_flagged() || cell.is_visible() {
            return Ok(OpenOutcome::NoChange);
        }

        if cell.is_bomb() {
            self.triggered_bomb = Some(position);
            self.end_game(false);
            return Ok(OpenOutcome::Exploded);
        }

        self.flood_reveal(position);
        Ok(if self.settle() {
            OpenOutcome::Won
        } else {
            OpenOutcome::Revealed
        })
    }

    pub fn flag(&mut self, position: Position) -> Result<FlagOutcome> {
        let position = self.validate_position(position)?;
        if self.state.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.grid[position.to_nd_index()];
        if cell.is_visible() {
            return Ok(FlagOutcome::NoChange);
        }

        let outcome = if cell.toggle_flag() {
            self.flagged_cells += 1;
            FlagOutcome::Flagged
        } else {
            self.flagged_cells -= 1;
            FlagOutcome::Unflagged
        };
        log::trace!("{:?} at {:?}", outcome, position);
        self.settle();
        Ok(outcome)
    }

    fn flood_reveal(&mut self, start: Position) {
        let (rows, columns) = (self.config.rows, self.config.columns);
        let mut to_visit = Vec::from([start]);
        let mut revealed = 0usize;

        while let Some(position) = to_visit.pop() {
            let cell = &mut self.grid[position.to_nd_index()];
            if cell.is_visible() || cell.is_flagged() {
                continue;
            }
            debug_assert!(!cell.is_bomb(), "flood fill reached a bomb at {position:?}");

            cell.reveal();
            let value = cell.value();
            self.invisible_cells_left -= 1;
            revealed += 1;

            if value == 0 {
                to_visit.extend(position.neighbors(rows, columns).filter(|&neighbor| {
                    let neighbor = self.grid[neighbor.to_nd_index()];
                    !neighbor.is_visible() && !neighbor.is_flagged()
                }));
            }
        }
        log::trace!("opened {} cells starting at {:?}", revealed, start);
    }

    /// Ends the game once every safe cell is visible, returns whether it just did.
    fn settle(&mut self) -> bool {
        if matches!(self.state, GameState::Playing)
            && self.invisible_cells_left == self.config.bombs
        {
            self.end_game(true);
            true
        } else {
            false
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("game ended: {:?}", self.state);
        for &position in &self.bomb_positions {
            self.grid[position.to_nd_index()].reveal();
        }
    }

    fn validate_position(&self, position: Position) -> Result<Position> {
        if position.is_valid(self.config.rows, self.config.columns) {
            Ok(position)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}
