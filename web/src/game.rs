use crate::input::{MouseButtons, action_for};
use crate::utils::*;
use sweeper_core::{self as game, Board, GameConfig, GameState, Position, SampledLayoutGenerator};
use yew::prelude::*;

fn new_board(config: GameConfig, seed: u64) -> Board {
    log::debug!("new board with seed {}", seed);
    Board::new(config, SampledLayoutGenerator::new(seed)).expect("game config must be valid")
}

/// Routes one click to the board, returns whether anything needs a re-render.
fn apply_click(board: &mut Board, pos: Position, buttons: MouseButtons) -> bool {
    let action = action_for(buttons, board.mode());
    match board.act(pos, action) {
        Ok(outcome) => {
            log::trace!("{:?} at {:?}: {:?}", action, pos, outcome);
            if board.is_finished() && outcome.has_update() {
                log::info!("{}", end_message(board.state()));
            }
            outcome.has_update()
        }
        Err(err) => {
            log::error!("{:?} at {:?} failed: {}", action, pos, err);
            false
        }
    }
}

const fn outcome_glyph(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "🙂",
        GameState::Won => "😎",
        GameState::Lost => "🙁",
    }
}

const fn end_message(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "",
        GameState::Won => "You win!",
        GameState::Lost => "You lose!",
    }
}

/// The bomb that ended the game gets an extra `oops` class.
fn cell_classes(board: &Board, pos: Position) -> Classes {
    let (base, heat) = board.cell_at(pos).render_class().class_names();
    let triggered = board.triggered_bomb() == Some(pos);
    classes!("cell", base, heat, triggered.then_some("oops"))
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellDown(Position, MouseButtons),
    ChangeMode,
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: Position,
    cell: game::Cell,
    class: Classes,
    callback: Callback<(Position, MouseButtons)>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        cell,
        class,
        callback,
    } = props.clone();

    let onmousedown = Callback::from(move |e: MouseEvent| {
        let buttons = MouseButtons::from_bits_truncate(e.buttons());
        log::trace!("({}, {}) mouse down ({:?})", pos.row, pos.column, buttons);
        callback.emit((pos, buttons));
    });

    html! {
        <div {class} {onmousedown}>{cell.render_content().to_string()}</div>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for the first board, later boards are always random
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: GameConfig,
    board: Board,
}

impl GameView {
    /// Throws the current board away and deals a new one with the same config.
    fn restart(&mut self, seed: u64) {
        log::debug!("restart");
        self.board = new_board(self.config, seed);
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = GameConfig::default();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            config,
            board: new_board(config, seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellDown(pos, buttons) => apply_click(&mut self.board, pos, buttons),
            ChangeMode => {
                self.board.change_mode();
                true
            }
            NewGame => {
                self.restart(js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = &self.board;
        let state = board.state();
        let bombs_left = format_for_counter(board.bombs_left());

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_change_mode = ctx.link().callback(|_: MouseEvent| ChangeMode);
        let cb_cell = ctx
            .link()
            .callback(|(pos, buttons): (Position, MouseButtons)| CellDown(pos, buttons));

        html! {
            <div class="minesweeper" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <aside id="BombsLeft">{bombs_left}</aside>
                    <span><button id="ReloadButton" onclick={cb_new_game}>{outcome_glyph(state)}</button></span>
                    <button id="Mode" onclick={cb_change_mode}>{board.mode().label()}</button>
                </nav>
                <ul id="Minesweeper" class={(!board.is_finished()).then_some("playable")}>
                    {
                        for (0..board.rows()).map(|row| html! {
                            <li>
                                {
                                    for (0..board.columns()).map(|column| {
                                        let pos = Position::new(row, column);
                                        let cell = board.cell_at(pos);
                                        let class = cell_classes(board, pos);
                                        let callback = cb_cell.clone();
                                        html! {
                                            <CellView {pos} {cell} {class} {callback}/>
                                        }
                                    })
                                }
                            </li>
                        })
                    }
                </ul>
                <div id="MessageDiv" hidden={!board.is_finished()}>{end_message(state)}</div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: u8, columns: u8, bombs: &[(u8, u8)]) -> Board {
        let positions: Vec<_> = bombs.iter().copied().map(Position::from).collect();
        Board::from_bomb_positions(rows, columns, &positions).unwrap()
    }

    #[test]
    fn left_click_opens_and_right_click_flags() {
        let mut board = board(3, 3, &[(1, 1)]);

        assert!(apply_click(&mut board, Position::new(0, 0), MouseButtons::LEFT));
        assert!(board.cell_at(Position::new(0, 0)).is_visible());

        assert!(apply_click(&mut board, Position::new(2, 2), MouseButtons::RIGHT));
        assert!(board.cell_at(Position::new(2, 2)).is_flagged());
        assert_eq!(format_for_counter(board.bombs_left()), "000");
    }

    #[test]
    fn flag_mode_turns_left_click_into_flag() {
        let mut board = board(3, 3, &[(1, 1)]);
        board.change_mode();

        assert!(apply_click(&mut board, Position::new(1, 1), MouseButtons::LEFT));
        assert!(board.cell_at(Position::new(1, 1)).is_flagged());
        assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn noop_clicks_do_not_request_render() {
        let mut board = board(3, 3, &[(1, 1)]);
        apply_click(&mut board, Position::new(0, 0), MouseButtons::LEFT);

        assert!(!apply_click(&mut board, Position::new(0, 0), MouseButtons::LEFT));
        assert!(!apply_click(&mut board, Position::new(0, 0), MouseButtons::RIGHT));
    }

    #[test]
    fn out_of_bounds_click_is_ignored() {
        let mut board = board(3, 3, &[(1, 1)]);
        assert!(!apply_click(&mut board, Position::new(3, 0), MouseButtons::LEFT));
    }

    #[test]
    fn losing_shows_bombs_and_outcome() {
        let mut board = board(3, 3, &[(1, 1), (0, 2)]);

        assert!(apply_click(&mut board, Position::new(1, 1), MouseButtons::LEFT));
        assert_eq!(board.state(), GameState::Lost);
        assert_eq!(outcome_glyph(board.state()), "🙁");
        assert_eq!(end_message(board.state()), "You lose!");
        assert_eq!(
            cell_classes(&board, Position::new(0, 2)),
            classes!("cell", "bomb")
        );
        assert_eq!(
            cell_classes(&board, Position::new(1, 1)),
            classes!("cell", "bomb", "oops")
        );
    }

    #[test]
    fn winning_shows_outcome() {
        let mut board = board(1, 2, &[]);

        assert!(apply_click(&mut board, Position::new(0, 0), MouseButtons::LEFT));
        assert_eq!(board.state(), GameState::Won);
        assert_eq!(outcome_glyph(board.state()), "😎");
        assert_eq!(end_message(board.state()), "You win!");
    }

    #[test]
    fn numbered_cells_get_heat_class() {
        let mut board = board(3, 3, &[(1, 1)]);
        apply_click(&mut board, Position::new(0, 0), MouseButtons::LEFT);

        assert_eq!(
            cell_classes(&board, Position::new(0, 0)),
            classes!("cell", "show", "warm1")
        );
        assert_eq!(
            cell_classes(&board, Position::new(2, 2)),
            classes!("cell", "hidden")
        );
    }

    #[test]
    fn restart_deals_a_fresh_independent_board() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let mut view = GameView {
            config,
            board: new_board(config, 1),
        };
        let old_layout = view.board.bomb_positions().to_vec();

        let bomb = old_layout[0];
        let safe = view
            .board
            .cells()
            .find(|(_, cell)| !cell.is_bomb())
            .map(|(pos, _)| pos)
            .unwrap();
        assert!(apply_click(&mut view.board, safe, MouseButtons::RIGHT));
        apply_click(&mut view.board, bomb, MouseButtons::LEFT);
        view.board.change_mode();
        assert_eq!(view.board.state(), GameState::Lost);

        view.restart(2);

        let board = &view.board;
        assert_eq!(board.state(), GameState::Playing);
        assert_eq!(board.invisible_cells_left(), config.total_cells());
        assert_eq!(board.flagged_cells(), 0);
        assert_eq!(board.mode(), game::Mode::Open);
        assert_eq!(board.config(), config);
        assert_eq!(board.bomb_positions().len(), usize::from(config.bombs));
        assert!(board.cells().all(|(_, cell)| !cell.is_visible() && !cell.is_flagged()));
        assert_ne!(board.bomb_positions(), old_layout.as_slice());
    }
}
