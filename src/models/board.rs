//! Board model - owns the board state, orientation and the move-entry state
//! machine, and sequences move/undo animations.
//!
//! The state transitions are plain methods taking positions and timestamps so
//! they can be driven without a window. The `Context`-taking wrappers at the
//! bottom emit [`BoardEvent`]s and run the animation ticker.

use std::time::Instant;

use gpui::{AsyncApp, Bounds, Context, EventEmitter, MouseButton, Pixels, Point, Task, WeakEntity};
use shakmaty::{Move, Square};
use tracing::{debug, info, warn};

use crate::config::BoardConfig;
use crate::domain::{BoardError, BoardState, Piece, accepts_drop, shakmaty_to_piece};
use crate::models::animation::{Animation, FRAME_INTERVAL};
use crate::models::highlights::Highlights;
use crate::ui::BoardLayout;

/// Extra data attached to move notifications
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInfo {
    /// True when the move came from mouse input on the board
    pub interactive: bool,
}

/// Options for playing a move through the API
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOptions {
    pub animate: bool,
    pub interactive: bool,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            animate: true,
            interactive: false,
        }
    }
}

impl MoveOptions {
    pub fn instant() -> Self {
        Self {
            animate: false,
            ..Self::default()
        }
    }
}

/// Notifications emitted by the board entity
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    MovePlayed { mv: Move, info: MoveInfo },
    MoveUndone { mv: Move, info: MoveInfo },
}

/// Move-entry state machine
#[derive(Clone, Debug, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// A piece is selected and its legal moves are highlighted
    Selected { square: Square, moves: Vec<Move> },
    /// The selected piece follows the cursor
    Dragging {
        square: Square,
        moves: Vec<Move>,
        piece: Piece,
        /// Cursor position in window coordinates
        pos: Point<Pixels>,
        /// The square was already selected when the drag began
        was_selected: bool,
    },
}

impl InputState {
    pub fn selected_square(&self) -> Option<Square> {
        match self {
            InputState::Idle => None,
            InputState::Selected { square, .. } | InputState::Dragging { square, .. } => {
                Some(*square)
            }
        }
    }

    pub fn moves(&self) -> &[Move] {
        match self {
            InputState::Idle => &[],
            InputState::Selected { moves, .. } | InputState::Dragging { moves, .. } => moves,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InputState::Dragging { .. })
    }
}

/// The board model observed by the board view
pub struct BoardModel {
    board: BoardState,
    flipped: bool,
    input: InputState,
    hover: Option<Square>,
    animation: Option<Animation>,
    layout: BoardLayout,
    config: BoardConfig,
    /// Ticker for the running animation; dropping it stops the ticks
    animation_task: Option<Task<()>>,
}

impl EventEmitter<BoardEvent> for BoardModel {}

impl BoardModel {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_board(BoardState::new(), config)
    }

    pub fn with_board(board: BoardState, config: BoardConfig) -> Self {
        let layout = BoardLayout {
            padding: config.padding,
            ..BoardLayout::default()
        };
        Self {
            board,
            flipped: config.flipped,
            input: InputState::Idle,
            hover: None,
            animation: None,
            layout,
            config,
            animation_task: None,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn hover_square(&self) -> Option<Square> {
        self.hover
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Replace the board. Selection and any running animation are dropped.
    pub fn replace_board(&mut self, board: BoardState) {
        self.board = board;
        self.clear_selection();
        self.cancel_animation();
    }

    pub fn apply_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    /// Store newly measured widget bounds. Returns true if they changed.
    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) -> bool {
        if self.layout.bounds == bounds {
            return false;
        }
        self.layout.bounds = bounds;
        true
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square).map(shakmaty_to_piece)
    }

    pub fn highlights(&self) -> Highlights {
        Highlights::compute(
            &self.board,
            self.input.selected_square(),
            self.input.moves(),
            self.hover,
            &self.config,
        )
    }

    /// Play a move at time `now`. The board updates immediately; the animation,
    /// if requested, only affects drawing.
    pub fn play_move_at(
        &mut self,
        m: Move,
        options: MoveOptions,
        now: Instant,
    ) -> Result<BoardEvent, BoardError> {
        // a rejected move leaves selection and animation untouched
        if !self.board.is_legal(&m) {
            let err = BoardError::IllegalMove(self.board.uci(&m));
            warn!(%err, "rejected move");
            return Err(err);
        }
        self.clear_selection();
        self.cancel_animation();

        let before = self.board.position().clone();
        self.board.push(m.clone())?;
        if options.animate {
            self.animation =
                Animation::for_move(&before, &m, now, self.config.animation_duration());
        }

        info!(
            uci = %self.board.uci(&m),
            interactive = options.interactive,
            "move played"
        );
        Ok(BoardEvent::MovePlayed {
            mv: m,
            info: MoveInfo {
                interactive: options.interactive,
            },
        })
    }

    /// Take back the last move at time `now`. Does nothing on an empty move stack.
    pub fn undo_move_at(&mut self, animate: bool, now: Instant) -> Option<BoardEvent> {
        self.clear_selection();
        self.cancel_animation();

        let m = self.board.pop()?;
        if animate {
            self.animation = Animation::for_undo(
                self.board.position(),
                &m,
                now,
                self.config.animation_duration(),
            );
        }

        info!(uci = %self.board.uci(&m), "move undone");
        Some(BoardEvent::MoveUndone {
            mv: m,
            info: MoveInfo { interactive: false },
        })
    }

    /// Advance the running animation. Returns true while it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.animation {
            Some(animation) if animation.is_finished(now) => {
                self.animation = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn mouse_down(&mut self, button: MouseButton, pos: Point<Pixels>) -> Option<BoardEvent> {
        if button != MouseButton::Left {
            return None;
        }

        let Some(square) = self.layout.pos_to_square(pos, self.flipped) else {
            self.clear_selection();
            return None;
        };

        if let Some(m) = self.target_move(square) {
            return self.play_interactive(m);
        }

        let was_selected = self.input.selected_square() == Some(square);
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.board.turn() => {
                let moves = self.board.legal_moves_from(square);
                debug!(%square, targets = moves.len(), "piece picked up");
                self.input = InputState::Dragging {
                    square,
                    moves,
                    piece: shakmaty_to_piece(piece),
                    pos,
                    was_selected,
                };
            }
            _ => self.clear_selection(),
        }
        None
    }

    /// Track hover and the dragged piece. Returns true if a repaint is needed.
    pub fn mouse_move(&mut self, pos: Point<Pixels>) -> bool {
        let square = self.layout.pos_to_square(pos, self.flipped);
        let hover_changed = square != self.hover;
        self.hover = square;

        if let InputState::Dragging { pos: drag_pos, .. } = &mut self.input {
            *drag_pos = pos;
            return true;
        }
        hover_changed
    }

    /// Forget the hovered square once the cursor leaves the widget
    pub fn clear_hover(&mut self) -> bool {
        self.hover.take().is_some()
    }

    pub fn mouse_up(&mut self, button: MouseButton, pos: Point<Pixels>) -> Option<BoardEvent> {
        if button != MouseButton::Left || !self.input.is_dragging() {
            return None;
        }

        let target = self.layout.pos_to_square(pos, self.flipped);
        if let Some(m) = target.and_then(|sq| self.target_move(sq)) {
            return self.play_interactive(m);
        }

        let InputState::Dragging {
            square,
            moves,
            was_selected,
            ..
        } = std::mem::take(&mut self.input)
        else {
            return None;
        };

        if target == Some(square) && !was_selected {
            // plain click on a piece: keep it selected for click-to-move
            self.input = InputState::Selected { square, moves };
        } else {
            debug!(%square, "selection cancelled");
        }
        None
    }

    /// Legal move of the selected piece landing on `to`. Castling also accepts
    /// the rook square.
    fn target_move(&self, to: Square) -> Option<Move> {
        let from = self.input.selected_square()?;
        if to == from {
            return None;
        }
        let candidates: Vec<&Move> = self
            .input
            .moves()
            .iter()
            .filter(|m| accepts_drop(m, to))
            .collect();

        let role = self.config.promotion.role();
        candidates
            .iter()
            .find(|m| m.promotion() == Some(role))
            .or(candidates.first())
            .map(|m| (*m).clone())
    }

    fn play_interactive(&mut self, m: Move) -> Option<BoardEvent> {
        let options = MoveOptions {
            animate: false,
            interactive: true,
        };
        self.play_move_at(m, options, Instant::now()).ok()
    }

    fn clear_selection(&mut self) {
        self.input = InputState::Idle;
    }

    fn cancel_animation(&mut self) {
        self.animation = None;
        self.animation_task = None;
    }
}

// Entity-facing API: emits events and drives the animation ticker.
impl BoardModel {
    pub fn set_board(&mut self, board: BoardState, cx: &mut Context<Self>) {
        self.replace_board(board);
        cx.notify();
    }

    pub fn set_flipped(&mut self, flipped: bool, cx: &mut Context<Self>) {
        self.apply_flipped(flipped);
        cx.notify();
    }

    pub fn play_move(
        &mut self,
        m: Move,
        options: MoveOptions,
        cx: &mut Context<Self>,
    ) -> Result<(), BoardError> {
        let event = self.play_move_at(m, options, Instant::now())?;
        self.dispatch(Some(event), cx);
        Ok(())
    }

    pub fn play_uci(
        &mut self,
        uci: &str,
        options: MoveOptions,
        cx: &mut Context<Self>,
    ) -> Result<(), BoardError> {
        let m = self.board.parse_uci(uci)?;
        self.play_move(m, options, cx)
    }

    pub fn undo_move(&mut self, animate: bool, cx: &mut Context<Self>) {
        let event = self.undo_move_at(animate, Instant::now());
        self.dispatch(event, cx);
    }

    /// Emit `event` (if any), start ticking a fresh animation and repaint.
    pub fn dispatch(&mut self, event: Option<BoardEvent>, cx: &mut Context<Self>) {
        if let Some(event) = event {
            cx.emit(event);
        }
        if self.animation.is_some() && self.animation_task.is_none() {
            self.animation_task = Some(cx.spawn(
                async move |weak: WeakEntity<BoardModel>, cx: &mut AsyncApp| {
                    Self::run_animation(weak, cx).await;
                },
            ));
        }
        cx.notify();
    }

    async fn run_animation(weak: WeakEntity<BoardModel>, cx: &mut AsyncApp) {
        loop {
            cx.background_executor().timer(FRAME_INTERVAL).await;

            // Exit once the entity is gone or the animation is over
            let running = weak.update(cx, |board, cx| {
                let running = board.tick(Instant::now());
                if !running {
                    board.animation_task = None;
                }
                cx.notify();
                running
            });
            if !matches!(running, Ok(true)) {
                break;
            }
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
