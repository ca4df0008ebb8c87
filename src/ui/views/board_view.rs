//! Chess board view - renders a `BoardModel` and feeds it mouse input.

use std::time::Instant;

use gpui::{
    App, Context, CursorStyle, DispatchPhase, Entity, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, Subscription, Window, canvas, div, prelude::*, px,
};

use crate::domain::square_at;
use crate::models::{BoardModel, InputState};
use crate::ui::components::{SquareProps, render_floating_piece, render_square};

/// The board widget. Embed it anywhere and drive it through its model entity.
pub struct ChessBoardView {
    model: Entity<BoardModel>,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<BoardModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            _subscription,
        }
    }

    pub fn model(&self) -> &Entity<BoardModel> {
        &self.model
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_move = self.model.clone();
        let model_up = self.model.clone();
        let model_up_out = self.model.clone();
        let model_measure = self.model.clone();
        let model_hover = self.model.clone();

        let board = self.model.read(cx);
        let layout = *board.layout();
        let flipped = board.is_flipped();
        let show_coordinates = board.config().show_coordinates;
        let highlights = board.highlights();
        let animation = board.animation();

        let square_size = layout.square_size();
        let piece_size = layout.piece_size();
        let board_total_size = layout.board_total_size();

        let (dragging_from, floating_piece) = match board.input() {
            InputState::Dragging {
                square, piece, pos, ..
            } => {
                let (x, y) = layout.to_local(*pos);
                (
                    Some(*square),
                    Some(render_floating_piece(*piece, x, y, piece_size)),
                )
            }
            _ => (None, None),
        };

        let animated_pieces: Vec<_> = animation
            .map(|a| a.frame(&layout, flipped, Instant::now()))
            .unwrap_or_default()
            .into_iter()
            .map(|(piece, x, y)| render_floating_piece(piece, x, y, piece_size))
            .collect();

        // Collect squares for rendering (can't borrow board in closure)
        let squares: Vec<_> = (0..8)
            .flat_map(|row| (0..8).map(move |col| (row, col)))
            .filter_map(|(row, col)| {
                let square = square_at(row, col, flipped)?;
                let hidden = animation.is_some_and(|a| a.hides(square));
                Some(SquareProps {
                    row,
                    col,
                    piece: board.piece_at(square).filter(|_| !hidden),
                    ghost: dragging_from == Some(square),
                    overlays: highlights.overlays_at(square),
                    rank_label: (show_coordinates && col == 7).then(|| square.rank().char()),
                    file_label: (show_coordinates && row == 7).then(|| square.file().char()),
                })
            })
            .collect();

        let mut squares = squares.into_iter();
        let board_element = div()
            .relative()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .children((0..8).map(|_| {
                div().flex().flex_shrink_0().children(
                    squares
                        .by_ref()
                        .take(8)
                        .map(|props| render_square(props, square_size, piece_size))
                        .collect::<Vec<_>>(),
                )
            }))
            .children(animated_pieces)
            .when_some(floating_piece, |el, fp| el.child(fp));

        // Canvas to measure actual widget bounds. Its paint pass also listens
        // to mouse moves on the whole window so a drag keeps following the
        // cursor outside the widget.
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |board, cx| {
                    if board.set_bounds(bounds) {
                        cx.notify();
                    }
                });
            },
            move |_, _, window, _| {
                window.on_mouse_event(
                    move |ev: &MouseMoveEvent, phase, _window: &mut Window, cx: &mut App| {
                        if phase != DispatchPhase::Bubble {
                            return;
                        }
                        model_move.update(cx, |board, cx| {
                            if board.mouse_move(ev.position) {
                                cx.notify();
                            }
                        });
                    },
                );
            },
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        div()
            .id("chess-board")
            .relative()
            .size_full()
            .min_w(px(200.0))
            .min_h(px(200.0))
            .flex()
            .items_center()
            .justify_center()
            .when(dragging_from.is_some(), |el| el.cursor(CursorStyle::ClosedHand))
            .child(measure_canvas)
            .child(board_element)
            // Mouse down: select, start a drag, or complete a click-to-move
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |board, cx| {
                        let event = board.mouse_down(ev.button, ev.position);
                        board.dispatch(event, cx);
                    });
                },
            )
            .on_hover(move |hovered: &bool, _window, cx| {
                if !*hovered {
                    model_hover.update(cx, |board, cx| {
                        if board.clear_hover() {
                            cx.notify();
                        }
                    });
                }
            })
            // Mouse up: drop the dragged piece
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |board, cx| {
                    if board.input().is_dragging() {
                        let event = board.mouse_up(ev.button, ev.position);
                        board.dispatch(event, cx);
                    }
                });
            })
            // Released outside the widget: the drop lands off the board
            .on_mouse_up_out(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up_out.update(cx, |board, cx| {
                    if board.input().is_dragging() {
                        let event = board.mouse_up(ev.button, ev.position);
                        board.dispatch(event, cx);
                    }
                });
            })
    }
}
