//! Demo window: the board with a flip button, history navigation and a
//! random-move opponent.

use std::time::Duration;

use gpui::{
    AsyncApp, ClickEvent, Context, Entity, Subscription, Task, WeakEntity, Window, div,
    prelude::*, px, rgb,
};
use gpui_component::Disableable;
use gpui_component::button::{Button, ButtonVariants};
use rand::seq::SliceRandom;
use shakmaty::{Color, Position};
use tracing::{info, warn};

use crate::models::{BoardEvent, BoardModel, MoveHistory, MoveOptions};
use crate::ui::theme::{CONTROL_BAR_HEIGHT, PANEL_BG, WINDOW_MARGIN};
use crate::ui::views::ChessBoardView;

/// Delay before the opponent answers
const OPPONENT_DELAY: Duration = Duration::from_millis(500);

pub struct DemoView {
    model: Entity<BoardModel>,
    board_view: Entity<ChessBoardView>,
    history: MoveHistory,
    player_color: Color,
    _opponent_task: Option<Task<()>>,
    _subscription: Subscription,
}

impl DemoView {
    pub fn new(model: Entity<BoardModel>, cx: &mut Context<Self>) -> Self {
        let board_view = cx.new(|cx| ChessBoardView::new(model.clone(), cx));
        let _subscription = cx.subscribe(&model, |this, _, event: &BoardEvent, cx| {
            this.on_board_event(event, cx);
        });
        let player_color = if model.read(cx).is_flipped() {
            Color::Black
        } else {
            Color::White
        };
        Self {
            model,
            board_view,
            history: MoveHistory::new(),
            player_color,
            _opponent_task: None,
            _subscription,
        }
    }

    fn on_board_event(&mut self, event: &BoardEvent, cx: &mut Context<Self>) {
        match event {
            BoardEvent::MovePlayed { mv, info } => {
                self.history.record_played(mv.clone(), info.interactive);
                info!(
                    index = self.history.index(),
                    len = self.history.len(),
                    interactive = info.interactive,
                    "history updated"
                );
                if self.history.is_at_end() {
                    self.check_opponent_move(cx);
                }
            }
            BoardEvent::MoveUndone { .. } => self.history.record_undone(),
        }
        cx.notify();
    }

    fn toggle_flip(&mut self, cx: &mut Context<Self>) {
        let flipped = self.model.update(cx, |board, cx| {
            let flipped = !board.is_flipped();
            board.set_flipped(flipped, cx);
            flipped
        });
        self.player_color = if flipped { Color::Black } else { Color::White };

        // Only trigger the opponent at the last position
        if self.history.is_at_end() {
            self.check_opponent_move(cx);
        }
    }

    fn check_opponent_move(&mut self, cx: &mut Context<Self>) {
        let board = self.model.read(cx).board();
        if board.is_game_over() {
            info!("game over");
            return;
        }
        if board.turn() == self.player_color {
            return;
        }

        self._opponent_task = Some(cx.spawn(
            async move |this: WeakEntity<DemoView>, cx: &mut AsyncApp| {
                cx.background_executor().timer(OPPONENT_DELAY).await;
                let _ = this.update(cx, |view, cx| view.make_opponent_move(cx));
            },
        ));
    }

    fn make_opponent_move(&mut self, cx: &mut Context<Self>) {
        // The user may have navigated away in the meantime
        if !self.history.is_at_end() {
            return;
        }
        let player_color = self.player_color;
        self.model.update(cx, |board, cx| {
            if board.board().turn() == player_color {
                return;
            }
            let legal: Vec<_> = board.board().position().legal_moves().into_iter().collect();
            let Some(mv) = legal.choose(&mut rand::thread_rng()).cloned() else {
                return;
            };
            if let Err(err) = board.play_move(mv, MoveOptions::default(), cx) {
                warn!(%err, "opponent move rejected");
            }
        });
    }

    fn go_first(&mut self, cx: &mut Context<Self>) {
        let count = self.history.index();
        self.model.update(cx, |board, cx| {
            for _ in 0..count {
                board.undo_move(false, cx);
            }
        });
    }

    fn go_prev(&mut self, cx: &mut Context<Self>) {
        if self.history.is_at_start() {
            return;
        }
        self.model.update(cx, |board, cx| board.undo_move(true, cx));
    }

    fn go_next(&mut self, cx: &mut Context<Self>) {
        let Some(mv) = self.history.next_move().cloned() else {
            return;
        };
        self.replay(vec![mv], MoveOptions::default(), cx);
    }

    fn go_last(&mut self, cx: &mut Context<Self>) {
        let rest = self.history.remaining().to_vec();
        self.replay(rest, MoveOptions::instant(), cx);
    }

    fn replay(&mut self, moves: Vec<shakmaty::Move>, options: MoveOptions, cx: &mut Context<Self>) {
        self.model.update(cx, |board, cx| {
            for mv in moves {
                if let Err(err) = board.play_move(mv, options, cx) {
                    warn!(%err, "replay stopped");
                    break;
                }
            }
        });
    }
}

fn nav_button(id: &'static str, label: &'static str, enabled: bool) -> Button {
    Button::new(id).label(label).ghost().disabled(!enabled)
}

impl Render for DemoView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let has_prev = !self.history.is_at_start();
        let has_next = !self.history.is_at_end();

        let flip_bar = div()
            .h(px(CONTROL_BAR_HEIGHT))
            .flex()
            .items_center()
            .justify_center()
            .child(
                Button::new("flip-board")
                    .label("⇅ Flip Board")
                    .ghost()
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.toggle_flip(cx))),
            );

        let nav_bar = div()
            .h(px(CONTROL_BAR_HEIGHT))
            .flex()
            .items_center()
            .gap_1()
            .child(div().flex_1().child(
                nav_button("nav-first", "⏮", has_prev)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.go_first(cx))),
            ))
            .child(div().flex_1().child(
                nav_button("nav-prev", "◀", has_prev)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.go_prev(cx))),
            ))
            .child(div().flex_1().child(
                nav_button("nav-next", "▶", has_next)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.go_next(cx))),
            ))
            .child(div().flex_1().child(
                nav_button("nav-last", "⏭", has_next)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.go_last(cx))),
            ));

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(PANEL_BG))
            .p(px(WINDOW_MARGIN))
            .child(flip_bar)
            .child(div().flex_1().min_h_0().child(self.board_view.clone()))
            .child(nav_bar)
    }
}
