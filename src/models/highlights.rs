//! Square overlays derived from the board, the selection and the hover square.

use shakmaty::{Move, Square};

use crate::config::BoardConfig;
use crate::domain::{BoardState, accepts_drop, hint_square, landing_square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// From or to square of the last move
    LastMove,
    /// The selected piece's square
    Selected,
    /// Hovered square that is a legal target of the selection
    HoverTarget,
    /// Legal quiet move target
    MoveDot,
    /// Legal capture target
    CaptureRing,
    /// King of the side to move, in check
    Check,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    pub last_move: Option<(Square, Square)>,
    pub selected: Option<Square>,
    pub hover_target: Option<Square>,
    pub dots: Vec<Square>,
    pub rings: Vec<Square>,
    pub check: Option<Square>,
}

impl Highlights {
    pub fn compute(
        board: &BoardState,
        selected: Option<Square>,
        moves: &[Move],
        hover: Option<Square>,
        config: &BoardConfig,
    ) -> Self {
        let mut highlights = Self {
            check: board.checked_king(),
            ..Self::default()
        };

        if config.show_last_move {
            highlights.last_move = board
                .peek()
                .and_then(|m| Some((m.from()?, landing_square(m))));
        }

        let Some(selected) = selected else {
            return highlights;
        };
        highlights.selected = Some(selected);

        let is_target = |sq: Square| moves.iter().any(|m| accepts_drop(m, sq));
        highlights.hover_target = hover.filter(|&sq| sq != selected && is_target(sq));

        if config.show_legal_moves {
            for m in moves {
                let target = hint_square(m);
                let hovered = highlights
                    .hover_target
                    .is_some_and(|sq| accepts_drop(m, sq));
                if target == selected || hovered {
                    continue;
                }
                // en passant lands on an empty square and gets a dot
                let list = if board.piece_at(target).is_some() {
                    &mut highlights.rings
                } else {
                    &mut highlights.dots
                };
                // promotions produce one move per role on the same square
                if !list.contains(&target) {
                    list.push(target);
                }
            }
        }

        highlights
    }

    /// Overlays for one square, in drawing order
    pub fn overlays_at(&self, square: Square) -> Vec<Overlay> {
        let mut overlays = Vec::new();
        if let Some((from, to)) = self.last_move {
            if square == from || square == to {
                overlays.push(Overlay::LastMove);
            }
        }
        if self.selected == Some(square) {
            overlays.push(Overlay::Selected);
        }
        if self.hover_target == Some(square) {
            overlays.push(Overlay::HoverTarget);
        }
        if self.check == Some(square) {
            overlays.push(Overlay::Check);
        }
        if self.dots.contains(&square) {
            overlays.push(Overlay::MoveDot);
        }
        if self.rings.contains(&square) {
            overlays.push(Overlay::CaptureRing);
        }
        overlays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut BoardState, moves: &[&str]) {
        for uci in moves {
            let m = board.parse_uci(uci).unwrap();
            board.push(m).unwrap();
        }
    }

    #[test]
    fn test_no_selection() {
        let mut board = BoardState::new();
        play(&mut board, &["e2e4"]);
        let h = Highlights::compute(&board, None, &[], None, &BoardConfig::default());
        assert_eq!(h.last_move, Some((Square::E2, Square::E4)));
        assert_eq!(h.selected, None);
        assert!(h.dots.is_empty());
        assert_eq!(h.overlays_at(Square::E4), vec![Overlay::LastMove]);
    }

    #[test]
    fn test_dots_and_rings() {
        let mut board = BoardState::new();
        play(&mut board, &["e2e4", "d7d5"]);
        let moves = board.legal_moves_from(Square::E4);
        let h = Highlights::compute(
            &board,
            Some(Square::E4),
            &moves,
            None,
            &BoardConfig::default(),
        );
        assert_eq!(h.dots, vec![Square::E5]);
        assert_eq!(h.rings, vec![Square::D5]);
        assert_eq!(h.overlays_at(Square::E4), vec![Overlay::Selected]);
    }

    #[test]
    fn test_en_passant_target_gets_dot() {
        let board = BoardState::from_fen(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            shakmaty::CastlingMode::Standard,
        )
        .unwrap();
        let moves = board.legal_moves_from(Square::E5);
        let h = Highlights::compute(
            &board,
            Some(Square::E5),
            &moves,
            None,
            &BoardConfig::default(),
        );
        assert_eq!(board.piece_at(Square::D6), None);
        assert!(h.dots.contains(&Square::D6));
        assert!(h.dots.contains(&Square::E6));
        assert!(h.rings.is_empty());
    }

    #[test]
    fn test_hover_replaces_hint() {
        let board = BoardState::new();
        let moves = board.legal_moves_from(Square::E2);
        let h = Highlights::compute(
            &board,
            Some(Square::E2),
            &moves,
            Some(Square::E4),
            &BoardConfig::default(),
        );
        assert_eq!(h.hover_target, Some(Square::E4));
        assert_eq!(h.dots, vec![Square::E3]);

        // Hovering a non-target shows nothing extra
        let h = Highlights::compute(
            &board,
            Some(Square::E2),
            &moves,
            Some(Square::E5),
            &BoardConfig::default(),
        );
        assert_eq!(h.hover_target, None);
        assert_eq!(h.dots.len(), 2);
    }

    #[test]
    fn test_check_square() {
        let mut board = BoardState::new();
        play(&mut board, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);
        let h = Highlights::compute(&board, None, &[], None, &BoardConfig::default());
        assert_eq!(h.check, Some(Square::E8));
        assert!(h.overlays_at(Square::E8).contains(&Overlay::Check));
    }

    #[test]
    fn test_castling_target_is_king_destination() {
        let board = BoardState::from_fen(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            shakmaty::CastlingMode::Standard,
        )
        .unwrap();
        let moves = board.legal_moves_from(Square::E1);
        let h = Highlights::compute(
            &board,
            Some(Square::E1),
            &moves,
            None,
            &BoardConfig::default(),
        );
        assert!(h.dots.contains(&Square::G1));
        assert!(h.dots.contains(&Square::C1));
        assert!(!h.rings.contains(&Square::H1));
    }

    #[test]
    fn test_hover_on_rook_square_while_castling() {
        let board = BoardState::from_fen(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            shakmaty::CastlingMode::Standard,
        )
        .unwrap();
        let moves = board.legal_moves_from(Square::E1);
        let h = Highlights::compute(
            &board,
            Some(Square::E1),
            &moves,
            Some(Square::H1),
            &BoardConfig::default(),
        );
        assert_eq!(h.hover_target, Some(Square::H1));
        assert!(h.overlays_at(Square::H1).contains(&Overlay::HoverTarget));
        // the hovered castle is no longer hinted on the king's destination
        assert!(!h.dots.contains(&Square::G1));
        assert!(h.dots.contains(&Square::C1));
    }

    #[test]
    fn test_chess960_castle_with_king_in_place_is_hinted() {
        let board = BoardState::from_fen(
            "4k3/8/8/8/8/8/8/6KR w K - 0 1",
            shakmaty::CastlingMode::Chess960,
        )
        .unwrap();
        let moves = board.legal_moves_from(Square::G1);
        assert!(moves.iter().any(|m| matches!(m, Move::Castle { .. })));
        let h = Highlights::compute(
            &board,
            Some(Square::G1),
            &moves,
            None,
            &BoardConfig::default(),
        );
        assert_eq!(h.rings, vec![Square::H1]);
        assert!(!h.dots.contains(&Square::G1));
        assert!(h.overlays_at(Square::H1).contains(&Overlay::CaptureRing));
    }

    #[test]
    fn test_config_disables_hints() {
        let mut board = BoardState::new();
        play(&mut board, &["e2e4"]);
        let config = BoardConfig {
            show_legal_moves: false,
            show_last_move: false,
            ..BoardConfig::default()
        };
        let moves = board.legal_moves_from(Square::E7);
        let h = Highlights::compute(&board, Some(Square::E7), &moves, None, &config);
        assert!(h.dots.is_empty());
        assert_eq!(h.last_move, None);
        assert_eq!(h.selected, Some(Square::E7));
    }
}
