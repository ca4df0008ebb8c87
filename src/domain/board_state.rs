//! Board state wrapper around the rules engine.
//!
//! shakmaty positions are immutable values, so the move stack keeps the
//! position before each move. Undo pops it back.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Position, Square};

use crate::domain::BoardError;

#[derive(Clone, Debug)]
pub struct BoardState {
    position: Chess,
    /// (position before the move, move) for every move played
    stack: Vec<(Chess, Move)>,
    mode: CastlingMode,
}

impl BoardState {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default(), CastlingMode::Standard)
    }

    pub fn from_position(position: Chess, mode: CastlingMode) -> Self {
        Self {
            position,
            stack: Vec::new(),
            mode,
        }
    }

    pub fn from_fen(fen: &str, mode: CastlingMode) -> Result<Self, BoardError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| BoardError::InvalidFen(format!("{e}")))?;
        let position: Chess = fen
            .into_position(mode)
            .map_err(|e| BoardError::InvalidFen(format!("{e}")))?;
        Ok(Self::from_position(position, mode))
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn castling_mode(&self) -> CastlingMode {
        self.mode
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn piece_at(&self, sq: Square) -> Option<shakmaty::Piece> {
        self.position.board().piece_at(sq)
    }

    pub fn is_legal(&self, m: &Move) -> bool {
        self.position.legal_moves().contains(m)
    }

    /// Legal moves of the piece standing on `from`
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .filter(|m| m.from() == Some(from))
            .collect()
    }

    /// King square of the side to move, if that king is in check
    pub fn checked_king(&self) -> Option<Square> {
        if self.position.is_check() {
            self.position.board().king_of(self.position.turn())
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    pub fn parse_uci(&self, uci: &str) -> Result<Move, BoardError> {
        let parsed: UciMove = uci
            .parse()
            .map_err(|_| BoardError::InvalidUci(uci.to_string()))?;
        parsed
            .to_move(&self.position)
            .map_err(|_| BoardError::IllegalMove(uci.to_string()))
    }

    /// UCI text of a move in this board's castling mode
    pub fn uci(&self, m: &Move) -> String {
        m.to_uci(self.mode).to_string()
    }

    /// Play a move, rejecting it if it is not legal.
    pub fn push(&mut self, m: Move) -> Result<(), BoardError> {
        let next = self
            .position
            .clone()
            .play(m.clone())
            .map_err(|_| BoardError::IllegalMove(self.uci(&m)))?;
        let before = std::mem::replace(&mut self.position, next);
        self.stack.push((before, m));
        Ok(())
    }

    /// Take back the last move. Returns None when no move has been played.
    pub fn pop(&mut self) -> Option<Move> {
        let (before, m) = self.stack.pop()?;
        self.position = before;
        Some(m)
    }

    /// The last move played, if any
    pub fn peek(&self) -> Option<&Move> {
        self.stack.last().map(|(_, m)| m)
    }

    /// Position before the last move, if any
    pub fn previous_position(&self) -> Option<&Chess> {
        self.stack.last().map(|(pos, _)| pos)
    }

    pub fn move_stack(&self) -> impl Iterator<Item = &Move> {
        self.stack.iter().map(|(_, m)| m)
    }

    pub fn move_count(&self) -> usize {
        self.stack.len()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{Piece, Role};

    #[test]
    fn test_push_and_pop() {
        let mut board = BoardState::new();
        let m = board.parse_uci("e2e4").unwrap();
        board.push(m.clone()).unwrap();

        assert_eq!(board.move_count(), 1);
        assert_eq!(board.peek(), Some(&m));
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.piece_at(Square::E2), None);

        assert_eq!(board.pop(), Some(m));
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.position().board(), Chess::default().board());
        assert_eq!(board.pop(), None);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut board = BoardState::new();
        let m = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            to: Square::E5,
            capture: None,
            promotion: None,
        };
        assert!(matches!(board.push(m), Err(BoardError::IllegalMove(_))));
        assert_eq!(board.move_count(), 0);

        assert!(matches!(
            board.parse_uci("e2e5"),
            Err(BoardError::IllegalMove(_))
        ));
        assert!(matches!(
            board.parse_uci("nonsense"),
            Err(BoardError::InvalidUci(_))
        ));
    }

    #[test]
    fn test_invalid_fen() {
        let err = BoardState::from_fen("not a fen", CastlingMode::Standard).unwrap_err();
        assert!(matches!(err, BoardError::InvalidFen(_)));
    }

    #[test]
    fn test_checked_king() {
        // 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7+
        let mut board = BoardState::new();
        for uci in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
            let m = board.parse_uci(uci).unwrap();
            board.push(m).unwrap();
        }
        assert_eq!(board.checked_king(), Some(Square::E8));
        assert!(board.is_game_over());
    }

    #[test]
    fn test_chess960_castling() {
        let mut board =
            BoardState::from_fen("4k3/8/8/8/8/8/8/R1K4R w KQ - 0 1", CastlingMode::Chess960)
                .unwrap();
        let m = Move::Castle {
            king: Square::C1,
            rook: Square::H1,
        };
        assert!(board.is_legal(&m));
        board.push(m).unwrap();

        assert_eq!(board.piece_at(Square::G1), Some(Piece::from_char('K').unwrap()));
        assert_eq!(board.piece_at(Square::F1), Some(Piece::from_char('R').unwrap()));
        assert_eq!(board.piece_at(Square::C1), None);
        assert_eq!(board.piece_at(Square::H1), None);

        board.pop();
        assert_eq!(board.piece_at(Square::C1), Some(Piece::from_char('K').unwrap()));
        assert_eq!(board.piece_at(Square::H1), Some(Piece::from_char('R').unwrap()));
    }
}
