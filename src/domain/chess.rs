//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use shakmaty::{Color as SColor, File, Move, Rank, Role, Square};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceColor {
    White,
    Black,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    /// Asset path of the piece artwork, using the `wP`/`bK` naming scheme
    pub fn svg_path(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "assets/wP.svg",
            (PieceKind::Pawn, PieceColor::Black) => "assets/bP.svg",
            (PieceKind::Rook, PieceColor::White) => "assets/wR.svg",
            (PieceKind::Rook, PieceColor::Black) => "assets/bR.svg",
            (PieceKind::Knight, PieceColor::White) => "assets/wN.svg",
            (PieceKind::Knight, PieceColor::Black) => "assets/bN.svg",
            (PieceKind::Bishop, PieceColor::White) => "assets/wB.svg",
            (PieceKind::Bishop, PieceColor::Black) => "assets/bB.svg",
            (PieceKind::Queen, PieceColor::White) => "assets/wQ.svg",
            (PieceKind::Queen, PieceColor::Black) => "assets/bQ.svg",
            (PieceKind::King, PieceColor::White) => "assets/wK.svg",
            (PieceKind::King, PieceColor::Black) => "assets/bK.svg",
        }
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: to_piece_color(piece.color),
    }
}

pub fn to_piece_color(color: SColor) -> PieceColor {
    match color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    }
}

/// Visual (row, col) of a square. Row 0 is the top edge of the board as drawn.
pub fn visual_coords(square: Square, flipped: bool) -> (usize, usize) {
    let file = square.file() as usize;
    let rank = square.rank() as usize;
    if flipped {
        (rank, 7 - file)
    } else {
        (7 - rank, file)
    }
}

/// Inverse of [`visual_coords`]. Returns None for coordinates off the board.
pub fn square_at(row: usize, col: usize, flipped: bool) -> Option<Square> {
    if row > 7 || col > 7 {
        return None;
    }
    let (file, rank) = if flipped {
        (7 - col, row)
    } else {
        (col, 7 - row)
    };
    Some(Square::from_coords(
        File::new(file as u32),
        Rank::new(rank as u32),
    ))
}

/// Where the king lands for a castling move given as king + rook squares.
/// Works for Chess960 too: the king always ends on the g or c file.
pub fn castle_king_to(king: Square, rook: Square) -> Square {
    let file = if rook.file() > king.file() {
        File::G
    } else {
        File::C
    };
    Square::from_coords(file, king.rank())
}

/// Where the rook lands for a castling move.
pub fn castle_rook_to(king: Square, rook: Square) -> Square {
    let file = if rook.file() > king.file() {
        File::F
    } else {
        File::D
    };
    Square::from_coords(file, king.rank())
}

/// The square a piece visibly lands on. For castling this is the king's
/// destination rather than the rook square used in the move encoding.
pub fn landing_square(m: &Move) -> Square {
    match m {
        Move::Castle { king, rook } => castle_king_to(*king, *rook),
        _ => m.to(),
    }
}

/// Whether dropping the moving piece on `square` selects this move. Castling
/// also accepts the rook square ("king takes rook").
pub fn accepts_drop(m: &Move, square: Square) -> bool {
    landing_square(m) == square || m.to() == square
}

/// The square on which a move is hinted. A castle whose king stays put is
/// hinted on its rook.
pub fn hint_square(m: &Move) -> Square {
    match m {
        Move::Castle { king, rook } if castle_king_to(*king, *rook) == *king => *rook,
        _ => landing_square(m),
    }
}

/// The (from, to) square pairs of every piece that physically travels when the
/// move is played. Castling yields up to two paths; pieces that stay put (e.g. a
/// Chess960 rook already on its target) are left out.
pub fn move_paths(m: &Move) -> Vec<(Square, Square)> {
    match m {
        Move::Normal { from, to, .. } | Move::EnPassant { from, to } => vec![(*from, *to)],
        Move::Castle { king, rook } => {
            let king_to = castle_king_to(*king, *rook);
            let rook_to = castle_rook_to(*king, *rook);
            [(*king, king_to), (*rook, rook_to)]
                .into_iter()
                .filter(|(from, to)| from != to)
                .collect()
        }
        Move::Put { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_coords_orientation() {
        assert_eq!(visual_coords(Square::A8, false), (0, 0));
        assert_eq!(visual_coords(Square::H1, false), (7, 7));
        assert_eq!(visual_coords(Square::E2, false), (6, 4));

        assert_eq!(visual_coords(Square::H1, true), (0, 0));
        assert_eq!(visual_coords(Square::A8, true), (7, 7));
        assert_eq!(visual_coords(Square::E2, true), (1, 3));
    }

    #[test]
    fn test_square_at_inverts_visual_coords() {
        for flipped in [false, true] {
            for row in 0..8 {
                for col in 0..8 {
                    let sq = square_at(row, col, flipped).unwrap();
                    assert_eq!(visual_coords(sq, flipped), (row, col));
                }
            }
        }
        assert_eq!(square_at(8, 0, false), None);
        assert_eq!(square_at(0, 8, true), None);
    }

    #[test]
    fn test_castling_paths_standard() {
        let kingside = Move::Castle {
            king: Square::E1,
            rook: Square::H1,
        };
        assert_eq!(
            move_paths(&kingside),
            vec![(Square::E1, Square::G1), (Square::H1, Square::F1)]
        );
        assert_eq!(landing_square(&kingside), Square::G1);

        let queenside = Move::Castle {
            king: Square::E8,
            rook: Square::A8,
        };
        assert_eq!(
            move_paths(&queenside),
            vec![(Square::E8, Square::C8), (Square::A8, Square::D8)]
        );
    }

    #[test]
    fn test_castling_paths_chess960() {
        // King on c1 castles with the h-rook
        let m = Move::Castle {
            king: Square::C1,
            rook: Square::H1,
        };
        assert_eq!(
            move_paths(&m),
            vec![(Square::C1, Square::G1), (Square::H1, Square::F1)]
        );

        // Rook already on its target square does not travel
        let m = Move::Castle {
            king: Square::E1,
            rook: Square::F1,
        };
        assert_eq!(move_paths(&m), vec![(Square::E1, Square::G1)]);
    }

    #[test]
    fn test_castle_drop_and_hint_squares() {
        let kingside = Move::Castle {
            king: Square::E1,
            rook: Square::H1,
        };
        assert!(accepts_drop(&kingside, Square::G1));
        assert!(accepts_drop(&kingside, Square::H1));
        assert!(!accepts_drop(&kingside, Square::F1));
        assert_eq!(hint_square(&kingside), Square::G1);

        // King already on g1: nothing lands elsewhere, so hint the rook
        let in_place = Move::Castle {
            king: Square::G1,
            rook: Square::H1,
        };
        assert_eq!(hint_square(&in_place), Square::H1);
        assert!(accepts_drop(&in_place, Square::H1));
    }

    #[test]
    fn test_svg_paths() {
        let piece = Piece {
            kind: PieceKind::Knight,
            color: PieceColor::Black,
        };
        assert_eq!(piece.svg_path(), "assets/bN.svg");
    }
}
