use core::fmt;

use board::{Board, BoardSquare, Color, Move, MoveError, MoveOutcome, Piece, PieceKind};
use tracing::debug;

mod movegen;

pub type Result<T, E = MoveError> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("expected 8 rows separated by `/`, found {0}")]
    WrongRowCount(usize),
    #[error("row {0} does not describe exactly 8 squares")]
    WrongRowLength(usize),
    #[error("unknown piece letter `{0}`")]
    UnknownPiece(char),
}

/// Represent the board as a plain 8x8 grid of optional pieces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailboxBoard {
    /// Indexed by rank, then file
    squares: [[Option<Piece>; 8]; 8],
}

impl MailboxBoard {
    /// A board with no pieces on it
    pub const EMPTY: Self = Self {
        squares: [[None; 8]; 8],
    };

    /// Parse the piece-placement field of a FEN string
    ///
    /// The first row described is rank 0 (black's side). Every parsed piece starts out unmoved.
    ///
    /// ```
    /// use board::{Board, BoardSquare, PieceKind};
    /// use mailbox::MailboxBoard;
    ///
    /// let board = MailboxBoard::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
    /// assert_eq!(board.get(BoardSquare::H1).map(|p| p.kind), Some(PieceKind::Rook));
    /// assert_eq!(board.piece_count(), 3);
    /// ```
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount(rows.len()));
        }
        let mut board = Self::EMPTY;
        for (rank, row) in rows.into_iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = match c.to_ascii_uppercase() {
                    'P' => PieceKind::Pawn,
                    'N' => PieceKind::Knight,
                    'B' => PieceKind::Bishop,
                    'R' => PieceKind::Rook,
                    'Q' => PieceKind::Queen,
                    'K' => PieceKind::King,
                    _ => return Err(PlacementError::UnknownPiece(c)),
                };
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(PlacementError::WrongRowLength(rank));
                }
                board.squares[rank][file] = Some(Piece::new(kind, color));
                file += 1;
            }
            if file != 8 {
                return Err(PlacementError::WrongRowLength(rank));
            }
        }
        Ok(board)
    }

    /// Convert to the piece-placement field of a FEN string
    pub fn to_placement(&self) -> String {
        let mut placement = String::with_capacity(64);
        for (rank, row) in self.squares.iter().enumerate() {
            if rank != 0 {
                placement.push('/');
            }
            let mut gap = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if gap != 0 {
                            placement.push_str(&gap.to_string());
                            gap = 0;
                        }
                        placement.push(piece.letter());
                    }
                    None => gap += 1,
                }
            }
            if gap != 0 {
                placement.push_str(&gap.to_string());
            }
        }
        placement
    }

    /// The square the rook leaves and the square it lands on when a king castles with `mv`
    fn castling_rook_move(mv: Move) -> Move {
        let rank = mv.source.rank();
        if mv.target.file() > mv.source.file() {
            Move::new(
                BoardSquare::from_file_rank(7, rank),
                BoardSquare::from_file_rank(5, rank),
            )
        } else {
            Move::new(
                BoardSquare::from_file_rank(0, rank),
                BoardSquare::from_file_rank(3, rank),
            )
        }
    }
}

impl Board for MailboxBoard {
    fn empty() -> Self {
        Self::EMPTY
    }

    fn get(&self, square: BoardSquare) -> Option<Piece> {
        let (file, rank) = square.file_rank()?;
        self.squares[rank as usize][file as usize]
    }

    fn set(&mut self, square: BoardSquare, piece: Option<Piece>) {
        if let Some((file, rank)) = square.file_rank() {
            self.squares[rank as usize][file as usize] = piece;
        }
    }

    fn destinations(&self, square: BoardSquare) -> Vec<BoardSquare> {
        self.generate_destinations(square)
    }

    fn apply_move_detailed(&mut self, mv: Move) -> Result<MoveOutcome> {
        if !self.is_valid_square(mv.source) || !self.is_valid_square(mv.target) {
            return Err(MoveError::InvalidSquare);
        }
        let Some(mut piece) = self.get(mv.source) else {
            return Err(MoveError::EmptySource(mv.source));
        };
        let captured = self.get(mv.target);
        if captured.is_some_and(|other| other.color == piece.color) {
            return Err(MoveError::SelfCapture(mv.source, mv.target));
        }

        piece.has_moved = true;
        self.set(mv.target, Some(piece));
        self.set(mv.source, None);
        debug!(%mv, ?piece.kind, color = %piece.color, ?captured, "applied move");

        // A king crossing more than one file is castling, and drags its rook along as a second
        // ordinary move.
        let castled_rook = if piece.kind == PieceKind::King && mv.file_distance() > 1 {
            let rook_move = Self::castling_rook_move(mv);
            match self.apply_move_detailed(rook_move) {
                Ok(_) => Some(rook_move),
                Err(err) => {
                    debug!(%mv, %err, "castling king moved without its rook");
                    None
                }
            }
        } else {
            None
        };

        Ok(MoveOutcome {
            moved: piece,
            captured,
            castled_rook,
        })
    }
}

/// Display as a text diagram, rank 0 on top, with `.` for empty squares
///
/// ```
/// use board::Board;
/// use mailbox::MailboxBoard;
///
/// assert_eq!(
///     MailboxBoard::initial_state().to_string(),
///     "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR\n",
/// );
/// ```
impl fmt::Display for MailboxBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for row in &self.squares {
            for square in row {
                f.write_char(square.map_or('.', Piece::letter))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> MailboxBoard {
        MailboxBoard::from_placement(placement).expect("test placement should parse")
    }

    #[test]
    fn test_initial_position() {
        let board = MailboxBoard::initial_state();
        for color in [Color::White, Color::Black] {
            let pieces: Vec<_> = board.occupied_by(color).collect();
            assert_eq!(pieces.len(), 16);
            assert!(pieces.iter().all(|(_, piece)| !piece.has_moved));
            for file in 0..8 {
                let pawn = board.get(BoardSquare::from_file_rank(file, color.pawn_rank()));
                assert_eq!(pawn, Some(Piece::new(PieceKind::Pawn, color)));
                let back = board.get(BoardSquare::from_file_rank(file, color.home_rank()));
                assert_eq!(
                    back,
                    Some(Piece::new(PieceKind::BACK_RANK[file as usize], color))
                );
            }
        }
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn test_placement_round_trip() {
        let initial = MailboxBoard::initial_state();
        assert_eq!(
            initial.to_placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(board(&initial.to_placement()), initial);
        let sparse = "r3k2r/8/8/3Q4/8/8/8/R3K2R";
        assert_eq!(board(sparse).to_placement(), sparse);
    }

    #[test]
    fn test_bad_placements() {
        assert!(matches!(
            MailboxBoard::from_placement("8/8/8"),
            Err(PlacementError::WrongRowCount(3))
        ));
        assert!(matches!(
            MailboxBoard::from_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::WrongRowLength(0))
        ));
        assert!(matches!(
            MailboxBoard::from_placement("8/8/8/8/8/8/8/7X"),
            Err(PlacementError::UnknownPiece('X'))
        ));
    }

    #[test]
    fn test_move_marks_piece_and_clears_source() {
        let mut board = MailboxBoard::initial_state();
        let outcome = board
            .apply_move_detailed("g1f3".parse().unwrap())
            .unwrap();
        assert!(outcome.moved.has_moved);
        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.castled_rook, None);
        assert_eq!(board.get(BoardSquare::G1), None);
        assert_eq!(
            board.get(BoardSquare::F3),
            Some(Piece {
                kind: PieceKind::Knight,
                color: Color::White,
                has_moved: true,
            })
        );
    }

    #[test]
    fn test_capture_overwrites_target() {
        let mut board = board("4k3/8/8/3p4/8/8/8/3QK3");
        let outcome = board.apply_move_detailed("d1d5".parse().unwrap()).unwrap();
        assert_eq!(
            outcome.captured,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.get(BoardSquare::D5).map(|p| p.kind), Some(PieceKind::Queen));
        assert_eq!(board.piece_count(), 3);
    }

    #[test]
    fn test_empty_source_is_noop() {
        let mut board = MailboxBoard::initial_state();
        let before = board.clone();
        assert_eq!(
            board.apply_move("e4e5".parse().unwrap()),
            Err(MoveError::EmptySource(BoardSquare::E4))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_self_capture_is_noop() {
        let mut board = MailboxBoard::initial_state();
        let before = board.clone();
        assert_eq!(
            board.apply_move("a1a2".parse().unwrap()),
            Err(MoveError::SelfCapture(BoardSquare::A1, BoardSquare::A2))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_square_is_noop() {
        let mut board = MailboxBoard::initial_state();
        let before = board.clone();
        assert_eq!(
            board.apply_move(Move::new(BoardSquare::E2, BoardSquare::INVALID)),
            Err(MoveError::InvalidSquare)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_square_validity() {
        let board = MailboxBoard::EMPTY;
        assert!(BoardSquare::all_squares().all(|square| board.is_valid_square(square)));
        assert!(!board.is_valid_square(BoardSquare::INVALID));
        assert!(!board.is_valid_square(BoardSquare::H1.offset(1, 0)));
        assert!(!board.is_valid_square(BoardSquare::A8.offset(0, -1)));
    }

    #[test]
    fn test_kingside_castle_moves_rook() {
        let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R");
        let outcome = board.apply_move_detailed("e1g1".parse().unwrap()).unwrap();
        assert_eq!(
            outcome.castled_rook,
            Some(Move::new(BoardSquare::H1, BoardSquare::F1))
        );
        assert_eq!(board.get(BoardSquare::H1), None);
        assert_eq!(board.get(BoardSquare::E1), None);
        let king = board.get(BoardSquare::G1).unwrap();
        let rook = board.get(BoardSquare::F1).unwrap();
        assert_eq!((king.kind, king.has_moved), (PieceKind::King, true));
        assert_eq!((rook.kind, rook.has_moved), (PieceKind::Rook, true));
        assert_eq!(board.piece_count(), 6);
    }

    #[test]
    fn test_queenside_castle_moves_rook() {
        let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R");
        let outcome = board.apply_move_detailed("e8c8".parse().unwrap()).unwrap();
        assert_eq!(
            outcome.castled_rook,
            Some(Move::new(BoardSquare::A8, BoardSquare::D8))
        );
        assert_eq!(board.get(BoardSquare::C8).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.get(BoardSquare::D8).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.get(BoardSquare::A8), None);
    }

    #[test]
    fn test_castle_without_rook_still_moves_king() {
        let mut board = board("4k3/8/8/8/8/8/8/4K3");
        let outcome = board.apply_move_detailed("e1g1".parse().unwrap()).unwrap();
        assert_eq!(outcome.castled_rook, None);
        assert_eq!(board.get(BoardSquare::G1).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn test_one_file_king_step_is_not_a_castle() {
        let mut board = board("4k3/8/8/8/8/8/8/4K2R");
        let outcome = board.apply_move_detailed("e1f1".parse().unwrap()).unwrap();
        assert_eq!(outcome.castled_rook, None);
        assert_eq!(board.get(BoardSquare::H1).map(|p| p.has_moved), Some(false));
    }
}
