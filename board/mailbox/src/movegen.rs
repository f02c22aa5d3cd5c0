//! Per-piece rules for where a piece may move, ignoring check

use board::{Board, BoardSquare, BoardSquareOffset as Offset, Piece, PieceKind};
use tracing::trace;

use crate::MailboxBoard;

impl MailboxBoard {
    /// Produce the squares the piece on `square` may move to
    ///
    /// An empty origin produces no destinations.
    pub(crate) fn generate_destinations(&self, square: BoardSquare) -> Vec<BoardSquare> {
        let Some(piece) = self.get(square) else {
            trace!(%square, "asked for destinations of an empty square");
            return Vec::new();
        };
        let mut destinations = Vec::with_capacity(27);
        let out = &mut destinations;
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(square, piece, out),
            PieceKind::Knight => self.step_destinations(square, piece, &Offset::KNIGHT_MOVES, out),
            PieceKind::Bishop => {
                self.slide_destinations(square, piece, &Offset::BISHOP_DIRECTIONS, out)
            }
            PieceKind::Rook => self.slide_destinations(square, piece, &Offset::ROOK_DIRECTIONS, out),
            PieceKind::Queen => {
                self.slide_destinations(square, piece, &Offset::QUEEN_DIRECTIONS, out)
            }
            PieceKind::King => {
                self.step_destinations(square, piece, &Offset::KING_MOVES, out);
                self.castling_destinations(square, piece, out);
            }
        }
        trace!(%square, ?piece.kind, count = destinations.len(), "generated destinations");
        destinations
    }

    /// Whether `piece` could land on `square`: it's on the board and not held by a friendly piece
    fn can_land_on(&self, square: BoardSquare, piece: Piece) -> bool {
        self.is_valid_square(square)
            && self
                .get(square)
                .map_or(true, |occupant| occupant.is_enemy_of(piece))
    }

    /// Cast a ray in each direction, stopping at the edge or at the first piece in the way
    fn slide_destinations(
        &self,
        origin: BoardSquare,
        piece: Piece,
        directions: &[Offset],
        destinations: &mut Vec<BoardSquare>,
    ) {
        for direction in directions {
            let mut square = direction.offset(origin);
            while self.is_valid_square(square) {
                match self.get(square) {
                    None => destinations.push(square),
                    Some(occupant) => {
                        if occupant.is_enemy_of(piece) {
                            destinations.push(square);
                        }
                        break;
                    }
                }
                square = direction.offset(square);
            }
        }
    }

    /// Jump to each of the fixed offsets
    fn step_destinations(
        &self,
        origin: BoardSquare,
        piece: Piece,
        offsets: &[Offset],
        destinations: &mut Vec<BoardSquare>,
    ) {
        destinations.extend(
            offsets
                .iter()
                .map(|offset| offset.offset(origin))
                .filter(|&square| self.can_land_on(square, piece)),
        );
    }

    fn pawn_destinations(
        &self,
        origin: BoardSquare,
        piece: Piece,
        destinations: &mut Vec<BoardSquare>,
    ) {
        let forward = piece.color.pawn_direction();
        let single = origin.offset(0, forward);
        if self.is_valid_square(single) && self.get(single).is_none() {
            destinations.push(single);
            let double = single.offset(0, forward);
            if !piece.has_moved && self.is_valid_square(double) && self.get(double).is_none() {
                destinations.push(double);
            }
        }
        // Diagonal steps are only ever captures; there is no en passant
        for side in [-1, 1] {
            let target = origin.offset(side, forward);
            if self
                .get(target)
                .is_some_and(|occupant| occupant.is_enemy_of(piece))
            {
                destinations.push(target);
            }
        }
    }

    /// Add the squares an unmoved king lands on when castling with an unmoved rook
    ///
    /// Only the pieces' history and the squares between them are checked. Nothing here knows
    /// whether the king is in check or passes through an attacked square.
    fn castling_destinations(
        &self,
        origin: BoardSquare,
        king: Piece,
        destinations: &mut Vec<BoardSquare>,
    ) {
        if king.has_moved {
            return;
        }
        let (king_file, rank) = (origin.file(), origin.rank());
        for (rook_file, landing_file) in [(0u8, 2u8), (7, 6)] {
            let rook_ready = self
                .get(BoardSquare::from_file_rank(rook_file, rank))
                .is_some_and(|rook| {
                    rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
                });
            if !rook_ready {
                continue;
            }
            let path_clear = (rook_file.min(king_file) + 1..rook_file.max(king_file))
                .all(|file| self.get(BoardSquare::from_file_rank(file, rank)).is_none());
            let landing = BoardSquare::from_file_rank(landing_file, rank);
            if path_clear && self.get(landing).is_none() {
                destinations.push(landing);
            }
        }
    }
}
