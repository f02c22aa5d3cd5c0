use core::{fmt, str::FromStr};

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    /// The pieces on a back rank at the start of the game, from file 0 to file 7
    pub const BACK_RANK: [PieceKind; 8] = [
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
        Self::Bishop,
        Self::Knight,
        Self::Rook,
    ];

    /// The capitalized letter used for this piece in text diagrams
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Whether this piece moves along rays until blocked
    pub const fn is_sliding(self) -> bool {
        match self {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The rank a pawn of this color moves toward each step
    ///
    /// White starts at the bottom of the board (rank 7), so its pawns move toward rank 0.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The rank holding this color's king and rooks at the start of the game
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The rank holding this color's pawns at the start of the game
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

/// A piece, along with whether it has moved since the game started
///
/// The `has_moved` flag gates pawn double-steps and castling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}
impl Piece {
    /// A piece that hasn't moved yet
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// The letter for this piece, uppercase for white and lowercase for black
    pub const fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// The unicode chess symbol for this piece
    ///
    /// ```
    /// use board::{Color, Piece, PieceKind};
    /// assert_eq!(Piece::new(PieceKind::King, Color::White).glyph(), '♔');
    /// assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).glyph(), '♟');
    /// ```
    pub const fn glyph(self) -> char {
        let base: u32 = match self.color {
            Color::White => 0x2654,
            Color::Black => 0x265A,
        };
        let offset = match self.kind {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        };
        match char::from_u32(base + offset) {
            Some(c) => c,
            None => self.letter(),
        }
    }

    /// Whether `other` belongs to the opposing side
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        self.color as u8 != other.color as u8
    }
}

/// Algebraic names of the squares, indexed by `rank * 8 + file`
const SQUARE_NAMES: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", //
];

/// An index on the board
///
/// Stored in 0x88 method:
/// ```text
/// 0b12345678
///        +-+ File
///    +-+ Rank
///   +   + Must be zero, invalid position if 1
/// ```
///
/// Rank 0 is the top row of the board as displayed (black's home rank) and rank 7 the bottom
/// (white's home rank), so `(4, 6)` is the square named `e2`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSquare(pub u8);
impl BoardSquare {
    /// An invalid square
    ///
    /// Please use this instead of making your own so it's obvious if a deliberately-invalid square
    /// appeared.
    pub const INVALID: Self = Self(0xee);

    pub const A8: Self = Self(0x00);
    pub const B8: Self = Self(0x01);
    pub const C8: Self = Self(0x02);
    pub const D8: Self = Self(0x03);
    pub const E8: Self = Self(0x04);
    pub const F8: Self = Self(0x05);
    pub const G8: Self = Self(0x06);
    pub const H8: Self = Self(0x07);
    pub const A7: Self = Self(0x10);
    pub const B7: Self = Self(0x11);
    pub const C7: Self = Self(0x12);
    pub const D7: Self = Self(0x13);
    pub const E7: Self = Self(0x14);
    pub const F7: Self = Self(0x15);
    pub const G7: Self = Self(0x16);
    pub const H7: Self = Self(0x17);
    pub const A6: Self = Self(0x20);
    pub const B6: Self = Self(0x21);
    pub const C6: Self = Self(0x22);
    pub const D6: Self = Self(0x23);
    pub const E6: Self = Self(0x24);
    pub const F6: Self = Self(0x25);
    pub const G6: Self = Self(0x26);
    pub const H6: Self = Self(0x27);
    pub const A5: Self = Self(0x30);
    pub const B5: Self = Self(0x31);
    pub const C5: Self = Self(0x32);
    pub const D5: Self = Self(0x33);
    pub const E5: Self = Self(0x34);
    pub const F5: Self = Self(0x35);
    pub const G5: Self = Self(0x36);
    pub const H5: Self = Self(0x37);
    pub const A4: Self = Self(0x40);
    pub const B4: Self = Self(0x41);
    pub const C4: Self = Self(0x42);
    pub const D4: Self = Self(0x43);
    pub const E4: Self = Self(0x44);
    pub const F4: Self = Self(0x45);
    pub const G4: Self = Self(0x46);
    pub const H4: Self = Self(0x47);
    pub const A3: Self = Self(0x50);
    pub const B3: Self = Self(0x51);
    pub const C3: Self = Self(0x52);
    pub const D3: Self = Self(0x53);
    pub const E3: Self = Self(0x54);
    pub const F3: Self = Self(0x55);
    pub const G3: Self = Self(0x56);
    pub const H3: Self = Self(0x57);
    pub const A2: Self = Self(0x60);
    pub const B2: Self = Self(0x61);
    pub const C2: Self = Self(0x62);
    pub const D2: Self = Self(0x63);
    pub const E2: Self = Self(0x64);
    pub const F2: Self = Self(0x65);
    pub const G2: Self = Self(0x66);
    pub const H2: Self = Self(0x67);
    pub const A1: Self = Self(0x70);
    pub const B1: Self = Self(0x71);
    pub const C1: Self = Self(0x72);
    pub const D1: Self = Self(0x73);
    pub const E1: Self = Self(0x74);
    pub const F1: Self = Self(0x75);
    pub const G1: Self = Self(0x76);
    pub const H1: Self = Self(0x77);

    /// Returns if this square is valid
    ///
    /// ```
    /// # use board::BoardSquare;
    /// assert!(!BoardSquare::INVALID.is_valid());
    /// assert!(BoardSquare::E2.is_valid());
    /// ```
    pub const fn is_valid(self) -> bool {
        self.0 & 0x88 == 0
    }

    /// Produce a board square from the file and rank, returning [`Self::INVALID`] if either is
    /// off the board.
    ///
    /// ```
    /// # use board::BoardSquare;
    /// assert_eq!(BoardSquare::from_file_rank(4, 6), BoardSquare::E2);
    /// assert_eq!(BoardSquare::from_file_rank(8, 0), BoardSquare::INVALID);
    /// ```
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        if file < 8 && rank < 8 {
            Self(rank << 4 | file)
        } else {
            Self::INVALID
        }
    }

    /// Returns the `(file, rank)` tuple if this position is valid
    pub const fn file_rank(self) -> Option<(u8, u8)> {
        if self.is_valid() {
            Some((self.0 & 0x07, self.0 >> 4))
        } else {
            None
        }
    }

    /// The file of a valid square
    pub const fn file(self) -> u8 {
        self.0 & 0x07
    }

    /// The rank of a valid square
    pub const fn rank(self) -> u8 {
        (self.0 >> 4) & 0x07
    }

    /// Converts self to the algebraic name of the square, if legal
    pub const fn as_str_legal(self) -> Option<&'static str> {
        match self.file_rank() {
            Some((file, rank)) => Some(SQUARE_NAMES[(rank * 8 + file) as usize]),
            None => None,
        }
    }

    /// Converts self to the string name for this position, or `"XX"` if illegal
    pub const fn as_str(self) -> &'static str {
        match self.as_str_legal() {
            Some(s) => s,
            None => "XX",
        }
    }

    /// Offset the given number of files and ranks.
    ///
    /// Positive file moves from a towards h, while positive rank moves down the board, towards
    /// white's side.
    ///
    /// ```rust
    /// use board::BoardSquare;
    /// assert_eq!(BoardSquare::D2, BoardSquare::A1.offset(3, -1));
    /// assert_eq!(BoardSquare::A1, BoardSquare::D2.offset(-3, 1));
    /// assert_eq!(BoardSquare::F7, BoardSquare::F7.offset(0, 0));
    /// assert!(!BoardSquare::D1.offset(0, 1).is_valid());
    /// assert!(!BoardSquare::D8.offset(0, -1).is_valid());
    /// assert!(!BoardSquare::A4.offset(-1, 0).is_valid());
    /// assert!(!BoardSquare::H4.offset(1, 0).is_valid());
    /// ```
    pub const fn offset(self, file: i8, rank: i8) -> Self {
        BoardSquareOffset::from_file_rank(file, rank).offset(self)
    }

    /// An iterator over all valid squares on the board, row by row from the top
    ///
    /// ```
    /// assert_eq!(board::BoardSquare::all_squares().count(), 64);
    /// ```
    pub fn all_squares() -> impl Iterator<Item = Self> {
        (0..64u8).map(|idx| Self((idx & 0x07) | ((idx >> 3) << 4)))
    }
}
impl fmt::Debug for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardSquare")
            .field("repr", &format_args!("{:X}", self.0))
            .field("readable", &self.as_str_legal().unwrap_or("illegal"))
            .finish()
    }
}
impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("board position string was invalid")]
pub struct BoardSquareFromStrErr;

impl FromStr for BoardSquare {
    type Err = BoardSquareFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(BoardSquareFromStrErr);
        };
        let file = match file {
            b'a'..=b'h' => file - b'a',
            _ => return Err(BoardSquareFromStrErr),
        };
        let rank = match rank {
            b'1'..=b'8' => b'8' - rank,
            _ => return Err(BoardSquareFromStrErr),
        };
        Ok(Self::from_file_rank(file, rank))
    }
}

/// An offset on a board
///
/// This struct stores any possible offset in both file and rank between any two squares, using
/// only one byte of space.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoardSquareOffset(u8);
impl BoardSquareOffset {
    /// The offsets corresponding to all possible knight moves
    pub const KNIGHT_MOVES: [BoardSquareOffset; 8] = [
        Self::from_file_rank(2, 1),
        Self::from_file_rank(2, -1),
        Self::from_file_rank(-2, 1),
        Self::from_file_rank(-2, -1),
        Self::from_file_rank(1, 2),
        Self::from_file_rank(-1, 2),
        Self::from_file_rank(1, -2),
        Self::from_file_rank(-1, -2),
    ];

    /// The offsets corresponding to all possible king moves, not counting castling
    pub const KING_MOVES: [BoardSquareOffset; 8] = [
        Self::from_file_rank(-1, 1),
        Self::from_file_rank(0, 1),
        Self::from_file_rank(1, 1),
        Self::from_file_rank(-1, 0),
        Self::from_file_rank(1, 0),
        Self::from_file_rank(-1, -1),
        Self::from_file_rank(0, -1),
        Self::from_file_rank(1, -1),
    ];

    /// The unit steps a rook slides along
    pub const ROOK_DIRECTIONS: [BoardSquareOffset; 4] = [
        Self::from_file_rank(1, 0),
        Self::from_file_rank(-1, 0),
        Self::from_file_rank(0, 1),
        Self::from_file_rank(0, -1),
    ];

    /// The unit steps a bishop slides along
    pub const BISHOP_DIRECTIONS: [BoardSquareOffset; 4] = [
        Self::from_file_rank(1, 1),
        Self::from_file_rank(1, -1),
        Self::from_file_rank(-1, 1),
        Self::from_file_rank(-1, -1),
    ];

    /// The unit steps a queen slides along: the bishop's diagonals, then the rook's lines
    pub const QUEEN_DIRECTIONS: [BoardSquareOffset; 8] = [
        Self::BISHOP_DIRECTIONS[0],
        Self::BISHOP_DIRECTIONS[1],
        Self::BISHOP_DIRECTIONS[2],
        Self::BISHOP_DIRECTIONS[3],
        Self::ROOK_DIRECTIONS[0],
        Self::ROOK_DIRECTIONS[1],
        Self::ROOK_DIRECTIONS[2],
        Self::ROOK_DIRECTIONS[3],
    ];

    /// Produce a new offset from the given file and rank amounts
    ///
    /// In debug mode, we assert that the file and rank are both on the interval [-7,7] (which are
    /// the only possible offsets). In release mode, we wrap modulo 16 and allow for -8, which
    /// invalidates any square.
    pub const fn from_file_rank(file: i8, rank: i8) -> Self {
        debug_assert!(-8 < rank && rank < 8);
        debug_assert!(-8 < file && file < 8);
        Self(((rank as u8) << 4) & 0xF0 | (file as u8) & 0x0F)
    }

    /// Offset the given board square
    ///
    /// If the square is already invalid, then the same square is returned unchanged.
    pub const fn offset(self, square: BoardSquare) -> BoardSquare {
        if square.is_valid() {
            BoardSquare(((self.0 & 0x77) + square.0) ^ (self.0 & 0x88))
        } else {
            square
        }
    }

    /// Gets the signed number of files associated with this offset
    pub const fn file(self) -> i8 {
        (self.0 as i8) << 4 >> 4
    }

    /// Gets the signed number of ranks associated with this offset
    pub const fn rank(self) -> i8 {
        (self.0 as i8) >> 4
    }
}
impl fmt::Debug for BoardSquareOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardSquareOffset")
            .field("file", &self.file())
            .field("rank", &self.rank())
            .finish()
    }
}

/// A piece moving from one square to another
///
/// Nothing else is recorded: captures are implied by the target's occupant, and castling by a
/// king moving more than one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: BoardSquare,
    pub target: BoardSquare,
}
impl Move {
    pub const fn new(source: BoardSquare, target: BoardSquare) -> Self {
        Self { source, target }
    }

    /// The number of files crossed by this move
    pub const fn file_distance(self) -> u8 {
        self.source.file().abs_diff(self.target.file())
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("move string was invalid, expected something like `e2e4`")]
pub struct MoveFromStrErr;

impl From<BoardSquareFromStrErr> for MoveFromStrErr {
    fn from(_: BoardSquareFromStrErr) -> Self {
        MoveFromStrErr
    }
}

impl FromStr for Move {
    type Err = MoveFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(MoveFromStrErr);
        }
        let source = s.get(0..2).ok_or(MoveFromStrErr)?.parse()?;
        let target = s.get(2..4).ok_or(MoveFromStrErr)?.parse()?;
        Ok(Self { source, target })
    }
}

/// Why applying a move left the board untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move refers to a square off the board")]
    InvalidSquare,
    #[error("no piece at move source {0}")]
    EmptySource(BoardSquare),
    #[error("move from {0} would capture a piece of the same color on {1}")]
    SelfCapture(BoardSquare, BoardSquare),
}

/// What happened when a move was applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved, after its `has_moved` flag was set
    pub moved: Piece,
    /// The piece overwritten at the target square, if any
    pub captured: Option<Piece>,
    /// The rook relocation that followed a castling king move
    pub castled_rook: Option<Move>,
}

/// Functionality belonging to all boards that can be played on
pub trait Board: Sized + Clone {
    /// A board with every square empty
    fn empty() -> Self;

    /// Get the state at the start of a chess game
    fn initial_state() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in (0..8).zip(PieceKind::BACK_RANK) {
                board.set(
                    BoardSquare::from_file_rank(file, color.home_rank()),
                    Some(Piece::new(kind, color)),
                );
                board.set(
                    BoardSquare::from_file_rank(file, color.pawn_rank()),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// The piece at the given square, or `None` if the square is empty or invalid
    fn get(&self, square: BoardSquare) -> Option<Piece>;

    /// Place (or, with `None`, remove) a piece at the given square
    ///
    /// Invalid squares are ignored.
    fn set(&mut self, square: BoardSquare, piece: Option<Piece>);

    /// The squares the piece at `square` may move to, ignoring whether its king ends up in check
    ///
    /// An empty or invalid square has no destinations.
    fn destinations(&self, square: BoardSquare) -> Vec<BoardSquare>;

    /// Make the given move, in place, reporting what happened
    ///
    /// If this returns an error, the board is unchanged.
    fn apply_move_detailed(&mut self, mv: Move) -> Result<MoveOutcome, MoveError>;

    /// Make the given move, in place
    ///
    /// If this returns an error, the board is unchanged.
    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply_move_detailed(mv).map(|_| ())
    }

    /// Whether `square` lies on this board
    ///
    /// Move generation and move application ask this before touching a square.
    fn is_valid_square(&self, square: BoardSquare) -> bool {
        square.is_valid()
    }

    /// Every square holding a piece of the given color, with that piece
    fn occupied_by(&self, color: Color) -> impl Iterator<Item = (BoardSquare, Piece)> + '_ {
        BoardSquare::all_squares().filter_map(move |square| {
            self.get(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// Every move available to the given color
    fn moves_for(&self, color: Color) -> Vec<Move> {
        self.occupied_by(color)
            .flat_map(|(source, _)| {
                self.destinations(source)
                    .into_iter()
                    .map(move |target| Move { source, target })
            })
            .collect()
    }

    /// The number of pieces on the board
    fn piece_count(&self) -> usize {
        BoardSquare::all_squares()
            .filter(|&square| self.get(square).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_board_squares {
        ($(
            $name:ident($square:pat) $body:block
        )*) => {$(
            #[test]
            fn $name() {
                for repr in u8::MIN..=u8::MAX {
                    let $square = BoardSquare(repr);
                    $body
                }
            }
        )*};
    }

    macro_rules! test_valid_board_squares {
        ($(
            $name:ident($square:pat) $body:block
        )*) => {$(
            #[test]
            fn $name() {
                for square in BoardSquare::all_squares() {
                    let $square = square;
                    $body
                }
            }
        )*};
    }

    test_board_squares!(
        test_board_square_str_knows_when_valid(square) { assert_eq!(square.is_valid(), square.as_str_legal().is_some()); }
        test_file_rank_agrees_with_validity(square) { assert_eq!(square.is_valid(), square.file_rank().is_some()); }
    );

    test_valid_board_squares!(
        test_board_square_name_round_trip(square) { assert_eq!(square, BoardSquare::from_str(square.as_str()).unwrap()) }
        test_file_rank_round_trip(square) {
            let (file, rank) = square.file_rank().unwrap();
            assert_eq!(square, BoardSquare::from_file_rank(file, rank));
        }
    );

    #[test]
    fn test_orientation() {
        assert_eq!(BoardSquare::from_file_rank(0, 0).as_str(), "a8");
        assert_eq!(BoardSquare::from_file_rank(7, 7).as_str(), "h1");
        assert_eq!(BoardSquare::from_file_rank(1, 7), BoardSquare::B1);
        assert_eq!(BoardSquare::E2.file_rank(), Some((4, 6)));
    }

    #[test]
    fn test_bad_square_strings() {
        for s in ["", "e", "i1", "a0", "a9", "e22", "E2"] {
            assert!(s.parse::<BoardSquare>().is_err(), "{s} parsed");
        }
    }

    #[test]
    fn test_offset_file_rank() {
        for rank in -7..=7 {
            for file in -7..=7 {
                let offset = BoardSquareOffset::from_file_rank(file, rank);
                assert_eq!(offset.rank(), rank);
                assert_eq!(offset.file(), file);
            }
        }
    }

    #[test]
    fn test_offset_matches_arithmetic() {
        for square in BoardSquare::all_squares() {
            let (file, rank) = square.file_rank().unwrap();
            for df in -7..=7i8 {
                for dr in -7..=7i8 {
                    let expected_file = file as i8 + df;
                    let expected_rank = rank as i8 + dr;
                    let shifted = square.offset(df, dr);
                    if (0..8).contains(&expected_file) && (0..8).contains(&expected_rank) {
                        assert_eq!(
                            shifted.file_rank(),
                            Some((expected_file as u8, expected_rank as u8))
                        );
                    } else {
                        assert!(!shifted.is_valid(), "{square} + ({df}, {dr}) = {shifted:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_offset_tables_are_distinct() {
        for table in [&BoardSquareOffset::KNIGHT_MOVES, &BoardSquareOffset::KING_MOVES] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
        for offset in BoardSquareOffset::KING_MOVES {
            assert!(offset.file().abs() <= 1 && offset.rank().abs() <= 1);
            assert!((offset.file(), offset.rank()) != (0, 0));
        }
        for offset in BoardSquareOffset::KNIGHT_MOVES {
            let mut steps = [offset.file().abs(), offset.rank().abs()];
            steps.sort_unstable();
            assert_eq!(steps, [1, 2]);
        }
    }

    #[test]
    fn test_move_round_trip() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(BoardSquare::E2, BoardSquare::E4));
        assert_eq!(mv.to_string(), "e2e4");
        assert!("e2e".parse::<Move>().is_err());
        assert!("e2e9".parse::<Move>().is_err());
    }

    #[test]
    fn test_color_geometry() {
        for color in [Color::White, Color::Black] {
            assert_eq!(color.other().other(), color);
            // Pawns face away from their own home rank
            let step = color.pawn_rank() as i8 - color.home_rank() as i8;
            assert_eq!(step, color.pawn_direction());
        }
    }
}
