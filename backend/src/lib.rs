use board::{Board, BoardSquare, Color, Move};
use mailbox::MailboxBoard;
use players::Player;
use tracing::{debug, info, warn};

/// What the human currently has picked up
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// A piece of the side to move, along with where it can go
    Selected {
        square: BoardSquare,
        destinations: Vec<BoardSquare>,
    },
}

/// Whether the game can still be played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given color was asked for a move and had none
    Stuck(Color),
}

/// The result of touching a square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The selected piece moved to the touched square
    ///
    /// `reply` is the opponent's answer, or `None` if it had nothing to play.
    Moved { played: Move, reply: Option<Move> },
    /// A piece of the side to move is now selected
    Selected,
    /// Nothing is selected anymore
    Cleared,
    /// The game has ended, so the touch was ignored
    GameOver,
}

/// A game between a human, driving it one touched square at a time, and an automatic opponent
pub struct Game<P> {
    /// The current state of the board
    board: MailboxBoard,
    /// Whose pieces may be selected
    turn: Color,
    selection: Selection,
    /// Plays whichever color the human doesn't
    opponent: P,
    status: GameStatus,
    /// Half-moves applied so far, by either side
    plies: u32,
}

impl<P: Player> Game<P> {
    /// Start from the opening position with white (the human) to move
    pub fn new(opponent: P) -> Self {
        Self::from_board(MailboxBoard::initial_state(), Color::White, opponent)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: MailboxBoard, turn: Color, opponent: P) -> Self {
        Self {
            board,
            turn,
            selection: Selection::Idle,
            opponent,
            status: GameStatus::InProgress,
            plies: 0,
        }
    }

    /// Where the piece on `square` could move to; nothing if the square is empty
    pub fn legal_destinations(&self, square: BoardSquare) -> Vec<BoardSquare> {
        self.board.destinations(square)
    }

    /// Handle the human touching a square
    pub fn touch(&mut self, square: BoardSquare) -> TouchOutcome {
        if self.status != GameStatus::InProgress {
            return TouchOutcome::GameOver;
        }
        if let Selection::Selected {
            square: source,
            destinations,
        } = &self.selection
        {
            if destinations.contains(&square) {
                let played = Move::new(*source, square);
                return self.commit(played);
            }
        }
        self.select(square)
    }

    /// Try to pick up the piece on `square`, dropping any earlier selection
    fn select(&mut self, square: BoardSquare) -> TouchOutcome {
        match self.board.get(square) {
            Some(piece) if piece.color == self.turn => {
                let destinations = self.legal_destinations(square);
                debug!(%square, count = destinations.len(), "selected");
                self.selection = Selection::Selected {
                    square,
                    destinations,
                };
                TouchOutcome::Selected
            }
            _ => {
                self.selection = Selection::Idle;
                TouchOutcome::Cleared
            }
        }
    }

    /// Play the human's move, then let the opponent answer
    fn commit(&mut self, played: Move) -> TouchOutcome {
        self.selection = Selection::Idle;
        if let Err(err) = self.board.apply_move(played) {
            // Destinations come from the same board, so this only happens if they disagree
            warn!(%played, %err, "selected move was rejected");
            return TouchOutcome::Cleared;
        }
        self.plies += 1;

        let replier = self.turn.other();
        let reply = self.opponent.choose_move(&self.board, replier);
        match reply {
            Some(reply) => match self.board.apply_move(reply) {
                Ok(()) => {
                    info!(%played, %reply, opponent = self.opponent.name(), "opponent replied");
                    self.plies += 1;
                }
                Err(err) => warn!(%reply, %err, "opponent reply was rejected"),
            },
            None => {
                info!(color = %replier, "no moves available, game is over");
                self.turn = replier;
                self.status = GameStatus::Stuck(replier);
            }
        }
        TouchOutcome::Moved { played, reply }
    }

    pub fn board(&self) -> &MailboxBoard {
        &self.board
    }

    /// The color whose pieces can be selected
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected square, if any
    pub fn selected(&self) -> Option<BoardSquare> {
        match self.selection {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(square),
        }
    }

    /// The squares to highlight, which are the destinations of the selected piece
    pub fn highlights(&self) -> &[BoardSquare] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { destinations, .. } => destinations.as_slice(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }
}
