//! A player which makes purely random moves

use board::{Board, Color, Move};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info};

/// A player which makes purely random moves
///
/// Every move the side has available is equally likely, and the list is built fresh from the
/// board each time. The name is pronounced like "Monkey".
#[derive(Debug)]
pub struct MonkePlayer {
    /// How we decide what to do
    rng: SmallRng,
}

impl MonkePlayer {
    /// Create a new player seeded from the operating system's entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a player whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl players::Player for MonkePlayer {
    fn choose_move<B: Board>(&mut self, board: &B, color: Color) -> Option<Move> {
        let moves = board.moves_for(color);
        let choice = moves.choose(&mut self.rng).copied();
        match choice {
            Some(mv) => debug!(%color, %mv, options = moves.len(), "monke picked a move"),
            None => info!(%color, "monke has no moves to pick from"),
        }
        choice
    }

    fn name(&self) -> &str {
        "monke"
    }
}

impl Default for MonkePlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use board::{BoardSquare, Piece, PieceKind};
    use mailbox::MailboxBoard;
    use players::Player;
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn test_choice_is_available_move(seed: u64) -> bool {
            let board = MailboxBoard::initial_state();
            let mut player = MonkePlayer::with_seed(seed);
            [Color::White, Color::Black].into_iter().all(|color| {
                player
                    .choose_move(&board, color)
                    .is_some_and(|mv| board.moves_for(color).contains(&mv))
            })
        }

        fn test_same_seed_same_choices(seed: u64) -> bool {
            let board = MailboxBoard::initial_state();
            let mut a = MonkePlayer::with_seed(seed);
            let mut b = MonkePlayer::with_seed(seed);
            (0..10).all(|_| {
                a.choose_move(&board, Color::Black) == b.choose_move(&board, Color::Black)
            })
        }
    }

    #[test]
    fn test_no_moves_gives_none() {
        let mut board = MailboxBoard::EMPTY;
        board.set(
            BoardSquare::E1,
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        let mut player = MonkePlayer::with_seed(7);
        assert_eq!(player.choose_move(&board, Color::Black), None);
        assert!(player.choose_move(&board, Color::White).is_some());
    }

    #[test]
    fn test_every_opening_move_gets_picked() {
        let board = MailboxBoard::initial_state();
        let mut player = MonkePlayer::with_seed(1234);
        let picked: HashSet<_> = (0..2000)
            .filter_map(|_| player.choose_move(&board, Color::White))
            .collect();
        let available: HashSet<_> = board.moves_for(Color::White).into_iter().collect();
        assert_eq!(picked, available);
    }
}
