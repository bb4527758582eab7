use crate::cards::CardId;
use crate::game::GameState;
use crate::player::PlayerId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Operation not allowed while the game is {state:?}")]
    InvalidState { state: GameState },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },
    #[error("Card {card} is not in player {player}'s hand")]
    UnknownCard { player: PlayerId, card: CardId },
    #[error("Card {card} cannot be played on the current table")]
    IllegalPlay { card: CardId },
    #[error("A color must be chosen when playing wild card {card}")]
    ColorRequired { card: CardId },
    #[error("Player {0} is already seated")]
    DuplicatePlayer(PlayerId),
    #[error("The admin cannot be removed")]
    AdminRemoval,
    #[error("Player {0} is not seated")]
    PlayerNotFound(PlayerId),
}
