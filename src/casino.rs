//! Session-addressed entry points for all three games.
//!
//! Every action loads one session, runs the game's rules against it and saves
//! it back inside a single [`SessionStore::update`]. A failing action saves
//! nothing.

use crate::blackjack::{BlackjackState, BlackjackView};
use crate::dice::{Bet, BetType, DiceRound, DiceState};
use crate::error::{CasinoError, ParseMoveError};
use crate::options::CasinoOptions;
use crate::random::RandomSource;
use crate::rps::{Move, RpsRound, RpsState};
use crate::session::{Game, GameType, Session};
use crate::store::{MemoryStore, SessionStore};
use crate::view::{DiceSummary, DiceTable, Opening, Response, RpsSummary, RpsTable, Status};

/// Game service over a [`SessionStore`].
///
/// # Example
///
/// ```
/// use parlor::{Casino, ChaChaSource, Opening};
///
/// let casino = Casino::in_memory();
/// let mut rng = ChaChaSource::seeded(3);
///
/// let created = casino.create("rps", &mut rng).unwrap();
/// assert!(matches!(created.body, Opening::Rps(_)));
///
/// let round = casino.play(&created.session_id, "rock", &mut rng).unwrap();
/// assert_eq!(round.body.total_rounds, 1);
/// ```
#[derive(Debug)]
pub struct Casino<S = MemoryStore> {
    store: S,
    options: CasinoOptions,
}

impl Casino<MemoryStore> {
    /// Creates a casino with default options over an empty [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), CasinoOptions::default())
    }
}

impl<S: SessionStore> Casino<S> {
    /// Creates a casino over the given store.
    #[must_use]
    pub const fn new(store: S, options: CasinoOptions) -> Self {
        Self { store, options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &CasinoOptions {
        &self.options
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Creates a session for the named game.
    ///
    /// # Errors
    ///
    /// Returns [`CasinoError::InvalidGameType`] for an unknown game name, or a
    /// storage error if the session cannot be saved.
    pub fn create<R: RandomSource>(
        &self,
        game_type: &str,
        rng: &mut R,
    ) -> Result<Response<Opening>, CasinoError> {
        let game_type = game_type
            .parse::<GameType>()
            .inspect_err(|err| log::warn!("rejected session creation: {err}"))?;
        self.start(game_type, rng)
    }

    /// Creates a session for the given game.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be saved.
    pub fn start<R: RandomSource>(
        &self,
        game_type: GameType,
        rng: &mut R,
    ) -> Result<Response<Opening>, CasinoError> {
        let (game, opening) = match game_type {
            GameType::Blackjack => {
                let state = BlackjackState::start(rng);
                let view = state.view();
                (Game::Blackjack(state), Opening::Blackjack(view))
            }
            GameType::Rps => (
                Game::Rps(RpsState::new()),
                Opening::Rps(RpsTable {
                    player_score: 0,
                    computer_score: 0,
                    moves: Move::ALL,
                }),
            ),
            GameType::Dice => (
                Game::Dice(DiceState::new(self.options.starting_balance)),
                Opening::Dice(DiceTable {
                    balance: self.options.starting_balance,
                    min_bet: self.options.min_bet,
                    max_bet: self.options.max_bet,
                    bet_types: BetType::ALL,
                }),
            ),
        };

        let session = Session::new(game);
        self.store.insert(&session)?;
        log::info!("created {game_type} session {}", session.id);

        Ok(Response {
            session_id: session.id,
            body: opening,
        })
    }

    fn with_blackjack<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut BlackjackState) -> Result<T, CasinoError>,
    ) -> Result<T, CasinoError> {
        self.store.update(session_id, |session| match &mut session.game {
            Game::Blackjack(state) => f(state),
            _ => Err(CasinoError::SessionNotFound(session_id.to_owned())),
        })
    }

    /// Blackjack: draws a card for the player.
    ///
    /// # Errors
    ///
    /// Returns [`CasinoError::SessionNotFound`] if there is no blackjack
    /// session under `session_id`, and [`CasinoError::IllegalAction`] if the
    /// hand is already resolved.
    pub fn hit(&self, session_id: &str) -> Result<Response<BlackjackView>, CasinoError> {
        let view = self
            .with_blackjack(session_id, |state| {
                let card = state.hit()?;
                log::debug!("session {session_id}: hit {card:?}");
                if state.status.is_terminal() {
                    log::info!("session {session_id}: player bust");
                }
                Ok(state.view())
            })
            .inspect_err(|err| log::warn!("session {session_id}: hit rejected: {err}"))?;

        Ok(Response {
            session_id: session_id.to_owned(),
            body: view,
        })
    }

    /// Blackjack: the dealer plays out and the hand is resolved.
    ///
    /// # Errors
    ///
    /// Returns [`CasinoError::SessionNotFound`] if there is no blackjack
    /// session under `session_id`, and [`CasinoError::IllegalAction`] if the
    /// hand is already resolved.
    pub fn stand(&self, session_id: &str) -> Result<Response<BlackjackView>, CasinoError> {
        let stands_on = self.options.dealer_stands_on;
        let view = self
            .with_blackjack(session_id, |state| {
                let drawn = state.stand(stands_on)?;
                log::info!(
                    "session {session_id}: {} ({} vs dealer {}, dealer drew {})",
                    state.status,
                    state.player_hand.value(),
                    state.dealer_hand.value(),
                    drawn.len()
                );
                Ok(state.view())
            })
            .inspect_err(|err| log::warn!("session {session_id}: stand rejected: {err}"))?;

        Ok(Response {
            session_id: session_id.to_owned(),
            body: view,
        })
    }

    /// Rock-paper-scissors: plays one round.
    ///
    /// # Errors
    ///
    /// Returns [`CasinoError::SessionNotFound`] if there is no match under
    /// `session_id`, checked before the move, and [`CasinoError::InvalidMove`]
    /// for an unknown move.
    pub fn play<R: RandomSource>(
        &self,
        session_id: &str,
        player_move: &str,
        rng: &mut R,
    ) -> Result<Response<RpsRound>, CasinoError> {
        let round = self
            .store
            .update(session_id, |session| -> Result<RpsRound, CasinoError> {
                let Game::Rps(state) = &mut session.game else {
                    return Err(CasinoError::SessionNotFound(session_id.to_owned()));
                };
                let player_move: Move = player_move
                    .parse()
                    .map_err(|err: ParseMoveError| CasinoError::InvalidMove(err.0))?;
                Ok(state.play(player_move, rng))
            })
            .inspect_err(|err| log::warn!("session {session_id}: play rejected: {err}"))?;

        log::debug!(
            "session {session_id}: {} vs {} -> {:?}",
            round.player_move,
            round.computer_move,
            round.result
        );

        Ok(Response {
            session_id: session_id.to_owned(),
            body: round,
        })
    }

    /// Dice: places a bet and rolls.
    ///
    /// `target` is required for `exact` bets and ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CasinoError::SessionNotFound`] if there is no dice session
    /// under `session_id`, checked before the bet itself,
    /// [`CasinoError::InvalidBet`] for a malformed bet, and
    /// [`CasinoError::InsufficientBalance`] if the wager exceeds the balance.
    /// No dice are rolled on failure.
    pub fn bet<R: RandomSource>(
        &self,
        session_id: &str,
        amount: u64,
        bet_type: &str,
        target: Option<u8>,
        rng: &mut R,
    ) -> Result<Response<DiceRound>, CasinoError> {
        let round = self
            .store
            .update(session_id, |session| -> Result<DiceRound, CasinoError> {
                let Game::Dice(state) = &mut session.game else {
                    return Err(CasinoError::SessionNotFound(session_id.to_owned()));
                };
                let bet = BetType::parse(bet_type).and_then(|kind| Bet::new(kind, target))?;
                state.place_bet(amount, bet, rng).map_err(CasinoError::from)
            })
            .inspect_err(|err| log::warn!("session {session_id}: bet rejected: {err}"))?;

        log::debug!(
            "session {session_id}: {amount} on {} rolled {:?}, paid {}",
            round.bet.bet_type(),
            round.dice_roll,
            round.payout
        );

        Ok(Response {
            session_id: session_id.to_owned(),
            body: round,
        })
    }

    /// Returns the current state of any session.
    ///
    /// # Errors
    ///
    /// Returns [`CasinoError::SessionNotFound`] for an unknown identifier.
    pub fn status(&self, session_id: &str) -> Result<Response<Status>, CasinoError> {
        let session = self.store.load(session_id)?;

        let status = match &session.game {
            Game::Blackjack(state) => Status::Blackjack(state.view()),
            Game::Rps(state) => Status::Rps(RpsSummary {
                player_score: state.player_score,
                computer_score: state.computer_score,
                total_rounds: state.rounds(),
            }),
            Game::Dice(state) => Status::Dice(DiceSummary {
                balance: state.balance,
                last_roll: state.last_roll,
                total_games: state.total_games,
                games_won: state.games_won,
            }),
        };

        Ok(Response {
            session_id: session.id,
            body: status,
        })
    }
}
