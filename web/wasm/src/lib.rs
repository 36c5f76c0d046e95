use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use bjtable::{CARD_BACK, Card, Game, GameOptions, GameState, Outcome, Presenter, TableView, Winner};
use js_sys::{Function, Promise};
use serde::Serialize;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod deck_api;

pub use deck_api::{DEFAULT_BASE_URL, DeckApi, DeckId, parse_card};

/// Browser table: one game plus the JavaScript callback it reports to.
///
/// `start_round`, `hit` and `stand` return promises. While one of them is
/// waiting on the deck service, the others reject with "a card draw is
/// already in progress".
#[wasm_bindgen]
pub struct WasmTable {
    game: Rc<RefCell<Game<DeckApi>>>,
    presenter: Rc<RefCell<JsPresenter>>,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(on_event: Function, base_url: Option<String>, deck_count: Option<u8>) -> Self {
        let source = DeckApi::new(
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            deck_count.unwrap_or(1),
        );

        Self {
            game: Rc::new(RefCell::new(Game::new(GameOptions::default(), source))),
            presenter: Rc::new(RefCell::new(JsPresenter { on_event })),
        }
    }

    #[expect(
        clippy::await_holding_refcell_ref,
        reason = "the borrow is what keeps a second draw from starting"
    )]
    pub fn start_round(&self) -> Promise {
        let game = Rc::clone(&self.game);
        let presenter = Rc::clone(&self.presenter);

        future_to_promise(async move {
            let mut game = claim(&game)?;
            let mut presenter = claim(&presenter)?;
            game.start_round(&mut *presenter).await.map_err(js_err)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[expect(
        clippy::await_holding_refcell_ref,
        reason = "the borrow is what keeps a second draw from starting"
    )]
    pub fn hit(&self) -> Promise {
        let game = Rc::clone(&self.game);
        let presenter = Rc::clone(&self.presenter);

        future_to_promise(async move {
            let mut game = claim(&game)?;
            let mut presenter = claim(&presenter)?;
            let card = game.hit(&mut *presenter).await.map_err(js_err)?;
            to_js_value(&JsCard::from(card))
        })
    }

    #[expect(
        clippy::await_holding_refcell_ref,
        reason = "the borrow is what keeps a second draw from starting"
    )]
    pub fn stand(&self) -> Promise {
        let game = Rc::clone(&self.game);
        let presenter = Rc::clone(&self.presenter);

        future_to_promise(async move {
            let mut game = claim(&game)?;
            let mut presenter = claim(&presenter)?;
            let drawn = game.stand(&mut *presenter).await.map_err(js_err)?;
            let drawn: Vec<JsCard> = drawn.into_iter().map(JsCard::from).collect();
            to_js_value(&drawn)
        })
    }

    /// Requests a new shuffled deck for the next round.
    pub fn reshuffle(&self) -> Result<(), JsValue> {
        claim(&self.game)?.reshuffle().map_err(js_err)
    }

    pub fn clear_round(&self) -> Result<(), JsValue> {
        claim(&self.game)?.clear_round();
        Ok(())
    }

    /// Whether a card draw is pending.
    pub fn busy(&self) -> bool {
        self.game.try_borrow_mut().is_err()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = self
            .game
            .try_borrow()
            .map_err(|_| JsValue::from_str("a card draw is already in progress"))?;
        to_js_value(&JsEvent::from_view(&game.view()))
    }
}

/// Forwards table updates to a JavaScript callback as tagged objects.
struct JsPresenter {
    on_event: Function,
}

impl JsPresenter {
    fn emit(&self, event: &JsEvent) {
        let result = to_js_value(event)
            .and_then(|value| self.on_event.call1(&JsValue::NULL, &value));
        if let Err(err) = result {
            warn!(?err, "presentation callback failed");
        }
    }
}

impl Presenter for JsPresenter {
    fn render(&mut self, view: &TableView<'_>) {
        self.emit(&JsEvent::from_view(view));
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        self.emit(&JsEvent::Outcome {
            message: outcome.message(),
            winner: winner_to_str(outcome.winner()),
        });
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.emit(&JsEvent::Input { enabled });
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsEvent {
    Render {
        state: &'static str,
        player: Vec<JsCard>,
        dealer: Vec<JsCard>,
        player_score: u8,
        dealer_score: u8,
        /// Image to show when a card image fails to load.
        fallback: &'static str,
    },
    Outcome {
        message: &'static str,
        winner: &'static str,
    },
    Input {
        enabled: bool,
    },
}

impl JsEvent {
    fn from_view(view: &TableView<'_>) -> Self {
        Self::Render {
            state: state_to_str(view.state),
            player: view.player.iter().copied().map(JsCard::from).collect(),
            dealer: view.dealer.iter().copied().map(JsCard::from).collect(),
            player_score: view.player_score,
            dealer_score: view.dealer_score,
            fallback: CARD_BACK,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    code: String,
    image: String,
    points: u8,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            code: card.to_string(),
            image: card.asset_key().to_string(),
            points: card.points(),
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::DealerTurn => "DealerTurn",
        GameState::Finished => "Finished",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Dealer => "Dealer",
        Winner::Nobody => "Nobody",
    }
}

fn claim<T>(cell: &RefCell<T>) -> Result<RefMut<'_, T>, JsValue> {
    cell.try_borrow_mut()
        .map_err(|_| JsValue::from_str("a card draw is already in progress"))
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
