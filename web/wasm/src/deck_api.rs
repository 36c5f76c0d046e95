//! Card source backed by the deckofcardsapi.com HTTP API.

use bjtable::{Card, CardSource, Rank, SourceError, Suit};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Public deck service used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com";

/// Identifier of a shuffled deck held by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckId(pub String);

#[derive(Debug, Deserialize)]
pub(crate) struct NewDeckResponse {
    success: bool,
    deck_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DrawResponse {
    success: bool,
    #[serde(default)]
    cards: Vec<ApiCard>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCard {
    value: String,
    suit: String,
}

/// Remote card source. Every session is a freshly shuffled deck.
#[derive(Debug, Clone)]
pub struct DeckApi {
    client: reqwest::Client,
    base_url: String,
    deck_count: u8,
}

impl DeckApi {
    /// Creates a source talking to `base_url` and shuffling `deck_count`
    /// decks (at least one) per session.
    pub fn new(base_url: impl Into<String>, deck_count: u8) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            deck_count: deck_count.max(1),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                warn!(%err, url, "deck service request failed");
                SourceError::Unreachable
            })?;

        response.json::<T>().await.map_err(|err| {
            warn!(%err, url, "deck service sent an unreadable body");
            SourceError::Malformed
        })
    }
}

impl Default for DeckApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, 1)
    }
}

impl CardSource for DeckApi {
    type Session = DeckId;

    async fn init(&mut self) -> Result<DeckId, SourceError> {
        let url = format!(
            "{}/api/deck/new/shuffle/?deck_count={}",
            self.base_url, self.deck_count
        );
        let deck: NewDeckResponse = self.get(&url).await?;
        let id = deck_id(deck)?;
        debug!(deck_id = %id.0, "deck initialized");
        Ok(id)
    }

    async fn draw(&mut self, session: &mut DeckId) -> Result<Card, SourceError> {
        let url = format!("{}/api/deck/{}/draw/?count=1", self.base_url, session.0);
        let draw: DrawResponse = self.get(&url).await?;
        first_card(draw)
    }
}

pub(crate) fn deck_id(response: NewDeckResponse) -> Result<DeckId, SourceError> {
    if response.success && !response.deck_id.is_empty() {
        Ok(DeckId(response.deck_id))
    } else {
        Err(SourceError::Unreachable)
    }
}

pub(crate) fn first_card(response: DrawResponse) -> Result<Card, SourceError> {
    if !response.success {
        return Err(SourceError::Exhausted);
    }
    let card = response
        .cards
        .into_iter()
        .next()
        .ok_or(SourceError::Exhausted)?;
    parse_card(&card.value, &card.suit).ok_or(SourceError::Malformed)
}

/// Reads a card as the service spells it, e.g. `("ACE", "SPADES")`.
pub fn parse_card(value: &str, suit: &str) -> Option<Card> {
    let suit = match suit {
        "HEARTS" => Suit::Hearts,
        "DIAMONDS" => Suit::Diamonds,
        "CLUBS" => Suit::Clubs,
        "SPADES" => Suit::Spades,
        _ => return None,
    };
    let rank = match value {
        "ACE" => Rank::Ace,
        "KING" => Rank::King,
        "QUEEN" => Rank::Queen,
        "JACK" => Rank::Jack,
        // The service codes a ten as "0".
        "10" | "0" => Rank::Ten,
        number => match number.parse::<u8>().ok()? {
            n @ 2..=9 => Rank::from_number(n)?,
            _ => return None,
        },
    };
    Some(Card::new(suit, rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_spelling() {
        assert_eq!(
            parse_card("ACE", "SPADES"),
            Some(Card::new(Suit::Spades, Rank::Ace))
        );
        assert_eq!(
            parse_card("0", "HEARTS"),
            Some(Card::new(Suit::Hearts, Rank::Ten))
        );
        assert_eq!(
            parse_card("10", "CLUBS"),
            Some(Card::new(Suit::Clubs, Rank::Ten))
        );
        assert_eq!(
            parse_card("7", "DIAMONDS"),
            Some(Card::new(Suit::Diamonds, Rank::Seven))
        );
        assert_eq!(parse_card("1", "HEARTS"), None);
        assert_eq!(parse_card("11", "HEARTS"), None);
        assert_eq!(parse_card("JOKER", "HEARTS"), None);
        assert_eq!(parse_card("KING", "STARS"), None);
    }

    #[test]
    fn decodes_draw_responses() {
        let body = r#"{
            "success": true,
            "deck_id": "kxozasf3edqu",
            "cards": [{
                "code": "6H",
                "image": "https://deckofcardsapi.com/static/img/6H.png",
                "value": "6",
                "suit": "HEARTS"
            }],
            "remaining": 50
        }"#;
        let response: DrawResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            first_card(response),
            Ok(Card::new(Suit::Hearts, Rank::Six))
        );

        let empty = r#"{"success": false, "deck_id": "kxozasf3edqu", "cards": [], "remaining": 0}"#;
        let response: DrawResponse = serde_json::from_str(empty).unwrap();
        assert_eq!(first_card(response), Err(SourceError::Exhausted));

        let odd = r#"{"success": true, "cards": [{"value": "JOKER", "suit": "RED"}]}"#;
        let response: DrawResponse = serde_json::from_str(odd).unwrap();
        assert_eq!(first_card(response), Err(SourceError::Malformed));
    }

    #[test]
    fn decodes_new_deck_responses() {
        let body = r#"{"success": true, "deck_id": "3p40paa87x90", "shuffled": true, "remaining": 52}"#;
        let response: NewDeckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(deck_id(response), Ok(DeckId("3p40paa87x90".to_owned())));

        let failed = r#"{"success": false, "deck_id": ""}"#;
        let response: NewDeckResponse = serde_json::from_str(failed).unwrap();
        assert_eq!(deck_id(response), Err(SourceError::Unreachable));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let api = DeckApi::new("http://localhost:8000/", 0);
        assert_eq!(api.base_url, "http://localhost:8000");
        assert_eq!(api.deck_count, 1);
    }
}
