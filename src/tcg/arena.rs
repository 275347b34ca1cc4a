//! Card list format read by TCG Arena.
//!
//! The file is a single JSON object keyed by card number. Every entry carries
//! a `face.front` block the viewer renders from, plus flat copies of the same
//! values it uses for filtering and search.

use super::{count_or_zero, text_or, RawCard};
use indexmap::IndexMap;
use serde::Serialize;

/// Card type that TCG Arena lays out sideways.
pub const HORIZONTAL_TYPE: &str = "Stage";

/// Separator between the set code and the collector number in a card id.
pub const SET_SEPARATOR: char = '-';

pub type CardList = IndexMap<String, ArenaCard>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub face: CardFace,
    #[serde(rename = "Color")]
    pub color: String,
    pub cost: u64,
    #[serde(rename = "isHorizontal")]
    pub is_horizontal: bool,
    #[serde(rename = "Cost")]
    pub cost_text: String,
    #[serde(rename = "Power")]
    pub power: String,
    #[serde(rename = "Counter")]
    pub counter: String,
    #[serde(rename = "Life")]
    pub life: String,
    #[serde(rename = "Attribute")]
    pub attribute: String,
    #[serde(rename = "Subtypes")]
    pub subtypes: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Rarity")]
    pub rarity: String,
    #[serde(rename = "Set")]
    pub set: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFace {
    pub front: FrontFace,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontFace {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub cost: u64,
    #[serde(rename = "isHorizontal")]
    pub is_horizontal: bool,
    pub image: String,
}

/// Short set code of a card id: `OP01-077` -> `OP01`. Ids without a
/// separator are their own set code.
pub fn set_code(card_id: &str) -> &str {
    card_id
        .rsplit_once(SET_SEPARATOR)
        .map_or(card_id, |(prefix, _)| prefix)
}

pub fn is_horizontal(card_type: &str) -> bool {
    card_type == HORIZONTAL_TYPE
}

impl ArenaCard {
    /// Build the Arena entry for a raw card. Returns `None` when the card has
    /// no id; every other missing or malformed field gets a default.
    pub fn from_raw(raw: &RawCard) -> Option<Self> {
        let id = raw.card_number();
        if id.is_empty() {
            return None;
        }

        let name = text_or(&raw.card_name, "Unknown");
        let card_type = text_or(&raw.card_type, "Character");
        let cost = count_or_zero(&raw.card_cost);
        let is_horizontal = is_horizontal(&card_type);
        let set = set_code(&id).to_string();

        Some(Self {
            face: CardFace {
                front: FrontFace {
                    name: name.clone(),
                    card_type: card_type.clone(),
                    cost,
                    is_horizontal,
                    image: text_or(&raw.card_image, ""),
                },
            },
            id,
            name,
            card_type,
            color: text_or(&raw.card_color, ""),
            cost,
            is_horizontal,
            cost_text: cost.to_string(),
            power: count_or_zero(&raw.card_power).to_string(),
            counter: count_or_zero(&raw.counter_amount).to_string(),
            life: count_or_zero(&raw.life).to_string(),
            attribute: text_or(&raw.attribute, ""),
            subtypes: text_or(&raw.sub_types, ""),
            text: text_or(&raw.card_text, ""),
            rarity: text_or(&raw.rarity, ""),
            set,
        })
    }
}

/// Convert raw cards into the Arena card list, keyed by card number in input
/// order. Cards without an id are skipped.
pub fn convert_cards(raw_cards: &[RawCard]) -> CardList {
    let mut card_list = CardList::with_capacity(raw_cards.len());

    for card in raw_cards.iter().filter_map(ArenaCard::from_raw) {
        card_list.insert(card.id.clone(), card);
    }

    card_list
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawCard {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn set_code_splits_on_last_separator() {
        assert_eq!(set_code("OP01-077"), "OP01");
        assert_eq!(set_code("PROMO"), "PROMO");
        assert_eq!(set_code("P-001-A"), "P-001");
        assert_eq!(set_code(""), "");
    }

    #[test]
    fn only_stage_cards_are_horizontal() {
        assert!(is_horizontal("Stage"));
        assert!(!is_horizontal("stage"));
        assert!(!is_horizontal("Character"));
        assert!(!is_horizontal("Leader"));
        assert!(!is_horizontal(""));
    }

    #[test]
    fn full_card_maps_every_field() {
        let card = ArenaCard::from_raw(&raw(json!({
            "card_set_id": "OP01-077",
            "card_name": "Shanks",
            "card_type": "Character",
            "card_cost": 10,
            "card_power": 12000.0,
            "counter_amount": "1000",
            "life": null,
            "card_color": "Red",
            "card_text": "[On Play] ...",
            "attribute": "Slash",
            "sub_types": "The Four Emperors/Red-Haired Pirates",
            "rarity": "SEC",
            "card_image": "https://optcgapi.com/media/static/Card_Images/OP01-077.jpg"
        })))
        .unwrap();

        assert_eq!(card.id, "OP01-077");
        assert_eq!(card.cost, 10);
        assert_eq!(card.cost_text, "10");
        assert_eq!(card.power, "12000");
        assert_eq!(card.counter, "1000");
        assert_eq!(card.life, "0");
        assert_eq!(card.set, "OP01");
        assert!(!card.is_horizontal);
        assert_eq!(card.face.front.name, "Shanks");
        assert_eq!(card.face.front.cost, 10);
        assert_eq!(
            card.face.front.image,
            "https://optcgapi.com/media/static/Card_Images/OP01-077.jpg"
        );
    }

    #[test]
    fn id_only_card_gets_defaults() {
        let card = ArenaCard::from_raw(&raw(json!({ "card_set_id": "ST01-001" }))).unwrap();

        assert_eq!(card.name, "Unknown");
        assert_eq!(card.card_type, "Character");
        assert_eq!(card.cost, 0);
        assert_eq!(card.power, "0");
        assert_eq!(card.color, "");
        assert_eq!(card.set, "ST01");
    }

    #[test]
    fn stage_sets_both_layout_flags() {
        let card = ArenaCard::from_raw(&raw(json!({
            "card_set_id": "OP01-118",
            "card_type": "Stage",
            "card_cost": "abc"
        })))
        .unwrap();

        assert!(card.is_horizontal);
        assert!(card.face.front.is_horizontal);
        assert_eq!(card.cost, 0);
    }

    #[test]
    fn cards_without_id_are_skipped() {
        let list = convert_cards(&[
            raw(json!({ "card_name": "Nobody" })),
            raw(json!({ "card_set_id": "", "card_name": "Empty" })),
            raw(json!({ "card_set_id": "OP02-001" })),
        ]);

        assert_eq!(list.len(), 1);
        assert!(list.contains_key("OP02-001"));
    }

    #[test]
    fn output_follows_input_order_and_last_write_wins() {
        let list = convert_cards(&[
            raw(json!({ "card_set_id": "OP02-001", "card_name": "First" })),
            raw(json!({ "card_set_id": "OP01-001" })),
            raw(json!({ "card_set_id": "OP02-001", "card_name": "Second" })),
        ]);

        let keys: Vec<_> = list.keys().cloned().collect();
        assert_eq!(keys, vec!["OP02-001", "OP01-001"]);
        assert_eq!(list["OP02-001"].name, "Second");
    }

    #[test]
    fn conversion_is_idempotent() {
        let cards = vec![
            raw(json!({ "card_set_id": "OP01-001", "card_name": "Luffy", "card_cost": 5 })),
            raw(json!({ "card_set_id": "OP01-118", "card_type": "Stage" })),
        ];

        let first = serde_json::to_string_pretty(&convert_cards(&cards)).unwrap();
        let second = serde_json::to_string_pretty(&convert_cards(&cards)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn serialized_entry_uses_arena_field_names() {
        let list = convert_cards(&[raw(json!({
            "card_set_id": "OP01-001",
            "card_name": "Luffy",
            "card_type": "Leader",
            "card_image": "img.png"
        }))]);

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(
            value,
            json!({
                "OP01-001": {
                    "id": "OP01-001",
                    "name": "Luffy",
                    "type": "Leader",
                    "face": {
                        "front": {
                            "name": "Luffy",
                            "type": "Leader",
                            "cost": 0,
                            "isHorizontal": false,
                            "image": "img.png"
                        }
                    },
                    "Color": "",
                    "cost": 0,
                    "isHorizontal": false,
                    "Cost": "0",
                    "Power": "0",
                    "Counter": "0",
                    "Life": "0",
                    "Attribute": "",
                    "Subtypes": "",
                    "Text": "",
                    "Rarity": "",
                    "Set": "OP01"
                }
            })
        );
    }
}
