use serde::Deserialize;

/// A field value as the upstream API hands it to us. The same key can be a
/// number on one card, a string on the next and `null` on a third.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

impl Loose {
    /// Integer view of the value. Never fails: anything that isn't a whole
    /// number (or can't be read as one) is zero, and negatives clamp to zero.
    /// Integers beyond `i64::MAX` deserialize as `Float` and saturate there.
    pub fn to_count(&self) -> u64 {
        let n = match self {
            Loose::Int(n) => *n,
            Loose::Float(f) if f.is_finite() => f.trunc() as i64,
            Loose::Bool(b) => i64::from(*b),
            Loose::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
            _ => 0,
        };
        u64::try_from(n).unwrap_or(0)
    }

    pub fn to_text(&self) -> String {
        match self {
            Loose::Int(n) => n.to_string(),
            Loose::Float(f) => f.to_string(),
            Loose::Bool(b) => b.to_string(),
            Loose::Text(s) => s.clone(),
            Loose::Other(v) => v.to_string(),
        }
    }
}

/// One card object from the One Piece card API. Only the keys we map are
/// kept; everything is optional because the API is not consistent about
/// which keys it sends.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCard {
    pub card_set_id: Option<Loose>,
    pub card_name: Option<Loose>,
    pub card_type: Option<Loose>,
    pub card_cost: Option<Loose>,
    pub card_power: Option<Loose>,
    pub counter_amount: Option<Loose>,
    pub life: Option<Loose>,
    pub card_color: Option<Loose>,
    pub card_text: Option<Loose>,
    pub attribute: Option<Loose>,
    pub sub_types: Option<Loose>,
    pub rarity: Option<Loose>,
    pub set_id: Option<Loose>,
    pub card_image: Option<Loose>,
    pub card_image_id: Option<Loose>,
}

impl RawCard {
    /// Natural key (the printed card number, e.g. `OP01-077`). Empty when
    /// the API didn't send one.
    pub fn card_number(&self) -> String {
        text_or(&self.card_set_id, "")
    }

    pub fn image_id(&self) -> String {
        text_or(&self.card_image_id, "")
    }

    pub fn upstream_set_id(&self) -> String {
        text_or(&self.set_id, "")
    }
}

/// Text view of an optional loose field, falling back to `default` when the
/// key was missing or `null`.
pub fn text_or(value: &Option<Loose>, default: &str) -> String {
    value
        .as_ref()
        .map(Loose::to_text)
        .unwrap_or_else(|| default.to_string())
}

/// Integer view of an optional loose field; missing counts as zero.
pub fn count_or_zero(value: &Option<Loose>) -> u64 {
    value.as_ref().map_or(0, Loose::to_count)
}

pub mod arena;
pub mod optcg;
