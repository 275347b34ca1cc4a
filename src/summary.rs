use crate::tcg::arena::CardList;
use crate::tcg::RawCard;
use std::collections::BTreeMap;

/// Order raw cards by upstream set id, then card number. Only affects how
/// the output file reads.
pub fn sort_cards(cards: &mut [RawCard]) {
    cards.sort_by_cached_key(|card| (card.upstream_set_id(), card.card_number()));
}

/// Card counts grouped by type, color and set code.
#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub types: BTreeMap<String, usize>,
    pub colors: BTreeMap<String, usize>,
    pub sets: BTreeMap<String, usize>,
}

impl Summary {
    pub fn from_cards(card_list: &CardList) -> Self {
        let mut summary = Summary::default();

        for card in card_list.values() {
            *summary.types.entry(card.card_type.clone()).or_default() += 1;

            // Multicolor cards list their colors as "Red/Green"
            for color in card.color.split('/').map(str::trim) {
                if !color.is_empty() {
                    *summary.colors.entry(color.to_string()).or_default() += 1;
                }
            }

            if !card.set.is_empty() {
                *summary.sets.entry(card.set.clone()).or_default() += 1;
            }
        }

        summary
    }

    pub fn print(&self) {
        print_counts("Card types", &self.types);
        print_counts("Colors", &self.colors);
        print_counts("Sets", &self.sets);
    }
}

fn print_counts(title: &str, counts: &BTreeMap<String, usize>) {
    println!("\n{}:", title);
    for (name, n) in counts {
        println!("  {}: {}", name, n);
    }
}
