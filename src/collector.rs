use crate::tcg::optcg::{item_path, OptcgApi, Source};
use crate::tcg::RawCard;
use crate::utils::http::CardSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Gathers raw cards from every source, keeping the first printing seen for
/// each card number and skipping alternate art.
pub struct Collector<'a, S> {
    source: &'a S,
    delay: Duration,
    seen: HashSet<String>,
    cards: Vec<RawCard>,
}

impl<'a, S: CardSource> Collector<'a, S> {
    /// `delay` is the pause between requests of a per-item fallback loop.
    pub fn new(source: &'a S, delay: Duration) -> Self {
        Self {
            source,
            delay,
            seen: HashSet::new(),
            cards: Vec::new(),
        }
    }

    /// Fetch all sources in order and return the deduplicated cards.
    pub async fn collect(mut self, sources: &[Source]) -> Vec<RawCard> {
        for source in sources {
            match source {
                Source::Bulk {
                    bulk_path,
                    item_prefix,
                    item_ids,
                    ..
                } => {
                    println!("\nTrying bulk endpoint {} ...", bulk_path);
                    let bulk = self.fetch(bulk_path).await;
                    if !bulk.is_empty() {
                        let n = self.add_cards(bulk);
                        println!(
                            "  Got {} new unique cards from bulk {} endpoint",
                            n,
                            source.label()
                        );
                    } else {
                        println!(
                            "  Bulk unavailable, fetching {} one by one...",
                            source.label()
                        );
                        self.fetch_each(item_prefix, item_ids).await;
                    }
                }
                Source::Single { path, .. } => {
                    println!("\nFetching {} ...", source.label());
                    let cards = self.fetch(path).await;
                    if !cards.is_empty() {
                        let n = self.add_cards(cards);
                        println!("  Got {} new unique cards", n);
                    }
                }
            }
        }

        self.cards
    }

    async fn fetch_each(&mut self, prefix: &str, ids: &[&str]) {
        let pb = ProgressBar::new(ids.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for (i, id) in ids.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            pb.set_message(id.to_string());
            let cards = self.fetch(&item_path(prefix, id)).await;
            let n = self.add_cards(cards);
            pb.suspend(|| println!("  {}: {} new cards", id, n));
            pb.inc(1);
        }

        pb.finish_and_clear();
    }

    /// One request; any failure means no cards from it.
    async fn fetch(&self, path: &str) -> Vec<RawCard> {
        match self.source.fetch_cards(path).await {
            Ok(cards) => cards,
            Err(e) => {
                warn!("Failed to fetch {}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Keep cards that are not alternate art and whose number hasn't been
    /// seen yet. Returns how many were new.
    fn add_cards(&mut self, cards: Vec<RawCard>) -> usize {
        let mut count = 0;

        for card in cards {
            if is_variant_art(&card) {
                debug!("Skipping alternate art {}", card.image_id());
                continue;
            }

            let number = card.card_number();
            if !number.is_empty() && self.seen.insert(number) {
                self.cards.push(card);
                count += 1;
            }
        }

        count
    }
}

/// Parallel and alternate art printings are marked in their image id.
pub fn is_variant_art(card: &RawCard) -> bool {
    card.image_id().contains(OptcgApi::variant_marker())
}
