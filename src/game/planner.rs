use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::card::AssetId;
use super::layout::{BoardLayout, LayoutPolicy};
use super::prefix::group_by_prefix;
use super::shuffle::shuffle;

/// Reasons a board cannot be generated from the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("The number of cards must be even, got {total}.")]
    OddTotal { total: usize },
    #[error("Requested {requested} cards but only {available} images are available.")]
    NotEnoughAssets { requested: usize, available: usize },
    #[error(
        "Not enough prefixes with at least two images. Need {needed} pairs, but only {available} are available."
    )]
    NotEnoughPairs { needed: usize, available: usize },
    #[error("There are no cards to play with.")]
    EmptyBoard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardCount {
    /// Every asset in the catalog.
    #[default]
    All,
    Exactly(usize),
}

impl CardCount {
    pub fn from_option(count: Option<usize>) -> Self {
        count.map_or(CardCount::All, CardCount::Exactly)
    }

    fn resolve(self, available: usize) -> usize {
        match self {
            CardCount::All => available,
            CardCount::Exactly(total) => total,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardPlan {
    /// Shuffled play order; placeholders are not included.
    pub cards: Vec<AssetId>,
    pub layout: BoardLayout,
    pub total_pairs: usize,
}

impl BoardPlan {
    pub fn placeholders(&self) -> usize {
        self.layout.placeholders_for(self.cards.len())
    }
}

pub fn plan<R: Rng + ?Sized>(
    assets: &[AssetId],
    count: CardCount,
    policy: LayoutPolicy,
    separator: char,
    rng: &mut R,
) -> Result<BoardPlan, InvalidConfiguration> {
    let total = count.resolve(assets.len());
    if total % 2 != 0 {
        return Err(InvalidConfiguration::OddTotal { total });
    }
    if total > assets.len() {
        return Err(InvalidConfiguration::NotEnoughAssets {
            requested: total,
            available: assets.len(),
        });
    }
    if total == 0 {
        return Err(InvalidConfiguration::EmptyBoard);
    }

    let grouped = group_by_prefix(assets, separator);
    let mut valid_prefixes = grouped.valid_prefixes();
    let needed_pairs = total / 2;
    if valid_prefixes.len() < needed_pairs {
        return Err(InvalidConfiguration::NotEnoughPairs {
            needed: needed_pairs,
            available: valid_prefixes.len(),
        });
    }

    // Randomizes which pairs appear, independent of where they land.
    shuffle(&mut valid_prefixes, rng);
    let mut cards: Vec<AssetId> = valid_prefixes
        .iter()
        .take(needed_pairs)
        .filter_map(|prefix| grouped.get(prefix))
        .flat_map(|members| members.iter().take(2).cloned())
        .collect();
    debug_assert_eq!(cards.len(), total);

    shuffle(&mut cards, rng);
    let layout = policy.layout_for(total);
    debug!(
        total,
        rows = layout.rows,
        cols = layout.cols,
        valid_prefixes = valid_prefixes.len(),
        "planned board"
    );

    Ok(BoardPlan {
        cards,
        layout,
        total_pairs: needed_pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn catalog(prefixes: &[&str], per_prefix: usize) -> Vec<AssetId> {
        prefixes
            .iter()
            .flat_map(|prefix| (1..=per_prefix).map(move |n| AssetId::new(format!("{prefix}_{n}.png"))))
            .collect()
    }

    fn prefix_counts(cards: &[AssetId]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.prefix('_').to_string()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn use_all_plans_every_card_in_pairs() {
        let assets = catalog(&["A", "B", "C", "D", "E", "F", "G"], 2);
        let mut rng = StdRng::seed_from_u64(1);
        let plan = plan(&assets, CardCount::All, LayoutPolicy::default(), '_', &mut rng).unwrap();
        assert_eq!(plan.cards.len(), 14);
        assert_eq!(plan.total_pairs, 7);
        assert!(plan.layout.cells() >= 14);
        assert_eq!(plan.layout, BoardLayout { rows: 4, cols: 4 });
        assert_eq!(plan.placeholders(), 2);
        assert!(prefix_counts(&plan.cards).values().all(|count| *count == 2));
    }

    #[test]
    fn fixed_count_selects_subset_of_prefixes() {
        let assets = catalog(&["A", "B", "C", "D", "E", "F"], 2);
        let mut rng = StdRng::seed_from_u64(5);
        let plan = plan(
            &assets,
            CardCount::Exactly(8),
            LayoutPolicy::BalancedFactor,
            '_',
            &mut rng,
        )
        .unwrap();
        assert_eq!(plan.cards.len(), 8);
        assert_eq!(plan.layout, BoardLayout { rows: 2, cols: 4 });
        let counts = prefix_counts(&plan.cards);
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|count| *count == 2));
    }

    #[test]
    fn pair_uses_first_two_members_of_group() {
        let assets = catalog(&["A"], 3);
        let mut rng = StdRng::seed_from_u64(9);
        let plan = plan(&assets, CardCount::Exactly(2), LayoutPolicy::default(), '_', &mut rng)
            .unwrap();
        let mut cards = plan.cards.clone();
        cards.sort();
        assert_eq!(cards, vec![AssetId::new("A_1.png"), AssetId::new("A_2.png")]);
    }

    #[test]
    fn odd_total_is_rejected() {
        let assets = catalog(&["A", "B", "C", "D", "E", "F", "G", "H"], 2);
        let mut rng = StdRng::seed_from_u64(0);
        let err = plan(&assets, CardCount::Exactly(15), LayoutPolicy::default(), '_', &mut rng)
            .unwrap_err();
        assert_eq!(err, InvalidConfiguration::OddTotal { total: 15 });
    }

    #[test]
    fn odd_catalog_is_rejected_in_use_all_mode() {
        let mut assets = catalog(&["A", "B"], 2);
        assets.push(AssetId::new("C_1.png"));
        let mut rng = StdRng::seed_from_u64(0);
        let err = plan(&assets, CardCount::All, LayoutPolicy::default(), '_', &mut rng)
            .unwrap_err();
        assert_eq!(err, InvalidConfiguration::OddTotal { total: 5 });
    }

    #[test]
    fn too_many_requested_cards_are_rejected() {
        let assets = catalog(&["A", "B"], 2);
        let mut rng = StdRng::seed_from_u64(0);
        let err = plan(&assets, CardCount::Exactly(6), LayoutPolicy::default(), '_', &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            InvalidConfiguration::NotEnoughAssets {
                requested: 6,
                available: 4
            }
        );
    }

    #[test]
    fn too_few_pairable_prefixes_are_rejected() {
        // 3 pairable prefixes plus singletons: 10 assets, but 5 pairs needed.
        let mut assets = catalog(&["A", "B", "C"], 2);
        assets.extend(["D_1.png", "E_1.png", "F_1.png", "G_1.png"].map(AssetId::from));
        let mut rng = StdRng::seed_from_u64(0);
        let err = plan(&assets, CardCount::Exactly(10), LayoutPolicy::default(), '_', &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            InvalidConfiguration::NotEnoughPairs {
                needed: 5,
                available: 3
            }
        );
        assert!(err.to_string().contains("Need 5 pairs"));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = plan(&[], CardCount::All, LayoutPolicy::default(), '_', &mut rng).unwrap_err();
        assert_eq!(err, InvalidConfiguration::EmptyBoard);
    }

    #[test]
    fn many_catalogs_plan_exactly_n_cards() {
        let letters = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        let mut rng = StdRng::seed_from_u64(77);
        for pairs in 1..=letters.len() {
            let assets = catalog(&letters[..pairs], 2);
            for policy in [LayoutPolicy::default(), LayoutPolicy::BalancedFactor] {
                let plan = plan(&assets, CardCount::All, policy, '_', &mut rng).unwrap();
                assert_eq!(plan.cards.len(), pairs * 2);
                assert!(plan.layout.cells() >= pairs * 2);
            }
        }
    }
}
