use crate::cards::{CardKind, ALL_CARDS, CARD_COUNT};
use crate::engine::Policy;
use crate::evolution::operators::{normalize, weighted_draw};
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Purchase-probability weight per card type, the evolved genotype.
///
/// A flat array keyed by `CardKind::index` keeps crossover and mutation
/// simple gene-wise loops and makes sampling order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    weights: [f64; CARD_COUNT],
}

impl Chromosome {
    /// Independently random weights, scaled to sum to one.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut weights = [0.0; CARD_COUNT];
        for weight in &mut weights {
            *weight = rng.gen::<f64>();
        }
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            for weight in &mut weights {
                *weight /= total;
            }
        }
        Self { weights }
    }

    pub fn weight(&self, kind: CardKind) -> f64 {
        self.weights[kind.index()]
    }

    pub fn set_weight(&mut self, kind: CardKind, weight: f64) {
        self.weights[kind.index()] = weight;
    }

    /// Read accessor for reporting and export collaborators.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, f64)> + '_ {
        ALL_CARDS.iter().map(move |&kind| (kind, self.weight(kind)))
    }
}

/// Uniform crossover: each gene comes from `a` with probability `bias`,
/// otherwise from `b`. Identical parents always produce an identical child.
pub fn crossover<R: Rng>(a: &Chromosome, b: &Chromosome, bias: f64, rng: &mut R) -> Chromosome {
    let mut child = Chromosome::default();
    for kind in ALL_CARDS {
        let weight = if rng.gen::<f64>() < bias {
            a.weight(kind)
        } else {
            b.weight(kind)
        };
        child.set_weight(kind, weight);
    }
    child
}

/// Perturb one gene on average: each gene independently gets Gaussian noise
/// with probability `1/CARD_COUNT`, clamped back into [0, 1].
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, sigma: f64, rng: &mut R) {
    let Ok(noise) = Normal::new(0.0, sigma) else {
        return; // negative sigma is rejected by config validation
    };
    for kind in ALL_CARDS {
        if rng.gen::<f64>() < 1.0 / CARD_COUNT as f64 {
            let perturbed = chromosome.weight(kind) + noise.sample(rng);
            chromosome.set_weight(kind, perturbed.clamp(0.0, 1.0));
        }
    }
}

/// An evolved player: a chromosome plus its win tally for the current
/// generation's tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub chromosome: Chromosome,
    pub wins: u32,
}

impl Organism {
    pub fn new(chromosome: Chromosome) -> Self {
        Self { chromosome, wins: 0 }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(Chromosome::random(rng))
    }
}

impl Policy for Organism {
    /// Filter the chromosome to the available card types, renormalize, and
    /// draw one by weight. When every relevant gene is zero the choice is
    /// uniform over the available types.
    fn select_purchase(&self, available: &[CardKind], rng: &mut StdRng) -> Option<CardKind> {
        if available.is_empty() {
            return None;
        }
        let relevant: Vec<(CardKind, f64)> = available
            .iter()
            .map(|&kind| (kind, self.chromosome.weight(kind)))
            .collect();
        let total: f64 = relevant.iter().map(|(_, w)| *w).sum();
        if total <= 0.0 {
            // Arbitrary-choice policy.
            return Some(available[rng.gen_range(0..available.len())]);
        }
        weighted_draw(&normalize(&relevant), rng).copied()
    }

    /// Hand over the cheapest eligible card.
    fn select_trade_give(&self, candidates: &[CardKind], _rng: &mut StdRng) -> Option<CardKind> {
        candidates.iter().min_by_key(|kind| kind.def().cost).copied()
    }

    /// Take the most expensive eligible card.
    fn select_trade_receive(&self, candidates: &[CardKind], _rng: &mut StdRng) -> Option<CardKind> {
        candidates.iter().max_by_key(|kind| kind.def().cost).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn random_chromosome_is_row_normalized() {
        let mut rng = StdRng::seed_from_u64(11);
        let chromosome = Chromosome::random(&mut rng);
        let total: f64 = chromosome.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for (_, weight) in chromosome.iter() {
            assert!((0.0..=1.0).contains(&weight));
        }
    }

    #[test]
    fn crossover_of_identical_parents_is_identity() {
        let mut rng = StdRng::seed_from_u64(12);
        let parent = Chromosome::random(&mut rng);
        for bias in [0.0, 0.3, 1.0] {
            let child = crossover(&parent, &parent, bias, &mut rng);
            assert_eq!(child, parent);
        }
    }

    #[test]
    fn crossover_takes_genes_from_both_parents() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut a = Chromosome::default();
        let mut b = Chromosome::default();
        for kind in ALL_CARDS {
            a.set_weight(kind, 0.0);
            b.set_weight(kind, 1.0);
        }
        let child = crossover(&a, &b, 0.5, &mut rng);
        for (_, weight) in child.iter() {
            assert!(weight == 0.0 || weight == 1.0);
        }
    }

    #[test]
    fn mutation_stays_clamped_under_extreme_noise() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut chromosome = Chromosome::default();
        for kind in ALL_CARDS {
            chromosome.set_weight(kind, 0.5);
        }
        for _ in 0..500 {
            mutate(&mut chromosome, 10.0, &mut rng);
        }
        for (_, weight) in chromosome.iter() {
            assert!((0.0..=1.0).contains(&weight));
        }
    }

    #[test]
    fn organism_samples_only_available_cards() {
        let mut rng = StdRng::seed_from_u64(15);
        let organism = Organism::random(&mut rng);
        let available = [CardKind::Bakery, CardKind::Mine];
        for _ in 0..100 {
            let pick = organism.select_purchase(&available, &mut rng);
            assert!(matches!(pick, Some(kind) if available.contains(&kind)));
        }
    }

    #[test]
    fn zero_weight_chromosome_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(16);
        let organism = Organism::new(Chromosome::default());
        let available = [CardKind::Bakery, CardKind::Mine];
        let mut seen = [false, false];
        for _ in 0..200 {
            match organism.select_purchase(&available, &mut rng) {
                Some(CardKind::Bakery) => seen[0] = true,
                Some(CardKind::Mine) => seen[1] = true,
                other => panic!("unexpected pick {other:?}"),
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn trade_rules_are_cost_ordered() {
        let mut rng = StdRng::seed_from_u64(17);
        let organism = Organism::random(&mut rng);
        let candidates = [CardKind::Mine, CardKind::WheatField, CardKind::Forest];
        assert_eq!(
            organism.select_trade_give(&candidates, &mut rng),
            Some(CardKind::WheatField)
        );
        assert_eq!(
            organism.select_trade_receive(&candidates, &mut rng),
            Some(CardKind::Mine)
        );
    }
}
