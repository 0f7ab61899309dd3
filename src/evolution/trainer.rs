//! Generation loop: round-robin fitness evaluation, fitness-proportionate
//! selection, uniform crossover, and Gaussian mutation.

use crate::config::{AppConfig, ConfigSection, GameConfig, TrainerConfig};
use crate::engine::Game;
use crate::error::{DicetownError, Result};
use crate::evolution::operators::weighted_pair;
use crate::evolution::organism::{crossover, mutate, Organism};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Runs the evolutionary training loop and reports the fittest organism.
pub struct Trainer {
    trainer_config: TrainerConfig,
    game_config: GameConfig,
    rng: StdRng,
}

impl Trainer {
    pub fn new(trainer_config: TrainerConfig, game_config: GameConfig) -> Result<Self> {
        trainer_config.validate()?;
        game_config.validate()?;
        let rng = match trainer_config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            trainer_config,
            game_config,
            rng,
        })
    }

    /// Evolve for the configured number of generations and return the
    /// organism with the most wins in the final evaluation.
    pub fn run(&mut self) -> Result<Organism> {
        let mut population: Vec<Organism> = (0..self.trainer_config.population_size)
            .map(|_| Organism::random(&mut self.rng))
            .collect();

        for generation in 0..self.trainer_config.generations {
            let tournament_seed = self.rng.gen::<u64>();
            run_tournament(&mut population, &self.game_config, tournament_seed)?;

            let best = population.iter().map(|o| o.wins).max().unwrap_or(0);
            log::info!(
                "generation {}/{}: best organism won {} of {} games",
                generation + 1,
                self.trainer_config.generations,
                best,
                population.len().saturating_sub(1),
            );

            if generation + 1 == self.trainer_config.generations {
                // Keep the final win counts for the report.
                break;
            }
            population = self.next_generation(&population)?;
        }

        population
            .into_iter()
            .max_by_key(|organism| organism.wins)
            .ok_or_else(|| DicetownError::Population("population is empty".to_string()))
    }

    /// Breed a full replacement population by fitness-proportionate
    /// selection. If every game drew, selection falls back to uniform
    /// weights.
    fn next_generation(&mut self, population: &[Organism]) -> Result<Vec<Organism>> {
        let total_wins: u32 = population.iter().map(|o| o.wins).sum();
        let weights: Vec<f64> = if total_wins == 0 {
            vec![1.0; population.len()]
        } else {
            population
                .iter()
                .map(|o| f64::from(o.wins) / f64::from(total_wins))
                .collect()
        };

        let mut children = Vec::with_capacity(population.len());
        for _ in 0..population.len() {
            let (first, second) = weighted_pair(&weights, &mut self.rng)?;
            let mut chromosome = crossover(
                &population[first].chromosome,
                &population[second].chromosome,
                self.trainer_config.recombination_probability,
                &mut self.rng,
            );
            if self.rng.gen::<f64>() < self.trainer_config.mutation_probability {
                mutate(&mut chromosome, self.trainer_config.mutation_sigma, &mut self.rng);
            }
            children.push(Organism::new(chromosome));
        }
        Ok(children)
    }
}

/// Play every unordered pair of organisms once and tally wins. Games are
/// independent, so pairs are dispatched through rayon; each game gets its
/// own RNG derived from `seed` and the pair indices, keeping results
/// reproducible regardless of scheduling. Drawn games score nobody.
fn run_tournament(population: &mut [Organism], game_config: &GameConfig, seed: u64) -> Result<()> {
    for organism in population.iter_mut() {
        organism.wins = 0;
    }

    let n = population.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();

    let contenders: &[Organism] = population;
    let winners: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let game_seed = seed ^ ((i as u64) << 32 | j as u64);
            let rng = StdRng::seed_from_u64(game_seed);
            let mut game = Game::with_max_rounds(
                &contenders[i],
                &contenders[j],
                game_config.max_rounds,
                rng,
            );
            match game.simulate()? {
                Some(0) => Ok(Some(i)),
                Some(_) => Ok(Some(j)),
                None => Ok(None),
            }
        })
        .collect::<Result<_>>()?;

    for winner in winners.into_iter().flatten() {
        population[winner].wins += 1;
    }
    Ok(())
}

/// Train with the given configuration and return the fittest organism.
pub fn train(config: &AppConfig) -> Result<Organism> {
    config.validate()?;
    Trainer::new(config.trainer.clone(), config.game.clone())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> AppConfig {
        AppConfig {
            game: GameConfig { max_rounds: 500 },
            trainer: TrainerConfig {
                population_size: 6,
                generations: 2,
                recombination_probability: 0.5,
                mutation_probability: 0.25,
                mutation_sigma: 0.01,
                seed: Some(seed),
            },
        }
    }

    #[test]
    fn tournament_plays_every_pair_once() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut population: Vec<Organism> =
            (0..5).map(|_| Organism::random(&mut rng)).collect();
        run_tournament(&mut population, &GameConfig { max_rounds: 500 }, 99).unwrap();
        let total_wins: u32 = population.iter().map(|o| o.wins).sum();
        // 5 organisms give C(5,2) = 10 games; draws can only lower the sum.
        assert!(total_wins <= 10);
    }

    #[test]
    fn training_is_deterministic_for_a_fixed_seed() {
        let first = train(&small_config(42)).unwrap();
        let second = train(&small_config(42)).unwrap();
        assert_eq!(first.chromosome, second.chromosome);
        assert_eq!(first.wins, second.wins);
    }

    #[test]
    fn zero_generations_returns_an_untested_organism() {
        let mut config = small_config(7);
        config.trainer.generations = 0;
        let best = train(&config).unwrap();
        assert_eq!(best.wins, 0);
    }
}
