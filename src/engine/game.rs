use crate::cards::{
    Behavior, Capability, CardKind, CardSymbol, ALL_CARDS, CARD_COUNT, SHOPPING_BONUS,
};
use crate::config::GameConfig;
use crate::engine::player::{PlayerState, Policy};
use crate::error::{DicetownError, Result};
use rand::rngs::StdRng;
use rand::Rng;

/// One simulated game between two players.
///
/// Seat 0 is active first; play alternates unless the extra-turn rule keeps
/// the seat. The game ends the moment a player owns all four landmarks, or
/// in a draw once the round cap is reached.
pub struct Game<'a> {
    pub players: [PlayerState; 2],
    policies: [&'a dyn Policy; 2],
    /// Shared purchasable stock per establishment kind. Landmarks stay at
    /// zero here; their availability is per-player ownership.
    supply: [u8; CARD_COUNT],
    pub active: usize,
    winner: Option<usize>,
    rounds_played: u32,
    max_rounds: u32,
    rng: StdRng,
}

impl<'a> Game<'a> {
    pub fn new(player_a: &'a dyn Policy, player_b: &'a dyn Policy, rng: StdRng) -> Self {
        Self::with_max_rounds(player_a, player_b, GameConfig::default().max_rounds, rng)
    }

    pub fn with_max_rounds(
        player_a: &'a dyn Policy,
        player_b: &'a dyn Policy,
        max_rounds: u32,
        rng: StdRng,
    ) -> Self {
        let mut supply = [0u8; CARD_COUNT];
        for kind in ALL_CARDS {
            supply[kind.index()] = kind.supply_count();
        }
        Self {
            players: [PlayerState::new(), PlayerState::new()],
            policies: [player_a, player_b],
            supply,
            active: 0,
            winner: None,
            rounds_played: 0,
            max_rounds,
            rng,
        }
    }

    /// Winning seat, if the game has ended with a winner.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn remaining(&self, kind: CardKind) -> u8 {
        self.supply[kind.index()]
    }

    /// Card types the given seat may currently buy: establishments with
    /// stock left, plus this player's unbuilt landmarks.
    pub fn available_cards(&self, seat: usize) -> Vec<CardKind> {
        ALL_CARDS
            .iter()
            .copied()
            .filter(|&kind| {
                if kind.is_landmark() {
                    !self.players[seat].owns(kind)
                } else {
                    self.supply[kind.index()] > 0
                }
            })
            .collect()
    }

    /// Buy one card for the seat. Buying an unavailable kind is a contract
    /// violation; an unaffordable purchase is a silent no-op.
    pub fn purchase(&mut self, kind: CardKind, seat: usize) -> Result<()> {
        if !self.available_cards(seat).contains(&kind) {
            return Err(DicetownError::UnavailableCard(kind));
        }
        if !self.players[seat].can_afford(kind) {
            log::trace!("seat {seat} cannot afford {kind}, skipping purchase");
            return Ok(());
        }
        if !kind.is_landmark() {
            self.supply[kind.index()] -= 1;
        }
        let cost = kind.def().cost;
        self.players[seat].balance -= cost;
        self.players[seat].hand.push(kind);
        log::trace!("seat {seat} bought {kind} for {cost}");
        Ok(())
    }

    /// Resolve income for every card in both hands against one roll value,
    /// attributed to the currently active seat's roll. Hands are walked in
    /// acquisition order, active seat first, and a trade swaps cards in
    /// place so resolution never reorders a hand mid-roll.
    pub fn resolve_roll(&mut self, roll: u8) {
        for seat in [self.active, 1 - self.active] {
            for idx in 0..self.players[seat].hand.len() {
                self.resolve_card(seat, idx, roll);
            }
        }
    }

    fn resolve_card(&mut self, owner: usize, idx: usize, roll: u8) {
        let kind = self.players[owner].hand[idx];
        let def = kind.def();
        if !def.rolls.contains(&roll) {
            return;
        }
        let Some(color) = def.color else {
            return; // landmark, no recurring effect
        };
        // Bank-funded cards earn on the owner's own roll; opponent-funded
        // cards earn when the opponent rolls.
        let owner_rolled = owner == self.active;
        if color.funded_by_opponent() == owner_rolled {
            return;
        }
        match def.behavior {
            Behavior::Income { amount } => {
                let amount = amount + self.shopping_bonus(owner, def.symbol);
                if color.funded_by_opponent() {
                    self.transfer(owner, amount);
                } else {
                    self.players[owner].credit(amount);
                }
            }
            Behavior::Multiplier { symbol, per_unit } => {
                let amount = self.players[owner].count_symbol(symbol) * per_unit;
                self.players[owner].credit(amount);
            }
            Behavior::Trade => self.resolve_trade(owner, def.symbol),
            Behavior::Landmark(_) => {}
        }
    }

    fn shopping_bonus(&self, owner: usize, symbol: Option<CardSymbol>) -> u32 {
        let qualifies = matches!(symbol, Some(CardSymbol::Bread) | Some(CardSymbol::Coffee));
        if qualifies && self.players[owner].has_capability(Capability::ShoppingBonus) {
            SHOPPING_BONUS
        } else {
            0
        }
    }

    /// Move up to `amount` coins from the opponent to `owner`. Partial when
    /// the opponent is short; the gain always equals the loss.
    fn transfer(&mut self, owner: usize, amount: u32) {
        let taken = self.players[1 - owner].debit_up_to(amount);
        self.players[owner].credit(taken);
    }

    /// The trade-card owner picks one card to give and one to take. Both
    /// picks must land or nothing moves; candidates exclude landmarks and
    /// cards sharing the trade card's own symbol.
    fn resolve_trade(&mut self, owner: usize, trade_symbol: Option<CardSymbol>) {
        let opponent = 1 - owner;
        let give_candidates = Self::trade_candidates(&self.players[owner], trade_symbol);
        let receive_candidates = Self::trade_candidates(&self.players[opponent], trade_symbol);

        let policy = self.policies[owner];
        let Some(give) = policy.select_trade_give(&give_candidates, &mut self.rng) else {
            return;
        };
        let Some(receive) = policy.select_trade_receive(&receive_candidates, &mut self.rng)
        else {
            return;
        };

        let give_pos = self.players[owner].hand.iter().position(|&k| k == give);
        let receive_pos = self.players[opponent].hand.iter().position(|&k| k == receive);
        let (Some(give_pos), Some(receive_pos)) = (give_pos, receive_pos) else {
            log::warn!("policy chose a trade card outside the candidate set, skipping trade");
            return;
        };
        self.players[owner].hand[give_pos] = receive;
        self.players[opponent].hand[receive_pos] = give;
        log::trace!("seat {owner} traded {give} for {receive}");
    }

    fn trade_candidates(player: &PlayerState, trade_symbol: Option<CardSymbol>) -> Vec<CardKind> {
        let mut candidates: Vec<CardKind> = Vec::new();
        for &kind in &player.hand {
            if kind.is_landmark() || kind.def().symbol == trade_symbol {
                continue;
            }
            if !candidates.contains(&kind) {
                candidates.push(kind);
            }
        }
        candidates
    }

    /// Throw the dice for the active seat. Two dice are summed when the
    /// player has built the train station; doubles are only meaningful for
    /// the extra-turn rule.
    fn roll_dice(&mut self) -> (u8, bool) {
        let first: u8 = self.rng.gen_range(1..=6);
        if self.players[self.active].has_capability(Capability::DoubleRoll) {
            let second: u8 = self.rng.gen_range(1..=6);
            (first + second, first == second)
        } else {
            (first, false)
        }
    }

    /// One full round: roll, income for both players, purchase decision,
    /// win check, turn advancement.
    pub fn simulate_round(&mut self) -> Result<()> {
        let (roll, was_double) = self.roll_dice();
        log::trace!("seat {} rolled {roll}", self.active);

        self.resolve_roll(roll);

        let available = self.available_cards(self.active);
        let choice = self.policies[self.active].select_purchase(&available, &mut self.rng);
        if let Some(kind) = choice {
            self.purchase(kind, self.active)?;
        }

        if self.players[self.active].has_won() {
            self.winner = Some(self.active);
            return Ok(());
        }

        let keeps_turn =
            was_double && self.players[self.active].has_capability(Capability::ExtraTurnOnDoubles);
        if !keeps_turn {
            self.active = 1 - self.active;
        }
        Ok(())
    }

    /// Run rounds until a player wins or the round cap is hit. Returns the
    /// winning seat, or `None` for a capped draw.
    pub fn simulate(&mut self) -> Result<Option<usize>> {
        while self.winner.is_none() && self.rounds_played < self.max_rounds {
            self.simulate_round()?;
            self.rounds_played += 1;
        }
        if self.winner.is_none() {
            log::debug!("game drawn after {} rounds", self.rounds_played);
        }
        Ok(self.winner)
    }
}
