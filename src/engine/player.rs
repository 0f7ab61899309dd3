use crate::cards::{Behavior, Capability, CardKind, CardSymbol, LANDMARKS};
use rand::rngs::StdRng;

pub const STARTING_BALANCE: u32 = 3;

/// Per-player mutable state for one game. The hand keeps cards in
/// acquisition order; a card is owned by exactly one player because it lives
/// in exactly one hand.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub balance: u32,
    pub hand: Vec<CardKind>,
}

impl PlayerState {
    /// Fresh player with the fixed starting balance and starting hand.
    pub fn new() -> Self {
        Self {
            balance: STARTING_BALANCE,
            hand: vec![CardKind::WheatField, CardKind::Bakery],
        }
    }

    pub fn owns(&self, kind: CardKind) -> bool {
        self.hand.contains(&kind)
    }

    pub fn count_symbol(&self, symbol: CardSymbol) -> u32 {
        self.hand
            .iter()
            .filter(|kind| kind.def().symbol == Some(symbol))
            .count() as u32
    }

    /// True when a built landmark grants the capability.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.hand.iter().any(|kind| {
            matches!(kind.def().behavior, Behavior::Landmark(Some(c)) if c == capability)
        })
    }

    pub fn landmark_count(&self) -> usize {
        self.hand.iter().filter(|kind| kind.is_landmark()).count()
    }

    pub fn has_won(&self) -> bool {
        self.landmark_count() == LANDMARKS.len()
    }

    pub fn can_afford(&self, kind: CardKind) -> bool {
        kind.def().cost <= self.balance
    }

    pub fn credit(&mut self, amount: u32) {
        self.balance += amount;
    }

    /// Debit up to `amount`, capped at the available balance. Returns the
    /// amount actually taken, so transfers conserve coins exactly.
    pub fn debit_up_to(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.balance);
        self.balance -= taken;
        taken
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Decision capability of a player, polymorphic over the player kind:
/// evolved organisms, scripted test doubles, or an interactive front end.
///
/// Methods take `&self` so one policy value can drive many parallel games;
/// all randomness comes through the game's RNG.
pub trait Policy: Sync {
    /// Pick at most one card type to attempt to buy this turn. `available`
    /// reflects remaining supply and this player's unbuilt landmarks.
    fn select_purchase(&self, available: &[CardKind], rng: &mut StdRng) -> Option<CardKind>;

    /// Pick one of our own cards to hand over in a trade, or `None` to
    /// refuse the trade.
    fn select_trade_give(&self, candidates: &[CardKind], rng: &mut StdRng) -> Option<CardKind>;

    /// Pick one of the opponent's cards to take in a trade, or `None` to
    /// refuse the trade.
    fn select_trade_receive(&self, candidates: &[CardKind], rng: &mut StdRng) -> Option<CardKind>;
}

/// Scripted policy with a fixed purchase preference order. Buys the first
/// preference that is available; trades take the first candidate offered.
#[derive(Debug, Clone, Default)]
pub struct FixedPolicy {
    pub preferences: Vec<CardKind>,
}

impl FixedPolicy {
    pub fn new(preferences: Vec<CardKind>) -> Self {
        Self { preferences }
    }

    /// A policy that never buys anything.
    pub fn passive() -> Self {
        Self::default()
    }
}

impl Policy for FixedPolicy {
    fn select_purchase(&self, available: &[CardKind], _rng: &mut StdRng) -> Option<CardKind> {
        self.preferences
            .iter()
            .find(|kind| available.contains(kind))
            .copied()
    }

    fn select_trade_give(&self, candidates: &[CardKind], _rng: &mut StdRng) -> Option<CardKind> {
        candidates.first().copied()
    }

    fn select_trade_receive(&self, candidates: &[CardKind], _rng: &mut StdRng) -> Option<CardKind> {
        candidates.first().copied()
    }
}
