//! Static card catalog for the two-player game.
//!
//! Every purchasable card is a `CardKind` with an immutable `CardDef` looked
//! up in a fixed table. Card behavior is a closed tagged variant (`Behavior`)
//! so the engine can match on it exhaustively; the catalog itself carries no
//! logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Funding source and turn-gating category.
///
/// Blue and Green cards are paid by the bank and fire on the owner's own
/// roll. Red and Purple cards take their income from the opponent and fire
/// when the opponent rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardColor {
    Blue,
    Green,
    Red,
    Purple,
}

impl CardColor {
    /// True when the card's income is extracted from the opponent rather
    /// than paid by the bank.
    pub fn funded_by_opponent(self) -> bool {
        matches!(self, CardColor::Red | CardColor::Purple)
    }
}

/// Income-trigger grouping. Multiplier cards count cards by symbol, and the
/// shopping mall bonus applies to Bread and Coffee cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSymbol {
    Wheat,
    Animal,
    Bread,
    Coffee,
    Gear,
    Tower,
    Factory,
    Fruit,
}

/// Capability granted by a landmark once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Roll two dice and use the sum.
    DoubleRoll,
    /// +1 coin on every Bread and Coffee activation.
    ShoppingBonus,
    /// Keep the turn when both dice match.
    ExtraTurnOnDoubles,
}

/// What a card does when its trigger roll comes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Flat payout. Funding source follows the card color.
    Income { amount: u32 },
    /// Payout of `per_unit` for every owned card matching `symbol`,
    /// recomputed from current holdings at each activation.
    Multiplier { symbol: CardSymbol, per_unit: u32 },
    /// Swap one card with the opponent; both picks are delegated to the
    /// owner's policy.
    Trade,
    /// No recurring effect. Owning all four landmarks wins the game.
    Landmark(Option<Capability>),
}

/// Every purchasable card type. The discriminant doubles as a stable index
/// into chromosome vectors and the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    WheatField,
    Ranch,
    Bakery,
    Cafe,
    ConvenienceStore,
    Forest,
    Stadium,
    TvStation,
    BusinessCenter,
    CheeseFactory,
    FurnitureFactory,
    Mine,
    FamilyRestaurant,
    AppleOrchard,
    FruitAndVegetableMarket,
    TrainStation,
    ShoppingMall,
    AmusementPark,
    RadioTower,
}

pub const CARD_COUNT: usize = 19;

/// All card types in catalog order.
pub const ALL_CARDS: [CardKind; CARD_COUNT] = [
    CardKind::WheatField,
    CardKind::Ranch,
    CardKind::Bakery,
    CardKind::Cafe,
    CardKind::ConvenienceStore,
    CardKind::Forest,
    CardKind::Stadium,
    CardKind::TvStation,
    CardKind::BusinessCenter,
    CardKind::CheeseFactory,
    CardKind::FurnitureFactory,
    CardKind::Mine,
    CardKind::FamilyRestaurant,
    CardKind::AppleOrchard,
    CardKind::FruitAndVegetableMarket,
    CardKind::TrainStation,
    CardKind::ShoppingMall,
    CardKind::AmusementPark,
    CardKind::RadioTower,
];

/// The four landmarks; owning all of them is the win condition.
pub const LANDMARKS: [CardKind; 4] = [
    CardKind::TrainStation,
    CardKind::ShoppingMall,
    CardKind::AmusementPark,
    CardKind::RadioTower,
];

/// Coins added to Bread/Coffee activations when the owner has built the
/// shopping mall.
pub const SHOPPING_BONUS: u32 = 1;

/// Immutable definition of one card type.
#[derive(Debug, Clone, Copy)]
pub struct CardDef {
    pub color: Option<CardColor>,
    pub symbol: Option<CardSymbol>,
    /// Dice-roll values that activate the card. Empty for landmarks.
    pub rolls: &'static [u8],
    pub cost: u32,
    pub behavior: Behavior,
}

use Behavior::{Income, Landmark, Multiplier, Trade};
use CardColor::{Blue, Green, Purple, Red};
use CardSymbol::{Animal, Bread, Coffee, Factory, Fruit, Gear, Tower, Wheat};

/// Indexed by `CardKind as usize`; order must match `ALL_CARDS`.
static CATALOG: [CardDef; CARD_COUNT] = [
    // WheatField
    CardDef { color: Some(Blue), symbol: Some(Wheat), rolls: &[1], cost: 1, behavior: Income { amount: 1 } },
    // Ranch
    CardDef { color: Some(Blue), symbol: Some(Animal), rolls: &[2], cost: 1, behavior: Income { amount: 1 } },
    // Bakery
    CardDef { color: Some(Green), symbol: Some(Bread), rolls: &[2, 3], cost: 1, behavior: Income { amount: 1 } },
    // Cafe
    CardDef { color: Some(Red), symbol: Some(Coffee), rolls: &[3], cost: 2, behavior: Income { amount: 1 } },
    // ConvenienceStore
    CardDef { color: Some(Green), symbol: Some(Bread), rolls: &[4], cost: 2, behavior: Income { amount: 3 } },
    // Forest
    CardDef { color: Some(Blue), symbol: Some(Gear), rolls: &[5], cost: 3, behavior: Income { amount: 1 } },
    // Stadium
    CardDef { color: Some(Purple), symbol: Some(Tower), rolls: &[6], cost: 6, behavior: Income { amount: 2 } },
    // TvStation
    CardDef { color: Some(Purple), symbol: Some(Tower), rolls: &[6], cost: 7, behavior: Income { amount: 5 } },
    // BusinessCenter
    CardDef { color: Some(Purple), symbol: Some(Tower), rolls: &[6], cost: 8, behavior: Trade },
    // CheeseFactory
    CardDef { color: Some(Green), symbol: Some(Factory), rolls: &[7], cost: 5, behavior: Multiplier { symbol: Animal, per_unit: 3 } },
    // FurnitureFactory
    CardDef { color: Some(Green), symbol: Some(Factory), rolls: &[8], cost: 3, behavior: Multiplier { symbol: Gear, per_unit: 3 } },
    // Mine
    CardDef { color: Some(Blue), symbol: Some(Gear), rolls: &[9], cost: 6, behavior: Income { amount: 5 } },
    // FamilyRestaurant
    CardDef { color: Some(Red), symbol: Some(Coffee), rolls: &[9, 10], cost: 3, behavior: Income { amount: 2 } },
    // AppleOrchard
    CardDef { color: Some(Blue), symbol: Some(Wheat), rolls: &[10], cost: 3, behavior: Income { amount: 3 } },
    // FruitAndVegetableMarket
    CardDef { color: Some(Green), symbol: Some(Fruit), rolls: &[11, 12], cost: 2, behavior: Multiplier { symbol: Wheat, per_unit: 2 } },
    // TrainStation
    CardDef { color: None, symbol: None, rolls: &[], cost: 4, behavior: Landmark(Some(Capability::DoubleRoll)) },
    // ShoppingMall
    CardDef { color: None, symbol: None, rolls: &[], cost: 10, behavior: Landmark(Some(Capability::ShoppingBonus)) },
    // AmusementPark
    CardDef { color: None, symbol: None, rolls: &[], cost: 16, behavior: Landmark(Some(Capability::ExtraTurnOnDoubles)) },
    // RadioTower
    CardDef { color: None, symbol: None, rolls: &[], cost: 22, behavior: Landmark(None) },
];

impl CardKind {
    /// Stable position in `ALL_CARDS`, used as the chromosome gene index.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn def(self) -> &'static CardDef {
        &CATALOG[self as usize]
    }

    pub fn is_landmark(self) -> bool {
        matches!(self.def().behavior, Landmark(_))
    }

    /// Copies of this card in the shared supply at game start. Landmarks are
    /// per-player and never enter the shared supply.
    pub fn supply_count(self) -> u8 {
        match self {
            CardKind::Stadium | CardKind::TvStation | CardKind::BusinessCenter => 4,
            kind if kind.is_landmark() => 0,
            _ => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardKind::WheatField => "WheatField",
            CardKind::Ranch => "Ranch",
            CardKind::Bakery => "Bakery",
            CardKind::Cafe => "Cafe",
            CardKind::ConvenienceStore => "ConvenienceStore",
            CardKind::Forest => "Forest",
            CardKind::Stadium => "Stadium",
            CardKind::TvStation => "TvStation",
            CardKind::BusinessCenter => "BusinessCenter",
            CardKind::CheeseFactory => "CheeseFactory",
            CardKind::FurnitureFactory => "FurnitureFactory",
            CardKind::Mine => "Mine",
            CardKind::FamilyRestaurant => "FamilyRestaurant",
            CardKind::AppleOrchard => "AppleOrchard",
            CardKind::FruitAndVegetableMarket => "FruitAndVegetableMarket",
            CardKind::TrainStation => "TrainStation",
            CardKind::ShoppingMall => "ShoppingMall",
            CardKind::AmusementPark => "AmusementPark",
            CardKind::RadioTower => "RadioTower",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
