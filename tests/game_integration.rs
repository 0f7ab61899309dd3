use dicetown::cards::{CardKind, LANDMARKS};
use dicetown::engine::{FixedPolicy, Game, Policy, STARTING_BALANCE};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_game<'a>(a: &'a dyn Policy, b: &'a dyn Policy, seed: u64) -> Game<'a> {
    Game::with_max_rounds(a, b, 2_000, StdRng::seed_from_u64(seed))
}

#[test]
fn test_purchase_grows_hand_and_shrinks_supply() {
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&passive, &passive, 1);

    let initial_hand_size = game.players[0].hand.len();
    let initial_supply = game.remaining(CardKind::WheatField);
    game.purchase(CardKind::WheatField, 0).unwrap();

    assert_eq!(game.players[0].hand.len(), initial_hand_size + 1);
    assert_eq!(game.remaining(CardKind::WheatField), initial_supply - 1);
}

#[test]
fn test_unaffordable_purchase_changes_nothing() {
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&passive, &passive, 2);

    let initial_hand_size = game.players[0].hand.len();
    // A stadium is too expensive for a new player.
    game.purchase(CardKind::Stadium, 0).unwrap();

    assert_eq!(game.players[0].hand.len(), initial_hand_size);
    assert_eq!(game.players[0].balance, STARTING_BALANCE);
}

#[test]
fn test_landmarks_purchasable_once_and_win_the_game() {
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&passive, &passive, 3);
    game.players[0].balance = 1_000; // enough to buy anything

    for landmark in LANDMARKS {
        assert!(game.available_cards(0).contains(&landmark));
        game.purchase(landmark, 0).unwrap();
        // Landmarks can only be purchased once.
        assert!(!game.available_cards(0).contains(&landmark));
    }
    assert!(game.players[0].has_won());
}

#[test]
fn test_three_landmarks_do_not_win() {
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&passive, &passive, 4);
    game.players[0].balance = 1_000;

    for landmark in LANDMARKS.iter().take(3) {
        game.purchase(*landmark, 0).unwrap();
    }
    assert!(!game.players[0].has_won());
}

#[test]
fn test_wheat_field_activation_from_starting_position() {
    // Two fresh players with balance 3 and hands [WheatField, Bakery]; a
    // roll of 1 triggers the active player's wheat field only.
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&passive, &passive, 5);

    game.resolve_roll(1);

    assert_eq!(game.players[0].balance, 4);
    assert_eq!(game.players[1].balance, 3);
}

#[test]
fn test_scripted_player_can_win_a_full_game() {
    // A buyer that chases cheap income and then landmarks should beat a
    // player that never buys anything.
    let buyer = FixedPolicy::new(vec![
        CardKind::TrainStation,
        CardKind::ShoppingMall,
        CardKind::AmusementPark,
        CardKind::RadioTower,
        CardKind::Ranch,
        CardKind::WheatField,
        CardKind::Bakery,
    ]);
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&buyer, &passive, 6);

    let winner = game.simulate().unwrap();
    assert_eq!(winner, Some(0));
    assert!(game.players[0].has_won());
    assert_eq!(game.winner(), Some(0));
}

#[test]
fn test_game_stays_halted_after_win() {
    let buyer = FixedPolicy::new(vec![
        CardKind::TrainStation,
        CardKind::ShoppingMall,
        CardKind::AmusementPark,
        CardKind::RadioTower,
        CardKind::WheatField,
    ]);
    let passive = FixedPolicy::passive();
    let mut game = seeded_game(&buyer, &passive, 7);

    let first = game.simulate().unwrap();
    let second = game.simulate().unwrap();
    assert_eq!(first, second);
}
