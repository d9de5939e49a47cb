mod helpers;

use fivedraw_engine::engine::{Game, Phase};
use fivedraw_engine::errors::GameError;
use fivedraw_engine::rules::SimpleRules;
use helpers::{game, player, Script};

#[test]
fn new_game_seats_everyone_with_initial_cash() {
    let g = game(
        vec![
            player("ann", Script::calling()),
            player("bob", Script::calling()),
            player("cat", Script::calling()),
        ],
        1000,
    );
    let cash: Vec<u32> = g.seats().iter().map(|s| s.hand.cash()).collect();
    assert_eq!(cash, vec![1000, 1000, 1000]);
    assert!(g.seats().iter().all(|s| !s.hand.has_cards()));
    assert_eq!(g.deck_len(), 52);
    assert_eq!(g.dealer(), None);
    assert_eq!(g.round(), 0);
    assert_eq!(g.phase(), Phase::Idle);
    assert!(!g.is_game_over());
}

#[test]
fn empty_roster_is_rejected() {
    let r = Game::new(Vec::new(), 100);
    assert!(matches!(r, Err(GameError::InvalidSetup(_))));
}

#[test]
fn more_than_ten_players_is_rejected() {
    let players = (0..11)
        .map(|i| player(&format!("p{i}"), Script::calling()))
        .collect();
    let r = Game::new(players, 100);
    assert!(matches!(r, Err(GameError::InvalidSetup(_))));
}

#[test]
fn small_blind_above_big_blind_is_rejected() {
    let players = vec![
        player("ann", Script::calling()),
        player("bob", Script::calling()),
    ];
    let r = Game::with_rules(players, 100, SimpleRules::new(50, 20), Some(1));
    assert!(matches!(r, Err(GameError::InvalidSetup(_))));
}

#[test]
fn single_player_game_is_already_over() {
    let mut g = game(vec![player("solo", Script::calling())], 100);
    assert!(g.is_game_over());
    assert_eq!(g.winner(), Some("solo"));
    assert_eq!(g.play_round().unwrap_err(), GameError::GameAlreadyOver);
}

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let mut g = game(
            vec![
                player("ann", Script::calling()),
                player("bob", Script::calling()),
                player("cat", Script::calling()),
            ],
            200,
        );
        let mut winners = Vec::new();
        while !g.is_game_over() {
            winners.push(g.play_round().unwrap().winner);
        }
        winners
    };
    assert_eq!(run(), run());
}

#[test]
fn starting_cash_below_big_blind_is_rejected() {
    let players = vec![
        player("ann", Script::calling()),
        player("bob", Script::calling()),
    ];
    let r = Game::with_rules(players, 20, SimpleRules::default(), Some(1));
    assert!(matches!(r, Err(GameError::InvalidSetup(_))));
}

#[test]
fn starting_cash_equal_to_big_blind_is_accepted() {
    let mut g = game(
        vec![
            player("ann", Script::calling()),
            player("bob", Script::calling()),
        ],
        SimpleRules::BIG_BLIND,
    );
    let rec = g.play_round().unwrap();
    assert_eq!(rec.pot, 2 * SimpleRules::BIG_BLIND);
    assert!(g.is_game_over());
}

#[test]
fn zero_blinds_are_rejected() {
    let players = vec![
        player("ann", Script::calling()),
        player("bob", Script::calling()),
    ];
    let r = Game::with_rules(players, 100, SimpleRules::new(0, 0), Some(1));
    assert!(matches!(r, Err(GameError::InvalidSetup(_))));
}

#[test]
fn chip_total_must_fit_in_a_balance() {
    let players = (0..10)
        .map(|i| player(&format!("p{i}"), Script::calling()))
        .collect();
    let r = Game::with_rules(players, u32::MAX / 5, SimpleRules::default(), Some(1));
    assert!(matches!(r, Err(GameError::InvalidSetup(_))));

    let players = (0..10)
        .map(|i| player(&format!("p{i}"), Script::calling()))
        .collect();
    let g = Game::with_rules(players, u32::MAX / 10, SimpleRules::default(), Some(1)).unwrap();
    assert_eq!(g.total_chips(), (u32::MAX / 10) * 10);
}
