//! # fivedraw-ai: Automatic Opponents for Five-Card Draw
//!
//! Decision providers that play a seat without a human at the keyboard.
//! Every opponent implements the engine's [`DecisionProvider`] capability, so it
//! can be handed straight to [`Player::new`](fivedraw_engine::player::Player::new).
//!
//! ## Core Components
//!
//! - [`baseline`] - Rank-driven opponent used to fill empty seats
//! - [`random`] - Seeded random opponent for simulations and fuzzing
//! - [`scripted`] - Queued answers for tests and replays
//! - [`create_ai`] - Factory resolving an opponent by kind
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_ai::create_ai;
//! use fivedraw_engine::engine::Game;
//! use fivedraw_engine::player::Player;
//! use fivedraw_engine::rules::SimpleRules;
//!
//! let players = (0..3)
//!     .map(|i| {
//!         let ai = create_ai("baseline", i, &SimpleRules::default()).unwrap();
//!         Player::new(format!("bot{i}"), ai)
//!     })
//!     .collect();
//! let mut game = Game::new(players, 500).unwrap();
//! let record = game.play_round().unwrap();
//! assert_eq!(record.dealer, "bot0");
//! ```
//!
//! ## AI Kinds
//!
//! - `"baseline"` - [`baseline::BaselineAI`]
//! - `"random"` - [`random::RandomAI`], seeded
//! - `"caller"` - [`scripted::ScriptedAI`] with an empty script: always calls, never draws

use fivedraw_engine::player::DecisionProvider;
use fivedraw_engine::rules::Rules;

pub mod baseline;
pub mod random;
pub mod scripted;

/// Opponent kinds accepted by [`create_ai`].
pub const AI_KINDS: [&str; 3] = ["baseline", "random", "caller"];

/// Factory function to create automatic opponents by kind.
///
/// Bet sizes follow the blinds in `rules`. `seed` only matters for kinds that draw
/// random numbers. Returns `None` for an unknown kind.
///
/// # Example
///
/// ```rust
/// use fivedraw_ai::create_ai;
/// use fivedraw_engine::rules::SimpleRules;
///
/// let rules = SimpleRules::new(50, 100);
/// assert!(create_ai("baseline", 0, &rules).is_some());
/// assert!(create_ai("oracle", 0, &rules).is_none());
/// ```
pub fn create_ai<R: Rules>(
    kind: &str,
    seed: u64,
    rules: &R,
) -> Option<Box<dyn DecisionProvider>> {
    let ai: Box<dyn DecisionProvider> = match kind {
        "baseline" => Box::new(baseline::BaselineAI::for_rules(rules)),
        "random" => Box::new(random::RandomAI::for_rules(seed, rules)),
        "caller" => Box::new(scripted::ScriptedAI::default()),
        _ => return None,
    };
    Some(ai)
}
