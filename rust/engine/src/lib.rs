//! # fivedraw-engine: Five-Card Draw Round Engine
//!
//! Deals cards, runs the two betting phases and the card exchange of five-card
//! draw, ranks hands at showdown and eliminates seats that can no longer cover
//! the big blind, round after round until one seat is left.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 52-card universe
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - A seat's cards and chip balance
//! - [`player`] - The [`player::DecisionProvider`] capability and named players
//! - [`rules`] - Hand ranking and the blind structure
//! - [`game`] - Seat roster and dealer rotation
//! - [`engine`] - The round state machine
//! - [`logger`] - Round events, narration and JSONL round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_engine::cards::{Card, Rank, Suit};
//! use fivedraw_engine::rules::{rank_cards, Combination};
//!
//! let quads = [
//!     Card::new(Suit::Spades, Rank::King),
//!     Card::new(Suit::Diamonds, Rank::King),
//!     Card::new(Suit::Clubs, Rank::King),
//!     Card::new(Suit::Hearts, Rank::King),
//!     Card::new(Suit::Spades, Rank::Two),
//! ];
//! let full_house = [
//!     Card::new(Suit::Spades, Rank::Queen),
//!     Card::new(Suit::Diamonds, Rank::Queen),
//!     Card::new(Suit::Clubs, Rank::Queen),
//!     Card::new(Suit::Hearts, Rank::Five),
//!     Card::new(Suit::Spades, Rank::Five),
//! ];
//!
//! let a = rank_cards(&quads).unwrap();
//! let b = rank_cards(&full_house).unwrap();
//! assert_eq!(a.combination(), Combination::Quads);
//! assert!(a > b);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Passing the same seed to [`engine::Game::with_rules`] reproduces every shuffle,
//! so a game with deterministic decision providers replays identically.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
