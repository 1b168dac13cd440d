//! Blackjack card-name classification and two-card hand scoring, with
//! optional `no_std` support.
//!
//! Card names are the rank tokens "A", "2" through "10", "J", "Q" and "K".
//! The crate classifies them, gives their point values and scores a hand of
//! two cards, including the ace bonus.
//!
//! # Example
//!
//! ```
//! use bjhand::{is_bust, is_card_name, two_card_hand_score};
//!
//! assert!(is_card_name("Q"));
//! let score = two_card_hand_score("A", "7").unwrap();
//! assert_eq!(score, 18);
//! assert!(!is_bust(score.into()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{
    CARD_COUNT, CARD_NAMES, Card, Category, card_points, classify, is_ace, is_card_name,
    is_face_card, is_number_card,
};
pub use error::CardError;
pub use hand::{TwoCardHand, is_bust, two_card_hand_score};
pub use options::{ACE_BONUS, BUST_LIMIT, ScoreRules};
