//! Card classification and hand scoring tests.

use bjhand::{
    CARD_NAMES, Card, CardError, Category, TwoCardHand, card_points, classify, is_ace, is_bust,
    is_card_name, is_face_card, is_number_card, two_card_hand_score,
};

const NOT_CARDS: [&str; 8] = ["", " ", "1", "apple", "a", "k", " A", "11"];

const NUMBERS: [&str; 9] = ["2", "3", "4", "5", "6", "7", "8", "9", "10"];

#[test]
fn ace_classification() {
    assert!(is_ace("A"));
    for name in CARD_NAMES.iter().filter(|n| **n != "A") {
        assert!(!is_ace(name), "{name}");
    }
    for name in NOT_CARDS {
        assert!(!is_ace(name), "{name:?}");
    }
}

#[test]
fn face_card_classification() {
    for name in ["J", "Q", "K"] {
        assert!(is_face_card(name));
    }
    assert!(!is_face_card("A"));
    for name in NUMBERS {
        assert!(!is_face_card(name), "{name}");
    }
    for name in NOT_CARDS {
        assert!(!is_face_card(name), "{name:?}");
    }
}

#[test]
fn number_card_classification() {
    for name in NUMBERS {
        assert!(is_number_card(name), "{name}");
    }
    for name in ["A", "J", "Q", "K"] {
        assert!(!is_number_card(name));
    }
    for name in NOT_CARDS {
        assert!(!is_number_card(name), "{name:?}");
    }
}

#[test]
fn card_name_set_is_closed() {
    for name in CARD_NAMES {
        assert!(is_card_name(name));
    }
    for name in NOT_CARDS {
        assert!(!is_card_name(name), "{name:?}");
        assert_eq!(classify(name), Category::Invalid);
        assert_eq!(name.parse::<Card>(), Err(CardError::InvalidName));
    }
}

#[test]
fn card_points_values() {
    assert_eq!(card_points("A"), Ok(1));
    for name in ["J", "Q", "K"] {
        assert_eq!(card_points(name), Ok(10));
    }
    for (value, name) in (2..=10).zip(NUMBERS) {
        assert_eq!(card_points(name), Ok(value));
    }
    assert_eq!(card_points("apple"), Err(CardError::InvalidName));
}

#[test]
fn card_accessors() {
    let ten: Card = "10".parse().unwrap();
    assert_eq!(ten.name(), "10");
    assert_eq!(ten.category(), Category::Number);
    assert_eq!(ten.points(), 10);
    assert!(!ten.is_ace());
    assert_eq!(ten.to_string(), "10");

    let names: Vec<&str> = Card::all().map(Card::name).collect();
    assert_eq!(names, CARD_NAMES);
}

#[test]
fn bust_boundary() {
    for score in 0..=21 {
        assert!(!is_bust(score), "{score}");
    }
    for score in 22..=30 {
        assert!(is_bust(score), "{score}");
    }
    assert!(!is_bust(-5));
}

#[test]
fn hand_score_without_ace_is_sum() {
    for first in CARD_NAMES.iter().filter(|n| **n != "A") {
        for second in CARD_NAMES.iter().filter(|n| **n != "A") {
            let expected = card_points(first).unwrap() + card_points(second).unwrap();
            assert_eq!(two_card_hand_score(first, second), Ok(expected));
        }
    }
    assert_eq!(two_card_hand_score("2", "2"), Ok(4));
    assert_eq!(two_card_hand_score("10", "J"), Ok(20));
    assert_eq!(two_card_hand_score("K", "Q"), Ok(20));
}

#[test]
fn hand_score_with_one_ace_gets_bonus() {
    assert_eq!(two_card_hand_score("A", "2"), Ok(13));
    assert_eq!(two_card_hand_score("9", "A"), Ok(20));
    assert_eq!(two_card_hand_score("A", "10"), Ok(21));
    for face in ["J", "Q", "K"] {
        assert_eq!(two_card_hand_score("A", face), Ok(21));
        assert_eq!(two_card_hand_score(face, "A"), Ok(21));
    }
}

#[test]
fn two_aces_get_a_single_bonus() {
    assert_eq!(two_card_hand_score("A", "A"), Ok(12));
    let hand = TwoCardHand::parse("A", "A").unwrap();
    assert!(hand.is_soft());
    assert!(!hand.is_blackjack());
}

#[test]
fn two_cards_never_bust() {
    for first in CARD_NAMES {
        for second in CARD_NAMES {
            let score = two_card_hand_score(first, second).unwrap();
            assert!((2..=21).contains(&score), "{first} {second}");
            assert!(!is_bust(score.into()));
        }
    }
}

#[test]
fn hand_score_rejects_invalid_names() {
    assert_eq!(two_card_hand_score("A", "1"), Err(CardError::InvalidName));
    assert_eq!(two_card_hand_score("", "K"), Err(CardError::InvalidName));
    assert_eq!(CardError::InvalidName.to_string(), "invalid card name");
}
