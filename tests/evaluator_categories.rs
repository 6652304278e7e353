use holdem_equity::cards::{parse_cards, Card, Rank, Suit};
use holdem_equity::evaluator::{evaluate, evaluate_five, evaluate_seven, Category};
use holdem_equity::hand::HoleCards;

fn five(s: &str) -> [Card; 5] {
    parse_cards(s).expect("valid cards").try_into().expect("five cards")
}

fn seven(s: &str) -> [Card; 7] {
    parse_cards(s).expect("valid cards").try_into().expect("seven cards")
}

#[test]
fn category_royal_flush() {
    let xs = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category, Category::RoyalFlush);
    assert_eq!(e.tiebreak(), &[14]);
}

#[test]
fn category_straight_flush() {
    let e = evaluate_five(&five("9d 8d 7d 6d 5d"));
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[9]);
}

#[test]
fn category_four_of_a_kind() {
    let e = evaluate_five(&five("9c 9d 9h 9s Ac"));
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[9, 14]);
}

#[test]
fn category_full_house() {
    let e = evaluate_five(&five("3c 3d 3h Js Jc"));
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.tiebreak(), &[3, 11]);
}

#[test]
fn category_flush() {
    let e = evaluate_five(&five("Kh Th 8h 6h 3h"));
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.tiebreak(), &[13, 10, 8, 6, 3]);
}

#[test]
fn category_straight() {
    let e = evaluate_five(&five("Tc 9d 8h 7s 6c"));
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.tiebreak(), &[10]);
}

#[test]
fn category_three_of_a_kind() {
    let e = evaluate_five(&five("Qc Qd Qh Ts 2c"));
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.tiebreak(), &[12, 10, 2]);
}

#[test]
fn category_two_pair() {
    let e = evaluate_five(&five("Jc Jd 9c 9h 2s"));
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.tiebreak(), &[11, 9, 2]);
}

#[test]
fn category_pair() {
    let e = evaluate_five(&five("Ah Ad Ts 9c 2d"));
    assert_eq!(e.category, Category::OnePair);
    assert_eq!(e.tiebreak(), &[14, 10, 9, 2]);
}

#[test]
fn category_high_card() {
    let e = evaluate_five(&five("Ah Kd 7s 5c 2d"));
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.tiebreak(), &[14, 13, 7, 5, 2]);
}

#[test]
fn royal_on_board_with_any_hole() {
    let board = five("Ah Kh Qh Jh Th");
    for hole in ["2c 3d", "9h 8h", "As Ad"] {
        let hole: HoleCards = hole.parse().unwrap();
        let e = evaluate(&board, &hole);
        assert_eq!(e.category, Category::RoyalFlush, "{hole:?}");
        assert_eq!(e.tiebreak(), &[14]);
    }
}

#[test]
fn wheel_counts_five_high() {
    let e = evaluate_seven(&seven("5s 4s 3s 2s Ah Ad 9c"));
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.tiebreak(), &[5]);
}

#[test]
fn steel_wheel_is_a_five_high_straight_flush() {
    let e = evaluate_seven(&seven("5s 4s 3s 2s As Kd Kc"));
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[5]);
}

#[test]
fn quads_take_best_kicker_from_seven() {
    let e = evaluate_seven(&seven("Ks Kh Kd Kc 2h Qd Qc"));
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[13, 12]);
}

#[test]
fn straight_flush_beats_higher_flush_cards() {
    // Ah makes the better flush, but 9-high straight flush is the hand
    let e = evaluate_seven(&seven("Ah 9h 8h 7h 6h 5h 2c"));
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[9]);
}

#[test]
fn flush_beats_straight_in_same_seven() {
    let e = evaluate_seven(&seven("Jd 9d 8d 7c 6d 2d Tc"));
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.tiebreak(), &[11, 9, 8, 6, 2]);
}

#[test]
fn two_trips_make_a_full_house() {
    let e = evaluate_seven(&seven("Kh Kd Ks 7h 7d 7s 2h"));
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.tiebreak(), &[13, 7]);
}
