//! Card, deck and player tests.

use std::collections::HashSet;

use twentyone::{
    BUST_LIMIT, Card, DECK_SIZE, DealError, Deck, EmptyDeckError, Player, PlayerStatus, Rank,
    ScoringRule, Suit, score_cards,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn player_with(rule: ScoringRule, cards: &[Card]) -> Player {
    let mut deck = Deck::from_draw_order(cards).unwrap();
    let mut player = Player::new(0, "Ada", rule);
    for _ in cards {
        player.draw(&mut deck).unwrap();
    }
    player
}

#[test]
fn card_display_names_rank_and_suit() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "Ten of Hearts");
    assert_eq!(card(Suit::Clubs, Rank::Queen).to_string(), "Queen of Clubs");
    assert_eq!(
        card(Suit::Diamonds, Rank::Seven).to_string(),
        "Seven of Diamonds"
    );
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Ace.high_value(), 14);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::King.high_value(), 13);
    assert_eq!(Rank::from_value(12), Some(Rank::Queen));
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(14), None);
    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank.value()), Some(rank));
    }
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle_seeded(42);
    second.shuffle_seeded(42);
    assert_eq!(first, second);

    let mut other = Deck::new();
    other.shuffle_seeded(43);
    assert_ne!(first, other);
    assert_ne!(first, Deck::new());
}

#[test]
fn drawing_every_card_empties_the_deck() {
    let mut deck = Deck::new();
    deck.shuffle_seeded(7);

    let mut drawn = HashSet::new();
    for remaining in (0..DECK_SIZE).rev() {
        let card = deck.draw().unwrap();
        assert!(drawn.insert(card));
        assert!(!deck.contains(&card));
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn stacked_deck_draws_in_order() {
    let draws = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Jack),
    ];
    let mut deck = Deck::from_draw_order(&draws).unwrap();

    for expected in draws {
        assert_eq!(deck.draw(), Ok(expected));
    }
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn player_draw_appends_and_rescores() {
    let mut deck = Deck::from_draw_order(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Queen),
    ])
    .unwrap();
    let mut player = Player::new(0, "Ada", ScoringRule::Standard);

    let first = player.draw(&mut deck).unwrap();
    assert_eq!(first, card(Suit::Hearts, Rank::Nine));
    assert_eq!(player.score(), 9);

    player.draw(&mut deck).unwrap();
    assert_eq!(player.score(), 19);
    assert_eq!(player.hand().len(), 2);
    assert!(player.is_active());

    assert_eq!(player.draw(&mut deck), Err(EmptyDeckError));
    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.score(), 19);
}

#[test]
fn crossing_twenty_one_busts_the_player() {
    let mut deck = Deck::from_draw_order(&[
        card(Suit::Spades, Rank::King),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Spades, Rank::Ace),
    ])
    .unwrap();
    let mut player = Player::new(3, "Brook", ScoringRule::Ordinal);
    player.draw(&mut deck).unwrap();
    player.draw(&mut deck).unwrap();
    assert_eq!(player.score(), BUST_LIMIT);
    assert!(!player.is_bust());
    assert_eq!(player.status(), PlayerStatus::Active);

    player.draw(&mut deck).unwrap();
    assert_eq!(player.score(), 22);
    assert!(player.is_bust());
    assert_eq!(player.status(), PlayerStatus::Bust);
}

#[test]
fn hold_is_idempotent_and_ignores_bust_players() {
    let mut player = Player::new(0, "Ada", ScoringRule::Standard);
    player.hold();
    assert!(player.is_held());
    player.hold();
    assert_eq!(player.status(), PlayerStatus::Held);

    let mut bust = player_with(
        ScoringRule::Ordinal,
        &[card(Suit::Hearts, Rank::King), card(Suit::Clubs, Rank::King)],
    );
    bust.hold();
    assert_eq!(bust.status(), PlayerStatus::Bust);
}

#[test]
fn held_player_stays_held_when_drawing() {
    let mut deck = Deck::from_draw_order(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Spades, Rank::Jack),
    ])
    .unwrap();
    let mut player = Player::new(0, "Ada", ScoringRule::Ordinal);
    player.draw(&mut deck).unwrap();
    player.hold();

    player.draw(&mut deck).unwrap();
    player.draw(&mut deck).unwrap();
    assert_eq!(player.score(), 36);
    assert_eq!(player.hand().len(), 3);
    assert_eq!(player.status(), PlayerStatus::Held);
    assert!(player.is_held());
}

#[test]
fn stacked_deck_rejects_repeats_and_oversized_draws() {
    let ace = card(Suit::Spades, Rank::Ace);
    assert_eq!(Deck::from_draw_order(&[ace; 60]), Err(DealError::InvalidDeck));
    assert_eq!(
        Deck::from_draw_order(&[ace, card(Suit::Hearts, Rank::Two), ace]),
        Err(DealError::InvalidDeck)
    );

    let mut oversized = Deck::new().cards().to_vec();
    assert_eq!(Deck::from_draw_order(&oversized).map(|d| d.len()), Ok(DECK_SIZE));
    oversized.push(ace);
    assert_eq!(Deck::from_draw_order(&oversized), Err(DealError::InvalidDeck));
    assert_eq!(Deck::from_draw_order(&[]).map(|d| d.is_empty()), Ok(true));
}

#[test]
fn reset_clears_the_round() {
    let mut player = player_with(
        ScoringRule::Ordinal,
        &[card(Suit::Hearts, Rank::King), card(Suit::Clubs, Rank::King)],
    );
    assert!(player.is_bust());

    player.reset();
    assert!(player.hand().is_empty());
    assert_eq!(player.score(), 0);
    assert!(player.is_active());
    assert_eq!(player.name(), "Ada");
}

#[test]
fn show_hand_lists_one_card_per_line() {
    assert_eq!(Player::new(0, "Ada", ScoringRule::Standard).show_hand(), "");

    let player = player_with(
        ScoringRule::Standard,
        &[card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Ten)],
    );
    assert_eq!(player.show_hand(), "Ace of Spades\nTen of Hearts");
}

#[test]
fn scoring_rules() {
    let ace = card(Suit::Spades, Rank::Ace);
    let king = card(Suit::Hearts, Rank::King);
    let queen = card(Suit::Clubs, Rank::Queen);
    let five = card(Suit::Diamonds, Rank::Five);

    assert_eq!(score_cards(&[], ScoringRule::Standard), 0);
    assert_eq!(score_cards(&[ace, king], ScoringRule::Standard), 21);
    assert_eq!(score_cards(&[ace, ace], ScoringRule::Standard), 12);
    assert_eq!(score_cards(&[ace, ace, king], ScoringRule::Standard), 12);
    assert_eq!(score_cards(&[king, queen, five], ScoringRule::Standard), 25);

    assert_eq!(score_cards(&[king, queen], ScoringRule::Ordinal), 25);
    assert_eq!(score_cards(&[ace, five], ScoringRule::Ordinal), 6);

    assert_eq!(score_cards(&[ace, king], ScoringRule::OrdinalAceHigh), 27);
    assert_eq!(score_cards(&[five, queen], ScoringRule::OrdinalAceHigh), 17);
}

#[test]
fn update_score_matches_score_cards() {
    let mut player = player_with(
        ScoringRule::OrdinalAceHigh,
        &[card(Suit::Spades, Rank::Ace), card(Suit::Spades, Rank::Two)],
    );
    player.update_score();
    assert_eq!(
        player.score(),
        score_cards(player.hand(), player.scoring())
    );
    assert_eq!(player.score(), 16);
}
