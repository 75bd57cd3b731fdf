//! Session tests with scripted input and a recording screen.

use std::collections::VecDeque;

use headsup::{
    Card, DECK_SIZE, Deck, Game, GameOptions, GameState, HIDDEN_CARD, Input, Notice, Outcome, Rank,
    Screen, Session, Suit, Table,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Shown {
    Table(String),
    Notice(String),
}

#[derive(Debug, Default)]
struct Recorder {
    shown: Vec<Shown>,
}

impl Recorder {
    fn notices(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|shown| match shown {
                Shown::Notice(text) => Some(text.as_str()),
                Shown::Table(_) => None,
            })
            .collect()
    }

    fn tables(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|shown| match shown {
                Shown::Table(text) => Some(text.as_str()),
                Shown::Notice(_) => None,
            })
            .collect()
    }
}

impl Screen for Recorder {
    fn show_table(&mut self, table: &Table<'_>) {
        self.shown.push(Shown::Table(table.to_string()));
    }

    fn notify(&mut self, notice: &Notice<'_>) {
        self.shown.push(Shown::Notice(notice.to_string()));
    }
}

struct Script(VecDeque<String>);

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|line| (*line).to_string()).collect())
    }
}

impl Input for Script {
    fn read_line(&mut self) -> Option<String> {
        self.0.pop_front()
    }
}

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn options() -> GameOptions {
    GameOptions::default().with_clear_screen(false)
}

fn stacked_game(draws: &[Card]) -> Game {
    let mut game = Game::new("Ada", options(), 1);
    game.replace_deck(Deck::stacked(draws).unwrap()).unwrap();
    game
}

fn session(lines: &[&str]) -> Session<Script, Recorder> {
    Session::new(Script::new(lines), Recorder::default(), options(), 1)
}

#[test]
fn invalid_commands_reprompt_without_dealing() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    let mut session = session(&["double", "Hit", "  STAND ", "stand", "no"]);

    assert_eq!(session.play(&mut game).unwrap(), 1);

    // Player 10+2, hit 7 = 19. Dealer 6+5, draws 9 = 20.
    assert_eq!(game.player().hand().value(), 19);
    assert_eq!(game.dealer().hand().value(), 20);
    assert_eq!(game.cards_remaining(), 0);

    assert_eq!(
        session.screen().notices(),
        [
            "Let's Play Blackjack!",
            "Would you like to (hit) or (stand)?",
            "Please enter a valid input of 'hit' or 'stand'",
            "Would you like to (hit) or (stand)?",
            "Would you like to (hit) or (stand)?",
            "Please enter a valid input of 'hit' or 'stand'",
            "Would you like to (hit) or (stand)?",
            "Ada stands.",
            "Dealer stands.",
            "Dealer wins.",
            "Would you like to play again?  Enter 'yes' to continue.",
            "Goodbye.",
        ]
    );
}

#[test]
fn table_is_rendered_after_every_opening_card() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
    ]);
    let mut session = session(&["stand", "no"]);

    session.play(&mut game).unwrap();

    let tables = session.screen().tables();
    // Empty table, four opening cards, after the stand, after the dealer.
    assert_eq!(tables.len(), 7);
    assert!(!tables[3].contains(HIDDEN_CARD));
    assert!(tables[4].contains(HIDDEN_CARD));
    assert!(tables[6].contains("**Ada is standing**"));
    assert!(session.screen().notices().contains(&"Ada wins!!"));
}

#[test]
fn natural_ends_round_without_prompting_for_action() {
    let mut game = stacked_game(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    ]);
    let mut session = session(&["nah"]);

    assert_eq!(session.play(&mut game).unwrap(), 1);

    let notices = session.screen().notices();
    assert!(!notices.contains(&"Would you like to (hit) or (stand)?"));
    assert!(notices.contains(&"Ada wins with Blackjack!"));
    assert_eq!(game.state(), GameState::Done);

    let last_table = *session.screen().tables().last().unwrap();
    assert!(last_table.contains("7 of Hearts"));
}

#[test]
fn player_bust_is_announced_and_dealer_never_plays() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Six, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
    ]);
    let mut session = session(&["hit", "no"]);

    session.play(&mut game).unwrap();

    let notices = session.screen().notices();
    assert!(notices.contains(&"Ada busts.  Dealer wins."));
    assert!(!notices.contains(&"Dealer stands."));
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn dealer_bust_is_announced() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
    ]);
    let mut session = session(&["stand", "no"]);

    session.play(&mut game).unwrap();

    assert!(
        session
            .screen()
            .notices()
            .contains(&"Dealer busts.  Ada wins!!")
    );
}

#[test]
fn yes_in_any_case_starts_another_round() {
    let mut game = stacked_game(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
    ]);
    let mut session = session(&["YeS", "stand", "no"]);

    let first = session.play_round(&mut game).unwrap().unwrap();
    assert_eq!(first.outcome, Outcome::BothBlackjack);

    assert!(session.offer_replay(&mut game));
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), DECK_SIZE);

    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
    ])
    .unwrap();
    game.replace_deck(deck).unwrap();

    let second = session.play_round(&mut game).unwrap().unwrap();
    assert_eq!(second.outcome, Outcome::PlayerWins);
    assert!(!session.offer_replay(&mut game));

    assert_eq!(
        session.screen().notices(),
        [
            "Let's Play Blackjack!",
            "Both have Blackjack.  Push.",
            "Would you like to play again?  Enter 'yes' to continue.",
            "Let's Play Blackjack!",
            "Would you like to (hit) or (stand)?",
            "Ada stands.",
            "Dealer stands.",
            "Ada wins!!",
            "Would you like to play again?  Enter 'yes' to continue.",
        ]
    );
}

#[test]
fn replay_answer_is_not_trimmed() {
    let mut game = stacked_game(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
    ]);
    let mut session = session(&[" yes"]);

    assert_eq!(session.play(&mut game).unwrap(), 1);

    let notices = session.screen().notices();
    assert_eq!(
        notices
            .iter()
            .filter(|notice| **notice == "Let's Play Blackjack!")
            .count(),
        1
    );
    assert_eq!(notices.last(), Some(&"Goodbye."));
    assert_eq!(game.state(), GameState::Done);
}

#[test]
fn empty_names_are_rejected() {
    let mut session = session(&["", "", " "]);

    session.run().unwrap();

    let notices = session.screen().notices();
    assert_eq!(
        &notices[..4],
        [
            "Please enter your name:",
            "Please enter your name:",
            "Please enter your name:",
            "Let's Play Blackjack!",
        ]
    );
    assert_eq!(notices.last(), Some(&"Goodbye."));
    assert!(
        session
            .screen()
            .tables()
            .iter()
            .all(|table| table.contains(" 's Hand:"))
    );
}

#[test]
fn closed_input_at_name_prompt_ends_quietly() {
    let mut session = session(&[]);

    assert_eq!(session.run().unwrap(), 0);
    assert_eq!(
        session.screen().notices(),
        ["Please enter your name:", "Goodbye."]
    );
    assert!(session.screen().tables().is_empty());
}
