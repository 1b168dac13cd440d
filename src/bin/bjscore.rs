//! Two-card blackjack hand scorer.
use anyhow::{Context, Result};
use bjhand::{ACE_BONUS, BUST_LIMIT, Card, ScoreRules, TwoCardHand};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Score a two-card blackjack hand")]
struct Cli {
    /// The first card name (A, 2-10, J, Q, K).
    card_1: String,
    /// The second card name (A, 2-10, J, Q, K).
    card_2: String,
    /// Highest score that is not a bust.
    #[clap(long, default_value_t = BUST_LIMIT)]
    bust_limit: u8,
    /// Bonus for a hand holding an ace, 0 to disable.
    #[clap(long, default_value_t = ACE_BONUS)]
    ace_bonus: u8,
}

impl Cli {
    fn rules(&self) -> ScoreRules {
        ScoreRules::default()
            .with_bust_limit(self.bust_limit)
            .with_ace_bonus(self.ace_bonus)
    }

    fn hand(&self) -> Result<TwoCardHand> {
        let parse = |name: &str| {
            Card::parse(name).with_context(|| format!("cannot score card {name:?}"))
        };
        Ok(TwoCardHand::new(parse(&self.card_1)?, parse(&self.card_2)?))
    }
}

fn describe(hand: &TwoCardHand, rules: &ScoreRules) -> String {
    let [first, second] = hand.cards();
    let mut line = format!("{first} + {second} = {}", hand.score_with(rules));
    if *rules == ScoreRules::default() && hand.is_blackjack() {
        line.push_str(" (blackjack)");
    } else if hand.is_soft_with(rules) {
        line.push_str(" (soft)");
    }
    if hand.is_bust_with(rules) {
        line.push_str(" bust");
    }
    line
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let rules = cli.rules();
    let hand = cli.hand()?;
    println!("{}", describe(&hand, &rules));
    Ok(())
}
