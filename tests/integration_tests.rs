// Integration tests for playerdle
// These tests drive whole rounds through the public API and the CLI front end

use playerdle::cli::CliInterface;
use playerdle::provider::{FileNameList, NoNameList, StaticNameList};
use playerdle::*;
use std::io::Cursor;
use std::sync::Arc;

fn play(pool: WordPool, input: &str) -> (RoundTally, String) {
    let mut controller = GameController::start_round(Arc::new(pool)).unwrap();
    let mut interface = CliInterface::with_writer(Cursor::new(input), Vec::new());
    let tally = game_loop(&mut controller, &mut interface);
    (tally, String::from_utf8(interface.into_writer()).unwrap())
}

#[test]
fn test_end_to_end_win() {
    // Single-name pool makes the secret known
    let pool = acquire(&StaticNameList("Bukayo Saka".to_string()));
    let (tally, output) = play(pool, "declan rice\nBUKAYO SAKA\nexit\n");

    assert_eq!(tally, RoundTally { won: 1, lost: 0, abandoned: 0 });
    assert!(output.contains("Round 1: guess the player (11 characters, 6 attempts)"));
    assert!(output.contains("5 attempts remaining"));
    assert!(output.contains("You got it in 2! The player was bukayo saka."));
    assert!(output.contains("🟩🟩🟩🟩🟩🟩🟩🟩🟩🟩🟩"));
}

#[test]
fn test_end_to_end_loss_reveals_secret() {
    let pool = WordPool::from_names(["saka"]);
    let input = "rice\nkane\nmata\npepe\ndier\nhart\nsaka\nexit\n";
    let (tally, output) = play(pool, input);

    assert_eq!(tally.lost, 1);
    assert_eq!(tally.won, 0);
    assert!(output.contains("Out of attempts. The player was saka."));
    // The seventh guess bounces off the finished round
    assert!(output.contains("round already finished, start a new one"));
}

#[test]
fn test_validation_messages_leave_round_intact() {
    let pool = WordPool::from_names(["saka"]);
    let (tally, output) = play(pool, "salah\nrice\nrice\nsaka\n");

    assert_eq!(tally.won, 1);
    assert!(output.contains("guess must be 4 characters long (got 5)"));
    assert!(output.contains("'rice' has already been guessed this round"));
    // Only rice and saka were recorded
    assert!(output.contains("You got it in 2!"));
}

#[test]
fn test_play_again_and_abandon() {
    let pool = WordPool::from_names(["saka"]);
    let (tally, output) = play(pool, "saka\nnext\nrice\nnext\nsaka\nexit\n");

    assert_eq!(tally, RoundTally { won: 2, lost: 0, abandoned: 1 });
    assert!(output.contains("Round 3:"));
    assert!(output.contains("Exiting. Won 2, lost 0, abandoned 1."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let pool = WordPool::from_names(["saka"]);
    let (tally, output) = play(pool, "rice\n");
    assert_eq!(tally.abandoned, 1);
    assert!(output.contains("Exiting."));
}

#[test]
fn test_provider_failure_falls_back_to_defaults() {
    let pool = acquire(&NoNameList);
    assert_eq!(pool.len(), 8);
    assert_eq!(pool.words(), DEFAULT_PLAYERS.map(String::from));

    let mut controller = GameController::with_seed(Arc::new(pool), 5).unwrap();
    let snapshot = controller.snapshot();
    assert!(
        DEFAULT_PLAYERS
            .iter()
            .any(|p| p.len() == snapshot.secret_length)
    );
    controller.new_round().unwrap();
    assert_eq!(controller.snapshot().state, RoundState::InProgress);
}

#[test]
fn test_custom_name_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("playerdle_integration_players.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Cole Palmer").unwrap();
        writeln!(file, "cole palmer").unwrap();
        writeln!(file, "Son Heung-min").unwrap();
    }

    let pool = acquire(&FileNameList::new(&path));
    assert_eq!(pool.words(), ["cole palmer"]);

    let (tally, _) = play(pool, "cole palmer\n");
    assert_eq!(tally.won, 1);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_repeated_letter_scoring_through_session() {
    let mut session = GameSession::new("sees");
    let feedback = session.submit("esse").unwrap();
    assert_eq!(feedback.count(Mark::Exact) + feedback.count(Mark::Present), 4);
    assert_eq!(feedback.count(Mark::Exact), 0);

    let feedback = session.submit("eeee").unwrap();
    assert_eq!(feedback.to_string(), "XGGX");
    assert_eq!(session.state(), RoundState::InProgress);
}

#[test]
fn test_scoring_properties_over_default_pool() {
    let pool = WordPool::default_players();
    for secret in pool.words() {
        assert!(evaluate(secret, secret).unwrap().is_all_exact());
        for guess in pool.words().iter().filter(|g| g.len() == secret.len()) {
            let feedback = evaluate(secret, guess).unwrap();
            assert_eq!(feedback.len(), secret.len());
            assert_eq!(feedback.is_all_exact(), guess == secret);
        }
        let disjoint: String = secret
            .chars()
            .map(|c| if c == ' ' { 'q' } else { 'z' })
            .collect();
        if !secret.contains('z') && !secret.contains('q') {
            assert_eq!(evaluate(secret, &disjoint).unwrap().count(Mark::Absent), secret.len());
        }
    }
}
