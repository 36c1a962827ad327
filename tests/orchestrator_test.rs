//! Tests for the console driver with scripted input.

use minimax_tictactoe::console::{ConsoleEvent, HumanController, MinimaxController, Orchestrator};
use minimax_tictactoe::{GameConfig, GameEvent, Move, Player, Position};
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs a session fed `lines` and returns the orchestrator with every
/// event it produced.
async fn run_script(config: GameConfig, lines: &[&str]) -> (Orchestrator, Vec<ConsoleEvent>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    for line in lines {
        input_tx.send(line.to_string()).unwrap();
    }
    drop(input_tx);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let human = Box::new(HumanController::new("Tester", input_rx));
    let computer = Box::new(MinimaxController::new("Computer", Duration::ZERO));
    let mut orchestrator = Orchestrator::new(config.new_session(), human, computer, event_tx);

    orchestrator.run().await.unwrap();

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    (orchestrator, events)
}

fn rejections(events: &[ConsoleEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            ConsoleEvent::Rejected(reason) => Some(reason.as_str()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_computer_replies_after_human_move() {
    let (orchestrator, events) = run_script(GameConfig::default(), &["5", "quit"]).await;

    assert_eq!(
        orchestrator.session().history(),
        &[
            Move::new(Player::Human, Position::Center),
            Move::new(Player::Computer, Position::TopLeft)
        ]
    );
    assert!(events.contains(&ConsoleEvent::Thinking));
    assert!(matches!(events.last(), Some(ConsoleEvent::Farewell(_))));
}

#[tokio::test]
async fn test_human_cannot_beat_computer() {
    let mut lines = Vec::new();
    for _ in 0..5 {
        lines.extend(["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }
    lines.push("quit");

    let (orchestrator, events) = run_script(GameConfig::default(), &lines).await;
    let scores = orchestrator.session().scoreboard();

    assert_eq!(scores.games_played(), 1);
    assert_eq!(*scores.human_wins(), 0);
    assert!(events.iter().any(|e| matches!(e, ConsoleEvent::GameOver(_))));
}

#[tokio::test]
async fn test_undo_takes_back_both_moves() {
    let (orchestrator, events) = run_script(GameConfig::default(), &["5", "undo", "quit"]).await;

    assert!(orchestrator.session().history().is_empty());
    assert_eq!(orchestrator.session().to_move(), Player::Human);
    assert!(events.contains(&ConsoleEvent::Game(GameEvent::MoveUndone(Move::new(
        Player::Human,
        Position::Center
    )))));
}

#[tokio::test]
async fn test_bad_input_rejected() {
    let (orchestrator, events) =
        run_script(GameConfig::default(), &["banana", "5", "5", "undo", "undo", "quit"]).await;

    let rejected = rejections(&events);
    assert_eq!(rejected.len(), 3);
    assert!(rejected[0].contains("banana"));
    assert!(orchestrator.session().history().is_empty());
}

#[tokio::test]
async fn test_computer_opens_when_configured() {
    let config = GameConfig::default().with_first_player(Player::Computer);
    let (orchestrator, _) = run_script(config, &["quit"]).await;

    assert_eq!(
        orchestrator.session().history(),
        &[Move::new(Player::Computer, Position::TopLeft)]
    );
    assert_eq!(orchestrator.session().to_move(), Player::Human);
}

#[tokio::test]
async fn test_restart_alternates_opener() {
    let (orchestrator, events) =
        run_script(GameConfig::default(), &["5", "restart", "quit"]).await;

    assert!(events.contains(&ConsoleEvent::Game(GameEvent::Reset {
        starting_player: Player::Computer
    })));
    assert_eq!(orchestrator.session().state().starting_player(), Player::Computer);
    assert_eq!(
        orchestrator.session().history(),
        &[Move::new(Player::Computer, Position::TopLeft)]
    );
}

#[tokio::test]
async fn test_closed_input_quits() {
    let (orchestrator, events) = run_script(GameConfig::default(), &[]).await;

    assert!(orchestrator.session().history().is_empty());
    assert!(matches!(events.last(), Some(ConsoleEvent::Farewell(_))));
}
