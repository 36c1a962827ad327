//! Tests for managing many independent sessions.

use minimax_tictactoe::{GameConfig, Player, SessionError, SessionManager};
use std::thread;

#[test]
fn test_create_and_list_sessions() {
    let manager = SessionManager::new();
    manager.create_session("b".to_string(), &GameConfig::default()).unwrap();
    manager.create_session("a".to_string(), &GameConfig::default()).unwrap();

    assert_eq!(manager.list_sessions().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_duplicate_session_rejected() {
    let manager = SessionManager::new();
    manager.create_session("game".to_string(), &GameConfig::default()).unwrap();

    assert_eq!(
        manager.create_session("game".to_string(), &GameConfig::default()),
        Err(SessionError::AlreadyExists("game".to_string()))
    );
}

#[test]
fn test_unknown_session() {
    let manager = SessionManager::new();
    let result = manager.with_session("missing", |session| session.to_move());
    assert_eq!(result, Err(SessionError::NotFound("missing".to_string())));
}

#[test]
fn test_sessions_are_independent() {
    let manager = SessionManager::new();
    manager.create_session("one".to_string(), &GameConfig::default()).unwrap();
    let computer_first = GameConfig::default().with_first_player(Player::Computer);
    manager.create_session("two".to_string(), &computer_first).unwrap();

    manager
        .with_session("one", |session| session.apply_move(4, Player::Human))
        .unwrap()
        .unwrap();

    let (len, to_move) = manager
        .with_session("two", |session| (session.history().len(), session.to_move()))
        .unwrap();
    assert_eq!(len, 0);
    assert_eq!(to_move, Player::Computer);
}

#[test]
fn test_remove_session() {
    let manager = SessionManager::new();
    manager.create_session("game".to_string(), &GameConfig::default()).unwrap();

    assert!(manager.remove_session("game").unwrap());
    assert!(!manager.remove_session("game").unwrap());
    assert!(manager.list_sessions().unwrap().is_empty());
}

#[test]
fn test_concurrent_sessions() {
    let manager = SessionManager::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = manager.clone();
            thread::spawn(move || {
                let id = format!("game-{}", i);
                manager.create_session(id.clone(), &GameConfig::default()).unwrap();
                manager
                    .with_session(&id, |session| {
                        session.apply_move(i, Player::Human).unwrap();
                        session.swap_turn();
                        session.history().len()
                    })
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
    assert_eq!(manager.list_sessions().unwrap().len(), 8);
}

#[test]
fn test_concurrent_access_to_one_session_is_serialized() {
    let manager = SessionManager::new();
    manager.create_session("shared".to_string(), &GameConfig::default()).unwrap();

    let handles: Vec<_> = (0..9)
        .map(|cell| {
            let manager = manager.clone();
            thread::spawn(move || {
                manager
                    .with_session("shared", |session| {
                        let player = session.to_move();
                        let placed = session.apply_move(cell, player).is_ok();
                        if placed {
                            session.swap_turn();
                        }
                        placed
                    })
                    .unwrap()
            })
        })
        .collect();

    let placed = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|placed| *placed)
        .count();

    let (len, occupied) = manager
        .with_session("shared", |session| {
            (session.history().len(), session.board().occupied())
        })
        .unwrap();
    assert_eq!(len, placed);
    assert_eq!(occupied, placed);
}
