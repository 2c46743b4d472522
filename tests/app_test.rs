//! App wiring: input -> session -> effects -> collaborators

use crossterm::event::{KeyCode, KeyEvent};

use pink_blast::adapter::{load_high_score, CueLog, EffectDispatcher, JsonFileStore};
use pink_blast::core::{GameConfig, GameSession};
use pink_blast::input::InputHandler;
use pink_blast::types::{Mode, SoundCue};
use pink_blast::App;

fn key(c: char) -> KeyEvent {
    KeyEvent::from(KeyCode::Char(c))
}

fn temp_store(name: &str) -> std::path::PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pink-blast-app-{}-{}", std::process::id(), name));
    p.push("store.json");
    p
}

#[test]
fn app_places_with_keys_and_persists_high_score() {
    let path = temp_store("keys");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());

    let log = CueLog::new();
    let dispatcher = EffectDispatcher::spawn(
        Box::new(JsonFileStore::open(&path)),
        Box::new(log.clone()),
    );
    let session = GameSession::with_seed(GameConfig::default(), 42, 0).unwrap();
    let mut app = App::new(session, InputHandler::new(8), dispatcher);

    assert!(app.handle_key(key('1')));
    assert!(app.handle_key(KeyEvent::from(KeyCode::Enter)));
    assert!(app.session().score() > 0);
    assert_eq!(app.session().hand().len(), 2);

    app.dispatcher().flush();
    assert_eq!(
        &log.cues()[..3],
        &[SoundCue::GameStart, SoundCue::Pickup, SoundCue::Place]
    );

    let stored = JsonFileStore::open(&path);
    assert_eq!(load_high_score(&stored), app.session().score());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn app_rejected_placement_changes_nothing() {
    let log = CueLog::new();
    let dispatcher = EffectDispatcher::spawn(
        Box::new(pink_blast::adapter::MemoryStore::new()),
        Box::new(log.clone()),
    );
    let session = GameSession::with_seed(GameConfig::default(), 42, 0).unwrap();
    let mut app = App::new(session, InputHandler::new(8), dispatcher);

    // No selection yet.
    assert!(!app.handle_key(KeyEvent::from(KeyCode::Enter)));
    assert_eq!(app.session().score(), 0);
    assert!(app.snapshot().board.is_empty());
}

#[test]
fn app_cursor_and_mode_feed_the_view() {
    let dispatcher = EffectDispatcher::spawn(
        Box::new(pink_blast::adapter::MemoryStore::new()),
        Box::new(pink_blast::adapter::SilentAudio),
    );
    let session = GameSession::with_seed(GameConfig::default(), 1, 0).unwrap();
    let mut app = App::new(session, InputHandler::new(8), dispatcher);

    app.handle_key(KeyEvent::from(KeyCode::Down));
    app.handle_key(key('l'));
    app.handle_key(KeyEvent::from(KeyCode::Tab));
    let view = app.view_state();
    assert_eq!(view.cursor, (1, 1));
    assert_eq!(view.mode, Mode::Future);
}

#[test]
fn app_feedback_expires_after_timer() {
    use pink_blast::core::{Board, Piece, SequenceRng};
    use pink_blast::types::ShapeKind;

    let board = Board::parse(&[
        ".#######", "........", "........", "........", "........", "........", "........",
        ".......#",
    ])
    .unwrap();
    let hand = [ShapeKind::Single, ShapeKind::Single]
        .iter()
        .enumerate()
        .map(|(i, &k)| Piece::from_catalog(i as u64, k, 0))
        .collect();
    let session = GameSession::from_position(
        GameConfig::default(),
        SequenceRng::new(vec![0]),
        board,
        hand,
        Default::default(),
        0,
    )
    .unwrap();
    let dispatcher = EffectDispatcher::spawn(
        Box::new(pink_blast::adapter::MemoryStore::new()),
        Box::new(pink_blast::adapter::SilentAudio),
    );
    let mut app = App::new(session, InputHandler::new(8), dispatcher);

    app.handle_key(key('1'));
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    assert!(app.snapshot().feedback.is_some());

    app.tick(999);
    assert!(app.snapshot().feedback.is_some());
    app.tick(1);
    assert!(app.snapshot().feedback.is_none());
}
