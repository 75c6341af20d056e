//! Integration tests - keys through the session to the rendered frame

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_blockfall::core::{Engine, MoveOutcome, SequenceRng};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{GameView, PlayStatus, Viewport};
use tui_blockfall::types::{Cell, GameAction, GRAVITY_MS};
use tui_blockfall::{Session, SessionLog};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn bar_session() -> Session<SequenceRng> {
    Session::new(
        Engine::new(SequenceRng::constant(2)),
        GRAVITY_MS,
        SessionLog::disabled(),
    )
}

fn press(session: &mut Session<SequenceRng>, code: KeyCode) -> Option<MoveOutcome> {
    let action = handle_key_event(key(code))?;
    session.apply_action(action)
}

#[test]
fn test_arrow_keys_move_the_piece() {
    let mut session = bar_session();

    assert_eq!(press(&mut session, KeyCode::Left), Some(MoveOutcome::Moved));
    assert_eq!(press(&mut session, KeyCode::Char('h')), Some(MoveOutcome::Moved));
    assert_eq!(session.engine().active().unwrap().x, 3);

    assert_eq!(press(&mut session, KeyCode::Down), Some(MoveOutcome::Moved));
    assert_eq!(session.engine().active().unwrap().y, 1);

    assert_eq!(press(&mut session, KeyCode::Up), Some(MoveOutcome::Moved));
    assert_eq!(session.engine().active().unwrap().shape.rows(), 4);
}

#[test]
fn test_gravity_and_soft_drop_share_one_stream() {
    let mut session = bar_session();
    for _ in 0..10 {
        press(&mut session, KeyCode::Down);
    }
    assert_eq!(session.tick(GRAVITY_MS * 9), 9);
    assert_eq!(session.engine().active().unwrap().y, 19);

    // Next drop from either source locks.
    session.tick(GRAVITY_MS);
    assert_eq!(session.engine().pieces_locked(), 1);
    assert_eq!(session.engine().board().count(Cell::Locked), 4);
    assert_eq!(session.engine().active().unwrap().y, 0);
}

#[test]
fn test_pause_key_freezes_play() {
    let mut session = bar_session();
    press(&mut session, KeyCode::Char('p'));
    assert!(session.is_paused());

    assert_eq!(session.tick(GRAVITY_MS * 4), 0);
    assert_eq!(press(&mut session, KeyCode::Right), None);
    assert_eq!(session.engine().active().unwrap().x, 5);
    assert_eq!(session.engine().active().unwrap().y, 0);

    press(&mut session, KeyCode::Char('p'));
    assert!(!session.is_paused());
    assert_eq!(session.tick(GRAVITY_MS), 1);
}

#[test]
fn test_quit_keys_are_not_actions() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        assert!(should_quit(key(code)));
        assert_eq!(handle_key_event(key(code)), None);
    }
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
    assert_eq!(handle_key_event(ctrl_c), None);
}

#[test]
fn test_game_over_then_restart() {
    let mut session = bar_session();
    // Stack bars in the spawn columns until the next one cannot appear.
    let mut guard = 0;
    while session.status() != PlayStatus::GameOver {
        session.tick(GRAVITY_MS * 20);
        guard += 1;
        assert!(guard < 50, "stack never reached the top");
    }
    assert_eq!(session.engine().board().count(Cell::Falling), 0);
    assert_eq!(press(&mut session, KeyCode::Left), Some(MoveOutcome::Inactive));

    // Pause is ignored once the game is over.
    press(&mut session, KeyCode::Char('p'));
    assert_eq!(session.status(), PlayStatus::GameOver);

    press(&mut session, KeyCode::Char('r'));
    assert_eq!(session.status(), PlayStatus::Playing);
    assert_eq!(session.engine().board().count(Cell::Locked), 0);
    assert_eq!(session.engine().board().count(Cell::Falling), 4);
}

#[test]
fn test_session_frame_reflects_board() {
    let mut session = bar_session();
    press(&mut session, KeyCode::Char('p'));

    let view = GameView::default();
    let fb = view.render(
        session.engine().board(),
        session.status(),
        Viewport::new(22, 22),
    );
    assert!(fb.row_text(1).contains("████████"));
    assert!(fb.row_text(11).contains("PAUSED"));
}

#[test]
fn test_action_names_round_trip_through_keys() {
    let cases = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Up, GameAction::Rotate),
        (KeyCode::Char('p'), GameAction::Pause),
        (KeyCode::Char('r'), GameAction::Restart),
    ];
    for (code, action) in cases {
        assert_eq!(handle_key_event(key(code)), Some(action));
        assert_eq!(GameAction::from_str(action.as_str()), Some(action));
    }
}
