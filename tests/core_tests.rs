//! Integration tests for client setup and the terminal front-end
//!
//! Settings on disk decide how a fresh client starts; typed commands drive
//! it the same way board clicks would.

use chess_engine::Color;
use duelchess::core::settings::ClientSettings;
use duelchess::game::events::ClientEvent;
use duelchess::game::input::ClickOutcome;
use duelchess::game::RejectReason;
use duelchess::networking::SyncClient;
use duelchess::ui::commands::{parse_command, Command};
use duelchess::ui::view::{render_screen, status_text, timer_display};
use std::fs;
use std::path::PathBuf;

fn scratch_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("duelchess-it-{}", uuid::Uuid::new_v4()))
        .join("settings.json")
}

/// Feed one typed line to the client, returning the last click outcome
fn type_line(client: &mut SyncClient, line: &str) -> Option<ClickOutcome> {
    match parse_command(line).unwrap_or_else(|e| panic!("{line}: {e}")) {
        Command::Events(events) => {
            let mut last = None;
            for event in events {
                if let Some(outcome) = client.handle_event(event) {
                    last = Some(outcome);
                }
            }
            last
        }
        other => panic!("{line} is not a game command: {other:?}"),
    }
}

#[test]
fn test_saved_timer_preference_applies_to_new_client() {
    //! A timer saved in one session is live in the next
    let path = scratch_path();
    let saved = ClientSettings {
        player_name: "Ann".into(),
        timer_enabled: true,
        time_per_player_secs: 300,
        ..ClientSettings::default()
    };
    saved.save_to(&path).unwrap();

    let loaded = ClientSettings::load_from(&path);
    let client = SyncClient::new(&loaded);
    assert!(client.game().clock().enabled);
    assert_eq!(client.game().clock().remaining(Color::White), 300);
    assert_eq!(client.context().player_name, "Ann");
    assert_eq!(timer_display(client.game().clock()), "White: 5:00  Black: 5:00");

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_corrupt_settings_start_default_client() {
    let path = scratch_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "timer = yes").unwrap();

    let client = SyncClient::new(&ClientSettings::load_from(&path));
    assert!(!client.game().clock().enabled);
    assert_eq!(client.context().player_name, "Player");

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_typed_game_to_check() {
    let mut client = SyncClient::new(&ClientSettings::default());
    assert!(matches!(type_line(&mut client, "e2e4"), Some(ClickOutcome::Moved(_))));
    assert!(matches!(type_line(&mut client, "f7 f6"), Some(ClickOutcome::Moved(_))));
    assert!(matches!(type_line(&mut client, "d1h5"), Some(ClickOutcome::Moved(_))));

    assert!(client.game().in_check());
    assert_eq!(status_text(client.game()), "Black is in check!");
    let screen = render_screen(&client);
    assert!(screen.starts_with("Local Game Mode"));
    assert!(screen.contains("Black's Turn"));
    assert!(screen.contains("Last: 2. Qh5"));
}

#[test]
fn test_timer_locked_after_first_move() {
    let mut client = SyncClient::new(&ClientSettings::default());
    type_line(&mut client, "timer 3");
    assert_eq!(client.game().clock().remaining(Color::Black), 180);

    type_line(&mut client, "g1f3");
    type_line(&mut client, "timer 5");
    let notices: Vec<String> = client.drain_notices().into_iter().map(|n| n.text).collect();
    assert_eq!(
        notices,
        vec![RejectReason::TimerAfterStart.to_string()],
        "Time control cannot change mid-game"
    );
    assert_eq!(client.game().clock().remaining(Color::Black), 180);
}

#[test]
fn test_new_game_refused_mid_match() {
    let mut client = SyncClient::new(&ClientSettings::default());
    type_line(&mut client, "e2e4");
    type_line(&mut client, "new");
    assert_eq!(client.game().history().len(), 1);

    type_line(&mut client, "resign");
    type_line(&mut client, "new");
    assert!(client.game().history().is_empty());
    assert!(!client.game().is_over());
}

#[test]
fn test_stray_promotion_letter_is_harmless() {
    let mut client = SyncClient::new(&ClientSettings::default());
    let outcome = client.handle_event(ClientEvent::PromotionChoice(chess_engine::PieceType::Knight));
    assert_eq!(outcome, Some(ClickOutcome::Rejected(RejectReason::NoPromotionPending)));
    assert_eq!(parse_command("quit").unwrap(), Command::Quit);
}
