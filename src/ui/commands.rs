//! Text commands for the terminal front-end
//!
//! Each line becomes the same event a graphical board would send:
//!
//! | Input | Event |
//! |---|---|
//! | `e2` | click on e2 |
//! | `e2e4` / `e2 e4` | click e2 then e4 |
//! | `e7e8q` | as above, then promote to a queen |
//! | `promote q` / `q` | promotion choice |
//! | `resign`, `draw`, `accept`, `decline`, `new` | actions |
//! | `timer 5` / `timer off` | time control |
//! | `quit` | leave |

use crate::game::events::{ClientEvent, UserAction};
use chess_engine::{PieceType, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Events(Vec<ClientEvent>),
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    let action = |a: UserAction| Ok(Command::Events(vec![ClientEvent::Action(a)]));
    match words.as_slice() {
        [] => Ok(Command::Events(Vec::new())),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["resign"] => action(UserAction::Resign),
        ["draw"] => action(UserAction::OfferDraw),
        ["accept"] => action(UserAction::AcceptDraw),
        ["decline"] => action(UserAction::DeclineDraw),
        ["new"] => action(UserAction::NewGame),
        ["timer", "off"] => action(UserAction::ConfigureTimer {
            enabled: false,
            minutes: 10,
        }),
        ["timer", minutes] => {
            let minutes: u32 = minutes
                .parse()
                .map_err(|_| format!("Not a number of minutes: {minutes}"))?;
            action(UserAction::ConfigureTimer {
                enabled: true,
                minutes,
            })
        }
        ["promote", letter] | [letter @ ("q" | "r" | "b" | "n")] => {
            let piece_type = promotion_letter(letter)?;
            Ok(Command::Events(vec![ClientEvent::PromotionChoice(piece_type)]))
        }
        [from, to] => Ok(Command::Events(vec![click(from)?, click(to)?])),
        [word] => parse_compact(word),
        _ => Err(format!("Unknown command: {line}")),
    }
}

/// `e2`, `e2e4` or `e7e8q`
fn parse_compact(word: &str) -> Result<Command, String> {
    if !word.is_ascii() {
        return Err(format!("Unknown command: {word}"));
    }
    match word.len() {
        2 => Ok(Command::Events(vec![click(word)?])),
        4 => Ok(Command::Events(vec![click(&word[..2])?, click(&word[2..])?])),
        5 => {
            let promotion = promotion_letter(&word[4..])?;
            Ok(Command::Events(vec![
                click(&word[..2])?,
                click(&word[2..4])?,
                ClientEvent::PromotionChoice(promotion),
            ]))
        }
        _ => Err(format!("Unknown command: {word}")),
    }
}

fn click(name: &str) -> Result<ClientEvent, String> {
    let square = Square::from_algebraic(name).map_err(|e| e.to_string())?;
    Ok(ClientEvent::SquareClick {
        row: square.row(),
        col: square.col(),
    })
}

fn promotion_letter(letter: &str) -> Result<PieceType, String> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PieceType::from_letter(c.to_ascii_uppercase())
            .filter(|pt| pt.is_promotion_choice())
            .ok_or_else(|| format!("Cannot promote to {letter}")),
        _ => letter
            .parse::<PieceType>()
            .ok()
            .filter(|pt| pt.is_promotion_choice())
            .ok_or_else(|| format!("Cannot promote to {letter}")),
    }
}

pub const HELP: &str = "\
Commands:
  e2e4 | e2 e4     move (or click squares one at a time: e2, then e4)
  e7e8q            move and promote
  promote q        choose promotion piece (q, r, b, n)
  resign | draw    end the game
  accept | decline answer a draw offer
  new              start a new game
  timer 5 | off    set minutes per player before the first move
  quit             leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let expected = Command::Events(vec![
            ClientEvent::SquareClick { row: 6, col: 4 },
            ClientEvent::SquareClick { row: 4, col: 4 },
        ]);
        assert_eq!(parse_command("e2e4").unwrap(), expected);
        assert_eq!(parse_command("E2 E4").unwrap(), expected);
    }

    #[test]
    fn test_parse_promotion_move() {
        match parse_command("a7a8n").unwrap() {
            Command::Events(events) => {
                assert_eq!(events.len(), 3);
                assert_eq!(events[2], ClientEvent::PromotionChoice(PieceType::Knight));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            parse_command("promote queen").unwrap(),
            Command::Events(vec![ClientEvent::PromotionChoice(PieceType::Queen)])
        );
        assert!(parse_command("promote k").is_err());
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(
            parse_command("timer 5").unwrap(),
            Command::Events(vec![ClientEvent::Action(UserAction::ConfigureTimer {
                enabled: true,
                minutes: 5
            })])
        );
        assert!(parse_command("timer soon").is_err());
        assert!(parse_command("z9").is_err());
    }
}
