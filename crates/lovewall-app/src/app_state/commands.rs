//! Terminal command parsing.

use std::path::PathBuf;

use lovewall_common::{ItemId, UserId};
use lovewall_social::{GeoPosition, GeoReading};
use lovewall_wall::{DragKind, Pointer, Viewport};

pub(super) const HELP: &str = "\
Commands:
  join [id]                  enter the lobby
  lobby                      list members and the waitlist
  pair <id>                  share the wall with a member
  wait <id> / unwait <id>    add or remove a member on the waitlist
  leave                      back to the lobby
  note [text]                post a note (no text posts the suggestion)
  suggest <mood>             ask for a note suggestion
  photo <prompt>             generate a photo
  upload <path>              add a local photo or video
  sticker [emoji]            add a sticker
  grab <note|photo|video> <id>
  move <x> <y> [<w> <h>]     drag the grabbed item (pointer in pixels)
  release                    drop the grabbed item
  record start|stop          voice note
  geo <lat> <lng>            report a position
  geo-error <message>        report a position error
  partner-geo <lat> <lng>    push the partner's position (external source)
  wall                       show the wall
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Command {
    Join(Option<UserId>),
    Lobby,
    Pair(UserId),
    Wait(UserId),
    Unwait(UserId),
    Leave,
    Note(Option<String>),
    Suggest(String),
    Photo(String),
    Upload(PathBuf),
    Sticker(Option<String>),
    Grab(DragKind, ItemId),
    Move { pointer: Pointer, viewport: Viewport },
    Release,
    RecordStart,
    RecordStop,
    Geo(GeoReading),
    PartnerGeo(GeoPosition),
    Wall,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(super) enum ParseError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub(super) fn parse(line: &str) -> Option<Result<Self, ParseError>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        Some(parse_words(&word.to_ascii_lowercase(), rest))
    }
}

fn parse_words(word: &str, rest: &str) -> Result<Command, ParseError> {
    let args: Vec<&str> = rest.split_whitespace().collect();
    let text = (!rest.is_empty()).then(|| rest.to_string());

    let command = match word {
        "join" => Command::Join(args.first().map(|id| UserId::from(*id))),
        "lobby" => Command::Lobby,
        "pair" => Command::Pair(single_id(&args, "pair <id>")?),
        "wait" => Command::Wait(single_id(&args, "wait <id>")?),
        "unwait" => Command::Unwait(single_id(&args, "unwait <id>")?),
        "leave" => Command::Leave,
        "note" => Command::Note(text),
        "suggest" => Command::Suggest(rest.to_string()),
        "photo" => Command::Photo(text.ok_or(ParseError::Usage("photo <prompt>"))?),
        "upload" => Command::Upload(PathBuf::from(
            text.ok_or(ParseError::Usage("upload <path>"))?,
        )),
        "sticker" => Command::Sticker(args.first().map(|e| e.to_string())),
        "grab" => {
            const USAGE: &str = "grab <note|photo|video> <id>";
            let [kind, id] = args[..] else {
                return Err(ParseError::Usage(USAGE));
            };
            let kind = match kind.to_ascii_lowercase().as_str() {
                "note" => DragKind::Note,
                "photo" => DragKind::Photo,
                "video" => DragKind::Video,
                _ => return Err(ParseError::Usage(USAGE)),
            };
            Command::Grab(kind, ItemId::from(id))
        }
        "move" => {
            const USAGE: &str = "move <x> <y> [<width> <height>]";
            let numbers = numbers(&args).ok_or(ParseError::Usage(USAGE))?;
            let (pointer, viewport) = match numbers[..] {
                [x, y] => (point(x, y), Viewport::default()),
                [x, y, w, h] => (point(x, y), Viewport::new(w, h)),
                _ => return Err(ParseError::Usage(USAGE)),
            };
            Command::Move { pointer, viewport }
        }
        "release" => Command::Release,
        "record" => match args[..] {
            ["start"] => Command::RecordStart,
            ["stop"] => Command::RecordStop,
            _ => return Err(ParseError::Usage("record start|stop")),
        },
        "geo" => Command::Geo(GeoReading::Fix(position(&args, "geo <lat> <lng>")?)),
        "partner-geo" => Command::PartnerGeo(position(&args, "partner-geo <lat> <lng>")?),
        "geo-error" => Command::Geo(GeoReading::Error(
            text.unwrap_or_else(|| "position unavailable".to_string()),
        )),
        "wall" => Command::Wall,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn single_id(args: &[&str], usage: &'static str) -> Result<UserId, ParseError> {
    match args {
        [id] => Ok(UserId::from(*id)),
        _ => Err(ParseError::Usage(usage)),
    }
}

/// Parse every argument as a finite number.
fn numbers(args: &[&str]) -> Option<Vec<f64>> {
    args.iter()
        .map(|a| a.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

fn position(args: &[&str], usage: &'static str) -> Result<GeoPosition, ParseError> {
    match numbers(args).as_deref() {
        Some(&[lat, lng]) => Ok(GeoPosition::new(lat, lng)),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn point(client_x: f64, client_y: f64) -> Pointer {
    Pointer { client_x, client_y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        Command::parse(line).expect("non-blank line")
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(Command::parse("").is_none());
        assert!(Command::parse("   \t").is_none());
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse("join").unwrap(), Command::Join(None));
        assert_eq!(
            parse("join u3").unwrap(),
            Command::Join(Some(UserId::from("u3")))
        );
        assert_eq!(parse("PAIR u2").unwrap(), Command::Pair(UserId::from("u2")));
        assert_eq!(parse("pair").unwrap_err(), ParseError::Usage("pair <id>"));
        assert_eq!(parse("leave").unwrap(), Command::Leave);
        assert_eq!(parse("wait u4").unwrap(), Command::Wait(UserId::from("u4")));
    }

    #[test]
    fn note_keeps_text_verbatim() {
        assert_eq!(
            parse("note  Miss you  already ").unwrap(),
            Command::Note(Some("Miss you  already".into()))
        );
        assert_eq!(parse("note").unwrap(), Command::Note(None));
    }

    #[test]
    fn photo_requires_prompt() {
        assert_eq!(
            parse("photo").unwrap_err(),
            ParseError::Usage("photo <prompt>")
        );
        assert_eq!(
            parse("photo picnic under stars").unwrap(),
            Command::Photo("picnic under stars".into())
        );
    }

    #[test]
    fn grab_and_move() {
        assert_eq!(
            parse("grab photo abc123").unwrap(),
            Command::Grab(DragKind::Photo, ItemId::from("abc123"))
        );
        assert!(parse("grab sticker abc").is_err());
        assert_eq!(
            parse("move 50 60").unwrap(),
            Command::Move {
                pointer: point(50.0, 60.0),
                viewport: Viewport::default(),
            }
        );
        assert_eq!(
            parse("move 500 300 1000 600").unwrap(),
            Command::Move {
                pointer: point(500.0, 300.0),
                viewport: Viewport::new(1000.0, 600.0),
            }
        );
        assert!(parse("move 1 two").is_err());
        assert!(parse("move 1 2 3").is_err());
    }

    #[test]
    fn record_and_geo() {
        assert_eq!(parse("record start").unwrap(), Command::RecordStart);
        assert_eq!(parse("record stop").unwrap(), Command::RecordStop);
        assert!(parse("record").is_err());
        assert_eq!(
            parse("geo 40.7 -74.0").unwrap(),
            Command::Geo(GeoReading::Fix(GeoPosition::new(40.7, -74.0)))
        );
        assert_eq!(
            parse("geo-error timeout expired").unwrap(),
            Command::Geo(GeoReading::Error("timeout expired".into()))
        );
        assert_eq!(
            parse("partner-geo 48.85 2.35").unwrap(),
            Command::PartnerGeo(GeoPosition::new(48.85, 2.35))
        );
        assert_eq!(
            parse("partner-geo 48.85").unwrap_err(),
            ParseError::Usage("partner-geo <lat> <lng>")
        );
    }

    #[test]
    fn numbers_must_be_finite() {
        assert!(parse("move nan 1").is_err());
        assert!(parse("move 1 2 inf 600").is_err());
        assert!(parse("geo NaN 0").is_err());
        assert!(parse("partner-geo 0 -inf").is_err());
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse("dance").unwrap_err(),
            ParseError::Unknown("dance".into())
        );
    }
}
