//! Plain-text views of the lobby and the wall.

use std::fmt::Write as _;

use chrono::{DateTime, Local};

use lovewall_common::Timestamp;
use lovewall_social::{SessionState, UserStatus};
use lovewall_wall::Placement;

use super::core::LoveWallApp;

fn clock_time(millis: Timestamp) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

fn at(p: &Placement) -> String {
    format!("({:>5.1}, {:>5.1}) {:+.1}°", p.x, p.y, p.rotation)
}

impl LoveWallApp {
    pub(super) fn render_lobby(&self) -> String {
        let session = self.session.session();
        let mut out = String::from("The circle:\n");
        for member in self.session.roster().members() {
            let status = if session.is_paired(&member.id) {
                "on the wall"
            } else if session.waitlist.contains(&member.id) {
                "waiting"
            } else {
                match member.status {
                    UserStatus::Available => "available",
                    UserStatus::Busy => "busy",
                    UserStatus::Waiting => "waiting",
                }
            };
            let me = self
                .session
                .current_user()
                .is_some_and(|u| u.id == member.id);
            let _ = writeln!(
                out,
                "  {:<4} {:<8} {}{}",
                member.id.as_str(),
                member.name,
                status,
                if me { "  (you)" } else { "" }
            );
        }
        if !session.waitlist.is_empty() {
            let waiting: Vec<&str> = session.waitlist.iter().map(|id| id.as_str()).collect();
            let _ = writeln!(out, "Waitlist: {}", waiting.join(", "));
        }
        out.trim_end().to_string()
    }

    pub(super) fn render_wall(&self) -> String {
        if self.session.state() != SessionState::Paired {
            return "Not on the wall. Use `pair <id>` from the lobby.".to_string();
        }
        let mut out = String::new();
        let partner = self.session.partner().map_or("?", |p| p.name.as_str());
        let since = self
            .session
            .session()
            .start_time
            .map(clock_time)
            .unwrap_or_default();
        let _ = writeln!(out, "== Wall with {partner} (since {since}) ==");
        let _ = writeln!(out, "Tip: {}", self.advice);

        if let Some(ref location) = self.location {
            if let (Some(own), Some(other)) = (location.tracker.own(), location.tracker.partner())
            {
                let _ = writeln!(
                    out,
                    "Location: you {:.5},{:.5}  {partner} {:.5},{:.5}",
                    own.lat, own.lng, other.lat, other.lng
                );
            }
        }

        for note in self.wall.notes() {
            let _ = writeln!(
                out,
                "  note    {}  {}  {}  {:?} by {}",
                note.id,
                at(&note.placement),
                note.color,
                note.text,
                self.member_name(note.sender_id.as_str())
            );
        }
        for photo in self.wall.photos() {
            let _ = writeln!(
                out,
                "  photo   {}  {}  {:?} by {}",
                photo.id,
                at(&photo.placement),
                photo.caption,
                self.member_name(photo.sender_id.as_str())
            );
        }
        for video in self.wall.videos() {
            let _ = writeln!(
                out,
                "  video   {}  {}  {}",
                video.id,
                at(&video.placement),
                video.video_url
            );
        }
        for sticker in self.wall.stickers() {
            let _ = writeln!(
                out,
                "  sticker {}  {}  {}",
                sticker.id,
                at(&sticker.placement),
                sticker.emoji
            );
        }
        for voice in self.wall.voice_notes() {
            let _ = writeln!(
                out,
                "  voice   {}  {}  {}s at {}",
                voice.id,
                at(&voice.placement),
                voice.duration,
                clock_time(voice.timestamp)
            );
        }
        if self.wall.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        if let Some(target) = self.drag.target() {
            let _ = writeln!(out, "Holding {}", target.id);
        }
        if self.recorder.is_recording() {
            let _ = writeln!(out, "Recording ({} chunks)", self.recorder.chunk_count());
        }
        out.trim_end().to_string()
    }

    fn member_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.session
            .roster()
            .members()
            .iter()
            .find(|m| m.id.as_str() == id)
            .map_or(id, |m| m.name.as_str())
    }
}
