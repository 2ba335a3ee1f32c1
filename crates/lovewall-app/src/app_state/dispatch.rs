//! Event and command dispatch.

use tracing::debug;

use lovewall_ai::{prompts, InlineImage};
use lovewall_common::{ItemId, UserId};
use lovewall_wall::{DragKind, ItemKind, PhotoSource, Pointer, Viewport};

use super::commands::{Command, HELP};
use super::core::LoveWallApp;
use super::types::{AppEvent, IMAGE_FAILED_ALERT};

impl LoveWallApp {
    /// Apply one event to the app state.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(line) => self.handle_input(&line),
            AppEvent::InputClosed => {
                debug!("stdin closed");
                self.should_exit = true;
            }
            AppEvent::NoteSuggestion(text) => {
                self.say(format!("Suggestion: {text}  (post it with `note`)"));
                self.draft = Some(text);
            }
            AppEvent::ImageReady {
                session,
                prompt,
                result,
            } => {
                if self.is_current(&session) {
                    self.on_image_ready(prompt, result);
                } else {
                    debug!(%session, "dropped image from an ended pairing");
                }
            }
            AppEvent::AdviceReady { session, text } => {
                if self.is_current(&session) {
                    self.say(format!("Tip: {text}"));
                    self.advice = text;
                } else {
                    debug!(%session, "dropped tip from an ended pairing");
                }
            }
            AppEvent::AudioChunk(chunk) => self.on_audio_chunk(chunk),
            AppEvent::FileLoaded(result) => self.on_file_loaded(result),
            AppEvent::Geo(reading) => self.on_geo_reading(reading),
        }
    }

    pub(super) fn handle_input(&mut self, line: &str) {
        match Command::parse(line) {
            None => {}
            Some(Ok(command)) => self.dispatch(command),
            Some(Err(e)) => self.say(e.to_string()),
        }
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Join(id) => self.join(id),
            Command::Lobby => {
                let lobby = self.render_lobby();
                self.say(lobby);
            }
            Command::Pair(id) => self.pair(&id),
            Command::Wait(id) => match self.session.enqueue(&id) {
                Ok(_) => self.say(format!("{id} is on the waitlist")),
                Err(e) => debug!("waitlist rejected: {e}"),
            },
            Command::Unwait(id) => {
                if !self.session.dequeue(&id) {
                    debug!(%id, "not on the waitlist");
                }
            }
            Command::Leave => self.leave(),
            Command::Note(text) => self.post_note(text),
            Command::Suggest(mood) => self.request_suggestion(mood),
            Command::Photo(prompt) => self.request_image(prompt),
            Command::Upload(path) => self.request_upload(path),
            Command::Sticker(emoji) => self.add_sticker(emoji),
            Command::Grab(kind, id) => self.grab(kind, id),
            Command::Move { pointer, viewport } => self.drag_to(pointer, viewport),
            Command::Release => {
                if let Some(target) = self.drag.release() {
                    debug!(id = %target.id, "released");
                }
            }
            Command::RecordStart => self.start_recording(),
            Command::RecordStop => self.stop_recording(),
            Command::Geo(reading) => self.report_position(reading),
            Command::PartnerGeo(position) => self.report_partner_position(position),
            Command::Wall => {
                let wall = self.render_wall();
                self.say(wall);
            }
            Command::Help => self.say(HELP),
            Command::Quit => self.should_exit = true,
        }
    }

    // -- session ------------------------------------------------------------

    fn join(&mut self, id: Option<UserId>) {
        let id = id.unwrap_or_else(|| UserId::new(self.config.session.default_user.as_str()));
        if !self.session.roster().contains(&id) {
            debug!(%id, "join rejected: unknown member");
            return;
        }
        // Joining drops any pairing, so wind down its tasks first.
        self.finish_recording();
        self.stop_location();
        match self.enter(&id) {
            Ok(welcome) => {
                self.say(welcome);
                let lobby = self.render_lobby();
                self.say(lobby);
            }
            Err(e) => debug!("join rejected: {e}"),
        }
    }

    fn enter(&mut self, id: &UserId) -> lovewall_common::Result<String> {
        let user = self.session.join(id)?;
        Ok(format!("Welcome, {}. Pick a partner with `pair <id>`.", user.name))
    }

    fn pair(&mut self, partner_id: &UserId) {
        let started = match self.session.start_pairing(partner_id) {
            Ok(started) => started,
            Err(e) => {
                debug!("pairing rejected: {e}");
                return;
            }
        };

        let greeting = self
            .config
            .session
            .greeting
            .replace("{name}", &started.user.name);
        self.wall.seed_pairing(&started.partner.id, &greeting);
        self.drag.release();

        let history = prompts::pairing_history(&started.user.name, &started.partner.name);
        self.request_advice(started.session_id.clone(), history);
        self.start_location(started.user.id.clone(), started.partner.id.clone());

        self.say(format!("You and {} share the wall now.", started.partner.name));
        let wall = self.render_wall();
        self.say(wall);
    }

    fn leave(&mut self) {
        self.finish_recording();
        self.stop_location();
        self.drag.release();
        self.session.end_pairing();
        self.say("Back in the lobby.");
    }

    // -- wall ---------------------------------------------------------------

    fn post_note(&mut self, text: Option<String>) {
        let Some(sender) = self.sender() else { return };
        let Some(text) = text.or_else(|| self.draft.clone()) else {
            debug!("no note text and no suggestion");
            return;
        };
        match self.wall.add_note(&sender, &text) {
            Ok(note) => {
                let line = format!("Note {} posted.", note.id);
                self.draft = None;
                self.say(line);
            }
            Err(e) => debug!("note rejected: {e}"),
        }
    }

    fn add_sticker(&mut self, emoji: Option<String>) {
        let Some(sender) = self.sender() else { return };
        match self.wall.add_sticker(&sender, emoji.as_deref()) {
            Ok(sticker) => {
                let line = format!("{} stuck on the wall.", sticker.emoji);
                self.say(line);
            }
            Err(e) => debug!("sticker rejected: {e}"),
        }
    }

    fn on_image_ready(&mut self, prompt: String, result: lovewall_common::Result<InlineImage>) {
        let image = match result {
            Ok(image) => image,
            Err(e) => {
                tracing::error!("image generation failed: {e}");
                self.alert(IMAGE_FAILED_ALERT);
                return;
            }
        };
        let Some(sender) = self.sender() else { return };
        let source = PhotoSource::Generated {
            image_url: image.to_data_url(),
            prompt,
        };
        match self.wall.add_photo(&sender, source) {
            Ok(photo) => {
                let line = format!("Photo {} developed: {}", photo.id, photo.caption);
                self.say(line);
            }
            Err(e) => debug!("photo rejected: {e}"),
        }
    }

    // -- drag ---------------------------------------------------------------

    fn grab(&mut self, kind: DragKind, id: ItemId) {
        if self.sender().is_none() {
            return;
        }
        match self.wall.find(&id) {
            Some((found, _)) if found == ItemKind::from(kind) => self.drag.press(kind, id),
            _ => debug!(%id, "nothing to grab"),
        }
    }

    fn drag_to(&mut self, pointer: Pointer, viewport: Viewport) {
        match self.drag.pointer_move(pointer, viewport) {
            Some(mv) => {
                self.wall.apply_drag(&mv);
            }
            None => debug!("move ignored"),
        }
    }
}
