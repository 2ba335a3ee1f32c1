//! LoveWallApp struct definition and constructor.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use lovewall_ai::{AiClient, ContentService};
use lovewall_common::{Clock, PendingFlag, SessionId, SystemClock, UserId};
use lovewall_config::LoveWallConfig;
use lovewall_social::{SessionManager, SessionState};
use lovewall_wall::media::{Microphone, SimulatedMicrophone};
use lovewall_wall::{BlobRegistry, DragController, VoiceRecorder, WallStore};

use super::init::build_roster;
use super::location::LocationSession;
use super::types::{AppEvent, WELCOME_ADVICE};

/// Top-level application state.
pub struct LoveWallApp {
    pub(super) config: LoveWallConfig,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) events: mpsc::UnboundedSender<AppEvent>,

    // Session and wall
    pub(super) session: SessionManager,
    pub(super) wall: WallStore,
    pub(super) drag: DragController,

    // Generated content
    pub(super) content: ContentService,
    /// Shared by note suggestions and image generation.
    pub(super) ai_loading: PendingFlag,
    pub(super) draft: Option<String>,
    pub(super) advice: String,

    // Media
    pub(super) blobs: BlobRegistry,
    pub(super) recorder: VoiceRecorder,
    pub(super) microphone: Box<dyn Microphone>,
    pub(super) chunk_ticker: Option<JoinHandle<()>>,

    // Present only while paired
    pub(super) location: Option<LocationSession>,

    // Lines for the terminal, drained after every event
    pub(super) output: Vec<String>,
    pub(super) should_exit: bool,
}

impl LoveWallApp {
    pub fn new(
        config: LoveWallConfig,
        client: Arc<dyn AiClient>,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self::with_clock(config, client, events, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: LoveWallConfig,
        client: Arc<dyn AiClient>,
        events: mpsc::UnboundedSender<AppEvent>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = SessionManager::with_clock(build_roster(&config.session), clock.clone());
        let wall = WallStore::with_parts(
            config.wall.clone(),
            Box::new(lovewall_wall::SeededRandom::new(config.wall.seed)),
            clock.clone(),
        );
        let content = ContentService::new(client)
            .with_temperatures(config.ai.note_temperature, config.ai.advice_temperature);
        let recorder = VoiceRecorder::new(
            config.media.chunks_per_second,
            config.media.audio_mime.as_str(),
        );
        let microphone = Box::new(SimulatedMicrophone {
            allowed: config.media.microphone_allowed,
        });

        Self {
            drag: DragController::new(config.wall.drag_offset),
            clock,
            events,
            session,
            wall,
            content,
            ai_loading: PendingFlag::new(),
            draft: None,
            advice: WELCOME_ADVICE.to_string(),
            blobs: BlobRegistry::new(),
            recorder,
            microphone,
            chunk_ticker: None,
            location: None,
            output: Vec::new(),
            should_exit: false,
            config,
        }
    }

    /// The acting member, only while paired.
    pub(super) fn sender(&self) -> Option<UserId> {
        if self.session.state() != SessionState::Paired {
            tracing::debug!("ignored: not on the wall");
            return None;
        }
        self.session.current_user().map(|u| u.id.clone())
    }

    /// Whether `session` is the pairing still on screen.
    pub(super) fn is_current(&self, session: &SessionId) -> bool {
        self.session.session_id() == Some(session)
    }

    pub(super) fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    pub(super) fn alert(&mut self, message: &str) {
        tracing::warn!("{message}");
        self.output.push(format!("[!] {message}"));
    }

    pub(super) fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}
