//! The main loop: one event at a time until quit or end of input.

use tokio::sync::mpsc;

use super::commands::HELP;
use super::core::LoveWallApp;
use super::tasks::spawn_stdin_reader;
use super::types::AppEvent;

impl LoveWallApp {
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<AppEvent>) {
        spawn_stdin_reader(self.events.clone());
        self.say("LoveWall. Type `join` to enter the lobby.");
        self.say(HELP);
        self.flush_output();

        while let Some(event) = events.recv().await {
            self.handle_event(event);
            self.flush_output();
            if self.should_exit {
                break;
            }
        }
        self.shutdown();
    }

    fn flush_output(&mut self) {
        for line in self.take_output() {
            println!("{line}");
        }
    }

    fn shutdown(&mut self) {
        tracing::info!("Shutting down...");
        self.finish_recording();
        self.stop_location();
        self.session.end_pairing();
        self.flush_output();
    }
}
