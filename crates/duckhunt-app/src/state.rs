//! Handle shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use duckhunt_core::commands::PlayerCommand;
use duckhunt_core::state::RoundSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the round engine.
    Player(PlayerCommand),
    /// Stop the game loop thread.
    Shutdown,
}

/// Shared slot holding the most recent snapshot.
pub type SharedSnapshot = Arc<Mutex<Option<RoundSnapshot>>>;

/// Owner's view of a running game loop.
///
/// The sender is cloneable, so tag scans finishing on worker threads can
/// deliver their results on the same channel as player input.
pub struct GameHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl GameHandle {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SharedSnapshot,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward a command to the engine.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), String> {
        self.command_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|e| format!("Failed to send command: {e}"))
    }

    /// A sender for collaborators that report back asynchronously.
    pub fn sender(&self) -> mpsc::Sender<GameLoopCommand> {
        self.command_tx.clone()
    }

    /// Latest snapshot, for polling.
    pub fn snapshot(&self) -> Result<Option<RoundSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) -> Result<(), String> {
        // The loop also exits on disconnect, so a failed send is fine.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        match self.thread.take() {
            Some(thread) => thread
                .join()
                .map_err(|_| "Game loop thread panicked".to_string()),
            None => Ok(()),
        }
    }
}
