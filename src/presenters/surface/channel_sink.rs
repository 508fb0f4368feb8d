use log::debug;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::tile_sink::TileSink;

/// Forwards render events over an mpsc channel to a consumer thread.
pub struct ChannelTileSink {
    sender: Sender<RenderEvent>,
}

impl ChannelTileSink {
    #[must_use]
    pub fn new() -> (Self, Receiver<RenderEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl TileSink for ChannelTileSink {
    fn submit(&self, event: RenderEvent) {
        if let Err(mpsc::SendError(event)) = self.sender.send(event) {
            debug!("receiver gone, dropping event of generation {}", event.generation());
        }
    }
}
