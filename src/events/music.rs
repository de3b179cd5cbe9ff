use bevy_ecs::message::Message;

use crate::resources::music::MusicTheme;

/// Commands sent *to* the music thread.
#[derive(Debug, Clone)]
pub enum MusicCmd {
    Play { theme: MusicTheme, path: String },
    Stop,
    SetLoop(bool),
    SetPaused(bool),
    /// Volume already clamped to `0..=100`.
    SetVolume(f32),
    Shutdown,
}

/// Events sent *back* from the music thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum MusicMessage {
    Started { theme: MusicTheme },
    OpenFailed { theme: MusicTheme, error: String },
    Stopped,
    Paused,
    Resumed,
    Restarted { theme: MusicTheme },
    Finished { theme: MusicTheme },
}
