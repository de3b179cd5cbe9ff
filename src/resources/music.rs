//! Background music player.
//!
//! [`MusicPlayer`] is the game-facing handle: it keeps the requested volume and
//! forwards every call to a dedicated music thread
//! ([`music_thread`](crate::systems::music::music_thread)) that owns the raylib
//! audio device and the streaming [`Music`](raylib::core::audio::Music). Calls never
//! fail from the caller's point of view; problems (for instance a theme file
//! that cannot be opened) are logged by the thread and reported as
//! [`MusicMessage`]s.

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::events::music::{MusicCmd, MusicMessage};
use crate::systems::music::music_thread;

pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MusicTheme {
    MenuTheme,
    MissionTheme,
}

impl MusicTheme {
    /// On-disk location of the theme's track.
    pub fn path(self) -> &'static str {
        match self {
            MusicTheme::MenuTheme => "./assets/music/menu_theme.ogg",
            MusicTheme::MissionTheme => "./assets/music/mission_theme.ogg",
        }
    }
}

/// Clamp `volume` into `[MIN_VOLUME, MAX_VOLUME]`.
pub fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(MIN_VOLUME, MAX_VOLUME)
}

#[derive(Resource)]
pub struct MusicPlayer {
    tx_cmd: Sender<MusicCmd>,
    rx_msg: Receiver<MusicMessage>,
    handle: Option<std::thread::JoinHandle<()>>,
    volume: f32,
}

impl MusicPlayer {
    /// Spawn the music thread and return a player bound to it.
    pub fn spawn() -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<MusicCmd>();
        let (tx_msg, rx_msg) = unbounded::<MusicMessage>();
        let handle = std::thread::spawn(move || music_thread(rx_cmd, tx_msg));
        Self {
            tx_cmd,
            rx_msg,
            handle: Some(handle),
            volume: MAX_VOLUME,
        }
    }

    /// Player bound to caller-provided channels, without a thread.
    pub fn from_channels(tx_cmd: Sender<MusicCmd>, rx_msg: Receiver<MusicMessage>) -> Self {
        Self {
            tx_cmd,
            rx_msg,
            handle: None,
            volume: MAX_VOLUME,
        }
    }

    fn send(&self, cmd: MusicCmd) {
        // The thread only disappears during shutdown.
        if self.tx_cmd.send(cmd).is_err() {
            debug!("music thread gone, command dropped");
        }
    }

    /// Open and start the track mapped to `theme`. If it cannot be opened the
    /// current playback continues.
    pub fn play(&self, theme: MusicTheme) {
        self.send(MusicCmd::Play {
            theme,
            path: theme.path().to_string(),
        });
    }

    pub fn stop(&self) {
        self.send(MusicCmd::Stop);
    }

    pub fn set_loop(&self, looped: bool) {
        self.send(MusicCmd::SetLoop(looped));
    }

    pub fn set_paused(&self, paused: bool) {
        self.send(MusicCmd::SetPaused(paused));
    }

    /// Set the volume in `0..=100`. Out-of-range values are clamped.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        self.send(MusicCmd::SetVolume(self.volume));
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Messages published by the music thread since the last call.
    pub fn drain_messages(&self) -> impl Iterator<Item = MusicMessage> + '_ {
        self.rx_msg.try_iter()
    }

    /// Ask the thread to stop and wait for it.
    pub fn shutdown(&mut self) {
        self.send(MusicCmd::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> (MusicPlayer, Receiver<MusicCmd>, Sender<MusicMessage>) {
        let (tx_cmd, rx_cmd) = unbounded();
        let (tx_msg, rx_msg) = unbounded();
        (MusicPlayer::from_channels(tx_cmd, rx_msg), rx_cmd, tx_msg)
    }

    #[test]
    fn set_volume_clamps_into_range() {
        let (mut p, rx, _tx) = player();
        p.set_volume(-10.0);
        assert_eq!(p.volume(), 0.0);
        p.set_volume(150.0);
        assert_eq!(p.volume(), 100.0);
        p.set_volume(42.0);
        assert_eq!(p.volume(), 42.0);

        let sent: Vec<f32> = rx
            .try_iter()
            .filter_map(|cmd| match cmd {
                MusicCmd::SetVolume(v) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(sent, vec![0.0, 100.0, 42.0]);
    }

    #[test]
    fn play_sends_theme_path() {
        let (p, rx, _tx) = player();
        p.play(MusicTheme::MissionTheme);
        match rx.try_recv() {
            Ok(MusicCmd::Play { theme, path }) => {
                assert_eq!(theme, MusicTheme::MissionTheme);
                assert_eq!(path, MusicTheme::MissionTheme.path());
            }
            other => panic!("expected Play, got {:?}", other),
        }
    }

    #[test]
    fn controls_forward_in_order() {
        let (p, rx, _tx) = player();
        p.set_loop(true);
        p.set_paused(true);
        p.set_paused(false);
        p.stop();
        let cmds: Vec<_> = rx.try_iter().collect();
        assert!(matches!(cmds[0], MusicCmd::SetLoop(true)));
        assert!(matches!(cmds[1], MusicCmd::SetPaused(true)));
        assert!(matches!(cmds[2], MusicCmd::SetPaused(false)));
        assert!(matches!(cmds[3], MusicCmd::Stop));
    }

    #[test]
    fn commands_after_thread_loss_are_dropped_silently() {
        let (mut p, rx, _tx) = player();
        drop(rx);
        p.set_volume(50.0);
        p.play(MusicTheme::MenuTheme);
        assert_eq!(p.volume(), 50.0);
    }

    #[test]
    fn drain_messages_returns_thread_messages() {
        let (p, _rx, tx) = player();
        tx.send(MusicMessage::Stopped).unwrap();
        let msgs: Vec<_> = p.drain_messages().collect();
        assert_eq!(msgs, vec![MusicMessage::Stopped]);
    }
}
