//! Music thread backed by raylib audio, plus the systems that bridge it with
//! the ECS world.
//!
//! - [`music_thread`] runs on its own OS thread, owns the raylib audio device
//!   and at most one streaming track, and processes
//!   [`MusicCmd`](crate::events::music::MusicCmd) messages.
//! - [`poll_music_messages`] drains the thread's replies into the ECS message
//!   queue each frame; [`update_music_messages`] advances that queue.
//!
//! A theme that fails to open is logged and otherwise ignored: whatever was
//! playing keeps playing.

use bevy_ecs::prelude::{MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{error, info};
use raylib::core::audio::{Music, RaylibAudio};

use crate::events::music::{MusicCmd, MusicMessage};
use crate::resources::music::{MAX_VOLUME, MusicPlayer, MusicTheme};

/// Drain pending messages from the music thread into `Messages<MusicMessage>`.
pub fn poll_music_messages(player: Res<MusicPlayer>, mut writer: MessageWriter<MusicMessage>) {
    writer.write_batch(player.drain_messages());
}

/// Advance the ECS message queue for [`MusicMessage`].
pub fn update_music_messages(mut msgs: ResMut<Messages<MusicMessage>>) {
    msgs.update();
}

/// Entry point of the dedicated music thread.
///
/// Blocks until it receives [`MusicCmd::Shutdown`] or the command channel is
/// closed.
pub fn music_thread(rx_cmd: Receiver<MusicCmd>, tx_msg: Sender<MusicMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            return;
        }
    };

    info!(
        "[music] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut current: Option<(MusicTheme, Music)> = None;
    let mut looped = false;
    let mut paused = false;
    let mut volume = MAX_VOLUME;

    'run: loop {
        // 1) Drain commands
        loop {
            let cmd = match rx_cmd.try_recv() {
                Ok(cmd) => cmd,
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => break 'run,
            };
            match cmd {
                MusicCmd::Play { theme, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        if let Some((_, old)) = current.take() {
                            old.stop_stream();
                        }
                        info!("[music] play theme={:?} path='{}' looped={}", theme, path, looped);
                        music.set_volume(volume / MAX_VOLUME);
                        music.play_stream();
                        paused = false;
                        current = Some((theme, music));
                        let _ = tx_msg.send(MusicMessage::Started { theme });
                    }
                    Err(e) => {
                        error!("Can't open music {}: {}", path, e);
                        let _ = tx_msg.send(MusicMessage::OpenFailed {
                            theme,
                            error: e.to_string(),
                        });
                    }
                },
                MusicCmd::Stop => {
                    if let Some((_, music)) = current.as_ref() {
                        info!("[music] stop");
                        music.stop_stream();
                        let _ = tx_msg.send(MusicMessage::Stopped);
                    }
                    current = None;
                }
                MusicCmd::SetLoop(want_loop) => {
                    looped = want_loop;
                }
                MusicCmd::SetPaused(want_pause) => {
                    if let Some((_, music)) = current.as_ref() {
                        if want_pause {
                            music.pause_stream();
                            let _ = tx_msg.send(MusicMessage::Paused);
                        } else {
                            music.resume_stream();
                            let _ = tx_msg.send(MusicMessage::Resumed);
                        }
                    }
                    paused = want_pause;
                }
                MusicCmd::SetVolume(vol) => {
                    volume = vol;
                    if let Some((_, music)) = current.as_ref() {
                        music.set_volume(volume / MAX_VOLUME);
                    }
                }
                MusicCmd::Shutdown => {
                    info!("[music] shutdown requested");
                    break 'run;
                }
            }
        }

        // 2) Pump streaming + detect the end of the track
        let mut finished = false;
        if let Some((theme, music)) = current.as_ref() {
            if music.is_stream_playing() {
                music.update_stream();
            } else if !paused && music.get_time_played() >= music.get_time_length() - 0.01 {
                if looped {
                    info!("[music] restarting looped theme={:?}", theme);
                    music.seek_stream(0.0);
                    music.play_stream();
                    let _ = tx_msg.send(MusicMessage::Restarted { theme: *theme });
                } else {
                    info!("[music] finished theme={:?}", theme);
                    let _ = tx_msg.send(MusicMessage::Finished { theme: *theme });
                    finished = true;
                }
            }
        }
        if finished {
            current = None;
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    if let Some((_, music)) = current.take() {
        music.stop_stream();
    }
    info!(
        "[music] thread exiting (id={:?})",
        std::thread::current().id()
    );
    // The track drops before `audio`.
}
