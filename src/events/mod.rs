//! Messages exchanged with background threads.
//!
//! - [`music`] – commands to and replies from the music thread

pub mod music;
