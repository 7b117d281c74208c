//! Adapter: an mp3-only `AudioPlayer` plays vlc and mp4 files through a
//! `MediaAdapter` wrapping `AdvancedMediaPlayer`.

use crate::output::OutputSink;
use crate::{PatternError, PatternResult};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Media formats known to this module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Mp3,
    Vlc,
    Mp4,
}

impl MediaFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Vlc => "vlc",
            MediaFormat::Mp4 => "mp4",
        }
    }

    /// Whether the format needs [`AdvancedMediaPlayer`]
    pub fn is_advanced(&self) -> bool {
        matches!(self, MediaFormat::Vlc | MediaFormat::Mp4)
    }
}

impl FromStr for MediaFormat {
    type Err = PatternError;

    /// Case-insensitive: `"MP4"`, `"Mp4"` and `"mp4"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [MediaFormat::Mp3, MediaFormat::Vlc, MediaFormat::Mp4]
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatternError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target interface
pub trait MediaPlayer {
    fn play(
        &mut self,
        audio_type: &str,
        file_name: &str,
        sink: &mut dyn OutputSink,
    ) -> PatternResult<()>;
}

/// The adaptee, with an interface `AudioPlayer` cannot call directly
#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancedMediaPlayer;

impl AdvancedMediaPlayer {
    pub fn play_vlc(&self, file_name: &str, sink: &mut dyn OutputSink) -> PatternResult<()> {
        sink.line(&format!("Playing vlc file. Name: {}", file_name))?;
        Ok(())
    }

    pub fn play_mp4(&self, file_name: &str, sink: &mut dyn OutputSink) -> PatternResult<()> {
        sink.line(&format!("Playing mp4 file. Name: {}", file_name))?;
        Ok(())
    }
}

/// Exposes [`AdvancedMediaPlayer`] through [`MediaPlayer`]
#[derive(Debug, Clone)]
pub struct MediaAdapter {
    format: MediaFormat,
    advanced_player: AdvancedMediaPlayer,
}

impl MediaAdapter {
    /// Builds an adapter for an advanced format; `mp3` and unknown names are rejected.
    pub fn new(audio_type: &str) -> PatternResult<Self> {
        let format: MediaFormat = audio_type.parse()?;
        if !format.is_advanced() {
            return Err(PatternError::UnsupportedFormat(audio_type.to_string()));
        }
        Ok(Self {
            format,
            advanced_player: AdvancedMediaPlayer,
        })
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(
        &mut self,
        audio_type: &str,
        file_name: &str,
        sink: &mut dyn OutputSink,
    ) -> PatternResult<()> {
        match audio_type.parse::<MediaFormat>()? {
            MediaFormat::Vlc => self.advanced_player.play_vlc(file_name, sink),
            MediaFormat::Mp4 => self.advanced_player.play_mp4(file_name, sink),
            MediaFormat::Mp3 => Err(PatternError::UnsupportedFormat(audio_type.to_string())),
        }
    }
}

/// Plays mp3 natively and delegates vlc/mp4 to a [`MediaAdapter`]
#[derive(Debug, Default)]
pub struct AudioPlayer {
    media_adapter: Option<MediaAdapter>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The adapter used by the most recent advanced-format play, if any
    pub fn last_adapter(&self) -> Option<&MediaAdapter> {
        self.media_adapter.as_ref()
    }
}

impl MediaPlayer for AudioPlayer {
    /// Unsupported formats print a notice to the sink and return
    /// [`PatternError::UnsupportedFormat`].
    fn play(
        &mut self,
        audio_type: &str,
        file_name: &str,
        sink: &mut dyn OutputSink,
    ) -> PatternResult<()> {
        match audio_type.parse::<MediaFormat>() {
            Ok(MediaFormat::Mp3) => {
                sink.line(&format!("Playing mp3 file. Name: {}", file_name))?;
                Ok(())
            }
            Ok(format) => {
                debug!(%format, file_name, "delegating to media adapter");
                let adapter = self.media_adapter.insert(MediaAdapter::new(audio_type)?);
                adapter.play(audio_type, file_name, sink)
            }
            Err(err) => {
                sink.line(&format!("Invalid media. {} format not supported", audio_type))?;
                Err(err)
            }
        }
    }
}

/// Plays one file of each kind, skipping past the unsupported one
pub fn run_demo(sink: &mut dyn OutputSink) -> PatternResult<()> {
    let mut audio_player = AudioPlayer::new();

    let playlist = [
        ("mp3", "beyond_the_horizon.mp3"),
        ("mp4", "alone.mp4"),
        ("vlc", "far_far_away.vlc"),
        ("avi", "mind_me.avi"),
    ];

    for (audio_type, file_name) in playlist {
        match audio_player.play(audio_type, file_name, sink) {
            Ok(()) => {}
            // notice already written by the player
            Err(PatternError::UnsupportedFormat(format)) => {
                warn!(%format, file_name, "skipped unsupported file");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferSink;

    #[test]
    fn test_media_format_parsing() {
        assert_eq!("mp3".parse::<MediaFormat>().unwrap(), MediaFormat::Mp3);
        assert_eq!("VLC".parse::<MediaFormat>().unwrap(), MediaFormat::Vlc);
        assert_eq!("Mp4".parse::<MediaFormat>().unwrap(), MediaFormat::Mp4);
        assert!(matches!(
            "avi".parse::<MediaFormat>(),
            Err(PatternError::UnsupportedFormat(ref f)) if f == "avi"
        ));
        assert_eq!(MediaFormat::Vlc.to_string(), "vlc");
    }

    #[test]
    fn test_media_adapter_rejects_mp3() {
        assert!(MediaAdapter::new("mp3").is_err());
        assert!(MediaAdapter::new("flac").is_err());
        assert_eq!(MediaAdapter::new("vlc").unwrap().format(), MediaFormat::Vlc);
    }

    #[test]
    fn test_audio_player_dispatch() {
        let mut player = AudioPlayer::new();
        let mut sink = BufferSink::new();

        player.play("mp3", "beyond_the_horizon.mp3", &mut sink).unwrap();
        assert!(player.last_adapter().is_none());

        player.play("mp4", "alone.mp4", &mut sink).unwrap();
        assert_eq!(player.last_adapter().unwrap().format(), MediaFormat::Mp4);

        player.play("vlc", "far_far_away.vlc", &mut sink).unwrap();
        let err = player.play("avi", "mind_me.avi", &mut sink).unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedFormat(_)));

        assert_eq!(
            sink.lines(),
            [
                "Playing mp3 file. Name: beyond_the_horizon.mp3",
                "Playing mp4 file. Name: alone.mp4",
                "Playing vlc file. Name: far_far_away.vlc",
                "Invalid media. avi format not supported",
            ]
        );
    }

    #[test]
    fn test_audio_player_is_case_insensitive() {
        let mut player = AudioPlayer::new();
        let mut sink = BufferSink::new();

        player.play("MP3", "loud.mp3", &mut sink).unwrap();
        player.play("Vlc", "clip.vlc", &mut sink).unwrap();

        assert_eq!(sink.lines()[0], "Playing mp3 file. Name: loud.mp3");
        assert_eq!(sink.lines()[1], "Playing vlc file. Name: clip.vlc");
    }
}
