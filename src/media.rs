//! Audio artefact handles shared by the transcription and synthesis adapters.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle to an audio file on disk.
///
/// Input handles point at user-supplied recordings; handles returned by
/// synthesis point at temporary files that the caller owns from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioHandle(PathBuf);

impl AudioHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name used when uploading the audio, defaulting to `audio.wav`.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string()
    }

    /// MIME type guessed from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .0
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("wav") => "audio/wav",
            Some("mp3") => "audio/mpeg",
            Some("flac") => "audio/flac",
            Some("ogg" | "oga") => "audio/ogg",
            Some("m4a" | "mp4") => "audio/mp4",
            Some("webm") => "audio/webm",
            Some("aif" | "aiff") => "audio/aiff",
            _ => "application/octet-stream",
        }
    }
}

impl From<PathBuf> for AudioHandle {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for AudioHandle {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl fmt::Display for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(AudioHandle::new("a/b.WAV").mime_type(), "audio/wav");
        assert_eq!(AudioHandle::new("speech.mp3").mime_type(), "audio/mpeg");
        assert_eq!(AudioHandle::new("noext").mime_type(), "application/octet-stream");
    }

    #[test]
    fn file_name_falls_back() {
        assert_eq!(AudioHandle::new("/tmp/rec.flac").file_name(), "rec.flac");
        assert_eq!(AudioHandle::new("/").file_name(), "audio.wav");
    }
}
