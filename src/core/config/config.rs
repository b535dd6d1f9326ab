use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Seconds until the app exits on its own; 0 disables. Handy for smoke runs.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 720.0,
            title: "Rainbow Learners".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    /// Countdown seconds per question.
    pub initial_time_secs: u32,
    /// Wrong answers allowed before game over.
    pub lives: u8,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            initial_time_secs: 20,
            lives: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub quiz: QuizConfig,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            quiz: Default::default(),
            audio: Default::default(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load the given file, or fall back to defaults with the error preserved
    /// for the caller to report.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning human-readable warning strings.
    /// Suspicious values, not hard errors; log each with `warn!` at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.quiz.initial_time_secs == 0 {
            w.push("quiz.initial_time_secs is 0; every question times out immediately".into());
        } else if self.quiz.initial_time_secs > 600 {
            w.push(format!(
                "quiz.initial_time_secs {} very large; the countdown loses its point",
                self.quiz.initial_time_secs
            ));
        }
        if self.quiz.lives == 0 {
            w.push("quiz.lives is 0; the first wrong answer ends the game".into());
        } else if self.quiz.lives > 9 {
            w.push(format!(
                "quiz.lives {} unusually high for a children's quiz",
                self.quiz.lives
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test Window", autoClose: 0.0),
            quiz: (initial_time_secs: 30, lives: 5),
            audio: (enabled: false),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.window.title, "Test Window");
        assert_eq!(cfg.quiz.initial_time_secs, 30);
        assert_eq!(cfg.quiz.lives, 5);
        assert!(!cfg.audio.enabled);
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let sample = r"(quiz: (lives: 1))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.quiz.lives, 1);
        assert_eq!(
            cfg.quiz.initial_time_secs,
            QuizConfig::default().initial_time_secs
        );
        assert_eq!(cfg.window.width, WindowConfig::default().width);
        assert!(cfg.audio.enabled);
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -5.0,
            },
            quiz: QuizConfig {
                initial_time_secs: 0,
                lives: 0,
            },
            audio: AudioConfig { enabled: true },
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("quiz.initial_time_secs is 0"));
        assert!(joined.contains("quiz.lives is 0"));
        assert_eq!(warnings.len(), 4, "unexpected warning set: {joined}");
    }
}
