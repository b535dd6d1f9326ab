mod config;

pub use config::{AudioConfig, GameConfig, QuizConfig, WindowConfig};
