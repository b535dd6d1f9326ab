pub mod app;
pub mod audio;
pub mod core;
pub mod debug;

// Curated re-exports
pub use crate::app::game::AppPlugin;
pub use crate::app::state::AppState;
pub use crate::core::config::GameConfig;
pub use crate::core::mixer::{mix, MixResult};
pub use crate::core::quiz::{QuizFeedback, QuizRules, QuizState};
pub use crate::core::registry::{ColorRecord, ColorRegistry};
