pub mod detail;
pub mod feedback;
pub mod gallery;
pub mod game;
pub mod home;
pub mod mixing;
pub mod quiz;
pub mod session;
pub mod state;
pub mod widgets;
