use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config::Config, info, management, server::AppState, success, warning};

pub async fn playlist(config: Config, zip_code: String) {
    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Looking up weather and playlist for {}...", zip_code));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = management::weather_playlist(&state, &zip_code).await;
    pb.finish_and_clear();

    match result {
        Ok(answer) => {
            info!(
                "Weather at {}: {} ({})",
                zip_code, answer.weather_description, answer.temperature
            );
            success!(
                "Playlist {} with {} tracks",
                answer.playlist_name,
                answer.tracks.len()
            );
            if !answer.tracks.is_empty() {
                println!("{}", Table::new(answer.tracks));
            }
        }
        Err(e) => warning!("Lookup failed ({}): {}", e.kind(), e),
    }
}
