use weatherplay::types::{
    PlaylistCategory, PlaylistItem, PlaylistTrack, Track, TrackArtist, WeatherReading,
};
use weatherplay::utils::*;

// Helper function to create a weather reading
fn reading(description: &str, temperature: f64) -> WeatherReading {
    WeatherReading {
        temperature,
        description: description.to_string(),
    }
}

// Helper function to create a playlist entry
fn item(name: &str, artists: &[&str]) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| TrackArtist {
                    name: a.to_string(),
                })
                .collect(),
        }),
    }
}

#[test]
fn test_rain_wins_over_any_temperature() {
    for temperature in [-20.0, 5.0, 18.0, 30.0, 300.0] {
        for description in ["light rain", "Heavy Intensity RAIN", "freezing rain", "rain and snow"] {
            assert_eq!(
                pick_category(&reading(description, temperature)),
                PlaylistCategory::RainyDay,
                "{} at {}",
                description,
                temperature
            );
        }
    }
}

#[test]
fn test_rain_is_checked_before_clouds() {
    assert_eq!(
        pick_category(&reading("clouds with light rain", 30.0)),
        PlaylistCategory::RainyDay
    );
}

#[test]
fn test_clouds_win_over_temperature() {
    for temperature in [-5.0, 15.0, 30.0] {
        for description in ["scattered clouds", "Overcast Clouds", "few clouds"] {
            assert_eq!(
                pick_category(&reading(description, temperature)),
                PlaylistCategory::CloudyVibes
            );
        }
    }
}

#[test]
fn test_temperature_thresholds_without_keywords() {
    assert_eq!(
        pick_category(&reading("clear sky", 30.0)),
        PlaylistCategory::SummerHits
    );
    assert_eq!(
        pick_category(&reading("clear", 8.0)),
        PlaylistCategory::CozyWinter
    );
    assert_eq!(
        pick_category(&reading("mist", 18.0)),
        PlaylistCategory::DefaultPlaylist
    );
}

#[test]
fn test_threshold_boundaries_are_exclusive() {
    assert_eq!(
        pick_category(&reading("clear sky", 25.0)),
        PlaylistCategory::DefaultPlaylist
    );
    assert_eq!(
        pick_category(&reading("clear sky", 25.01)),
        PlaylistCategory::SummerHits
    );
    assert_eq!(
        pick_category(&reading("clear sky", 10.0)),
        PlaylistCategory::DefaultPlaylist
    );
    assert_eq!(
        pick_category(&reading("clear sky", 9.99)),
        PlaylistCategory::CozyWinter
    );
}

#[test]
fn test_pick_category_is_deterministic() {
    let r = reading("haze", 12.5);
    let first = pick_category(&r);
    for _ in 0..10 {
        assert_eq!(pick_category(&r), first);
    }
}

#[test]
fn test_category_labels() {
    let labels: Vec<&str> = [
        PlaylistCategory::RainyDay,
        PlaylistCategory::CloudyVibes,
        PlaylistCategory::SummerHits,
        PlaylistCategory::CozyWinter,
        PlaylistCategory::DefaultPlaylist,
    ]
    .iter()
    .map(|c| c.label())
    .collect();
    assert_eq!(
        labels,
        vec![
            "Rainy Day",
            "Cloudy Vibes",
            "Summer Hits",
            "Cozy Winter",
            "Default Playlist"
        ]
    );
    assert_eq!(PlaylistCategory::SummerHits.to_string(), "Summer Hits");
}

#[test]
fn test_to_tracks_keeps_first_artist_only() {
    let tracks = to_tracks(vec![
        item("Umbrella", &["Rihanna", "JAY-Z"]),
        item("Purple Rain", &["Prince"]),
    ]);

    assert_eq!(
        tracks,
        vec![
            Track {
                name: "Umbrella".to_string(),
                artist: "Rihanna".to_string(),
            },
            Track {
                name: "Purple Rain".to_string(),
                artist: "Prince".to_string(),
            },
        ]
    );
}

#[test]
fn test_to_tracks_skips_missing_tracks_and_tolerates_missing_artists() {
    let tracks = to_tracks(vec![
        PlaylistItem { track: None },
        item("Untitled", &[]),
    ]);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Untitled");
    assert_eq!(tracks[0].artist, "");
}

#[test]
fn test_to_tracks_empty() {
    assert!(to_tracks(Vec::new()).is_empty());
}

#[test]
fn test_truncate_body() {
    assert_eq!(truncate_body("short"), "short");

    let long = "ä".repeat(250);
    let truncated = truncate_body(&long);
    assert!(truncated.ends_with("..."));
    assert_eq!(truncated.chars().count(), 203);
}

#[test]
fn test_provider_message_shapes() {
    // OpenWeather
    assert_eq!(
        provider_message(r#"{"cod":"404","message":"city not found"}"#),
        "city not found"
    );
    // Spotify Web API
    assert_eq!(
        provider_message(r#"{"error":{"status":401,"message":"The access token expired"}}"#),
        "The access token expired"
    );
    // Spotify accounts service
    assert_eq!(
        provider_message(r#"{"error":"invalid_client","error_description":"Invalid client"}"#),
        "Invalid client"
    );
    // anything else
    assert_eq!(provider_message("Bad Gateway"), "Bad Gateway");
    assert_eq!(provider_message(r#"{"unexpected":true}"#), r#"{"unexpected":true}"#);
}
