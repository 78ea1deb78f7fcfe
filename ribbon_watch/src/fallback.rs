use ribbon_helix::data::EnrichedStream;

// shown when the directory is unreachable
pub fn sample_streams() -> Vec<EnrichedStream> {
    let started_at = time::OffsetDateTime::now_utc();

    vec![
        EnrichedStream {
            id: 1,
            user_id: 101,
            user_login: String::from("streamer_one"),
            user_name: String::from("Streamer One"),
            title: String::from("BlueRibbon RP - Epic Roleplay Session"),
            game_name: String::from("Grand Theft Auto V"),
            thumbnail_url: String::from(
                "https://static-cdn.jtvnw.net/previews-ttv/live_user_streamer_one-1920x1080.jpg",
            ),
            viewer_count: 4250,
            started_at,
            profile_image_url: Some(String::from(
                "https://static-cdn.jtvnw.net/jtv_user_pictures/default-profile_image-300x300.png",
            )),
        },
        EnrichedStream {
            id: 2,
            user_id: 102,
            user_login: String::from("streamer_two"),
            user_name: String::from("Streamer Two"),
            title: String::from("BlueRibbon RP - Crime Spree with the Crew!"),
            game_name: String::from("Grand Theft Auto V"),
            thumbnail_url: String::from(
                "https://static-cdn.jtvnw.net/previews-ttv/live_user_streamer_two-1920x1080.jpg",
            ),
            viewer_count: 1850,
            started_at,
            profile_image_url: None,
        },
    ]
}
