use ribbon_helix::data::EnrichedStream;

pub fn render(streams: &[EnrichedStream]) {
    if streams.is_empty() {
        println!("no streams currently live, check back soon");
        return;
    }

    let ranked = rank(streams);
    let featured = &ranked[0];

    println!(
        "featured: {} | {} | {} viewers | {}",
        featured.user_name,
        featured.title,
        format_viewers(featured.viewer_count),
        featured.game_name
    );
    println!("          https://twitch.tv/{}", featured.user_login);

    for stream in &ranked[1..] {
        println!(
            "  {} | {} | {} viewers",
            stream.user_name,
            stream.title,
            format_viewers(stream.viewer_count)
        );
    }
}

// the directory already ranks, but don't trust the wire
fn rank(streams: &[EnrichedStream]) -> Vec<EnrichedStream> {
    let mut ranked = streams.to_vec();
    ranked.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
    ranked
}

fn format_viewers(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}K", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}
