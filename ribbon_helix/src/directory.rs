use std::collections::HashMap;

use crate::{data, data::EnrichedStream, Error, HelixClient};

// only streams whose title mentions the community are listed
pub const MARKER: &str = "blueribbon";

// single page, no pagination loop
pub const PAGE_SIZE: usize = 100;

#[derive(Clone)]
pub struct StreamDirectory {
    client: HelixClient,
}

impl StreamDirectory {
    pub fn new(client: HelixClient) -> Self {
        Self { client }
    }

    pub async fn get_streams(&self) -> Result<Vec<EnrichedStream>, Error> {
        let streams = self.client.get_streams(PAGE_SIZE).await?;

        let matching = streams
            .into_iter()
            .filter(|stream| matches_marker(&stream.title))
            .collect::<Vec<_>>();

        if matching.is_empty() {
            log::debug!("no live streams matched the title marker");
            return Ok(Vec::new());
        }

        let ids = distinct_broadcasters(&matching);
        let profiles = self
            .client
            .get_users(&ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.profile_image_url))
            .collect::<HashMap<_, _>>();

        Ok(join_and_rank(matching, &profiles))
    }
}

fn matches_marker(title: &str) -> bool {
    title.to_lowercase().contains(MARKER)
}

fn distinct_broadcasters(streams: &[data::Stream]) -> Vec<u64> {
    streams.iter().fold(Vec::new(), |mut ids, stream| {
        if !ids.contains(&stream.user_id) {
            ids.push(stream.user_id);
        }
        ids
    })
}

fn join_and_rank(
    streams: Vec<data::Stream>,
    profiles: &HashMap<u64, String>,
) -> Vec<EnrichedStream> {
    let mut joined = streams
        .into_iter()
        .map(|stream| EnrichedStream {
            id: stream.id,
            user_id: stream.user_id,
            user_login: stream.user_login,
            user_name: stream.user_name,
            title: stream.title,
            game_name: stream.game_name,
            thumbnail_url: stream.thumbnail_url,
            viewer_count: stream.viewer_count,
            started_at: stream.started_at,
            profile_image_url: profiles.get(&stream.user_id).cloned(),
        })
        .collect::<Vec<_>>();

    // stable sort, ties keep the upstream order
    joined.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(id: u64, user_id: u64, title: &str, viewer_count: u64) -> data::Stream {
        data::Stream {
            id,
            user_id,
            user_login: format!("login_{user_id}"),
            user_name: format!("name_{user_id}"),
            title: title.to_string(),
            game_name: String::from("Grand Theft Auto V"),
            thumbnail_url: String::new(),
            viewer_count,
            started_at: time::OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        assert!(matches_marker("BLUERIBBON RP LIVE"));
        assert!(matches_marker("BlueRibbon RP - night shift"));
        assert!(matches_marker("back on blueribbon"));
        assert!(!matches_marker("Just Chatting"));
        assert!(!matches_marker(""));
    }

    #[test]
    fn broadcasters_are_distinct_and_keep_first_seen_order() {
        let streams = [
            stream(1, 30, "blueribbon", 5),
            stream(2, 10, "blueribbon", 4),
            stream(3, 30, "blueribbon", 3),
            stream(4, 20, "blueribbon", 2),
        ];
        assert_eq!(distinct_broadcasters(&streams), [30, 10, 20]);
    }

    #[test]
    fn ranked_by_viewer_count_descending() {
        let streams = vec![
            stream(1, 10, "blueribbon", 10),
            stream(2, 20, "blueribbon", 50),
            stream(3, 30, "blueribbon", 30),
        ];

        let ranked = join_and_rank(streams, &HashMap::new());
        let counts = ranked.iter().map(|s| s.viewer_count).collect::<Vec<_>>();
        assert_eq!(counts, [50, 30, 10]);
    }

    #[test]
    fn equal_counts_keep_the_upstream_order() {
        let streams = vec![
            stream(1, 10, "blueribbon", 7),
            stream(2, 20, "blueribbon", 7),
            stream(3, 30, "blueribbon", 9),
            stream(4, 40, "blueribbon", 7),
        ];

        let ranked = join_and_rank(streams, &HashMap::new());
        let ids = ranked.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, [3, 1, 2, 4]);
    }

    #[test]
    fn missing_profile_joins_to_none() {
        let profiles = [(10, String::from("https://cdn.example/ten.png"))]
            .into_iter()
            .collect::<HashMap<_, _>>();

        let streams = vec![
            stream(1, 10, "blueribbon", 2),
            stream(2, 20, "blueribbon", 1),
        ];

        let ranked = join_and_rank(streams, &profiles);
        assert_eq!(
            ranked[0].profile_image_url.as_deref(),
            Some("https://cdn.example/ten.png")
        );
        assert_eq!(ranked[1].profile_image_url, None);
    }
}
