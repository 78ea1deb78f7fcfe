#[derive(::serde::Deserialize)]
pub struct Data<T> {
    pub data: Vec<T>,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct Stream {
    #[serde(deserialize_with = "crate::serde::from_str")]
    pub id: u64,

    #[serde(deserialize_with = "crate::serde::from_str")]
    pub user_id: u64,
    pub user_login: String,
    pub user_name: String,

    pub title: String,
    pub game_name: String,
    pub thumbnail_url: String,
    pub viewer_count: u64,

    #[serde(deserialize_with = "crate::serde::utc_date_time")]
    pub started_at: time::OffsetDateTime,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct User {
    #[serde(deserialize_with = "crate::serde::from_str")]
    pub id: u64,
    pub profile_image_url: String,
}

#[derive(Clone, Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EnrichedStream {
    pub id: u64,
    pub user_id: u64,
    pub user_login: String,
    pub user_name: String,

    pub title: String,
    pub game_name: String,
    pub thumbnail_url: String,
    pub viewer_count: u64,

    #[serde(
        serialize_with = "crate::serde::rfc3339",
        deserialize_with = "crate::serde::utc_date_time"
    )]
    pub started_at: time::OffsetDateTime,

    pub profile_image_url: Option<String>,
}
