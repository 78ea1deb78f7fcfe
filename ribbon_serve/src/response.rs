use ribbon_helix::data::EnrichedStream;

#[derive(serde::Serialize)]
pub struct Streams {
    pub streams: Vec<EnrichedStream>,
}

#[derive(serde::Serialize)]
pub struct Error {
    pub error: String,
}
