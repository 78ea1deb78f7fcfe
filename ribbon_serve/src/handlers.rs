use axum::{
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
    Extension, Json,
};

use ribbon_helix::StreamDirectory;

use crate::response;

pub async fn streams(Extension(directory): Extension<StreamDirectory>) -> AxumResponse {
    log::debug!("request for the live stream list");
    match directory.get_streams().await {
        Ok(streams) => {
            log::trace!("returning {} streams", streams.len());
            json(response::Streams { streams })
        }
        Err(error) => {
            // log the chain, hand the client a generic message
            let error = anyhow::Error::new(error);
            log::warn!("could not fetch streams: {error:#}");
            make_error(500, "could not fetch streams")
        }
    }
}

fn json<T: serde::Serialize + 'static + Send>(data: T) -> AxumResponse {
    Json(data).into_response()
}

fn make_error(code: u16, msg: impl ToString + Send) -> AxumResponse {
    let status_code = StatusCode::from_u16(code).expect("valid status code");
    let json = json(response::Error {
        error: msg.to_string(),
    });
    (status_code, json).into_response()
}
