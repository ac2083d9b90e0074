//! Public download through a signed share link. No session required.

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use folio_core::error::AppError;

use crate::dto::request::DownloadQuery;
use crate::error::ApiResult;
use crate::state::AppState;

/// Characters left unescaped in the Content-Disposition filename.
const FILENAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Cache policy for shared downloads.
const CACHE_CONTROL: &str = "private, max-age=3600";

/// GET /d/{key}?e=&s=
pub async fn download_shared(
    State(state): State<AppState>,
    Path(encoded_key): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> ApiResult<Response> {
    let (Some(expires), Some(signature)) = (query.e, query.s) else {
        return Err(AppError::validation("Missing parameters").into());
    };

    let result = state
        .download_service
        .download_shared(&encoded_key, &expires, &signature)
        .await?;

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&result.filename),
        )
        .header(header::CACHE_CONTROL, CACHE_CONTROL);
    if let Some(length) = result.content_length {
        builder = builder.header(header::CONTENT_LENGTH, length);
    }

    let response = builder
        .body(Body::from_stream(result.body))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;
    Ok(response)
}

/// `attachment; filename="<percent-encoded name>"`.
pub fn content_disposition(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"",
        utf8_percent_encode(filename, FILENAME_SAFE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_encoding() {
        assert_eq!(
            content_disposition("a b.txt"),
            "attachment; filename=\"a%20b.txt\""
        );
        assert_eq!(
            content_disposition("résumé (1).pdf"),
            "attachment; filename=\"r%C3%A9sum%C3%A9%20(1).pdf\""
        );
        assert_eq!(
            content_disposition("quote\".txt"),
            "attachment; filename=\"quote%22.txt\""
        );
    }
}
