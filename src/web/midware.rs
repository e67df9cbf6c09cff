use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::web::{log, Error, REQUEST_ID_HEADER};

/// Turns an `Error` stashed in the response extensions into the JSON body the client sees
/// and logs every request.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    // Set by `PropagateRequestIdLayer`, which runs on the response before this mapper.
    let req_id = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let web_error = resp.extensions().get::<Arc<Error>>().map(Arc::as_ref);
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    if let (Some(er), Some((status, _))) = (web_error, client_status_and_error.as_ref()) {
        if status.is_server_error() {
            tracing::error!("SERVER ERROR: {er:?} REQ_ID: {req_id}");
        }
    }

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let mut res = (*status, Json(cl_err.body(&req_id))).into_response();
        // The replacement response has to carry the request id as well.
        if let Ok(value) = HeaderValue::from_str(&req_id) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    });

    log::log_request(
        &req_id,
        &req_method,
        &uri,
        resp.status(),
        web_error,
        client_status_and_error.as_ref(),
    );

    err_resp.unwrap_or(resp)
}
