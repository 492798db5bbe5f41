use super::types::{ValidationErrorResponse, ValidationIssue};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{StatusCode, header},
    response::Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

type UnprocessableBody = (StatusCode, Json<ValidationErrorResponse>);

/// JSON body extractor that reports every rejection as `422 Unprocessable Entity`.
///
/// Plain `Json` answers syntax errors with 400 and a text body; clients of
/// this API expect a structured `detail` list for any unusable body. A body
/// sent without any `Content-Type` is still parsed as JSON; only an explicit
/// non-JSON type is refused.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UnprocessableBody;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            return from_untyped_body(req, state).await.map(Self);
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err(unprocessable(rejection_kind(&rejection), rejection.body_text()))
            }
        }
    }
}

async fn from_untyped_body<T, S>(req: Request, state: &S) -> Result<T, UnprocessableBody>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
        debug!("Unreadable request body: {}", rejection.body_text());
        unprocessable("body_unreadable", rejection.body_text())
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        debug!("Rejected request body without content type: {}", e);
        let kind = if e.is_data() {
            "value_error"
        } else {
            "json_invalid"
        };
        unprocessable(kind, e.to_string())
    })
}

fn rejection_kind(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::JsonDataError(_) => "value_error",
        JsonRejection::MissingJsonContentType(_) => "content_type_missing",
        _ => "body_unreadable",
    }
}

fn unprocessable(kind: &str, msg: String) -> UnprocessableBody {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse {
            detail: vec![ValidationIssue {
                loc: vec!["body".to_string()],
                msg,
                kind: kind.to_string(),
            }],
        }),
    )
}
