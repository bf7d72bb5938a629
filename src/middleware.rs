use actix_web::{
    Error,
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Next,
};

use crate::errors::{classify, render_failure};

/// Renders every error coming out of the wrapped services.
///
/// Errors that implement [`ClassifiedError`](crate::errors::ClassifiedError)
/// are shown with their kind and message. Anything else becomes a generic 500
/// so that internal details never reach the client. Each failure is logged
/// here and nowhere else.
///
/// Install with `App::wrap(actix_web::middleware::from_fn(error_dispatch))`.
pub async fn error_dispatch<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let path = req.path().to_owned();

    let res = match next.call(req).await {
        Ok(res) => res,
        Err(err) => {
            tracing::error!(error = %err, path = %path, "Request failed");

            let response = render_failure(classify(&err));
            return Err(InternalError::from_response(err.to_string(), response).into());
        }
    };

    let Some(err) = res.response().error() else {
        return Ok(res.map_into_left_body());
    };

    tracing::error!(error = %err, path = %path, "Request failed");

    let response = render_failure(classify(err));
    Ok(res.into_response(response).map_into_right_body())
}
