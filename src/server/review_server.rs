use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::{Method, StatusCode};
use warp::{Filter, Rejection, Reply};

use crate::config::constants::{ACCESS_LOG_TARGET, CORS_ALLOWED_METHODS, CORS_ANY, CORS_MAX_AGE_SECS};
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::review_task::ReviewTask;
use crate::errors::{ReviewAgentError, ReviewAgentResult};
use crate::services::code_reviewer::CodeReviewer;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::analyze_response::AnalyzeResponse;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::error_response::ErrorResponse;
use crate::structs::fix_request::FixRequest;
use crate::structs::fix_response::FixResponse;
use crate::structs::health_response::HealthResponse;

pub struct ReviewServer {
    reviewer: Arc<CodeReviewer>,
    config: ServerConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ReviewServer {
    pub fn new(config: ServerConfig, reviewer: Arc<CodeReviewer>) -> Self {
        Self {
            reviewer,
            config,
            shutdown_tx: None,
        }
    }

    /// Binds the configured address and serves in a background task. Returns the bound address,
    /// which differs from the configured one when port 0 is requested.
    pub async fn start(&mut self) -> ReviewAgentResult<SocketAddr> {
        let addr = self.socket_addr()?;
        let routes = build_routes(Arc::clone(&self.reviewer));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (bound_addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ReviewAgentError::system_error(&format!("bind {}", addr), &e.to_string()))?;

        self.shutdown_tx = Some(shutdown_tx);
        tokio::spawn(server);

        log::info!("🌐 Review server listening on http://{}", bound_addr);
        Ok(bound_addr)
    }

    pub async fn shutdown(&mut self) -> ReviewAgentResult<()> {
        log::info!("🛑 Shutting down review server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_| {
                ReviewAgentError::system_error("shutdown", "Failed to send shutdown signal")
            })?;
        }

        log::info!("✅ Review server shutdown complete");
        Ok(())
    }

    fn socket_addr(&self) -> ReviewAgentResult<SocketAddr> {
        let ip: IpAddr = self.config.host.parse().map_err(|_| {
            ReviewAgentError::config_error(
                &format!("'{}' is not a valid IP address", self.config.host),
                Some("server.host"),
                Some("Use an address such as 0.0.0.0 or 127.0.0.1"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.config.port))
    }
}

/// Rejection raised when the completion provider fails for a request.
#[derive(Debug)]
pub struct CompletionFailed {
    pub task: ReviewTask,
    pub error: AiProviderError,
}

impl warp::reject::Reject for CompletionFailed {}

pub fn build_routes(
    reviewer: Arc<CodeReviewer>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let reviewer_filter = warp::any().map(move || Arc::clone(&reviewer));

    let health = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&HealthResponse::running()));

    let analyze = warp::path!("api" / "analyze")
        .or(warp::path!("api" / "code" / "analyze"))
        .unify()
        .and(warp::post())
        .and(warp::body::json())
        .and(reviewer_filter.clone())
        .and_then(analyze_handler);

    let fix = warp::path!("api" / "fix")
        .or(warp::path!("api" / "code" / "fix"))
        .unify()
        .and(warp::post())
        .and(warp::body::json())
        .and(reviewer_filter)
        .and_then(fix_handler);

    // Answers every OPTIONS request; anything else falls through as not found.
    let preflight = warp::method()
        .and(warp::header::optional::<String>("access-control-request-headers"))
        .and_then(preflight_handler);

    preflight
        .or(health)
        .or(analyze)
        .or(fix)
        .recover(handle_rejection)
        .with(warp::reply::with::header("access-control-allow-origin", CORS_ANY))
        .with(warp::log(ACCESS_LOG_TARGET))
}

/// Grants whatever headers the browser asks for, so any request header is permitted.
async fn preflight_handler(method: Method, requested_headers: Option<String>) -> Result<impl Reply, Rejection> {
    if method != Method::OPTIONS {
        return Err(warp::reject::not_found());
    }

    let allowed_headers = requested_headers.unwrap_or_else(|| CORS_ANY.to_string());
    let reply = warp::reply::with_header(warp::reply(), "access-control-allow-methods", CORS_ALLOWED_METHODS.join(", "));
    let reply = warp::reply::with_header(reply, "access-control-allow-headers", allowed_headers);
    Ok(warp::reply::with_header(reply, "access-control-max-age", CORS_MAX_AGE_SECS.to_string()))
}

async fn analyze_handler(request: AnalyzeRequest, reviewer: Arc<CodeReviewer>) -> Result<impl Reply, Rejection> {
    let analysis = reviewer
        .analyze(&request.language, &request.code)
        .await
        .map_err(|error| warp::reject::custom(CompletionFailed { task: ReviewTask::Analyze, error }))?;

    Ok(warp::reply::json(&AnalyzeResponse { analysis }))
}

async fn fix_handler(request: FixRequest, reviewer: Arc<CodeReviewer>) -> Result<impl Reply, Rejection> {
    let fixed_code = reviewer
        .fix(&request.language, &request.code)
        .await
        .map_err(|error| warp::reject::custom(CompletionFailed { task: ReviewTask::Fix, error }))?;

    Ok(warp::reply::json(&FixResponse { fixed_code }))
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, body) = if let Some(failure) = err.find::<CompletionFailed>() {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(format!("Failed to {} code: {}", failure.task, failure.error)),
        )
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::new("Invalid request body").with_detail(e.to_string()),
        )
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorResponse::new("Unsupported media type").with_detail("Request body must be application/json"),
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, ErrorResponse::new("Content-Length required"))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, ErrorResponse::new("Payload too large"))
    } else if let Some(e) = err.find::<warp::reject::InvalidHeader>() {
        (StatusCode::BAD_REQUEST, ErrorResponse::new("Invalid header").with_detail(e.to_string()))
    } else if let Some(e) = err.find::<warp::reject::MissingHeader>() {
        (StatusCode::BAD_REQUEST, ErrorResponse::new("Missing header").with_detail(e.to_string()))
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, ErrorResponse::new("Not found"))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, ErrorResponse::new("Method not allowed"))
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new("Internal server error"))
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
