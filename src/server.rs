//! HTTP surface: page contexts, sitemaps and robots.txt.

use crate::config::Config;
use crate::context::SiteContext;
use crate::error::{CatalogError, SiteError};
use crate::i18n::{html_attributes, resolve, CatalogCache, HtmlAttributes, Locale};
use crate::nav::NavModel;
use crate::seo::{generate_sitemap, MetadataBundle, RobotsPolicy};
use crate::site::{match_page, sitemap_routes};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ctx: Arc<SiteContext>,
    pub catalogs: Arc<CatalogCache>,
}

impl AppState {
    pub fn new(config: Config, ctx: SiteContext, catalogs: CatalogCache) -> Self {
        Self {
            config: Arc::new(config),
            ctx: Arc::new(ctx),
            catalogs: Arc::new(catalogs),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    NotFound(#[from] SiteError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(e) => (StatusCode::NOT_FOUND, e.to_string()),
            AppError::Catalog(e) => {
                error!("Failed to render page: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Message catalog unavailable".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Everything a renderer needs for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub locale: Locale,
    pub path: String,
    pub html: HtmlAttributes,
    pub metadata: MetadataBundle,
    pub head: String,
    pub nav: NavModel,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/:locale/sitemap.xml", get(locale_sitemap_xml))
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let policy = RobotsPolicy::for_site(&state.ctx);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        policy.to_txt(),
    )
}

fn xml_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
}

async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let sitemap = generate_sitemap(&state.ctx, &sitemap_routes(), Utc::now());
    xml_response(sitemap.to_xml(&state.ctx))
}

/// Per-locale sitemap. Only prefixed locales have one; the default locale's
/// entries live at `/sitemap.xml`.
async fn locale_sitemap_xml(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let locale = state
        .ctx
        .registry
        .parse(&code)
        .filter(|locale| !state.ctx.registry.is_default(*locale))
        .ok_or(SiteError::RouteNotFound {
            kind: "sitemap",
            slug: code,
        })?;

    let sitemap = generate_sitemap(&state.ctx, &sitemap_routes(), Utc::now()).for_locale(locale);
    Ok(xml_response(sitemap.to_xml(&state.ctx)))
}

async fn page(State(state): State<AppState>, uri: Uri) -> Result<Json<PageContext>, AppError> {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let resolved = resolve(&state.ctx.registry, path);
    debug!(
        "Resolved '{}' to locale '{}' with remainder '{}'",
        path, resolved.locale, resolved.remainder
    );

    let page = match_page(&resolved.remainder)?;
    let catalog = state.catalogs.get(resolved.locale).await?;
    let metadata = page.metadata(&state.ctx, &catalog, resolved.locale);

    Ok(Json(PageContext {
        locale: resolved.locale,
        path: path.to_string(),
        html: html_attributes(&state.ctx.registry, resolved.locale),
        head: metadata.head_links(&state.ctx.registry),
        metadata,
        nav: NavModel::build(&state.ctx, &catalog, resolved.locale, path),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = AppError::from(SiteError::RouteNotFound {
            kind: "service",
            slug: "atlantis".to_string(),
        });
        assert_eq!(err.to_string(), "No service page for 'atlantis'");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_catalog_error_status() {
        let err = AppError::from(CatalogError::NotFound {
            locale: Locale::Pt,
            reason: "missing".to_string(),
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
