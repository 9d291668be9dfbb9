use crate::bo::ClassDescriptor;
use crate::context::AppContext;
use crate::metrics::MetricsReport;
use crate::models::{Translation, TranslationUrlParams, TranslationValidator};
use crate::server::auth::require_api_key;
use crate::server::ApiError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub classes: usize,
    pub translations: usize,
}

/// One field of a registered class
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSummary {
    pub name: String,
    pub display_name: String,
    pub required: bool,
}

/// A registered class and its fields
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassSummary {
    pub name: String,
    pub fields: Vec<FieldSummary>,
}

impl From<&ClassDescriptor> for ClassSummary {
    fn from(class: &ClassDescriptor) -> Self {
        Self {
            name: class.name().to_string(),
            fields: class
                .fields()
                .iter()
                .map(|field| FieldSummary {
                    name: field.name().to_string(),
                    display_name: field.display_name().to_string(),
                    required: field.is_required(),
                })
                .collect(),
        }
    }
}

pub(super) async fn health(
    State(context): State<AppContext>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        started_at: context.started_at,
        classes: context.registry.len(),
        translations: context.store.count().await?,
    }))
}

pub(super) async fn metrics(State(context): State<AppContext>) -> Json<MetricsReport> {
    Json(context.metrics.report())
}

pub(super) async fn list_classes(State(context): State<AppContext>) -> Json<Vec<ClassSummary>> {
    Json(context.registry.classes().map(ClassSummary::from).collect())
}

pub(super) async fn get_class(
    State(context): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Json<ClassSummary>, ApiError> {
    let class = context.registry.require(&name)?;
    Ok(Json(ClassSummary::from(class)))
}

/// `GET /translations/:lang?namespace=..&key=..`
pub(super) async fn find_translations(
    State(context): State<AppContext>,
    Path(lang): Path<String>,
    params: Result<Query<TranslationUrlParams>, QueryRejection>,
) -> Result<Json<Vec<Translation>>, ApiError> {
    let Query(params) = params?;
    let found = context.store.find(&lang, &params).await?;
    debug!(
        lang,
        namespace = ?params.namespace,
        key = ?params.key,
        results = found.len(),
        "Translation lookup"
    );
    context.metrics.record_lookup(!found.is_empty());
    Ok(Json(found))
}

pub(super) async fn get_translation(
    State(context): State<AppContext>,
    Path((lang, namespace, key)): Path<(String, String, String)>,
) -> Result<Json<Translation>, ApiError> {
    let found = context.store.get(&lang, &namespace, &key).await?;
    context.metrics.record_lookup(found.is_some());

    found.map(Json).ok_or_else(|| {
        ApiError::NotFound(format!("no translation for {}/{}/{}", lang, namespace, key))
    })
}

pub(super) async fn put_translation(
    State(context): State<AppContext>,
    headers: HeaderMap,
    body: Result<Json<Translation>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    require_api_key(&headers, context.api_key.as_deref())?;
    let Json(translation) = body?;

    let report = TranslationValidator::validate(&translation);
    if report.has_errors() {
        return Err(ApiError::Invalid(report.errors));
    }

    context.store.upsert(&translation).await?;
    context.metrics.record_write();
    info!("Stored translation {:?}", translation.identity());
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn delete_translation(
    State(context): State<AppContext>,
    headers: HeaderMap,
    Path((lang, namespace, key)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    require_api_key(&headers, context.api_key.as_deref())?;

    if context.store.delete(&lang, &namespace, &key).await? {
        context.metrics.record_delete();
        info!("Deleted translation {}/{}/{}", lang, namespace, key);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "no translation for {}/{}/{}",
            lang, namespace, key
        )))
    }
}
