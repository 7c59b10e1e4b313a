//! Channel Template API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{ChannelTemplate, ChannelTemplateSave};

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_rules};
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/channels - 获取所有渠道模板
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<ChannelTemplate>>> {
    let templates = state.templates.read().await;
    let list = templates.list().into_iter().cloned().collect();
    Ok(ApiResponse::success(list))
}

/// GET /api/channels/:name - 获取单个渠道模板
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<ApiResponse<ChannelTemplate>> {
    let templates = state.templates.read().await;
    let template = templates
        .get(&name)
        .cloned()
        .ok_or_else(|| AppError::template_not_found(&name))?;
    Ok(ApiResponse::success(template))
}

/// PUT /api/channels/:name - 保存自定义渠道模板 (新建或覆盖)
pub async fn save(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<ChannelTemplateSave>,
) -> AppResult<ApiResponse<ChannelTemplate>> {
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_rules(&payload.rules)?;

    let rule_count = payload.rules.len();
    let mut templates = state.templates.write().await;
    let saved = templates.save_custom(&name, payload.rules)?.clone();
    drop(templates);

    tracing::info!(channel = %saved.name, rules = rule_count, "Channel template saved");
    Ok(ApiResponse::success(saved))
}

/// DELETE /api/channels/:name - 删除自定义渠道模板
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<ApiResponse<ChannelTemplate>> {
    let removed = state.templates.write().await.remove_custom(&name)?;

    tracing::info!(channel = %removed.name, "Channel template deleted");
    Ok(ApiResponse::success(removed))
}
