//! Channel Template API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/channels | GET | 列出所有模板 (内置在前) |
//! | /api/channels/{name} | GET | 获取单个模板 |
//! | /api/channels/{name} | PUT | 保存自定义模板 |
//! | /api/channels/{name} | DELETE | 删除自定义模板 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/channels", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list)).route(
        "/{name}",
        get(handler::get_by_name)
            .put(handler::save)
            .delete(handler::delete),
    )
}
