//! 블로그 HTTP 핸들러
//!
//! 생성 시 `draft` 상태이며, 발행은 `PATCH {"status": "published"}`로 합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::{json, Map, Value};

use crate::core::AppState;
use crate::domain::dto::blogs::{BlogListQuery, CreateBlogRequest};
use crate::errors::AppError;
use crate::utils::json::{document_to_json, documents_to_json};

#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<AppState>,
    payload: web::Json<CreateBlogRequest>,
) -> Result<HttpResponse, AppError> {
    let id = state.blogs.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Blog created successfully",
        "blogId": id.to_hex(),
    })))
}

/// `GET /blogs?status=published`
#[get("/blogs")]
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> Result<HttpResponse, AppError> {
    let blogs = state.blogs.list(query.status.as_deref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(blogs)))
}

#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blog = state.blogs.get(&id).await?;
    Ok(HttpResponse::Ok().json(document_to_json(blog)))
}

#[patch("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.blogs.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Blog updated",
        "matchedCount": outcome.matched,
        "modifiedCount": outcome.modified,
    })))
}

#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = state.blogs.delete(&id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Blog deleted",
        "deletedCount": deleted,
    })))
}
