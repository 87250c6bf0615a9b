//! 블로그 요청 DTO

use mongodb::bson::DateTime;
use serde::Deserialize;

use crate::domain::entities::blogs::{Blog, BlogStatus};
use crate::errors::AppError;
use crate::utils::string_utils::require_all;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
}

impl CreateBlogRequest {
    /// 새 글은 항상 `draft` 상태로 시작합니다.
    pub fn into_entity(self) -> Result<Blog, AppError> {
        let [title, thumbnail, content] = require_all([
            ("title", self.title),
            ("thumbnail", self.thumbnail),
            ("content", self.content),
        ])?;

        Ok(Blog {
            id: None,
            title,
            thumbnail,
            content,
            status: BlogStatus::Draft,
            created_at: DateTime::now(),
        })
    }
}

/// `GET /blogs?status=published`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_defaults_to_draft() {
        let blog = CreateBlogRequest {
            title: Some("Why donate".to_string()),
            thumbnail: Some("https://img/1.png".to_string()),
            content: Some("<p>hello</p>".to_string()),
        }
        .into_entity()
        .unwrap();

        assert_eq!(blog.status, BlogStatus::Draft);
    }

    #[test]
    fn test_blog_requires_content() {
        let result = CreateBlogRequest {
            title: Some("Why donate".to_string()),
            thumbnail: Some("https://img/1.png".to_string()),
            content: None,
        }
        .into_entity();

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
