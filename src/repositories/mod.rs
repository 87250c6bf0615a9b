//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 시작 시 한 번 생성되며, 같은 [`DocumentStore`] 핸들을
//! `Arc<dyn DocumentStore>`로 공유합니다. 저장소 구현(MongoDB, 메모리)은
//! 리포지토리에서 보이지 않습니다.
//!
//! [`DocumentStore`]: crate::db::DocumentStore
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::MemoryStore;
//! use crate::repositories::users::UserRepository;
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//! let user_repo = UserRepository::new(store.clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod blogs;
pub mod collection;
pub mod donation_requests;
pub mod funds;
pub mod geo;
pub mod users;

pub use blogs::BlogRepository;
pub use donation_requests::DonationRequestRepository;
pub use funds::FundRepository;
pub use geo::{GeoLevel, GeoRepository};
pub use users::UserRepository;
