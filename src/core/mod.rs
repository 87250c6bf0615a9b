//! 애플리케이션 코어
//!
//! 시작 시 한 번 조립되어 `web::Data`로 모든 워커에 공유되는 [`AppState`]를 제공합니다.

pub mod state;

pub use state::AppState;
