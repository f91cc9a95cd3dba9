//! Mesto 백엔드
//!
//! 사용자 프로필과 사진 카드를 관리하는 REST API 서버입니다.
//! 쿠키 기반 JWT 인증, CORS 허용 목록, 요청 빈도 제한, 통합 에러 처리를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Middlewares   │ ← CORS, Rate Limit, 보안 헤더, 인증 게이트, 에러 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / CardStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← users, cards
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use mesto_backend::app::{create_app, AppState};
//!
//! let state = AppState::new(config, Arc::new(users), Arc::new(cards));
//! HttpServer::new(move || create_app(state.clone()))
//!     .bind(config.server.bind_address())?
//!     .run()
//!     .await
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
