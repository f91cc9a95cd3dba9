use std::sync::Arc;

use actix_web::HttpServer;
use env_logger::Env;
use log::{error, info, warn};

use mesto_backend::app::{create_app, AppState, PIPELINE};
use mesto_backend::config::{AppConfig, AuthMode, DEFAULT_JWT_SECRET};
use mesto_backend::db::Database;
use mesto_backend::repositories::{CardRepository, UserRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env에서 RUST_LOG를 읽을 수 있도록 로깅보다 먼저 로드
    let env_file = load_env_file();
    init_logging();

    info!("🚀 Mesto 백엔드 시작중...");
    info!("{}", env_file);

    let config = AppConfig::from_env();
    log_config_summary(&config);

    let database = Database::connect(&config.database)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let users = UserRepository::new(&database);
    let cards = CardRepository::new(&database);

    if config.database.auto_index {
        ensure_indexes(&users, &cards).await;
    }

    let bind_address = config.server.bind_address();
    let state = AppState::new(config, Arc::new(users), Arc::new(cards));

    info!("🧱 파이프라인: {}", PIPELINE.join(" → "));
    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);

    HttpServer::new(move || create_app(state.clone()))
        .bind(bind_address)?
        .run()
        .await
}

/// PROFILE 환경변수에 따라 .env 파일을 로드하고 결과 메시지를 돌려줍니다.
///
/// * `PROFILE=dev` - `.env.dev`
/// * `PROFILE=prod` - `.env.prod`
/// * 그 외 - `.env`
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    match dotenv::from_filename(filename) {
        Ok(_) => format!("📄 {} 파일 로드 됨 (profile: {})", filename, profile),
        Err(e) => format!("📄 {} 파일 없음, 프로세스 환경변수 사용 ({})", filename, e),
    }
}

/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn log_config_summary(config: &AppConfig) {
    info!("⚙️ 실행 환경: {:?}", config.environment);
    info!("⚙️ 인증 모드: {}", config.auth.mode.as_str());
    info!("⚙️ CORS 허용 Origin: {}", config.cors.allowed_origins.join(", "));
    info!(
        "🛡️ Rate Limiting: {}초당 {}요청",
        config.rate_limit.window.as_secs(),
        config.rate_limit.max_requests
    );

    if config.auth.mode == AuthMode::Stub {
        warn!("⚠️ 고정 식별자 모드입니다. 모든 요청이 {} 로 처리됩니다", config.auth.stub_user_id);
    }
    if config.auth.jwt_secret == DEFAULT_JWT_SECRET {
        warn!("⚠️ 기본 JWT_SECRET 사용 중");
    }
}

/// 인덱스 생성 실패는 서버 시작을 막지 않습니다.
async fn ensure_indexes(users: &UserRepository, cards: &CardRepository) {
    if let Err(e) = users.create_indexes().await {
        error!("users 인덱스 생성 실패: {}", e);
    }
    if let Err(e) = cards.create_indexes().await {
        error!("cards 인덱스 생성 실패: {}", e);
    }
}
