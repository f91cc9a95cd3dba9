//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결을 담당하는 모듈입니다.
//! 프로세스 시작 시 한 번 연결하고, 생성된 핸들을 리포지토리에 명시적으로 주입합니다.
//! 재연결/백오프 정책은 드라이버 기본 동작에 맡깁니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! let users = UserRepository::new(&database);
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// URI에 데이터베이스 이름이 없을 때 사용하는 기본값
pub const DEFAULT_DATABASE_NAME: &str = "mestodb";

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 커넥션 풀을 가지므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// MongoDB에 연결하고 `ping`으로 연결 상태를 검증합니다.
    ///
    /// 데이터베이스 이름은 URI 경로(`mongodb://host:27017/mestodb`)에서 가져옵니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some("mesto_backend".to_string());

        let database_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }
}
