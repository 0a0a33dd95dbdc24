//! 자격 증명 변환 설정

use std::env;

use super::Environment;

const DEFAULT_PEPPER: &str = "user-service-dev-pepper";

pub struct CredentialConfig;

impl CredentialConfig {
    /// 비밀번호 변환에 섞이는 서버 측 비밀값 (`CREDENTIAL_PEPPER`)
    ///
    /// 값이 바뀌면 기존에 저장된 모든 자격 증명이 더 이상 일치하지 않으므로
    /// 운영 중에는 변경하면 안 됩니다.
    pub fn pepper() -> String {
        Self::pepper_from(env::var("CREDENTIAL_PEPPER").ok(), &Environment::current())
    }

    pub fn pepper_from(raw: Option<String>, environment: &Environment) -> String {
        match raw {
            Some(pepper) if !pepper.trim().is_empty() => pepper,
            _ => {
                if environment.is_production() {
                    log::warn!("CREDENTIAL_PEPPER not set, using default (not secure for production!)");
                }
                DEFAULT_PEPPER.to_string()
            }
        }
    }
}
