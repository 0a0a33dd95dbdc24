//! # 사용자 이벤트 싱크
//!
//! 서비스는 직접 로그를 남기지 않고 [`UserEvent`]를 주입된 싱크로 발행합니다.
//! 운영 환경에서는 [`LogEventSink`]가 각 이벤트를 `log` 파사드로 기록합니다.
//!
//! | 이벤트 | 레벨 |
//! |--------|------|
//! | `Created`, `Retrieved`, `Found`, `Updated`, `Deleted`, `Authenticated` | info |
//! | `DeleteFailed`, `NotFound` | warn |
//! | `AuthenticationAttempt` | debug |
//! | `AuthenticationRejected` | trace |

use log::Level;

use crate::domain::models::events::{AuthenticationFailure, UserEvent};

pub trait UserEventSink: Send + Sync {
    fn publish(&self, event: &UserEvent);
}

/// `log` 파사드로 이벤트를 기록하는 싱크
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn level(event: &UserEvent) -> Level {
        match event {
            UserEvent::Created { .. }
            | UserEvent::Retrieved { .. }
            | UserEvent::Found { .. }
            | UserEvent::Updated { .. }
            | UserEvent::Deleted { .. }
            | UserEvent::Authenticated { .. } => Level::Info,
            UserEvent::DeleteFailed { .. } | UserEvent::NotFound { .. } => Level::Warn,
            UserEvent::AuthenticationAttempt { .. } => Level::Debug,
            UserEvent::AuthenticationRejected { .. } => Level::Trace,
        }
    }

    pub fn message(event: &UserEvent) -> String {
        match event {
            UserEvent::Created { id } => format!("created user '{}'", id),
            UserEvent::Retrieved { id } => format!("retrieved user '{}'", id),
            UserEvent::Found { count, total } => format!("found {} user(s) of {} matching", count, total),
            UserEvent::Updated { id } => format!("updated user '{}'", id),
            UserEvent::Deleted { id } => format!("deleted user '{}'", id),
            UserEvent::DeleteFailed { id } => format!("user '{}' still present after delete", id),
            UserEvent::NotFound { id } => format!("user '{}' doesn't exist", id),
            UserEvent::AuthenticationAttempt { email } => format!("authenticating '{}'", email),
            UserEvent::AuthenticationRejected { reason } => match reason {
                AuthenticationFailure::UnknownEmail => "authentication rejected: unknown email".to_string(),
                AuthenticationFailure::CredentialMismatch => {
                    "authentication rejected: credential mismatch".to_string()
                }
            },
            UserEvent::Authenticated { email } => format!("authenticated '{}'", email),
        }
    }
}

impl UserEventSink for LogEventSink {
    fn publish(&self, event: &UserEvent) {
        log::log!(Self::level(event), "{}", Self::message(event));
    }
}
