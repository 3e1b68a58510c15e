//! 通知（トースト）表示
//!
//! メッセージをセットし、3秒後に自動で消す。

use leptos::prelude::*;

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotifyLevel {
    /// レベル別の背景色
    pub fn color(&self) -> &'static str {
        match self {
            NotifyLevel::Info => "#3b82f6",
            NotifyLevel::Success => "#10b981",
            NotifyLevel::Warning => "#f59e0b",
            NotifyLevel::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub level: NotifyLevel,
}

/// 表示時間（ミリ秒）
const DISMISS_AFTER_MS: u32 = 3_000;

/// 通知を表示し、一定時間後に自動で消す
pub fn show(
    set_notification: WriteSignal<Option<Notification>>,
    message: impl Into<String>,
    level: NotifyLevel,
) {
    set_notification.set(Some(Notification {
        message: message.into(),
        level,
    }));

    gloo::timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
        set_notification.set(None);
    })
    .forget();
}
