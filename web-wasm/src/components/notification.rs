//! 通知トーストコンポーネント
//!
//! 画面右上に表示される一時的な通知。表示時間の管理は
//! notifyモジュール側で行う。

use crate::notify::Notification;
use leptos::prelude::*;

#[component]
pub fn NotificationToast(notification: ReadSignal<Option<Notification>>) -> impl IntoView {
    view! {
        <Show when=move || notification.get().is_some()>
            {move || {
                notification
                    .get()
                    .map(|n| {
                        view! {
                            <div
                                class="notification"
                                style:background-color=n.level.color()
                            >
                                {n.message}
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
