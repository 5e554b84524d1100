use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::common::ApiError;

/// Время показа уведомления
const NOTICE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

/// Всплывающие уведомления о результате действий пользователя
#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(NoticeKind::Success, title.into(), None);
    }

    /// Ошибка API: заголовок = код ошибки, текст = сообщение бэкенда
    pub fn api_error(&self, err: &ApiError) {
        self.push(
            NoticeKind::Error,
            format!("Ошибка: {}", err.error_code),
            Some(err.message.clone()),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, title: String, description: Option<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                title,
                description,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            svc.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Слой уведомлений в правом верхнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || svc.notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let intent = match notice.kind {
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Error => MessageBarIntent::Error,
                    };
                    let id = notice.id;
                    view! {
                        <div class="notification-host__item" on:click=move |_| svc.dismiss(id)>
                            <MessageBar intent=intent>
                                <MessageBarBody>
                                    <MessageBarTitle>{notice.title}</MessageBarTitle>
                                    {notice.description}
                                </MessageBarBody>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
