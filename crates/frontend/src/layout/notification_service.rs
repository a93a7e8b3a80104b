use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Через сколько миллисекунд уведомление скрывается само
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Сервис всплывающих уведомлений (fire-and-forget)
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Показать уведомление; оно исчезнет через `AUTO_DISMISS_MS`
    pub fn notify(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let notification = Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        };
        log::info!("notification #{}: {} - {}", id, notification.title, notification.message);
        self.items.update(|items| items.push(notification));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Стек уведомлений в правом нижнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{n.title}</div>
                                <div class="toast__message">{n.message}</div>
                            </div>
                            <button class="button button--icon toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
