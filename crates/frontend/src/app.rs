use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::{NotificationHost, NotificationKind, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::shared::settings::fetch_settings;
use crate::usecases::u501_configure_order::state::{OrderStore, OrderStoreProvider};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let notifications = NotificationService::new();
    provide_context(notifications);

    // Каталог и реестр появляются после загрузки настроек
    let store = RwSignal::new(None::<OrderStore>);
    let (boot_error, set_boot_error) = signal(None::<String>);

    spawn_local(async move {
        let (settings, settings_error) = fetch_settings().await;
        if let Some(err) = settings_error {
            notifications.notify(
                NotificationKind::Warning,
                "Настройки не применены",
                format!("Используются значения по умолчанию: {}", err),
            );
        }

        match OrderStore::bootstrap(settings) {
            Ok(s) => store.set(Some(s)),
            Err(e) => {
                log::error!("catalog bootstrap failed: {}", e);
                set_boot_error.set(Some(e));
            }
        }
    });

    view! {
        {move || match (store.get(), boot_error.get()) {
            (Some(store), _) => view! {
                <OrderStoreProvider store=store>
                    <AppRoutes />
                </OrderStoreProvider>
            }.into_any(),
            (None, Some(err)) => view! {
                <div class="app-boot app-boot--error">
                    <div class="alert alert--error">{format!("Не удалось загрузить каталог: {}", err)}</div>
                </div>
            }.into_any(),
            (None, None) => view! {
                <div class="app-boot">"Загрузка каталога..."</div>
            }.into_any(),
        }}
        <NotificationHost />
    }
}
