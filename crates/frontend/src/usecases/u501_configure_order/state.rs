use contracts::domain::a001_product::mock_data::demo_catalog;
use contracts::shared::config::OrderSettings;
use contracts::usecases::u501_configure_order::OrderSession;
use leptos::prelude::*;
use std::sync::Arc;

/// Реактивное хранилище сессии заказа.
///
/// Одна сессия на приложение: сетка размеров, окно проверки и таблица
/// вариантов читают и меняют один и тот же реестр.
#[derive(Clone, Copy)]
pub struct OrderStore {
    pub session: RwSignal<OrderSession>,
}

impl OrderStore {
    /// Собрать демо-каталог и пустую сессию
    pub fn bootstrap(settings: OrderSettings) -> Result<Self, String> {
        let catalog = demo_catalog(settings.catalog.seed).map_err(|e| format!("{:#}", e))?;
        log::info!("catalog ready: {} products", catalog.len());

        Ok(Self {
            session: RwSignal::new(OrderSession::new(Arc::new(catalog), settings)),
        })
    }

    pub fn settings(&self) -> OrderSettings {
        self.session.with_untracked(|s| s.settings().clone())
    }
}

pub fn use_order_store() -> OrderStore {
    use_context::<OrderStore>().expect("OrderStore not provided in context")
}

#[component]
pub fn OrderStoreProvider(store: OrderStore, children: Children) -> impl IntoView {
    provide_context(store);
    children()
}
