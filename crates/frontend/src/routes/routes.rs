use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Оболочка с вкладками. Навигация идёт через вкладки, активная вкладка
/// отражается в `?active=...`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    // Без ссылки в URL стартуем с каталога
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab("a001_product", &crate::layout::tabs::tab_label_for_key("a001_product"));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
