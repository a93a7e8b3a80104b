use super::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

/// Панель вкладок и их содержимое.
///
/// Неактивные вкладки не размонтируются, а только скрываются, поэтому
/// состояние страницы (поиск, раскрытые окна) сохраняется между переключениями.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <Show
                    when=move || !tabs_store.opened.with(|tabs| tabs.is_empty())
                    fallback=|| view! {
                        <div class="tabs__empty">"Выберите раздел в меню слева"</div>
                    }
                >
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
