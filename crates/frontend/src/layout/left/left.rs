use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая колонка; скрывается кнопкой в шапке
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
