use super::api::save_configuration;
use super::review::OrderReview;
use super::size_grid::SizeGrid;
use super::state::use_order_store;
use crate::layout::notification_service::{NotificationKind, NotificationService};
use crate::shared::components::Autocomplete;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Настройка заказа: товар → цвет → количества по размерам → проверка
#[component]
pub fn ConfigureOrderView(on_close: Callback<()>) -> impl IntoView {
    let store = use_order_store();
    let notifications = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    let product_options = Memo::new(move |_| store.session.with(|s| s.product_options()));
    let color_options = Memo::new(move |_| store.session.with(|s| s.color_options()));

    let product_value = Signal::derive(move || {
        store.session.with(|s| {
            s.selection()
                .product_id()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default()
        })
    });
    let color_value = Signal::derive(move || {
        store
            .session
            .with(|s| s.selection().color().unwrap_or_default().to_string())
    });

    let selected_name = Memo::new(move |_| {
        store
            .session
            .with(|s| s.selected_product().map(|p| p.name.clone()))
    });
    let has_product = move || selected_name.with(|n| n.is_some());
    let has_pair = move || store.session.with(|s| s.selection().active_pair().is_some());
    let has_required = Memo::new(move |_| store.session.with(|s| s.has_required_quantities()));
    let is_saving = Memo::new(move |_| store.session.with(|s| s.is_saving()));

    let on_product = Callback::new(move |id: String| {
        store.session.update(|s| {
            s.select_product(&id);
        });
    });
    let on_color = Callback::new(move |color: String| {
        store.session.update(|s| s.select_color(&color));
    });

    let show_review = RwSignal::new(false);

    let save = move || {
        spawn_local(async move {
            match save_configuration(store).await {
                Ok(receipt) => {
                    notifications.notify(NotificationKind::Success, receipt.title(), receipt.message());
                }
                Err(e) => {
                    log::warn!("save refused: {}", e);
                    notifications.notify(NotificationKind::Error, "Сохранение не выполнено", e);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="u501_configure_order--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("shopping-cart")}
                    <h1 class="page__title">"Новый заказ"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                        " Назад"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="configure__selectors">
                    <Autocomplete
                        options=product_options
                        value=product_value
                        on_select=on_product
                        label="Товар"
                        placeholder="Начните вводить название..."
                    />
                    <Autocomplete
                        options=color_options
                        value=color_value
                        on_select=on_color
                        label="Цвет"
                        placeholder="Выберите цвет..."
                        disabled=Signal::derive(move || !has_product())
                    />
                </div>

                <Show when=has_pair>
                    <div class="configure__banner">
                        "Заказ: "
                        <strong>{move || selected_name.get().unwrap_or_default()}</strong>
                        " - "
                        <strong>{move || color_value.get()}</strong>
                    </div>
                </Show>

                <Show
                    when=has_pair
                    fallback=move || {
                        let text = if has_product() {
                            "Выберите цвет, чтобы увидеть размеры"
                        } else {
                            "Выберите товар, чтобы начать заказ"
                        };
                        view! { <div class="configure__empty">{text}</div> }
                    }
                >
                    <SizeGrid />
                </Show>

                <div class="configure__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| save()
                        disabled=Signal::derive(move || is_saving.get() || !has_pair())
                    >
                        {move || if is_saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_review.set(true)
                        disabled=Signal::derive(move || !has_required.get())
                    >
                        "Далее"
                        {icon("chevron-right")}
                    </Button>
                </div>
            </div>

            <Show when=move || show_review.get()>
                <Modal
                    title="Проверка заказа".to_string()
                    on_close=Callback::new(move |_| show_review.set(false))
                    footer=Box::new(move || view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                show_review.set(false);
                                save();
                            }
                            disabled=Signal::derive(move || is_saving.get())
                        >
                            {icon("check")}
                            " Сохранить"
                        </Button>
                    }.into_any())
                >
                    <OrderReview />
                </Modal>
            </Show>
        </PageFrame>
    }
}
