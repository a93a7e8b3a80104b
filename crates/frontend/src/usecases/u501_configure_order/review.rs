use super::state::use_order_store;
use crate::shared::components::table::{format_money, format_quantity};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_inventory_ledger::{parse_quantity, InventoryKey};
use contracts::projections::p902_order_review::{group_lines, ReviewGroup, ReviewLine};
use leptos::prelude::*;
use thaw::*;

fn group_key(group: &ReviewGroup) -> String {
    format!("{}|{}", group.product_id, group.color)
}

fn line_key(line: &ReviewLine) -> String {
    format!("{}|{}|{}", line.key.product_id, line.key.color, line.key.size)
}

/// Проверка заказа: все ненулевые строки реестра с правкой количества
/// и итоги по всему заказу.
#[component]
pub fn OrderReview() -> impl IntoView {
    let store = use_order_store();
    let settings = store.settings();
    let currency = StoredValue::new(settings.pricing.currency.clone());

    let groups = Memo::new(move |_| store.session.with(|s| group_lines(&s.review_lines())));
    let totals = Memo::new(move |_| store.session.with(|s| s.order_totals()));

    let money = move |value: f64| currency.with_value(|c| format_money(value, c));

    view! {
        <div class="order-review">
            <Show
                when=move || !groups.with(|g| g.is_empty())
                fallback=|| view! {
                    <div class="order-review__empty">"Заказ пуст: укажите количество хотя бы для одного размера"</div>
                }
            >
                <For
                    each=move || groups.get()
                    key=group_key
                    children=move |group: ReviewGroup| {
                        let product_id = group.product_id.clone();
                        let color = group.color.clone();
                        let group_quantity = move || {
                            groups.with(|gs| {
                                gs.iter()
                                    .find(|g| g.product_id == product_id && g.color == color)
                                    .map(|g| g.quantity())
                                    .unwrap_or(0)
                            })
                        };
                        let group_id = group_key(&group);
                        view! {
                            <div class="order-review__group">
                                <div class="order-review__group-header">
                                    <span class="order-review__product">{group.product_name.clone()}</span>
                                    <span class="order-review__color">{group.color.clone()}</span>
                                    <span class="order-review__group-qty">
                                        {move || format!("{} шт.", format_quantity(group_quantity()))}
                                    </span>
                                </div>
                                <div class="order-review__lines">
                                    <For
                                        each=move || {
                                            groups.with(|gs| {
                                                gs.iter()
                                                    .find(|g| group_key(g) == group_id)
                                                    .map(|g| g.lines.clone())
                                                    .unwrap_or_default()
                                            })
                                        }
                                        key=line_key
                                        children=move |line: ReviewLine| {
                                            view! { <ReviewLineRow line=line currency=currency /> }
                                        }
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </Show>

            <div class="order-review__totals">
                <Table>
                    <TableBody>
                        <TableRow>
                            <TableCell><TableCellLayout>"Количество"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || format_quantity(totals.get().total_quantity)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell><TableCellLayout>"Цена за единицу"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || money(totals.get().unit_cost)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell><TableCellLayout>"Подытог"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || money(totals.get().subtotal)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell><TableCellLayout>"Скидка"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || money(totals.get().discount)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell><TableCellLayout>"Налог"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || money(totals.get().tax)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell><TableCellLayout>"Доставка"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || totals.get().shipping.label()}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell><TableCellLayout>"Итого"</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{move || money(totals.get().total)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[component]
fn ReviewLineRow(line: ReviewLine, currency: StoredValue<String>) -> impl IntoView {
    let store = use_order_store();
    let key = StoredValue::new(line.key.clone());
    let unit_cost = store.settings().pricing.unit_cost;
    let available = line.available_quantity;

    let required = move || key.with_value(|k| store.session.with(|s| s.ledger().quantity_of(k)));
    let line_total =
        move || currency.with_value(|c| format_money(required() as f64 * unit_cost, c));

    let on_input = move |ev| {
        let quantity = parse_quantity(&event_target_value(&ev));
        let key: InventoryKey = key.get_value();
        store.session.update(|s| {
            if s.set_review_quantity(key, quantity as i64) {
                log::debug!("review edit touched the active grid");
            }
        });
    };

    view! {
        <div
            class="order-review__line"
            class:order-review__line--over={move || required() > available}
        >
            <span class="order-review__size">{line.key.size.clone()}</span>
            <span class="order-review__available">
                {format!("доступно {}", format_quantity(available as u64))}
            </span>
            <input
                class="form__input order-review__input"
                type="number"
                min="0"
                inputmode="numeric"
                prop:value=move || required().to_string()
                on:input=on_input
            />
            <span class="order-review__line-total">{line_total}</span>
            <Show when=move || { required() > available }>
                <span class="order-review__warning" title="Больше, чем есть на складе">
                    {icon("alert-triangle")}
                </span>
            </Show>
        </div>
    }
}

/// Проверка заказа как отдельная вкладка («Корзина»)
#[component]
pub fn OrderReviewPage(on_close: Callback<()>) -> impl IntoView {
    view! {
        <PageFrame page_id="a002_inventory_ledger--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("shopping-cart")}
                    <h1 class="page__title">"Корзина"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                        " Назад"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                <OrderReview />
            </div>
        </PageFrame>
    }
}
