use super::state::use_order_store;
use crate::shared::components::table::format_quantity;
use crate::shared::components::StockBadge;
use contracts::domain::a002_inventory_ledger::{parse_quantity, InventoryKey};
use contracts::projections::p900_size_grid::{columns, SelectionTotals, SizeRow};
use leptos::prelude::*;

/// Сетка размеров активной пары (товар, цвет).
///
/// Строки каждый раз выводятся из реестра, поэтому правка в окне проверки
/// сразу видна и здесь.
#[component]
pub fn SizeGrid() -> impl IntoView {
    let store = use_order_store();
    let grid = store.settings().grid;

    let pair = Memo::new(move |_| {
        store.session.with(|s| {
            s.selection()
                .active_pair()
                .map(|(p, c)| (p.as_str().to_string(), c.to_string()))
        })
    });
    let rows = Memo::new(move |_| store.session.with(|s| s.active_rows()));
    let layout = Memo::new(move |_| {
        rows.with(|rows| columns(rows, grid.sizes_per_column, grid.max_columns))
    });
    let totals = Memo::new(move |_| rows.with(|rows| SelectionTotals::from_rows(rows)));

    let column_key = move |column: &Vec<SizeRow>| {
        let (product, color) = pair.get_untracked().unwrap_or_default();
        let sizes: Vec<&str> = column.iter().map(|r| r.size.as_str()).collect();
        format!("{}|{}|{}", product, color, sizes.join(","))
    };

    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! {
                <div class="size-grid__empty">"Для выбранного цвета нет размеров"</div>
            }
        >
            <div class="size-grid">
                <For
                    each=move || layout.get()
                    key=column_key
                    children={move |column: Vec<SizeRow>| {
                        view! {
                            <div class="size-grid__column">
                                <div class="size-grid__row size-grid__row--header">
                                    <span>"Размер"</span>
                                    <span>"Доступно"</span>
                                    <span>"Статус"</span>
                                    <span>"Заказ"</span>
                                </div>
                                {column.into_iter().map(|row| view! { <SizeGridRow row=row /> }).collect_view()}
                            </div>
                        }
                    }}
                />
            </div>
            <div class="size-grid__totals">
                <span>"Итого заказано: "</span>
                <strong>{move || format_quantity(totals.get().required)}</strong>
                <span>" из доступных "</span>
                <strong>{move || format_quantity(totals.get().available)}</strong>
            </div>
        </Show>
    }
}

#[component]
fn SizeGridRow(row: SizeRow) -> impl IntoView {
    let store = use_order_store();

    let key = store.session.with_untracked(|s| {
        s.selection()
            .active_pair()
            .map(|(p, c)| InventoryKey::new(p.clone(), c, &row.size))
    });
    let key = StoredValue::new(key);
    let size = StoredValue::new(row.size.clone());

    let required = move || {
        key.with_value(|key| {
            key.as_ref()
                .map(|k| store.session.with(|s| s.ledger().quantity_of(k)))
                .unwrap_or(0)
        })
    };

    let on_input = move |ev| {
        let quantity = parse_quantity(&event_target_value(&ev));
        let size = size.get_value();
        store.session.update(|s| {
            s.set_grid_quantity(&size, quantity as i64);
        });
    };

    let read_only = row.is_read_only();

    view! {
        <div class="size-grid__row" class:size-grid__row--disabled=read_only>
            <span class="size-grid__size">{row.size.clone()}</span>
            <span class="size-grid__available">{format_quantity(row.available_quantity as u64)}</span>
            <span><StockBadge status=row.stock_status /></span>
            <input
                class="form__input size-grid__input"
                type="number"
                min="0"
                inputmode="numeric"
                disabled=read_only
                prop:value=move || required().to_string()
                on:input=on_input
            />
        </div>
    }
}
