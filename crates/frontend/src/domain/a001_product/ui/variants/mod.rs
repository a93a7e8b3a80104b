use crate::shared::components::table::format_quantity;
use crate::shared::components::{FulfillmentBadge, StatCard, StatTone, StockBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::usecases::u501_configure_order::api::fetch_variants;
use crate::usecases::u501_configure_order::state::use_order_store;
use contracts::domain::a001_product::ProductId;
use contracts::projections::p901_variant_summary::{filter_variants, ProductVariant};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Сколько строк-заглушек показывать во время загрузки
const SKELETON_ROWS: usize = 6;

/// Варианты товара (цвет × размер) с остатком, заказом и статусом
#[component]
pub fn ProductVariantsPage(product_id: String, on_close: Callback<()>) -> impl IntoView {
    let store = use_order_store();
    let product_id = ProductId::new(product_id);

    let product_name = store.session.with_untracked(|s| {
        s.catalog()
            .find(&product_id)
            .map(|p| p.name.clone())
    });
    let known = product_name.is_some();

    let (is_loaded, set_is_loaded) = signal(false);
    spawn_local(async move {
        fetch_variants(store).await;
        // вкладку могли закрыть, пока шла загрузка
        let _ = set_is_loaded.try_set(true);
    });

    let search_query = RwSignal::new(String::new());

    let pid = product_id.clone();
    let variants = Memo::new(move |_| store.session.with(|s| s.variants(&pid)));
    let pid = product_id.clone();
    let summary = Memo::new(move |_| store.session.with(|s| s.variant_summary(&pid)));

    let visible = Memo::new(move |_| {
        let q = search_query.get();
        variants.with(|all| {
            filter_variants(all, &q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let title = product_name.unwrap_or_else(|| product_id.to_string());

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layers")}
                    <h1 class="page__title">{format!("Варианты: {}", title)}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                        " Назад"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || known
                    fallback=|| view! { <div class="alert alert--error">"Товар не найден в каталоге"</div> }
                >
                    <Show
                        when=move || is_loaded.get()
                        fallback=|| view! { <VariantsSkeleton /> }
                    >
                        <div class="stat-grid">
                            <StatCard
                                label="Варианты"
                                icon_name="list"
                                value=Signal::derive(move || summary.get().total_variants.to_string())
                                subtitle=Signal::derive(move || {
                                    let s = summary.get();
                                    Some(format!(
                                        "в наличии {} · мало {} · нет {}",
                                        s.in_stock, s.low_stock, s.out_of_stock
                                    ))
                                })
                            />
                            <StatCard
                                label="Остаток"
                                icon_name="package"
                                value=Signal::derive(move || format_quantity(summary.get().total_quantity))
                            />
                            <StatCard
                                label="В заказе"
                                icon_name="shopping-cart"
                                value=Signal::derive(move || format_quantity(summary.get().total_required))
                            />
                            <StatCard
                                label="Доступно к продаже"
                                icon_name="check"
                                value=Signal::derive(move || format_quantity(summary.get().total_available))
                                tone=Signal::derive(move || {
                                    if summary.get().fulfillment.is_full() {
                                        StatTone::Success
                                    } else {
                                        StatTone::Warning
                                    }
                                })
                            />
                        </div>

                        <div class="filter-panel">
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <div style="flex: 1; max-width: 360px;">
                                    <Input value=search_query placeholder="Название или артикул..." />
                                </div>
                                <span class="filter-panel__count">
                                    {move || format!(
                                        "{} из {} вариантов",
                                        visible.with(|v| v.len()),
                                        variants.with(|v| v.len())
                                    )}
                                </span>
                                <FulfillmentBadge fulfillment=Signal::derive(move || summary.get().fulfillment) />
                            </Flex>
                        </div>

                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 1000px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell resizable=false min_width=380.0>"Вариант"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=140.0>"Артикул"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=110.0>"Цвет"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=70.0>"Размер"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=90.0>"Остаток"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=90.0>"В заказе"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=90.0>"Доступно"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=110.0>"Статус"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || visible.get()
                                        key=|v| (v.id.clone(), v.required_quantity)
                                        children=move |v: ProductVariant| view! { <VariantRow variant=v /> }
                                    />
                                </TableBody>
                            </Table>
                            <Show when=move || visible.with(|v| v.is_empty())>
                                <div class="table__empty">"Ничего не найдено"</div>
                            </Show>
                        </div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn VariantRow(variant: ProductVariant) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{variant.name}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout><code>{variant.sku}</code></TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{variant.color}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{variant.size}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_quantity(variant.total_quantity as u64)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_quantity(variant.required_quantity as u64)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_quantity(variant.available_to_sell as u64)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout><StockBadge status=variant.stock_status /></TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn VariantsSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton">
            <div class="skeleton__header">
                <Spinner />
                <span>"Загрузка вариантов..."</span>
            </div>
            {(0..SKELETON_ROWS)
                .map(|_| view! { <div class="skeleton__row"></div> })
                .collect_view()}
        </div>
    }
}
