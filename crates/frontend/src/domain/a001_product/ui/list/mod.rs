pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, variants_tab_key};
use crate::shared::components::table::format_quantity;
use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::usecases::u501_configure_order::state::use_order_store;
use contracts::domain::a001_product::Product;
use contracts::projections::p903_product_collections::collections;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_configure_order::ConfigureOrder;
use leptos::prelude::*;
use thaw::*;

/// Браузер каталога: сводка, коллекции и таблица товаров
#[component]
pub fn ProductCatalogList() -> impl IntoView {
    let store = use_order_store();
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let state = create_state();
    let search_query = RwSignal::new(String::new());
    Effect::new(move |_| {
        let q = search_query.get();
        state.update(|s| s.q = q);
    });

    // Каталог неизменен в пределах сессии
    let products: StoredValue<Vec<Product>> =
        StoredValue::new(store.session.with_untracked(|s| s.catalog().products().to_vec()));
    let product_collections =
        StoredValue::new(store.session.with_untracked(|s| collections(s.catalog())));

    let visible = Memo::new(move |_| {
        let st = state.get();
        products.with_value(|all| {
            all.iter()
                .filter(|p| st.matches(p))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let product_count = products.with_value(|p| p.len());
    let collection_count = product_collections.with_value(|c| c.len());
    let variant_total: usize = products.with_value(|p| p.iter().map(Product::variant_count).sum());
    let stock_total: u64 = products.with_value(|p| p.iter().map(Product::total_available).sum());

    let ordered_of = move |product: &Product| -> u64 {
        store.session.with(|s| {
            s.ledger()
                .all_positive_entries()
                .iter()
                .filter(|e| e.key.product_id == product.id)
                .map(|e| e.required_quantity as u64)
                .sum()
        })
    };

    let open_variants = move |product: &Product| {
        let key = variants_tab_key(product.id.as_str());
        tabs_store.open_tab(&key, &format!("Варианты: {}", product.name));
    };

    let configure = move |product: &Product| {
        let id = product.id.as_str().to_string();
        store.session.update(|s| {
            s.select_product(&id);
        });
        let key = ConfigureOrder::full_name();
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("package")}
                    <h1 class="page__title">"Каталог товаров"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Товары"
                        icon_name="package"
                        value=Signal::derive(move || format_quantity(product_count as u64))
                    />
                    <StatCard
                        label="Коллекции"
                        icon_name="layers"
                        value=Signal::derive(move || format_quantity(collection_count as u64))
                    />
                    <StatCard
                        label="Варианты"
                        icon_name="list"
                        value=Signal::derive(move || format_quantity(variant_total as u64))
                    />
                    <StatCard
                        label="Остаток, шт."
                        icon_name="shopping-cart"
                        value=Signal::derive(move || format_quantity(stock_total))
                    />
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Поиск:"</Label>
                                <Input value=search_query placeholder="Название или код товара..." />
                            </Flex>
                        </div>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.only_in_stock)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| s.only_in_stock = checked);
                                }
                            />
                            " Только в наличии"
                        </label>
                        <span class="filter-panel__count">
                            {move || format!("{} из {}", visible.with(|v| v.len()), product_count)}
                        </span>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=220.0>"Товар"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Код"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Цвета"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Варианты"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Остаток"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"В заказе"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|p| p.id.clone()
                                children=move |product: Product| {
                                    let product = StoredValue::new(product);
                                    let p = product.get_value();
                                    let name = p.name.clone();
                                    let id = p.id.as_str().to_string();
                                    let color_count = p.colors.len();
                                    let variant_count = p.variant_count();
                                    let total_available = format_quantity(p.total_available());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <code>{id}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{color_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{variant_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total_available}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || product.with_value(|p| format_quantity(ordered_of(p)))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| product.with_value(|p| open_variants(p))
                                                    >
                                                        "Просмотр вариантов"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        on_click=move |_| product.with_value(|p| configure(p))
                                                    >
                                                        "Настроить"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <h2 class="page__subtitle">"Коллекции"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=220.0>"Коллекция"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Товары"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Варианты"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Остаток"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {product_collections.get_value().into_iter().map(|c| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{c.name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.product_ids.len()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.variant_count}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_quantity(c.total_stock)}</TableCellLayout></TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
