use super::save::{SaveError, SaveGuard, SaveReceipt, SaveTicket};
use super::selection::SelectionState;
use crate::domain::a001_product::{Catalog, Product, ProductId, SelectOption};
use crate::domain::a002_inventory_ledger::{InventoryKey, InventoryLedger, LedgerChange};
use crate::projections::p900_size_grid::{reconcile, SelectionTotals, SizeRow};
use crate::projections::p901_variant_summary::{build_variants, ProductVariant, VariantSummary};
use crate::projections::p902_order_review::{review_lines, OrderDraft, OrderTotals, ReviewLine};
use crate::shared::config::OrderSettings;
use std::sync::Arc;

/// Сессия настройки заказа.
///
/// Владеет единственным реестром количеств; сетка размеров и окно проверки
/// читают и пишут только через него, активные строки каждый раз выводятся
/// заново из (выбор, реестр).
#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: Arc<Catalog>,
    settings: OrderSettings,
    selection: SelectionState,
    ledger: InventoryLedger,
    save: SaveGuard,
}

impl OrderSession {
    pub fn new(catalog: Arc<Catalog>, settings: OrderSettings) -> Self {
        Self {
            catalog,
            settings,
            selection: SelectionState::new(),
            ledger: InventoryLedger::new(),
            save: SaveGuard::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &OrderSettings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selection.product(&self.catalog)
    }

    pub fn product_options(&self) -> Vec<SelectOption> {
        self.catalog.product_options()
    }

    /// Цвета выбранного товара; пусто без выбора
    pub fn color_options(&self) -> Vec<SelectOption> {
        self.selection
            .product_id()
            .map(|id| self.catalog.color_options(id))
            .unwrap_or_default()
    }

    pub fn select_product(&mut self, id: &str) -> bool {
        self.selection.select_product(&self.catalog, id)
    }

    pub fn select_color(&mut self, color: &str) {
        self.selection.select_color(color);
    }

    /// Строки сетки для текущего выбора
    pub fn active_rows(&self) -> Vec<SizeRow> {
        match self.selection.active_pair() {
            Some((product_id, color)) => reconcile(
                &self.catalog,
                &self.ledger,
                product_id,
                color,
                self.settings.stock.low_stock_threshold,
            ),
            None => Vec::new(),
        }
    }

    pub fn selection_totals(&self) -> SelectionTotals {
        SelectionTotals::from_rows(&self.active_rows())
    }

    pub fn has_required_quantities(&self) -> bool {
        self.selection_totals().has_required()
    }

    /// Изменение количества из сетки размеров активной пары.
    ///
    /// Размер, которого нет в активной сетке, игнорируется.
    pub fn set_grid_quantity(&mut self, size: &str, quantity: i64) -> LedgerChange {
        let Some((product_id, color)) = self.selection.active_pair() else {
            return LedgerChange::Unchanged;
        };
        let Some(product) = self.catalog.find(product_id) else {
            return LedgerChange::Unchanged;
        };
        let exists = product
            .find_color(color)
            .and_then(|c| c.find_size(size))
            .is_some();
        if !exists {
            return LedgerChange::Unchanged;
        }

        let key = InventoryKey::new(product_id.clone(), color, size);
        let name = product.name.clone();
        self.ledger.set_quantity(key, &name, quantity)
    }

    /// Изменение количества из окна проверки.
    ///
    /// Возвращает, относится ли строка к активной сетке (её нужно перерисовать).
    pub fn set_review_quantity(&mut self, key: InventoryKey, quantity: i64) -> bool {
        let product_name = self
            .catalog
            .find(&key.product_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| key.product_id.to_string());
        let affects_grid = self.selection.is_active(&key.product_id, &key.color);

        self.ledger.set_quantity(key, &product_name, quantity);
        affects_grid
    }

    pub fn review_lines(&self) -> Vec<ReviewLine> {
        review_lines(&self.catalog, &self.ledger, self.settings.pricing.unit_cost)
    }

    pub fn order_totals(&self) -> OrderTotals {
        OrderTotals::compute(&self.ledger, self.settings.pricing.unit_cost)
    }

    pub fn variants(&self, product_id: &ProductId) -> Vec<ProductVariant> {
        self.catalog
            .find(product_id)
            .map(|p| build_variants(p, &self.ledger, self.settings.stock.low_stock_threshold))
            .unwrap_or_default()
    }

    pub fn variant_summary(&self, product_id: &ProductId) -> VariantSummary {
        VariantSummary::from_variants(&self.variants(product_id))
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_pending()
    }

    /// Начать сохранение текущей пары
    pub fn begin_save(&mut self) -> Result<SaveTicket, SaveError> {
        let (product_id, color) = self
            .selection
            .active_pair()
            .ok_or(SaveError::NothingSelected)?;
        let product = self
            .catalog
            .find(product_id)
            .ok_or(SaveError::NothingSelected)?;
        let quantity = self.selection_totals().required;

        self.save
            .begin(product_id.clone(), &product.name, color, quantity)
    }

    /// Завершить сохранение, зафиксировав черновик по всему реестру
    pub fn finish_save(&mut self, ticket: SaveTicket) -> SaveReceipt {
        let draft = OrderDraft::build(
            &self.catalog,
            &self.ledger,
            self.settings.pricing.unit_cost,
            &self.settings.pricing.currency,
        );
        self.save.finish(ticket, draft)
    }

    /// Начать новый заказ: реестр и выбор очищаются
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock_data::showcase_records;

    fn session() -> OrderSession {
        let catalog = Catalog::from_records(showcase_records()).unwrap();
        OrderSession::new(Arc::new(catalog), OrderSettings::default())
    }

    fn grid(session: &OrderSession) -> Vec<(String, u32)> {
        session
            .active_rows()
            .into_iter()
            .map(|r| (r.size, r.required_quantity))
            .collect()
    }

    fn required(session: &OrderSession, size: &str) -> u32 {
        session
            .active_rows()
            .iter()
            .find(|r| r.size == size)
            .map(|r| r.required_quantity)
            .unwrap_or_default()
    }

    #[test]
    fn test_jeans_511_scenario() {
        let mut session = session();
        assert!(session.select_product("jeans-511"));
        session.select_color("red");

        let available: Vec<(String, u32)> = session
            .active_rows()
            .into_iter()
            .map(|r| (r.size, r.available_quantity))
            .collect();
        assert_eq!(
            available,
            vec![
                ("xs".to_string(), 25),
                ("sm".to_string(), 105),
                ("md".to_string(), 80),
                ("lg".to_string(), 65),
                ("xl".to_string(), 45),
                ("xxl".to_string(), 30),
            ]
        );

        assert_eq!(session.set_grid_quantity("sm", 30), LedgerChange::Inserted);
        let entries = session.ledger().all_positive_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key.product_id, ProductId::new("jeans-511"));
        assert_eq!(entries[0].key.color, "red");
        assert_eq!(entries[0].key.size, "sm");
        assert_eq!(entries[0].required_quantity, 30);
        assert_eq!(entries[0].product_name, "Jeans 511");

        session.select_color("blue");
        assert!(grid(&session).iter().all(|(_, q)| *q == 0));
        assert_eq!(grid(&session).len(), 6);

        session.select_color("red");
        assert_eq!(required(&session, "sm"), 30);
    }

    #[test]
    fn test_reselect_round_trip() {
        let mut session = session();
        session.select_product("jeans-511");
        session.select_color("red");

        session.set_grid_quantity("xs", 5);
        session.set_grid_quantity("md", 12);
        session.set_grid_quantity("xs", 8);
        session.set_grid_quantity("md", 0);
        session.set_grid_quantity("xl", -4);

        session.select_product("jeans-511");
        assert!(session.active_rows().is_empty());
        session.select_color("red");

        assert_eq!(required(&session, "xs"), 8);
        assert_eq!(required(&session, "md"), 0);
        assert_eq!(required(&session, "xl"), 0);
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_review_edit_updates_active_grid() {
        let mut session = session();
        session.select_product("jeans-511");
        session.select_color("red");
        session.set_grid_quantity("sm", 30);

        let key = InventoryKey::new(ProductId::new("jeans-511"), "red", "sm");
        assert!(session.set_review_quantity(key.clone(), 44));
        assert_eq!(required(&session, "sm"), 44);

        assert!(session.set_review_quantity(key, 0));
        assert_eq!(required(&session, "sm"), 0);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_review_edit_other_pair_leaves_grid() {
        let mut session = session();
        session.select_product("classic-tee");
        session.select_color("white");
        session.set_grid_quantity("md", 3);

        session.select_product("jeans-511");
        session.select_color("red");
        let before = grid(&session);

        let key = InventoryKey::new(ProductId::new("classic-tee"), "white", "md");
        assert!(!session.set_review_quantity(key, 7));
        assert_eq!(grid(&session), before);
        assert_eq!(session.order_totals().total_quantity, 7);
    }

    #[test]
    fn test_grid_edit_without_pair_is_ignored() {
        let mut session = session();
        assert_eq!(session.set_grid_quantity("sm", 10), LedgerChange::Unchanged);

        session.select_product("jeans-511");
        session.select_color("green");
        assert!(session.active_rows().is_empty());
        assert_eq!(session.set_grid_quantity("sm", 10), LedgerChange::Unchanged);

        session.select_color("red");
        assert_eq!(session.set_grid_quantity("w32", 10), LedgerChange::Unchanged);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_ledger_spans_products() {
        let mut session = session();
        session.select_product("jeans-511");
        session.select_color("red");
        session.set_grid_quantity("sm", 30);
        session.select_color("blue");
        session.set_grid_quantity("lg", 2);
        session.select_product("classic-tee");
        session.select_color("white");
        session.set_grid_quantity("sm", 10);

        let lines = session.review_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(session.order_totals().subtotal, 42.0 * 12.5);
        assert_eq!(session.selection_totals().required, 10);
        assert!(session.has_required_quantities());
    }

    #[test]
    fn test_save_flow() {
        let mut session = session();
        assert_eq!(session.begin_save(), Err(SaveError::NothingSelected));

        session.select_product("jeans-511");
        session.select_color("red");
        session.set_grid_quantity("sm", 30);
        session.set_grid_quantity("xs", 5);

        let ticket = session.begin_save().unwrap();
        assert!(session.is_saving());
        assert_eq!(session.begin_save(), Err(SaveError::AlreadyPending));

        let receipt = session.finish_save(ticket);
        assert!(!session.is_saving());
        assert_eq!(
            receipt.message(),
            "Total quantity of 35 units configured for Jeans 511 - red."
        );
        assert_eq!(receipt.draft.totals.total_quantity, 35);
        assert_eq!(receipt.draft.currency, "USD");
    }

    #[test]
    fn test_variants_reflect_ledger() {
        let mut session = session();
        session.select_product("jeans-511");
        session.select_color("blue");
        session.set_grid_quantity("md", 12);

        let variants = session.variants(&ProductId::new("jeans-511"));
        assert_eq!(variants.len(), 12);
        let md = variants
            .iter()
            .find(|v| v.color == "blue" && v.size == "md")
            .unwrap();
        assert_eq!(md.required_quantity, 12);
        assert_eq!(md.available_to_sell, 0);

        let summary = session.variant_summary(&ProductId::new("jeans-511"));
        assert_eq!(summary.total_required, 12);
        assert!(session.variants(&ProductId::new("missing")).is_empty());
    }

    #[test]
    fn test_color_options_and_reset() {
        let mut session = session();
        assert!(session.color_options().is_empty());

        session.select_product("jeans-511");
        let colors: Vec<String> = session.color_options().into_iter().map(|o| o.value).collect();
        assert_eq!(colors, vec!["red".to_string(), "blue".to_string()]);

        session.select_color("red");
        session.set_grid_quantity("sm", 1);
        session.reset();
        assert!(session.ledger().is_empty());
        assert!(session.selected_product().is_none());
    }
}
