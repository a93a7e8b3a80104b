use crate::domain::a001_product::ProductId;
use crate::domain::common::AggregateId;
use crate::projections::p902_order_review::OrderDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// ID сохранённого черновика заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderDraftId(pub Uuid);

impl OrderDraftId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for OrderDraftId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderDraftId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("a save is already in progress")]
    AlreadyPending,

    #[error("select a product and a color before saving")]
    NothingSelected,
}

/// Выданный `SaveGuard` талон на одно сохранение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    id: u64,
    pub product_id: ProductId,
    pub product_name: String,
    pub color: String,
    /// Сумма по активной сетке на момент начала сохранения
    pub selection_quantity: u64,
}

/// Результат завершённого сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub draft_id: OrderDraftId,
    pub saved_at: DateTime<Utc>,
    pub product_id: ProductId,
    pub product_name: String,
    pub color: String,
    pub selection_quantity: u64,
    pub draft: OrderDraft,
}

impl SaveReceipt {
    pub fn title(&self) -> &'static str {
        "Configuration saved"
    }

    pub fn message(&self) -> String {
        format!(
            "Total quantity of {} units configured for {} - {}.",
            self.selection_quantity, self.product_name, self.color
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SaveState {
    #[default]
    Idle,
    Pending {
        ticket: u64,
    },
}

/// Не даёт запустить второе сохранение, пока первое не завершилось
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveGuard {
    state: SaveState,
    issued: u64,
}

impl SaveGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SaveState::Pending { .. })
    }

    pub fn begin(
        &mut self,
        product_id: ProductId,
        product_name: &str,
        color: &str,
        selection_quantity: u64,
    ) -> Result<SaveTicket, SaveError> {
        if self.is_pending() {
            return Err(SaveError::AlreadyPending);
        }
        self.issued += 1;
        self.state = SaveState::Pending {
            ticket: self.issued,
        };
        Ok(SaveTicket {
            id: self.issued,
            product_id,
            product_name: product_name.to_string(),
            color: color.to_string(),
            selection_quantity,
        })
    }

    /// Завершить сохранение; чужой талон состояние не меняет
    pub fn finish(&mut self, ticket: SaveTicket, draft: OrderDraft) -> SaveReceipt {
        if self.state == (SaveState::Pending { ticket: ticket.id }) {
            self.state = SaveState::Idle;
        } else {
            log::warn!("save ticket {} finished while not pending", ticket.id);
        }

        SaveReceipt {
            draft_id: OrderDraftId::new_v4(),
            saved_at: Utc::now(),
            product_id: ticket.product_id,
            product_name: ticket.product_name,
            color: ticket.color,
            selection_quantity: ticket.selection_quantity,
            draft,
        }
    }
}
