pub mod save;
pub mod selection;
pub mod session;

pub use save::{OrderDraftId, SaveError, SaveGuard, SaveReceipt, SaveTicket};
pub use selection::SelectionState;
pub use session::OrderSession;

use crate::usecases::common::UseCaseMetadata;

pub struct ConfigureOrder;

impl UseCaseMetadata for ConfigureOrder {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "configure_order"
    }

    fn display_name() -> &'static str {
        "Новый заказ"
    }

    fn description() -> &'static str {
        "Выбор товара и цвета, ввод количеств по размерам и проверка заказа"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ConfigureOrder::full_name(), "u501_configure_order");
    }
}
