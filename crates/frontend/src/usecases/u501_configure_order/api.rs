//! Имитация сетевых вызовов: данные уже в памяти, задержка задаётся в настройках.

use super::state::OrderStore;
use contracts::usecases::u501_configure_order::SaveReceipt;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Дождаться «загрузки» вариантов товара
pub async fn fetch_variants(store: OrderStore) {
    let delay = store.settings().latency.fetch_delay_ms;
    TimeoutFuture::new(delay).await;
}

/// Сохранить конфигурацию текущей пары (товар, цвет).
///
/// Второй вызов, пока первый не завершился, сразу возвращает ошибку.
pub async fn save_configuration(store: OrderStore) -> Result<SaveReceipt, String> {
    let ticket = store
        .session
        .try_update(|s| s.begin_save())
        .ok_or("Order session is disposed")?
        .map_err(|e| e.to_string())?;

    log::debug!(
        "save started: {} - {}",
        ticket.product_name,
        ticket.color
    );

    let delay = store.settings().latency.save_delay_ms;
    TimeoutFuture::new(delay).await;

    let receipt = store
        .session
        .try_update(|s| s.finish_save(ticket))
        .ok_or("Order session is disposed")?;

    log::info!(
        "draft {} saved at {}: {} units",
        receipt.draft_id.0,
        receipt.saved_at.format("%H:%M:%S"),
        receipt.draft.totals.total_quantity
    );
    match receipt.draft.to_json() {
        Ok(json) => log::debug!("draft payload: {}", json),
        Err(e) => log::warn!("draft payload not serializable: {}", e),
    }

    Ok(receipt)
}
