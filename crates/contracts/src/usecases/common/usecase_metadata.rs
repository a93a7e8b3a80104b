/// Метаданные UseCase для идентификации в навигации и логах
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "configure_order")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Новый заказ")
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_configure_order"; оно же ключ вкладки
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
