use contracts::domain::a001_product::SelectOption;
use leptos::prelude::*;

/// Сколько вариантов показывать в выпадающем списке
const MAX_SUGGESTIONS: usize = 50;

/// Варианты, в подписи или значении которых есть запрос (без учёта регистра)
pub fn filter_options(options: &[SelectOption], query: &str, limit: usize) -> Vec<SelectOption> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| {
            query.is_empty()
                || o.label.to_lowercase().contains(&query)
                || o.value.to_lowercase().contains(&query)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Подпись выбранного значения; пусто, если значения нет среди вариантов
pub fn label_for_value(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.clone())
        .unwrap_or_default()
}

/// Поле ввода с подсказками.
///
/// Пока пользователь печатает, выбранное значение сбрасывается
/// (`on_select` получает пустую строку); выбор из списка передаёт `value`.
#[component]
pub fn Autocomplete(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    /// Текущее выбранное значение (`value` одного из вариантов или "")
    #[prop(into)]
    value: Signal<String>,
    on_select: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    // Some(текст), пока пользователь печатает
    let query = RwSignal::new(None::<String>);
    let (is_open, set_is_open) = signal(false);

    let display_text = move || {
        query
            .get()
            .unwrap_or_else(|| options.with(|opts| label_for_value(opts, &value.get())))
    };

    let suggestions = Memo::new(move |_| {
        let q = query.get().unwrap_or_default();
        options.with(|opts| filter_options(opts, &q, MAX_SUGGESTIONS))
    });

    let pick = move |option: SelectOption| {
        query.set(None);
        set_is_open.set(false);
        on_select.run(option.value);
    };

    view! {
        <div class="form__group autocomplete">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                class="form__input"
                type="text"
                autocomplete="off"
                prop:value=display_text
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get()
                on:focus=move |_| set_is_open.set(true)
                on:blur=move |_| {
                    set_is_open.set(false);
                    query.set(None);
                }
                on:input=move |ev| {
                    query.set(Some(event_target_value(&ev)));
                    set_is_open.set(true);
                    if !value.get_untracked().is_empty() {
                        on_select.run(String::new());
                    }
                }
            />
            <Show when=move || is_open.get() && !suggestions.with(|s| s.is_empty())>
                <ul class="autocomplete__list" role="listbox">
                    <For
                        each=move || suggestions.get()
                        key=|o| o.value.clone()
                        children=move |option: SelectOption| {
                            let text = option.label.clone();
                            let selected_value = option.value.clone();
                            view! {
                                <li
                                    class="autocomplete__item"
                                    class:autocomplete__item--selected=move || value.get() == selected_value
                                    // mousedown срабатывает раньше blur у поля ввода
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        pick(option.clone());
                                    }
                                >
                                    {text}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        ["Jeans 511", "ABC Jacket", "Premium Denim", "511 SLIM"]
            .iter()
            .map(|name| SelectOption {
                label: name.to_string(),
                value: name.to_lowercase().replace(' ', "-"),
            })
            .collect()
    }

    #[test]
    fn test_filter_options() {
        let opts = options();
        let labels = |q: &str| -> Vec<String> {
            filter_options(&opts, q, 10).into_iter().map(|o| o.label).collect()
        };

        assert_eq!(labels("511"), vec!["Jeans 511", "511 SLIM"]);
        assert_eq!(labels("  denim "), vec!["Premium Denim"]);
        assert_eq!(labels("").len(), 4);
        assert!(labels("zzz").is_empty());
        // поиск по значению (коду товара)
        assert_eq!(labels("abc-jacket"), vec!["ABC Jacket"]);
        assert_eq!(labels("PREMIUM-"), vec!["Premium Denim"]);
        assert_eq!(filter_options(&opts, "", 2).len(), 2);
    }

    #[test]
    fn test_label_for_value() {
        let opts = options();
        assert_eq!(label_for_value(&opts, "abc-jacket"), "ABC Jacket");
        assert_eq!(label_for_value(&opts, ""), "");
        assert_eq!(label_for_value(&opts, "missing"), "");
    }
}
