use crate::shared::icons::icon;
use contracts::shared::query::total_pages;
use leptos::prelude::*;

/// Номера страниц блока ссылок; `None` — эллипсис.
///
/// Правила: страница 1 и последняя присутствуют всегда; средний блок —
/// `max(2, current-1) ..= min(total-1, current+1)`; эллипсис перед блоком
/// только когда `current > 3`, после — только когда `current < total - 2`.
/// Для 0 или 1 страницы блок ссылок не рисуется вовсе.
pub fn page_links(current: u64, total: u64) -> Vec<Option<u64>> {
    if total <= 1 {
        return Vec::new();
    }

    let mut links = vec![Some(1)];

    if current > 3 {
        links.push(None);
    }

    let mid_start = 2.max(current.saturating_sub(1));
    let mid_end = (total - 1).min(current + 1);
    for page in mid_start..=mid_end {
        links.push(Some(page));
    }

    if current < total.saturating_sub(2) {
        links.push(None);
    }

    links.push(Some(total));

    links
}

/// Блок пагинации под таблицей
#[component]
pub fn PaginationBar(
    #[prop(into)] current_page: Signal<u64>,
    #[prop(into)] count: Signal<u64>,
    #[prop(into)] limit: Signal<u64>,
    on_page_change: Callback<u64>,
) -> impl IntoView {
    let pages = move || total_pages(count.get(), limit.get());

    view! {
        // Одна страница (или пусто) — без пагинации
        <Show when=move || (pages() > 1)>
            <div class="pagination">
                <button
                    class="pagination__btn"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>

                {move || {
                    page_links(current_page.get(), pages())
                        .into_iter()
                        .map(|link| match link {
                            Some(page) => {
                                let is_current = page == current_page.get();
                                view! {
                                    <button
                                        class="pagination__btn"
                                        class:pagination__btn--current=is_current
                                        disabled=is_current
                                        on:click=move |_| on_page_change.run(page)
                                    >
                                        {page.to_string()}
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! {
                                <span class="pagination__ellipsis">{"…"}</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class="pagination__btn"
                    disabled=move || current_page.get() >= pages()
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < pages() {
                            on_page_change.run(page + 1);
                        }
                    }
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>

                <span class="pagination__info">
                    {move || format!("{} записей", count.get())}
                </span>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[Option<u64>]) -> Vec<u64> {
        links.iter().filter_map(|l| *l).collect()
    }

    fn ellipsis_count(links: &[Option<u64>]) -> usize {
        links.iter().filter(|l| l.is_none()).count()
    }

    #[test]
    fn zero_or_one_page_renders_nothing() {
        assert!(page_links(1, 0).is_empty());
        assert!(page_links(1, 1).is_empty());
    }

    #[test]
    fn first_and_last_are_always_present() {
        for total in 2..=12 {
            for current in 1..=total {
                let links = page_links(current, total);
                let nums = numbers(&links);
                assert!(nums.contains(&1), "page 1 missing for {current}/{total}");
                assert!(
                    nums.contains(&total),
                    "last page missing for {current}/{total}"
                );
            }
        }
    }

    #[test]
    fn no_page_outside_bounds_and_no_duplicates() {
        for total in 2..=12 {
            for current in 1..=total {
                let nums = numbers(&page_links(current, total));
                let mut sorted = nums.clone();
                sorted.dedup();
                assert_eq!(sorted.len(), nums.len(), "duplicates for {current}/{total}");
                assert!(nums.iter().all(|p| (1..=total).contains(p)));
            }
        }
    }

    #[test]
    fn leading_ellipsis_iff_current_above_three() {
        let total = 10;
        for current in 1..=total {
            let links = page_links(current, total);
            let has_leading = links.get(1).map(|l| l.is_none()).unwrap_or(false);
            assert_eq!(has_leading, current > 3, "leading for {current}/{total}");
        }
    }

    #[test]
    fn trailing_ellipsis_iff_current_below_total_minus_two() {
        let total = 10;
        for current in 1..=total {
            let links = page_links(current, total);
            let has_trailing = links
                .iter()
                .rev()
                .nth(1)
                .map(|l| l.is_none())
                .unwrap_or(false);
            assert_eq!(
                has_trailing,
                current < total - 2,
                "trailing for {current}/{total}"
            );
        }
    }

    #[test]
    fn middle_block_surrounds_current_page() {
        let links = page_links(5, 10);
        assert_eq!(
            links,
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );

        let links = page_links(1, 10);
        assert_eq!(links, vec![Some(1), Some(2), None, Some(10)]);

        let links = page_links(10, 10);
        assert_eq!(links, vec![Some(1), None, Some(9), Some(10)]);

        let links = page_links(2, 3);
        assert_eq!(links, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(ellipsis_count(&page_links(2, 3)), 0);
    }
}
