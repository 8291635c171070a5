#[cfg(test)]
mod tests {
    use breaktime::libs::pagination::{
        clamp_page, insert_ellipsis, is_valid_max_visible, page_slice, total_pages, window, PageItem,
    };
    use breaktime::libs::view::View;

    #[test]
    fn test_all_pages_fit() {
        assert_eq!(window(1, 5, 7).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(window(3, 5, 7).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(window(7, 7, 7).pages, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_near_start() {
        assert_eq!(window(1, 20, 7).pages, vec![1, 2, 3, 4, 5, 6, 20]);
        assert_eq!(window(4, 20, 7).pages, vec![1, 2, 3, 4, 5, 6, 20]);
    }

    #[test]
    fn test_middle() {
        assert_eq!(window(10, 20, 7).pages, vec![1, 8, 9, 10, 11, 12, 20]);
        assert_eq!(window(5, 20, 7).pages, vec![1, 3, 4, 5, 6, 7, 20]);
    }

    #[test]
    fn test_near_end() {
        assert_eq!(window(20, 20, 7).pages, vec![1, 15, 16, 17, 18, 19, 20]);
        assert_eq!(window(17, 20, 7).pages, vec![1, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(window(1, 1, 7).pages, vec![1]);
        assert_eq!(window(1, 1, 1).pages, vec![1]);
    }

    #[test]
    fn test_window_keeps_position() {
        let w = window(10, 20, 7);
        assert_eq!(w.current_page, 10);
        assert_eq!(w.total_pages, 20);
        assert!(w.has_previous());
        assert!(w.has_next());

        let first = window(1, 3, 7);
        assert!(!first.has_previous());
        assert!(first.has_next());
    }

    #[test]
    fn test_out_of_range_does_not_panic() {
        let _ = window(0, 20, 7);
        let _ = window(99, 20, 7);
        let _ = window(5, 20, 0);
        let _ = window(5, 20, 2);
    }

    #[test]
    fn test_valid_max_visible() {
        assert!(is_valid_max_visible(3));
        assert!(is_valid_max_visible(7));
        assert!(!is_valid_max_visible(0));
        assert!(!is_valid_max_visible(1));
        assert!(!is_valid_max_visible(6));
    }

    #[test]
    fn test_valid_widths_bound_every_window() {
        for max in [3, 5, 7, 9] {
            for total in 1..=30 {
                for current in 1..=total {
                    let pages = window(current, total, max).pages;
                    assert!(pages.len() <= max, "window({}, {}, {}) = {:?}", current, total, max, pages);
                    assert_eq!(pages.first(), Some(&1));
                    assert_eq!(pages.last(), Some(&total));
                    assert!(pages.contains(&current));
                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    #[test]
    fn test_insert_ellipsis() {
        assert_eq!(
            insert_ellipsis(&[1, 8, 9, 20]),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Ellipsis,
                PageItem::Page(20)
            ]
        );
        assert_eq!(insert_ellipsis(&[1, 2, 3]).len(), 3);
        assert!(insert_ellipsis(&[]).is_empty());
    }

    #[test]
    fn test_page_bar() {
        assert_eq!(View::page_bar(&window(10, 20, 7)), "1 ... 8 9 [10] 11 12 ... 20");
        assert_eq!(View::page_bar(&window(1, 20, 7)), "[1] 2 3 4 5 6 ... 20");
        assert_eq!(View::page_bar(&window(2, 3, 7)), "1 [2] 3");
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=45).collect();
        assert_eq!(page_slice(&items, 1, 20).len(), 20);
        assert_eq!(page_slice(&items, 3, 20), &[41, 42, 43, 44, 45]);
        assert!(page_slice(&items, 4, 20).is_empty());
        assert!(page_slice(&items, 1, 0).is_empty());
    }
}
