#[cfg(test)]
mod tests {
    use alhuda_shared::quotes::{QuoteCursor, QUOTES};

    #[test]
    fn list_has_ten_entries_with_attributions() {
        assert_eq!(QUOTES.len(), 10);
        for quote in QUOTES {
            assert!(!quote.text.is_empty());
            assert!(!quote.reference.is_empty());
        }
    }

    #[test]
    fn new_reduces_start_modulo_length() {
        assert_eq!(QuoteCursor::new(0).index(), 0);
        assert_eq!(QuoteCursor::new(9).index(), 9);
        assert_eq!(QuoteCursor::new(10).index(), 0);
        assert_eq!(QuoteCursor::new(23).index(), 3);
    }

    #[test]
    fn next_advances_by_one_and_wraps() {
        let mut cursor = QuoteCursor::new(8);
        assert_eq!(cursor.next(), QUOTES[9]);
        assert_eq!(cursor.next(), QUOTES[0]);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn prev_steps_back_and_wraps() {
        let mut cursor = QuoteCursor::new(1);
        assert_eq!(cursor.prev(), QUOTES[0]);
        assert_eq!(cursor.prev(), QUOTES[9]);
        assert_eq!(cursor.index(), 9);
    }

    #[test]
    fn n_steps_forward_land_on_initial_plus_n_modulo_length() {
        let start = 4;
        let mut cursor = QuoteCursor::new(start);
        for n in 1..=25 {
            cursor.next();
            assert_eq!(cursor.index(), (start + n) % QUOTES.len());
        }
    }

    #[test]
    fn prev_then_next_returns_to_the_same_quote() {
        let mut cursor = QuoteCursor::new(6);
        let here = cursor.current();
        cursor.prev();
        assert_eq!(cursor.next(), here);
    }
}
