use crate::config::pricing::{DISCOUNT_UNIT_CENTS, FLOOR_PRICE_CENTS, ORIGINAL_PRICE_CENTS};

pub fn discount_for(answered: usize) -> u32 {
    DISCOUNT_UNIT_CENTS * answered as u32
}

/// Largest discount a quiz of `question_count` questions can award.
pub fn max_discount(question_count: usize) -> u32 {
    discount_for(question_count)
}

pub fn final_price(discount: u32) -> u32 {
    ORIGINAL_PRICE_CENTS
        .saturating_sub(discount)
        .max(FLOOR_PRICE_CENTS)
}

/// "$49.99"
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// "$25", falling back to cents when the amount is not whole dollars.
pub fn format_whole(cents: u32) -> String {
    if cents % 100 == 0 {
        format!("${}", cents / 100)
    } else {
        format_price(cents)
    }
}

pub fn to_dollars(cents: u32) -> f64 {
    cents as f64 / 100.0
}

/// Share of `part` in `whole` as a 0-100 percentage for progress bars.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_quiz_hits_the_floor_price() {
        let discount = discount_for(4);
        assert_eq!(discount, 10_000);
        assert_eq!(final_price(discount), (ORIGINAL_PRICE_CENTS - discount).max(FLOOR_PRICE_CENTS));
        assert_eq!(format_price(final_price(discount)), "$49.99");
    }

    #[test]
    fn final_price_never_drops_below_floor() {
        assert_eq!(final_price(1_000_000), FLOOR_PRICE_CENTS);
        assert_eq!(final_price(0), ORIGINAL_PRICE_CENTS);
        assert_eq!(final_price(2_500), 12_499);
    }

    #[test]
    fn cap_follows_question_count() {
        assert_eq!(max_discount(4), 10_000);
        assert_eq!(max_discount(6), 6 * DISCOUNT_UNIT_CENTS);
        assert_eq!(max_discount(0), 0);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_whole(2_500), "$25");
        assert_eq!(format_whole(0), "$0");
        assert_eq!(format_whole(4_999), "$49.99");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(to_dollars(4_999), 49.99);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(5, 4), 100.0);
        assert_eq!(percent(3, 0), 0.0);
    }
}
