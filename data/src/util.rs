/// Round to one decimal place, the resolution evaluation scores are
/// reported at.
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

pub fn format_score(value: f32) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_at_one_decimal() {
        assert_eq!(round1(3.333), 3.3);
        assert_eq!(round1(3.35), 3.4);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn formats_with_one_decimal() {
        assert_eq!(format_score(4.0), "4.0");
        assert_eq!(format_score(3.25), "3.2");
    }
}
