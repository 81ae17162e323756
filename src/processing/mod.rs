//! Resume processing and scoring pipeline

pub mod analyzer;
pub mod explanation;
pub mod keywords;
pub mod matching;
pub mod profile;
pub mod quality;
pub mod skills;
pub mod validation;

/// Round to `decimals` places using the exact stored value, ties to even.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333333, 2), 33.33);
        assert_eq!(round_to(66.66666, 1), 66.7);
        assert_eq!(round_to(0.685, 2), 0.69);
        assert_eq!(round_to(5.0, 2), 5.0);
    }

    #[test]
    fn test_round_to_exact_ties_go_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(6.25, 1), 6.2);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(62.5, 0), 62.0);
    }
}
