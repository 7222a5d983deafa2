//! Grade averaging.

/// Arithmetic mean of `values` rounded to two decimal places, half away from
/// zero. Returns `None` for an empty slice.
///
/// Rounding is applied to the exact fraction `sum / count`, never to a float
/// quotient.
pub fn average(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let count = values.len() as i128;
    let sum: i128 = values.iter().map(|v| *v as i128).sum();

    let scaled = sum.abs() * 100;
    let mut hundredths = scaled / count;
    if (scaled % count) * 2 >= count {
        hundredths += 1;
    }
    if sum < 0 {
        hundredths = -hundredths;
    }

    Some(hundredths as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_average() {
        assert_eq!(average(&[]), None);
    }

    #[test]
    fn test_rounds_to_hundredths() {
        assert_eq!(average(&[10, 4, 3]), Some(5.67));
        assert_eq!(average(&[10, 11]), Some(10.5));
        assert_eq!(average(&[20]), Some(20.0));
        assert_eq!(average(&[1, 1, 0]), Some(0.67));
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // 1 / 8 = 0.125
        assert_eq!(average(&[1, 0, 0, 0, 0, 0, 0, 0]), Some(0.13));
        // 3 / 8 = 0.375
        assert_eq!(average(&[3, 0, 0, 0, 0, 0, 0, 0]), Some(0.38));
        assert_eq!(average(&[-1, 0, 0, 0, 0, 0, 0, 0]), Some(-0.13));
    }

    #[test]
    fn test_average_stays_within_grade_bounds() {
        let values: Vec<i64> = (0..=20).collect();
        let avg = average(&values).unwrap();
        assert!((0.0..=20.0).contains(&avg));
        assert_eq!(avg, 10.0);
    }
}
