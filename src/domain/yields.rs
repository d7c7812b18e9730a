// src/domain/yields.rs

/// Derives gross and net yield percentages from the extracted monetary
/// fields, each rounded to 2 decimal places.
///
/// Both results are absent unless `price` and `rent` are present and
/// `price > 0` — absence means "insufficient data" and is distinct from a
/// legitimately zero yield. Absent charges/tax count as zero inside the net
/// formula only.
pub fn compute_returns(
    price: Option<f64>,
    rent: Option<f64>,
    charges: Option<f64>,
    tax: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    let (price, rent) = match (price, rent) {
        (Some(p), Some(r)) if p > 0.0 => (p, r),
        _ => return (None, None),
    };

    let gross = rent / price * 100.0;
    let net = (rent - charges.unwrap_or(0.0) - tax.unwrap_or(0.0)) / price * 100.0;
    (Some(round2(gross)), Some(round2(net)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gross_and_net_formulas() {
        let (gross, net) = compute_returns(Some(200_000.0), Some(18_000.0), None, None);
        assert_eq!(gross, Some(9.0));
        assert_eq!(net, Some(9.0));

        let (gross, net) =
            compute_returns(Some(200_000.0), Some(18_000.0), Some(1200.0), Some(800.0));
        assert_eq!(gross, Some(9.0));
        assert_eq!(net, Some(8.0));
    }

    #[test]
    fn results_are_rounded_to_two_decimals() {
        let (gross, net) = compute_returns(Some(300_000.0), Some(10_000.0), None, None);
        assert_eq!(gross, Some(3.33));
        assert_eq!(net, Some(3.33));
    }

    #[test]
    fn zero_rent_is_a_real_zero_yield() {
        // Zero is a computable result, not missing data.
        assert_eq!(
            compute_returns(Some(100_000.0), Some(0.0), None, None),
            (Some(0.0), Some(0.0))
        );
    }

    #[test]
    fn absent_without_price_or_rent() {
        assert_eq!(compute_returns(None, Some(18_000.0), None, None), (None, None));
        assert_eq!(compute_returns(Some(200_000.0), None, None, None), (None, None));
        assert_eq!(compute_returns(None, None, Some(500.0), Some(500.0)), (None, None));
    }

    #[test]
    fn absent_for_non_positive_price() {
        assert_eq!(compute_returns(Some(0.0), Some(18_000.0), None, None), (None, None));
    }
}
