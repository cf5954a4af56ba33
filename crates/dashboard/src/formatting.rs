//! Display formatting for Rand amounts, percentages, and deltas.

/// Format a Rand amount in millions, e.g. "R74.8M".
pub fn rand_millions(amount_r: f32) -> String {
    format!("R{:.1}M", amount_r / 1_000_000.0)
}

/// Format a Rand amount with thousands separators, e.g. "R402,500".
pub fn rand_exact(amount_r: f32) -> String {
    let rounded = amount_r.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-R{grouped}")
    } else {
        format!("R{grouped}")
    }
}

/// Format a percentage with one decimal, e.g. "87.5%".
pub fn pct(value: f32) -> String {
    format!("{value:.1}%")
}

/// Format a signed delta with an explicit sign, e.g. "+370 Ml" / "-2.5%".
pub fn signed(value: f32, decimals: usize, unit: &str) -> String {
    format!("{value:+.decimals$} {unit}")
}

/// Format a volume in Ml per month, e.g. "148 Ml/month".
pub fn ml_per_month(value: f32) -> String {
    format!("{value:.0} Ml/month")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_millions() {
        assert_eq!(rand_millions(74_800_000.0), "R74.8M");
        assert_eq!(rand_millions(500_000.0), "R0.5M");
    }

    #[test]
    fn test_rand_exact_grouping() {
        assert_eq!(rand_exact(402_500.0), "R402,500");
        assert_eq!(rand_exact(4_830_000.0), "R4,830,000");
        assert_eq!(rand_exact(999.0), "R999");
        assert_eq!(rand_exact(0.0), "R0");
    }

    #[test]
    fn test_rand_exact_negative() {
        assert_eq!(rand_exact(-1_500.0), "-R1,500");
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(87.52), "87.5%");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(370.0, 0, "Ml"), "+370 Ml");
        assert_eq!(signed(-2.53, 1, "%"), "-2.5 %");
    }

    #[test]
    fn test_ml_per_month() {
        assert_eq!(ml_per_month(148.4), "148 Ml/month");
    }
}
