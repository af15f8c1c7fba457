//! Fade-in-on-view scheduling.

/// Delay for the `index`-th match of a reveal selector
pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// Read a `data-delay` attribute. Missing or garbage means no delay.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 80), 0);
        assert_eq!(stagger_delay(3, 80), 240);
        assert_eq!(stagger_delay(usize::MAX, 80), u32::MAX);
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(Some("160")), 160);
        assert_eq!(parse_delay(Some(" 80 ")), 80);
        assert_eq!(parse_delay(Some("")), 0);
        assert_eq!(parse_delay(Some("soon")), 0);
        assert_eq!(parse_delay(None), 0);
    }
}
