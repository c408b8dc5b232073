/// `--limit` when given, otherwise the configured `general.default_limit`.
#[must_use]
pub const fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    match flag {
        Some(limit) => limit,
        None => configured,
    }
}

/// Truncate `items` to `limit` entries.
pub fn take<T>(mut items: Vec<T>, limit: u32) -> Vec<T> {
    items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    items
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, take};

    #[test]
    fn flag_overrides_configured_default() {
        assert_eq!(effective_limit(Some(5), 20), 5);
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn take_truncates() {
        assert_eq!(take(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(take(vec![1], 5), vec![1]);
        assert!(take(Vec::<u8>::new(), 0).is_empty());
    }
}
