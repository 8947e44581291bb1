use rand::Rng;

pub const REFERENCE_PREFIX: &str = "EVT";

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub fn payment_reference(event_id: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        REFERENCE_PREFIX,
        event_id,
        chrono::Utc::now().timestamp_millis(),
        random_suffix(6)
    )
}

pub fn tracked_payment_id() -> String {
    format!(
        "{}_{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(9)
    )
}

pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{payment_reference, random_suffix, tracked_payment_id};

    #[test]
    fn reference_carries_prefix_and_event() {
        let reference = payment_reference("42");
        assert!(reference.starts_with("EVT_42_"));
        assert_eq!(reference.split('_').count(), 4);
    }

    #[test]
    fn suffix_has_requested_length() {
        assert_eq!(random_suffix(6).len(), 6);
        assert_eq!(random_suffix(9).len(), 9);
    }

    #[test]
    fn tracked_ids_differ_across_calls() {
        assert_ne!(tracked_payment_id(), tracked_payment_id());
    }
}
