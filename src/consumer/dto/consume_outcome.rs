///
/// Result of processing a single delivery.
///
/// Consumers that only know "consumed or not" can return `bool`, which maps
/// `true` to [`ConsumeOutcome::Accepted`] and `false` to
/// [`ConsumeOutcome::RejectedDiscard`]. Returning an error from the consumer
/// behaves exactly like [`ConsumeOutcome::RejectedRequeue`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    Accepted,
    RejectedRequeue,
    RejectedDiscard,
}

impl From<bool> for ConsumeOutcome {
    fn from(consumed: bool) -> Self {
        match consumed {
            true => ConsumeOutcome::Accepted,
            false => ConsumeOutcome::RejectedDiscard,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_true() {
        assert_eq!(ConsumeOutcome::from(true), ConsumeOutcome::Accepted);
    }

    #[test]
    fn from_false() {
        assert_eq!(ConsumeOutcome::from(false), ConsumeOutcome::RejectedDiscard);
    }
}
