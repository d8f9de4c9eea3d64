use strum::{AsRefStr, EnumString};

///
/// Who is responsible for acknowledging deliveries.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AcknowledgmentMode {
    /// Dispatcher sends ack/nack for every delivery
    #[strum(serialize = "manual")]
    Manual,

    /// Broker acknowledges at send time, dispatcher never does
    #[strum(serialize = "auto")]
    Auto,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_manual() {
        let mode = AcknowledgmentMode::from_str("manual").unwrap();
        assert_eq!(mode, AcknowledgmentMode::Manual);
    }

    #[test]
    fn parse_auto_ignores_case() {
        let mode = AcknowledgmentMode::from_str("AUTO").unwrap();
        assert_eq!(mode, AcknowledgmentMode::Auto);
    }

    #[test]
    fn parse_unknown() {
        assert!(AcknowledgmentMode::from_str("sometimes").is_err());
    }

    #[test]
    fn as_ref() {
        assert_eq!(AcknowledgmentMode::Manual.as_ref(), "manual");
        assert_eq!(AcknowledgmentMode::Auto.as_ref(), "auto");
    }
}
