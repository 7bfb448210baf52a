use std::time::Duration;

pub const ALERT_DURATION: Duration = Duration::from_millis(3000);
pub const ALERT_MESSAGE: &str = "This feature is not implemented";
pub const ALERT_SEVERITY: &str = "warning";

/// Identifies one trigger of the banner. Only the newest ticket can dismiss it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTicket(u64);

#[derive(Debug, Default, Clone)]
pub struct AlertBanner {
    visible: bool,
    generation: u64,
}

impl AlertBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self) -> AlertTicket {
        self.generation += 1;
        self.visible = true;
        AlertTicket(self.generation)
    }

    /// Hides the banner if no newer trigger happened since `ticket` was issued.
    pub fn dismiss(&mut self, ticket: AlertTicket) -> bool {
        if !self.visible || ticket.0 != self.generation {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message<'a>(&self) -> &'a str {
        ALERT_MESSAGE
    }

    pub fn duration(&self) -> Duration {
        ALERT_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_ticket_does_not_hide_banner() {
        let mut banner = AlertBanner::new();
        let first = banner.trigger();
        let second = banner.trigger();

        assert!(!banner.dismiss(first));
        assert!(banner.is_visible());

        assert!(banner.dismiss(second));
        assert!(!banner.is_visible());
        assert!(!banner.dismiss(second));
    }

    #[test]
    fn defaults() {
        let banner = AlertBanner::new();
        assert!(!banner.is_visible());
        assert_eq!(banner.duration().as_millis(), 3000);
        assert_eq!(banner.message(), "This feature is not implemented");
    }
}
