use crate::models::MonthlySummary;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct SummarySlot {
    issued: u64,
    summary: Option<MonthlySummary>,
}

impl SummarySlot {
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: Option<MonthlySummary>) -> bool {
        if !self.is_latest(ticket) {
            debug!(ticket = ticket.0, latest = self.issued, "discarding stale monthly summary");
            return false;
        }
        self.summary = outcome;
        true
    }

    pub fn current(&self) -> Option<&MonthlySummary> {
        self.summary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::tests::summary;

    fn month(name: &str) -> MonthlySummary {
        let mut data = summary(&[], &[]);
        data.month = name.to_string();
        data
    }

    #[test]
    fn applies_latest_response() {
        let mut slot = SummarySlot::default();
        let ticket = slot.begin();
        assert!(slot.complete(ticket, Some(month("2024-06"))));
        assert_eq!(slot.current().map(|s| s.month.as_str()), Some("2024-06"));
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_state() {
        let mut slot = SummarySlot::default();
        let first = slot.begin();
        let second = slot.begin();
        assert!(slot.complete(second, Some(month("new"))));
        assert!(!slot.complete(first, Some(month("old"))));
        assert_eq!(slot.current().map(|s| s.month.as_str()), Some("new"));
    }

    #[test]
    fn stale_response_is_dropped_even_before_newer_arrives() {
        let mut slot = SummarySlot::default();
        let first = slot.begin();
        let _second = slot.begin();
        assert!(!slot.complete(first, Some(month("old"))));
        assert!(slot.current().is_none());
    }

    #[test]
    fn failed_latest_fetch_clears_summary() {
        let mut slot = SummarySlot::default();
        let ticket = slot.begin();
        slot.complete(ticket, Some(month("2024-06")));
        let ticket = slot.begin();
        assert!(slot.complete(ticket, None));
        assert!(slot.current().is_none());
    }
}
