//! Per-customer ticket status aggregation.
//!
//! A customer's ticket counts are derived at read time, never stored. Every
//! ticket contributes to `total` and to at most one bucket; `open` tickets
//! appear in the total only, since the reporting buckets are the five
//! post-intake states.

use serde::Serialize;

use crate::status::TicketStatus;

/// Ticket counts partitioned by status bucket.
///
/// All buckets default to zero, so a customer with no tickets reports
/// `{pending: 0, waiting: 0, in_progress: 0, closed: 0, ready: 0}` rather
/// than being omitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketStatusCounts {
    pub pending: i64,
    pub waiting: i64,
    pub in_progress: i64,
    pub closed: i64,
    pub ready: i64,
}

impl TicketStatusCounts {
    /// Count one ticket with the given status.
    pub fn add(&mut self, status: TicketStatus) {
        match status {
            TicketStatus::Pending => self.pending += 1,
            TicketStatus::Waiting => self.waiting += 1,
            TicketStatus::InProgress => self.in_progress += 1,
            TicketStatus::Closed => self.closed += 1,
            TicketStatus::Ready => self.ready += 1,
            TicketStatus::Open => {}
        }
    }
}

/// Tally a customer's tickets into `(total, buckets)`.
pub fn tally<I>(statuses: I) -> (i64, TicketStatusCounts)
where
    I: IntoIterator<Item = TicketStatus>,
{
    let mut total = 0;
    let mut counts = TicketStatusCounts::default();
    for status in statuses {
        total += 1;
        counts.add(status);
    }
    (total, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tickets_report_zero_buckets() {
        let (total, counts) = tally([]);
        assert_eq!(total, 0);
        assert_eq!(counts, TicketStatusCounts::default());
    }

    #[test]
    fn pending_and_two_closed() {
        let (total, counts) = tally([
            TicketStatus::Pending,
            TicketStatus::Closed,
            TicketStatus::Closed,
        ]);
        assert_eq!(total, 3);
        assert_eq!(
            counts,
            TicketStatusCounts {
                pending: 1,
                waiting: 0,
                in_progress: 0,
                closed: 2,
                ready: 0,
            }
        );
    }

    #[test]
    fn each_ticket_lands_in_exactly_one_bucket() {
        let (total, counts) = tally([
            TicketStatus::Pending,
            TicketStatus::Waiting,
            TicketStatus::InProgress,
            TicketStatus::Ready,
            TicketStatus::Closed,
        ]);
        assert_eq!(total, 5);
        let bucket_sum =
            counts.pending + counts.waiting + counts.in_progress + counts.closed + counts.ready;
        assert_eq!(bucket_sum, 5);
    }

    #[test]
    fn open_tickets_count_toward_total_only() {
        let (total, counts) = tally([TicketStatus::Open, TicketStatus::Pending]);
        assert_eq!(total, 2);
        assert_eq!(counts.pending, 1);
        let bucket_sum =
            counts.pending + counts.waiting + counts.in_progress + counts.closed + counts.ready;
        assert_eq!(bucket_sum, 1);
    }
}
