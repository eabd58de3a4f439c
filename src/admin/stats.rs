//! Aggregate counters shown above the RSVP table.

use crate::models::RsvpRecord;

/// Response counters for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpStats {
    /// Sum of guest counts over every record
    pub total_responses: i64,
    /// Records answering yes
    pub attending: usize,
    /// Records answering no
    pub not_attending: usize,
    /// Sum of guest counts over attending records
    pub total_guests: i64,
}

impl RsvpStats {
    pub fn from_records(records: &[RsvpRecord]) -> Self {
        // Guest counts come from the sheet unchecked, so sums saturate.
        let total_responses = records
            .iter()
            .map(RsvpRecord::guest_count)
            .fold(0i64, i64::saturating_add);
        let attending = records.iter().filter(|r| r.is_attending()).count();
        let not_attending = records.iter().filter(|r| r.is_declined()).count();
        let total_guests = records
            .iter()
            .filter(|r| r.is_attending())
            .map(RsvpRecord::guest_count)
            .fold(0i64, i64::saturating_add);

        Self {
            total_responses,
            attending,
            not_attending,
            total_guests,
        }
    }
}
