// Day allocator splitting a flat place list into per-day buckets

use crate::models::Place;

/// Partitions a flat list of selected places into per-day buckets.
///
/// Allocation is purely by count and input order: places are sliced
/// sequentially with no reordering and no redistribution by geography.
/// Within-day ordering is the route sequencer's concern.
///
/// - `days <= 1` or an empty input returns a single bucket with everything.
/// - Fewer places than days yields one place per bucket, dropping the
///   trailing days.
/// - Otherwise buckets differ in size by at most one, with the earlier days
///   taking the remainder.
pub fn distribute_places_by_days(places: &[Place], days: u32) -> Vec<Vec<Place>> {
    if days <= 1 || places.is_empty() {
        return vec![places.to_vec()];
    }

    let days = days as usize;
    if places.len() < days {
        return places.iter().map(|place| vec![place.clone()]).collect();
    }

    let base = places.len() / days;
    let extra = places.len() % days;

    let mut buckets = Vec::with_capacity(days);
    let mut cursor = 0;
    for day in 0..days {
        let take = base + usize::from(day < extra);
        buckets.push(places[cursor..cursor + take].to_vec());
        cursor += take;
    }

    buckets
}
