use super::model::{ApplicationRecord, StatusCount};

/// Count records per status.
///
/// Ordered by descending count; statuses with equal counts keep the order in
/// which they first appear in `records`.
pub fn count_by_status<'a, I>(records: I) -> Vec<StatusCount>
where
    I: IntoIterator<Item = &'a ApplicationRecord>,
{
    let mut counts: Vec<StatusCount> = Vec::new();
    for rec in records {
        match counts.iter_mut().find(|c| c.status == rec.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount::new(&rec.status, 1)),
        }
    }
    // stable sort keeps first-occurrence order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
