use super::model::{FLAG_THRESHOLD, PointSets, Record};

// ---------------------------------------------------------------------------
// Flag classification: which series each record is drawn in
// ---------------------------------------------------------------------------

/// Whether a record's flag puts it into the `down` series.
///
/// The comparison is strict, so a flag of exactly `0.5` is not flagged.
/// `NaN` never compares greater and is therefore never flagged.
pub fn is_flagged(flag: f64) -> bool {
    flag > FLAG_THRESHOLD
}

/// Add a single record to the series, preserving arrival order.
///
/// Every record goes into `up`. A flagged record is pushed into `up` a
/// second time and once into `down`, so `up` holds `records + flagged`
/// points and `down` holds `flagged` points.
fn push_record(sets: &mut PointSets, record: &Record) {
    let point = record.point();
    sets.up.push(point);
    if is_flagged(record.flag) {
        sets.up.push(point);
        sets.down.push(point);
    }
}

/// Split records into the two scatter series.
pub fn classify<'a, I>(records: I) -> PointSets
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut sets = PointSets::default();
    for record in records {
        push_record(&mut sets, record);
    }
    sets
}
