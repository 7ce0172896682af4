//! Read-side helpers for the listing view: free-text search and grouping
//! by location.

use crate::records::ProviderRecord;

/// Records sharing one location heading, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<'a> {
    pub location: &'a str,
    pub records: Vec<&'a ProviderRecord>,
}

/// Case-insensitive substring match over name, location, enterprise type,
/// and address. A blank query matches everything.
#[must_use]
pub fn matches_query(record: &ProviderRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        &record.name,
        &record.location,
        &record.enterprise_type,
        &record.address,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[must_use]
pub fn filter_records<'a>(records: &'a [ProviderRecord], query: &str) -> Vec<&'a ProviderRecord> {
    records.iter().filter(|r| matches_query(r, query)).collect()
}

/// Groups records by `location`, ordering groups by first appearance.
#[must_use]
pub fn group_by_location<'a, I>(records: I) -> Vec<LocationGroup<'a>>
where
    I: IntoIterator<Item = &'a ProviderRecord>,
{
    let mut groups: Vec<LocationGroup<'a>> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|g| g.location == record.location.as_str())
        {
            Some(group) => group.records.push(record),
            None => groups.push(LocationGroup {
                location: record.location.as_str(),
                records: vec![record],
            }),
        }
    }

    groups
}
