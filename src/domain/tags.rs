//! Small typed list transformations.

/// Upper-case every tag, keeping order.
///
/// `force` is accepted for call-site compatibility and currently has no effect.
pub fn process_tags(tags: &[String], _force: bool) -> Vec<String> {
    tags.iter().map(|tag| tag.to_uppercase()).collect()
}

/// Keys of `data` in their given order, or nothing when there is no data.
///
/// Duplicate keys are kept.
pub fn process_data(data: Option<&[(String, i64)]>) -> Vec<String> {
    match data {
        Some(entries) => entries.iter().map(|(key, _)| key.clone()).collect(),
        None => Vec::new(),
    }
}
