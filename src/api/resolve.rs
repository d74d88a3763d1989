use super::models::Zone;

/// Lower-cases a zone name and strips a single trailing dot.
pub fn normalize_zone_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_lowercase()
}

/// Picks the zone a user-supplied reference points at.
///
/// IDs are compared verbatim first, across every zone, so an ID that happens
/// to look like another zone's name still resolves as an ID. Only then are
/// names compared after [`normalize_zone_name`]. Zones with an empty ID are
/// never returned.
pub fn find_zone<'a>(zones: &'a [Zone], name_or_id: &str) -> Option<&'a Zone> {
    if name_or_id.is_empty() {
        return None;
    }

    if let Some(zone) = zones
        .iter()
        .find(|zone| !zone.id.is_empty() && zone.id == name_or_id)
    {
        return Some(zone);
    }

    let wanted = normalize_zone_name(name_or_id);
    if wanted.is_empty() {
        return None;
    }
    zones
        .iter()
        .filter(|zone| !zone.id.is_empty())
        .find(|zone| normalize_zone_name(&zone.name) == wanted)
}
