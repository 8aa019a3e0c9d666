//! Named delivery stops on the route map.

/// Stops visited in order. The route loops back to the depot after the last one.
pub const LOCATIONS: [&str; 10] = [
    "Downtown Depot",
    "Suburb Mall",
    "Industrial Zone",
    "Harbor Port",
    "Mountain Village",
    "Airport Terminal",
    "Beach Resort",
    "Forest Camp",
    "City Center",
    "Space Station",
];

/// The stop where `level` is played.
pub fn location_for_level(level: u32) -> &'static str {
    let idx = level.saturating_sub(1) as usize % LOCATIONS.len();
    LOCATIONS[idx]
}

/// The stop the truck drives to after finishing `level`.
pub fn next_location_for_level(level: u32) -> &'static str {
    LOCATIONS[level as usize % LOCATIONS.len()]
}
