//! Built-in lifetime presets.

use ferry_entity::FileLifetime;

/// The presets offered on every upload form, in ascending order.
pub const LIFETIME_CATALOG: [FileLifetime; 5] = [
    FileLifetime::from_days(1),
    FileLifetime::from_days(7),
    FileLifetime::from_days(30),
    FileLifetime::from_years(1),
    FileLifetime::INFINITE,
];
