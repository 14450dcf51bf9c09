use std::collections::BTreeMap;

/// Site settings keyed by name (`address`, `phone`, `hours_sun`, ...).
pub type SettingsDto = BTreeMap<String, String>;

/// Keys the site templates expect to find.
pub const DEFAULT_SETTING_KEYS: [&str; 6] = [
    "address",
    "phone",
    "email",
    "hours_mon_thu",
    "hours_fri_sat",
    "hours_sun",
];
