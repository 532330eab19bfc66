/// Event id assigned by SQLite to the first inserted event; fixtures insert
/// the event before anything else so this lines up with auto-increment.
pub const TEST_EVENT_ID: i32 = 1;

pub const TEST_EVENT_NAME: &str = "Convention 2026";

pub const TEST_USER_ID: i32 = 1;

pub const TEST_AIRPORT_MALPENSA: &str = "Milano Malpensa";
pub const TEST_AIRPORT_VENEZIA: &str = "Venezia";

pub const TEST_IATA_MALPENSA: &str = "MXP";
pub const TEST_IATA_VENEZIA: &str = "VCE";
