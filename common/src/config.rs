//! Build-time constants shared by the frontend and its tests.

/// Nominatim search endpoint used by the address autocomplete.
pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Maximum number of candidates requested per lookup.
pub const NOMINATIM_RESULT_LIMIT: u8 = 5;

/// Value of the `Accept-Language` header sent with every lookup.
pub const NOMINATIM_LANGUAGE: &str = "en";

/// EmailJS REST endpoint for transactional sends.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "smelly_cat";
pub const EMAILJS_TEMPLATE_ID: &str = "template_xnmrr73";
pub const EMAILJS_PUBLIC_KEY: &str = "727E-EGLO6xY0RUd1";

/// Quiet period before an address input is considered, in milliseconds.
pub const ADDRESS_DEBOUNCE_MS: u32 = 200;

/// Grace delay between losing focus and hiding suggestions, in milliseconds.
pub const SUGGESTION_HIDE_DELAY_MS: u32 = 200;

/// Queries of this many characters or fewer never reach the geocoder.
pub const MIN_QUERY_CHARS: usize = 2;

/// Viewport width at which the collapsible menu is forced shut.
pub const MENU_BREAKPOINT_PX: f64 = 768.0;

/// Office location shown on the contact page map.
pub const MAP_CENTER_LAT: f64 = 40.6345153;
pub const MAP_CENTER_LNG: f64 = 22.9415141;
pub const MAP_ZOOM: u8 = 17;
pub const MAP_MAX_ZOOM: u8 = 19;
pub const MAP_HEIGHT_PX: u32 = 400;
pub const MAP_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const MAP_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];
