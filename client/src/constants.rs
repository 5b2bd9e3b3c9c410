//! Static option sets and route paths shared across pages.

/// Item categories offered by the category filter.
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Accessories",
    "Bags",
    "Books",
    "Documents",
    "Keys",
    "Wallets",
    "Other",
];

/// Campus locations offered by the location filter.
pub const LOCATIONS: &[&str] = &[
    "Library",
    "Cafeteria",
    "Main Building",
    "Student Center",
    "Sports Complex",
    "Parking Lot",
    "Dormitories",
    "Auditorium",
    "Other",
];

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const LOST_ITEMS_ROUTE: &str = "/lost-items";
pub const SESSION_EXPIRED_ROUTE: &str = "/session-expired";
