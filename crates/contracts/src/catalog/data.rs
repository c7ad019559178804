//! Built-in lookup tables for the entry form.
//!
//! Entries are listed in display order.

/// Selection shown when the page starts.
pub const DEFAULT_TOP_LEVEL: &str = "Expense";
pub const DEFAULT_SUBCATEGORY: &str = "Food";

/// (label, default subcategory, subcategories)
pub(crate) const TOP_LEVELS: &[(&str, &str, &[&str])] = &[
    (
        "Expense",
        "Food",
        &[
            "Food",
            "Purchases",
            "Transportation",
            "Entertainment",
            "Travel",
            "Fixed",
            "Others",
        ],
    ),
    (
        "Income",
        "Salary",
        &["Salary", "Cash", "Gifts", "Investment", "Sales", "Others"],
    ),
];

/// (subcategory, leaf options)
///
/// `Others` is listed twice on purpose: once as an expense subcategory and once
/// as an income subcategory. Lookups resolve to the later entry.
pub(crate) const SUBCATEGORIES: &[(&str, &[&str])] = &[
    ("Food", &["Groceries", "Eating Out", "Alcohol"]),
    (
        "Purchases",
        &[
            "Books",
            "Clothes",
            "Grooming",
            "Electronica",
            "Software",
            "Household",
            "Hobby",
            "Office",
            "Gifts",
            "Other",
        ],
    ),
    (
        "Transportation",
        &[
            "Local Transport",
            "Flights",
            "Distance Transport",
            "Bicycle",
            "Car",
            "Taxi",
        ],
    ),
    (
        "Entertainment",
        &["Cinema", "Theatre", "Concert", "Museum", "Others"],
    ),
    ("Travel", &["Accommodation", "Flights", "Souvenirs", "Other"]),
    (
        "Fixed",
        &[
            "Mobile Phone",
            "Rent",
            "Utilities",
            "Subscriptions",
            "Insurance",
        ],
    ),
    (
        "Others",
        &[
            "Charity",
            "Lending",
            "Mediacl",
            "Incidental Expenses",
            "Other",
        ],
    ),
    ("Salary", &["Regular", "One-off", "Others"]),
    ("Cash", &["Found", "Others"]),
    ("Gifts", &["Birthday", "Christmas", "Others"]),
    ("Investment", &["Interest", "Others"]),
    ("Sales", &["Clothes", "Household", "Others"]),
    ("Others", &["---"]),
];
