use crate::app::theme;
use crate::foundation::core::Rgba;

/// A product shown on the Products page and its detail view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    /// Card title in the list.
    pub list_title: &'static str,
    pub list_status: &'static str,
    /// Date suffix after "Last Updated:", including its leading space.
    pub last_updated: &'static str,
    /// Title in the detail view.
    pub name: &'static str,
    pub status: &'static str,
    pub status_color: Rgba,
    pub version: &'static str,
    pub subscription: &'static str,
    pub expiration: &'static str,
    pub features: [&'static str; 3],
}

/// A release note card on the Updates page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateEntry {
    pub version: &'static str,
    pub date: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub bullets: [&'static str; 3],
}

pub const PRODUCTS: [Product; 2] = [
    Product {
        list_title: "TK \u{2013} Toolkit",
        list_status: "Working / Undetected",
        last_updated: " 2025-11-25T09:46:13",
        name: "TK - Toolkit",
        status: "Undetected",
        status_color: theme::STATUS_OK,
        version: "v1.2.3",
        subscription: "2025-11-01",
        expiration: "2026-11-01",
        features: [
            "\u{2022} Advanced Module",
            "\u{2022} Auto-update system",
            "\u{2022} 24/7 support",
        ],
    },
    Product {
        list_title: "DM \u{2013} Device Modifier",
        list_status: "USE AT OWN RISK",
        last_updated: " 2025-11-28T15:32:47",
        name: "DM - Device Modifier",
        status: "USE AT OWN RISK",
        status_color: theme::STATUS_WARN,
        version: "v1.2.3",
        subscription: "2025-11-01",
        expiration: "2026-11-01",
        features: [
            "\u{2022} Hardware ID spoofing",
            "\u{2022} Registry protection",
            "\u{2022} HWID cleaner",
        ],
    },
];

pub const UPDATES: [UpdateEntry; 2] = [
    UpdateEntry {
        version: "v2.3.1",
        date: "November 28, 2025",
        badge: "LATEST",
        title: "Performance Improvements & Bug Fixes",
        bullets: [
            "- Optimized rendering engine for 30% faster performance",
            "- Fixed memory leak in authentication module",
            "- Enhanced security protocols",
        ],
    },
    UpdateEntry {
        version: "v2.2.0",
        date: "November 15, 2025",
        badge: "STABLE",
        title: "New Feature Release",
        bullets: [
            "- Added dark mode support across all components",
            "- Implemented auto-update functionality",
            "- New dashboard analytics",
        ],
    },
];

