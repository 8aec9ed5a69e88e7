//! Digital-safety checklist catalogue
//!
//! Device-hardening steps for someone whose phone may be monitored by a
//! partner. The catalogue is fixed; only completion state is stored.

use serde::{Deserialize, Serialize};

/// How urgently a step should be done
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A single checklist step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyItem {
    pub id: &'static str,
    pub title: &'static str,
    /// What can go wrong if the step is skipped
    pub risk: &'static str,
    /// Where the setting lives
    pub action: &'static str,
    pub details: &'static str,
    pub priority: Priority,
}

/// The checklist, highest priority first
pub const SAFETY_ITEMS: &[SafetyItem] = &[
    SafetyItem {
        id: "safety-check",
        title: "Emergency Safety Check",
        risk: "The system tool for cutting every sharing connection at once.",
        action: "Settings > Privacy & Security > Safety Check",
        details: "Use \"Emergency Reset\" to immediately stop sharing with all people and apps, \
                  or \"Manage Sharing\" to review exactly what is being shared.",
        priority: Priority::High,
    },
    SafetyItem {
        id: "text-forwarding",
        title: "Stop SMS forwarding to iPad/Mac",
        risk: "Your texts, including bank codes, can be read on another device without you knowing.",
        action: "Settings > Messages > Text Message Forwarding",
        details: "If any other device (iPad, Mac) is listed, turn it off. This stops your messages \
                  being copied to their devices.",
        priority: Priority::High,
    },
    SafetyItem {
        id: "location-sharing",
        title: "Stop location sharing",
        risk: "Someone can follow you in real time through Find My or Messages.",
        action: "Settings > Privacy > Location Services > Share My Location",
        details: "Make sure \"Share My Location\" is completely off.",
        priority: Priority::High,
    },
    SafetyItem {
        id: "significant-locations",
        title: "Significant Locations (hidden)",
        risk: "The phone keeps a precise map of places you visit often, such as work or a shelter.",
        action: "Settings > Privacy > Location > System Services",
        details: "Open Significant Locations under System Services, choose \"Clear History\" and \
                  turn the feature off.",
        priority: Priority::Medium,
    },
    SafetyItem {
        id: "2fa-security",
        title: "Two-factor authentication",
        risk: "Whoever receives your codes can change your passwords.",
        action: "Settings > Your Name > Sign-In & Security",
        details: "Trusted Phone Numbers must list only your own current number. Remove any other.",
        priority: Priority::Medium,
    },
    SafetyItem {
        id: "family-sharing",
        title: "Leave the Family group",
        risk: "Family members often get automatic access to location and purchases.",
        action: "Settings > Your Name > Family Sharing",
        details: "Select your name and choose \"Stop Using Family Sharing\".",
        priority: Priority::Medium,
    },
    SafetyItem {
        id: "faceid",
        title: "Check registered faces (Face ID)",
        risk: "A second appearance may have been registered to unlock your phone.",
        action: "Settings > Face ID & Passcode",
        details: "If \"Set up an Alternative Appearance\" is missing, two faces are registered. \
                  Reset Face ID and enrol only your own face.",
        priority: Priority::Low,
    },
    SafetyItem {
        id: "passwords-ios",
        title: "Saved passwords",
        risk: "Old or weak passwords are easy to guess.",
        action: "Settings > Passwords > Security Recommendations",
        details: "Change every password marked as compromised or that the other person may know.",
        priority: Priority::Low,
    },
];

/// Look up a catalogue item by id
pub fn find_item(id: &str) -> Option<&'static SafetyItem> {
    SAFETY_ITEMS.iter().find(|item| item.id == id)
}
