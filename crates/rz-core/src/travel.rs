//! Fast-travel vehicles and their destination menus.

/// One entry of a travel menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// Location key, also the key in the player's unlocked set.
    pub id: &'static str,
    /// Name shown once unlocked.
    pub label: &'static str,
}

/// An item that carries the player between distant locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vehicle {
    /// Sails between ports.
    Boat,
    /// Flies anywhere outside the sanctum.
    Airship,
}

const BOAT_ROUTES: &[Destination] = &[
    Destination {
        id: "dock",
        label: "Razukan Docks",
    },
    Destination {
        id: "lokendar_se",
        label: "Lokendar",
    },
    Destination {
        id: "spring_of_courage",
        label: "Spring of Courage",
    },
    Destination {
        id: "whirlpool",
        label: "The Whirlpool",
    },
];

const AIRSHIP_ROUTES: &[Destination] = &[
    Destination {
        id: "town_square",
        label: "Town Square",
    },
    Destination {
        id: "lokendar_nw",
        label: "Lokendar Capital",
    },
    Destination {
        id: "thanatos_spire",
        label: "Thanatos' Spire",
    },
];

impl Vehicle {
    /// The vehicle an item name stands for.
    pub fn from_item(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "boat" => Some(Self::Boat),
            "airship" => Some(Self::Airship),
            _ => None,
        }
    }

    /// Item name of the vehicle.
    pub fn item_name(self) -> &'static str {
        match self {
            Self::Boat => "boat",
            Self::Airship => "airship",
        }
    }

    /// Menu entries, in display order.
    pub fn destinations(self) -> &'static [Destination] {
        match self {
            Self::Boat => BOAT_ROUTES,
            Self::Airship => AIRSHIP_ROUTES,
        }
    }

    /// Whether the vehicle can leave from this location.
    pub fn can_depart_from(self, location: &str) -> bool {
        match self {
            Self::Boat => BOAT_ROUTES.iter().any(|d| d.id == location),
            Self::Airship => location != "razukan_sanctum",
        }
    }

    /// Message shown when the vehicle cannot leave from here.
    pub fn grounded_message(self) -> &'static str {
        match self {
            Self::Boat => "You can only use the boat at a dock.",
            Self::Airship => "The airship cannot reach you here.",
        }
    }

    /// Verb used in the arrival message.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Boat => "sail",
            Self::Airship => "fly",
        }
    }
}
