use serde::Serialize;

static CENTRAL_STATIONS: [&str; 10] = [
    "Centrala", "Jaund", "Bylyn", "Rele", "Frestin", "Sath", "Ninia", "Tallan", "Lomil", "Yaen",
];

static MIDTOWN_STATIONS: [&str; 12] = [
    "Riolva", "Quthiel", "Wicyt", "Agrafie", "Docia", "Stonyam", "Obelyn", "Ralith", "Garion",
    "Sylas", "Riladia", "Oloadus",
];

static DOWNTOWN_STATIONS: [&str; 14] = [
    "Erean", "Brunad", "Zord", "Marend", "Ryall", "Pryn", "Ederif", "Holmer", "Vertwall", "Ruril",
    "Pennad", "Kervia", "Elyot", "Adohad",
];

/// Fare zones, declared in rank order along the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    Central,
    Midtown,
    Downtown,
}

impl Zone {
    /// Menu order.
    pub const ALL: [Zone; 3] = [Zone::Central, Zone::Midtown, Zone::Downtown];

    pub fn rank(self) -> u32 {
        match self {
            Zone::Central => 0,
            Zone::Midtown => 1,
            Zone::Downtown => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Zone::Central => "Central",
            Zone::Midtown => "Midtown",
            Zone::Downtown => "Downtown",
        }
    }

    pub fn stations(self) -> &'static [&'static str] {
        match self {
            Zone::Central => &CENTRAL_STATIONS,
            Zone::Midtown => &MIDTOWN_STATIONS,
            Zone::Downtown => &DOWNTOWN_STATIONS,
        }
    }

    pub fn sorted_stations(self) -> Vec<&'static str> {
        let mut stations = self.stations().to_vec();
        stations.sort_unstable();
        stations
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Passenger classes, in the order counts are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FareCategory {
    Adult,
    Child,
    Senior,
    Student,
}

impl FareCategory {
    pub const ALL: [FareCategory; 4] = [
        FareCategory::Adult,
        FareCategory::Child,
        FareCategory::Senior,
        FareCategory::Student,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FareCategory::Adult => "Adult",
            FareCategory::Child => "Child",
            FareCategory::Senior => "Senior",
            FareCategory::Student => "Student",
        }
    }

    /// Fare in cents for each zone travelled.
    pub fn rate(self) -> u64 {
        match self {
            FareCategory::Adult => 2105,
            FareCategory::Child => 1410,
            FareCategory::Senior => 1025,
            FareCategory::Student => 1750,
        }
    }
}

impl std::fmt::Display for FareCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Number of zones a trip is charged for, counting both ends.
///
/// Zones are treated as a straight line (Central, Midtown, Downtown), so the
/// result is the rank distance plus one and always falls in `1..=3`.
pub fn zones_travelled(start: Zone, dest: Zone) -> u32 {
    start.rank().abs_diff(dest.rank()) + 1
}
