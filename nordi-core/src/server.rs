//! Static directory of connectable NordVPN servers
//!
//! The nordvpn binary accepts country names and server-group names as
//! connect targets. Both lists are fixed at build time; a 1-based
//! selection index (0 meaning "no selection", i.e. quick-connect)
//! spans the countries first, then the groups.

/// Countries with NordVPN servers, in directory order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Albania,
    Germany,
    Poland,
    Argentina,
    Greece,
    Portugal,
    Australia,
    HongKong,
    Romania,
    Austria,
    Hungary,
    Serbia,
    Belgium,
    Iceland,
    Singapore,
    BosniaAndHerzegovina,
    Indonesia,
    Slovakia,
    Brazil,
    Ireland,
    Slovenia,
    Bulgaria,
    Israel,
    SouthAfrica,
    Canada,
    Italy,
    SouthKorea,
    Chile,
    Japan,
    Spain,
    Colombia,
    Latvia,
    Sweden,
    CostaRica,
    Lithuania,
    Switzerland,
    Croatia,
    Luxembourg,
    Taiwan,
    Cyprus,
    Malaysia,
    Thailand,
    CzechRepublic,
    Mexico,
    Turkey,
    Denmark,
    Moldova,
    Ukraine,
    Estonia,
    Netherlands,
    UnitedKingdom,
    Finland,
    NewZealand,
    UnitedStates,
    France,
    NorthMacedonia,
    Vietnam,
    Georgia,
    Norway,
}

/// Country table in the exact spelling the nordvpn binary reports
pub const COUNTRIES: [(Country, &str); 59] = [
    (Country::Albania, "Albania"),
    (Country::Germany, "Germany"),
    (Country::Poland, "Poland"),
    (Country::Argentina, "Argentina"),
    (Country::Greece, "Greece"),
    (Country::Portugal, "Portugal"),
    (Country::Australia, "Australia"),
    (Country::HongKong, "Hong_Kong"),
    (Country::Romania, "Romania"),
    (Country::Austria, "Austria"),
    (Country::Hungary, "Hungary"),
    (Country::Serbia, "Serbia"),
    (Country::Belgium, "Belgium"),
    (Country::Iceland, "Iceland"),
    (Country::Singapore, "Singapore"),
    (Country::BosniaAndHerzegovina, "Bosnia_And_Herzegovina"),
    (Country::Indonesia, "Indonesia"),
    (Country::Slovakia, "Slovakia"),
    (Country::Brazil, "Brazil"),
    (Country::Ireland, "Ireland"),
    (Country::Slovenia, "Slovenia"),
    (Country::Bulgaria, "Bulgaria"),
    (Country::Israel, "Israel"),
    (Country::SouthAfrica, "South_Africa"),
    (Country::Canada, "Canada"),
    (Country::Italy, "Italy"),
    (Country::SouthKorea, "South_Korea"),
    (Country::Chile, "Chile"),
    (Country::Japan, "Japan"),
    (Country::Spain, "Spain"),
    (Country::Colombia, "Colombia"),
    (Country::Latvia, "Latvia"),
    (Country::Sweden, "Sweden"),
    (Country::CostaRica, "Costa_Rica"),
    (Country::Lithuania, "Lithuania"),
    (Country::Switzerland, "Switzerland"),
    (Country::Croatia, "Croatia"),
    (Country::Luxembourg, "Luxembourg"),
    (Country::Taiwan, "Taiwan"),
    (Country::Cyprus, "Cyprus"),
    (Country::Malaysia, "Malaysia"),
    (Country::Thailand, "Thailand"),
    (Country::CzechRepublic, "Czech_Republic"),
    (Country::Mexico, "Mexico"),
    (Country::Turkey, "Turkey"),
    (Country::Denmark, "Denmark"),
    (Country::Moldova, "Moldova"),
    (Country::Ukraine, "Ukraine"),
    (Country::Estonia, "Estonia"),
    (Country::Netherlands, "Netherlands"),
    (Country::UnitedKingdom, "United_Kingdom"),
    (Country::Finland, "Finland"),
    (Country::NewZealand, "New_Zealand"),
    (Country::UnitedStates, "United_States"),
    (Country::France, "France"),
    (Country::NorthMacedonia, "North_Macedonia"),
    (Country::Vietnam, "Vietnam"),
    (Country::Georgia, "Georgia"),
    (Country::Norway, "Norway"),
];

/// Specialty server-group targets
pub const GROUPS: [&str; 8] = [
    "Africa_The_Middle_East_And_India",
    "Onion_Over_VPN",
    "Asia_Pacific",
    "P2P",
    "Double_VPN",
    "Standard_VPN_Servers",
    "Europe",
    "The_Americas",
];

/// Number of country options
pub const COUNTRY_COUNT: usize = COUNTRIES.len();

/// Number of server-group options
pub const GROUP_COUNT: usize = GROUPS.len();

impl Country {
    /// Look up a country by the exact name the binary reports
    ///
    /// Matching is case-sensitive; status output and this table use
    /// the same spelling.
    pub fn from_name(name: &str) -> Option<Country> {
        COUNTRIES
            .iter()
            .find(|(_, country_name)| *country_name == name)
            .map(|(country, _)| *country)
    }

    /// The connect-target name for this country
    pub fn name(self) -> &'static str {
        COUNTRIES[self as usize].1
    }
}

/// Resolve a 1-based selection index into a connect-target name
///
/// Indices `1..=COUNTRY_COUNT` map to countries, the next
/// `GROUP_COUNT` indices map to groups. `0` and anything past the end
/// mean "no selection" and resolve to `None` (quick-connect).
pub fn node_from_index(index: usize) -> Option<&'static str> {
    if index == 0 || index > COUNTRY_COUNT + GROUP_COUNT {
        return None;
    }
    if index <= COUNTRY_COUNT {
        Some(COUNTRIES[index - 1].1)
    } else {
        Some(GROUPS[index - COUNTRY_COUNT - 1])
    }
}
