//! Static region reference data for the address selects.
//!
//! The table is compiled in and never mutated; the form only reads it to
//! populate the State dropdown and to resolve the dependent City/Area list.

/// A first-level administrative area and its selectable localities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub localities: &'static [&'static str],
}

/// Look up a region by exact name match and return its locality list.
///
/// Unknown names, including the empty string, resolve to an empty slice.
pub fn localities_for(regions: &'static [Region], name: &str) -> &'static [&'static str] {
    regions
        .iter()
        .find(|region| region.name == name)
        .map(|region| region.localities)
        .unwrap_or(&[])
}

/// Indian states and the city/area options offered under each.
pub static INDIA_REGIONS: &[Region] = &[
    Region {
        name: "Maharashtra",
        localities: &[
            "Mumbai (All Areas)",
            "Mumbai - South",
            "Mumbai - Bandra/West",
            "Mumbai - Andheri/Juhu",
            "Mumbai - Borivali/North",
            "Navi Mumbai",
            "Thane",
            "Pune",
            "Nagpur",
            "Nashik",
            "Aurangabad",
            "Solapur",
        ],
    },
    Region {
        name: "Delhi NCR",
        localities: &["New Delhi", "Gurgaon", "Noida", "Ghaziabad", "Faridabad"],
    },
    Region {
        name: "Karnataka",
        localities: &["Bengaluru", "Mysuru", "Mangaluru", "Hubli-Dharwad", "Belagavi"],
    },
    Region {
        name: "Tamil Nadu",
        localities: &["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem"],
    },
    Region {
        name: "Telangana",
        localities: &["Hyderabad", "Warangal", "Nizamabad", "Karimnagar"],
    },
    Region {
        name: "Gujarat",
        localities: &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar"],
    },
    Region {
        name: "West Bengal",
        localities: &["Kolkata", "Howrah", "Durgapur", "Asansol", "Siliguri"],
    },
    Region {
        name: "Rajasthan",
        localities: &["Jaipur", "Jodhpur", "Kota", "Udaipur", "Ajmer"],
    },
    Region {
        name: "Uttar Pradesh",
        localities: &["Lucknow", "Kanpur", "Agra", "Varanasi", "Prayagraj"],
    },
    Region {
        name: "Kerala",
        localities: &["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur"],
    },
];
