//! Country dialing codes offered by the sign-up form

/// A selectable country
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    /// International dialing code, e.g. "+62"
    pub code: &'static str,
    /// ISO 3166-1 alpha-2
    pub iso: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "Indonesia",
        code: "+62",
        iso: "ID",
    },
    Country {
        name: "United Kingdom",
        code: "+44",
        iso: "GB",
    },
    Country {
        name: "United States",
        code: "+1",
        iso: "US",
    },
    Country {
        name: "Australia",
        code: "+61",
        iso: "AU",
    },
    Country {
        name: "Austria",
        code: "+43",
        iso: "AT",
    },
];

impl Country {
    /// Find a country by its dialing code
    pub fn by_code(code: &str) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.code == code)
    }

    /// Position of a dialing code in [`COUNTRIES`]
    pub fn index_of(code: &str) -> Option<usize> {
        COUNTRIES.iter().position(|c| c.code == code)
    }

    /// Label shown in the picker
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
