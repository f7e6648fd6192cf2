//! Canonical province identifiers and display languages.
//!
//! Every lookup table in the crate is keyed by [`Province`]. The canonical
//! English name is the only spelling accepted by [`Province::from_str`];
//! localized input goes through [`crate::translator`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the 34 Afghan provinces, identified by its canonical English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Province {
    Badakhshan,
    Badghis,
    Baghlan,
    Balkh,
    Bamyan,
    Daykundi,
    Farah,
    Faryab,
    Ghazni,
    Ghor,
    Helmand,
    Herat,
    Jowzjan,
    Kabul,
    Kandahar,
    Kapisa,
    Khost,
    Kunar,
    Kunduz,
    Laghman,
    Logar,
    MaidanWardak,
    Nangarhar,
    Nimruz,
    Nuristan,
    Paktia,
    Paktika,
    Panjshir,
    Parwan,
    Samangan,
    SarePol,
    Takhar,
    Uruzgan,
    Zabul,
}

impl Province {
    /// All provinces, ordered by canonical name.
    pub const ALL: [Province; 34] = [
        Province::Badakhshan,
        Province::Badghis,
        Province::Baghlan,
        Province::Balkh,
        Province::Bamyan,
        Province::Daykundi,
        Province::Farah,
        Province::Faryab,
        Province::Ghazni,
        Province::Ghor,
        Province::Helmand,
        Province::Herat,
        Province::Jowzjan,
        Province::Kabul,
        Province::Kandahar,
        Province::Kapisa,
        Province::Khost,
        Province::Kunar,
        Province::Kunduz,
        Province::Laghman,
        Province::Logar,
        Province::MaidanWardak,
        Province::Nangarhar,
        Province::Nimruz,
        Province::Nuristan,
        Province::Paktia,
        Province::Paktika,
        Province::Panjshir,
        Province::Parwan,
        Province::Samangan,
        Province::SarePol,
        Province::Takhar,
        Province::Uruzgan,
        Province::Zabul,
    ];

    /// Canonical English name, the key used by every table.
    pub const fn as_str(self) -> &'static str {
        match self {
            Province::Badakhshan => "Badakhshan",
            Province::Badghis => "Badghis",
            Province::Baghlan => "Baghlan",
            Province::Balkh => "Balkh",
            Province::Bamyan => "Bamyan",
            Province::Daykundi => "Daykundi",
            Province::Farah => "Farah",
            Province::Faryab => "Faryab",
            Province::Ghazni => "Ghazni",
            Province::Ghor => "Ghor",
            Province::Helmand => "Helmand",
            Province::Herat => "Herat",
            Province::Jowzjan => "Jowzjan",
            Province::Kabul => "Kabul",
            Province::Kandahar => "Kandahar",
            Province::Kapisa => "Kapisa",
            Province::Khost => "Khost",
            Province::Kunar => "Kunar",
            Province::Kunduz => "Kunduz",
            Province::Laghman => "Laghman",
            Province::Logar => "Logar",
            Province::MaidanWardak => "Maidan Wardak",
            Province::Nangarhar => "Nangarhar",
            Province::Nimruz => "Nimruz",
            Province::Nuristan => "Nuristan",
            Province::Paktia => "Paktia",
            Province::Paktika => "Paktika",
            Province::Panjshir => "Panjshir",
            Province::Parwan => "Parwan",
            Province::Samangan => "Samangan",
            Province::SarePol => "Sar-e Pol",
            Province::Takhar => "Takhar",
            Province::Uruzgan => "Uruzgan",
            Province::Zabul => "Zabul",
        }
    }

    /// Position in [`Province::ALL`], usable as a dense array index.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a canonical province name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown canonical province name: {0:?}")]
pub struct UnknownProvince(pub String);

impl FromStr for Province {
    type Err = UnknownProvince;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Province::ALL
            .iter()
            .copied()
            .find(|province| province.as_str() == s)
            .ok_or_else(|| UnknownProvince(s.to_string()))
    }
}

impl Serialize for Province {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Province {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Display language for province names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    /// Dari.
    #[serde(rename = "prs")]
    Prs,
    /// Pashto.
    #[serde(rename = "pbt")]
    Pbt,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Prs, Language::Pbt];

    pub const fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Prs => "prs",
            Language::Pbt => "pbt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_and_indexed() {
        for (i, province) in Province::ALL.iter().enumerate() {
            assert_eq!(province.index(), i);
        }
        for pair in Province::ALL.windows(2) {
            assert!(pair[0].as_str() < pair[1].as_str(), "{} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("Kabul".parse::<Province>(), Ok(Province::Kabul));
        assert_eq!("Sar-e Pol".parse::<Province>(), Ok(Province::SarePol));
        assert_eq!("Maidan Wardak".parse::<Province>(), Ok(Province::MaidanWardak));
        assert!("kabul".parse::<Province>().is_err());
        assert!("Atlantis".parse::<Province>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Province::SarePol).unwrap();
        assert_eq!(json, "\"Sar-e Pol\"");
        let back: Province = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Province::SarePol);
        assert!(serde_json::from_str::<Province>("\"Atlantis\"").is_err());
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(serde_json::to_string(&Language::Prs).unwrap(), "\"prs\"");
        let tags: Vec<_> = Language::ALL.iter().map(|l| l.tag()).collect();
        assert_eq!(tags, vec!["en", "prs", "pbt"]);
    }
}
