//! Province name translation between canonical English and Dari/Pashto.
//!
//! Resolution of user input tries, in order: the canonical English name,
//! the Dari table, then the Pashto table. Anything else is unresolved and
//! reported as `None`; callers turn that into a not-found response.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::province::{Language, Province};

/// Dari display names.
const DARI_NAMES: &[(Province, &str)] = &[
    (Province::Badakhshan, "بدخشان"),
    (Province::Badghis, "بادغیس"),
    (Province::Baghlan, "بغلان"),
    (Province::Balkh, "بلخ"),
    (Province::Bamyan, "بامیان"),
    (Province::Daykundi, "دایکندی"),
    (Province::Farah, "فراه"),
    (Province::Faryab, "فاریاب"),
    (Province::Ghazni, "غزنی"),
    (Province::Ghor, "غور"),
    (Province::Helmand, "هلمند"),
    (Province::Herat, "هرات"),
    (Province::Jowzjan, "جوزجان"),
    (Province::Kabul, "کابل"),
    (Province::Kandahar, "قندهار"),
    (Province::Kapisa, "کاپیسا"),
    (Province::Khost, "خوست"),
    (Province::Kunar, "کنر"),
    (Province::Kunduz, "کندز"),
    (Province::Laghman, "لغمان"),
    (Province::Logar, "لوگر"),
    (Province::MaidanWardak, "میدان وردک"),
    (Province::Nangarhar, "ننگرهار"),
    (Province::Nimruz, "نیمروز"),
    (Province::Nuristan, "نورستان"),
    (Province::Paktia, "پکتیا"),
    (Province::Paktika, "پکتیکا"),
    (Province::Panjshir, "پنجشیر"),
    (Province::Parwan, "پروان"),
    (Province::Samangan, "سمنگان"),
    (Province::SarePol, "سرپل"),
    (Province::Takhar, "تخار"),
    (Province::Uruzgan, "ارزگان"),
    (Province::Zabul, "زابل"),
];

/// Pashto display names.
const PASHTO_NAMES: &[(Province, &str)] = &[
    (Province::Badakhshan, "بدخشان"),
    (Province::Badghis, "بادغیس"),
    (Province::Baghlan, "بغلان"),
    (Province::Balkh, "بلخ"),
    (Province::Bamyan, "بامیان"),
    (Province::Daykundi, "دایکندي"),
    (Province::Farah, "فراه"),
    (Province::Faryab, "فاریاب"),
    (Province::Ghazni, "غزني"),
    (Province::Ghor, "غور"),
    (Province::Helmand, "هلمند"),
    (Province::Herat, "هرات"),
    (Province::Jowzjan, "جوزجان"),
    (Province::Kabul, "کابل"),
    (Province::Kandahar, "کندهار"),
    (Province::Kapisa, "کاپیسا"),
    (Province::Khost, "خوست"),
    (Province::Kunar, "کونړ"),
    (Province::Kunduz, "کندوز"),
    (Province::Laghman, "لغمان"),
    (Province::Logar, "لوګر"),
    (Province::MaidanWardak, "میدان وردګ"),
    (Province::Nangarhar, "ننګرهار"),
    (Province::Nimruz, "نیمروز"),
    (Province::Nuristan, "نورستان"),
    (Province::Paktia, "پکتیا"),
    (Province::Paktika, "پکتیکا"),
    (Province::Panjshir, "پنجشیر"),
    (Province::Parwan, "پروان"),
    (Province::Samangan, "سمنګان"),
    (Province::SarePol, "سرپل"),
    (Province::Takhar, "تخار"),
    (Province::Uruzgan, "ارزګان"),
    (Province::Zabul, "زابل"),
];

static DARI_TO_CANONICAL: LazyLock<HashMap<&'static str, Province>> =
    LazyLock::new(|| reverse_table(DARI_NAMES));

static PASHTO_TO_CANONICAL: LazyLock<HashMap<&'static str, Province>> =
    LazyLock::new(|| reverse_table(PASHTO_NAMES));

fn reverse_table(names: &[(Province, &'static str)]) -> HashMap<&'static str, Province> {
    names.iter().map(|&(province, name)| (name, province)).collect()
}

fn forward_table(language: Language) -> Option<&'static [(Province, &'static str)]> {
    match language {
        Language::En => None,
        Language::Prs => Some(DARI_NAMES),
        Language::Pbt => Some(PASHTO_NAMES),
    }
}

/// Resolve a canonical, Dari or Pashto province name.
pub fn to_canonical(name: &str) -> Option<Province> {
    let name = name.trim();
    if let Ok(province) = name.parse::<Province>() {
        return Some(province);
    }
    DARI_TO_CANONICAL
        .get(name)
        .or_else(|| PASHTO_TO_CANONICAL.get(name))
        .copied()
}

/// Display name of `province` in `language`.
pub fn to_localized(province: Province, language: Language) -> &'static str {
    forward_table(language)
        .and_then(|names| {
            names
                .iter()
                .find(|(candidate, _)| *candidate == province)
                .map(|(_, name)| *name)
        })
        .unwrap_or_else(|| province.as_str())
}
