//! Province paths and their localized renderings.
//!
//! A path is an ordered walk between provinces. Rendering to display
//! strings happens at the API boundary, not in the search code.

use serde::{Deserialize, Serialize};

use crate::province::{Language, Province};
use crate::translator::to_localized;

/// Separator used when a path is rendered for display.
pub const ARROW: &str = " → ";

/// An ordered sequence of provinces, origin first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvincePath {
    provinces: Vec<Province>,
}

impl ProvincePath {
    pub fn new(provinces: Vec<Province>) -> Self {
        Self { provinces }
    }

    /// Returns the provinces in travel order.
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn into_provinces(self) -> Vec<Province> {
        self.provinces
    }

    pub fn origin(&self) -> Option<Province> {
        self.provinces.first().copied()
    }

    pub fn destination(&self) -> Option<Province> {
        self.provinces.last().copied()
    }

    /// Number of edges traversed (`len - 1`).
    pub fn hops(&self) -> usize {
        self.provinces.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    pub fn contains(&self, province: Province) -> bool {
        self.provinces.contains(&province)
    }

    /// The same walk travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut provinces = self.provinces.clone();
        provinces.reverse();
        Self { provinces }
    }

    /// True when no province is visited twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = [false; Province::ALL.len()];
        self.provinces.iter().all(|province| {
            let slot = &mut seen[province.index()];
            !std::mem::replace(slot, true)
        })
    }

    /// Consecutive `(from, to)` legs of the walk.
    pub fn legs(&self) -> impl Iterator<Item = (Province, Province)> + '_ {
        self.provinces.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Joins the localized names with [`ARROW`].
    pub fn render(&self, language: Language) -> String {
        self.provinces
            .iter()
            .map(|province| to_localized(*province, language))
            .collect::<Vec<_>>()
            .join(ARROW)
    }

    pub fn localized(&self) -> LocalizedText {
        LocalizedText::from_fn(|language| self.render(language))
    }

    /// Per-province names in every language, in travel order.
    pub fn details(&self) -> Vec<LocalizedName> {
        self.provinces.iter().map(|p| LocalizedName::of(*p)).collect()
    }
}

impl From<Vec<Province>> for ProvincePath {
    fn from(provinces: Vec<Province>) -> Self {
        Self::new(provinces)
    }
}

/// A piece of display text in all supported languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub prs: String,
    pub pbt: String,
}

impl LocalizedText {
    pub fn from_fn(mut render: impl FnMut(Language) -> String) -> Self {
        Self {
            en: render(Language::En),
            prs: render(Language::Prs),
            pbt: render(Language::Pbt),
        }
    }

    /// Rendering of an optional path; absent paths render as empty strings.
    pub fn for_path(path: Option<&ProvincePath>) -> Self {
        path.map(ProvincePath::localized).unwrap_or_default()
    }
}

/// One province's name in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedName {
    pub en: &'static str,
    pub prs: &'static str,
    pub pbt: &'static str,
}

impl LocalizedName {
    pub fn of(province: Province) -> Self {
        Self {
            en: to_localized(province, Language::En),
            prs: to_localized(province, Language::Prs),
            pbt: to_localized(province, Language::Pbt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::province::Province::*;

    #[test]
    fn test_hops_and_endpoints() {
        let path = ProvincePath::new(vec![Kabul, Laghman, Nangarhar]);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.origin(), Some(Kabul));
        assert_eq!(path.destination(), Some(Nangarhar));
    }

    #[test]
    fn test_empty_path() {
        let path = ProvincePath::new(vec![]);
        assert_eq!(path.hops(), 0);
        assert!(path.is_empty());
        assert_eq!(path.render(Language::En), "");
        assert_eq!(LocalizedText::for_path(None), LocalizedText::default());
    }

    #[test]
    fn test_reversed() {
        let path = ProvincePath::new(vec![Badakhshan, Takhar, Kunduz]);
        assert_eq!(path.reversed().provinces(), &[Kunduz, Takhar, Badakhshan]);
        assert_eq!(path.reversed().reversed(), path);
    }

    #[test]
    fn test_is_simple() {
        assert!(ProvincePath::new(vec![Kabul, Parwan]).is_simple());
        assert!(!ProvincePath::new(vec![Kabul, Parwan, Kabul]).is_simple());
    }

    #[test]
    fn test_render_all_languages() {
        let path = ProvincePath::new(vec![Kabul, Parwan]);
        let text = path.localized();
        assert_eq!(text.en, "Kabul → Parwan");
        assert_eq!(text.prs, "کابل → پروان");
        assert_eq!(text.pbt, "کابل → پروان");
    }

    #[test]
    fn test_legs() {
        let path = ProvincePath::new(vec![Kabul, Logar, Ghazni]);
        let legs: Vec<_> = path.legs().collect();
        assert_eq!(legs, vec![(Kabul, Logar), (Logar, Ghazni)]);
    }

    #[test]
    fn test_details_serialize() {
        let path = ProvincePath::new(vec![SarePol]);
        let json = serde_json::to_value(path.details()).unwrap();
        assert_eq!(json[0]["en"], "Sar-e Pol");
        assert_eq!(json[0]["prs"], "سرپل");
    }
}
