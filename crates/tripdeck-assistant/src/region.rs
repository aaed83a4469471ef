//! Country to currency and locale lookup used to localise assistant answers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionInfo {
    pub currency: &'static str,
    pub symbol: &'static str,
    pub locale: &'static str,
}

pub const DEFAULT_REGION: RegionInfo = RegionInfo {
    currency: "USD",
    symbol: "$",
    locale: "en-US",
};

const fn region(currency: &'static str, symbol: &'static str, locale: &'static str) -> RegionInfo {
    RegionInfo {
        currency,
        symbol,
        locale,
    }
}

const REGIONS: &[(&str, RegionInfo)] = &[
    ("India", region("INR", "₹", "en-IN")),
    ("United States", region("USD", "$", "en-US")),
    ("United Kingdom", region("GBP", "£", "en-GB")),
    ("Canada", region("CAD", "C$", "en-CA")),
    ("Australia", region("AUD", "A$", "en-AU")),
    ("Germany", region("EUR", "€", "de-DE")),
    ("France", region("EUR", "€", "fr-FR")),
    ("Japan", region("JPY", "¥", "ja-JP")),
    ("China", region("CNY", "¥", "zh-CN")),
    ("Brazil", region("BRL", "R$", "pt-BR")),
    ("Mexico", region("MXN", "$", "es-MX")),
    ("Singapore", region("SGD", "S$", "en-SG")),
    ("South Korea", region("KRW", "₩", "ko-KR")),
    ("Thailand", region("THB", "฿", "th-TH")),
    ("Malaysia", region("MYR", "RM", "ms-MY")),
    ("Indonesia", region("IDR", "Rp", "id-ID")),
    ("Philippines", region("PHP", "₱", "en-PH")),
    ("South Africa", region("ZAR", "R", "en-ZA")),
    ("Nigeria", region("NGN", "₦", "en-NG")),
    ("Egypt", region("EGP", "E£", "ar-EG")),
    ("United Arab Emirates", region("AED", "د.إ", "ar-AE")),
    ("Saudi Arabia", region("SAR", "﷼", "ar-SA")),
    ("Turkey", region("TRY", "₺", "tr-TR")),
    ("Russia", region("RUB", "₽", "ru-RU")),
];

/// Exact, case-sensitive country name match; unknown countries get USD.
#[must_use]
pub fn region_info(country: &str) -> RegionInfo {
    REGIONS
        .iter()
        .find(|(name, _)| *name == country)
        .map_or(DEFAULT_REGION, |(_, info)| *info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries_resolve() {
        assert_eq!(region_info("India").currency, "INR");
        assert_eq!(region_info("India").symbol, "₹");
        assert_eq!(region_info("United Kingdom").locale, "en-GB");
        assert_eq!(region_info("Japan").symbol, "¥");
    }

    #[test]
    fn unknown_country_defaults_to_usd() {
        assert_eq!(region_info("Atlantis"), DEFAULT_REGION);
        assert_eq!(region_info("india"), DEFAULT_REGION);
    }

    #[test]
    fn table_has_twenty_four_unique_countries() {
        let mut names: Vec<_> = REGIONS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 24);
    }
}
