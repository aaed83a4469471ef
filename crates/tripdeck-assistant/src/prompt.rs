//! System prompt for the travel assistant.

use serde::Deserialize;

use crate::region::{region_info, RegionInfo, DEFAULT_REGION};

const UNSPECIFIED: &str = "unspecified";

/// Location context sent by the client with each chat request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatLocation {
    pub has_location: bool,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ChatLocation {
    /// City and country, when the client flagged a location and sent both.
    fn resolved(&self) -> Option<(&str, &str)> {
        if !self.has_location {
            return None;
        }
        let city = self.city.as_deref().filter(|c| !c.trim().is_empty())?;
        let country = self.country.as_deref().filter(|c| !c.trim().is_empty())?;
        Some((city, country))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatPreferences {
    pub style: Option<String>,
    pub budget_label: Option<String>,
    pub duration: Option<String>,
}

fn or_unspecified(value: Option<&String>) -> &str {
    value
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNSPECIFIED)
}

fn coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

fn location_capabilities(city: &str, country: &str, region: RegionInfo) -> String {
    let currency = region.currency;
    format!(
        "LOCATION-BASED CAPABILITIES:
- Calculate distances from {city}, {country}
- Suggest destinations within specific distance ranges
- Recommend local transportation options and costs in {currency}
- Provide region-specific travel advice
- Consider local departure points (airports, train stations, bus terminals)
- Factor in local travel costs, accommodation prices, and food expenses in {currency}"
    )
}

const GENERAL_CAPABILITIES: &str = "GENERAL CAPABILITIES:
- Provide travel recommendations based on preferences
- Suggest destinations worldwide with appropriate currency conversions
- Help with budget planning and itinerary creation
- Offer travel tips and advice";

fn location_instructions(city: &str, country: &str, region: RegionInfo) -> String {
    let RegionInfo {
        currency, symbol, ..
    } = region;
    format!(
        "- Always provide costs in {currency} ({symbol})
- Consider local travel patterns and popular destinations from {city}
- Mention approximate distances and travel times from their location
- Suggest appropriate transportation methods available in {country}
- Factor in local cost of living for accommodation and food recommendations
- Consider seasonal factors and local holidays for {country}"
    )
}

const GENERAL_INSTRUCTIONS: &str = "- Ask clarifying questions about their location and currency preferences
- Provide general travel advice with currency conversions when possible
- Help them plan trips based on their stated preferences and budget";

const RESPONSE_FORMAT: &str = "RESPONSE FORMAT:
- Use clean, simple text without special formatting characters
- Present information in clear sections
- Use simple bullet points with dashes (-)
- Always specify currency symbol before amounts
- Keep sentences concise and readable
- Avoid using *, #, or other special characters for emphasis";

/// Builds the region-aware system prompt prepended to every conversation.
///
/// Without a usable location the prompt falls back to USD and general
/// capabilities, and asks the model to clarify the user's location.
#[must_use]
pub fn build_system_prompt(
    location: Option<&ChatLocation>,
    preferences: Option<&ChatPreferences>,
) -> String {
    let resolved = location.and_then(|l| l.resolved().map(|place| (l, place)));

    let (location_line, region) = match resolved {
        Some((loc, (city, country))) => (
            format!(
                "{city}, {country} (Coordinates: {}, {})",
                coordinate(loc.latitude),
                coordinate(loc.longitude)
            ),
            region_info(country),
        ),
        None => ("not available".to_string(), DEFAULT_REGION),
    };

    let (capabilities, instructions) = match resolved {
        Some((_, (city, country))) => (
            location_capabilities(city, country, region),
            location_instructions(city, country, region),
        ),
        None => (
            GENERAL_CAPABILITIES.to_string(),
            GENERAL_INSTRUCTIONS.to_string(),
        ),
    };

    let prefs = preferences.cloned().unwrap_or_default();
    let RegionInfo {
        currency,
        symbol,
        locale,
    } = region;

    format!(
        "You are a helpful travel assistant AI specializing in region-specific travel advice.

USER LOCATION: {location_line}
REGION INFO: Currency: {currency} ({symbol}), Locale: {locale}

FORMATTING RULES:
- ALWAYS use {symbol} for all price mentions (e.g., {symbol}1000, {symbol}50-200)
- Use clean, readable text without special characters like *, #, or excessive formatting
- Write in clear, simple sentences
- Use bullet points with simple dashes (-) instead of special characters
- Format prices in local currency: {symbol}amount (e.g., {symbol}1000 for one thousand)
- Use region-appropriate distance units (km for most countries, miles for US/UK)
- Consider local transportation options and costs in {currency}

{capabilities}

USER PREFERENCES:
- Style: {style}
- Budget: {budget}
- Duration: {duration}

INSTRUCTIONS:
{instructions}

{RESPONSE_FORMAT}
",
        style = or_unspecified(prefs.style.as_ref()),
        budget = or_unspecified(prefs.budget_label.as_ref()),
        duration = or_unspecified(prefs.duration.as_ref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(city: &str, country: &str) -> ChatLocation {
        ChatLocation {
            has_location: true,
            city: Some(city.to_string()),
            country: Some(country.to_string()),
            latitude: Some(28.6139),
            longitude: Some(77.209),
        }
    }

    #[test]
    fn located_prompt_uses_region_currency() {
        let prompt = build_system_prompt(Some(&location("New Delhi", "India")), None);

        assert!(prompt.contains("USER LOCATION: New Delhi, India (Coordinates: 28.6139, 77.209)"));
        assert!(prompt.contains("REGION INFO: Currency: INR (₹), Locale: en-IN"));
        assert!(prompt.contains("ALWAYS use ₹ for all price mentions"));
        assert!(prompt.contains("LOCATION-BASED CAPABILITIES:"));
        assert!(prompt.contains("- Suggest appropriate transportation methods available in India"));
        assert!(!prompt.contains("GENERAL CAPABILITIES:"));
    }

    #[test]
    fn missing_location_falls_back_to_general_usd_prompt() {
        let prompt = build_system_prompt(None, None);

        assert!(prompt.contains("USER LOCATION: not available"));
        assert!(prompt.contains("Currency: USD ($), Locale: en-US"));
        assert!(prompt.contains("GENERAL CAPABILITIES:"));
        assert!(prompt.contains("- Ask clarifying questions about their location"));
    }

    #[test]
    fn location_needs_flag_city_and_country() {
        let mut unflagged = location("Paris", "France");
        unflagged.has_location = false;
        assert!(build_system_prompt(Some(&unflagged), None).contains("not available"));

        let mut no_city = location("", "France");
        no_city.has_location = true;
        assert!(build_system_prompt(Some(&no_city), None).contains("not available"));
    }

    #[test]
    fn preferences_default_to_unspecified() {
        let prefs = ChatPreferences {
            style: Some("adventure".to_string()),
            budget_label: Some(String::new()),
            duration: None,
        };
        let prompt = build_system_prompt(None, Some(&prefs));

        assert!(prompt.contains("- Style: adventure"));
        assert!(prompt.contains("- Budget: unspecified"));
        assert!(prompt.contains("- Duration: unspecified"));
    }

    #[test]
    fn unknown_country_keeps_location_but_uses_usd() {
        let prompt = build_system_prompt(Some(&location("Reykjavik", "Iceland")), None);
        assert!(prompt.contains("USER LOCATION: Reykjavik, Iceland"));
        assert!(prompt.contains("Currency: USD ($)"));
        assert!(prompt.contains("LOCATION-BASED CAPABILITIES:"));
    }
}
