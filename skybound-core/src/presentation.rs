//! Derived view of a search result: stable price ranking, badge and icon
//! classification, localized price display. Source data is never mutated;
//! everything here works on copies.

use serde::Serialize;

use crate::domain::{SearchResult, TravelOption};

/// Score above which an option gets the "Best Option" marker. Strict.
const BEST_OPTION_THRESHOLD: f64 = 90.0;

/// Visual class of a value tag. The mapping is total: anything
/// unrecognized lands on the neutral `Slate` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Emerald,
    Amber,
    Blue,
    Slate,
}

impl BadgeStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Emerald => "bg-emerald-50 text-emerald-600 border-emerald-200",
            BadgeStyle::Amber => "bg-amber-50 text-amber-600 border-amber-200",
            BadgeStyle::Blue => "bg-blue-50 text-blue-600 border-blue-200",
            BadgeStyle::Slate => "bg-slate-50 text-slate-500 border-slate-200",
        }
    }
}

/// Case-insensitive substring classification of a value tag. Tags may come
/// back in English or Indonesian.
pub fn badge_for_tag(tag: &str) -> BadgeStyle {
    let t = tag.to_uppercase();
    if t.contains("CHEAPEST") || t.contains("TERMURAH") {
        BadgeStyle::Emerald
    } else if t.contains("FASTEST") || t.contains("TERCEPAT") {
        BadgeStyle::Amber
    } else if t.contains("BEST") || t.contains("NILAI") {
        BadgeStyle::Blue
    } else {
        BadgeStyle::Slate
    }
}

/// Icon for a transport mode string. Falls back to a generic trip icon on
/// anything the four canonical tokens don't match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportIcon {
    Plane,
    Train,
    Bus,
    Ship,
    Trip,
}

impl TransportIcon {
    pub fn css_class(&self) -> &'static str {
        match self {
            TransportIcon::Plane => "fa-solid fa-plane",
            TransportIcon::Train => "fa-solid fa-train",
            TransportIcon::Bus => "fa-solid fa-bus",
            TransportIcon::Ship => "fa-solid fa-ship",
            TransportIcon::Trip => "fa-solid fa-suitcase",
        }
    }
}

pub fn icon_for_mode(mode: &str) -> TransportIcon {
    let m = mode.to_uppercase();
    if m.contains("PLANE") {
        TransportIcon::Plane
    } else if m.contains("TRAIN") {
        TransportIcon::Train
    } else if m.contains("BUS") {
        TransportIcon::Bus
    } else if m.contains("SEA") {
        TransportIcon::Ship
    } else {
        TransportIcon::Trip
    }
}

pub fn is_best_option(score: f64) -> bool {
    score > BEST_OPTION_THRESHOLD
}

/// Rupiah-style display: `Rp` prefix, dot-grouped thousands, no fractional
/// digits. Display rule only; the underlying price stays a plain number.
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Ascending by price, stable on ties so equal-priced options keep their
/// server order.
pub fn rank_options(options: &[TravelOption]) -> Vec<TravelOption> {
    let mut ranked = options.to_vec();
    ranked.sort_by(|a, b| a.price.total_cmp(&b.price));
    ranked
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBadge {
    pub label: String,
    pub style: BadgeStyle,
    pub css_class: &'static str,
}

/// One option decorated for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCard {
    pub option: TravelOption,
    pub icon_class: &'static str,
    pub display_price: String,
    pub best_option: bool,
    pub badges: Vec<TagBadge>,
}

/// The full rendered result: analysis banner plus ranked cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub ai_analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_upsell: Option<String>,
    pub cards: Vec<OptionCard>,
}

pub fn present(result: &SearchResult) -> ResultView {
    let cards = rank_options(&result.options)
        .into_iter()
        .map(|option| {
            let badges = option
                .tags
                .iter()
                .map(|tag| {
                    let style = badge_for_tag(tag);
                    TagBadge {
                        label: tag.replace('_', " "),
                        style,
                        css_class: style.css_class(),
                    }
                })
                .collect();
            OptionCard {
                icon_class: icon_for_mode(&option.mode).css_class(),
                display_price: format_price(option.price),
                best_option: is_best_option(option.score),
                badges,
                option,
            }
        })
        .collect();

    ResultView {
        ai_analysis: result.ai_analysis.clone(),
        suggested_upsell: result.suggested_upsell.clone(),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, price: f64, score: f64) -> TravelOption {
        TravelOption {
            id: id.to_string(),
            ota_name: "Tiket.com".to_string(),
            provider_name: "Garuda Indonesia".to_string(),
            mode: "PLANE".to_string(),
            departure_time: "07:30".to_string(),
            arrival_time: "10:05".to_string(),
            duration: "2j 35m".to_string(),
            price,
            currency: "IDR".to_string(),
            fare_class: "Economy".to_string(),
            available_seats: Some(9),
            affiliate_url: "https://www.tiket.com/pesawat".to_string(),
            tags: vec!["BEST_VALUE".to_string()],
            score,
            upsell_options: None,
        }
    }

    #[test]
    fn options_rank_ascending_by_price() {
        let options = vec![
            option("a", 150_000.0, 70.0),
            option("b", 90_000.0, 80.0),
            option("c", 300_000.0, 60.0),
        ];
        let ranked = rank_options(&options);
        let prices: Vec<f64> = ranked.iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![90_000.0, 150_000.0, 300_000.0]);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let options = vec![
            option("first", 120_000.0, 70.0),
            option("second", 120_000.0, 80.0),
            option("third", 90_000.0, 60.0),
        ];
        let ranked = rank_options(&options);
        let ids: Vec<&str> = ranked.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["third", "first", "second"]);
    }

    #[test]
    fn best_option_threshold_is_strict() {
        assert!(is_best_option(91.0));
        assert!(!is_best_option(90.0));
    }

    #[test]
    fn known_tags_map_to_their_styles() {
        assert_eq!(badge_for_tag("CHEAPEST"), BadgeStyle::Emerald);
        assert_eq!(badge_for_tag("termurah"), BadgeStyle::Emerald);
        assert_eq!(badge_for_tag("FASTEST"), BadgeStyle::Amber);
        assert_eq!(badge_for_tag("BEST_VALUE"), BadgeStyle::Blue);
        assert_eq!(badge_for_tag("NILAI_TERBAIK"), BadgeStyle::Blue);
    }

    #[test]
    fn unknown_tag_falls_back_to_slate() {
        assert_eq!(badge_for_tag("LOYALTY_BONUS"), BadgeStyle::Slate);
        assert_eq!(badge_for_tag(""), BadgeStyle::Slate);
    }

    #[test]
    fn unknown_mode_falls_back_to_trip_icon() {
        assert_eq!(icon_for_mode("SEAPLANE"), TransportIcon::Plane);
        assert_eq!(icon_for_mode("sea ferry"), TransportIcon::Ship);
        assert_eq!(icon_for_mode("HELICOPTER"), TransportIcon::Trip);
    }

    #[test]
    fn price_formats_with_dot_grouping_and_no_fraction() {
        assert_eq!(format_price(1_500_000.0), "Rp 1.500.000");
        assert_eq!(format_price(90_000.0), "Rp 90.000");
        assert_eq!(format_price(950.0), "Rp 950");
        assert_eq!(format_price(125_000.4), "Rp 125.000");
    }

    #[test]
    fn present_decorates_and_ranks() {
        let result = SearchResult {
            options: vec![option("a", 450_000.0, 95.0), option("b", 120_000.0, 45.0)],
            ai_analysis: "Prices are real-time estimates.".to_string(),
            suggested_upsell: None,
        };
        let view = present(&result);
        assert_eq!(view.cards[0].option.id, "b");
        assert_eq!(view.cards[1].option.id, "a");
        assert!(view.cards[1].best_option);
        assert!(!view.cards[0].best_option);
        assert_eq!(view.cards[0].display_price, "Rp 120.000");
        assert_eq!(view.cards[0].badges[0].label, "BEST VALUE");
        assert_eq!(view.cards[0].badges[0].style, BadgeStyle::Blue);
        // source untouched
        assert_eq!(result.options[0].id, "a");
    }
}
