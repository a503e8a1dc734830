// ABOUTME: Static catalog of brewing methods with ratio, temperature and timing presets
// ABOUTME: Provides lookup by method id for the brew-ratio calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::models::{RoastLevel, Strength};

/// Water-to-coffee denominators (the `N` in `1:N`) per strength
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioPresets {
    /// Used for [`Strength::Mild`]
    pub mild: f64,
    /// Used for [`Strength::Average`]
    pub average: f64,
    /// Used for [`Strength::Robust`]
    pub robust: f64,
}

/// Display temperatures per roast level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperaturePresets {
    /// Used for [`RoastLevel::Light`]
    pub light: &'static str,
    /// Used for [`RoastLevel::Medium`]
    pub medium: &'static str,
    /// Used for [`RoastLevel::Dark`]
    pub dark: &'static str,
}

/// Immutable descriptor of one brewing method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrewingMethod {
    /// Unique key, e.g. `pourover`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description of the technique
    pub description: &'static str,
    /// What the cup tastes like
    pub flavor_profile: &'static str,
    /// Grind size label
    pub grind_size: &'static str,
    /// Ratio presets per strength
    pub ratios: RatioPresets,
    /// Temperature presets per roast
    pub temperatures: TemperaturePresets,
    /// Brew time label
    pub brew_time: &'static str,
    /// Drink size the tool starts from for this method
    pub default_volume_ml: f64,
    /// Practical tips
    pub tips: &'static [&'static str],
}

impl BrewingMethod {
    /// Ratio denominator for a strength
    #[must_use]
    pub const fn ratio_for(&self, strength: Strength) -> f64 {
        match strength {
            Strength::Mild => self.ratios.mild,
            Strength::Average => self.ratios.average,
            Strength::Robust => self.ratios.robust,
        }
    }

    /// Temperature label for a roast level
    #[must_use]
    pub const fn temperature_for(&self, roast_level: RoastLevel) -> &'static str {
        match roast_level {
            RoastLevel::Light => self.temperatures.light,
            RoastLevel::Medium => self.temperatures.medium,
            RoastLevel::Dark => self.temperatures.dark,
        }
    }
}

/// Format a ratio denominator as `1:N`, dropping a zero fraction
#[must_use]
pub fn format_ratio(denominator: f64) -> String {
    if denominator.fract().abs() < f64::EPSILON {
        format!("1:{denominator:.0}")
    } else {
        format!("1:{denominator}")
    }
}

const STANDARD_FILTER_TEMPS: TemperaturePresets = TemperaturePresets {
    light: "94-96°C",
    medium: "91-94°C",
    dark: "88-91°C",
};

static BREWING_METHODS: [BrewingMethod; 14] = [
    BrewingMethod {
        id: "pourover",
        name: "Pour Over",
        description: "Hot water poured by hand over a bed of grounds in a paper filter cone.",
        flavor_profile: "Clean, bright and aromatic with clear origin character.",
        grind_size: "Medium-fine",
        ratios: RatioPresets {
            mild: 17.0,
            average: 15.0,
            robust: 13.0,
        },
        temperatures: STANDARD_FILTER_TEMPS,
        brew_time: "2:30-3:30 min",
        default_volume_ml: 300.0,
        tips: &[
            "Rinse the paper filter with hot water to remove papery taste.",
            "Bloom with twice the coffee weight in water for 30-45 seconds.",
            "Pour in slow spirals and avoid pouring directly onto the filter walls.",
        ],
    },
    BrewingMethod {
        id: "v60",
        name: "Hario V60",
        description: "Ribbed cone dripper with one large hole for a fast, controllable flow.",
        flavor_profile: "Light-bodied, vibrant and tea-like; highlights acidity.",
        grind_size: "Medium-fine",
        ratios: RatioPresets {
            mild: 17.0,
            average: 16.0,
            robust: 15.0,
        },
        temperatures: STANDARD_FILTER_TEMPS,
        brew_time: "2:30-3:00 min",
        default_volume_ml: 250.0,
        tips: &[
            "Flow rate is set by your pour, so keep a steady gooseneck stream.",
            "Give the dripper a gentle swirl after the last pour for an even bed.",
            "Grind finer if the drawdown finishes before 2:30.",
        ],
    },
    BrewingMethod {
        id: "kalitawave",
        name: "Kalita Wave",
        description: "Flat-bottom dripper with three small holes that forgives uneven pouring.",
        flavor_profile: "Sweet and balanced with a rounder body than cone drippers.",
        grind_size: "Medium",
        ratios: RatioPresets {
            mild: 17.0,
            average: 16.0,
            robust: 15.0,
        },
        temperatures: STANDARD_FILTER_TEMPS,
        brew_time: "3:00-4:00 min",
        default_volume_ml: 300.0,
        tips: &[
            "Use pulse pours of 50-60 ml to keep the water level constant.",
            "Do not press the wave filter flat; its folds keep flow even.",
        ],
    },
    BrewingMethod {
        id: "frenchpress",
        name: "French Press",
        description: "Full immersion brew separated from the grounds by a metal mesh plunger.",
        flavor_profile: "Heavy, rich body with oils and a rounded finish.",
        grind_size: "Coarse",
        ratios: RatioPresets {
            mild: 16.0,
            average: 14.0,
            robust: 12.0,
        },
        temperatures: TemperaturePresets {
            light: "95-96°C",
            medium: "93-95°C",
            dark: "90-93°C",
        },
        brew_time: "4:00 min",
        default_volume_ml: 500.0,
        tips: &[
            "Break the crust at 4 minutes and skim the foam before plunging.",
            "Plunge slowly and decant right away so the cup does not over-extract.",
            "Use a coarse, even grind to keep silt out of the cup.",
        ],
    },
    BrewingMethod {
        id: "chemex",
        name: "Chemex",
        description: "Hourglass glass brewer with thick bonded filters.",
        flavor_profile: "Exceptionally clean and crisp with a delicate body.",
        grind_size: "Medium-coarse",
        ratios: RatioPresets {
            mild: 17.0,
            average: 16.0,
            robust: 15.0,
        },
        temperatures: STANDARD_FILTER_TEMPS,
        brew_time: "4:00-5:00 min",
        default_volume_ml: 500.0,
        tips: &[
            "Place the triple-fold side of the filter against the spout.",
            "Rinse the filter well; the thick paper holds a lot of flavour.",
        ],
    },
    BrewingMethod {
        id: "aeropress",
        name: "AeroPress",
        description: "Chamber where coffee steeps briefly and is pressed through a paper filter.",
        flavor_profile: "Smooth and full-flavoured with low bitterness.",
        grind_size: "Medium-fine",
        ratios: RatioPresets {
            mild: 16.0,
            average: 14.0,
            robust: 12.0,
        },
        temperatures: TemperaturePresets {
            light: "90-95°C",
            medium: "85-90°C",
            dark: "80-85°C",
        },
        brew_time: "1:30-2:00 min",
        default_volume_ml: 200.0,
        tips: &[
            "The inverted method stops coffee dripping through before you press.",
            "Press gently for about 30 seconds and stop at the hiss.",
            "Dilute a robust brew with hot water for a longer cup.",
        ],
    },
    BrewingMethod {
        id: "espresso",
        name: "Espresso",
        description: "Hot water forced through a compact puck of finely ground coffee at 9 bar.",
        flavor_profile: "Concentrated and syrupy with crema and intense sweetness.",
        grind_size: "Fine",
        ratios: RatioPresets {
            mild: 2.5,
            average: 2.0,
            robust: 1.5,
        },
        temperatures: TemperaturePresets {
            light: "93-95°C",
            medium: "91-93°C",
            dark: "88-91°C",
        },
        brew_time: "25-30 sec",
        default_volume_ml: 60.0,
        tips: &[
            "Weigh the shot in the cup; volume is misleading because of crema.",
            "Adjust grind first, then dose, to hit the target time.",
            "Distribute and tamp level to avoid channeling.",
        ],
    },
    BrewingMethod {
        id: "mokapot",
        name: "Moka Pot",
        description: "Stovetop brewer that pushes steam-pressured water up through the grounds.",
        flavor_profile: "Strong, bold and espresso-like with a heavier bitterness.",
        grind_size: "Fine-medium",
        ratios: RatioPresets {
            mild: 10.0,
            average: 8.0,
            robust: 7.0,
        },
        temperatures: TemperaturePresets {
            light: "Pre-heated water, just off the boil",
            medium: "Pre-heated water, 90-95°C",
            dark: "Pre-heated water, 85-90°C",
        },
        brew_time: "4:00-5:00 min",
        default_volume_ml: 150.0,
        tips: &[
            "Fill the basket level without tamping.",
            "Start with hot water in the base to shorten time on the flame.",
            "Take it off the heat as soon as it starts to gurgle.",
        ],
    },
    BrewingMethod {
        id: "coldbrew",
        name: "Cold Brew",
        description: "Coarse grounds steeped in cold or room-temperature water for many hours.",
        flavor_profile: "Smooth, chocolatey and low in acidity.",
        grind_size: "Extra coarse",
        ratios: RatioPresets {
            mild: 10.0,
            average: 8.0,
            robust: 5.0,
        },
        temperatures: TemperaturePresets {
            light: "Room temperature (20-22°C)",
            medium: "Room temperature or refrigerated",
            dark: "Refrigerated (4°C)",
        },
        brew_time: "12-24 hours",
        default_volume_ml: 1000.0,
        tips: &[
            "Robust strength makes a concentrate; dilute 1:1 with water or milk.",
            "Filter twice, through mesh then paper, for a clean finish.",
            "Keeps for up to two weeks refrigerated.",
        ],
    },
    BrewingMethod {
        id: "siphon",
        name: "Siphon",
        description: "Vacuum brewer moving water between two glass chambers by vapour pressure.",
        flavor_profile: "Clean, aromatic and tea-like with a silky texture.",
        grind_size: "Medium",
        ratios: RatioPresets {
            mild: 16.0,
            average: 15.0,
            robust: 14.0,
        },
        temperatures: TemperaturePresets {
            light: "92-94°C",
            medium: "90-92°C",
            dark: "88-90°C",
        },
        brew_time: "1:30-2:00 min",
        default_volume_ml: 360.0,
        tips: &[
            "Add coffee only once the water has fully risen to the upper chamber.",
            "Stir gently twice and remove from heat to start the drawdown.",
        ],
    },
    BrewingMethod {
        id: "turkish",
        name: "Turkish Coffee",
        description: "Powder-fine coffee simmered with water (and often sugar) in a cezve.",
        flavor_profile: "Thick, intense and unfiltered with a foamy top.",
        grind_size: "Extra fine (powder)",
        ratios: RatioPresets {
            mild: 12.0,
            average: 10.0,
            robust: 9.0,
        },
        temperatures: TemperaturePresets {
            light: "Start cold, heat slowly to just below boiling",
            medium: "Start cold, heat slowly to just below boiling",
            dark: "Start cold, heat slowly and pull off early",
        },
        brew_time: "3:00-4:00 min",
        default_volume_ml: 90.0,
        tips: &[
            "Never let it boil; lift the cezve off as the foam rises.",
            "Spoon the foam into the cup before pouring.",
            "Let the grounds settle for a minute before drinking.",
        ],
    },
    BrewingMethod {
        id: "southindianfilter",
        name: "South Indian Filter",
        description: "Two-chamber steel filter dripping a strong decoction, mixed with hot milk.",
        flavor_profile: "Dense, bittersweet decoction; creamy and frothy once mixed with milk.",
        grind_size: "Fine",
        ratios: RatioPresets {
            mild: 8.0,
            average: 6.0,
            robust: 5.0,
        },
        temperatures: TemperaturePresets {
            light: "Just off the boil (96-98°C)",
            medium: "Just off the boil (96-98°C)",
            dark: "Just off the boil (95-96°C)",
        },
        brew_time: "15-20 min drip",
        default_volume_ml: 100.0,
        tips: &[
            "A coffee-chicory blend (80:20) gives the classic body.",
            "Press the grounds lightly with the umbrella disc before adding water.",
            "Mix one part decoction with two to three parts hot milk and froth with a dabara.",
        ],
    },
    BrewingMethod {
        id: "autodrip",
        name: "Auto Drip",
        description: "Electric drip machine that heats and showers water over a filter basket.",
        flavor_profile: "Mellow, consistent and easy-drinking.",
        grind_size: "Medium",
        ratios: RatioPresets {
            mild: 18.0,
            average: 16.0,
            robust: 15.0,
        },
        temperatures: TemperaturePresets {
            light: "Machine default (92-96°C)",
            medium: "Machine default (92-96°C)",
            dark: "Machine default (90-94°C)",
        },
        brew_time: "5:00-6:00 min",
        default_volume_ml: 750.0,
        tips: &[
            "Use filtered water and descale the machine regularly.",
            "Remove the carafe from the hot plate once brewing finishes.",
        ],
    },
    BrewingMethod {
        id: "clever",
        name: "Clever Dripper",
        description: "Immersion dripper with a valve that releases the brew when placed on a cup.",
        flavor_profile: "Full-bodied like a press but clean like a filter.",
        grind_size: "Medium-coarse",
        ratios: RatioPresets {
            mild: 17.0,
            average: 16.0,
            robust: 14.0,
        },
        temperatures: STANDARD_FILTER_TEMPS,
        brew_time: "3:00-4:00 min",
        default_volume_ml: 300.0,
        tips: &[
            "Add water first, then coffee, for a faster and more even drawdown.",
            "Stir once at the start and once before draining.",
        ],
    },
];

/// Lookup index keyed by method id
static METHOD_INDEX: LazyLock<HashMap<&'static str, &'static BrewingMethod>> =
    LazyLock::new(|| BREWING_METHODS.iter().map(|m| (m.id, m)).collect());

/// Normalize a user-supplied method id (`"French-Press"` → `frenchpress`)
fn normalize_id(method_id: &str) -> String {
    method_id
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// All brewing methods in display order
#[must_use]
pub fn brewing_methods() -> &'static [BrewingMethod] {
    &BREWING_METHODS
}

/// Look up a method by id
///
/// Matching ignores case, surrounding whitespace, hyphens, underscores and spaces.
#[must_use]
pub fn find_method(method_id: &str) -> Option<&'static BrewingMethod> {
    METHOD_INDEX.get(normalize_id(method_id).as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrewingConfig;
    use std::collections::HashSet;

    #[test]
    fn test_method_ids_are_unique() {
        let ids: HashSet<_> = brewing_methods().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), brewing_methods().len());
        assert_eq!(METHOD_INDEX.len(), brewing_methods().len());
    }

    #[test]
    fn test_lookup_normalization() {
        assert_eq!(find_method("frenchpress").map(|m| m.id), Some("frenchpress"));
        assert_eq!(find_method("French-Press").map(|m| m.id), Some("frenchpress"));
        assert_eq!(
            find_method("  south_indian_filter ").map(|m| m.id),
            Some("southindianfilter")
        );
        assert_eq!(find_method("Kalita Wave").map(|m| m.id), Some("kalitawave"));
        assert!(find_method("percolator").is_none());
        assert!(find_method("").is_none());
    }

    #[test]
    fn test_stronger_brews_never_use_less_coffee() {
        for method in brewing_methods() {
            let r = method.ratios;
            assert!(r.mild >= r.average, "{}: mild < average", method.id);
            assert!(r.average >= r.robust, "{}: average < robust", method.id);
            assert!(r.robust > 0.0, "{}: non-positive ratio", method.id);
        }
    }

    #[test]
    fn test_presets_are_populated() {
        for method in brewing_methods() {
            assert!(!method.tips.is_empty(), "{} has no tips", method.id);
            assert!(method.default_volume_ml > 0.0);
            for roast in RoastLevel::ALL {
                assert!(!method.temperature_for(roast).is_empty());
            }
        }
    }

    #[test]
    fn test_default_volumes_fit_the_default_range() {
        let config = BrewingConfig::default();
        for method in brewing_methods() {
            assert!(
                config.validate_volume(method.default_volume_ml).is_ok(),
                "{} default of {} ml is outside the accepted range",
                method.id,
                method.default_volume_ml
            );
        }
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(15.0), "1:15");
        assert_eq!(format_ratio(2.5), "1:2.5");
        assert_eq!(format_ratio(1.5), "1:1.5");
    }
}
