//! Built-in channel templates
//!
//! Two families: the calculator presets (capitalized display names, with
//! tax & service folded in) and the lighter comparison presets keyed by
//! lowercase channel id.

use shared::models::{ChannelTemplate, DeductionRule};

fn builtin(name: &str, rules: Vec<DeductionRule>) -> ChannelTemplate {
    ChannelTemplate {
        name: name.to_string(),
        rules,
        builtin: true,
    }
}

/// Comparison preset: OTA commission plus the shared payment fee and tax
fn ota(name: &str, commission: f64) -> ChannelTemplate {
    builtin(
        name,
        vec![
            DeductionRule::percentage("1", "OTA Commission", commission),
            DeductionRule::percentage("2", "Payment Fee", 2.5),
            DeductionRule::percentage("3", "Tax", 10.0),
        ],
    )
}

/// Calculator presets
pub fn calculator_presets() -> Vec<ChannelTemplate> {
    vec![
        builtin(
            "Agoda",
            vec![
                DeductionRule::percentage("1", "Agoda Commission", 18.0),
                DeductionRule::percentage("2", "Tax & Service", 21.0),
                DeductionRule::fixed("3", "Marketing Fee", 0.0).disabled(),
            ],
        ),
        builtin(
            "Booking.com",
            vec![
                DeductionRule::percentage("1", "Booking.com Commission", 15.0),
                DeductionRule::percentage("2", "Tax & Service", 21.0),
                DeductionRule::percentage("3", "Payment Gateway", 3.0),
            ],
        ),
        builtin(
            "Traveloka",
            vec![
                DeductionRule::percentage("1", "Traveloka Commission", 17.0),
                DeductionRule::percentage("2", "Tax & Service", 21.0),
            ],
        ),
    ]
}

/// Comparison presets
pub fn comparison_presets() -> Vec<ChannelTemplate> {
    vec![
        builtin(
            "direct",
            vec![
                DeductionRule::percentage("1", "Payment Fee", 2.5),
                DeductionRule::percentage("2", "Tax", 10.0),
            ],
        ),
        ota("agoda", 18.0),
        ota("booking", 15.0),
        ota("traveloka", 20.0),
        ota("tiket", 17.0),
    ]
}
