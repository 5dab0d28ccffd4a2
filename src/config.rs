//! Demo round data for the CLI.
//!
//! A bundled betting round with plausible signals, so the pipeline can be
//! exercised without any upstream feed. The first 8 matches double as the
//! compact-pool round.

use types::{ConfidenceTier, MatchForecast, MatchId, Outcome};

/// One demo fixture: home team, away team, and its forecast signals.
struct Fixture {
    home: &'static str,
    away: &'static str,
    leading: Outcome,
    second: Outcome,
    expected_value: f64,
    single_suitable: bool,
    confidence: ConfidenceTier,
}

const FIXTURES: [Fixture; 13] = [
    fixture("Arsenal", "Everton", Outcome::Home, Outcome::Draw, 7.2, true, ConfidenceTier::High),
    fixture("Villa", "Chelsea", Outcome::Away, Outcome::Draw, 1.4, false, ConfidenceTier::Medium),
    fixture("Brentford", "Fulham", Outcome::Draw, Outcome::Home, -0.8, false, ConfidenceTier::Low),
    fixture("Liverpool", "Burnley", Outcome::Home, Outcome::Draw, 8.9, true, ConfidenceTier::High),
    fixture("Derby", "Leeds", Outcome::Draw, Outcome::Away, -1.6, false, ConfidenceTier::Low),
    fixture("Millwall", "Watford", Outcome::Home, Outcome::Draw, 2.1, false, ConfidenceTier::Medium),
    fixture("Norwich", "Preston", Outcome::Home, Outcome::Away, 4.4, true, ConfidenceTier::Medium),
    fixture("Hull", "Wrexham", Outcome::Away, Outcome::Draw, 0.3, false, ConfidenceTier::Low),
    fixture("AIK", "Hammarby", Outcome::Draw, Outcome::Away, -2.2, false, ConfidenceTier::Low),
    fixture("Malmö FF", "Häcken", Outcome::Home, Outcome::Draw, 6.1, true, ConfidenceTier::High),
    fixture("Elfsborg", "Sirius", Outcome::Home, Outcome::Away, 3.0, false, ConfidenceTier::Medium),
    fixture("Gais", "Djurgården", Outcome::Away, Outcome::Draw, 1.8, false, ConfidenceTier::Medium),
    fixture("Mjällby", "Degerfors", Outcome::Home, Outcome::Draw, 5.5, true, ConfidenceTier::High),
];

const fn fixture(
    home: &'static str,
    away: &'static str,
    leading: Outcome,
    second: Outcome,
    expected_value: f64,
    single_suitable: bool,
    confidence: ConfidenceTier,
) -> Fixture {
    Fixture {
        home,
        away,
        leading,
        second,
        expected_value,
        single_suitable,
        confidence,
    }
}

/// The demo round, truncated to `pool_size` matches.
///
/// Returns one `"Home - Away"` label and one forecast per match.
pub fn demo_round(pool_size: usize) -> (Vec<String>, Vec<MatchForecast>) {
    let mut labels = Vec::with_capacity(pool_size);
    let mut forecasts = Vec::with_capacity(pool_size);
    for (i, fixture) in FIXTURES.iter().take(pool_size).enumerate() {
        labels.push(format!("{} - {}", fixture.home, fixture.away));
        let mut forecast = MatchForecast::new(MatchId(i as u32 + 1), fixture.leading)
            .with_expected_value(fixture.expected_value)
            .with_candidates(vec![fixture.leading, fixture.second])
            .with_confidence(fixture.confidence);
        if fixture.single_suitable {
            forecast = forecast.single_suitable();
        }
        forecasts.push(forecast);
    }
    (labels, forecasts)
}
