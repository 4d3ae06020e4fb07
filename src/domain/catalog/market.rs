use serde::Serialize;

/// Headline figure with its change indicator, e.g. `$11T` / `+7%`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaDirection {
    Up,
    Down,
    Flat,
}

impl KeyMetric {
    fn new(label: &str, value: &str, delta: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta: delta.to_string(),
        }
    }

    /// Direction implied by the delta's leading sign.
    pub fn direction(&self) -> DeltaDirection {
        match self.delta.trim_start().chars().next() {
            Some('-') => DeltaDirection::Down,
            Some('+') => DeltaDirection::Up,
            Some(c) if c.is_ascii_digit() => DeltaDirection::Up,
            _ => DeltaDirection::Flat,
        }
    }
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric::new("Healthcare Spending 2024", "$11T", "+7%"),
        KeyMetric::new("Telehealth Adoption", "72%", "-6%"),
        KeyMetric::new("AI in Healthcare Growth", "45%", "+15%"),
    ]
}

/// Compound annual growth rate of a technology segment, 2018 to 2025.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CagrEntry {
    pub trend: String,
    pub cagr_percent: f64,
}

pub fn cagr_by_segment() -> Vec<CagrEntry> {
    [
        ("AI/ML in Healthcare", 50.2),
        ("Medical Robotics", 20.8),
        ("Blockchain in Healthcare", 22.7),
        ("Cybersecurity in Healthcare", 18.5),
        ("Health Apps (mHealth)", 38.26),
        ("Telemedicine", 29.0),
        ("Wearable Devices", 20.0),
    ]
    .into_iter()
    .map(|(trend, cagr_percent)| CagrEntry {
        trend: trend.to_string(),
        cagr_percent,
    })
    .collect()
}

/// AI healthcare revenue for one country, USD billion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryForecast {
    pub country: String,
    pub revenue_2023: f64,
    pub forecast_2030: f64,
    /// Projected growth 2024-2030 as published, e.g. `"36.1%"`.
    pub growth_rate: String,
}

pub fn country_forecasts() -> Vec<CountryForecast> {
    [
        ("USA", 11.8194, 102.1537, "36.1%"),
        ("Canada", 1.1338, 10.7673, "37.9%"),
        ("Germany", 0.6871, 6.6181, "38.2%"),
        ("France", 0.7142, 7.0779, "38.8%"),
        ("Italy", 0.0965, 0.7393, "33.8%"),
        ("Spain", 0.1629, 1.5143, "37.5%"),
        ("Russia", 0.2015, 1.8475, "37.2%"),
        ("UK", 1.3262, 12.4938, "37.8%"),
        ("Japan", 0.9173, 10.8909, "42.4%"),
        ("China", 1.5855, 18.8836, "42.5%"),
        ("India", 0.7588, 8.728, "41.8%"),
        ("Australia", 0.1976, 2.1573, "40.7%"),
        ("South Korea", 0.3528, 3.8091, "40.5%"),
        ("Singapore", 0.0781, 0.8813, "41.4%"),
        ("Mexico", 0.0562, 0.5938, "40.0%"),
        ("Argentina", 0.0355, 0.3048, "36.0%"),
        ("Brazil", 0.0841, 0.7894, "37.7%"),
        ("South Africa", 0.0153, 0.1163, "33.6%"),
        ("Saudi Arabia", 0.0228, 0.1913, "35.5%"),
        ("UAE", 0.0172, 0.1379, "34.6%"),
    ]
    .into_iter()
    .map(|(country, revenue_2023, forecast_2030, growth_rate)| CountryForecast {
        country: country.to_string(),
        revenue_2023,
        forecast_2030,
        growth_rate: growth_rate.to_string(),
    })
    .collect()
}

/// Global AI healthcare market size, USD millions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSizeSeries {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    /// Last year of observed data; later years are projections.
    pub boundary_year: i32,
}

pub fn global_market_size() -> MarketSizeSeries {
    MarketSizeSeries {
        years: (2016..=2030).collect(),
        values: vec![
            100.0, 300.0, 700.0, 1500.0, 3000.0, 6000.0, 12000.0, 25000.0, 45000.0, 70000.0,
            100000.0, 130000.0, 165000.0, 190000.0, 215000.0,
        ],
        boundary_year: 2025,
    }
}
