use serde::{Deserialize, Serialize};

// ============================================================================
// Shared enums
// ============================================================================

/// Unit system selector, echoed into every normalized response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Selects the metric or imperial member of a unit-paired quantity.
    pub(crate) fn pick<T>(self, metric: T, imperial: T) -> T {
        match self {
            Units::Metric => metric,
            Units::Imperial => imperial,
        }
    }
}

/// Direction of change reported for temperature, humidity and pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Steady,
    Falling,
}

/// Sixteen-point compass label. Acuparse spells north-northwest `NWW`;
/// kept as-is for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nww,
}

// ============================================================================
// Raw health payload
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: Option<String>,
    pub installed: Option<String>,
    pub realtime: Option<String>,
    pub updated: Option<String>,
    pub authenticated: Option<bool>,
    pub admin: Option<bool>,
    pub database: Option<String>,
}

// ============================================================================
// Raw dashboard payload
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub main: DashboardMain,
    pub atlas: Option<DashboardAtlas>,
    pub lightning: Option<DashboardLightning>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardMain {
    #[serde(rename = "tempF")]
    pub temp_f: Option<f64>,
    #[serde(rename = "tempC")]
    pub temp_c: Option<f64>,
    #[serde(rename = "tempF_trend")]
    pub temp_f_trend: Option<Trend>,
    #[serde(rename = "feelsF")]
    pub feels_f: Option<f64>,
    #[serde(rename = "feelsC")]
    pub feels_c: Option<f64>,
    #[serde(rename = "dewptF")]
    pub dewpt_f: Option<f64>,
    #[serde(rename = "dewptC")]
    pub dewpt_c: Option<f64>,
    #[serde(rename = "tempC_high")]
    pub temp_c_high: Option<f64>,
    #[serde(rename = "tempF_high")]
    pub temp_f_high: Option<f64>,
    pub high_temp_recorded: Option<String>,
    #[serde(rename = "tempC_low")]
    pub temp_c_low: Option<f64>,
    #[serde(rename = "tempF_low")]
    pub temp_f_low: Option<f64>,
    pub low_temp_recorded: Option<String>,
    #[serde(rename = "tempC_avg")]
    pub temp_c_avg: Option<f64>,
    #[serde(rename = "tempF_avg")]
    pub temp_f_avg: Option<f64>,
    #[serde(rename = "relH")]
    pub rel_h: Option<f64>,
    #[serde(rename = "relH_trend")]
    pub rel_h_trend: Option<Trend>,
    #[serde(rename = "windSpeedMPH")]
    pub wind_speed_mph: Option<f64>,
    #[serde(rename = "windSpeedKMH")]
    pub wind_speed_kmh: Option<f64>,
    #[serde(rename = "windDEG")]
    pub wind_deg: Option<f64>,
    #[serde(rename = "windDIR")]
    pub wind_dir: Option<Direction>,
    #[serde(rename = "windDEG_peak")]
    pub wind_deg_peak: Option<f64>,
    #[serde(rename = "windDIR_peak")]
    pub wind_dir_peak: Option<Direction>,
    #[serde(rename = "windSpeedMPH_peak")]
    pub wind_speed_mph_peak: Option<f64>,
    #[serde(rename = "windSpeedKMH_peak")]
    pub wind_speed_kmh_peak: Option<f64>,
    #[serde(rename = "windSpeed_peak_recorded")]
    pub wind_speed_peak_recorded: Option<String>,
    #[serde(rename = "windBeaufort")]
    pub wind_beaufort: Option<f64>,
    #[serde(rename = "windGustDEG")]
    pub wind_gust_deg: Option<f64>,
    #[serde(rename = "windGustDIR")]
    pub wind_gust_dir: Option<Direction>,
    #[serde(rename = "windGustMPH")]
    pub wind_gust_mph: Option<f64>,
    #[serde(rename = "windGustKMH")]
    pub wind_gust_kmh: Option<f64>,
    #[serde(rename = "windGustPeakMPH")]
    pub wind_gust_peak_mph: Option<f64>,
    #[serde(rename = "windGustPeakKMH")]
    pub wind_gust_peak_kmh: Option<f64>,
    #[serde(rename = "windGustDEGPeak")]
    pub wind_gust_deg_peak: Option<f64>,
    #[serde(rename = "windGustDIRPeak")]
    pub wind_gust_dir_peak: Option<Direction>,
    #[serde(rename = "windGustPeakRecorded")]
    pub wind_gust_peak_recorded: Option<String>,
    #[serde(rename = "windAvgMPH")]
    pub wind_avg_mph: Option<f64>,
    #[serde(rename = "windAvgKMH")]
    pub wind_avg_kmh: Option<f64>,
    #[serde(rename = "rainIN")]
    pub rain_in: Option<f64>,
    #[serde(rename = "rainMM")]
    pub rain_mm: Option<f64>,
    #[serde(rename = "rainTotalIN_today")]
    pub rain_total_in_today: Option<f64>,
    #[serde(rename = "rainTotalMM_today")]
    pub rain_total_mm_today: Option<f64>,
    #[serde(rename = "pressure_inHg")]
    pub pressure_inhg: Option<f64>,
    #[serde(rename = "pressure_kPa")]
    pub pressure_kpa: Option<f64>,
    pub pressure_trend: Option<Trend>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,
    pub moon_age: Option<f64>,
    pub moon_stage: Option<String>,
    pub moon_illumination: Option<String>,
    #[serde(rename = "moon_nextNew")]
    pub moon_next_new: Option<String>,
    #[serde(rename = "moon_nextFull")]
    pub moon_next_full: Option<String>,
    #[serde(rename = "moon_lastNew")]
    pub moon_last_new: Option<String>,
    #[serde(rename = "moon_lastFull")]
    pub moon_last_full: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardAtlas {
    #[serde(rename = "lightIntensity")]
    pub light_intensity: Option<f64>,
    #[serde(rename = "lightIntensity_text")]
    pub light_intensity_text: Option<String>,
    #[serde(rename = "lightSeconds")]
    pub light_seconds: Option<f64>,
    #[serde(rename = "lightHours")]
    pub light_hours: Option<f64>,
    #[serde(rename = "uvIndex")]
    pub uv_index: Option<f64>,
    #[serde(rename = "uvIndex_text")]
    pub uv_index_text: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardLightning {
    #[serde(rename = "strikecount")]
    pub strike_count: Option<f64>,
    #[serde(rename = "dailystrikes")]
    pub daily_strikes: Option<f64>,
    #[serde(rename = "currentstrikes")]
    pub current_strikes: Option<f64>,
    pub interference: Option<f64>,
    pub interference_text: Option<String>,
    pub last_strike_ts: Option<String>,
    pub last_update: Option<String>,
    #[serde(rename = "last_strike_distance_KM")]
    pub last_strike_distance_km: Option<f64>,
    #[serde(rename = "last_strike_distance_M")]
    pub last_strike_distance_m: Option<f64>,
}

// ============================================================================
// Raw archive payload
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub main: ArchiveBuckets<ArchiveMainRecord>,
    pub atlas: Option<ArchiveBuckets<ArchiveAtlasRecord>>,
}

/// The six fixed historical windows the archive endpoint reports, shared
/// between raw and normalized shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveBuckets<T> {
    pub yesterday: T,
    pub week: T,
    pub month: T,
    pub last_month: T,
    pub year: T,
    pub ever: T,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveMainRecord {
    #[serde(rename = "tempF_high")]
    pub temp_f_high: Option<f64>,
    #[serde(rename = "tempF_low")]
    pub temp_f_low: Option<f64>,
    #[serde(rename = "tempC_high")]
    pub temp_c_high: Option<f64>,
    #[serde(rename = "tempC_low")]
    pub temp_c_low: Option<f64>,
    #[serde(rename = "tempF_high_recorded")]
    pub temp_f_high_recorded: Option<String>,
    #[serde(rename = "tempF_low_recorded")]
    pub temp_f_low_recorded: Option<String>,
    #[serde(rename = "windS_mph_high")]
    pub wind_mph_high: Option<f64>,
    #[serde(rename = "windS_kmh_high")]
    pub wind_kmh_high: Option<f64>,
    #[serde(rename = "windS_mph_high_recorded")]
    pub wind_mph_high_recorded: Option<String>,
    #[serde(rename = "windDIR")]
    pub wind_dir: Option<Direction>,
    #[serde(rename = "pressure_inHg_high")]
    pub pressure_inhg_high: Option<f64>,
    #[serde(rename = "pressure_kPa_high")]
    pub pressure_kpa_high: Option<f64>,
    #[serde(rename = "pressure_inHg_low")]
    pub pressure_inhg_low: Option<f64>,
    #[serde(rename = "pressure_kPa_low")]
    pub pressure_kpa_low: Option<f64>,
    #[serde(rename = "pressure_inHg_high_recorded")]
    pub pressure_inhg_high_recorded: Option<String>,
    #[serde(rename = "pressure_inHg_low_recorded")]
    pub pressure_inhg_low_recorded: Option<String>,
    #[serde(rename = "relH_high")]
    pub rel_h_high: Option<f64>,
    #[serde(rename = "relH_low")]
    pub rel_h_low: Option<f64>,
    #[serde(rename = "relH_high_recorded")]
    pub rel_h_high_recorded: Option<String>,
    #[serde(rename = "relH_low_recorded")]
    pub rel_h_low_recorded: Option<String>,
    #[serde(rename = "rainfall_IN_total")]
    pub rainfall_in_total: Option<f64>,
    #[serde(rename = "rainfall_MM_total")]
    pub rainfall_mm_total: Option<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveAtlasRecord {
    pub uvindex_high: Option<f64>,
    pub uvindex_high_recorded: Option<String>,
    pub light_high: Option<f64>,
    pub light_high_recorded: Option<String>,
    #[serde(rename = "lightHours_high")]
    pub light_hours_high: Option<f64>,
    #[serde(rename = "lightHours_high_recorded")]
    pub light_hours_high_recorded: Option<String>,
    pub lightning: Option<f64>,
    pub lightning_recorded: Option<String>,
}

// ============================================================================
// Normalized health report
// ============================================================================

/// Health report for an Acuparse installation. Everything passes through
/// from the raw payload except `installed`, which is coerced to a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: Option<String>,
    pub installed: bool,
    pub realtime: Option<String>,
    pub updated: Option<String>,
    pub authenticated: Option<bool>,
    pub admin: Option<bool>,
    pub database: Option<String>,
}

// ============================================================================
// Normalized dashboard reading
// ============================================================================

/// Current conditions with unit-agnostic field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Main {
    pub units: Units,
    pub temp: Temperature,
    pub relative_humidity: RelativeHumidity,
    pub wind: Wind,
    pub wind_gust: WindGust,
    pub rain: Rain,
    pub pressure: Pressure,
    pub sun: Sun,
    pub moon: Moon,
    pub light: Light,
    pub lightning: Lightning,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub temp: Option<f64>,
    pub trend: Option<Trend>,
    pub feels_like: Option<f64>,
    pub dew_point: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub avg: Option<f64>,
    pub high_recorded_at: Option<String>,
    pub low_recorded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeHumidity {
    pub relative_humidity: Option<f64>,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindDirection {
    pub deg: Option<f64>,
    pub dir: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindPeak {
    pub speed: Option<f64>,
    pub direction: WindDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
    pub direction: WindDirection,
    pub peak: WindPeak,
    pub beaufort: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindGust {
    pub speed: Option<f64>,
    pub direction: WindDirection,
    pub peak: WindPeak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rain {
    pub rate: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pressure {
    pub pressure: Option<f64>,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub rise: Option<String>,
    pub set: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub rise: Option<String>,
    pub set: Option<String>,
    pub age: Option<f64>,
    pub stage: Option<String>,
    pub illumination: Option<f64>,
    pub next_new: Option<String>,
    pub next_full: Option<String>,
    pub last_new: Option<String>,
    pub last_full: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightIntensity {
    pub intensity: Option<f64>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvIndex {
    pub uv: Option<f64>,
    pub text: Option<String>,
}

/// Atlas light sensor reading. Always emitted; every field is `None` when
/// the station has no Atlas unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Light {
    pub intensity: LightIntensity,
    pub light_time: Option<f64>,
    pub uv: UvIndex,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interference {
    pub interference: Option<f64>,
    pub text: Option<String>,
}

/// Lightning detector reading. Always emitted; every field is `None` when
/// the station has no detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lightning {
    pub strikes: Option<f64>,
    pub daily: Option<f64>,
    pub current: Option<f64>,
    pub interference: Interference,
    pub last_strike_at: Option<String>,
    pub last_strike_distance: Option<f64>,
    pub last_updated: Option<String>,
}

// ============================================================================
// Normalized archive summary
// ============================================================================

/// Historical extremes per time window. `atlas` is omitted from serialized
/// output entirely when the station reports no Atlas archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub units: Units,
    pub main: ArchiveBuckets<ArchiveMain>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub atlas: Option<ArchiveBuckets<ArchiveAtlas>>,
}

/// High/low pair with the timestamps each extreme was recorded at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveExtremes {
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub high_recorded_at: Option<String>,
    pub low_recorded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveWind {
    pub high: Option<f64>,
    pub high_recorded_at: Option<String>,
    pub dir: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveMain {
    pub temp: ArchiveExtremes,
    pub wind: ArchiveWind,
    pub pressure: ArchiveExtremes,
    pub humidity: ArchiveExtremes,
    pub rainfall: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivePeak {
    pub high: Option<f64>,
    pub high_recorded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveAtlas {
    pub uv: ArchivePeak,
    pub light: ArchivePeak,
    pub light_hours: Option<f64>,
    pub lightning_strikes: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn units_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Units::Metric).unwrap(), json!("metric"));
        assert_eq!(
            serde_json::to_value(Units::Imperial).unwrap(),
            json!("imperial")
        );
        assert_eq!(Units::default(), Units::Metric);
    }

    #[test]
    fn trend_round_trips() {
        for (variant, text) in [
            (Trend::Rising, "rising"),
            (Trend::Steady, "steady"),
            (Trend::Falling, "falling"),
        ] {
            assert_eq!(serde_json::to_value(variant).unwrap(), json!(text));
            assert_eq!(
                serde_json::from_value::<Trend>(json!(text)).unwrap(),
                variant
            );
        }
    }

    #[test]
    fn direction_uses_upstream_labels() {
        assert_eq!(serde_json::to_value(Direction::Nne).unwrap(), json!("NNE"));
        // Upstream spells north-northwest this way.
        assert_eq!(serde_json::to_value(Direction::Nww).unwrap(), json!("NWW"));
        assert_eq!(
            serde_json::from_value::<Direction>(json!("WSW")).unwrap(),
            Direction::Wsw
        );
    }

    #[test]
    fn pick_selects_by_units() {
        assert_eq!(Units::Metric.pick(1, 2), 1);
        assert_eq!(Units::Imperial.pick(1, 2), 2);
    }
}
