//! Pure mapping from raw Acuparse payloads to the normalized shapes.
//!
//! Acuparse reports every unit-bearing quantity twice, once per unit system
//! (`tempC`/`tempF`, `windSpeedKMH`/`windSpeedMPH`, ...). Each normalizer
//! consults the [`Units`] selector once per quantity and emits a single
//! unit-agnostic field. Several archive timestamps are recorded upstream
//! under one fixed unit suffix only; those are read from that suffix in both
//! branches to stay byte-compatible with the service.

use crate::models::{
    Archive, ArchiveAtlas, ArchiveAtlasRecord, ArchiveBuckets, ArchiveExtremes, ArchiveMain,
    ArchiveMainRecord, ArchivePeak, ArchiveResponse, ArchiveWind, DashboardResponse, Health,
    HealthResponse, Interference, Light, LightIntensity, Lightning, Main, Moon, Pressure, Rain,
    RelativeHumidity, Sun, Temperature, Units, UvIndex, Wind, WindDirection, WindGust, WindPeak,
};

/// Normalizes the health endpoint body.
///
/// The raw `installed` flag is a string; anything other than exactly
/// `"true"` (including `"false"`, `"TRUE"` or a missing field) maps to
/// `false`. Every other field passes through untouched.
pub fn normalize_health(raw: HealthResponse) -> Health {
    Health {
        status: raw.status,
        installed: raw.installed.as_deref() == Some("true"),
        realtime: raw.realtime,
        updated: raw.updated,
        authenticated: raw.authenticated,
        admin: raw.admin,
        database: raw.database,
    }
}

/// Parses the `moon_illumination` string, e.g. `"42%"`.
///
/// Strips one trailing `%` and parses the rest. Anything unparseable yields
/// `NAN` rather than an error; callers get a degraded value, never a failure.
fn parse_illumination(raw: &str) -> f64 {
    let value = raw.strip_suffix('%').unwrap_or(raw);
    value.parse().unwrap_or(f64::NAN)
}

/// Normalizes the dashboard endpoint body into a [`Main`] reading.
///
/// The `atlas` and `lightning` blocks are optional upstream; their normalized
/// sub-records are still emitted, with every field `None`, when the raw block
/// is absent. `feelsLike` mirrors the selected temperature, as upstream.
pub fn normalize_main(raw: DashboardResponse, units: Units) -> Main {
    let main = raw.main;
    let atlas = raw.atlas.unwrap_or_default();
    let lightning = raw.lightning.unwrap_or_default();

    let temp = units.pick(main.temp_c, main.temp_f);

    Main {
        units,
        temp: Temperature {
            temp,
            trend: main.temp_f_trend,
            feels_like: temp,
            dew_point: units.pick(main.dewpt_c, main.dewpt_f),
            high: units.pick(main.temp_c_high, main.temp_f_high),
            low: units.pick(main.temp_c_low, main.temp_f_low),
            avg: units.pick(main.temp_c_avg, main.temp_f_avg),
            high_recorded_at: main.high_temp_recorded,
            low_recorded_at: main.low_temp_recorded,
        },
        relative_humidity: RelativeHumidity {
            relative_humidity: main.rel_h,
            trend: main.rel_h_trend,
        },
        wind: Wind {
            speed: units.pick(main.wind_speed_kmh, main.wind_speed_mph),
            direction: WindDirection {
                deg: main.wind_deg,
                dir: main.wind_dir,
            },
            peak: WindPeak {
                speed: units.pick(main.wind_speed_kmh_peak, main.wind_speed_mph_peak),
                direction: WindDirection {
                    deg: main.wind_deg_peak,
                    dir: main.wind_dir_peak,
                },
            },
            beaufort: main.wind_beaufort,
        },
        wind_gust: WindGust {
            speed: units.pick(main.wind_gust_kmh, main.wind_gust_mph),
            direction: WindDirection {
                deg: main.wind_gust_deg,
                dir: main.wind_gust_dir,
            },
            peak: WindPeak {
                speed: units.pick(main.wind_gust_peak_kmh, main.wind_gust_peak_mph),
                direction: WindDirection {
                    deg: main.wind_gust_deg_peak,
                    dir: main.wind_gust_dir_peak,
                },
            },
        },
        rain: Rain {
            rate: units.pick(main.rain_mm, main.rain_in),
            total: units.pick(main.rain_total_mm_today, main.rain_total_in_today),
        },
        pressure: Pressure {
            pressure: units.pick(main.pressure_kpa, main.pressure_inhg),
            trend: main.pressure_trend,
        },
        sun: Sun {
            rise: main.sunrise,
            set: main.sunset,
        },
        moon: Moon {
            rise: main.moonrise,
            set: main.moonset,
            age: main.moon_age,
            stage: main.moon_stage,
            illumination: main.moon_illumination.as_deref().map(parse_illumination),
            next_new: main.moon_next_new,
            next_full: main.moon_next_full,
            last_new: main.moon_last_new,
            last_full: main.moon_last_full,
        },
        light: Light {
            intensity: LightIntensity {
                intensity: atlas.light_intensity,
                text: atlas.light_intensity_text,
            },
            light_time: atlas.light_seconds,
            uv: UvIndex {
                uv: atlas.uv_index,
                text: atlas.uv_index_text,
            },
            last_updated: atlas.last_updated,
        },
        lightning: Lightning {
            strikes: lightning.strike_count,
            daily: lightning.daily_strikes,
            current: lightning.current_strikes,
            interference: Interference {
                interference: lightning.interference,
                text: lightning.interference_text,
            },
            last_strike_at: lightning.last_strike_ts,
            last_strike_distance: units.pick(
                lightning.last_strike_distance_km,
                lightning.last_strike_distance_m,
            ),
            last_updated: lightning.last_update,
        },
        last_updated: main.last_updated,
    }
}

/// Normalizes the archive endpoint body into an [`Archive`] summary.
///
/// Each of the six time windows is mapped independently. The `atlas`
/// bucket-map is only produced when the raw payload carries one; unlike the
/// dashboard's optional blocks, an absent archive `atlas` is omitted from the
/// output rather than emitted empty.
pub fn normalize_archive(raw: ArchiveResponse, units: Units) -> Archive {
    Archive {
        units,
        main: map_buckets(raw.main, |record| archive_main_block(record, units)),
        atlas: raw.atlas.map(|atlas| map_buckets(atlas, archive_atlas_block)),
    }
}

/// Applies one block mapper across the six fixed time windows.
fn map_buckets<T, U>(buckets: ArchiveBuckets<T>, map: impl Fn(T) -> U) -> ArchiveBuckets<U> {
    ArchiveBuckets {
        yesterday: map(buckets.yesterday),
        week: map(buckets.week),
        month: map(buckets.month),
        last_month: map(buckets.last_month),
        year: map(buckets.year),
        ever: map(buckets.ever),
    }
}

/// Maps one weather block of the archive.
///
/// Upstream records the temperature extreme timestamps only under the `tempF`
/// keys, the pressure ones only under `inHg` and the wind one only under
/// `mph`; all three are read from those keys in both unit branches.
fn archive_main_block(record: ArchiveMainRecord, units: Units) -> ArchiveMain {
    ArchiveMain {
        temp: ArchiveExtremes {
            high: units.pick(record.temp_c_high, record.temp_f_high),
            low: units.pick(record.temp_c_low, record.temp_f_low),
            high_recorded_at: record.temp_f_high_recorded,
            low_recorded_at: record.temp_f_low_recorded,
        },
        wind: ArchiveWind {
            high: units.pick(record.wind_kmh_high, record.wind_mph_high),
            high_recorded_at: record.wind_mph_high_recorded,
            dir: record.wind_dir,
        },
        pressure: ArchiveExtremes {
            high: units.pick(record.pressure_kpa_high, record.pressure_inhg_high),
            low: units.pick(record.pressure_kpa_low, record.pressure_inhg_low),
            high_recorded_at: record.pressure_inhg_high_recorded,
            low_recorded_at: record.pressure_inhg_low_recorded,
        },
        humidity: ArchiveExtremes {
            high: record.rel_h_high,
            low: record.rel_h_low,
            high_recorded_at: record.rel_h_high_recorded,
            low_recorded_at: record.rel_h_low_recorded,
        },
        rainfall: units.pick(record.rainfall_mm_total, record.rainfall_in_total),
    }
}

/// Maps one Atlas block of the archive. No unit branching; UV, light and
/// lightning have a single representation. The light extreme's timestamp is
/// recorded upstream under the UV key.
fn archive_atlas_block(record: ArchiveAtlasRecord) -> ArchiveAtlas {
    ArchiveAtlas {
        uv: ArchivePeak {
            high: record.uvindex_high,
            high_recorded_at: record.uvindex_high_recorded.clone(),
        },
        light: ArchivePeak {
            high: record.light_high,
            high_recorded_at: record.uvindex_high_recorded,
        },
        light_hours: record.light_hours_high,
        lightning_strikes: record.lightning,
    }
}
