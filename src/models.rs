// Deserialization model for the ODsay searchPubTransPathT response,
// reduced to the fields the path selection logic reads.

use serde::Deserialize;

/// A WGS84 point, degrees.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Caller preferences used to re-rank ODsay's candidate itineraries.
/// All three fields are free text and may be empty.
#[derive(Debug, Clone, Default)]
pub struct RideHint {
    /// Preferred bus route number or subway line name.
    pub ride: String,
    /// Preferred boarding stop name.
    pub board: String,
    /// Preferred alighting stop name.
    pub drop: String,
}

impl RideHint {
    pub fn is_empty(&self) -> bool {
        self.ride.is_empty() && self.board.is_empty() && self.drop.is_empty()
    }
}

/// Ranks worse than any real trip duration when totalTime is absent.
pub const UNKNOWN_TOTAL_TIME: i64 = 1_000_000_000;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPathResponse {
    pub result: Option<SearchPathResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPathResult {
    pub path: Option<Vec<TransitPath>>,
}

/// One full candidate itinerary from ODsay.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitPath {
    #[serde(default)]
    pub info: PathInfo,
    #[serde(default, rename = "subPath")]
    pub sub_path: Vec<SubPath>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathInfo {
    #[serde(rename = "totalTime")]
    pub total_time: Option<i64>,
    /// Opaque handle for this itinerary's graphical path data,
    /// consumed by the loadLane follow-up call.
    #[serde(rename = "mapObj")]
    pub map_obj: Option<String>,
}

impl PathInfo {
    pub fn total_time_or_unknown(&self) -> i64 {
        self.total_time.unwrap_or(UNKNOWN_TOTAL_TIME)
    }
}

/// One leg of an itinerary, travelled with a single mode.
#[derive(Debug, Clone, Deserialize)]
pub struct SubPath {
    #[serde(default, rename = "trafficType")]
    pub traffic_type: TrafficType,
    #[serde(default)]
    pub lane: Vec<Lane>,
    #[serde(default, rename = "passStopList")]
    pub pass_stop_list: PassStopList,
}

/// ODsay encodes the travel mode as an integer: 1 subway, 2 bus, 3 walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(from = "i64")]
pub enum TrafficType {
    Subway,
    Bus,
    Walk,
    #[default]
    Other,
}

impl From<i64> for TrafficType {
    fn from(code: i64) -> Self {
        match code {
            1 => TrafficType::Subway,
            2 => TrafficType::Bus,
            3 => TrafficType::Walk,
            _ => TrafficType::Other,
        }
    }
}

impl TrafficType {
    /// Walk legs carry no lane to match a ride hint against.
    pub fn is_transit(&self) -> bool {
        matches!(self, TrafficType::Subway | TrafficType::Bus)
    }
}

/// A single transit line used on a leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lane {
    #[serde(rename = "busNo")]
    pub bus_no: Option<String>,
    pub name: Option<String>,
}

/// Stops traversed on a leg. ODsay emits the array under either
/// "stations" (documented) or "station" (seen in the wild), so both are
/// accepted and the non-empty one wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassStopList {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub station: Vec<Station>,
}

impl PassStopList {
    pub fn stops(&self) -> &[Station] {
        if !self.stations.is_empty() {
            &self.stations
        } else {
            &self.station
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Station {
    #[serde(rename = "stationName")]
    pub station_name: Option<String>,
}
