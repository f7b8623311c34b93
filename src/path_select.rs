// Picks the ODsay candidate itinerary that best matches the caller's
// ride / board / drop hints. Pure functions over the decoded response;
// the input is never mutated and the winner is returned by reference.

use crate::error::RouteError;
use crate::models::{RideHint, SearchPathResponse, TrafficType, TransitPath};
use crate::normalize::normalize;

const RIDE_MATCH_BONUS: u32 = 10;
const STOP_MATCH_BONUS: u32 = 5;

/// Scores one itinerary against the hints. Returns the score and the
/// itinerary's total time in minutes, the two keys the selector ranks by.
pub fn score_path(path: &TransitPath, hint: &RideHint) -> (u32, i64) {
    let ride = normalize(Some(&hint.ride));
    let board = normalize(Some(&hint.board));
    let drop = normalize(Some(&hint.drop));

    let total_time = path.info.total_time_or_unknown();
    let mut score = 0u32;

    // A leg whose lane matches the preferred line earns the bonus once;
    // the labeled break moves on to the next leg after the first hit, so
    // several matching legs (e.g. a transfer staying on line 2) stack.
    if !ride.is_empty() {
        for leg in &path.sub_path {
            if !leg.traffic_type.is_transit() {
                continue;
            }
            'lanes: for lane in &leg.lane {
                let mut candidates: Vec<&str> = Vec::new();
                if leg.traffic_type == TrafficType::Bus {
                    if let Some(bus_no) = &lane.bus_no {
                        candidates.push(bus_no);
                    }
                }
                if let Some(name) = &lane.name {
                    candidates.push(name);
                }
                for candidate in candidates {
                    if normalize(Some(candidate)).contains(&ride) {
                        score += RIDE_MATCH_BONUS;
                        break 'lanes;
                    }
                }
            }
        }
    }

    // Board and drop each match against the pooled stop names of the whole
    // itinerary, at most once regardless of how many stops hit.
    if !board.is_empty() || !drop.is_empty() {
        let stop_names: Vec<String> = path
            .sub_path
            .iter()
            .flat_map(|leg| leg.pass_stop_list.stops())
            .filter_map(|stop| stop.station_name.as_deref())
            .map(|name| normalize(Some(name)))
            .collect();

        if !board.is_empty() && stop_names.iter().any(|name| name.contains(&board)) {
            score += STOP_MATCH_BONUS;
        }
        if !drop.is_empty() && stop_names.iter().any(|name| name.contains(&drop)) {
            score += STOP_MATCH_BONUS;
        }
    }

    (score, total_time)
}

/// Picks the best-matching itinerary out of a searchPubTransPathT response.
///
/// With no hints at all the first path is returned untouched, because
/// ODsay already orders the list by its own recommendation. Otherwise the
/// highest score wins, ties go to the shorter total time, and an exact tie
/// keeps the earlier path. If even the winner scored 0 the hints matched
/// nothing anywhere, so the first path is again the safer answer.
pub fn select_path<'a>(
    response: &'a SearchPathResponse,
    hint: &RideHint,
) -> Result<&'a TransitPath, RouteError> {
    let paths = response
        .result
        .as_ref()
        .and_then(|result| result.path.as_ref())
        .ok_or_else(|| RouteError::MalformedResponse("missing result.path".to_string()))?;

    if paths.is_empty() {
        return Err(RouteError::NoRouteFound);
    }

    if hint.is_empty() {
        return Ok(&paths[0]);
    }

    let mut best = &paths[0];
    let (mut best_score, mut best_time) = score_path(best, hint);

    for path in &paths[1..] {
        let (score, time) = score_path(path, hint);
        if score > best_score || (score == best_score && time < best_time) {
            best = path;
            best_score = score;
            best_time = time;
        }
    }

    if best_score == 0 {
        return Ok(&paths[0]);
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_TOTAL_TIME;
    use serde_json::json;

    fn hint(ride: &str, board: &str, drop: &str) -> RideHint {
        RideHint {
            ride: ride.to_string(),
            board: board.to_string(),
            drop: drop.to_string(),
        }
    }

    fn bus_path(total_time: i64, bus_no: &str, stops: &[&str]) -> serde_json::Value {
        json!({
            "info": { "totalTime": total_time, "mapObj": format!("obj-{bus_no}-{total_time}") },
            "subPath": [
                { "trafficType": 3 },
                {
                    "trafficType": 2,
                    "lane": [ { "busNo": bus_no, "name": format!("{bus_no}번") } ],
                    "passStopList": {
                        "stations": stops.iter()
                            .map(|s| json!({ "stationName": s }))
                            .collect::<Vec<_>>()
                    }
                }
            ]
        })
    }

    fn response(paths: Vec<serde_json::Value>) -> SearchPathResponse {
        serde_json::from_value(json!({ "result": { "path": paths } })).unwrap()
    }

    fn decode_path(raw: serde_json::Value) -> TransitPath {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_ride_match_scores_ten() {
        let path = decode_path(bus_path(30, "401", &["신촌역"]));
        let (score, time) = score_path(&path, &hint("401", "", ""));
        assert!(score >= 10);
        assert_eq!(time, 30);
    }

    #[test]
    fn test_full_match_scores_twenty() {
        let path = decode_path(bus_path(30, "401", &["연희동", "연세대앞"]));
        let (score, _) = score_path(&path, &hint("401번", "연희동", "연세대앞"));
        assert_eq!(score, 20);
    }

    #[test]
    fn test_board_counts_once_despite_multiple_stop_hits() {
        let path = decode_path(bus_path(30, "401", &["신촌역", "신촌역입구"]));
        let (score, _) = score_path(&path, &hint("", "신촌", ""));
        assert_eq!(score, 5);
    }

    #[test]
    fn test_subway_leg_ignores_bus_no_field() {
        let path = decode_path(json!({
            "info": { "totalTime": 25 },
            "subPath": [ {
                "trafficType": 1,
                "lane": [ { "busNo": "273", "name": "수도권 2호선" } ]
            } ]
        }));
        let (score_via_bus_no, _) = score_path(&path, &hint("273", "", ""));
        assert_eq!(score_via_bus_no, 0);
        let (score_via_name, _) = score_path(&path, &hint("2호선", "", ""));
        assert_eq!(score_via_name, 10);
    }

    #[test]
    fn test_one_leg_scores_once_even_with_many_matching_lanes() {
        let path = decode_path(json!({
            "info": { "totalTime": 25 },
            "subPath": [ {
                "trafficType": 2,
                "lane": [ { "busNo": "401" }, { "busNo": "401번" } ]
            } ]
        }));
        let (score, _) = score_path(&path, &hint("401", "", ""));
        assert_eq!(score, 10);
    }

    #[test]
    fn test_matching_legs_stack() {
        let path = decode_path(json!({
            "info": { "totalTime": 55 },
            "subPath": [
                { "trafficType": 2, "lane": [ { "busNo": "401" } ] },
                { "trafficType": 3 },
                { "trafficType": 2, "lane": [ { "busNo": "401" } ] }
            ]
        }));
        let (score, _) = score_path(&path, &hint("401", "", ""));
        assert_eq!(score, 20);
    }

    #[test]
    fn test_empty_path_never_panics() {
        let path = decode_path(json!({ "info": {}, "subPath": [] }));
        let (score, time) = score_path(&path, &hint("401", "신촌", "독수리앞"));
        assert_eq!(score, 0);
        assert_eq!(time, UNKNOWN_TOTAL_TIME);
    }

    #[test]
    fn test_missing_result_path_is_malformed() {
        let resp: SearchPathResponse =
            serde_json::from_value(json!({ "result": {} })).unwrap();
        assert!(matches!(
            select_path(&resp, &RideHint::default()),
            Err(RouteError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_empty_path_list_is_no_route() {
        let resp = response(vec![]);
        assert!(matches!(
            select_path(&resp, &RideHint::default()),
            Err(RouteError::NoRouteFound)
        ));
    }

    #[test]
    fn test_no_hints_returns_first_path() {
        let resp = response(vec![
            bus_path(30, "110", &["아현동"]),
            bus_path(20, "401", &["신촌역"]),
        ]);
        let winner = select_path(&resp, &RideHint::default()).unwrap();
        assert_eq!(winner.info.map_obj.as_deref(), Some("obj-110-30"));
    }

    #[test]
    fn test_ride_hint_beats_shorter_total_time() {
        let resp = response(vec![
            bus_path(30, "110", &["아현동"]),
            bus_path(40, "401", &["신촌역"]),
        ]);
        let winner = select_path(&resp, &hint("401", "", "")).unwrap();
        assert_eq!(winner.info.map_obj.as_deref(), Some("obj-401-40"));
    }

    #[test]
    fn test_equal_score_prefers_shorter_time() {
        let resp = response(vec![
            bus_path(45, "401", &["신촌역"]),
            bus_path(35, "401", &["신촌역"]),
        ]);
        let winner = select_path(&resp, &hint("401", "", "")).unwrap();
        assert_eq!(winner.info.map_obj.as_deref(), Some("obj-401-35"));
    }

    #[test]
    fn test_exact_tie_keeps_earlier_path() {
        let resp = response(vec![
            bus_path(35, "401", &["신촌역"]),
            bus_path(35, "401", &["신촌역"]),
        ]);
        let winner = select_path(&resp, &hint("401", "", "")).unwrap();
        assert_eq!(winner.info.map_obj.as_deref(), Some("obj-401-35"));
        assert!(std::ptr::eq(
            winner,
            &resp.result.as_ref().unwrap().path.as_ref().unwrap()[0]
        ));
    }

    #[test]
    fn test_unmatched_hints_fall_back_to_first_path() {
        let resp = response(vec![
            bus_path(30, "110", &["아현동"]),
            bus_path(20, "172", &["서강대앞"]),
        ]);
        let winner = select_path(&resp, &hint("9999", "없는정류장", "")).unwrap();
        assert_eq!(winner.info.map_obj.as_deref(), Some("obj-110-30"));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let resp = response(vec![
            bus_path(30, "110", &["아현동"]),
            bus_path(40, "401", &["신촌역"]),
            bus_path(40, "401", &["신촌역"]),
        ]);
        let h = hint("401", "신촌", "");
        let first = select_path(&resp, &h).unwrap().info.map_obj.clone();
        for _ in 0..5 {
            let again = select_path(&resp, &h).unwrap().info.map_obj.clone();
            assert_eq!(again, first);
        }
    }
}
