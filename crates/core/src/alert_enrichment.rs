//! Alert enrichment: join raw recognition events to missing-person reports
//! and shape them for the officer dashboard.
//!
//! Alerts are written by an external recognition process, so every field is
//! loosely typed. The subject reference in particular may be a plain id
//! string, an extended-JSON object (`{"$oid": "..."}`), some other value, or
//! missing. The join works in three steps:
//!
//! 1. [`normalize_subject_ref`] turns each reference into `Option<String>`.
//! 2. [`resolvable_ids`] keeps only references in the canonical id shape, so
//!    the caller can fetch every matching report in one batch query.
//! 3. [`enrich_alerts`] builds one [`EnrichedAlert`] per input alert, in input
//!    order, using whatever names the batch query returned.
//!
//! Nothing is dropped: an alert whose reference does not resolve still comes
//! out, labelled with the raw reference or [`UNKNOWN_PERSON`].

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Timelike};
use chrono_tz::Europe::London;
use serde::Serialize;
use serde_json::Value;

use crate::object_id::is_object_id;
use crate::types::Timestamp;

/// Display name when an alert carries no usable subject reference.
pub const UNKNOWN_PERSON: &str = "Unknown person";

/// Display time when an alert carries no timestamp.
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Display location when an alert carries no location.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Status tag applied to alerts the recognition process left untagged.
pub const DEFAULT_ALERT_STATUS: &str = "new";

/// Every alert surfaced by this system is a recognition match.
pub const ALERT_TYPE_MATCH: &str = "match";

/// British short month names. September is `Sept`, not `Sep`.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// An alert as stored, before enrichment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAlert {
    pub id: String,
    pub person_id: Option<Value>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub confidence: Option<f64>,
    pub image_path: Option<String>,
    pub status: Option<String>,
    pub timestamp: Option<Timestamp>,
}

/// A display-ready alert as returned by `GET /alerts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAlert {
    pub id: String,
    pub person_id: Option<String>,
    pub person_name: String,
    pub location: String,
    pub time: String,
    pub confidence: Option<f64>,
    #[serde(rename = "image_path")]
    pub image_path: Option<String>,
    pub status: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Normalize a loosely-typed subject reference to a string.
///
/// - strings are trimmed; empty strings become `None`
/// - `{"$oid": "<hex>"}` yields the inner string
/// - other objects and arrays yield their compact JSON text
/// - numbers, booleans and `null` yield `None`
pub fn normalize_subject_ref(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Object(map) => match map.get("$oid") {
            Some(Value::String(oid)) => Some(oid.trim().to_string()),
            _ => Some(value.to_string()),
        },
        Value::Array(_) => Some(value.to_string()),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// Collect the distinct references that are worth looking up, in first-seen
/// order. References outside the canonical id shape are skipped.
pub fn resolvable_ids(alerts: &[RawAlert]) -> Vec<String> {
    let mut seen = HashSet::new();
    alerts
        .iter()
        .filter_map(|a| a.person_id.as_ref().and_then(normalize_subject_ref))
        .filter(|id| is_object_id(id))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Format an alert timestamp for display in UK local time, e.g.
/// `05 Mar 2025, 02:07:09 pm`.
///
/// The hour runs 00-11 on each half of the day, so noon is `00:00:00 pm` and
/// midnight is `00:00:00 am`. The dashboards compare this string verbatim.
pub fn format_alert_time(timestamp: Option<Timestamp>) -> String {
    let Some(ts) = timestamp else {
        return UNKNOWN_TIME.to_string();
    };
    let local = ts.with_timezone(&London);
    let month = MONTH_ABBREVIATIONS[local.month0() as usize];
    let meridiem = if local.hour() < 12 { "am" } else { "pm" };
    format!(
        "{:02} {month} {}, {:02}:{:02}:{:02} {meridiem}",
        local.day(),
        local.year(),
        local.hour() % 12,
        local.minute(),
        local.second(),
    )
}

/// Build the display message for an alert without one of its own.
pub fn synthesize_message(person_name: &str, location: &str, time: &str) -> String {
    format!("Person: {person_name} was found at {location} at {time}")
}

/// Enrich alerts using `names`, a map from report id to the missing person's
/// name. Output order and length match `alerts`.
///
/// `names` is keyed by stored (lowercase) report id and looked up with the
/// reference exactly as normalized, so an uppercase reference never resolves.
pub fn enrich_alerts(alerts: Vec<RawAlert>, names: &HashMap<String, String>) -> Vec<EnrichedAlert> {
    alerts.into_iter().map(|a| enrich_one(a, names)).collect()
}

fn enrich_one(alert: RawAlert, names: &HashMap<String, String>) -> EnrichedAlert {
    let person_id = alert.person_id.as_ref().and_then(normalize_subject_ref);

    let resolved = person_id
        .as_deref()
        .filter(|id| is_object_id(id))
        .and_then(|id| names.get(id))
        .filter(|name| !name.is_empty());

    let person_name = match (resolved, person_id.as_deref()) {
        (Some(name), _) => name.clone(),
        (None, Some(raw)) => raw.to_string(),
        (None, None) => UNKNOWN_PERSON.to_string(),
    };

    let location = alert
        .location
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
    let time = format_alert_time(alert.timestamp);

    let message = alert
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| synthesize_message(&person_name, &location, &time));

    EnrichedAlert {
        id: alert.id,
        person_id,
        person_name,
        location,
        time,
        confidence: alert.confidence,
        image_path: alert.image_path,
        status: alert
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ALERT_STATUS.to_string()),
        message,
        kind: ALERT_TYPE_MATCH,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    const REPORT_X: &str = "65f1a2b3c4d5e6f708192a3b";

    fn alert(id: &str, person_id: Option<Value>) -> RawAlert {
        RawAlert {
            id: id.to_string(),
            person_id,
            location: Some("Platform 4".to_string()),
            ..Default::default()
        }
    }

    fn names() -> HashMap<String, String> {
        HashMap::from([(REPORT_X.to_string(), "Kiran Rao".to_string())])
    }

    #[test]
    fn normalizes_reference_shapes() {
        assert_eq!(normalize_subject_ref(&json!("  abc ")), Some("abc".into()));
        assert_eq!(normalize_subject_ref(&json!("")), None);
        assert_eq!(normalize_subject_ref(&json!("   ")), None);
        assert_eq!(
            normalize_subject_ref(&json!({ "$oid": REPORT_X })),
            Some(REPORT_X.into())
        );
        assert_eq!(normalize_subject_ref(&json!({ "a": 1 })), Some(r#"{"a":1}"#.into()));
        assert_eq!(normalize_subject_ref(&json!(42)), None);
        assert_eq!(normalize_subject_ref(&json!(true)), None);
        assert_eq!(normalize_subject_ref(&Value::Null), None);
    }

    #[test]
    fn only_well_formed_ids_are_resolvable() {
        let alerts = vec![
            alert("a1", Some(json!(REPORT_X))),
            alert("a2", Some(json!("not-a-valid-id"))),
            alert("a3", None),
            alert("a4", Some(json!({ "$oid": REPORT_X }))),
            alert("a5", Some(json!(7))),
        ];
        assert_eq!(resolvable_ids(&alerts), vec![REPORT_X.to_string()]);
    }

    #[test]
    fn resolved_alert_without_timestamp() {
        let out = enrich_alerts(vec![alert("a1", Some(json!(REPORT_X)))], &names());
        let a = &out[0];
        assert_eq!(a.person_name, "Kiran Rao");
        assert_eq!(a.person_id.as_deref(), Some(REPORT_X));
        assert_eq!(a.time, UNKNOWN_TIME);
        assert_eq!(
            a.message,
            "Person: Kiran Rao was found at Platform 4 at Unknown time"
        );
        assert_eq!(a.kind, "match");
        assert_eq!(a.status, "new");
    }

    #[test]
    fn malformed_reference_surfaces_raw_string() {
        let out = enrich_alerts(vec![alert("a1", Some(json!("not-a-valid-id")))], &names());
        assert_eq!(out[0].person_name, "not-a-valid-id");
    }

    #[test]
    fn well_formed_but_unknown_id_surfaces_raw_string() {
        let missing = "000000000000000000000000";
        let out = enrich_alerts(vec![alert("a1", Some(json!(missing)))], &names());
        assert_eq!(out[0].person_name, missing);
    }

    #[test]
    fn missing_reference_is_unknown_person() {
        let out = enrich_alerts(vec![alert("a1", None), alert("a2", Some(json!(null)))], &names());
        assert!(out.iter().all(|a| a.person_name == UNKNOWN_PERSON));
        assert!(out.iter().all(|a| a.person_id.is_none()));
    }

    #[test]
    fn uppercase_reference_does_not_resolve() {
        let upper = REPORT_X.to_uppercase();
        let out = enrich_alerts(vec![alert("a1", Some(json!(upper)))], &names());
        assert_eq!(out[0].person_name, upper);
        assert_eq!(out[0].person_id.as_deref(), Some(upper.as_str()));
    }

    #[test]
    fn own_message_wins_over_synthesized() {
        let mut a = alert("a1", Some(json!(REPORT_X)));
        a.message = Some("Seen on camera 3".into());
        let out = enrich_alerts(vec![a], &names());
        assert_eq!(out[0].message, "Seen on camera 3");
    }

    #[test]
    fn missing_location_and_status_get_defaults() {
        let a = RawAlert {
            id: "a1".into(),
            status: Some("reviewed".into()),
            ..Default::default()
        };
        let out = enrich_alerts(vec![a, RawAlert::default()], &HashMap::new());
        assert_eq!(out[0].location, UNKNOWN_LOCATION);
        assert_eq!(out[0].status, "reviewed");
        assert_eq!(out[1].status, DEFAULT_ALERT_STATUS);
        assert_eq!(
            out[1].message,
            "Person: Unknown person was found at Unknown location at Unknown time"
        );
    }

    #[test]
    fn preserves_length_and_order() {
        let input: Vec<RawAlert> = (0..10)
            .map(|i| {
                let pid = if i % 2 == 0 { Some(json!(REPORT_X)) } else { None };
                alert(&format!("alert-{i}"), pid)
            })
            .collect();
        let out = enrich_alerts(input, &names());
        assert_eq!(out.len(), 10);
        for (i, a) in out.iter().enumerate() {
            assert_eq!(a.id, format!("alert-{i}"));
        }
    }

    #[test]
    fn formats_winter_time_as_gmt() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(format_alert_time(Some(ts)), "05 Mar 2025, 02:07:09 pm");
    }

    #[test]
    fn formats_summer_time_as_bst() {
        let ts = Utc.with_ymd_and_hms(2025, 7, 5, 23, 30, 0).unwrap();
        assert_eq!(format_alert_time(Some(ts)), "06 Jul 2025, 00:30:00 am");
    }

    #[test]
    fn twelve_oclock_hour_reads_as_zero() {
        let noon = Utc.with_ymd_and_hms(2024, 12, 1, 12, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(format_alert_time(Some(noon)), "01 Dec 2024, 00:00:00 pm");
        assert_eq!(format_alert_time(Some(midnight)), "01 Dec 2024, 00:00:00 am");
    }

    #[test]
    fn september_uses_four_letter_abbreviation() {
        let ts = Utc.with_ymd_and_hms(2025, 9, 5, 10, 0, 0).unwrap();
        assert_eq!(format_alert_time(Some(ts)), "05 Sept 2025, 11:00:00 am");
    }

    #[test]
    fn clocks_change_at_one_am_utc() {
        // 2025-03-30 01:00 UTC: GMT ends, BST begins.
        let before = Utc.with_ymd_and_hms(2025, 3, 30, 0, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 3, 30, 1, 0, 0).unwrap();
        assert_eq!(format_alert_time(Some(before)), "30 Mar 2025, 00:59:59 am");
        assert_eq!(format_alert_time(Some(after)), "30 Mar 2025, 02:00:00 am");
    }

    #[test]
    fn serializes_dashboard_shape() {
        let out = enrich_alerts(vec![alert("a1", Some(json!(REPORT_X)))], &names());
        let v = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(v["personName"], "Kiran Rao");
        assert_eq!(v["personId"], REPORT_X);
        assert_eq!(v["type"], "match");
        assert!(v.get("image_path").is_some());
        assert!(v.get("imagePath").is_none());
    }
}
