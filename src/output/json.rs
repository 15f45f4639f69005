//! JSON emission for the four reports
//!
//! Each function returns the rendered document; the caller prints it.

use serde_json::json;

use crate::core::WeeklySchedule;

pub(crate) fn top_show_json(show_id: &str, count: u64, city: Option<&str>) -> String {
    let value = json!({
        "show_id": show_id,
        "downloads": count,
        "city": city,
    });
    pretty(&value)
}

pub(crate) fn top_device_json(device_type: &str, count: u64) -> String {
    let value = json!({
        "device_type": device_type,
        "downloads": count,
    });
    pretty(&value)
}

pub(crate) fn preroll_json(rows: &[(String, u64)]) -> String {
    let value: Vec<serde_json::Value> = rows
        .iter()
        .map(|(show_id, count)| {
            json!({
                "show_id": show_id,
                "preroll_opportunities": count,
            })
        })
        .collect();
    pretty(&serde_json::Value::Array(value))
}

pub(crate) fn weekly_json(schedules: &[WeeklySchedule]) -> String {
    let value: Vec<serde_json::Value> = schedules
        .iter()
        .map(|s| {
            json!({
                "show_id": s.show_id,
                "slot": s.slot,
            })
        })
        .collect();
    pretty(&serde_json::Value::Array(value))
}

pub(crate) fn summary_json(
    top_show: (&str, u64),
    top_device: (&str, u64),
    preroll: &[(String, u64)],
    weekly: &[WeeklySchedule],
) -> String {
    let value = json!({
        "top_show": { "show_id": top_show.0, "downloads": top_show.1 },
        "top_device": { "device_type": top_device.0, "downloads": top_device.1 },
        "preroll": preroll
            .iter()
            .map(|(show_id, count)| json!({
                "show_id": show_id,
                "preroll_opportunities": count,
            }))
            .collect::<Vec<_>>(),
        "weekly": weekly
            .iter()
            .map(|s| json!({ "show_id": s.show_id, "slot": s.slot }))
            .collect::<Vec<_>>(),
    });
    pretty(&value)
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_show_json_includes_city_when_present() {
        let doc = top_show_json("show-1", 24, Some("San Francisco"));
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["show_id"], "show-1");
        assert_eq!(value["downloads"], 24);
        assert_eq!(value["city"], "San Francisco");
    }

    #[test]
    fn top_show_json_city_is_null_when_absent() {
        let doc = top_show_json("show-1", 5, None);
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert!(value["city"].is_null());
    }

    #[test]
    fn preroll_json_preserves_order() {
        let rows = vec![("a".to_string(), 3), ("b".to_string(), 1)];
        let value: serde_json::Value = serde_json::from_str(&preroll_json(&rows)).unwrap();
        assert_eq!(value[0]["show_id"], "a");
        assert_eq!(value[0]["preroll_opportunities"], 3);
        assert_eq!(value[1]["show_id"], "b");
    }

    #[test]
    fn summary_json_combines_all_reports() {
        let rows = vec![("a".to_string(), 2)];
        let schedules = vec![WeeklySchedule {
            show_id: "a".to_string(),
            slot: "Mon 05:07".to_string(),
        }];
        let doc = summary_json(("a", 5), ("desktop", 9), &rows, &schedules);
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["top_show"]["downloads"], 5);
        assert_eq!(value["top_device"]["device_type"], "desktop");
        assert_eq!(value["preroll"][0]["preroll_opportunities"], 2);
        assert_eq!(value["weekly"][0]["slot"], "Mon 05:07");
    }

    #[test]
    fn weekly_json_rows() {
        let schedules = vec![WeeklySchedule {
            show_id: "s".to_string(),
            slot: "Thu 08:53".to_string(),
        }];
        let value: serde_json::Value = serde_json::from_str(&weekly_json(&schedules)).unwrap();
        assert_eq!(value[0]["slot"], "Thu 08:53");
    }
}
