#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, token_for};
    use axum::{Router, http::StatusCode};
    use db::models::user::Role;
    use serde_json::{Value, json};
    use serial_test::serial;

    async fn create_subject(app: &Router, admin: &str) -> i64 {
        let (_, json) = send(
            app,
            "POST",
            "/api/subjects",
            Some(admin),
            Some(json!({ "name": "Operating Systems" })),
        )
        .await;
        json["data"]["id"].as_i64().unwrap()
    }

    fn class(subject_id: i64, date: &str, pair: i32, kind: &str, teacher: &str) -> Value {
        json!({
            "subject_id": subject_id,
            "date": date,
            "pair_number": pair,
            "classroom": "A-101",
            "class_type": kind,
            "teacher_name": teacher
        })
    }

    #[tokio::test]
    #[serial]
    async fn create_and_look_up_by_group_week() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin).await;

        let body = json!({
            "group_number": "AS-22-04",
            "week_number": 36,
            "classes": [
                class(subject_id, "2025-09-01", 1, "lecture", "Tupysev A.M."),
                class(subject_id, "2025-09-01", 2, "lab", "Asiryan A.V."),
                class(subject_id, "2025-09-02", 1, "lecture", "Tupysev A.M."),
            ]
        });
        let (status, json) = send(&app, "POST", "/api/weekly-schedules", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = json["data"]["id"].as_i64().unwrap();
        let classes = json["data"]["classes"].as_array().unwrap();
        assert_eq!(classes.len(), 3);
        assert!(classes.iter().all(|c| c["group_number"] == "AS-22-04"));
        assert!(classes.iter().all(|c| c["weekly_schedule_id"] == id));

        let (status, json) = send(
            &app,
            "GET",
            "/api/weekly-schedules/group/AS-22-04/week/36",
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], id);

        let (status, _) = send(
            &app,
            "GET",
            "/api/weekly-schedules/group/AS-22-04/week/37",
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, json) = send(&app, "GET", &format!("/api/weekly-schedules/{id}/teachers"), Some(&admin), None).await;
        assert_eq!(json["data"], json!(["Tupysev A.M.", "Asiryan A.V."]));

        let (_, json) = send(&app, "GET", &format!("/api/weekly-schedules/{id}/statistics"), Some(&admin), None).await;
        assert_eq!(json["data"]["total_classes"], 3);
        assert_eq!(json["data"]["class_types"]["lecture"], 2);
        assert_eq!(json["data"]["teachers_count"], 2);

        let (_, json) = send(&app, "GET", &format!("/api/weekly-schedules/{id}/day/1"), Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        let (status, _) = send(&app, "GET", &format!("/api/weekly-schedules/{id}/day/8"), Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_and_overloaded_weeks_are_rejected() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin).await;

        let empty = json!({ "group_number": "AS-22-05", "week_number": 40 });
        let (status, _) = send(&app, "POST", "/api/weekly-schedules", Some(&admin), Some(empty.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(&app, "POST", "/api/weekly-schedules", Some(&admin), Some(empty)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let crowded: Vec<Value> = (1..=7)
            .chain([1])
            .map(|pair| class(subject_id, "2025-10-06", pair, "lecture", "Tupysev A.M."))
            .collect();
        let body = json!({ "group_number": "AS-22-05", "week_number": 41, "classes": crowded });
        let (status, _) = send(&app, "POST", "/api/weekly-schedules", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({ "group_number": "AS-22-05", "week_number": 54 });
        let (status, _) = send(&app, "POST", "/api/weekly-schedules", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn update_replaces_classes_and_delete_keeps_them() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin).await;

        let body = json!({
            "group_number": "AA-22-07",
            "week_number": 10,
            "classes": [class(subject_id, "2025-03-03", 1, "lecture", "Asiryan A.V.")]
        });
        let (_, json) = send(&app, "POST", "/api/weekly-schedules", Some(&admin), Some(body)).await;
        let uri = format!("/api/weekly-schedules/{}", json["data"]["id"]);

        let renamed = json!({ "group_number": "AA-22-08", "week_number": 10 });
        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(renamed)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, json) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(json["data"]["classes"][0]["group_number"], "AA-22-08");

        let replaced = json!({
            "group_number": "AA-22-08",
            "week_number": 10,
            "classes": [
                class(subject_id, "2025-03-04", 2, "seminar", "Asiryan A.V."),
                class(subject_id, "2025-03-05", 3, "seminar", "Asiryan A.V."),
            ]
        });
        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(replaced)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, json) = send(&app, "GET", &uri, Some(&admin), None).await;
        let classes = json["data"]["classes"].as_array().unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes.iter().all(|c| c["class_type"] == "seminar"));

        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, json) = send(&app, "GET", "/api/class-schedules/group/AA-22-08", Some(&admin), None).await;
        let detached = json["data"].as_array().unwrap();
        assert_eq!(detached.len(), 2);
        assert!(detached.iter().all(|c| c["weekly_schedule_id"].is_null()));
    }
}
