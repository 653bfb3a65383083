#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, token_for};
    use axum::{Router, http::StatusCode};
    use db::models::user::Role;
    use serde_json::{Value, json};
    use serial_test::serial;

    async fn create_subject(app: &Router, admin: &str, name: &str) -> i64 {
        let (status, json) =
            send(app, "POST", "/api/subjects", Some(admin), Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        json["data"]["id"].as_i64().unwrap()
    }

    fn class(subject_id: i64, date: &str, pair: i32, room: &str, group: &str, kind: &str) -> Value {
        json!({
            "subject_id": subject_id,
            "date": date,
            "pair_number": pair,
            "classroom": room,
            "group_number": group,
            "class_type": kind,
            "teacher_name": "Tupysev A.M."
        })
    }

    #[tokio::test]
    #[serial]
    async fn create_derives_day_and_time() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin, "Databases").await;

        let body = class(subject_id, "2025-09-01", 2, " A-101 ", "AS-22-04", "Lecture");
        let (status, json) = send(&app, "POST", "/api/class-schedules", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let data = &json["data"];
        assert_eq!(data["day_of_week"], 1);
        assert_eq!(data["day_name"], "Monday");
        assert_eq!(data["pair_time"], "10:15 - 11:45");
        assert_eq!(data["classroom"], "A-101");
        assert_eq!(data["class_type"], "lecture");
        assert_eq!(data["subject_name"], "Databases");
        assert!(data["weekly_schedule_id"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn invalid_classes_are_rejected() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin, "Databases").await;

        let cases = [
            class(subject_id, "2025-09-01", 8, "A-101", "AS-22-04", "lecture"),
            class(subject_id, "2025-09-01", 1, "A-101", "group4", "lecture"),
            class(subject_id, "2025-09-01", 1, "   ", "AS-22-04", "lecture"),
            class(999, "2025-09-01", 1, "A-101", "AS-22-04", "lecture"),
        ];
        for body in cases {
            let (status, _) = send(&app, "POST", "/api/class-schedules", Some(&admin), Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let user = token_for("viewer", Role::User);
        let body = class(subject_id, "2025-09-01", 1, "A-101", "AS-22-04", "lecture");
        let (status, _) = send(&app, "POST", "/api/class-schedules", Some(&user), Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn filters_by_group_date_type_and_teacher() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin, "Networks").await;

        for body in [
            class(subject_id, "2025-09-01", 4, "B-204", "AS-22-04", "lab"),
            class(subject_id, "2025-09-01", 1, "A-101", "AS-22-05", "lecture"),
            class(subject_id, "2025-09-02", 1, "A-101", "AS-22-04", "lecture"),
        ] {
            let (status, _) = send(&app, "POST", "/api/class-schedules", Some(&admin), Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, json) = send(&app, "GET", "/api/class-schedules/group/AS-22-04", Some(&admin), None).await;
        let dates: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["2025-09-01", "2025-09-02"]);

        let (status, _) = send(&app, "GET", "/api/class-schedules/group/bad", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = send(&app, "GET", "/api/class-schedules/date/2025-09-01", Some(&admin), None).await;
        let by_date = json["data"].as_array().unwrap();
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date[0]["pair_number"], 1);
        assert_eq!(by_date[1]["pair_time"], "14:00 - 15:30");

        let (status, _) = send(&app, "GET", "/api/class-schedules/date/01.09.2025", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = send(&app, "GET", "/api/class-schedules/type/LECTURE", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        let (_, json) = send(&app, "GET", "/api/class-schedules/teacher/Tupysev", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);

        let (_, json) =
            send(&app, "GET", "/api/class-schedules/classrooms/2025-09-01", Some(&admin), None).await;
        assert_eq!(json["data"], json!(["A-101", "B-204"]));

        let (_, json) =
            send(&app, "GET", "/api/class-schedules/with-subject-info", Some(&admin), None).await;
        let first = &json["data"][0];
        assert_eq!(first["subject_name"], "Networks");
        assert_eq!(first["day"], "Monday");
        assert_eq!(first["time"], "08:30 - 10:00");
    }

    #[tokio::test]
    #[serial]
    async fn update_and_delete() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        let subject_id = create_subject(&app, &admin, "Compilers").await;

        let body = class(subject_id, "2025-09-01", 1, "A-101", "AS-22-04", "lecture");
        let (_, json) = send(&app, "POST", "/api/class-schedules", Some(&admin), Some(body)).await;
        let uri = format!("/api/class-schedules/{}", json["data"]["id"]);

        let moved = class(subject_id, "2025-09-03", 3, "C-301", "AS-22-04", "seminar");
        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(moved)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, json) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(json["data"]["day_name"], "Wednesday");
        assert_eq!(json["data"]["classroom"], "C-301");

        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
