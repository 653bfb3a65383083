#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn subjects_require_a_token_to_read() {
        let (app, _) = make_test_app().await;

        let (status, _) = send(&app, "GET", "/api/subjects", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let user = token_for("viewer", Role::User);
        let (status, json) = send(&app, "GET", "/api/subjects", Some(&user), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"].as_array().unwrap().is_empty());

        let (status, _) =
            send(&app, "POST", "/api/subjects", Some(&user), Some(json!({ "name": "Физика" }))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn admin_manages_subjects() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let (status, json) = send(
            &app,
            "POST",
            "/api/subjects",
            Some(&admin),
            Some(json!({ "name": "  Базы данных  " })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["name"], "Базы данных");
        let uri = format!("/api/subjects/{}", json["data"]["id"]);

        let (status, _) =
            send(&app, "PUT", &uri, Some(&admin), Some(json!({ "name": "Базы данных II" }))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, json) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(json["data"]["name"], "Базы данных II");

        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(json!({ "name": "ИИ" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn scheduled_subject_cannot_be_deleted() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let (_, json) = send(
            &app,
            "POST",
            "/api/subjects",
            Some(&admin),
            Some(json!({ "name": "Сети" })),
        )
        .await;
        let subject_id = json["data"]["id"].as_i64().unwrap();

        let class = json!({
            "subject_id": subject_id,
            "date": "2025-09-01",
            "pair_number": 1,
            "classroom": "А-101",
            "group_number": "АС-22-04",
            "class_type": "Лекция",
            "teacher_name": "Тупысев А.М."
        });
        let (status, _) = send(&app, "POST", "/api/class-schedules", Some(&admin), Some(class)).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/subjects/{subject_id}");
        let (status, json) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
    }
}
