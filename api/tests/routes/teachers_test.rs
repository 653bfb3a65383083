#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, token_for};
    use axum::{Router, http::StatusCode};
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;

    async fn rate(app: &Router, admin: &str, student_id: i64, teacher_id: i64, score: i32) {
        let body = json!({ "teacher_id": teacher_id, "student_id": student_id, "score": score });
        let (status, _) = send(app, "POST", "/api/ratings", Some(admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    #[serial]
    async fn listing_and_detail_are_public() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/teachers", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"][0]["ratings_count"], 0);

        let (status, json) = send(&app, "GET", "/api/teachers/2", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["full_name"], "Тупысев Антон Михайлович");
        assert_eq!(json["data"]["groups"].as_array().unwrap().len(), 3);

        let (status, json) = send(&app, "GET", "/api/teachers/999", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn writes_require_admin() {
        let (app, _) = make_test_app().await;
        let body = json!({ "first_name": "Олег", "last_name": "Смирнов" });

        let (status, _) = send(&app, "POST", "/api/teachers", None, Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let user = token_for("user", Role::User);
        let (status, _) = send(&app, "POST", "/api/teachers", Some(&user), Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn admin_crud_round() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let body = json!({ "first_name": "Олег", "last_name": "Смирнов", "middle_name": "Петрович" });
        let (status, json) = send(&app, "POST", "/api/teachers", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(json["data"]["full_name"], "Смирнов Олег Петрович");

        let update = json!({ "first_name": "Олег", "last_name": "Смирнов-Белов" });
        let uri = format!("/api/teachers/{id}");
        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(update)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, json) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(json["data"]["last_name"], "Смирнов-Белов");
        assert!(json["data"]["middle_name"].is_null());

        let blank = json!({ "first_name": "  ", "last_name": "X" });
        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(blank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn rating_queries() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);
        rate(&app, &admin, 1, 1, 5).await;
        rate(&app, &admin, 2, 1, 4).await;
        rate(&app, &admin, 1, 2, 3).await;

        let (status, _) = send(&app, "GET", "/api/teachers/top/2", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, json) = send(&app, "GET", "/api/teachers/top/2", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        let top = json["data"].as_array().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["id"], 1);
        assert_eq!(top[0]["average_rating"], 4.5);

        let (status, _) = send(&app, "GET", "/api/teachers/top/0", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = send(&app, "GET", "/api/teachers/without-ratings", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["id"], 3);

        let (_, json) = send(&app, "GET", "/api/teachers/with-ratings", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        let (status, json) =
            send(&app, "GET", "/api/teachers/rating-range?min=4&max=5", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        let (status, _) =
            send(&app, "GET", "/api/teachers/rating-range?min=5&max=4", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) =
            send(&app, "GET", "/api/teachers/rating-range?min=0&max=4", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = send(&app, "GET", "/api/teachers/1/average-rating", Some(&admin), None).await;
        assert_eq!(json["data"]["average_rating"], 4.5);
        assert_eq!(json["data"]["ratings_count"], 2);

        let (status, json) = send(&app, "GET", "/api/teachers/1/report", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["total_ratings"], 2);
        assert_eq!(json["data"]["ratings"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn group_queries_and_links() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let uri = "/api/teachers/by-group/%D0%90%D0%A1-22-04";
        let (status, json) = send(&app, "GET", uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        let (status, _) = send(&app, "POST", "/api/teachers/1/groups/1", Some(&admin), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, "POST", "/api/teachers/1/groups/2", Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", "/api/teachers/1/groups/2", Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "DELETE", "/api/teachers/1/groups/2", Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let stats_uri = "/api/teachers/statistics/group/%D0%90%D0%A1-22-04";
        let (status, json) = send(&app, "GET", stats_uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
