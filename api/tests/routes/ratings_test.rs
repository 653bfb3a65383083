#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, student_token, token_for};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn student_rates_a_teacher_once() {
        let (app, state) = make_test_app().await;
        let token = student_token(state.db(), "kate", 2).await;

        let body = json!({ "teacher_id": 1, "score": 4, "review": "  Понятно объясняет  " });
        let (status, json) = send(&app, "POST", "/api/ratings", Some(&token), Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["stars"], "★★★★☆");
        assert_eq!(json["data"]["review"], "Понятно объясняет");
        assert_eq!(json["data"]["student"]["id"], 2);

        let (status, json) = send(&app, "POST", "/api/ratings", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn invalid_ratings_are_rejected() {
        let (app, state) = make_test_app().await;
        let token = student_token(state.db(), "kate", 2).await;

        let body = json!({ "teacher_id": 1, "score": 6 });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // Асирян does not teach АС-22-04
        let body = json!({ "teacher_id": 3, "score": 3 });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({ "teacher_id": 1, "student_id": 3, "score": 3 });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn plain_users_cannot_rate() {
        let (app, _) = make_test_app().await;
        let user = token_for("viewer", Role::User);

        let body = json!({ "teacher_id": 1, "student_id": 1, "score": 5 });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&user), Some(body.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, "POST", "/api/ratings", None, Some(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "GET", "/api/ratings", Some(&user), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    #[serial]
    async fn only_the_author_or_admin_may_change_a_rating() {
        let (app, state) = make_test_app().await;
        let author = student_token(state.db(), "kate", 2).await;
        let other = student_token(state.db(), "nikita", 3).await;
        let admin = token_for("admin", Role::Admin);

        let body = json!({ "teacher_id": 2, "score": 2 });
        let (_, json) = send(&app, "POST", "/api/ratings", Some(&author), Some(body)).await;
        let id = json["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/ratings/{id}");

        let update = json!({ "score": 1 });
        let (status, _) = send(&app, "PUT", &uri, Some(&other), Some(update.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = send(&app, "DELETE", &uri, Some(&other), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let update = json!({ "score": 3, "review": "Стало лучше" });
        let (status, _) = send(&app, "PUT", &uri, Some(&author), Some(update)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, json) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(json["data"]["score"], 3);
        assert_eq!(json["data"]["review"], "Стало лучше");

        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn anonymous_ratings_hide_their_author() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let hidden = json!({ "teacher_id": 2, "student_id": 6, "score": 5, "is_anonymous": true });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&admin), Some(hidden)).await;
        assert_eq!(status, StatusCode::CREATED);
        let open = json!({ "teacher_id": 3, "student_id": 6, "score": 4 });
        send(&app, "POST", "/api/ratings", Some(&admin), Some(open)).await;

        let (_, json) = send(&app, "GET", "/api/ratings/anonymous", Some(&admin), None).await;
        let anonymous = json["data"].as_array().unwrap();
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0]["reviewer_name"], "Anonymous");
        assert!(anonymous[0]["student"].is_null());

        let (_, json) = send(&app, "GET", "/api/ratings/with-details", Some(&admin), None).await;
        let details = json["data"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        let hidden = details.iter().find(|d| d["is_anonymous"] == true).unwrap();
        assert!(hidden["student_name"].is_null());
        assert!(hidden["group_number"].is_null());
        let signed = details.iter().find(|d| d["is_anonymous"] == false).unwrap();
        assert_eq!(signed["group_number"], "АА-22-07");

        let (_, json) = send(&app, "GET", "/api/ratings/by-student/6", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        let user = token_for("user", Role::User);
        let (_, json) = send(&app, "GET", "/api/ratings/by-student/6", Some(&user), None).await;
        let listed = json["data"].as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["is_anonymous"], false);
        let (_, json) = send(&app, "GET", "/api/ratings/by-teacher/3", Some(&admin), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn student_sees_own_anonymous_ratings() {
        let (app, state) = make_test_app().await;
        let author = student_token(state.db(), "gennady", 6).await;
        let classmate = student_token(state.db(), "kate", 1).await;

        let hidden = json!({ "teacher_id": 3, "score": 2, "is_anonymous": true });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&author), Some(hidden)).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = "/api/ratings/by-student/6";
        let (_, json) = send(&app, "GET", uri, Some(&author), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        let (_, json) = send(&app, "GET", uri, Some(&classmate), None).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn recent_respects_count_bounds() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        for (student, teacher) in [(1, 1), (2, 1), (3, 2)] {
            let body = json!({ "teacher_id": teacher, "student_id": student, "score": 4 });
            send(&app, "POST", "/api/ratings", Some(&admin), Some(body)).await;
        }

        let (status, json) = send(&app, "GET", "/api/ratings/recent/2", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        let (status, _) = send(&app, "GET", "/api/ratings/recent/0", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, "GET", "/api/ratings/recent/101", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
