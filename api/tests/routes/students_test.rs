#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, student_token, token_for};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn listing_and_detail_are_public() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/students", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let students = json["data"].as_array().unwrap();
        assert_eq!(students.len(), 6);
        assert_eq!(students[3]["group_number"], "АС-22-05");

        let (status, json) = send(&app, "GET", "/api/students/1", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["full_name"], "Михайлова Екатерина Сергеевна");
        assert_eq!(json["data"]["group_number"], "АС-22-04");
        assert_eq!(json["data"]["teachers"].as_array().unwrap().len(), 2);

        let (status, _) = send(&app, "GET", "/api/students/42", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn admin_creates_updates_and_deletes() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let body = json!({ "first_name": "Мария", "last_name": "Орлова", "group_id": 3 });
        let (status, json) = send(&app, "POST", "/api/students", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["group_number"], "АА-22-07");
        let id = json["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/students/{id}");

        let moved = json!({ "first_name": "Мария", "last_name": "Орлова", "group_id": 1 });
        let (status, _) = send(&app, "PUT", &uri, Some(&admin), Some(moved)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, json) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(json["data"]["group_number"], "АС-22-04");

        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_group_is_rejected() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let body = json!({ "first_name": "Мария", "last_name": "Орлова", "group_id": 99 });
        let (status, json) = send(&app, "POST", "/api/students", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);

        let user = token_for("viewer", Role::User);
        let body = json!({ "first_name": "Мария", "last_name": "Орлова", "group_id": 1 });
        let (status, _) = send(&app, "POST", "/api/students", Some(&user), Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn assigning_a_teacher_widens_who_can_be_rated() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let (_, json) = send(&app, "GET", "/api/students/4/can-rate/1", Some(&admin), None).await;
        assert_eq!(json["data"]["teaches_student"], false);
        assert_eq!(json["data"]["can_rate"], false);

        let uri = "/api/students/assign-teacher?student_id=4&teacher_id=1";
        let (status, _) = send(&app, "POST", uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "POST", uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, json) = send(&app, "GET", "/api/students/4/can-rate/1", Some(&admin), None).await;
        assert_eq!(json["data"]["can_rate"], true);

        let (_, json) = send(&app, "GET", "/api/students/4/teachers", Some(&admin), None).await;
        let ids: Vec<i64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    #[serial]
    async fn group_listing_and_ratings_report() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let uri = "/api/students/by-group/%D0%90%D0%A1-22-05";
        let (status, json) = send(&app, "GET", uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        let (status, _) = send(&app, "GET", "/api/students/by-group/XX-00-00", Some(&admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let body = json!({ "teacher_id": 2, "student_id": 4, "score": 5, "review": "Отлично" });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, json) =
            send(&app, "GET", "/api/students/4/ratings-report", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        let report = json["data"].as_array().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0]["stars"], "★★★★★");
        assert_eq!(report[0]["teacher"]["id"], 2);
    }

    #[tokio::test]
    #[serial]
    async fn anonymous_ratings_stay_out_of_public_views() {
        let (app, state) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let body = json!({ "teacher_id": 3, "student_id": 6, "score": 1, "review": "Скучно", "is_anonymous": true });
        let (status, _) = send(&app, "POST", "/api/ratings", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, json) = send(&app, "GET", "/api/students/6", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["ratings"].as_array().unwrap().is_empty());
        assert!(!json.to_string().contains("Скучно"));

        let uri = "/api/students/6/ratings-report";
        let teacher = token_for("asiryan", Role::Teacher);
        let (_, json) = send(&app, "GET", uri, Some(&teacher), None).await;
        assert!(json["data"].as_array().unwrap().is_empty());

        let author = student_token(state.db(), "gennady", 6).await;
        let (_, json) = send(&app, "GET", uri, Some(&author), None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        let (_, json) = send(&app, "GET", uri, Some(&admin), None).await;
        assert_eq!(json["data"][0]["is_anonymous"], true);
    }
}
