#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send, token_for};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn groups_list_with_counts() {
        let (app, _) = make_test_app().await;
        let user = token_for("viewer", Role::User);

        let (status, json) = send(&app, "GET", "/api/groups", Some(&user), None).await;
        assert_eq!(status, StatusCode::OK);
        let groups = json["data"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0]["group_number"], "АА-22-07");
        assert_eq!(groups[0]["students_count"], 1);
        assert_eq!(groups[0]["teachers_count"], 2);

        let (_, json) = send(&app, "GET", "/api/groups/1", Some(&user), None).await;
        assert_eq!(json["data"]["students_count"], 3);

        let (status, _) = send(&app, "GET", "/api/groups/9", Some(&user), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn create_validates_and_rejects_duplicates() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let (status, json) = send(
            &app,
            "POST",
            "/api/groups",
            Some(&admin),
            Some(json!({ "group_number": "ИС-23-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["students_count"], 0);

        let (status, _) = send(
            &app,
            "POST",
            "/api/groups",
            Some(&admin),
            Some(json!({ "group_number": "ИС-23-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            "POST",
            "/api/groups",
            Some(&admin),
            Some(json!({ "group_number": "group-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn only_empty_groups_can_be_deleted() {
        let (app, _) = make_test_app().await;
        let admin = token_for("admin", Role::Admin);

        let (status, _) = send(&app, "DELETE", "/api/groups/1", Some(&admin), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, json) = send(
            &app,
            "POST",
            "/api/groups",
            Some(&admin),
            Some(json!({ "group_number": "ИС-23-02" })),
        )
        .await;
        let uri = format!("/api/groups/{}", json["data"]["id"]);
        let (status, _) = send(&app, "DELETE", &uri, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
