#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::handlers::init_routes;
    use crate::tests::settings_for;
    use crate::utils::config::ApiVariant;

    fn full_activity() -> Value {
        json!({
            "taskId": 1663,
            "projectId": 803,
            "startTime": "2024-03-01T09:00:00Z",
            "endTime": "2024-03-01 09:10:00",
            "mouseActivity": 120,
            "keyboardActivity": 340,
            "totalActivity": 460,
            "notes": "",
            "organisationId": 698,
            "uri": "https://example.com/screens/1.png",
            "unTrackedTime": 0
        })
    }

    fn expected_metadata() -> Value {
        json!({
            "fieldCount": 0,
            "affectedRows": 1,
            "insertId": 2283680,
            "serverStatus": 2,
            "warningCount": 0,
            "message": "",
            "protocol41": true,
            "changedRows": 0
        })
    }

    #[actix_rt::test]
    async fn test_metadata_ignores_list_size() {
        let settings = settings_for(ApiVariant::V1);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        for size in [0, 1, 5] {
            let activities: Vec<Value> = (0..size).map(|_| full_activity()).collect();
            let req = test::TestRequest::post()
                .uri("/api/activity/addActivityList")
                .insert_header(("Authorization", "Bearer abc"))
                .set_json(json!({ "activityData": activities }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], "success");
            assert_eq!(body["message"], "Success");
            assert_eq!(body["data"]["success"], true);
            assert_eq!(body["data"]["activities"], expected_metadata());
        }
    }

    #[actix_rt::test]
    async fn test_v1_rejects_incomplete_activity() {
        let settings = settings_for(ApiVariant::V1);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        let mut activity = full_activity();
        activity.as_object_mut().unwrap().remove("uri");
        let req = test::TestRequest::post()
            .uri("/api/activity/addActivityList")
            .insert_header(("Authorization", "Bearer abc"))
            .set_json(json!({ "activityData": [activity] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"][0]["loc"], json!(["body", "activityData", 0, "uri"]));
        assert_eq!(body["detail"][0]["type"], "value_error.missing");
    }

    #[actix_rt::test]
    async fn test_v1_rejects_bad_timestamp() {
        let settings = settings_for(ApiVariant::V1);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        let mut activity = full_activity();
        activity["startTime"] = json!("not a time");
        let req = test::TestRequest::post()
            .uri("/api/activity/addActivityList")
            .insert_header(("Authorization", "Bearer abc"))
            .set_json(json!({ "activityData": [activity] }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"][0]["loc"], json!(["body", "activityData", 0, "startTime"]));
    }

    #[actix_rt::test]
    async fn test_v2_wrong_type_names_nested_field() {
        let settings = settings_for(ApiVariant::V2);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        let req = test::TestRequest::post()
            .uri("/api/activity/addActivityList")
            .set_json(json!({ "activityData": [{ "taskId": 1663 }, { "taskId": "x" }] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"][0]["loc"], json!(["body", "activityData", 1, "taskId"]));
        assert_eq!(body["detail"][0]["type"], "type_error");
    }

    #[actix_rt::test]
    async fn test_v1_activity_requires_bearer() {
        let settings = settings_for(ApiVariant::V1);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        let req = test::TestRequest::post()
            .uri("/api/activity/addActivityList")
            .insert_header(("Authorization", "Token abc"))
            .set_json(json!({ "activityData": [full_activity()] }))
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_v2_accepts_partial_activity() {
        let settings = settings_for(ApiVariant::V2);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        let req = test::TestRequest::post()
            .uri("/api/activity/addActivityList")
            .set_json(json!({ "activityData": [{ "taskId": 1663, "billable": 1 }, {}] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["activities"], expected_metadata());
    }

    #[actix_rt::test]
    async fn test_activity_list_field_required() {
        let settings = settings_for(ApiVariant::V2);
        let app = test::init_service(App::new().configure(|cfg| init_routes(cfg, &settings))).await;

        let req = test::TestRequest::post()
            .uri("/api/activity/addActivityList")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"][0]["loc"], json!(["body", "activityData"]));
    }
}
