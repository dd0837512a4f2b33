//! Endpoint tests driven through `http::handle` without a socket.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use survey_server::http::{self, ApiResponse};
use survey_store::TemplateStore;
use tempfile::TempDir;
use tiny_http::Method;

struct Api {
    dir: TempDir,
    store: TemplateStore,
}

impl Api {
    fn call(&self, method: Method, url: &str, body: Option<Value>) -> (u16, Value) {
        let bytes = body.map(|b| serde_json::to_vec(&b).unwrap()).unwrap_or_default();
        let response: ApiResponse = http::handle(&self.store, &method, url, &bytes);
        (response.status, response.json_body().unwrap())
    }

    fn get(&self, url: &str) -> (u16, Value) {
        self.call(Method::Get, url, None)
    }

    fn on_disk(&self) -> Value {
        let raw = std::fs::read_to_string(self.dir.path().join("survey_template.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

fn initial_document() -> Value {
    json!({
        "survey": [
            {
                "section": "Needs",
                "questions": [
                    {"type": "text", "question": "Q1", "options": []}
                ]
            },
            {
                "section": "Existing Section",
                "questions": [
                    {"type": "radio", "question": "Pick", "options": ["a", "b"]},
                    {"type": "text", "question": "Why?", "options": []}
                ]
            }
        ]
    })
}

#[fixture]
fn api() -> Api {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey_template.json");
    std::fs::write(&path, serde_json::to_string_pretty(&initial_document()).unwrap()).unwrap();
    let store = TemplateStore::load(&path).unwrap();
    Api { dir, store }
}

fn text_question(text: &str) -> Value {
    json!({"type": "text", "question": text, "options": []})
}

// ---------------------------------------------------------------------------
// Whole-document reads
// ---------------------------------------------------------------------------

#[rstest]
fn root_reports_status(api: Api) {
    assert_eq!(
        api.get("/"),
        (200, json!({"status": "API is up and running"}))
    );
}

#[rstest]
fn survey_returns_whole_document(api: Api) {
    assert_eq!(api.get("/survey"), (200, initial_document()));
}

#[rstest]
fn get_sections_returns_list(api: Api) {
    assert_eq!(
        api.get("/get-sections"),
        (200, initial_document()["survey"].clone())
    );
}

#[rstest]
fn schema_describes_survey(api: Api) {
    let (status, schema) = api.get("/schema");
    assert_eq!(status, 200);
    assert_eq!(schema["title"], "Survey");
    assert!(schema["required"]
        .as_array()
        .unwrap()
        .contains(&json!("survey")));
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[rstest]
fn add_section_appends_at_end(api: Api) {
    let body = json!({"section": "New Section", "questions": [text_question("Hi")]});

    let (status, reply) = api.call(Method::Post, "/add-section", Some(body.clone()));
    assert_eq!(status, 201);
    assert_eq!(reply, json!({"message": "Section added successfully"}));

    let (_, sections) = api.get("/get-sections");
    assert_eq!(sections.as_array().unwrap().last(), Some(&body));
    assert_eq!(api.on_disk()["survey"][2], body);
}

#[rstest]
fn get_section_by_encoded_name(api: Api) {
    let (status, section) = api.get("/get-section/Existing%20Section");
    assert_eq!(status, 200);
    assert_eq!(section, initial_document()["survey"][1]);
}

#[rstest]
fn get_section_returns_first_duplicate(api: Api) {
    api.call(
        Method::Post,
        "/add-section",
        Some(json!({"section": "Needs", "questions": []})),
    );
    let (_, section) = api.get("/get-section/Needs");
    assert_eq!(section, initial_document()["survey"][0]);
}

#[rstest]
fn update_section_replaces_in_place(api: Api) {
    let body = json!({"section": "Existing Section", "questions": []});
    let (status, reply) = api.call(
        Method::Put,
        "/update-section/Existing%20Section",
        Some(body.clone()),
    );
    assert_eq!(status, 200);
    assert_eq!(reply, json!({"message": "Section updated successfully"}));
    assert_eq!(api.get("/get-sections").1[1], body);
    assert_eq!(api.on_disk()["survey"][1], body);
}

#[rstest]
fn update_missing_section_is_404(api: Api) {
    let (status, reply) = api.call(
        Method::Put,
        "/update-section/Missing",
        Some(json!({"section": "Missing", "questions": []})),
    );
    assert_eq!(status, 404);
    assert_eq!(reply, json!({"detail": "Section not found"}));
}

#[rstest]
fn delete_section_removes_all_duplicates(api: Api) {
    api.call(
        Method::Post,
        "/add-section",
        Some(json!({"section": "Needs", "questions": []})),
    );

    let (status, reply) = api.call(Method::Delete, "/delete-section/Needs", None);
    assert_eq!(status, 200);
    assert_eq!(reply, json!({"message": "Section deleted successfully"}));

    let (_, sections) = api.get("/get-sections");
    let names: Vec<&str> = sections
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["section"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Existing Section"]);
    assert_eq!(api.get("/get-section/Needs").0, 404);
}

#[rstest]
fn delete_absent_section_still_succeeds(api: Api) {
    let (status, _) = api.call(Method::Delete, "/delete-section/Section%20to%20Delete", None);
    assert_eq!(status, 200);
    assert_eq!(api.get("/survey").1, initial_document());
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[rstest]
fn needs_question_scenario(api: Api) {
    assert_eq!(api.get("/get-question/Needs/0"), (200, text_question("Q1")));
    assert_eq!(
        api.get("/get-question/Needs/1"),
        (404, json!({"detail": "Question index out of range"}))
    );

    let (status, reply) = api.call(Method::Delete, "/delete-question/Needs/0", None);
    assert_eq!(status, 200);
    assert_eq!(reply, json!({"message": "Question deleted successfully"}));

    assert_eq!(api.get("/get-question/Needs/0").0, 404);
}

#[rstest]
fn add_question_then_get_last(api: Api) {
    let posted = json!({"type": "checkbox", "question": "Which?", "options": ["x", "y"]});
    let (status, reply) = api.call(
        Method::Post,
        "/add-question/Existing%20Section",
        Some(posted.clone()),
    );
    assert_eq!(status, 201);
    assert_eq!(reply, json!({"message": "Question added successfully"}));
    assert_eq!(api.get("/get-question/Existing%20Section/2"), (200, posted));
}

#[rstest]
fn delete_question_shifts_indices(api: Api) {
    let (_, next) = api.get("/get-question/Existing%20Section/1");
    api.call(Method::Delete, "/delete-question/Existing%20Section/0", None);
    assert_eq!(api.get("/get-question/Existing%20Section/0"), (200, next));
}

#[rstest]
fn update_question_replaces_at_index(api: Api) {
    let (status, reply) = api.call(
        Method::Put,
        "/update-question/Existing%20Section/1",
        Some(text_question("Updated Question")),
    );
    assert_eq!(status, 200);
    assert_eq!(reply, json!({"message": "Question updated successfully"}));
    assert_eq!(
        api.get("/get-question/Existing%20Section/1").1,
        text_question("Updated Question")
    );
    assert_eq!(
        api.on_disk()["survey"][1]["questions"][1],
        text_question("Updated Question")
    );
}

#[rstest]
#[case(Method::Get, "/get-section/Missing", None)]
#[case(Method::Put, "/update-section/Missing", Some(json!({"section": "Missing", "questions": []})))]
#[case(Method::Get, "/get-question/Missing/0", None)]
#[case(Method::Delete, "/delete-question/Missing/0", None)]
#[case(Method::Post, "/add-question/Missing", Some(text_question("x")))]
#[case(Method::Put, "/update-question/Missing/0", Some(text_question("x")))]
fn keyed_endpoints_404_on_absent_section(
    api: Api,
    #[case] method: Method,
    #[case] url: &str,
    #[case] body: Option<Value>,
) {
    assert_eq!(
        api.call(method, url, body),
        (404, json!({"detail": "Section not found"}))
    );
    assert_eq!(api.on_disk(), initial_document());
}

#[rstest]
#[case(Method::Get, "/get-question/Needs/-1", None)]
#[case(Method::Delete, "/delete-question/Needs/5", None)]
#[case(Method::Put, "/update-question/Needs/1", Some(text_question("x")))]
#[case(Method::Get, "/get-question/Needs/99999999999999999999", None)]
#[case(Method::Delete, "/delete-question/Needs/-99999999999999999999", None)]
#[case(Method::Put, "/update-question/Needs/99999999999999999999", Some(text_question("x")))]
fn bad_index_is_404(
    api: Api,
    #[case] method: Method,
    #[case] url: &str,
    #[case] body: Option<Value>,
) {
    assert_eq!(
        api.call(method, url, body),
        (404, json!({"detail": "Question index out of range"}))
    );
}

#[rstest]
fn missing_section_wins_over_oversized_index(api: Api) {
    assert_eq!(
        api.get("/get-question/Missing/99999999999999999999"),
        (404, json!({"detail": "Section not found"}))
    );
}

// ---------------------------------------------------------------------------
// Validation and routing
// ---------------------------------------------------------------------------

#[rstest]
#[case(Method::Post, "/add-section", Some(json!({"section": "No questions"})))]
#[case(Method::Post, "/add-question/Needs", Some(json!({"question": "New Question", "options": []})))]
#[case(Method::Put, "/update-question/Needs/0", Some(json!({"type": 1, "question": "Q", "options": []})))]
#[case(Method::Post, "/add-section", None)]
#[case(Method::Get, "/get-question/Needs/first", None)]
fn malformed_input_is_422(
    api: Api,
    #[case] method: Method,
    #[case] url: &str,
    #[case] body: Option<Value>,
) {
    let (status, reply) = api.call(method, url, body);
    assert_eq!(status, 422);
    assert!(reply["detail"].is_string());
    assert_eq!(api.on_disk(), initial_document());
}

#[rstest]
fn validation_beats_missing_section(api: Api) {
    let (status, _) = api.call(
        Method::Post,
        "/add-question/Missing",
        Some(json!({"question": "no type"})),
    );
    assert_eq!(status, 422);
}

#[rstest]
fn unknown_route_and_wrong_method(api: Api) {
    assert_eq!(api.get("/nowhere"), (404, json!({"detail": "Not Found"})));
    assert_eq!(
        api.call(Method::Delete, "/survey", None),
        (405, json!({"detail": "Method Not Allowed"}))
    );
}

#[rstest]
fn survey_response_is_a_copy(api: Api) {
    let (_, mut document) = api.get("/survey");
    document["survey"].as_array_mut().unwrap().clear();
    assert_eq!(api.get("/survey").1, initial_document());
}
