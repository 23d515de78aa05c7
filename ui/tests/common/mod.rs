use std::time::Duration;

use egui_kittest::Harness;
use similarity_ui::state::State;
use similarity_ui::widgets::similarity_panel;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Mounts `template` on `GET /similarity` and builds a harness around
    /// the similarity panel pointed at the mock.
    pub async fn new(template: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/similarity"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 900.0))
            .build_ui_state(
                |ui, state: &mut State| {
                    similarity_panel(ui, state);
                },
                state,
            );

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    /// Steps frames until the fetch has settled, then draws one more frame.
    pub async fn settle(&mut self) {
        for _ in 0..50 {
            self.harness.step();
            if !self.harness.state().view().is_loading() {
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("similarity fetch did not settle");
    }
}

/// `{ "matches": [...] }` with `n` rows; scores fall as the index grows.
pub fn matches_body(n: usize) -> serde_json::Value {
    let matches: Vec<_> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "Orion Code": format!("OR-{i:03}"),
                "Orion Description": format!("Orion item {i}"),
                "SDP Code": format!("SDP-{i:03}"),
                "SDP Description": format!("SDP item {i}"),
                "Similarity Score": 1.0 - (i as f64 / 1000.0),
            })
        })
        .collect();
    serde_json::json!({ "matches": matches })
}

pub fn ok_matches(n: usize) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(matches_body(n))
}
