use axum::extract::Query;
use habit_architect::clipboard::{Clipboard, ClipboardError};
use habit_architect::controller::{HttpBackend, PlanController, SubmitError};
use habit_architect::errors::ErrorBody;
use habit_architect::models::PlanResponse;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

#[derive(Deserialize)]
struct UpstreamQuery {
    prompt: String,
}

/// Stands in for the text-generation API. Behavior is keyed off the bad habit
/// embedded in the prompt so one shared server covers every scenario.
async fn mock_generate(Query(query): Query<UpstreamQuery>) -> String {
    if query.prompt.contains("\"broken habit\"") {
        return "the model had a bad day".to_string();
    }

    let steps: Vec<serde_json::Value> = (1..=5)
        .map(|n| {
            serde_json::json!({
                "step_number": n,
                "title": format!("Step {n}"),
                "description": format!("Why step {n} works."),
                "anchor": "wake up",
                "tiny_behavior": "read one page",
                "celebration": "smile"
            })
        })
        .collect();
    let body = serde_json::json!({
        "plan": steps,
        "motivation": "You've got this"
    })
    .to_string();

    if query.prompt.contains("\"fenced habit\"") {
        format!("```json\n{body}\n```")
    } else {
        body
    }
}

/// The mock upstream lives on its own runtime so it survives across the
/// per-test tokio runtimes that share the spawned server.
static UPSTREAM_URL: Lazy<String> = Lazy::new(|| {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("mock upstream runtime");
        rt.block_on(async move {
            let app = axum::Router::new().route("/", axum::routing::get(mock_generate));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind mock upstream");
            let addr = listener.local_addr().unwrap();
            tx.send(format!("http://{addr}/")).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv().expect("mock upstream address")
});

fn pick_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let upstream = UPSTREAM_URL.clone();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_architect"))
        .env("PORT", port.to_string())
        .env("HABIT_UPSTREAM_URL", upstream)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_health_reports_service() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/api/health", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Habit Architect");
}

#[tokio::test]
async fn http_index_serves_the_form_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());

    let html = response.text().await.unwrap();
    assert!(html.contains("id=\"badHabit\""));
    assert!(html.contains("id=\"goal\""));
    assert!(html.contains("id=\"generateBtn\""));
}

#[tokio::test]
async fn http_generate_rejects_empty_fields() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", server.base_url))
        .json(&serde_json::json!({ "bad_habit": "  ", "goal": "read" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.detail, "Bad habit cannot be empty");

    let response = client
        .post(format!("{}/api/generate", server.base_url))
        .json(&serde_json::json!({ "bad_habit": "doomscrolling", "goal": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.detail, "Goal cannot be empty");
}

#[tokio::test]
async fn http_generate_returns_a_full_plan() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let plan: PlanResponse = client
        .post(format!("{}/api/generate", server.base_url))
        .json(&serde_json::json!({ "bad_habit": "doomscrolling", "goal": "read more books" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(plan.bad_habit, "doomscrolling");
    assert_eq!(plan.goal, "read more books");
    assert_eq!(plan.plan.len(), 5);
    assert_eq!(plan.plan[0].step_number, 1);
    assert_eq!(plan.motivation.as_deref(), Some("You've got this"));
    assert!(plan.duration >= 0.0);
}

#[tokio::test]
async fn http_generate_unwraps_fenced_upstream_output() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", server.base_url))
        .json(&serde_json::json!({ "bad_habit": "fenced habit", "goal": "stay tidy" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let plan: PlanResponse = response.json().await.unwrap();
    assert_eq!(plan.plan.len(), 5);
}

#[tokio::test]
async fn http_generate_maps_unparseable_upstream_to_detail() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", server.base_url))
        .json(&serde_json::json!({ "bad_habit": "broken habit", "goal": "anything" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.detail, "AI returned invalid format. Please try again.");
}

struct Recording {
    contents: Option<String>,
}

impl Clipboard for Recording {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn controller_round_trip_against_live_server() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let mut controller = PlanController::new(HttpBackend::new(server.base_url.clone()));

    let view = controller
        .submit("doomscrolling", "read more books")
        .await
        .unwrap();
    assert_eq!(view.steps.len(), 5);
    assert_eq!(view.steps[0].recipe, "After I wake up → I will read one page");

    let mut clipboard = Recording { contents: None };
    let copied = controller.copy_plan(&mut [&mut clipboard]).unwrap();
    assert!(copied);
    assert!(clipboard.contents.unwrap().contains("Bad Habit: doomscrolling"));
}

#[tokio::test]
async fn controller_surfaces_server_detail_from_live_server() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let mut controller = PlanController::new(HttpBackend::new(server.base_url.clone()));

    let err = controller
        .submit("broken habit", "anything")
        .await
        .unwrap_err();
    match err {
        SubmitError::Server { message } => {
            assert_eq!(message, "AI returned invalid format. Please try again.")
        }
        other => panic!("expected server error, got {other:?}"),
    }
}
