use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    count: u64,
    entries: Vec<TodayEntry>,
}

#[derive(Debug, Deserialize)]
struct TodayEntry {
    seq: usize,
    label: String,
}

#[derive(Debug, Deserialize)]
struct WeeklyStats {
    buckets: Vec<DayBucket>,
    total: u64,
    average: f64,
}

#[derive(Debug, Deserialize)]
struct DayBucket {
    date: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ReadingRow {
    datetime: String,
    systolic: u16,
    diastolic: u16,
    pulse: u16,
}

#[derive(Debug, Deserialize)]
struct ReadingsResponse {
    latest: Option<ReadingRow>,
    trend: Vec<TrendPoint>,
    recent: Vec<ReadingRow>,
}

#[derive(Debug, Deserialize)]
struct TrendPoint {
    label: String,
    systolic: u16,
    diastolic: u16,
}

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

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("health_log_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/visits/today")).send().await {
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
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_health_log"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
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
async fn http_record_visit_updates_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: TodayResponse = client
        .get(format!("{}/api/visits/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let after: TodayResponse = client
        .post(format!("{}/api/visits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(after.count, before.count + 1);
    assert_eq!(after.entries.len() as u64, after.count);
    assert_eq!(after.date, before.date);

    let last = after.entries.last().unwrap();
    assert_eq!(last.seq as u64, after.count);
    assert!(last.label.ends_with('分'), "unexpected label {:?}", last.label);
}

#[tokio::test]
async fn http_weekly_window_ends_on_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/api/visits", server.base_url))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let today: TodayResponse = client
        .get(format!("{}/api/visits/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let weekly: WeeklyStats = client
        .get(format!("{}/api/visits/weekly", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(weekly.buckets.len(), 7);
    assert_eq!(weekly.buckets.last().unwrap().date, today.date);
    assert_eq!(weekly.buckets.last().unwrap().count, today.count);
    assert_eq!(
        weekly.total,
        weekly.buckets.iter().map(|bucket| bucket.count).sum::<u64>()
    );
    assert!((weekly.average - weekly.total as f64 / 7.0).abs() < 1e-9);
}

#[tokio::test]
async fn http_record_reading_and_fetch_recent() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/readings", server.base_url))
        .json(&serde_json::json!({
            "systolic": 132,
            "diastolic": 84,
            "pulse": 68,
            "memo": "after dinner"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let readings: ReadingsResponse = client
        .get(format!("{}/api/readings/recent", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let latest = readings.latest.expect("missing latest reading");
    assert_eq!(latest.systolic, 132);
    assert_eq!(latest.diastolic, 84);
    assert_eq!(latest.pulse, 68);
    assert!(!latest.datetime.is_empty());

    assert!(!readings.trend.is_empty());
    assert!(readings.trend.len() <= 10);
    let newest_trend = readings.trend.last().unwrap();
    assert_eq!(newest_trend.systolic, 132);
    assert_eq!(newest_trend.diastolic, 84);
    assert!(!newest_trend.label.is_empty());

    assert!(readings.recent.len() <= 10);
    assert_eq!(readings.recent.first().unwrap().datetime, latest.datetime);
}

#[tokio::test]
async fn http_rejects_out_of_range_reading() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/readings", server.base_url))
        .json(&serde_json::json!({
            "systolic": 300,
            "diastolic": 84,
            "pulse": 68
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}
