use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::net::TcpListener;

use crate::{
    client::{
        api::ApiClient,
        token::{MemoryTokenStore, TokenStore},
    },
    server::{config::Config, router, startup, state::AppState},
};


const SECRET: &str = "0123456789abcdef0123456789abcdef";

/// Application served on an ephemeral local port.
struct TestServer {
    base_url: String,
    _uploads: TempDir,
    _test: TestContext,
}

impl TestServer {
    async fn start() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let uploads = TempDir::new().unwrap();
        let upload_dir = uploads.path().to_string_lossy().to_string();

        let config = Config::from_vars(move |name| match name {
            "JWT_SECRET" => Some(SECRET.to_string()),
            "UPLOAD_DIR" => Some(upload_dir.clone()),
            _ => None,
        })
        .unwrap();

        let state = AppState::new(db, &config);
        startup::check_for_admin(&state, &config).await.unwrap();
        let app = router::app(state, &config);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            _uploads: uploads,
            _test: test,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::with_memory_store(&self.base_url).unwrap()
    }

    async fn admin_client(&self) -> ApiClient {
        let client = self.client();
        client.auth().login("admin", "password123").await.unwrap();
        client
    }
}

/// Memory store that counts access token replacements made by refreshes.
#[derive(Default)]
struct CountingStore {
    inner: MemoryTokenStore,
    refreshes: AtomicUsize,
}

impl CountingStore {
    fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl TokenStore for CountingStore {
    fn access_token(&self) -> Option<String> {
        self.inner.access_token()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.refresh_token()
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        self.inner.set_tokens(access_token, refresh_token)
    }

    fn set_access_token(&self, access_token: &str) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_access_token(access_token)
    }

    fn clear(&self) {
        self.inner.clear()
    }
}

fn counting_client(server: &TestServer) -> (ApiClient, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::default());
    let client = ApiClient::new(&server.base_url, store.clone()).unwrap();
    (client, store)
}
