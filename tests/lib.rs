//! Shared test doubles for the behavior suites.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

pub use tickerdash_core::{
    DashboardConfig, DashboardService, DashboardSession, GrowthRateVector, HttpClient, HttpError,
    HttpRequest, HttpResponse, LoadState, ReportType, ServiceErrorKind, Symbol,
};

/// Transport stub that answers by URL fragment.
///
/// Routes are matched in insertion order against `request.url`; re-routing
/// the same fragment replaces the previous answer. An optional gate holds
/// every response until the test releases it, which makes in-flight
/// behavior observable.
pub struct ScriptedHttpClient {
    routes: Mutex<Vec<(String, Result<HttpResponse, HttpError>)>>,
    gate: Mutex<Option<Arc<Notify>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            routes: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn respond(&self, fragment: &str, response: HttpResponse) {
        let mut routes = self.routes.lock().expect("routes lock");
        if let Some(entry) = routes.iter_mut().find(|(key, _)| key == fragment) {
            entry.1 = Ok(response);
        } else {
            routes.push((fragment.to_owned(), Ok(response)));
        }
    }

    pub fn fail(&self, fragment: &str, error: HttpError) {
        let mut routes = self.routes.lock().expect("routes lock");
        if let Some(entry) = routes.iter_mut().find(|(key, _)| key == fragment) {
            entry.1 = Err(error);
        } else {
            routes.push((fragment.to_owned(), Err(error)));
        }
    }

    /// Hold responses until the returned handle is notified. `notify_one`
    /// stores a permit, so releasing before the request registers is safe.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().expect("gate lock") = Some(Arc::clone(&gate));
        gate
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request lock").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = {
            let routes = self.routes.lock().expect("routes lock");
            routes
                .iter()
                .find(|(fragment, _)| request.url.contains(fragment.as_str()))
                .map(|(_, answer)| answer.clone())
                .unwrap_or_else(|| Err(HttpError::new(format!("unrouted url {}", request.url))))
        };
        let gate = self.gate.lock().expect("gate lock").clone();
        self.requests.lock().expect("request lock").push(request);

        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            response
        })
    }
}

/// Session wired to a scripted transport.
pub fn scripted_session(client: Arc<ScriptedHttpClient>) -> DashboardSession {
    DashboardSession::new(DashboardService::new(client, DashboardConfig::default()))
}

pub fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("test symbols are valid")
}
