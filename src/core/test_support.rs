//! Scripted transports for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use super::error::TransportError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Answers requests in order from a queue of canned replies
#[derive(Clone, Default)]
pub(crate) struct Scripted {
    replies: Arc<Mutex<VecDeque<HttpResponse>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl Scripted {
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// `METHOD path` of every request sent so far
    pub fn log(&self) -> Vec<String> {
        self.sent()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

impl Transport for Scripted {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError("no scripted reply".into()))
    }
}

/// Holds every request until the test answers it, in any order
#[derive(Clone, Default)]
pub(crate) struct Gate {
    pending: Arc<Mutex<VecDeque<(HttpRequest, oneshot::Sender<HttpResponse>)>>>,
}

impl Gate {
    pub fn answer_nth(&self, index: usize, status: u16, body: &str) -> HttpRequest {
        let (request, tx) = self.pending.lock().unwrap().remove(index).unwrap();
        tx.send(HttpResponse::new(status, body)).unwrap();
        request
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

impl Transport for Gate {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back((request, tx));
        rx.await.map_err(|_| TransportError("request dropped".into()))
    }
}

pub(crate) fn profile_json(id: i64, username: &str) -> String {
    format!(
        r#"{{"id":{id},"username":"{username}","email":"{username}@x.com","created_at":"2025-01-01T00:00:00Z"}}"#
    )
}
