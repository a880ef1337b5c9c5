//! In-memory stand-in for the task board REST backend.
//!
//! Answers the same routes with the same status codes and `detail` bodies,
//! so the gateway, the session store and the boards can be driven end to
//! end without a network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use taskboard::core::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[derive(Debug, Clone)]
struct User {
    id: i64,
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
struct StoredProject {
    owner: i64,
    body: Value,
}

#[derive(Debug, Clone)]
struct StoredTask {
    project_id: i64,
    body: Value,
}

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
    tokens: HashMap<String, i64>,
    projects: HashMap<i64, StoredProject>,
    tasks: HashMap<i64, StoredTask>,
    reset_tokens: HashMap<String, i64>,
    log: Vec<String>,
    offline: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

fn reply(status: u16, body: Value) -> HttpResponse {
    HttpResponse::new(status, body.to_string())
}

fn detail(status: u16, message: &str) -> HttpResponse {
    reply(status, json!({ "detail": message }))
}

fn field<'a>(body: &'a Option<Value>, name: &str) -> &'a str {
    body.as_ref()
        .and_then(|b| b.get(name))
        .and_then(Value::as_str)
        .unwrap_or("")
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user directly, bypassing the API
    pub fn seed_user(&self, username: &str, email: &str, password: &str) -> i64 {
        let mut s = self.state.lock().unwrap();
        let id = s.next_id();
        s.users.push(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        id
    }

    /// Issue a reset token for an existing account
    pub fn issue_reset_token(&self, email: &str) -> Option<String> {
        let mut s = self.state.lock().unwrap();
        let user = s.users.iter().find(|u| u.email == email)?.id;
        let token = format!("reset-{}", user);
        s.reset_tokens.insert(token.clone(), user);
        Some(token)
    }

    /// Invalidate every issued access token
    pub fn revoke_all_tokens(&self) {
        self.state.lock().unwrap().tokens.clear();
    }

    /// Make every request fail without a response
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// `METHOD path` of every request received, oldest first
    pub fn log(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn clear_log(&self) {
        self.state.lock().unwrap().log.clear();
    }

    pub fn task_count(&self) -> usize {
        self.state.lock().unwrap().tasks.len()
    }

    fn handle(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut s = self.state.lock().unwrap();
        s.log.push(format!("{} {}", request.method, request.path));
        if s.offline {
            return Err(TransportError("connection refused".to_string()));
        }

        let segments: Vec<&str> = request.path.split('/').filter(|p| !p.is_empty()).collect();
        let body = request.body.clone();

        // Anonymous routes
        match (request.method, segments.as_slice()) {
            (Method::Post, ["register"]) => {
                let email = field(&body, "email");
                if s.users.iter().any(|u| u.email == email) {
                    return Ok(detail(400, "Email already registered"));
                }
                let id = s.next_id();
                s.users.push(User {
                    id,
                    username: field(&body, "username").to_string(),
                    email: email.to_string(),
                    password: field(&body, "password").to_string(),
                });
                return Ok(reply(201, json!({ "id": id })));
            }
            (Method::Post, ["login"]) => {
                let email = field(&body, "email");
                let password = field(&body, "password");
                let Some(user) = s
                    .users
                    .iter()
                    .find(|u| u.email == email && u.password == password)
                    .map(|u| u.id)
                else {
                    return Ok(detail(401, "Invalid credentials"));
                };
                let token = format!("token-{}", s.next_id());
                s.tokens.insert(token.clone(), user);
                return Ok(reply(200, json!({ "access_token": token, "token_type": "bearer" })));
            }
            (Method::Post, ["forgot-password"]) => {
                return Ok(reply(200, json!({ "message": "ok" })));
            }
            (Method::Post, ["reset-password"]) => {
                let Some(user) = s.reset_tokens.remove(field(&body, "token")) else {
                    return Ok(detail(400, "Invalid or expired token"));
                };
                let new_password = field(&body, "new_password").to_string();
                if let Some(u) = s.users.iter_mut().find(|u| u.id == user) {
                    u.password = new_password;
                }
                return Ok(reply(200, json!({ "message": "ok" })));
            }
            _ => {}
        }

        let Some(user) = request
            .bearer
            .as_ref()
            .and_then(|t| s.tokens.get(t))
            .copied()
        else {
            return Ok(detail(401, "Not authenticated"));
        };

        match (request.method, segments.as_slice()) {
            (Method::Get, ["me"]) => {
                let Some(u) = s.users.iter().find(|u| u.id == user) else {
                    return Ok(detail(404, "User not found"));
                };
                Ok(reply(
                    200,
                    json!({
                        "id": u.id,
                        "username": u.username,
                        "email": u.email,
                        "created_at": "2024-03-01T10:00:00",
                    }),
                ))
            }
            (Method::Get, ["projects"]) => {
                let mut owned: Vec<(i64, Value)> = s
                    .projects
                    .iter()
                    .filter(|(_, p)| p.owner == user)
                    .map(|(id, p)| (*id, p.body.clone()))
                    .collect();
                owned.sort_by_key(|(id, _)| *id);
                Ok(reply(200, Value::Array(owned.into_iter().map(|(_, b)| b).collect())))
            }
            (Method::Post, ["projects"]) => {
                let title = field(&body, "title");
                if title.trim().is_empty() {
                    return Ok(detail(422, "Title is required"));
                }
                let id = s.next_id();
                let project = json!({
                    "id": id,
                    "title": title,
                    "description": field(&body, "description"),
                    "created_at": "2024-03-01T10:00:00",
                });
                s.projects.insert(
                    id,
                    StoredProject {
                        owner: user,
                        body: project.clone(),
                    },
                );
                Ok(reply(201, project))
            }
            (method, ["projects", id, rest @ ..]) => {
                let Some(id) = id.parse::<i64>().ok() else {
                    return Ok(detail(404, "Project not found"));
                };
                match s.projects.get(&id) {
                    Some(p) if p.owner == user => {}
                    _ => return Ok(detail(404, "Project not found")),
                }
                match (method, rest) {
                    (Method::Get, []) => Ok(reply(200, s.projects[&id].body.clone())),
                    (Method::Put, []) => {
                        let project = json!({
                            "id": id,
                            "title": field(&body, "title"),
                            "description": field(&body, "description"),
                            "created_at": "2024-03-01T10:00:00",
                        });
                        if let Some(p) = s.projects.get_mut(&id) {
                            p.body = project.clone();
                        }
                        Ok(reply(200, project))
                    }
                    (Method::Delete, []) => {
                        s.projects.remove(&id);
                        s.tasks.retain(|_, t| t.project_id != id);
                        Ok(HttpResponse::new(204, ""))
                    }
                    (Method::Get, ["tasks"]) => {
                        let mut tasks: Vec<(i64, Value)> = s
                            .tasks
                            .iter()
                            .filter(|(_, t)| t.project_id == id)
                            .map(|(tid, t)| (*tid, t.body.clone()))
                            .collect();
                        tasks.sort_by_key(|(tid, _)| *tid);
                        Ok(reply(200, Value::Array(tasks.into_iter().map(|(_, b)| b).collect())))
                    }
                    (Method::Post, ["tasks"]) => {
                        let task_id = s.next_id();
                        let status = body
                            .as_ref()
                            .and_then(|b| b.get("status"))
                            .cloned()
                            .unwrap_or_else(|| json!("a_faire"));
                        let task = json!({
                            "id": task_id,
                            "project_id": id,
                            "title": field(&body, "title"),
                            "description": field(&body, "description"),
                            "status": status,
                            "due_date": null,
                        });
                        s.tasks.insert(
                            task_id,
                            StoredTask {
                                project_id: id,
                                body: task.clone(),
                            },
                        );
                        Ok(reply(201, task))
                    }
                    _ => Ok(detail(405, "Method Not Allowed")),
                }
            }
            (method, ["tasks", id]) => {
                let Some(id) = id.parse::<i64>().ok() else {
                    return Ok(detail(404, "Task not found"));
                };
                let owner = s
                    .tasks
                    .get(&id)
                    .and_then(|t| s.projects.get(&t.project_id))
                    .map(|p| p.owner);
                if owner != Some(user) {
                    return Ok(detail(404, "Task not found"));
                }
                match method {
                    Method::Put => {
                        let Some(task) = s.tasks.get_mut(&id) else {
                            return Ok(detail(404, "Task not found"));
                        };
                        if let (Some(stored), Some(update)) =
                            (task.body.as_object_mut(), body.as_ref().and_then(Value::as_object))
                        {
                            for (k, v) in update {
                                stored.insert(k.clone(), v.clone());
                            }
                        }
                        Ok(reply(200, task.body.clone()))
                    }
                    Method::Delete => {
                        s.tasks.remove(&id);
                        Ok(HttpResponse::new(204, ""))
                    }
                    _ => Ok(detail(405, "Method Not Allowed")),
                }
            }
            _ => Ok(detail(404, "Not Found")),
        }
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.handle(request)
    }
}

pub const PASSWORD: &str = "Password1";

pub fn email_of(username: &str) -> String {
    format!("{}@example.com", username)
}

/// A fresh store over `backend`, plus a handle on its token storage
pub fn new_store(
    backend: &FakeBackend,
) -> (
    taskboard::core::SessionStore<FakeBackend>,
    taskboard::core::MemoryTokenStore,
) {
    let tokens = taskboard::core::MemoryTokenStore::new();
    let store = taskboard::core::SessionStore::new(
        taskboard::core::Api::new(backend.clone()),
        tokens.clone(),
    );
    (store, tokens)
}

/// Seed `username` and sign in through the API
pub async fn signed_in(
    backend: &FakeBackend,
    username: &str,
) -> (
    taskboard::core::SessionStore<FakeBackend>,
    taskboard::core::MemoryTokenStore,
) {
    backend.seed_user(username, &email_of(username), PASSWORD);
    let (store, tokens) = new_store(backend);
    store
        .sign_in(&email_of(username), PASSWORD)
        .await
        .expect("sign in")
        .applied()
        .expect("fresh sign in is never stale");
    (store, tokens)
}
