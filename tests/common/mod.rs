//! Shared fixtures: scripted backends and log capture.

#![allow(dead_code)]

use async_trait::async_trait;
use lux_concierge::{AdviceRequest, Error, GenerationBackend};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracing_subscriber::fmt::MakeWriter;

/// What a scripted backend does when called.
#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    Fail,
}

/// Backend that records every request and answers from a script.
#[derive(Debug)]
pub struct ScriptedBackend {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<AdviceRequest>>,
}

impl ScriptedBackend {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Script::Reply(text.to_string())))
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::new(Script::Fail))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<AdviceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: &AdviceRequest) -> lux_concierge::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail => Err(Error::Remote {
                status: 503,
                class: "overloaded".into(),
                message: "The model is overloaded.".into(),
            }),
        }
    }
}

/// Backend that holds every call until released.
#[derive(Debug)]
pub struct GatedBackend {
    reply: String,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedBackend {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for GatedBackend {
    async fn generate(&self, _request: &AdviceRequest) -> lux_concierge::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}

static ENV_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Serializes tests that mutate or read the process environment.
pub async fn env_lock() -> tokio::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().await
}

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// A subscriber writing everything at DEBUG and above into a buffer.
pub fn capture_logs() -> (LogBuffer, tracing::Dispatch) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (buffer, tracing::Dispatch::new(subscriber))
}
