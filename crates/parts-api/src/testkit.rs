use std::sync::{Arc, Mutex};

use pod_editor::Word;
use pod_http::HttpClient;

use crate::types::{PartDisplay, PartRecord, SentenceDisplay, SentenceRecord};

fn word(id: i64, starts_at: f64, ends_at: f64, text: &str) -> Word {
    Word {
        id,
        text: text.into(),
        overwrite: String::new(),
        starts_at,
        ends_at,
        probability: 0.9,
        hidden: false,
    }
}

fn sentence_record(id: i64, text: &str, starts_at: f64, ends_at: f64, wps: f64) -> SentenceRecord {
    SentenceRecord {
        id,
        part_id: Some(7),
        text: text.into(),
        starts_at,
        ends_at,
        words_per_second: wps,
        episode_speaker_id: None,
        created_at: Some("2024-03-01T10:00:00Z".into()),
        updated_at: Some("2024-03-01T10:00:00Z".into()),
    }
}

/// A small two-sentence display payload, shaped like the upstream endpoint
/// returns it.
pub fn display() -> PartDisplay {
    PartDisplay {
        part: PartRecord {
            id: 7,
            episode_id: 1,
            episode_speaker_id: 3,
            part_type: 0,
            text: "Hi there friend".into(),
            starts_at: 0.0,
            ends_at: 1.5,
            created_at: Some("2024-03-01T10:00:00Z".into()),
            updated_at: Some("2024-03-01T10:00:00Z".into()),
        },
        sentences: vec![
            SentenceDisplay {
                sentence: sentence_record(10, "Hi there", 0.0, 1.0, 2.0),
                words: vec![word(1, 0.0, 0.5, "Hi"), word(2, 0.5, 1.0, "there")],
                move_sentence: None,
            },
            SentenceDisplay {
                sentence: sentence_record(20, "friend", 1.0, 1.5, 2.0),
                words: vec![word(3, 1.0, 1.5, "friend")],
                move_sentence: None,
            },
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Vec<u8>,
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: Vec::new(),
        }
    }
}

#[derive(Default)]
struct Inner {
    requests: Vec<Request>,
    get_response: Vec<u8>,
    write_response: Vec<u8>,
    fail_writes: bool,
}

/// Records every request and answers with canned bytes.
#[derive(Clone, Default)]
pub struct MockHttp {
    inner: Arc<Mutex<Inner>>,
}

impl MockHttp {
    pub fn respond_to_get(&self, bytes: Vec<u8>) {
        self.inner.lock().unwrap().get_response = bytes;
    }

    pub fn respond_to_writes(&self, bytes: Vec<u8>) {
        self.inner.lock().unwrap().write_response = bytes;
    }

    pub fn fail_writes(&self) {
        self.inner.lock().unwrap().fail_writes = true;
    }

    pub fn allow_writes(&self) {
        self.inner.lock().unwrap().fail_writes = false;
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap().requests.clear();
    }

    pub fn requests(&self) -> Vec<Request> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn record_write(&self, method: Method, path: &str, body: Vec<u8>) -> Result<Vec<u8>, pod_http::Error> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_writes {
            return Err("mock refused the write".into());
        }
        inner.requests.push(Request {
            method,
            path: path.into(),
            body,
        });
        Ok(inner.write_response.clone())
    }
}

impl HttpClient for MockHttp {
    async fn get(&self, path: &str) -> Result<Vec<u8>, pod_http::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(Request::get(path));
        Ok(inner.get_response.clone())
    }

    async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<Vec<u8>, pod_http::Error> {
        self.record_write(Method::Post, path, body)
    }

    async fn put(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>, pod_http::Error> {
        self.record_write(Method::Put, path, body)
    }
}
