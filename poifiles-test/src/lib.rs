use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod manager;
pub mod repl;

pub use crate::manager::{Backend, StdManager, TokioManager};
pub use crate::repl::AppMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Message")]
pub enum Message {
    CreateTempFile(CreateTempFile),
    CreatedFile(CreatedFile),
    SharedDir(SharedDir),
    CleanupCount(CleanupCount),
    IoError(IoError),
    Quit,
}

impl Message {
    pub fn create_temp_file(prefix: &str, suffix: &str) -> Self {
        Message::CreateTempFile(CreateTempFile {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        })
    }

    pub fn shared_dir(path: PathBuf) -> Self {
        Message::SharedDir(SharedDir { path })
    }

    pub fn cleanup_count(count: usize) -> Self {
        Message::CleanupCount(CleanupCount { count })
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap()
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&self.to_json()).unwrap()
    }

    pub fn from_str(s: &str) -> Self {
        serde_json::from_str(s).unwrap()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTempFile {
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedFile {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedDir {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupCount {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoError {
    msg: String,
}

pub struct Executor<M> {
    manager: M,
}

impl<M: Backend> Executor<M> {
    pub fn new() -> Self {
        Self {
            manager: M::default(),
        }
    }

    pub async fn exec_str(&mut self, s: &str) -> Result<Message, String> {
        let req = Message::from_str(s);

        Ok(self.execute(req).await)
    }

    pub async fn execute(&mut self, req: Message) -> Message {
        match req {
            Message::CreateTempFile(c) => self.create_temp_file(c).await,
            Message::SharedDir(_) => self.shared_dir().await,
            Message::CleanupCount(_) => self.cleanup_count(),
            Message::CreatedFile(_) | Message::IoError(_) => panic!("Request error"),
            Message::Quit => std::process::exit(0),
        }
    }

    async fn create_temp_file(&mut self, req: CreateTempFile) -> Message {
        match self.manager.create_temp_file(&req.prefix, &req.suffix).await {
            Ok(path) => Message::CreatedFile(CreatedFile { path }),
            Err(e) => Message::IoError(IoError { msg: e.to_string() }),
        }
    }

    async fn shared_dir(&mut self) -> Message {
        match self.manager.shared_dir().await {
            Ok(path) => Message::SharedDir(SharedDir { path }),
            Err(e) => Message::IoError(IoError { msg: e.to_string() }),
        }
    }

    fn cleanup_count(&mut self) -> Message {
        Message::CleanupCount(CleanupCount {
            count: self.manager.cleanup_len(),
        })
    }
}
