use std::fmt;
use std::sync::Mutex;

// ─────────────────────────────────────────────────────────────────────────────
// Diagnostic channel
// ─────────────────────────────────────────────────────────────────────────────
//
// `legendre` 建表失敗時不回傳錯誤，而是送出 warning 並回傳 0.0。
// 呼叫端若要區分「積分為零」與「計算失敗」，需檢查 sink 收到的內容。

/// 一筆非致命的 warning。
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    component: &'static str,
    code: u32,
    message: String
}

impl Diagnostic {
    pub fn new(component: &'static str, code: u32, message: String) -> Diagnostic {
        Diagnostic { component, code, message }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}: {} (code {})", self.component, self.message, self.code)
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, diagnostic: Diagnostic);
}

/// 預設 sink：寫到 stderr。
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// 收集所有 warning，供呼叫端事後檢查。
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink { records: Mutex::new(Vec::new()) }
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}
