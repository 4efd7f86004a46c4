use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use crate::config::ReportConfig;
use crate::errors::QuizError;
use crate::models::{find_answer, ResponseItem, SubmissionRecord};
use tracing::{debug, info};

pub const STORE_HEADER: [&str; 4] = ["timestamp", "company", "email", "response_data"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only CSV file holding one row per submission.
///
/// Clones share one write lock, so concurrent submissions inside this
/// process never interleave their rows.
#[derive(Clone)]
pub struct ResponseStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ResponseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, QuizError> {
        self.write_lock
            .lock()
            .map_err(|_| QuizError::Internal("response store lock poisoned".into()))
    }

    /// Create the store with its header row if it does not exist yet.
    pub fn initialize(&self) -> Result<(), QuizError> {
        let _guard = self.lock()?;
        let writer = self.open_writer()?;
        writer.finish()
    }

    /// Record a submission: scan out the identity answers, stamp it and
    /// append it as a new row. Resubmitting always appends again.
    pub fn record(
        &self,
        responses: Vec<ResponseItem>,
        identity: &ReportConfig,
    ) -> Result<SubmissionRecord, QuizError> {
        if responses.is_empty() {
            return Err(QuizError::EmptySubmission);
        }

        let record = SubmissionRecord {
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            company: find_answer(&responses, &identity.company_question),
            email: find_answer(&responses, &identity.email_question),
            responses,
        };
        self.append(&record)?;

        info!(
            company = %record.company,
            answers = record.responses.len(),
            "Recorded submission"
        );
        Ok(record)
    }

    pub fn append(&self, record: &SubmissionRecord) -> Result<(), QuizError> {
        let response_data = serde_json::to_string(&record.responses)?;

        let _guard = self.lock()?;
        let mut writer = self.open_writer()?;
        writer.inner.write_record([
            record.timestamp.as_str(),
            record.company.as_str(),
            record.email.as_str(),
            response_data.as_str(),
        ])?;
        writer.finish()
    }

    /// The most recent submission. `NoResponses` when the store is missing
    /// or holds nothing beyond its header.
    pub fn latest(&self) -> Result<SubmissionRecord, QuizError> {
        if !self.path.exists() {
            return Err(QuizError::NoResponses);
        }

        let mut reader = self.open_reader()?;
        let mut last = None;
        for row in reader.records() {
            last = Some(row?);
        }

        let row = last.ok_or(QuizError::NoResponses)?;
        debug!(path = %self.path.display(), "Read latest submission");
        parse_row(&row)
    }

    /// Number of data rows, not counting the header.
    pub fn count(&self) -> Result<usize, QuizError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let mut reader = self.open_reader()?;
        let mut count = 0;
        for row in reader.records() {
            row?;
            count += 1;
        }
        Ok(count)
    }

    fn open_reader(&self) -> Result<csv::Reader<std::fs::File>, QuizError> {
        Ok(csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?)
    }

    /// Open for append, writing the header first when the file is new or empty.
    fn open_writer(&self) -> Result<StoreWriter, QuizError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            inner.write_record(STORE_HEADER)?;
            info!(path = %self.path.display(), "Created response store");
        }
        Ok(StoreWriter { inner })
    }
}

struct StoreWriter {
    inner: csv::Writer<std::fs::File>,
}

impl StoreWriter {
    fn finish(mut self) -> Result<(), QuizError> {
        self.inner.flush()?;
        Ok(())
    }
}

fn parse_row(row: &csv::StringRecord) -> Result<SubmissionRecord, QuizError> {
    if row.len() != STORE_HEADER.len() {
        return Err(QuizError::MalformedRecord(format!(
            "expected {} columns, found {}",
            STORE_HEADER.len(),
            row.len()
        )));
    }

    let responses: Vec<ResponseItem> = serde_json::from_str(&row[3])
        .map_err(|e| QuizError::MalformedRecord(format!("response_data: {}", e)))?;

    Ok(SubmissionRecord {
        timestamp: row[0].to_string(),
        company: row[1].to_string(),
        email: row[2].to_string(),
        responses,
    })
}
