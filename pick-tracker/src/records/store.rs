//! Read-only corpus loaders.

use super::{parse_record, Corpus, RecordError};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Loads a corpus, picking the loader from the file extension.
///
/// Files ending in `.json` are read with [`load_json_corpus`]; anything else
/// is treated as a SQLite database and read with [`load_sqlite_corpus`].
///
/// # Errors
///
/// Returns [`RecordError`] if the file cannot be read or any record is invalid.
pub fn load_corpus(path: &Path) -> Result<Corpus, RecordError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_json_corpus(path)
    } else {
        load_sqlite_corpus(path)
    }
}

/// Loads a JSON array of pull request records.
///
/// # Errors
///
/// Returns [`RecordError`] if the file cannot be read, is not a JSON array,
/// or holds an invalid or duplicate record.
pub fn load_json_corpus(path: &Path) -> Result<Corpus, RecordError> {
    info!(path = %path.display(), "Loading JSON corpus");

    let content = std::fs::read_to_string(path).map_err(|e| RecordError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let values: Vec<Value> = serde_json::from_str(&content).map_err(|e| RecordError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut corpus = Corpus::new();
    for (index, value) in values.into_iter().enumerate() {
        corpus.insert(parse_record(value, index)?)?;
    }

    info!(count = corpus.len(), "Loaded pull requests");
    Ok(corpus)
}

/// Loads the `prs` table of a pick database.
///
/// The table has the shape `prs(pr INTEGER PRIMARY KEY, data JSONB)`, where
/// `data` is one JSON record. The database is opened read-only.
///
/// # Errors
///
/// Returns [`RecordError`] if the database cannot be opened or queried, or if
/// any stored record is malformed.
pub fn load_sqlite_corpus(path: &Path) -> Result<Corpus, RecordError> {
    info!(path = %path.display(), "Loading SQLite corpus");

    let sqlite_error = |e: rusqlite::Error| RecordError::Sqlite {
        path: path.display().to_string(),
        source: e,
    };

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(sqlite_error)?;

    let mut stmt = conn
        .prepare("SELECT pr, data FROM prs ORDER BY pr")
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map([], |row| {
            let pr: i64 = row.get(0)?;
            // The collector writes text, but blobs hold the same JSON.
            let data = match row.get_ref(1)? {
                ValueRef::Text(bytes) | ValueRef::Blob(bytes) => bytes.to_vec(),
                other => {
                    return Err(rusqlite::Error::InvalidColumnType(
                        1,
                        "data".to_string(),
                        other.data_type(),
                    ))
                }
            };
            Ok((pr, data))
        })
        .map_err(sqlite_error)?;

    let mut corpus = Corpus::new();
    for (index, row) in rows.enumerate() {
        let (pr, data) = row.map_err(sqlite_error)?;
        let value: Value = serde_json::from_slice(&data)
            .map_err(|source| RecordError::MalformedData { pr, source })?;
        let record = parse_record(value, index)?;
        debug!(pr = record.number, branch = %record.base_ref_name, "Loaded record");
        corpus.insert(record)?;
    }

    info!(count = corpus.len(), "Loaded pull requests");
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn record_json(number: u64, base: &str, title: &str) -> Value {
        json!({
            "number": number,
            "title": title,
            "body": "",
            "baseRefName": base,
            "headRefName": "topic",
            "headRepositoryOwner": { "login": "octo" },
            "mergedAt": "2024-10-01T00:00:00Z"
        })
    }

    fn create_database(path: &Path, rows: &[(i64, String)]) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch("CREATE TABLE prs (pr INTEGER PRIMARY KEY, data JSONB);")
            .unwrap();
        for (pr, data) in rows {
            conn.execute(
                "INSERT INTO prs VALUES(?1, ?2)",
                rusqlite::params![pr, data],
            )
            .unwrap();
        }
    }

    #[test]
    fn can_load_json_corpus() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prs.json");
        let data = json!([
            record_json(10, "master", "Add feature"),
            record_json(11, "release", "Cherry-pick of #10"),
        ]);
        fs::write(&path, data.to_string()).unwrap();

        let corpus = load_corpus(&path).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(11).unwrap().base_ref_name, "release");
    }

    #[test]
    fn json_corpus_must_be_an_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prs.json");
        fs::write(&path, r#"{"number": 1}"#).unwrap();

        let result = load_json_corpus(&path);
        assert!(matches!(result, Err(RecordError::Json { .. })));
    }

    #[test]
    fn json_corpus_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_json_corpus(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(RecordError::Io { .. })));
    }

    #[test]
    fn can_load_sqlite_corpus() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("picks.db");
        create_database(
            &path,
            &[
                (20, record_json(20, "master", "Fix").to_string()),
                (21, record_json(21, "release", "Backport #20").to_string()),
            ],
        );

        let corpus = load_corpus(&path).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(21).unwrap().title, "Backport #20");
    }

    #[test]
    fn sqlite_record_missing_field_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("picks.db");
        let mut broken = record_json(30, "release", "Broken");
        broken.as_object_mut().unwrap().remove("mergedAt");
        create_database(&path, &[(30, broken.to_string())]);

        let result = load_sqlite_corpus(&path);
        assert!(matches!(result, Err(RecordError::InvalidRecord { pr: 30, .. })));
    }

    #[test]
    fn sqlite_record_with_garbage_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("picks.db");
        create_database(&path, &[(31, "not json".to_string())]);

        let result = load_sqlite_corpus(&path);
        assert!(matches!(result, Err(RecordError::MalformedData { pr: 31, .. })));
    }

    #[test]
    fn sqlite_missing_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (id INTEGER);")
            .unwrap();

        let result = load_sqlite_corpus(&path);
        assert!(matches!(result, Err(RecordError::Sqlite { .. })));
    }
}
