// src/db.rs

use crate::error::{Result, WorklogError};
use crate::models::{Category, Entry, EntryFilter, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};

/// 覆盖默认数据目录的环境变量
pub const DATA_DIR_ENV: &str = "WORKLOG_DATA_DIR";

const DB_FILENAME: &str = "worklog.db";

const INITIALIZE_STMT: &str = "CREATE TABLE IF NOT EXISTS entries (
    id        TEXT NOT NULL PRIMARY KEY,
    timestamp TEXT NOT NULL,
    important INTEGER NOT NULL DEFAULT 0,
    category  TEXT NOT NULL DEFAULT 'note',
    message   TEXT NOT NULL
)";

/// 获取数据库文件的标准路径 (~/.local/share/worklog/worklog.db)
pub fn get_db_path() -> Result<PathBuf> {
    let data_dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::data_dir()
            .ok_or(WorklogError::DataDirNotFound)?
            .join("worklog"),
    };
    Ok(data_dir.join(DB_FILENAME))
}

/// 持有唯一的数据库连接，所有读写都经过这里
pub struct Store {
    conn: Connection,
}

impl Store {
    /// 打开默认位置的数据库，必要时创建目录和表
    pub fn open_default() -> Result<Self> {
        Store::open(&get_db_path()?)
    }

    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                log::debug!("created data directory {}", parent.display());
            }
        }
        let conn = Connection::open(db_path)?;
        log::debug!("opened database at {}", db_path.display());
        Store::initialize(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Store::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.execute(INITIALIZE_STMT, [])?;
        Ok(Store { conn })
    }

    /// 插入一条日志
    pub fn add(&self, entry: &Entry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO entries (id, timestamp, important, category, message) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.id,
                entry.timestamp_text(),
                entry.important,
                entry.category,
                entry.message
            ],
        )?;
        log::debug!("inserted entry {}", entry.id);
        Ok(())
    }

    /// 按时间倒序列出满足条件的日志
    pub fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut query = String::from(
            "SELECT id, timestamp, important, category, message FROM entries WHERE 1 = 1 ",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(after) = filter.after {
            query.push_str("AND timestamp > ? ");
            params.push(Box::new(after.format(TIMESTAMP_FORMAT).to_string()));
        }

        if let Some(before) = filter.before {
            query.push_str("AND timestamp < ? ");
            params.push(Box::new(before.format(TIMESTAMP_FORMAT).to_string()));
        }

        if filter.important_only {
            query.push_str("AND important = 1 ");
        }

        if !filter.categories.is_empty() {
            let placeholders = vec!["?"; filter.categories.len()].join(",");
            query.push_str(&format!("AND category IN ({}) ", placeholders));
            for category in &filter.categories {
                params.push(Box::new(*category));
            }
        }

        query.push_str("ORDER BY timestamp DESC, rowid DESC");

        let mut stmt = self.conn.prepare(&query)?;
        let entries = stmt
            .query_map(
                rusqlite::params_from_iter(params.iter().map(|b| b.as_ref())),
                entry_from_row,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        log::debug!("listed {} entries", entries.len());
        Ok(entries)
    }

    /// 删除所有日志，返回删除的行数
    pub fn clear(&self) -> Result<usize> {
        let count = self.conn.execute("DELETE FROM entries", [])?;
        log::info!("cleared {} entries", count);
        Ok(count)
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let timestamp: String = row.get(1)?;
    let timestamp = NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    Ok(Entry {
        id: row.get(0)?,
        timestamp,
        important: row.get(2)?,
        category: row.get::<_, Category>(3)?,
        message: row.get(4)?,
    })
}
