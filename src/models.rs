// src/models.rs

use crate::error::{Result, WorklogError};
use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 时间戳在数据库中的文本格式，按字典序即可排序
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ID_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Category {
    Bug,
    Feature,
    Fix,
    Meeting,
    #[default]
    Note,
    Refactor,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Bug,
        Category::Feature,
        Category::Fix,
        Category::Meeting,
        Category::Note,
        Category::Refactor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::Feature => "feature",
            Category::Fix => "fix",
            Category::Meeting => "meeting",
            Category::Note => "note",
            Category::Refactor => "refactor",
        }
    }

    /// 过滤码中代表该分类的字母
    pub fn code(&self) -> char {
        match self {
            Category::Bug => 'B',
            Category::Feature => 'F',
            Category::Fix => 'R',
            Category::Meeting => 'M',
            Category::Note => 'N',
            Category::Refactor => 'C',
        }
    }

    /// 形如 "[bug|feature|fix|meeting|note|refactor]" 的可选值列表
    pub fn options() -> String {
        format!("[{}]", Category::ALL.map(|cat| cat.as_str()).join("|"))
    }

    pub fn from_code(c: char) -> Option<Category> {
        let c = c.to_ascii_uppercase();
        Category::ALL.into_iter().find(|cat| cat.code() == c)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = WorklogError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|cat| cat.as_str() == s)
            .ok_or_else(|| WorklogError::InvalidCategory(s.to_string()))
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// 一条工作日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub timestamp: NaiveDateTime, // 精确到秒，存储为 TIMESTAMP_FORMAT 文本
    pub important: bool,
    pub category: Category,
    pub message: String,
}

impl Entry {
    /// 以当前本地时间和新生成的 ID 创建条目
    pub fn new(category: Category, important: bool, message: impl Into<String>) -> Self {
        Entry {
            id: generate_id(),
            timestamp: Local::now().naive_local().trunc_subsecs(0),
            important,
            category,
            message: message.into(),
        }
    }

    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.important { "*" } else { " " };
        write!(
            f,
            "{}\t{}\t{}  [{}]\t'{}'",
            self.timestamp_text(),
            self.id,
            marker,
            self.category,
            self.message
        )
    }
}

/// 取 v4 UUID 的前 12 个十六进制字符（全部为随机位）
fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}

/// 解析 "YYYY-MM-DD HH:MM:SS" 或 "YYYY-MM-DD"（视为当天零点）
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            WorklogError::InvalidInput(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or 'YYYY-MM-DD HH:MM:SS'.",
                s
            ))
        })
}

/// list 命令的查询条件；各子条件之间为 AND，分类之间为 OR
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub after: Option<NaiveDateTime>,
    pub before: Option<NaiveDateTime>,
    pub important_only: bool,
    pub categories: Vec<Category>,
}

impl EntryFilter {
    /// 解码过滤码，例如 "IB" = 重要 且 分类为 bug
    pub fn with_code(mut self, code: &str) -> Result<Self> {
        for c in code.chars() {
            if c.eq_ignore_ascii_case(&'I') {
                self.important_only = true;
                continue;
            }
            match Category::from_code(c) {
                Some(cat) => {
                    if !self.categories.contains(&cat) {
                        self.categories.push(cat);
                    }
                }
                None => {
                    return Err(WorklogError::InvalidInput(format!(
                        "Unknown filter code '{}'. Use I, B, F, R, M, N or C.",
                        c
                    )))
                }
            }
        }
        Ok(self)
    }
}
