// src/commands.rs

use crate::db::Store;
use crate::error::{Result, WorklogError};
use crate::models::{parse_timestamp, Category, Entry, EntryFilter};
use std::io::{self, BufRead, Write};

const CLEAR_WARNING: &str = "CAUTION! This is a destructive action and cannot be
undone. To proceed, type 'continue' or 'q' to quit:

> ";

/// 处理 'add' 命令
pub fn handle_add(store: &Store, message: String, category: &str, important: bool) -> Result<()> {
    // 先校验分类，避免写入非法数据
    let category: Category = category.parse()?;
    let entry = Entry::new(category, important, message);
    store.add(&entry)?;
    println!("{}", entry);
    Ok(())
}

/// 处理 'list' 命令
pub fn handle_list(
    store: &Store,
    after: Option<String>,
    before: Option<String>,
    filter: Option<String>,
) -> Result<()> {
    let criteria = build_filter(after.as_deref(), before.as_deref(), filter.as_deref())?;
    for entry in store.list(&criteria)? {
        println!("{}", entry);
    }
    Ok(())
}

fn build_filter(
    after: Option<&str>,
    before: Option<&str>,
    code: Option<&str>,
) -> Result<EntryFilter> {
    let criteria = EntryFilter {
        after: after.map(parse_timestamp).transpose()?,
        before: before.map(parse_timestamp).transpose()?,
        ..Default::default()
    };
    match code {
        Some(code) => criteria.with_code(code),
        None => Ok(criteria),
    }
}

/// 处理 'clear' 命令
pub fn handle_clear(store: &Store, force: bool) -> Result<()> {
    if !force {
        let stdin = io::stdin();
        let confirmed = confirm_clear(&mut stdin.lock(), &mut io::stdout())?;
        if !confirmed {
            return Ok(());
        }
    }
    store.clear()?;
    Ok(())
}

/// 打印警告并读取一行输入：'continue' 继续，'q'/'quit' 放弃，其余报错
fn confirm_clear<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{}", CLEAR_WARNING)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    match line.trim() {
        "continue" => Ok(true),
        "q" | "quit" => Ok(false),
        other => Err(WorklogError::ConfirmationMismatch(other.to_string())),
    }
}
