//! 切分一个 SQL 脚本文件并逐条打印语句
//!
//! 用法: cargo run --example split_file -- <path> [dialect]

use sqlsplitter::{Dialect, StatementCursor};
use std::env;
use std::process;

fn main() {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: split_file <path> [dialect]");
        process::exit(2);
    };
    let dialect = match args.next().map(|s| s.parse::<Dialect>()) {
        Some(Ok(dialect)) => dialect,
        Some(Err(e)) => {
            eprintln!("{}", e);
            process::exit(2);
        }
        None => Dialect::Default,
    };

    let mut cursor = match StatementCursor::open(&path, dialect) {
        Ok(cursor) => cursor,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut i = 0u64;
    while cursor.advance() {
        i += 1;
        println!("{} {}", i, cursor.take_statement());
    }
    if let Some(err) = cursor.error() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
