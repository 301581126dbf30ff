use sqlsplitter::{
    Dialect, SplitError, StatementCursor, StatementKind, for_each_statement,
    iter_statements_from_file, split_file, split_files_parallel,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_script(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn open_missing_file_is_an_error() {
    // 文件名不会被当作 SQL 文本处理
    let err = StatementCursor::open("select 1;", Dialect::Default).unwrap_err();
    assert!(matches!(err, SplitError::FileNotFound { .. }));
    assert!(split_file("/definitely/not/here.sql").is_err());
}

#[test]
fn split_file_reads_all_statements() {
    let file = write_script("create table t (a int);\ninsert into t values (1);\n");
    let (statements, err) = split_file(file.path()).unwrap();
    assert!(err.is_none());
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1].text(), "insert into t values (1);");
    assert_eq!(statements[1].first_line, 2);
}

#[test]
fn empty_file_yields_nothing() {
    let file = write_script("");
    let (statements, err) = split_file(file.path()).unwrap();
    assert!(statements.is_empty());
    assert!(err.is_none());
}

#[test]
fn iter_statements_from_file_streams() {
    let file = write_script("delimiter //\nselect 1//\n");
    let kinds: Vec<_> = iter_statements_from_file(file.path())
        .unwrap()
        .map(|r| r.unwrap().kind)
        .collect();
    assert_eq!(kinds, vec![StatementKind::DelimiterDirective, StatementKind::Sql]);
}

#[test]
fn for_each_statement_counts() {
    let mut seen = Vec::new();
    let script = "select 1;select 2;\nselect 3";
    let count = for_each_statement(script.as_bytes(), Dialect::MySQL, |stmt| {
        seen.push(stmt.into_string());
    })
    .unwrap();
    assert_eq!(count, 3);
    assert_eq!(seen, vec!["select 1;", "select 2;", "select 3"]);
}

#[test]
fn split_files_parallel_keeps_input_order() {
    let a = write_script("select 'a';");
    let b = write_script("select 'b1';select 'b2';");
    let missing = a.path().with_extension("missing");
    let paths = vec![a.path().to_path_buf(), missing, b.path().to_path_buf()];

    let results = split_files_parallel(&paths, Dialect::Default);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().0.len(), 1);
    assert!(matches!(results[1], Err(SplitError::FileNotFound { .. })));
    let (b_statements, b_err) = results[2].as_ref().unwrap();
    assert!(b_err.is_none());
    assert_eq!(b_statements[1].text(), "select 'b2';");
}
