mod support;

use phys2log::mapping::loader;
use phys2log::output::{formatter, report};
use phys2log::rewrite::engine::{Direction, Rewriter};
use support::{fixture_path, read_fixture, unique_temp_dir};

#[test]
fn fixture_sql_rewrites_through_the_full_pipeline() {
    let mapping = loader::load_mapping(&fixture_path("mapping.csv")).expect("load should succeed");
    let rewriter = Rewriter::new(&mapping.tables, &mapping.columns, Direction::PhysicalToLogical)
        .expect("patterns should compile");

    let result = rewriter.rewrite(&read_fixture("input.sql"));

    // USR_ID_OLD is a partial-identifier case and must survive untouched;
    // T_EMP never occurs and must not be reported.
    insta::assert_snapshot!(result.text, @r"
    SELECT UserId, OrderDate
    FROM UserAccount
    JOIN Order ON Order.UserId = UserAccount.UserId
    WHERE UserAccount.USR_ID_OLD IS NULL;
    ");
    insta::assert_snapshot!(report::build_report(&result.matched_tables), @r"
    テーブル論理名,テーブル物理名,説明
    UserAccount,T_USR,アカウント台帳
    Order,T_ORD,N/A
    ");
}

#[test]
fn reverse_direction_round_trips_the_fixture() {
    let mapping = loader::load_mapping(&fixture_path("mapping.csv")).expect("load should succeed");
    let forward = Rewriter::new(&mapping.tables, &mapping.columns, Direction::PhysicalToLogical)
        .expect("patterns should compile");
    let backward = Rewriter::new(&mapping.tables, &mapping.columns, Direction::LogicalToPhysical)
        .expect("patterns should compile");

    let original = read_fixture("input.sql");
    let rewritten = forward.rewrite(&original);
    let restored = backward.rewrite(&rewritten.text);
    assert_eq!(restored.text, original);
}

#[test]
fn write_output_lands_both_files_for_a_rewrite() {
    let mapping = loader::load_mapping(&fixture_path("mapping.csv")).expect("load should succeed");
    let rewriter = Rewriter::new(&mapping.tables, &mapping.columns, Direction::PhysicalToLogical)
        .expect("patterns should compile");
    let result = rewriter.rewrite(&read_fixture("input.sql"));

    let out_dir = unique_temp_dir("phys2log_e2e_out");
    let report_text = report::build_report(&result.matched_tables);
    formatter::write_output(&out_dir, "input", &result.text, &report_text)
        .expect("write_output should succeed");

    let sql = std::fs::read_to_string(out_dir.join("input.sql")).expect("sql should exist");
    let written_report =
        std::fs::read_to_string(out_dir.join("input_tables.csv")).expect("report should exist");
    assert_eq!(sql, result.text);
    assert_eq!(written_report, report_text);
}
