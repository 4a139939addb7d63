use crate::rewrite::engine::MatchedTable;

/// Build the matched-tables report as CSV text.
///
/// Headers come from the serialized field names of [`MatchedTable`]
/// (`テーブル論理名,テーブル物理名,説明`) and are emitted even when no
/// table matched, so an empty report is still a valid tabular file. Rows
/// follow match order, which is mapping order.
pub fn build_report(matched_tables: &[MatchedTable]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if matched_tables.is_empty() {
        writer
            .write_record(["テーブル論理名", "テーブル物理名", "説明"])
            .expect("in-memory csv write cannot fail");
    }
    for table in matched_tables {
        writer
            .serialize(table)
            .expect("in-memory csv write cannot fail");
    }
    let bytes = writer
        .into_inner()
        .expect("in-memory csv flush cannot fail");
    String::from_utf8(bytes).expect("csv output is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_still_carries_the_header() {
        assert_eq!(build_report(&[]), "テーブル論理名,テーブル物理名,説明\n");
    }

    #[test]
    fn rows_follow_match_order() {
        let matched = vec![
            MatchedTable {
                logical: "ユーザー".to_string(),
                physical: "T_USR".to_string(),
                description: "アカウント台帳".to_string(),
            },
            MatchedTable {
                logical: "注文".to_string(),
                physical: "T_ORD".to_string(),
                description: "N/A".to_string(),
            },
        ];
        insta::assert_snapshot!(build_report(&matched), @r"
        テーブル論理名,テーブル物理名,説明
        ユーザー,T_USR,アカウント台帳
        注文,T_ORD,N/A
        ");
    }
}
