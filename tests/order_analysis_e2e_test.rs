// ==========================================
// 订单利润分析 端到端测试
// ==========================================
// 测试目标: 目录发现 → SpreadsheetML 导入 → 分类汇总 → 报表输出
// ==========================================


use order_profit_analyzer::api::{ApiError, OrderAnalysisApi};
use order_profit_analyzer::config::{AnalysisConfig, ConfigError, ProfitConfig, CONFIG_FILE_NAME};
use order_profit_analyzer::engine::EngineError;
use order_profit_analyzer::importer::ImportError;
use order_profit_analyzer::logging;
use order_profit_analyzer::report::ReportError;
use tempfile::TempDir;
use test_helpers::{approx_eq, as_f64, order_row, read_sheet, write_export, write_export_with_headers};

#[test]
fn test_worked_example_report() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    write_export(
        dir.path(),
        "订单数据0101-全部门店导出.xls",
        &[order_row("A1", "100", Some("10")), order_row("A2", "50", Some("0"))],
    );

    let api = OrderAnalysisApi::default();
    let report = api.analyze_directory(dir.path()).unwrap();

    assert!(!report.has_failures(), "failures: {:?}", report.failed);
    assert_eq!(report.succeeded.len(), 1);

    let analysis = &report.succeeded[0];
    let expected_output = dir.path().join("订单数据0101分析.xlsx");
    assert_eq!(analysis.output, expected_output);
    assert!(expected_output.is_file());

    assert_eq!(analysis.summary.real_orders, 1);
    assert_eq!(analysis.summary.fake_orders, 1);
    assert!(approx_eq(analysis.summary.total_income, 82.5));
    assert!(approx_eq(analysis.summary.average_income, 82.5));
    assert!(approx_eq(analysis.summary.reback_income, 50.0 / 0.9 * 0.1));

    let summary = read_sheet(&expected_output, "统计");
    assert_eq!(summary.len(), 2);
    assert_eq!(as_f64(&summary[1][0]), 1.0);
    assert_eq!(as_f64(&summary[1][1]), 1.0);
    assert!(approx_eq(as_f64(&summary[1][2]), 82.5));
    assert!(approx_eq(as_f64(&summary[1][3]), 82.5));
    assert!(approx_eq(as_f64(&summary[1][4]), 5.555_555_555));

    let real = read_sheet(&expected_output, "真实单");
    assert_eq!(real.len(), 2);
    assert_eq!(real[1][0].to_string(), "A1");
    assert!(approx_eq(as_f64(&real[1][7]), 87.5));
    assert!(approx_eq(as_f64(&real[1][8]), 100.0 / 0.9 * 0.1));

    let fake = read_sheet(&expected_output, "刷单");
    assert_eq!(fake.len(), 2);
    assert_eq!(fake[1][0].to_string(), "A2");
    assert_eq!(as_f64(&fake[1][4]), 0.0);
    assert_eq!(as_f64(&fake[1][6]), 15.0);
    assert!(approx_eq(as_f64(&fake[1][7]), -17.5));
}

#[test]
fn test_zero_postage_forms_are_promotional() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export(
        dir.path(),
        "订单数据0102-全部门店.xls",
        &[
            order_row("G1", "40", Some("3")),
            order_row("P1", "10", Some("0")),
            order_row("P2", "20", Some("0.0")),
            order_row("P3", "30", None),
        ],
    );

    let book = OrderAnalysisApi::default().build_order_book(&input).unwrap();

    assert_eq!(book.real_orders(), 1);
    assert_eq!(book.fake_orders(), 3);
    for record in book.promoter_table() {
        assert_eq!(record.postage_fee(), 0.0);
        assert_eq!(record.street_promoter(), 15.0);
        assert!(approx_eq(record.single_profit(), -17.5));
    }
    // 40 - 3 * (2.5 + 15)
    assert!(approx_eq(book.total_income(), -12.5));
    assert!(approx_eq(book.reback_income(), 60.0 / 0.9 * 0.1));
}

#[test]
fn test_all_promotional_file_fails_without_output() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export(
        dir.path(),
        "订单数据0103-全部门店.xls",
        &[order_row("P1", "10", Some("0"))],
    );

    let err = OrderAnalysisApi::default().analyze_file(&input).unwrap_err();

    match &err {
        ApiError::Engine { file, source } => {
            assert!(file.ends_with("订单数据0103-全部门店.xls"));
            assert_eq!(*source, EngineError::DivisionByZero { total_orders: 1 });
        }
        other => panic!("expected Engine error, got {:?}", other),
    }
    assert!(!dir.path().join("订单数据0103分析.xlsx").exists());
}

#[test]
fn test_batch_continues_after_failed_file() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    write_export(dir.path(), "orders.xls", &[order_row("X", "10", Some("1"))]);
    write_export(
        dir.path(),
        "订单数据0104-全部门店.xls",
        &[order_row("G1", "30", Some("5"))],
    );

    let report = OrderAnalysisApi::default()
        .analyze_directory(dir.path())
        .unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        &report.failed[0],
        ApiError::Report { source: ReportError::NamingPattern(_), .. }
    ));
    assert!(report.failed[0].file().unwrap().ends_with("orders.xls"));
    assert!(dir.path().join("订单数据0104分析.xlsx").is_file());
}

#[test]
fn test_invalid_income_reports_row() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export(
        dir.path(),
        "订单数据0105-全部门店.xls",
        &[order_row("G1", "30", Some("5")), order_row("G2", "三十", Some("5"))],
    );

    let err = OrderAnalysisApi::default().analyze_file(&input).unwrap_err();

    match err {
        ApiError::Import {
            source: ImportError::TypeConversionError { row, field, value },
            ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(field, "商家实收金额");
            assert_eq!(value, "三十");
        }
        other => panic!("expected TypeConversionError, got {:?}", other),
    }
}

#[test]
fn test_invalid_income_after_blank_row_reports_source_row() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export(
        dir.path(),
        "订单数据0109-全部门店.xls",
        &[
            Vec::new(),
            order_row("G1", "30", Some("5")),
            order_row("G2", "bad", Some("5")),
        ],
    );

    let err = OrderAnalysisApi::default().analyze_file(&input).unwrap_err();

    match err {
        ApiError::Import {
            source: ImportError::TypeConversionError { row, value, .. },
            ..
        } => {
            assert_eq!(row, 3);
            assert_eq!(value, "bad");
        }
        other => panic!("expected TypeConversionError, got {:?}", other),
    }
}

#[test]
fn test_header_only_file_missing_column_is_schema_error() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export_with_headers(
        dir.path(),
        "订单数据0110-全部门店.xls",
        &["订单编号", "商家实收金额"],
        &[],
    );

    let err = OrderAnalysisApi::default().analyze_file(&input).unwrap_err();

    assert!(matches!(
        err,
        ApiError::Import { source: ImportError::SchemaError { ref column }, .. } if column == "下单日期"
    ));
    assert!(!dir.path().join("订单数据0110分析.xlsx").exists());
}

#[test]
fn test_malformed_config_is_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ \"profit\": ").unwrap();

    let err = OrderAnalysisApi::from_config_dir(dir.path()).err().unwrap();

    assert!(matches!(err, ApiError::Config(ConfigError::ParseError { .. })));
    assert!(err.file().is_none());
}

#[test]
fn test_config_dir_overrides_profit_rules() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{"profit": {"promoter_cost": 12.0}}"#,
    )
    .unwrap();

    let api = OrderAnalysisApi::from_config_dir(dir.path()).unwrap();

    assert_eq!(api.config().profit.promoter_cost, 12.0);
    assert_eq!(api.config().profit.meituan_fee, 2.5);
}

#[test]
fn test_missing_column_is_schema_error() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export_with_headers(
        dir.path(),
        "订单数据0106-全部门店.xls",
        &["订单编号", "下单日期", "来源平台", "商家实收金额"],
        &[vec![Some("G1"), Some("2024-01-01"), Some("美团"), Some("30")]],
    );

    let err = OrderAnalysisApi::default().analyze_file(&input).unwrap_err();

    assert!(matches!(
        err,
        ApiError::Import { source: ImportError::SchemaError { ref column }, .. } if column == "总配送费"
    ));
}

#[test]
fn test_profit_config_is_applied() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let input = write_export(
        dir.path(),
        "订单数据0107-全部门店.xls",
        &[order_row("G1", "100", Some("10")), order_row("P1", "50", Some("0"))],
    );

    let config = AnalysisConfig {
        profit: ProfitConfig {
            meituan_fee: 3.0,
            promoter_cost: 10.0,
            ..ProfitConfig::default()
        },
        ..AnalysisConfig::default()
    };
    let book = OrderAnalysisApi::new(config).build_order_book(&input).unwrap();

    assert!(approx_eq(book.real_table()[0].single_profit(), 87.0));
    assert!(approx_eq(book.promoter_table()[0].single_profit(), -13.0));
    assert!(approx_eq(book.total_income(), 87.0));
}

#[test]
fn test_output_files_are_not_rediscovered() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    write_export(
        dir.path(),
        "订单数据0108-全部门店.xls",
        &[order_row("G1", "30", Some("5"))],
    );

    let api = OrderAnalysisApi::default();
    let first = api.analyze_directory(dir.path()).unwrap();
    let second = api.analyze_directory(dir.path()).unwrap();

    assert_eq!(first.total(), 1);
    assert_eq!(second.total(), 1);
    assert_eq!(first.succeeded, second.succeeded);
}
