// ==========================================
// 订单利润分析 API
// ==========================================
// 单文件流程: 推导输出名 → 导入 → 分类 → 汇总 → 写报表
// 目录流程: 逐个文件串行处理，单个文件失败不影响后续文件
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{AnalysisConfig, ConfigManager};
use crate::domain::order_book::{OrderBook, OrderSummary};
use crate::engine::{OrderBookAggregator, OrderClassifier};
use crate::importer::{find_order_files, OrderImporter};
use crate::report::{derive_output_name, ReportBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAnalysis {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: OrderSummary,
}

/// 目录批处理结果
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<FileAnalysis>,
    pub failed: Vec<ApiError>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// 订单利润分析API
pub struct OrderAnalysisApi {
    config: AnalysisConfig,
    importer: OrderImporter,
    classifier: OrderClassifier,
    aggregator: OrderBookAggregator,
    report_builder: ReportBuilder,
}

impl OrderAnalysisApi {
    /// 创建新的OrderAnalysisApi实例
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            classifier: OrderClassifier::new(config.profit.clone()),
            config,
            importer: OrderImporter::default(),
            aggregator: OrderBookAggregator::new(),
            report_builder: ReportBuilder::new(),
        }
    }

    /// 从目录下的 order_analysis.json 加载配置并创建实例（文件不存在时使用默认值）
    pub fn from_config_dir(dir: &Path) -> ApiResult<Self> {
        let config = ConfigManager::load(dir)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// 导入并汇总单个文件（不写报表）
    pub fn build_order_book(&self, input: &Path) -> ApiResult<OrderBook> {
        let file = input.display().to_string();

        let raws = self
            .importer
            .import_from_file(input)
            .map_err(|source| ApiError::Import {
                file: file.clone(),
                source,
            })?;

        let records = self.classifier.classify_all(raws);

        self.aggregator
            .aggregate(records)
            .map_err(|source| ApiError::Engine { file, source })
    }

    /// 分析单个文件并写出报表
    ///
    /// # 返回
    /// - Ok(FileAnalysis): 输出路径与汇总
    /// - Err(ApiError): 带输入文件路径的致命错误
    #[instrument(skip(self, input), fields(file = %input.display()))]
    pub fn analyze_file(&self, input: &Path) -> ApiResult<FileAnalysis> {
        let file = input.display().to_string();

        let output = derive_output_name(input).map_err(|source| ApiError::Report {
            file: file.clone(),
            source,
        })?;

        let book = self.build_order_book(input)?;
        info!(summary = %book.summary(), "订单簿已生成");

        self.report_builder
            .build(&book, &output)
            .map_err(|source| ApiError::Report { file, source })?;
        info!(output = %output.display(), "分析完成");

        Ok(FileAnalysis {
            input: input.to_path_buf(),
            output,
            summary: book.summary(),
        })
    }

    /// 分析目录下所有订单文件
    ///
    /// # 返回
    /// - Ok(BatchReport): 每个文件的成功/失败结果
    /// - Err(ApiError::Discovery): 目录无法读取
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn analyze_directory(&self, dir: &Path) -> ApiResult<BatchReport> {
        let files = find_order_files(dir, &self.config.discovery).map_err(ApiError::Discovery)?;

        let mut report = BatchReport::default();
        for input in files {
            match self.analyze_file(&input) {
                Ok(analysis) => report.succeeded.push(analysis),
                Err(e) => {
                    error!(file = %input.display(), error = %e, "文件处理失败，继续下一个文件");
                    report.failed.push(e);
                }
            }
        }

        info!(
            total = report.total(),
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "目录分析完成"
        );
        Ok(report)
    }
}

impl Default for OrderAnalysisApi {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
