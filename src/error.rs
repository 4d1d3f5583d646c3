use std::fmt;

/// 文档处理错误
///
/// 种子文档（.docx）读取和解析过程中的错误，直接向上传播
#[derive(Debug)]
pub enum DocumentError {
    /// 文件不存在
    NotFound {
        path: String,
    },
    /// 打开文件失败
    OpenFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// ZIP 压缩包读取失败（.docx 本质上是一个 ZIP 包）
    ArchiveReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 压缩包中缺少 word/document.xml
    MissingDocumentXml {
        path: String,
    },
    /// XML 解析失败
    XmlParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound { path } => write!(f, "文档不存在: {}", path),
            DocumentError::OpenFailed { path, source } => {
                write!(f, "打开文档失败 ({}): {}", path, source)
            }
            DocumentError::ArchiveReadFailed { path, source } => {
                write!(f, "读取文档压缩包失败 ({}): {}", path, source)
            }
            DocumentError::MissingDocumentXml { path } => {
                write!(f, "文档缺少 word/document.xml: {}", path)
            }
            DocumentError::XmlParseFailed { source } => {
                write!(f, "文档 XML 解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::OpenFailed { source, .. }
            | DocumentError::ArchiveReadFailed { source, .. }
            | DocumentError::XmlParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// LLM 生成错误
///
/// 在生成器边界捕获为类型化错误；流程层决定如何展示（转为可显示字符串存入槽位）
#[derive(Debug)]
pub enum LlmError {
    /// 请求构建失败
    RequestBuildFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 调用失败（建立流式连接阶段）
    ApiCallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 流式传输中断（逐段接收阶段）
    StreamInterrupted {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::RequestBuildFailed { source } => {
                write!(f, "LLM 请求构建失败: {}", source)
            }
            LlmError::ApiCallFailed { model, source } => {
                write!(f, "LLM API调用失败 (模型: {}): {}", model, source)
            }
            LlmError::StreamInterrupted { model, source } => {
                write!(f, "LLM 流式响应中断 (模型: {}): {}", model, source)
            }
        }
    }
}

impl std::error::Error for LlmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LlmError::RequestBuildFailed { source }
            | LlmError::ApiCallFailed { source, .. }
            | LlmError::StreamInterrupted { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 导出错误
///
/// 文件格式编码或写盘失败，中止当前操作
#[derive(Debug)]
pub enum ExportError {
    /// DOCX 编码失败
    DocxEncodeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// PDF 编码失败
    PdfEncodeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::DocxEncodeFailed { source } => {
                write!(f, "DOCX编码失败: {}", source)
            }
            ExportError::PdfEncodeFailed { source } => {
                write!(f, "PDF编码失败: {}", source)
            }
            ExportError::WriteFailed { path, source } => {
                write!(f, "写入导出文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::DocxEncodeFailed { source }
            | ExportError::PdfEncodeFailed { source }
            | ExportError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
///
/// 作业文件中控件级约束（范围）的校验失败是硬错误；
/// 百分比总和校验不在此处（它只是建议性警告，见流程层）
#[derive(Debug)]
pub enum ConfigError {
    /// 数值超出允许范围
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// 必填字段为空
    EmptyField {
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ValueOutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "配置项 {} 超出范围: 值 {} 不在 [{}, {}] 内",
                    field, value, min, max
                )
            }
            ConfigError::EmptyField { field } => {
                write!(f, "配置项 {} 不能为空", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<...> for anyhow::Error，
// anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<quick_xml::Error> for DocumentError {
    fn from(err: quick_xml::Error) -> Self {
        DocumentError::XmlParseFailed {
            source: Box::new(err),
        }
    }
}

impl From<lopdf::Error> for ExportError {
    fn from(err: lopdf::Error) -> Self {
        ExportError::PdfEncodeFailed {
            source: Box::new(err),
        }
    }
}

impl From<zip::result::ZipError> for ExportError {
    fn from(err: zip::result::ZipError) -> Self {
        ExportError::DocxEncodeFailed {
            source: Box::new(err),
        }
    }
}

// ========== 便捷构造函数 ==========

impl DocumentError {
    /// 创建压缩包读取错误
    pub fn archive_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DocumentError::ArchiveReadFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

impl LlmError {
    /// 创建请求构建错误
    pub fn request_build_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        LlmError::RequestBuildFailed {
            source: Box::new(source),
        }
    }

    /// 创建 API 调用错误
    pub fn api_call_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LlmError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }

    /// 创建流式中断错误
    pub fn stream_interrupted(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LlmError::StreamInterrupted {
            model: model.into(),
            source: Box::new(source),
        }
    }
}

impl ExportError {
    /// 创建写入文件错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ExportError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
