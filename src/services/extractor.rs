//! 内容提取服务 - 业务能力层
//!
//! 只负责"从 .docx 提取纯文本"能力，不关心流程。
//! .docx 是一个 ZIP 包，正文在 word/document.xml 里

use crate::error::DocumentError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

/// 从 .docx 文件提取纯文本
///
/// 所有段落文本用单个空格连接成一个扁平字符串，
/// 不保留任何其他文档结构；空段落也参与连接（会产生连续空格），
/// 与原实现逐段 join 的行为一致
///
/// # 参数
/// - `path`: 文档路径
///
/// # 返回
/// 返回提取出的全文
pub fn extract_text(path: &str) -> Result<String, DocumentError> {
    if !Path::new(path).exists() {
        return Err(DocumentError::NotFound {
            path: path.to_string(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| DocumentError::OpenFailed {
        path: path.to_string(),
        source: Box::new(e),
    })?;

    extract_text_from_bytes(&bytes, path)
}

/// 从内存中的 .docx 字节提取纯文本
pub fn extract_text_from_bytes(bytes: &[u8], label: &str) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocumentError::archive_read_failed(label, e))?;

    let mut xml = String::new();
    match archive.by_name("word/document.xml") {
        Ok(mut entry) => {
            entry
                .read_to_string(&mut xml)
                .map_err(|e| DocumentError::archive_read_failed(label, e))?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(DocumentError::MissingDocumentXml {
                path: label.to_string(),
            });
        }
        Err(e) => return Err(DocumentError::archive_read_failed(label, e)),
    }

    let paragraphs = collect_paragraphs(&xml)?;
    debug!("提取完成: {} 个段落", paragraphs.len());

    Ok(paragraphs.join(" "))
}

/// 逐段收集 w:p 的文本（段内 w:t 直接拼接，不加分隔）
fn collect_paragraphs(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(String::new()),
                b"t" => in_text_run = current.is_some(),
                _ => {}
            },
            Event::Empty(e) => {
                // 自闭合的 <w:p/> 是一个空段落
                if e.local_name().as_ref() == b"p" {
                    paragraphs.push(String::new());
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            Event::Text(e) => {
                if in_text_run {
                    if let Some(current) = current.as_mut() {
                        let decoded = e.decode().map_err(|err| DocumentError::XmlParseFailed {
                            source: Box::new(err),
                        })?;
                        let text = quick_xml::escape::unescape(&decoded).map_err(|err| {
                            DocumentError::XmlParseFailed {
                                source: Box::new(err),
                            }
                        })?;
                        current.push_str(&text);
                    }
                }
            }
            Event::GeneralRef(e) => {
                // quick-xml 把 &amp; 之类的实体引用作为独立事件发出，
                // 需要在文本运行中把它解析回对应字符
                if in_text_run {
                    if let Some(current) = current.as_mut() {
                        let name = e.decode().map_err(|err| DocumentError::XmlParseFailed {
                            source: Box::new(err),
                        })?;
                        let escaped = format!("&{};", name);
                        let text = quick_xml::escape::unescape(&escaped).map_err(|err| {
                            DocumentError::XmlParseFailed {
                                source: Box::new(err),
                            }
                        })?;
                        current.push_str(&text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
