//! 导出服务 - 业务能力层
//!
//! 三个相互独立的无状态转换：题目文本 -> TXT / DOCX / PDF 字节。
//! 编码或写盘失败直接向上传播，中止当前动作

use crate::error::ExportError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// DOCX 固定标题
pub const DOCX_HEADING: &str = "Multiple Choice Questions";

// PDF 版面常量，沿用原实现的布局（Letter 纸、Helvetica 10、
// 左边距 40、首行基线 750、行距 12）
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const LEFT_MARGIN: i64 = 40;
const FIRST_BASELINE: i64 = 750;
const BOTTOM_MARGIN: i64 = 40;
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 12;

/// 每页可容纳的行数（基线从 750 递减到不低于下边距）
const LINES_PER_PAGE: usize = ((FIRST_BASELINE - BOTTOM_MARGIN) / LEADING) as usize + 1;

/// 纯文本导出：原样编码为 UTF-8 字节
pub fn export_txt(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// DOCX 导出
///
/// 生成一个最小的 OOXML 包：固定标题（Title 样式）加一个正文段落。
/// 题目文本整体是单个段落，其中的换行用 <w:br/> 保留
pub fn export_docx(text: &str) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", content_types_xml()),
        ("_rels/.rels", package_rels_xml()),
        ("word/_rels/document.xml.rels", document_rels_xml()),
        ("word/styles.xml", styles_xml()),
        ("word/document.xml", document_xml(text)),
    ];

    for (name, xml) in parts {
        writer.start_file(name, options)?;
        writer
            .write_all(xml.as_bytes())
            .map_err(|e| ExportError::DocxEncodeFailed {
                source: Box::new(e),
            })?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// PDF 导出
///
/// 左对齐逐行排版；基线越过下边距时另起一页，
/// 长文本不会再被画出页面外丢掉
pub fn export_pdf(text: &str) -> Result<Vec<u8>, ExportError> {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for chunk in lines.chunks(LINES_PER_PAGE) {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new("Td", vec![LEFT_MARGIN.into(), FIRST_BASELINE.into()]),
        ];
        for line in chunk {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|err| ExportError::PdfEncodeFailed {
            source: Box::new(err),
        })?;

    debug!("PDF 编码完成: {} 页, {} 字节", page_count, buffer.len());

    Ok(buffer)
}

/// 把导出字节写入导出目录
///
/// # 参数
/// - `export_dir`: 导出目录（不存在时自动创建）
/// - `filename`: 文件名
///
/// # 返回
/// 返回写入的完整路径
pub fn write_export(export_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(export_dir)
        .map_err(|e| ExportError::write_failed(export_dir.display().to_string(), e))?;

    let path = export_dir.join(filename);
    std::fs::write(&path, bytes)
        .map_err(|e| ExportError::write_failed(path.display().to_string(), e))?;

    Ok(path)
}

// ========== OOXML 包的各个部件 ==========

fn content_types_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#
        .to_string()
}

fn package_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#
        .to_string()
}

fn document_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#
        .to_string()
}

fn styles_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:rPr><w:b/><w:sz w:val="56"/></w:rPr></w:style></w:styles>"#
        .to_string()
}

fn document_xml(text: &str) -> String {
    let mut body_runs = String::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            body_runs.push_str("<w:br/>");
        }
        body_runs.push_str(&format!(
            r#"<w:t xml:space="preserve">{}</w:t>"#,
            quick_xml::escape::escape(line)
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>{}</w:t></w:r></w:p><w:p><w:r>{}</w:r></w:p></w:body></w:document>"#,
        DOCX_HEADING, body_runs
    )
}
