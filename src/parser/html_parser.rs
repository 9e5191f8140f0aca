use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use thiserror::Error;

use crate::models::{NodeKind, NoteNode, NoteProperties};
use crate::parser::text_processor::{flatten_element_text, grapheme_count};
use crate::utils;

lazy_static! {
    static ref BODY_SELECTOR: Selector = Selector::parse("body").unwrap();
}

/// HTML解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteParseError {
    #[error("HTML内容缺少body元素")]
    MissingBody,

    #[error("图片元素缺少src属性")]
    MissingImageSource,

    #[error("图片src不是有效的data-URI: {0}")]
    MalformedDataUri(String),
}

/// 解析结果
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    /// 按文档顺序排列的内容节点
    pub nodes: Vec<NoteNode>,
    /// 统计信息
    pub properties: NoteProperties,
    /// 解析耗时（毫秒）
    pub parse_time: u64,
}

/// 便签HTML解析器
///
/// 输入是富文本编辑器导出的HTML快照，输出只保留两类有导出意义的节点：
/// 段落（取拍平后的纯文本）和图片（取原始src）
pub struct NoteHtmlParser;

impl NoteHtmlParser {
    pub fn new() -> Self {
        NoteHtmlParser
    }

    /// 解析便签HTML内容
    ///
    /// 深度优先遍历body的所有后代节点，不只是直接子节点。
    /// 嵌套在段落里的图片会在段落文本之外再作为独立节点被访问一次，
    /// 这个重复访问是沿袭下来的遍历语义，不做嵌套合并
    pub fn parse(&mut self, html: &str) -> Result<ParseOutput, NoteParseError> {
        let start_time = now_millis();

        let document = Html::parse_document(html);
        let body = document
            .select(&BODY_SELECTOR)
            .next()
            .ok_or(NoteParseError::MissingBody)?;

        let mut nodes = Vec::new();
        let mut properties = NoteProperties::default();

        for descendant in body.descendants() {
            let element = match ElementRef::wrap(descendant) {
                Some(el) => el,
                None => continue,
            };

            match NodeKind::from_tag(element.value().name()) {
                NodeKind::Paragraph => {
                    let text = flatten_element_text(element);
                    properties.paragraph_count += 1;
                    properties.text_graphemes += grapheme_count(&text);
                    nodes.push(NoteNode::Paragraph(text));
                }
                NodeKind::Image => {
                    let src = element
                        .value()
                        .attr("src")
                        .ok_or(NoteParseError::MissingImageSource)?
                        .to_string();
                    properties.image_count += 1;
                    properties
                        .image_mimes
                        .push(utils::data_uri_mime(&src).unwrap_or_else(|| "unknown".to_string()));
                    nodes.push(NoteNode::Image(src));
                }
                NodeKind::Other => {}
            }
        }

        Ok(ParseOutput {
            nodes,
            properties,
            parse_time: now_millis().saturating_sub(start_time),
        })
    }
}

impl Default for NoteHtmlParser {
    fn default() -> Self {
        NoteHtmlParser::new()
    }
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
