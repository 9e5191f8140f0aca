pub mod note_constants;

use lazy_static::lazy_static;
use regex::Regex;
pub use note_constants::NoteConstants;

lazy_static! {
    // data-URI头部: data:<mime>[;base64],
    static ref DATA_URI_RE: Regex =
        Regex::new(r"^data:(?P<mime>[^;,]+)?(?:;(?P<enc>base64))?,").unwrap();
}

/// 提取data-URI声明的MIME类型
pub fn data_uri_mime(src: &str) -> Option<String> {
    DATA_URI_RE
        .captures(src)
        .and_then(|caps| caps.name("mime"))
        .map(|m| m.as_str().to_string())
}

/// 判断src是否为base64编码的data-URI
pub fn is_base64_data_uri(src: &str) -> bool {
    DATA_URI_RE
        .captures(src)
        .map_or(false, |caps| caps.name("enc").is_some())
}

/// 将PNG字节包装成可插入富文本的data-URI
///
/// 外壳从剪贴板取到图片后调用，返回值直接拼进编辑器的HTML
pub fn image_to_data_uri(png_bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", base64::encode(png_bytes))
}
