use scraper::ElementRef;
use unicode_segmentation::UnicodeSegmentation;

// 拍平元素的纯文本内容
// 与富文本控件的取文本语义一致：拼接所有后代文本节点，样式标签本身不产出任何字符
pub fn flatten_element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

// 以字素簇统计文本长度，组合字符算一个
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}
