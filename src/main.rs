use glassify_notes::{export_note, Conf};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: {} <note_html_file> <output_path>", args[0]);
        return;
    }

    let input_path = &args[1];
    let output_path = &args[2];

    match fs::read_to_string(input_path) {
        Ok(content) => {
            let conf = Conf::default();
            match export_note(&content, output_path, &conf) {
                Ok(stats) => {
                    println!("导出完成！");
                    println!("导出格式: {:?}", stats.format);
                    println!("段落数量: {}", stats.paragraph_count);
                    println!("图片数量: {}", stats.image_count);
                    println!("写出字节: {}", stats.bytes_written);
                    println!("导出耗时: {}ms", stats.export_time);
                }
                Err(e) => {
                    println!("导出失败: {}", e);
                }
            }
        }
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
