use std::{
    fs,
    sync::Arc,
};

use eframe::egui;

/// Registers a system CJK font ahead of egui's defaults so hanzi render. No
/// font is bundled; when none of the candidates exist we keep the defaults
/// and say so on stderr.
pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    match load_system_cjk_font() {
        Some((path, bytes)) => {
            fonts
                .font_data
                .insert("han".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "han".to_owned());

            fonts.families.entry(egui::FontFamily::Monospace).or_default().push("han".to_owned());

            println!("Loaded CJK font: {path}");
        }
        None => {
            eprintln!("No system CJK font found; Chinese text may not render.");
        }
    }

    ctx.set_fonts(fonts);
}

fn load_system_cjk_font() -> Option<(String, Vec<u8>)> {
    for path in font_candidates() {
        if let Ok(bytes) = fs::read(path) {
            return Some((path.to_string(), bytes));
        }
    }

    None
}

#[cfg(target_os = "macos")]
fn font_candidates() -> &'static [&'static str] {
    &[
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Light.ttc",
        "/System/Library/Fonts/Supplemental/Songti.ttc",
    ]
}

#[cfg(target_os = "windows")]
fn font_candidates() -> &'static [&'static str] {
    &[
        "C:\\Windows\\Fonts\\msyh.ttc",
        "C:\\Windows\\Fonts\\msyh.ttf",
        "C:\\Windows\\Fonts\\simsun.ttc",
    ]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn font_candidates() -> &'static [&'static str] {
    &[
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/source-han-sans/SourceHanSans.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
        "/usr/share/fonts/truetype/arphic/uming.ttc",
    ]
}
