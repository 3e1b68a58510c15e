//! カラーパレット定義
//!
//! 色抽出は画像から計算せず、固定パレットを返す簡易実装。
//! 4種類のパレットを定義するが、現状の選択は常に風景パレット。

/// シーン別パレット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePalette {
    #[default]
    Landscape,
    Portrait,
    City,
    Nature,
}

impl ScenePalette {
    /// パレットの色（16進カラーコード4色）
    pub fn colors(&self) -> &'static [&'static str; 4] {
        match self {
            ScenePalette::Landscape => &["#4ade80", "#22d3ee", "#3b82f6", "#a855f7"],
            ScenePalette::Portrait => &["#fbbf24", "#fb923c", "#dc2626", "#9333ea"],
            ScenePalette::City => &["#6b7280", "#374151", "#1e40af", "#0ea5e9"],
            ScenePalette::Nature => &["#16a34a", "#15803d", "#65a30d", "#ca8a04"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePalette::Landscape => "landscape",
            ScenePalette::Portrait => "portrait",
            ScenePalette::City => "city",
            ScenePalette::Nature => "nature",
        }
    }
}

/// 画像の色を抽出（簡易版）
///
/// 画像内容にかかわらずデフォルトパレット（風景）を返す。
pub fn extract_colors() -> Vec<String> {
    ScenePalette::default()
        .colors()
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// 主要色（パレットの先頭3色）
pub fn dominant_colors(colors: &[String]) -> Vec<String> {
    colors.iter().take(3).cloned().collect()
}
