//! プロンプト生成モジュール
//!
//! 解析結果（物体名・色）とスタイルから画像生成AI向けのプロンプトを組み立てる:
//! - PromptStyle: スタイル別の固定記述子
//! - build_prompt: 5行テンプレートでプロンプトを生成
//! - optimize_prompt: 既存プロンプトに最適化フレーズを1つ追記

use crate::types::AnalysisResult;
use rand::Rng;

/// 修飾語リスト（2語を非復元抽出）
pub const MODIFIERS: &[&str] = &[
    "beautiful",
    "stunning",
    "epic",
    "breathtaking",
    "serene",
    "vibrant",
    "majestic",
    "dramatic",
];

/// 品質フレーズ（1つを一様抽選）
pub const QUALITY_PHRASES: &[&str] = &[
    "masterpiece, best quality, ultra detailed",
    "intricate details, sharp focus, professional",
    "award winning, high resolution, 8K",
];

/// 最適化フレーズ（optimize_promptで1つ追記）
pub const OPTIMIZE_PHRASES: &[&str] = &[
    "Add intricate details and textures",
    "Enhance lighting and shadows",
    "Improve composition and framing",
    "Add atmospheric effects",
    "Increase contrast and vibrancy",
    "Add depth of field effect",
    "Enhance color grading",
];

/// 生成ツール向けの固定フラグ（テンプレート末尾）
pub const PROMPT_SUFFIX: &str = "--ar 16:9 --v 5.2 --style raw";

/// プロンプトスタイル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptStyle {
    #[default]
    Photorealistic,
    Anime,
    OilPainting,
    DigitalArt,
    Minimalist,
    Cinematic,
}

impl PromptStyle {
    pub const ALL: &'static [PromptStyle] = &[
        PromptStyle::Photorealistic,
        PromptStyle::Anime,
        PromptStyle::OilPainting,
        PromptStyle::DigitalArt,
        PromptStyle::Minimalist,
        PromptStyle::Cinematic,
    ];

    /// UIのselect値に対応するキー
    pub fn key(&self) -> &'static str {
        match self {
            PromptStyle::Photorealistic => "photorealistic",
            PromptStyle::Anime => "anime",
            PromptStyle::OilPainting => "oil_painting",
            PromptStyle::DigitalArt => "digital_art",
            PromptStyle::Minimalist => "minimalist",
            PromptStyle::Cinematic => "cinematic",
        }
    }

    /// UI表示名
    pub fn label(&self) -> &'static str {
        match self {
            PromptStyle::Photorealistic => "フォトリアル",
            PromptStyle::Anime => "アニメ",
            PromptStyle::OilPainting => "油絵",
            PromptStyle::DigitalArt => "デジタルアート",
            PromptStyle::Minimalist => "ミニマル",
            PromptStyle::Cinematic => "シネマティック",
        }
    }

    /// スタイル別の固定記述子
    pub fn descriptor(&self) -> &'static str {
        match self {
            PromptStyle::Photorealistic => {
                "photorealistic, hyperdetailed, 8K, ultra realistic, detailed textures"
            }
            PromptStyle::Anime => {
                "anime style, vibrant colors, cel shading, Japanese animation, stylized"
            }
            PromptStyle::OilPainting => {
                "oil painting, brush strokes, canvas texture, classical art, masterpiece"
            }
            PromptStyle::DigitalArt => {
                "digital art, concept art, trending on artstation, detailed illustration"
            }
            PromptStyle::Minimalist => {
                "minimalist, clean lines, simple composition, modern art, elegant"
            }
            PromptStyle::Cinematic => {
                "cinematic, dramatic lighting, film still, movie scene, professional photography"
            }
        }
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PromptStyle::ALL
            .iter()
            .copied()
            .find(|style| style.key() == s)
            .ok_or_else(|| format!("Unknown style: {}", s))
    }
}

/// 非復元抽出
///
/// 不変リストからcount個をランダムに選ぶ。元のリストは変更しない。
///
/// # Arguments
/// * `rng` - 乱数生成器（テストではシード固定）
/// * `items` - 抽出元リスト
/// * `count` - 抽出個数（リスト長を超える場合は全件）
pub fn sample_without_replacement<R: Rng>(
    rng: &mut R,
    items: &[&'static str],
    count: usize,
) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = items.to_vec();
    let mut selected = Vec::with_capacity(count.min(pool.len()));

    while selected.len() < count && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        selected.push(pool.swap_remove(idx));
    }

    selected
}

/// プロンプトを生成
///
/// 5行テンプレート:
/// 1. 修飾語2語 + 物体名（上位5件）
/// 2. スタイル記述子
/// 3. 品質フレーズ
/// 4. カラースキーム（色がなければ空行）
/// 5. 生成ツール向け固定フラグ
pub fn build_prompt<R: Rng>(
    result: &AnalysisResult,
    style: PromptStyle,
    rng: &mut R,
) -> String {
    let objects = result.top_object_names(5);
    let colors: Vec<&str> = result.colors.iter().take(3).map(|c| c.as_str()).collect();

    let modifiers = sample_without_replacement(rng, MODIFIERS, 2);
    let quality = QUALITY_PHRASES[rng.gen_range(0..QUALITY_PHRASES.len())];

    let color_line = if colors.is_empty() {
        String::new()
    } else {
        format!("color scheme: {}", colors.join(", "))
    };

    format!(
        "{} {}\n{}\n{}\n{}\n{}",
        modifiers.join(", "),
        objects.join(", "),
        style.descriptor(),
        quality,
        color_line,
        PROMPT_SUFFIX,
    )
}

/// プロンプトを最適化
///
/// 最適化フレーズを1つ一様抽選し、既存テキストの末尾に追記する。
/// 既存の内容は解析も書き換えもしない。
pub fn optimize_prompt<R: Rng>(current: &str, rng: &mut R) -> String {
    let phrase = OPTIMIZE_PHRASES[rng.gen_range(0..OPTIMIZE_PHRASES.len())];
    format!("{}\n{}", current, phrase)
}
