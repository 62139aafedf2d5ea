// All LLM prompt constants for the Generation module.
// Prompt composition is pure string substitution, no error conditions.

use crate::models::template::IMAGE_AREAS;

/// Template generation prompt. Replace `{prompt}` with the user's raw
/// request before sending. States the exact output shape, the closed
/// color-word→hex mapping, and the empty-string rule for unspecified fields.
pub const TEMPLATE_PROMPT_TEMPLATE: &str = r##"あなたはチラシ・POP生成のエキスパートです。ユーザーの要望を分析し、以下のJSON形式でテンプレートを生成してください。

返答は必ずJSON形式のみで、他の説明は不要です。

{
  "imageArea": "{image_areas} のいずれか",
  "catchCopy": "魅力的なキャッチコピー（20-40文字程度）",
  "description": "補足説明（50-100文字程度）",
  "storeInfo": {
    "name": "店舗名（ユーザーが指定した場合）",
    "address": "住所（ユーザーが指定した場合）",
    "hours": "営業時間（ユーザーが指定した場合）",
    "tel": "電話番号（ユーザーが指定した場合）",
    "access": "アクセス情報（ユーザーが指定した場合）"
  },
  "colorTheme": "#HEX形式の色コード（ユーザーの要望に基づく）"
}

ユーザーが具体的な情報を提供していない項目は、空文字列""にしてください。
色は青系=#3B82F6、緑系=#10B981、オレンジ系=#F59E0B、赤系=#EF4444、紫系=#8B5CF6、ピンク系=#EC4899を基準にしてください。

ユーザーの要望: {prompt}"##;

/// Flyer copy prompt. Replace `{title}`, `{description}`, `{audience_line}`.
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"あなたはプロのコピーライターです。以下の情報を基に、魅力的なフライヤーのコンテンツを作成してください。

タイトル: {title}
説明: {description}
{audience_line}
以下の形式でJSONレスポンスを返してください：
{
  "headline": "キャッチーなメインタイトル（20文字以内）",
  "subheadline": "補助的な説明文（30文字以内）",
  "bodyText": "詳細な説明文（100文字以内）",
  "callToAction": "行動を促す文言（15文字以内）"
}"#;

/// Composes the full template-generation instruction, embedding the user's
/// raw request verbatim at the end.
pub fn compose_template_prompt(user_request: &str) -> String {
    TEMPLATE_PROMPT_TEMPLATE
        .replace("{image_areas}", &IMAGE_AREAS.join(" | "))
        .replace("{prompt}", user_request)
}

/// Composes the flyer-copy instruction. `target_audience` adds an extra
/// context line when present.
pub fn compose_content_prompt(
    title: &str,
    description: &str,
    target_audience: Option<&str>,
) -> String {
    let audience_line = match target_audience {
        Some(audience) => format!("ターゲット層: {audience}\n"),
        None => String::new(),
    };
    CONTENT_PROMPT_TEMPLATE
        .replace("{title}", title)
        .replace("{description}", description)
        .replace("{audience_line}", &audience_line)
}
